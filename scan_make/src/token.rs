use restream::StreamToken;

/// Classification of a database-dump paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParaKind {
    /// First line is a rule declaration (`targets...: prerequisites...`)
    Rule,
    /// Anything else
    Text,
}

/// One blank-line-separated paragraph of the filtered dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParaToken {
    pub kind: ParaKind,
    /// Paragraph text, newline-terminated lines
    pub text: String,
    /// Global character index of the paragraph start
    pub index: usize,
}

impl StreamToken for ParaToken {
    fn text(&self) -> &str {
        &self.text
    }
}

/// Rule-level token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// A target or prerequisite name
    Word,
    Colon,
    Pipe,
    Newline,
    /// One recipe line, leading tab and trailing newline stripped
    Recipe,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleToken {
    pub kind: RuleKind,
    pub text: String,
    /// Global character index where the token text starts
    pub index: usize,
}

impl RuleToken {
    pub(crate) fn describe(&self) -> String {
        match self.kind {
            RuleKind::Word => format!("word {:?}", self.text),
            RuleKind::Colon => "':'".to_string(),
            RuleKind::Pipe => "'|'".to_string(),
            RuleKind::Newline => "end of line".to_string(),
            RuleKind::Recipe => "recipe line".to_string(),
        }
    }
}

impl StreamToken for RuleToken {
    fn text(&self) -> &str {
        &self.text
    }
}
