use log::debug;
use restream::TokenSource;

use crate::error::{Error, Result};
use crate::token::{RuleKind, RuleToken};

/// One parsed rule: several target names may share one prerequisite list
/// and recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub targets: Vec<String>,
    pub prerequisites: Vec<String>,
    pub order_only: Vec<String>,
    pub recipes: Vec<String>,
}

/// Recognizes `targets+ ':' ':'? prereq* ('|' order-only*)? recipe*` over a
/// rule-token stream, one rule per call.
#[derive(Debug)]
pub struct RuleParser<S: TokenSource<Token = RuleToken>> {
    tokens: S,
}

impl<S: TokenSource<Token = RuleToken>> RuleParser<S> {
    pub fn new(tokens: S) -> Self {
        RuleParser { tokens }
    }

    /// Parse the next rule, or `None` at the end of input.
    ///
    /// # Errors
    ///
    /// `Error::UnexpectedToken` on malformed rule text; `Error::Stream` on
    /// adapter failures.
    pub fn next_rule(&mut self) -> Result<Option<Rule>> {
        while matches!(self.peek_kind()?, Some(RuleKind::Newline)) {
            self.advance()?;
        }
        if self.tokens.lt(1)?.is_none() {
            return Ok(None);
        }

        let mut targets = Vec::new();
        loop {
            match self.tokens.lt(1)? {
                Some(t) if t.kind == RuleKind::Word => {
                    targets.push(t.text);
                    self.advance()?;
                }
                Some(t) if t.kind == RuleKind::Colon && !targets.is_empty() => {
                    self.advance()?;
                    break;
                }
                other => return Err(self.unexpected("a target name or ':'", other)),
            }
        }
        // make's double-colon rules
        if matches!(self.peek_kind()?, Some(RuleKind::Colon)) {
            self.advance()?;
        }

        let mut rule = Rule {
            targets,
            prerequisites: Vec::new(),
            order_only: Vec::new(),
            recipes: Vec::new(),
        };
        let mut saw_pipe = false;
        loop {
            let Some(t) = self.tokens.lt(1)? else { break };
            match t.kind {
                RuleKind::Word => {
                    if saw_pipe {
                        rule.order_only.push(t.text);
                    } else {
                        rule.prerequisites.push(t.text);
                    }
                    self.advance()?;
                }
                RuleKind::Pipe if !saw_pipe => {
                    saw_pipe = true;
                    self.advance()?;
                }
                RuleKind::Recipe => {
                    // inline recipe on the declaration line
                    rule.recipes.push(t.text);
                    self.advance()?;
                }
                RuleKind::Newline => {
                    self.advance()?;
                    break;
                }
                _ => return Err(self.unexpected("a prerequisite", Some(t))),
            }
        }
        while let Some(t) = self.tokens.lt(1)? {
            if t.kind != RuleKind::Recipe {
                break;
            }
            rule.recipes.push(t.text);
            self.advance()?;
        }

        debug!(
            "parsed rule: {} target(s), {} prerequisite(s), {} recipe line(s)",
            rule.targets.len(),
            rule.prerequisites.len(),
            rule.recipes.len()
        );
        Ok(Some(rule))
    }

    fn peek_kind(&mut self) -> Result<Option<RuleKind>> {
        Ok(self.tokens.lt(1)?.map(|t| t.kind))
    }

    fn advance(&mut self) -> Result<()> {
        self.tokens.consume()?;
        Ok(())
    }

    fn unexpected(&mut self, expected: &'static str, found: Option<RuleToken>) -> Error {
        match found {
            Some(t) => Error::UnexpectedToken {
                expected,
                found: t.describe(),
                index: t.index,
            },
            None => Error::UnexpectedToken {
                expected,
                found: "end of input".to_string(),
                index: self.tokens.index(),
            },
        }
    }
}
