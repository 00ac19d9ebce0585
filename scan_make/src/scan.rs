//! Pipeline composition: one lazy target sequence out of the dump.

use std::collections::VecDeque;

use gcfifo::{IterCursor, Pull, PullCursor};
use restream::{CharStream, TokenStream};

use crate::error::Result;
use crate::filter::{CommentFilter, LineChars, SectionFilter};
use crate::lexer::{ParagraphLexer, RuleChars, RuleLexer};
use crate::parser::RuleParser;
use crate::target::Target;
use crate::token::{ParaKind, RuleToken};

/// A boxed stage seam, so the composed pipeline has a nameable type.
pub type BoxedPull<'a, T> = Box<dyn Pull<Item = T> + 'a>;

/// Lazy sequence of targets from the streaming pipeline.
///
/// Each `next` call pulls exactly as far through the stage cascade as one
/// more target requires. After the first error the sequence ends.
pub struct TargetScan<'a> {
    parser: RuleParser<TokenStream<PullCursor<BoxedPull<'a, RuleToken>>>>,
    pending: VecDeque<Target>,
    failed: bool,
}

impl Iterator for TargetScan<'_> {
    type Item = Result<Target>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if let Some(target) = self.pending.pop_front() {
                return Some(Ok(target));
            }
            match self.parser.next_rule() {
                Ok(Some(rule)) => self.pending.extend(rule.into_targets()),
                Ok(None) => return None,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Compose the streaming pipeline over a line source.
///
/// line source → section/comment filters → characters → stream adapter →
/// paragraph lexer → rule-paragraph projection → stream adapter → rule
/// lexer → stream adapter → rule parser → targets.
///
/// # Errors
///
/// From priming the stream adapters on the first elements.
pub fn scan_lines<'a, I>(lines: I) -> Result<TargetScan<'a>>
where
    I: Iterator<Item = String> + 'a,
{
    let lines = CommentFilter::new(SectionFilter::new(lines));
    let chars = CharStream::new(IterCursor::new(LineChars::new(lines)))?;
    let paras = ParagraphLexer::new(chars);
    let projected: BoxedPull<'a, char> = Box::new(RuleChars::new(paras));
    let rule_chars = CharStream::new(PullCursor::new(projected))?;
    let lexer: BoxedPull<'a, RuleToken> = Box::new(RuleLexer::new(rule_chars));
    let tokens = TokenStream::new(PullCursor::new(lexer))?;
    Ok(TargetScan {
        parser: RuleParser::new(tokens),
        pending: VecDeque::new(),
        failed: false,
    })
}

/// Run the same stages as [`scan_lines`], materializing each intermediate
/// sequence. For dump text already held in memory.
///
/// # Errors
///
/// Same conditions as draining a [`TargetScan`].
pub fn scan_dump(text: &str) -> Result<Vec<Target>> {
    let lines = CommentFilter::new(SectionFilter::new(text.lines().map(str::to_owned)));
    let mut section = String::new();
    for line in lines {
        section.push_str(&line);
        section.push('\n');
    }

    let chars = CharStream::new(IterCursor::new(section.chars()))?;
    let mut paras = ParagraphLexer::new(chars);
    let mut rule_text = String::new();
    while let Some(para) = paras.pull()? {
        if para.kind == ParaKind::Rule {
            rule_text.push_str(&para.text);
            if !rule_text.ends_with('\n') {
                rule_text.push('\n');
            }
        }
    }

    let chars = CharStream::new(IterCursor::new(rule_text.chars()))?;
    let mut lexer = RuleLexer::new(chars);
    let mut rule_tokens = Vec::new();
    while let Some(token) = lexer.pull()? {
        rule_tokens.push(token);
    }

    let tokens = TokenStream::new(IterCursor::new(rule_tokens.into_iter()))?;
    let mut parser = RuleParser::new(tokens);
    let mut targets = Vec::new();
    while let Some(rule) = parser.next_rule()? {
        targets.extend(rule.into_targets());
    }
    Ok(targets)
}
