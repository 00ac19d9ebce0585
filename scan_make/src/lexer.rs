use gcfifo::{Pull, Result};
use restream::CharSource;

use crate::token::{ParaKind, ParaToken, RuleKind, RuleToken};

/// Groups the filtered dump's character stream into blank-line-separated
/// paragraphs and classifies each one.
///
/// A paragraph whose first line contains `:` and does not start with a tab
/// is a rule declaration; everything else is noise the later stages drop.
#[derive(Debug)]
pub struct ParagraphLexer<S: CharSource> {
    chars: S,
}

impl<S: CharSource> ParagraphLexer<S> {
    pub fn new(chars: S) -> Self {
        ParagraphLexer { chars }
    }

    /// Consume up to and including the paragraph's final newline, return
    /// the covered text. The caller pins the paragraph start.
    fn scan_paragraph(&mut self) -> Result<String> {
        let start = self.chars.index();
        loop {
            match self.chars.la_char(1)? {
                None => break,
                Some('\n') => {
                    self.chars.consume()?;
                    match self.chars.la_char(1)? {
                        None | Some('\n') => break,
                        Some(_) => {}
                    }
                }
                Some(_) => self.chars.consume()?,
            }
        }
        self.chars.get_text(start, self.chars.index() - 1)
    }
}

impl<S: CharSource> Pull for ParagraphLexer<S> {
    type Item = ParaToken;

    fn pull(&mut self) -> Result<Option<ParaToken>> {
        while matches!(self.chars.la_char(1)?, Some('\n')) {
            self.chars.consume()?;
        }
        if self.chars.la_char(1)?.is_none() {
            return Ok(None);
        }
        let index = self.chars.index();
        let pin = self.chars.mark()?;
        let text = self.scan_paragraph();
        self.chars.release(pin);
        let text = text?;
        let first_line = text.split('\n').next().unwrap_or("");
        let kind = if !text.starts_with('\t') && first_line.contains(':') {
            ParaKind::Rule
        } else {
            ParaKind::Text
        };
        Ok(Some(ParaToken { kind, text, index }))
    }
}

/// Token→character projection: flattens rule paragraphs (only) back into a
/// character sequence, one trailing newline guaranteed per paragraph.
#[derive(Debug)]
pub struct RuleChars<P> {
    paras: P,
    buf: Vec<char>,
    pos: usize,
}

impl<P> RuleChars<P> {
    pub fn new(paras: P) -> Self {
        RuleChars {
            paras,
            buf: Vec::new(),
            pos: 0,
        }
    }
}

impl<P: Pull<Item = ParaToken>> Pull for RuleChars<P> {
    type Item = char;

    fn pull(&mut self) -> Result<Option<char>> {
        loop {
            if self.pos < self.buf.len() {
                let c = self.buf[self.pos];
                self.pos += 1;
                return Ok(Some(c));
            }
            match self.paras.pull()? {
                None => return Ok(None),
                Some(para) if para.kind == ParaKind::Rule => {
                    self.buf.clear();
                    self.buf.extend(para.text.chars());
                    if self.buf.last() != Some(&'\n') {
                        self.buf.push('\n');
                    }
                    self.pos = 0;
                }
                Some(_) => {}
            }
        }
    }
}

/// Tokenizes rule paragraphs: words, `:`, `|`, newlines, and recipe lines.
///
/// A tab at the start of a line introduces a recipe; the emitted token text
/// carries neither the tab nor the trailing newline. An inline recipe after
/// `;` on the declaration line is emitted the same way.
#[derive(Debug)]
pub struct RuleLexer<S: CharSource> {
    chars: S,
    at_line_start: bool,
}

impl<S: CharSource> RuleLexer<S> {
    pub fn new(chars: S) -> Self {
        RuleLexer {
            chars,
            at_line_start: true,
        }
    }

    fn read_line_text(&mut self) -> Result<String> {
        let pin = self.chars.mark()?;
        let text = self.scan_line();
        self.chars.release(pin);
        text
    }

    /// Consume to the end of the line, newline excluded.
    fn scan_line(&mut self) -> Result<String> {
        let start = self.chars.index();
        while let Some(c) = self.chars.la_char(1)? {
            if c == '\n' {
                break;
            }
            self.chars.consume()?;
        }
        if self.chars.index() == start {
            return Ok(String::new());
        }
        self.chars.get_text(start, self.chars.index() - 1)
    }

    fn scan_word(&mut self) -> Result<String> {
        let start = self.chars.index();
        while let Some(c) = self.chars.la_char(1)? {
            if matches!(c, ' ' | '\t' | '\n' | ':' | '|' | ';') {
                break;
            }
            self.chars.consume()?;
        }
        self.chars.get_text(start, self.chars.index() - 1)
    }

    fn lex_recipe_line(&mut self) -> Result<RuleToken> {
        let index = self.chars.index();
        let text = self.read_line_text()?;
        if matches!(self.chars.la_char(1)?, Some('\n')) {
            self.chars.consume()?;
            self.at_line_start = true;
        }
        Ok(RuleToken {
            kind: RuleKind::Recipe,
            text,
            index,
        })
    }

    fn single(&mut self, kind: RuleKind, text: &str) -> Result<RuleToken> {
        let index = self.chars.index();
        self.chars.consume()?;
        Ok(RuleToken {
            kind,
            text: text.to_string(),
            index,
        })
    }
}

impl<S: CharSource> Pull for RuleLexer<S> {
    type Item = RuleToken;

    fn pull(&mut self) -> Result<Option<RuleToken>> {
        loop {
            let Some(c) = self.chars.la_char(1)? else {
                return Ok(None);
            };
            if c == '\t' && self.at_line_start {
                self.chars.consume()?;
                self.at_line_start = false;
                return Ok(Some(self.lex_recipe_line()?));
            }
            self.at_line_start = false;
            match c {
                '\n' => {
                    let token = self.single(RuleKind::Newline, "\n")?;
                    self.at_line_start = true;
                    return Ok(Some(token));
                }
                ' ' | '\t' => {
                    self.chars.consume()?;
                }
                ':' => return Ok(Some(self.single(RuleKind::Colon, ":")?)),
                '|' => return Ok(Some(self.single(RuleKind::Pipe, "|")?)),
                ';' => {
                    self.chars.consume()?;
                    while matches!(self.chars.la_char(1)?, Some(' ' | '\t')) {
                        self.chars.consume()?;
                    }
                    let index = self.chars.index();
                    let text = self.read_line_text()?;
                    if !text.is_empty() {
                        return Ok(Some(RuleToken {
                            kind: RuleKind::Recipe,
                            text,
                            index,
                        }));
                    }
                }
                _ => {
                    let index = self.chars.index();
                    let pin = self.chars.mark()?;
                    let text = self.scan_word();
                    self.chars.release(pin);
                    return Ok(Some(RuleToken {
                        kind: RuleKind::Word,
                        text: text?,
                        index,
                    }));
                }
            }
        }
    }
}
