use log::debug;

/// Marker line opening the rule section of a `make -p` dump.
pub const SECTION_START: &str = "# Files";
/// Marker line closing the rule section.
pub const SECTION_END: &str = "# files hash-table stats:";

/// Keeps only the lines strictly between the [`SECTION_START`] marker and
/// the [`SECTION_END`] terminator. Markers are matched on lines with
/// trailing whitespace trimmed.
#[derive(Debug)]
pub struct SectionFilter<I> {
    lines: I,
    in_section: bool,
    done: bool,
}

impl<I> SectionFilter<I> {
    pub fn new(lines: I) -> Self {
        SectionFilter {
            lines,
            in_section: false,
            done: false,
        }
    }
}

impl<I: Iterator<Item = String>> Iterator for SectionFilter<I> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        loop {
            let line = self.lines.next()?;
            let trimmed = line.trim_end();
            if !self.in_section {
                if trimmed == SECTION_START {
                    debug!("entering the rule section");
                    self.in_section = true;
                }
                continue;
            }
            if trimmed == SECTION_END {
                debug!("leaving the rule section");
                self.done = true;
                return None;
            }
            return Some(line);
        }
    }
}

/// Drops the dump's informational commentary: lines whose first character
/// is `#`. Blank lines pass through, they separate paragraphs.
#[derive(Debug)]
pub struct CommentFilter<I> {
    lines: I,
}

impl<I> CommentFilter<I> {
    pub fn new(lines: I) -> Self {
        CommentFilter { lines }
    }
}

impl<I: Iterator<Item = String>> Iterator for CommentFilter<I> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let line = self.lines.next()?;
            if !line.starts_with('#') {
                return Some(line);
            }
        }
    }
}

/// Projects a line sequence to a character sequence, re-inserting the
/// newline after each line.
#[derive(Debug)]
pub struct LineChars<I> {
    lines: I,
    buf: Vec<char>,
    pos: usize,
}

impl<I> LineChars<I> {
    pub fn new(lines: I) -> Self {
        LineChars {
            lines,
            buf: Vec::new(),
            pos: 0,
        }
    }
}

impl<I: Iterator<Item = String>> Iterator for LineChars<I> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            if self.pos < self.buf.len() {
                let c = self.buf[self.pos];
                self.pos += 1;
                return Some(c);
            }
            let line = self.lines.next()?;
            self.buf.clear();
            self.buf.extend(line.chars());
            self.buf.push('\n');
            self.pos = 0;
        }
    }
}
