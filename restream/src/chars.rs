use gcfifo::{Cursor, Result};

use crate::stream::ElementStream;

/// Lookahead sentinel for the end of the character stream.
pub const EOF: i32 = -1;

/// The character-stream contract a lexer engine runs against.
pub trait CharSource {
    /// Current global position, or `size` when past the end.
    fn index(&self) -> usize;

    /// Total characters produced so far.
    fn size(&self) -> usize;

    /// Advance by one character.
    ///
    /// # Errors
    ///
    /// `Error::EndOfStream` past the end.
    fn consume(&mut self) -> Result<()>;

    /// Code of the character `offset` positions away (`offset` 1 is the
    /// current character), or [`EOF`] past the end. `offset` must not be 0.
    ///
    /// # Errors
    ///
    /// `Error::InvalidState` for offset 0; `Error::OutOfWindow` for a
    /// backward offset landing before the retained window.
    fn la(&mut self, offset: isize) -> Result<i32>;

    /// Pin the current position; returns a token for [`release`](Self::release).
    ///
    /// # Errors
    ///
    /// `Error::ResourceExhausted` when the token space is saturated.
    fn mark(&mut self) -> Result<i32>;

    /// Drop a pin. Idempotent.
    fn release(&mut self, token: i32);

    /// Move to an absolute global index.
    ///
    /// # Errors
    ///
    /// `Error::OutOfWindow` for an evicted target.
    fn seek(&mut self, index: usize) -> Result<()>;

    /// Text of the inclusive global range `start..=stop`. The position is
    /// unchanged afterwards.
    ///
    /// # Errors
    ///
    /// `Error::OutOfWindow` when `start` is already evicted.
    fn get_text(&mut self, start: usize, stop: usize) -> Result<String>;

    /// [`la`](Self::la) decoded to a `char`, `None` at the end.
    ///
    /// # Errors
    ///
    /// See [`la`](Self::la).
    fn la_char(&mut self, offset: isize) -> Result<Option<char>> {
        let code = self.la(offset)?;
        if code == EOF {
            return Ok(None);
        }
        Ok(char::from_u32(code as u32))
    }
}

/// [`CharSource`] over any character-producing cursor.
pub struct CharStream<C: Cursor<Item = char>> {
    inner: ElementStream<C>,
}

impl<C: Cursor<Item = char>> CharStream<C> {
    /// # Errors
    ///
    /// From the producer's first advance.
    pub fn new(source: C) -> Result<Self> {
        Ok(CharStream {
            inner: ElementStream::new(source)?,
        })
    }
}

impl<C: Cursor<Item = char>> CharSource for CharStream<C> {
    fn index(&self) -> usize {
        self.inner.index()
    }

    fn size(&self) -> usize {
        self.inner.size()
    }

    fn consume(&mut self) -> Result<()> {
        self.inner.consume()
    }

    fn la(&mut self, offset: isize) -> Result<i32> {
        match self.inner.la_item(offset)? {
            Some(c) => Ok(c as i32),
            None => Ok(EOF),
        }
    }

    fn mark(&mut self) -> Result<i32> {
        self.inner.mark()
    }

    fn release(&mut self, token: i32) {
        self.inner.release(token);
    }

    fn seek(&mut self, index: usize) -> Result<()> {
        self.inner.seek(index)
    }

    fn get_text(&mut self, start: usize, stop: usize) -> Result<String> {
        Ok(self.inner.slice(start, stop)?.into_iter().collect())
    }
}
