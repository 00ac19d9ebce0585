use gcfifo::{Cursor, Result};

use crate::stream::ElementStream;

/// An element of a token stream: anything cloneable that can render the
/// text it covers, so token intervals can be extracted as strings.
pub trait StreamToken: Clone {
    fn text(&self) -> &str;
}

/// The token-stream contract a parser engine runs against.
pub trait TokenSource {
    type Token: StreamToken;

    /// Current global position, or `size` when past the end.
    fn index(&self) -> usize;

    /// Total tokens produced so far.
    fn size(&self) -> usize;

    /// Advance by one token.
    ///
    /// # Errors
    ///
    /// `Error::EndOfStream` past the end.
    fn consume(&mut self) -> Result<()>;

    /// The token `offset` positions away (`offset` 1 is the current token),
    /// or `None` past the end. `offset` must not be 0.
    ///
    /// # Errors
    ///
    /// `Error::InvalidState` for offset 0; `Error::OutOfWindow` for a
    /// backward offset landing before the retained window.
    fn lt(&mut self, offset: isize) -> Result<Option<Self::Token>>;

    /// The token at an absolute global index, `None` past the end.
    ///
    /// # Errors
    ///
    /// `Error::OutOfWindow` for an evicted index.
    fn get(&mut self, index: usize) -> Result<Option<Self::Token>>;

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

    /// Concatenated text of the inclusive token range `start..=stop`. The
    /// position is unchanged afterwards.
    ///
    /// # Errors
    ///
    /// `Error::OutOfWindow` when `start` is already evicted.
    fn get_text(&mut self, start: usize, stop: usize) -> Result<String>;
}

/// [`TokenSource`] over any token-producing cursor.
pub struct TokenStream<C: Cursor>
where
    C::Item: StreamToken,
{
    inner: ElementStream<C>,
}

impl<C: Cursor> TokenStream<C>
where
    C::Item: StreamToken,
{
    /// # Errors
    ///
    /// From the producer's first advance.
    pub fn new(source: C) -> Result<Self> {
        Ok(TokenStream {
            inner: ElementStream::new(source)?,
        })
    }
}

impl<C: Cursor> TokenSource for TokenStream<C>
where
    C::Item: StreamToken,
{
    type Token = C::Item;

    fn index(&self) -> usize {
        self.inner.index()
    }

    fn size(&self) -> usize {
        self.inner.size()
    }

    fn consume(&mut self) -> Result<()> {
        self.inner.consume()
    }

    fn lt(&mut self, offset: isize) -> Result<Option<Self::Token>> {
        self.inner.la_item(offset)
    }

    fn get(&mut self, index: usize) -> Result<Option<Self::Token>> {
        Ok(self.inner.slice(index, index)?.into_iter().next())
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
        let mut text = String::new();
        for token in self.inner.slice(start, stop)? {
            text.push_str(token.text());
        }
        Ok(text)
    }
}
