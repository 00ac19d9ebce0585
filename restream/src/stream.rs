use gcfifo::{BufferCursor, Cursor, Error, GlobalFifo, ManagedFifo, Result, RingFifo};

/// Sentinel returned by `mark` when the stream is not positioned on an
/// element. Never collides with a real token, and releasing it is a no-op.
pub const MARK_NONE: i32 = -1;

/// Bridges a one-pass producer cursor to the random-access stream contract.
///
/// Elements are pulled from the producer one at a time, only as far as the
/// caller's position requires, and retained in a reference-counted window.
/// The adapter is in one of three states: positioned on an element,
/// exhausted with history still retained, or exhausted and empty.
///
/// Operations that reposition temporarily (`la_item`, `slice`) pin the
/// current position first and restore it before returning, even on error.
pub struct ElementStream<C: Cursor>
where
    C::Item: Clone,
{
    source: C,
    window: GlobalFifo<RingFifo<C::Item>>,
    source_done: bool,
}

impl<C: Cursor> std::fmt::Debug for ElementStream<C>
where
    C::Item: Clone,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ElementStream {{ index: {:?}, size: {:?}, source_done: {:?} }}",
            self.index(),
            self.size(),
            self.source_done
        )
    }
}

impl<C: Cursor> ElementStream<C>
where
    C::Item: Clone,
{
    /// # Errors
    ///
    /// From the producer's first advance.
    pub fn new(source: C) -> Result<Self> {
        let window = GlobalFifo::new(ManagedFifo::new(RingFifo::new()));
        let mut stream = ElementStream {
            source,
            window,
            source_done: false,
        };
        if stream.pull()? {
            stream.window.move_to_next()?;
        } else {
            stream.window.move_to_end()?;
        }
        Ok(stream)
    }

    /// Current global position, or [`size`](Self::size) when the stream is
    /// not positioned on an element.
    #[must_use]
    pub fn index(&self) -> usize {
        match self.window.current_global_index() {
            Ok(index) => index,
            Err(_) => self.size(),
        }
    }

    /// Total elements pulled from the producer so far. Monotone; fixed once
    /// the producer is exhausted and the position has caught up.
    #[must_use]
    pub fn size(&self) -> usize {
        self.window.global_count()
    }

    #[must_use]
    pub fn has_current(&self) -> bool {
        self.window.has_current_item()
    }

    /// The element at the current position.
    ///
    /// # Errors
    ///
    /// `Error::InvalidState` when not positioned on an element.
    pub fn current(&self) -> Result<&C::Item> {
        self.window.current_item()
    }

    /// Advance by one element.
    ///
    /// # Errors
    ///
    /// `Error::EndOfStream` when not positioned on an element.
    pub fn consume(&mut self) -> Result<()> {
        if !self.window.has_current_item() {
            return Err(Error::EndOfStream { index: self.size() });
        }
        let local = self.window.current_index()?;
        if local + 1 >= self.window.count() {
            self.pull()?;
        }
        self.window.move_to_next()?;
        self.window.collect_garbage();
        Ok(())
    }

    /// Move to an absolute global index.
    ///
    /// Seeking forward past the buffered tail pulls from the producer until
    /// the index is reached or the producer is exhausted (clamping to the
    /// end). Seeking backward is legal only within the retained window.
    ///
    /// # Errors
    ///
    /// `Error::OutOfWindow` when the target has already been evicted.
    pub fn seek(&mut self, index: usize) -> Result<()> {
        while self.window.global_count() <= index && self.pull()? {}
        if index >= self.window.global_count() {
            self.window.move_to_end()?;
        } else {
            self.window.move_to_global_index(index)?;
        }
        self.window.collect_garbage();
        Ok(())
    }

    /// Pin the current position, returning a release token, or [`MARK_NONE`]
    /// when not positioned on an element.
    ///
    /// # Errors
    ///
    /// `Error::ResourceExhausted` when the token space is saturated.
    pub fn mark(&mut self) -> Result<i32> {
        if self.window.has_current_item() {
            self.window.new_strong_reference()
        } else {
            Ok(MARK_NONE)
        }
    }

    /// Drop a pin. Idempotent; [`MARK_NONE`] and unknown tokens are ignored.
    pub fn release(&mut self, token: i32) {
        if token >= 0 {
            self.window.release_strong_reference(token);
        }
    }

    /// The element `offset` positions away, without moving the position.
    /// `offset` 1 is the current element, 2 the next, -1 the previous.
    /// `None` past the end of the producer.
    ///
    /// # Errors
    ///
    /// `Error::InvalidState` for `offset == 0`; `Error::OutOfWindow` for a
    /// backward offset whose target is already evicted.
    pub fn la_item(&mut self, offset: isize) -> Result<Option<C::Item>> {
        if offset == 0 {
            return Err(Error::InvalidState { operation: "la" });
        }
        let base = self.index() as isize;
        let target = if offset > 0 {
            base + offset - 1
        } else {
            base + offset
        };
        let start = self.window.start_index();
        if target < start as isize {
            return Err(Error::OutOfWindow {
                index: target.max(0) as usize,
                start,
            });
        }
        let target = target as usize;
        self.pinned(|stream| {
            stream.seek(target)?;
            if stream.window.has_current_item() {
                Ok(Some(stream.window.current_item()?.clone()))
            } else {
                Ok(None)
            }
        })
    }

    /// The elements of the inclusive global range `start..=stop`, clamped at
    /// the end of the producer. The position is unchanged afterwards.
    ///
    /// # Errors
    ///
    /// `Error::OutOfWindow` when `start` is already evicted.
    pub fn slice(&mut self, start: usize, stop: usize) -> Result<Vec<C::Item>> {
        if stop < start {
            return Ok(Vec::new());
        }
        self.pinned(|stream| {
            let mut items = Vec::with_capacity(stop - start + 1);
            stream.seek(start)?;
            let mut at = start;
            while at <= stop && stream.window.has_current_item() {
                items.push(stream.window.current_item()?.clone());
                at += 1;
                stream.seek(at)?;
            }
            Ok(items)
        })
    }

    /// Run `body` and restore the original position afterwards, holding a
    /// strong reference on it for the duration. On an exhausted empty
    /// stream the restore is a silent no-op.
    fn pinned<R>(&mut self, body: impl FnOnce(&mut Self) -> Result<R>) -> Result<R> {
        let saved = self.index();
        let token = self.mark()?;
        let result = body(self);
        let restored = self.seek(saved);
        self.release(token);
        match (result, restored) {
            (Ok(value), Ok(())) => Ok(value),
            (Err(e), _) | (Ok(_), Err(e)) => Err(e),
        }
    }

    /// Fetch one element from the producer into the window. False once the
    /// producer is exhausted.
    fn pull(&mut self) -> Result<bool> {
        if self.source_done {
            return Ok(false);
        }
        self.source.move_to_next()?;
        if self.source.has_current_item() {
            let item = self.source.current_item()?.clone();
            self.window.push(item);
            Ok(true)
        } else {
            self.source_done = true;
            Ok(false)
        }
    }
}
