use crate::cursor::{BufferCursor, Cursor, CursorState};
use crate::error::{Error, Result};
use crate::fifo::{Fifo, Window};
use crate::managed::ManagedFifo;

/// Absolute indexing over a [`ManagedFifo`].
///
/// `start_index` is the global index of the oldest retained element; it
/// grows by one on every eviction and never resets, so a live element keeps
/// its global index for its whole lifetime while its window-relative index
/// shifts.
#[derive(Debug)]
pub struct GlobalFifo<F: Fifo> {
    inner: ManagedFifo<F>,
}

impl<F: Fifo> GlobalFifo<F> {
    pub fn new(inner: ManagedFifo<F>) -> Self {
        GlobalFifo { inner }
    }

    /// Global index of the oldest retained element.
    #[must_use]
    pub fn start_index(&self) -> usize {
        self.inner.shifted()
    }

    /// `start_index + count`: one past the global index of the tail.
    #[must_use]
    pub fn global_count(&self) -> usize {
        self.start_index() + self.inner.count()
    }

    /// Global index of the current element.
    ///
    /// # Errors
    ///
    /// `Error::InvalidState` unless the cursor is on an element.
    pub fn current_global_index(&self) -> Result<usize> {
        Ok(self.start_index() + self.inner.current_index()?)
    }

    /// Jump to an absolute position.
    ///
    /// # Errors
    ///
    /// `Error::OutOfWindow` when the element has already been evicted;
    /// `Error::IndexOutOfBounds` past the retained tail.
    pub fn move_to_global_index(&mut self, index: usize) -> Result<()> {
        let start = self.start_index();
        if index < start {
            return Err(Error::OutOfWindow { index, start });
        }
        self.inner.move_to_index(index - start)
    }

    pub fn push(&mut self, item: F::Item) {
        self.inner.push(item);
    }

    /// See [`ManagedFifo::new_strong_reference`].
    ///
    /// # Errors
    ///
    /// See [`ManagedFifo::new_strong_reference`].
    pub fn new_strong_reference(&mut self) -> Result<i32> {
        self.inner.new_strong_reference()
    }

    /// See [`ManagedFifo::release_strong_reference`].
    pub fn release_strong_reference(&mut self, token: i32) {
        self.inner.release_strong_reference(token);
    }

    /// See [`ManagedFifo::collect_garbage`].
    pub fn collect_garbage(&mut self) {
        self.inner.collect_garbage();
    }
}

impl<F: Fifo> Cursor for GlobalFifo<F> {
    type Item = F::Item;

    fn state(&self) -> CursorState {
        self.inner.state()
    }

    fn current_item(&self) -> Result<&Self::Item> {
        self.inner.current_item()
    }

    fn move_to_next(&mut self) -> Result<()> {
        self.inner.move_to_next()
    }

    fn move_to_end(&mut self) -> Result<()> {
        self.inner.move_to_end()
    }
}

impl<F: Fifo> BufferCursor for GlobalFifo<F> {
    fn count(&self) -> usize {
        self.inner.count()
    }

    fn move_to_start(&mut self) {
        self.inner.move_to_start();
    }

    fn move_to_index(&mut self, index: usize) -> Result<()> {
        self.inner.move_to_index(index)
    }
}

impl<F: Fifo> Window for GlobalFifo<F> {
    fn shifted(&self) -> usize {
        self.inner.shifted()
    }
}
