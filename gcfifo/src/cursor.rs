use crate::error::{Error, Result};

/// Position of a cursor relative to its sequence.
///
/// `Item` carries the window-relative index of the element the cursor is on.
/// When the underlying window is empty, `Start` and `End` double as the
/// start-empty and end-empty states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Before the first element
    Start,
    /// On the element at the given window-relative index
    Item(usize),
    /// After the last element
    End,
}

/// A pull-based, single-pass sequence with an explicit state tag.
pub trait Cursor {
    type Item;

    fn state(&self) -> CursorState;

    /// The element the cursor is positioned on.
    ///
    /// # Errors
    ///
    /// `Error::InvalidState` unless the cursor is on an element.
    fn current_item(&self) -> Result<&Self::Item>;

    /// Advance to the next element, or to the end if none remains.
    ///
    /// # Errors
    ///
    /// `Error::InvalidState` when already at the end.
    fn move_to_next(&mut self) -> Result<()>;

    /// Jump to the end, discarding whatever remains in a pull-through
    /// source. Idempotent; valid in any state.
    ///
    /// # Errors
    ///
    /// Only from draining a fallible pull-through source.
    fn move_to_end(&mut self) -> Result<()>;

    #[must_use]
    fn has_current_item(&self) -> bool {
        matches!(self.state(), CursorState::Item(_))
    }

    #[must_use]
    fn is_at_start(&self) -> bool {
        matches!(self.state(), CursorState::Start)
    }

    #[must_use]
    fn is_at_end(&self) -> bool {
        matches!(self.state(), CursorState::End)
    }
}

/// A cursor over retained elements: random access plus a way back to the
/// start without losing content.
pub trait BufferCursor: Cursor {
    /// Number of retained elements.
    fn count(&self) -> usize;

    /// Return to the start. Buffered content is preserved.
    fn move_to_start(&mut self);

    /// Jump directly to the element at a window-relative index.
    ///
    /// # Errors
    ///
    /// `Error::IndexOutOfBounds` for `index >= count()`.
    fn move_to_index(&mut self, index: usize) -> Result<()>;

    /// Window-relative index of the current element.
    ///
    /// # Errors
    ///
    /// `Error::InvalidState` unless the cursor is on an element.
    fn current_index(&self) -> Result<usize> {
        match self.state() {
            CursorState::Item(i) => Ok(i),
            _ => Err(Error::InvalidState {
                operation: "current_index",
            }),
        }
    }

    #[must_use]
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Adapts a std iterator to the [`Cursor`] contract.
pub struct IterCursor<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
    consumed: usize,
    state: CursorState,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new(iter: I) -> Self {
        IterCursor {
            iter,
            current: None,
            consumed: 0,
            state: CursorState::Start,
        }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn state(&self) -> CursorState {
        self.state
    }

    fn current_item(&self) -> Result<&Self::Item> {
        self.current.as_ref().ok_or(Error::InvalidState {
            operation: "current_item",
        })
    }

    fn move_to_next(&mut self) -> Result<()> {
        if self.is_at_end() {
            return Err(Error::InvalidState {
                operation: "move_to_next",
            });
        }
        self.current = self.iter.next();
        self.state = match self.current {
            Some(_) => {
                let i = self.consumed;
                self.consumed += 1;
                CursorState::Item(i)
            }
            None => CursorState::End,
        };
        Ok(())
    }

    fn move_to_end(&mut self) -> Result<()> {
        while self.iter.next().is_some() {}
        self.current = None;
        self.state = CursorState::End;
        Ok(())
    }
}

/// A fallible pull source: one item per call, `None` at the end.
///
/// Lexer stages implement this so they can be chained through
/// [`PullCursor`] without giving up error propagation.
pub trait Pull {
    type Item;

    /// Produce the next item.
    ///
    /// # Errors
    ///
    /// Whatever the stage propagates from the streams it reads.
    fn pull(&mut self) -> Result<Option<Self::Item>>;
}

impl<T> Pull for Box<dyn Pull<Item = T> + '_> {
    type Item = T;

    fn pull(&mut self) -> Result<Option<T>> {
        (**self).pull()
    }
}

/// Adapts a [`Pull`] source to the [`Cursor`] contract.
pub struct PullCursor<P: Pull> {
    source: P,
    current: Option<P::Item>,
    consumed: usize,
    state: CursorState,
}

impl<P: Pull> PullCursor<P> {
    pub fn new(source: P) -> Self {
        PullCursor {
            source,
            current: None,
            consumed: 0,
            state: CursorState::Start,
        }
    }
}

impl<P: Pull> Cursor for PullCursor<P> {
    type Item = P::Item;

    fn state(&self) -> CursorState {
        self.state
    }

    fn current_item(&self) -> Result<&Self::Item> {
        self.current.as_ref().ok_or(Error::InvalidState {
            operation: "current_item",
        })
    }

    fn move_to_next(&mut self) -> Result<()> {
        if self.is_at_end() {
            return Err(Error::InvalidState {
                operation: "move_to_next",
            });
        }
        self.current = self.source.pull()?;
        self.state = match self.current {
            Some(_) => {
                let i = self.consumed;
                self.consumed += 1;
                CursorState::Item(i)
            }
            None => CursorState::End,
        };
        Ok(())
    }

    fn move_to_end(&mut self) -> Result<()> {
        if self.is_at_end() {
            return Ok(());
        }
        while self.source.pull()?.is_some() {}
        self.current = None;
        self.state = CursorState::End;
        Ok(())
    }
}
