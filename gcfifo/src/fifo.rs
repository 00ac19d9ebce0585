use crate::cursor::{BufferCursor, Cursor, CursorState};
use crate::error::{Error, Result};

const DEFAULT_CAPACITY: usize = 16;

/// A buffer window that remembers how many elements were ever evicted from
/// its head. The eviction count is the seed of global indexing.
pub trait Window: BufferCursor {
    /// Number of elements evicted since creation.
    fn shifted(&self) -> usize;
}

/// A first-in-first-out buffer: append at the tail, evict at the head.
///
/// `push` never changes which element is current. `shift` removes exactly
/// the head element and adjusts the cursor:
///
/// - cursor past the head: its window-relative index decrements by one,
///   the current element is unaffected;
/// - cursor on the head: the new head becomes current, or the cursor resets
///   to the start when the window empties;
/// - cursor at the start or the end: it stays there.
pub trait Fifo: Window {
    fn push(&mut self, item: Self::Item);

    /// Remove and return the head element, or `None` on an empty window.
    fn shift(&mut self) -> Option<Self::Item>;
}

/// Growable circular-array FIFO: amortized O(1) push, O(1) shift and
/// indexed seek.
#[derive(Debug)]
pub struct RingFifo<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
    shifted: usize,
    state: CursorState,
}

impl<T> RingFifo<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        RingFifo {
            slots,
            head: 0,
            len: 0,
            shifted: 0,
            state: CursorState::Start,
        }
    }

    fn slot(&self, index: usize) -> usize {
        (self.head + index) % self.slots.len()
    }

    fn grow(&mut self) {
        let old_cap = self.slots.len();
        let mut slots = Vec::with_capacity(old_cap * 2);
        slots.resize_with(old_cap * 2, || None);
        for i in 0..self.len {
            slots[i] = self.slots[(self.head + i) % old_cap].take();
        }
        self.slots = slots;
        self.head = 0;
    }

    fn adjust_after_shift(&mut self) {
        self.state = match self.state {
            CursorState::Item(0) => {
                if self.len > 0 {
                    CursorState::Item(0)
                } else {
                    CursorState::Start
                }
            }
            CursorState::Item(i) => CursorState::Item(i - 1),
            other => other,
        };
    }
}

impl<T> Default for RingFifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Cursor for RingFifo<T> {
    type Item = T;

    fn state(&self) -> CursorState {
        self.state
    }

    fn current_item(&self) -> Result<&T> {
        match self.state {
            CursorState::Item(i) => self.slots[self.slot(i)].as_ref().ok_or(Error::InvalidState {
                operation: "current_item",
            }),
            _ => Err(Error::InvalidState {
                operation: "current_item",
            }),
        }
    }

    fn move_to_next(&mut self) -> Result<()> {
        self.state = match self.state {
            CursorState::Start => {
                if self.len > 0 {
                    CursorState::Item(0)
                } else {
                    CursorState::End
                }
            }
            CursorState::Item(i) => {
                if i + 1 < self.len {
                    CursorState::Item(i + 1)
                } else {
                    CursorState::End
                }
            }
            CursorState::End => {
                return Err(Error::InvalidState {
                    operation: "move_to_next",
                })
            }
        };
        Ok(())
    }

    fn move_to_end(&mut self) -> Result<()> {
        self.state = CursorState::End;
        Ok(())
    }
}

impl<T> BufferCursor for RingFifo<T> {
    fn count(&self) -> usize {
        self.len
    }

    fn move_to_start(&mut self) {
        self.state = CursorState::Start;
    }

    fn move_to_index(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                count: self.len,
            });
        }
        self.state = CursorState::Item(index);
        Ok(())
    }
}

impl<T> Window for RingFifo<T> {
    fn shifted(&self) -> usize {
        self.shifted
    }
}

impl<T> Fifo for RingFifo<T> {
    fn push(&mut self, item: T) {
        if self.len == self.slots.len() {
            self.grow();
        }
        let tail = self.slot(self.len);
        self.slots[tail] = Some(item);
        self.len += 1;
    }

    fn shift(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        self.shifted += 1;
        self.adjust_after_shift();
        item
    }
}
