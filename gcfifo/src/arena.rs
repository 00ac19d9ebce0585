use crate::cursor::{BufferCursor, Cursor, CursorState};
use crate::error::{Error, Result};
use crate::fifo::{Fifo, Window};

#[derive(Debug)]
struct Slot<T> {
    item: T,
    next: Option<usize>,
}

/// Linked-chain FIFO over an arena of slots.
///
/// Slots are addressed by index inside one owned store and recycled through
/// an explicit free list, so pushing does not allocate per element. Push and
/// shift are O(1); seeking is O(distance) along the chain (forward from the
/// cursor, or from the head when moving backward).
///
/// Same observable behavior as [`RingFifo`](crate::RingFifo), which is the
/// preferred store when O(1) indexed seeks matter.
#[derive(Debug)]
pub struct ArenaFifo<T> {
    slots: Vec<Option<Slot<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    shifted: usize,
    state: CursorState,
    cursor_slot: Option<usize>,
}

impl<T> ArenaFifo<T> {
    #[must_use]
    pub fn new() -> Self {
        ArenaFifo {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            shifted: 0,
            state: CursorState::Start,
            cursor_slot: None,
        }
    }

    #[allow(clippy::expect_used)]
    fn slot(&self, index: usize) -> &Slot<T> {
        self.slots[index]
            .as_ref()
            .expect("chain links only point at occupied slots")
    }

    /// Walk `steps` links starting at `from`.
    #[allow(clippy::expect_used)]
    fn walk(&self, from: usize, steps: usize) -> usize {
        let mut at = from;
        for _ in 0..steps {
            at = self.slot(at).next.expect("walk stays within the chain");
        }
        at
    }
}

impl<T> Default for ArenaFifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Cursor for ArenaFifo<T> {
    type Item = T;

    fn state(&self) -> CursorState {
        self.state
    }

    fn current_item(&self) -> Result<&T> {
        match self.cursor_slot {
            Some(idx) => Ok(&self.slot(idx).item),
            None => Err(Error::InvalidState {
                operation: "current_item",
            }),
        }
    }

    fn move_to_next(&mut self) -> Result<()> {
        match self.state {
            CursorState::Start => match self.head {
                Some(idx) => {
                    self.cursor_slot = Some(idx);
                    self.state = CursorState::Item(0);
                }
                None => {
                    self.state = CursorState::End;
                }
            },
            CursorState::Item(i) => match self.cursor_slot.and_then(|idx| self.slot(idx).next) {
                Some(next) => {
                    self.cursor_slot = Some(next);
                    self.state = CursorState::Item(i + 1);
                }
                None => {
                    self.cursor_slot = None;
                    self.state = CursorState::End;
                }
            },
            CursorState::End => {
                return Err(Error::InvalidState {
                    operation: "move_to_next",
                })
            }
        }
        Ok(())
    }

    fn move_to_end(&mut self) -> Result<()> {
        self.cursor_slot = None;
        self.state = CursorState::End;
        Ok(())
    }
}

impl<T> BufferCursor for ArenaFifo<T> {
    fn count(&self) -> usize {
        self.len
    }

    fn move_to_start(&mut self) {
        self.cursor_slot = None;
        self.state = CursorState::Start;
    }

    fn move_to_index(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                count: self.len,
            });
        }
        // Forward moves continue from the cursor; backward moves restart at
        // the head.
        let idx = match (self.state, self.cursor_slot) {
            (CursorState::Item(at), Some(slot)) if index >= at => self.walk(slot, index - at),
            _ => match self.head {
                Some(head) => self.walk(head, index),
                None => {
                    return Err(Error::IndexOutOfBounds {
                        index,
                        count: self.len,
                    })
                }
            },
        };
        self.cursor_slot = Some(idx);
        self.state = CursorState::Item(index);
        Ok(())
    }
}

impl<T> Window for ArenaFifo<T> {
    fn shifted(&self) -> usize {
        self.shifted
    }
}

impl<T> Fifo for ArenaFifo<T> {
    #[allow(clippy::expect_used)]
    fn push(&mut self, item: T) {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(Slot { item, next: None });
                idx
            }
            None => {
                self.slots.push(Some(Slot { item, next: None }));
                self.slots.len() - 1
            }
        };
        if let Some(tail) = self.tail {
            self.slots[tail]
                .as_mut()
                .expect("tail is an occupied slot")
                .next = Some(idx);
        } else {
            self.head = Some(idx);
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    fn shift(&mut self) -> Option<T> {
        let head = self.head?;
        let slot = self.slots[head].take()?;
        self.free.push(head);
        self.head = slot.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        self.shifted += 1;
        self.state = match self.state {
            CursorState::Item(0) => {
                if self.len > 0 {
                    self.cursor_slot = self.head;
                    CursorState::Item(0)
                } else {
                    self.cursor_slot = None;
                    CursorState::Start
                }
            }
            CursorState::Item(i) => CursorState::Item(i - 1),
            other => other,
        };
        Some(slot.item)
    }
}
