use std::collections::{HashMap, VecDeque};

use crate::cursor::{BufferCursor, Cursor, CursorState};
use crate::error::{Error, Result};
use crate::fifo::{Fifo, Window};

/// A FIFO whose head eviction is driven by reference counting instead of
/// explicit `shift` calls.
///
/// Callers pin the current position with [`new_strong_reference`] and get
/// back an integer token; [`release_strong_reference`] drops the pin and is
/// idempotent. [`collect_garbage`] evicts from the head while the head is
/// unpinned and not the current cursor position, and runs automatically on
/// every push and release.
///
/// Invariant: the counter at a window-relative position equals the number of
/// outstanding tokens mapping to it, so a zero counter at the head means no
/// token can be invalidated by evicting it.
///
/// [`new_strong_reference`]: ManagedFifo::new_strong_reference
/// [`release_strong_reference`]: ManagedFifo::release_strong_reference
/// [`collect_garbage`]: ManagedFifo::collect_garbage
#[derive(Debug)]
pub struct ManagedFifo<F: Fifo> {
    inner: F,
    refs: VecDeque<u32>,
    tokens: HashMap<i32, usize>,
    next_token: i32,
}

impl<F: Fifo> ManagedFifo<F> {
    pub fn new(inner: F) -> Self {
        ManagedFifo {
            inner,
            refs: VecDeque::new(),
            tokens: HashMap::new(),
            next_token: 0,
        }
    }

    /// Append at the tail and sweep the head.
    pub fn push(&mut self, item: F::Item) {
        self.inner.push(item);
        self.refs.push_back(0);
        self.collect_garbage();
    }

    /// Pin the current position against eviction.
    ///
    /// Tokens are allocated by cycling through the non-negative `i32` space
    /// and never collide with an outstanding token.
    ///
    /// # Errors
    ///
    /// `Error::InvalidState` when the cursor is not on an element;
    /// `Error::ResourceExhausted` when every token value is outstanding.
    pub fn new_strong_reference(&mut self) -> Result<i32> {
        let local = self.inner.current_index()?;
        let token = self.allocate_token()?;
        if let Some(count) = self.refs.get_mut(local) {
            *count += 1;
        }
        self.tokens.insert(token, local);
        Ok(token)
    }

    /// Drop a pin. Unknown or already-released tokens are ignored.
    pub fn release_strong_reference(&mut self, token: i32) {
        if let Some(local) = self.tokens.remove(&token) {
            if let Some(count) = self.refs.get_mut(local) {
                *count = count.saturating_sub(1);
            }
            self.collect_garbage();
        }
    }

    /// Evict from the head while doing so cannot invalidate a pin or the
    /// cursor: the window is non-empty, the cursor is past the start, the
    /// head counter is zero, and the head is not the current element (a
    /// cursor at the end holds no element).
    pub fn collect_garbage(&mut self) {
        loop {
            if self.inner.is_empty() || self.inner.is_at_start() {
                return;
            }
            if self.refs.front() != Some(&0) {
                return;
            }
            if matches!(self.inner.state(), CursorState::Item(0)) {
                return;
            }
            self.inner.shift();
            self.refs.pop_front();
            // A zero head counter means no token maps to position 0.
            for local in self.tokens.values_mut() {
                *local -= 1;
            }
        }
    }

    /// Outstanding pin count for a window-relative position.
    #[must_use]
    pub fn reference_count(&self, index: usize) -> u32 {
        self.refs.get(index).copied().unwrap_or(0)
    }

    fn allocate_token(&mut self) -> Result<i32> {
        let started_at = self.next_token;
        loop {
            let candidate = self.next_token;
            self.next_token = if candidate == i32::MAX {
                0
            } else {
                candidate + 1
            };
            if !self.tokens.contains_key(&candidate) {
                return Ok(candidate);
            }
            if self.next_token == started_at {
                return Err(Error::ResourceExhausted);
            }
        }
    }
}

impl<F: Fifo> Cursor for ManagedFifo<F> {
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

impl<F: Fifo> BufferCursor for ManagedFifo<F> {
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

impl<F: Fifo> Window for ManagedFifo<F> {
    fn shifted(&self) -> usize {
        self.inner.shifted()
    }
}
