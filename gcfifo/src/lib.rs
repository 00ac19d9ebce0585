//! `gcfifo`: FIFO buffers with reference-counted eviction and global indexing.
//!
//! The crate provides the buffering substrate for replayable streams:
//!
//! - [`Cursor`] and [`BufferCursor`]: a three-state pull contract
//!   (start, on an item, end) over a buffered window.
//! - [`RingFifo`] and [`ArenaFifo`]: first-in-first-out stores with explicit
//!   head eviction. The ring store has O(1) indexed seeks and is the default;
//!   the arena store keeps slots in a linked chain with a free list.
//! - [`ManagedFifo`]: replaces explicit eviction with reference counting.
//!   Callers pin positions with strong-reference tokens; the head is evicted
//!   only while it is unpinned and not the current cursor position.
//! - [`GlobalFifo`]: absolute indexing that survives eviction. The global
//!   index of a live element never changes; only its window-relative index
//!   shifts as older elements are discarded.
//!
//! Elements enter through `push` at the tail and leave only through head
//! eviction, so memory is bounded by the span between the oldest pinned
//! position and the tail.

pub mod arena;
pub mod cursor;
pub mod error;
pub mod fifo;
pub mod global;
pub mod managed;

pub use arena::ArenaFifo;
pub use cursor::{BufferCursor, Cursor, CursorState, IterCursor, Pull, PullCursor};
pub use error::{Error, Result};
pub use fifo::{Fifo, RingFifo, Window};
pub use global::GlobalFifo;
pub use managed::ManagedFifo;
