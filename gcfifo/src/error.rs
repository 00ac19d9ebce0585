use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared by the buffer framework and the stream adapters on top
/// of it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An operation was called in a cursor state that does not support it
    #[error("{operation} called in an invalid cursor state")]
    InvalidState {
        /// Operation that was attempted
        operation: &'static str,
    },
    /// A window-relative index is beyond the retained window
    #[error("index {index} is out of bounds for a window of {count} elements")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Number of retained elements
        count: usize,
    },
    /// A global index addresses an element that has already been evicted
    #[error("global index {index} is before the retained window start {start}")]
    OutOfWindow {
        /// Global index that was accessed
        index: usize,
        /// Global index of the oldest retained element
        start: usize,
    },
    /// An advance was attempted past the end of the stream
    #[error("end of stream reached at index {index}")]
    EndOfStream {
        /// Stream size at the time of the call
        index: usize,
    },
    /// The strong-reference token space is saturated
    #[error("strong-reference token space is exhausted")]
    ResourceExhausted,
}
