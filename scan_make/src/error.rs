use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Failure in the underlying buffer or stream adapter
    #[error("stream error: {0}")]
    Stream(#[from] gcfifo::Error),
    /// Rule text did not match the expected shape
    #[error("unexpected {found} at index {index}, expected {expected}")]
    UnexpectedToken {
        /// What the parser was looking for
        expected: &'static str,
        /// Description of what was found instead
        found: String,
        /// Global token index of the offending token
        index: usize,
    },
}
