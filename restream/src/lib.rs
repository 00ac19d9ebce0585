//! `restream`: random-access stream adapters over one-pass producers.
//!
//! A lexer or parser engine wants absolute indexing, mark/release
//! backtracking, bounded lookahead and substring extraction. A producer
//! offers a single forward pass. [`ElementStream`] bridges the two over a
//! reference-counted window, pulling from the producer on demand and
//! retaining only the span that marks still pin.
//!
//! [`CharStream`] and [`TokenStream`] expose the two element flavors behind
//! the [`CharSource`] and [`TokenSource`] contracts.

pub mod chars;
pub mod stream;
pub mod tokens;

pub use chars::{CharSource, CharStream, EOF};
pub use stream::{ElementStream, MARK_NONE};
pub use tokens::{StreamToken, TokenSource, TokenStream};

pub use gcfifo;
pub use gcfifo::{Error, Result};
