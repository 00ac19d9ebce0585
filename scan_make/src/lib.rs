//! `scan_make`: extract target graphs from a `make -p` database dump.
//!
//! The database dump is run through a cascade of filters, lexers and a rule
//! parser, producing one [`Target`] per declared target name: its
//! prerequisites, order-only prerequisites and recipe lines.
//!
//! Two entry points, guaranteed to produce identical target sequences:
//!
//! - [`scan_lines`] — streaming: every stage stays lazy, memory bounded by
//!   the stream adapters' retained windows.
//! - [`scan_dump`] — buffered: each intermediate stage is materialized;
//!   simpler when the whole dump text is already in memory.

pub mod error;
pub mod filter;
pub mod lexer;
pub mod parser;
pub mod scan;
pub mod target;
pub mod token;

pub use error::{Error, Result};
pub use parser::{Rule, RuleParser};
pub use scan::{scan_dump, scan_lines, TargetScan};
pub use target::Target;
pub use token::{ParaKind, ParaToken, RuleKind, RuleToken};
