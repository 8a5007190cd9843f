//! Error-tolerant parsing of `go.mod` module files.
//!
//! This crate turns the text of a module file into a [`ModuleFile`] model and
//! a list of [`SyntaxFinding`]s. Parsing never fails outright: every line is
//! attempted, malformed lines become findings, and the well-formed remainder
//! is still returned.
//!
//! Every directive and finding carries a [`Span`] measured against the
//! original, unmodified text, so `&text[span.start_byte..span.end_byte]`
//! reproduces the directive exactly. [`LineIndex`] and
//! [`to_protocol_position`] translate those byte spans into editor
//! coordinates (zero-based line, UTF-16 character).
//!
//! # Example
//!
//! ```
//! use std::str::FromStr;
//! use lsp_types::Uri;
//! use modsight_syntax::parse;
//!
//! let uri = Uri::from_str("file:///work/go.mod").unwrap();
//! let outcome = parse(uri, "module example.com/m\n\ngo 1.21\n");
//! assert!(outcome.findings().is_empty());
//! assert_eq!(outcome.module().module_path(), Some("example.com/m"));
//! ```

mod error;
mod lexer;
mod model;
mod parser;
mod position;
mod span;
mod version;

pub use error::PositionError;
pub use model::{
    Directive, DirectiveKind, Exclusion, GoVersion, ModuleDecl, ModuleFile, Replacement,
    Requirement,
};
pub use parser::{ParseOutcome, SyntaxFinding, parse};
pub use position::{LineIndex, to_byte_offset, to_protocol_position};
pub use span::{LineCol, Span};
pub use version::{is_valid_go_version, is_valid_module_version};

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests use expect to fail loudly on setup errors"
)]
mod tests;
