//! arrowconf-core: compiler for the arrowconf constant-declaration language.
//!
//! A document is a sequence of lines of the form `name <- value;` where a
//! value is a positive integer literal, a reference `@(name)` to an earlier
//! constant, or a list `{a.b.c}`. Parsing yields a [`SymbolTable`] in
//! declaration order, which [`serialize`] renders as JSON.
//!
//! # Public API
//!
//! - [`parse_document()`] / [`Parser`] -- parse a whole document
//! - [`parse_value()`] -- parse one value expression against a table
//! - [`compile_file()`] -- read and parse a file
//! - [`SymbolTable`], [`Value`] -- parse results
//! - [`ConfigError`], [`ValueError`], [`ErrorKind`] -- failures

pub mod compile;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod serialize;
pub mod source;
pub mod symbols;
pub mod value;

// ── Convenience re-exports ───────────────────────────────────────────

pub use compile::{compile_file, compile_with};
pub use error::{CompileError, ConfigError, ErrorKind, ValueError};
pub use parser::{
    parse_document, parse_value, ParseOptions, Parser, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT,
};
pub use symbols::{Constant, SymbolTable};
pub use value::{Integer, Value};
