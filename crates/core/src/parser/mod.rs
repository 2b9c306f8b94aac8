//! Line-oriented parser for constant declarations.
//!
//! A [`Parser`] owns one [`SymbolTable`] for the duration of a parse. Each
//! non-blank line is a statement `name <- value;`; values may refer to
//! constants declared on earlier lines. The first error aborts the parse.

use crate::error::{ConfigError, ValueError};
use crate::lexer;
use crate::symbols::SymbolTable;
use crate::value::Value;

mod statement;
mod value;

/// Default limit on list nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Highest accepted nesting limit. serde_json refuses to read documents
/// nested past 128 containers, and the rendered table adds one object level.
pub const MAX_DEPTH_LIMIT: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest list nesting accepted in a value, references included.
    /// Capped at [`MAX_DEPTH_LIMIT`].
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// A single parse session.
#[derive(Debug, Default)]
pub struct Parser {
    symbols: SymbolTable,
    options: ParseOptions,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Parser {
            symbols: SymbolTable::new(),
            options: ParseOptions {
                max_depth: options.max_depth.min(MAX_DEPTH_LIMIT),
            },
        }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Constants declared so far.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }

    /// Parse a whole document. Blank and whitespace-only lines are skipped;
    /// line numbers are 1-based and count every line, blank or not.
    pub fn parse_document(mut self, text: &str) -> Result<SymbolTable, ConfigError> {
        for (i, line) in lexer::split_lines(text).into_iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            self.parse_statement(line, i as u32 + 1)?;
        }
        Ok(self.symbols)
    }
}

/// Parse a document with default options.
pub fn parse_document(text: &str) -> Result<SymbolTable, ConfigError> {
    Parser::new().parse_document(text)
}

/// Parse a single value expression against an existing table.
pub fn parse_value(text: &str, symbols: &SymbolTable) -> Result<Value, ValueError> {
    value::parse(text, symbols, ParseOptions::default().max_depth)
}
