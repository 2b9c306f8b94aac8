//! File-level entry points: read a document, parse it, return the table.

use crate::error::CompileError;
use crate::parser::{ParseOptions, Parser};
use crate::source::{FileSystemProvider, SourceProvider};
use crate::symbols::SymbolTable;
use std::path::Path;

/// Compile the document at `path` from the filesystem with default options.
pub fn compile_file(path: &Path) -> Result<SymbolTable, CompileError> {
    compile_with(&FileSystemProvider, path, ParseOptions::default())
}

/// Compile the document at `path` read through `provider`.
pub fn compile_with(
    provider: &dyn SourceProvider,
    path: &Path,
    options: ParseOptions,
) -> Result<SymbolTable, CompileError> {
    let text = provider
        .read_source(path)
        .map_err(|source| CompileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let table = Parser::with_options(options).parse_document(&text)?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::source::InMemoryProvider;
    use crate::value::Value;

    #[test]
    fn compiles_from_memory() {
        let mut provider = InMemoryProvider::default();
        provider.insert("/cfg.conf", "size <- 3;\nsizes <- {@(size).4};\n");
        let table =
            compile_with(&provider, Path::new("/cfg.conf"), ParseOptions::default()).unwrap();
        assert_eq!(table.get("size"), Some(&Value::int(3)));
        assert_eq!(
            table.get("sizes"),
            Some(&Value::List(vec![Value::int(3), Value::int(4)]))
        );
    }

    #[test]
    fn io_error_names_path() {
        let provider = InMemoryProvider::default();
        let err = compile_with(&provider, Path::new("/nope.conf"), ParseOptions::default())
            .unwrap_err();
        assert!(matches!(err, CompileError::Io { .. }));
        assert!(err.to_string().starts_with("cannot read /nope.conf: "));
    }

    #[test]
    fn config_error_passes_through() {
        let mut provider = InMemoryProvider::default();
        provider.insert("/bad.conf", "a <- 1;\na <- 2;");
        let err =
            compile_with(&provider, Path::new("/bad.conf"), ParseOptions::default()).unwrap_err();
        match err {
            CompileError::Config(e) => {
                assert_eq!(e.kind(), ErrorKind::DuplicateName);
                assert_eq!(e.line(), 2);
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }
}
