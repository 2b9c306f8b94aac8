use std::path::PathBuf;

/// Failure while parsing a single value expression.
///
/// Value errors carry no line context of their own; the statement parser
/// attaches the line via [`ConfigError::Value`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// `@(name)` where `name` has not been declared on an earlier line.
    #[error("unknown constant '{name}'")]
    UnknownConstant { name: String },

    /// Text that is not an integer literal, a reference, or a list.
    #[error("invalid value '{text}'")]
    Syntax { text: String },

    /// A list nested deeper than the configured limit.
    #[error("list nesting exceeds depth {limit}")]
    NestingTooDeep { limit: usize },
}

/// A statement-level parse error, always tagged with its 1-based line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("line {line}: missing ';'")]
    MissingTerminator { line: u32 },

    #[error("line {line}: missing '<-'")]
    MissingAssignment { line: u32 },

    #[error("line {line}: invalid name '{name}'")]
    InvalidName { line: u32, name: String },

    #[error("line {line}: duplicate declaration of '{name}' (first declared at line {first_line})")]
    DuplicateName {
        line: u32,
        name: String,
        first_line: u32,
    },

    #[error("line {line}: {source}")]
    Value { line: u32, source: ValueError },
}

/// Flat classification of every failure the parser can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingTerminator,
    MissingAssignment,
    InvalidName,
    DuplicateName,
    UnknownConstant,
    Syntax,
    NestingTooDeep,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::MissingTerminator => "MissingTerminator",
            ErrorKind::MissingAssignment => "MissingAssignment",
            ErrorKind::InvalidName => "InvalidName",
            ErrorKind::DuplicateName => "DuplicateName",
            ErrorKind::UnknownConstant => "UnknownConstant",
            ErrorKind::Syntax => "Syntax",
            ErrorKind::NestingTooDeep => "NestingTooDeep",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ValueError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValueError::UnknownConstant { .. } => ErrorKind::UnknownConstant,
            ValueError::Syntax { .. } => ErrorKind::Syntax,
            ValueError::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
        }
    }

    /// Attach the line of the statement that contained the value.
    pub fn at_line(self, line: u32) -> ConfigError {
        ConfigError::Value { line, source: self }
    }
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::MissingTerminator { .. } => ErrorKind::MissingTerminator,
            ConfigError::MissingAssignment { .. } => ErrorKind::MissingAssignment,
            ConfigError::InvalidName { .. } => ErrorKind::InvalidName,
            ConfigError::DuplicateName { .. } => ErrorKind::DuplicateName,
            ConfigError::Value { source, .. } => source.kind(),
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            ConfigError::MissingTerminator { line }
            | ConfigError::MissingAssignment { line }
            | ConfigError::InvalidName { line, .. }
            | ConfigError::DuplicateName { line, .. }
            | ConfigError::Value { line, .. } => *line,
        }
    }

    /// The offending name or value text, when the error has one.
    pub fn token(&self) -> Option<&str> {
        match self {
            ConfigError::MissingTerminator { .. } | ConfigError::MissingAssignment { .. } => None,
            ConfigError::InvalidName { name, .. } | ConfigError::DuplicateName { name, .. } => {
                Some(name)
            }
            ConfigError::Value { source, .. } => match source {
                ValueError::UnknownConstant { name } => Some(name),
                ValueError::Syntax { text } => Some(text),
                ValueError::NestingTooDeep { .. } => None,
            },
        }
    }

    /// Serialize to the JSON shape used by `--error-format json` and the
    /// negative conformance fixtures. All fields are always present.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "kind":    self.kind().as_str(),
            "line":    self.line(),
            "message": self.to_string(),
            "token":   self.token(),
        })
    }
}

/// Error from the file-level [`compile`](crate::compile) entry points.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_inherits_statement_line() {
        let err = ValueError::UnknownConstant {
            name: "Y".to_owned(),
        }
        .at_line(4);
        assert_eq!(err.line(), 4);
        assert_eq!(err.kind(), ErrorKind::UnknownConstant);
        assert_eq!(err.token(), Some("Y"));
        assert_eq!(err.to_string(), "line 4: unknown constant 'Y'");
    }

    #[test]
    fn duplicate_message_names_first_declaration() {
        let err = ConfigError::DuplicateName {
            line: 2,
            name: "a".to_owned(),
            first_line: 1,
        };
        assert_eq!(
            err.to_string(),
            "line 2: duplicate declaration of 'a' (first declared at line 1)"
        );
    }

    #[test]
    fn json_always_has_token_field() {
        let err = ConfigError::MissingTerminator { line: 3 };
        let json = err.to_json_value();
        assert_eq!(json["kind"], "MissingTerminator");
        assert_eq!(json["line"], 3);
        assert_eq!(json["message"], "line 3: missing ';'");
        assert!(json["token"].is_null());
        assert!(json.as_object().unwrap().contains_key("token"));
    }

    #[test]
    fn nesting_error_has_no_token() {
        let err = ValueError::NestingTooDeep { limit: 2 }.at_line(1);
        assert_eq!(err.kind(), ErrorKind::NestingTooDeep);
        assert_eq!(err.token(), None);
        assert_eq!(err.to_string(), "line 1: list nesting exceeds depth 2");
    }
}
