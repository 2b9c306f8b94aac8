use super::Parser;
use crate::error::ConfigError;
use crate::lexer;
use crate::symbols::Constant;

impl Parser {
    /// Parse one statement `name <- value;` and bind it.
    ///
    /// Checks run in order: terminator, assignment marker, name shape,
    /// redeclaration, value. The table is only modified when all of them pass.
    pub fn parse_statement(
        &mut self,
        line_text: &str,
        line: u32,
    ) -> Result<&Constant, ConfigError> {
        let body = lexer::strip_terminator(line_text)
            .ok_or(ConfigError::MissingTerminator { line })?;

        let (name, value_text) =
            lexer::split_assignment(body).ok_or(ConfigError::MissingAssignment { line })?;

        if !lexer::is_identifier(name) {
            return Err(ConfigError::InvalidName {
                line,
                name: name.to_owned(),
            });
        }

        if let Some(first) = self.symbols.constant(name) {
            return Err(ConfigError::DuplicateName {
                line,
                name: name.to_owned(),
                first_line: first.line.unwrap_or(0),
            });
        }

        let value = self.parse_value(value_text).map_err(|e| e.at_line(line))?;

        Ok(self.symbols.bind(name.to_owned(), value, Some(line)))
    }
}
