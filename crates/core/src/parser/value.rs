use super::Parser;
use crate::error::ValueError;
use crate::lexer::{self, ValueToken};
use crate::symbols::SymbolTable;
use crate::value::Value;

impl Parser {
    /// Parse a value expression against the constants declared so far.
    pub fn parse_value(&self, text: &str) -> Result<Value, ValueError> {
        parse(text, &self.symbols, self.options.max_depth)
    }
}

pub(super) fn parse(
    text: &str,
    symbols: &SymbolTable,
    max_depth: usize,
) -> Result<Value, ValueError> {
    parse_at(text, symbols, max_depth, 0)
}

fn parse_at(
    text: &str,
    symbols: &SymbolTable,
    max_depth: usize,
    depth: usize,
) -> Result<Value, ValueError> {
    match lexer::classify(text) {
        ValueToken::Int(n) => Ok(Value::Int(n)),
        ValueToken::Ref(name) => {
            let value = symbols
                .get(name)
                .ok_or_else(|| ValueError::UnknownConstant {
                    name: name.to_owned(),
                })?;
            // The referenced lists count toward nesting at this position.
            if depth + value.depth() > max_depth {
                return Err(ValueError::NestingTooDeep { limit: max_depth });
            }
            Ok(value.clone())
        }
        ValueToken::List(inner) => {
            if depth >= max_depth {
                return Err(ValueError::NestingTooDeep { limit: max_depth });
            }
            lexer::split_list(inner)
                .into_iter()
                .map(|part| parse_at(part, symbols, max_depth, depth + 1))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List)
        }
        ValueToken::Invalid(text) => Err(ValueError::Syntax {
            text: text.to_owned(),
        }),
    }
}
