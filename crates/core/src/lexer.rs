//! Lexical rules of the configuration language.
//!
//! Everything here works on raw `&str` slices and never consults the symbol
//! table; the parser decides what a classified piece of text means.

use crate::value::Integer;

/// Statement terminator.
pub const TERMINATOR: char = ';';
/// Assignment marker between name and value.
pub const ASSIGN: &str = "<-";
/// Separator between list elements.
pub const LIST_SEPARATOR: char = '.';

/// Syntactic category of a trimmed value expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueToken<'a> {
    /// An integer literal.
    Int(Integer),
    /// The name between `@(` and `)`, untrimmed and possibly empty.
    Ref(&'a str),
    /// The text between `{` and `}`, untrimmed.
    List(&'a str),
    /// Anything else.
    Invalid(&'a str),
}

/// Split a document into lines.
///
/// Line boundaries are `\n`, `\r\n`, a lone `\r`, and the other vertical
/// separators: VT, FF, FS, GS, RS, NEL, LS, PS. A final boundary does not
/// start an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Classify a value expression. Leading and trailing whitespace is ignored.
/// The checks run in a fixed order: integer, reference, list.
pub fn classify(text: &str) -> ValueToken<'_> {
    let text = text.trim();
    if let Some(n) = Integer::parse(text) {
        return ValueToken::Int(n);
    }
    if let Some(name) = text
        .strip_prefix("@(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return ValueToken::Ref(name);
    }
    if let Some(inner) = text.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')) {
        return ValueToken::List(inner);
    }
    ValueToken::Invalid(text)
}

/// One ASCII digit 1-9 followed by any number of ASCII digits.
pub fn is_integer_literal(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some('1'..='9') => chars.all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

/// One or more ASCII letters or underscores, nothing else.
pub fn is_identifier(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic() || c == '_')
}

/// Split list contents on every separator, trimming each part.
///
/// The split is purely textual: separators inside a nested list's braces are
/// split on as well. An empty (or all-whitespace) body yields no parts.
pub fn split_list(inner: &str) -> Vec<&str> {
    let inner = inner.trim();
    if inner.is_empty() {
        return Vec::new();
    }
    inner.split(LIST_SEPARATOR).map(str::trim).collect()
}

/// Strip the trailing terminator from a trimmed statement.
pub fn strip_terminator(line: &str) -> Option<&str> {
    line.trim().strip_suffix(TERMINATOR)
}

/// Split a statement body at the first assignment marker into trimmed
/// `(name, value)` halves.
pub fn split_assignment(body: &str) -> Option<(&str, &str)> {
    body.split_once(ASSIGN)
        .map(|(name, value)| (name.trim(), value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_literal_rule() {
        assert!(is_integer_literal("1"));
        assert!(is_integer_literal("907"));
        assert!(!is_integer_literal("0"));
        assert!(!is_integer_literal("007"));
        assert!(!is_integer_literal("+5"));
        assert!(!is_integer_literal("-5"));
        assert!(!is_integer_literal("5.0"));
        assert!(!is_integer_literal(""));
        assert!(!is_integer_literal("١٢"));
    }

    #[test]
    fn identifier_rule() {
        assert!(is_identifier("port"));
        assert!(is_identifier("_MAX_size"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("port2"));
        assert!(!is_identifier("max-size"));
        assert!(!is_identifier("größe"));
    }

    #[test]
    fn classify_trims_and_orders() {
        assert_eq!(classify("  42 "), ValueToken::Int(Integer::parse("42").unwrap()));
        assert_eq!(classify("@(total)"), ValueToken::Ref("total"));
        assert_eq!(classify("@()"), ValueToken::Ref(""));
        assert_eq!(classify("@( x )"), ValueToken::Ref(" x "));
        assert_eq!(classify("{ 1 . 2 }"), ValueToken::List(" 1 . 2 "));
        assert_eq!(classify("{}"), ValueToken::List(""));
        assert_eq!(classify("0"), ValueToken::Invalid("0"));
        assert_eq!(classify("@(x"), ValueToken::Invalid("@(x"));
        assert_eq!(classify("{1.2"), ValueToken::Invalid("{1.2"));
        assert_eq!(classify("}"), ValueToken::Invalid("}"));
    }

    #[test]
    fn split_list_ignores_brace_depth() {
        assert_eq!(split_list(" 1 . 2 .3"), vec!["1", "2", "3"]);
        assert_eq!(split_list("   "), Vec::<&str>::new());
        assert_eq!(split_list("{1.2}.3"), vec!["{1", "2}", "3"]);
        assert_eq!(split_list("1..2"), vec!["1", "", "2"]);
    }

    #[test]
    fn split_lines_on_every_break_style() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\r\rb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\u{2028}b\u{0c}c"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("\n\n"), vec!["", ""]);
        assert_eq!(split_lines(""), Vec::<&str>::new());
    }

    #[test]
    fn statement_surface() {
        assert_eq!(strip_terminator("  a <- 5;  "), Some("a <- 5"));
        assert_eq!(strip_terminator("a <- 5"), None);
        assert_eq!(split_assignment(" a <- b <- 5 "), Some(("a", "b <- 5")));
        assert_eq!(split_assignment("a = 5"), None);
    }
}
