//! Lexer for condition-expression clauses.
//!
//! Clauses are matched against normalized input (whitespace stripped,
//! lower-cased), so the combinators here only deal with lowercase text.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    combinator::{map, value},
    IResult,
};

use outset_core::Dimension;

/// A comparison operator in a condition clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// `>` (exclusive minimum)
    Greater,
    /// `>=` (inclusive minimum)
    GreaterOrEqual,
    /// `<` (exclusive maximum)
    Less,
    /// `<=` (inclusive maximum)
    LessOrEqual,
    /// `=` (exact size)
    Equal,
}

/// Parse a dimension name (`height`, `h`, `width`, `w`), classified by its
/// first character.
pub fn dimension(input: &str) -> IResult<&str, Dimension> {
    map(
        alt((tag("height"), tag("width"), tag("h"), tag("w"))),
        |name: &str| {
            if name.starts_with('h') {
                Dimension::Height
            } else {
                Dimension::Width
            }
        },
    )(input)
}

/// Parse a comparison operator. Two-character operators are tried first so
/// `>=` does not lex as `>` followed by a stray `=`.
pub fn comparator(input: &str) -> IResult<&str, Comparator> {
    alt((
        value(Comparator::GreaterOrEqual, tag(">=")),
        value(Comparator::LessOrEqual, tag("<=")),
        value(Comparator::Greater, tag(">")),
        value(Comparator::Less, tag("<")),
        value(Comparator::Equal, tag("=")),
    ))(input)
}

/// Parse an unsigned integer literal.
pub fn integer(input: &str) -> IResult<&str, f64> {
    map(
        take_while1(|c: char| c.is_ascii_digit()),
        |digits: &str| digits.parse().unwrap_or(0.0),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_names() {
        assert_eq!(dimension("w"), Ok(("", Dimension::Width)));
        assert_eq!(dimension("width"), Ok(("", Dimension::Width)));
        assert_eq!(dimension("h"), Ok(("", Dimension::Height)));
        assert_eq!(dimension("height"), Ok(("", Dimension::Height)));
        assert!(dimension("size").is_err());
    }

    #[test]
    fn test_comparator_longest_match() {
        assert_eq!(comparator(">=5"), Ok(("5", Comparator::GreaterOrEqual)));
        assert_eq!(comparator("<=5"), Ok(("5", Comparator::LessOrEqual)));
        assert_eq!(comparator(">5"), Ok(("5", Comparator::Greater)));
        assert_eq!(comparator("<5"), Ok(("5", Comparator::Less)));
        assert_eq!(comparator("=5"), Ok(("5", Comparator::Equal)));
    }

    #[test]
    fn test_integer() {
        assert_eq!(integer("320"), Ok(("", 320.0)));
        assert_eq!(integer("5;rest"), Ok((";rest", 5.0)));
        assert!(integer("-3").is_err());
        assert!(integer("").is_err());
    }
}
