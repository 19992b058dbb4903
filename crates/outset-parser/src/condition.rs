//! Parser for the condition expression language.
//!
//! Grammar: `expr := clause (';' clause)*` with
//! `clause := dimension operator number`. Input is normalized (all
//! whitespace stripped, lower-cased) before clauses are matched; the
//! normalized text is what a [`Condition`] carries for re-encoding.

use nom::{combinator::all_consuming, sequence::tuple};

use outset_core::{Condition, DecodeError, Dimension};

use crate::lexer::{comparator, dimension, integer, Comparator};

pub(crate) const CLAUSE_SEPARATOR: char = ';';

/// Parse a condition expression.
///
/// Returns `None` when the normalized input is empty. Clauses that do not
/// match the grammar are dropped silently; the returned condition still
/// carries the full normalized expression either way.
pub fn parse(input: &str) -> Option<Condition> {
    let normalized = normalize(input);
    if normalized.is_empty() {
        return None;
    }

    let mut condition = Condition::new(normalized.clone());
    for raw in normalized.split(CLAUSE_SEPARATOR) {
        if let Some((dimension, comparator, literal)) = clause(raw) {
            apply_clause(&mut condition, dimension, comparator, literal);
        }
    }
    Some(condition)
}

/// Parse a condition expression, rejecting malformed clauses instead of
/// dropping them.
pub fn parse_strict(input: &str) -> Result<Option<Condition>, DecodeError> {
    let normalized = normalize(input);
    if normalized.is_empty() {
        return Ok(None);
    }

    let mut condition = Condition::new(normalized.clone());
    for raw in normalized.split(CLAUSE_SEPARATOR) {
        match clause(raw) {
            Some((dimension, comparator, literal)) => {
                apply_clause(&mut condition, dimension, comparator, literal);
            }
            None => {
                return Err(DecodeError::MalformedClause {
                    clause: raw.to_string(),
                })
            }
        }
    }
    Ok(Some(condition))
}

/// Strip all whitespace and lower-case.
fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Match one clause in full. Partial matches (trailing garbage, missing
/// number) do not count.
fn clause(input: &str) -> Option<(Dimension, Comparator, f64)> {
    let (_, parsed) = all_consuming(tuple((dimension, comparator, integer)))(input).ok()?;
    Some(parsed)
}

/// Fold a clause into the condition's bounds.
///
/// Exclusive operators become inclusive bounds by adjusting the literal
/// (`>` bumps it up, `<` down); `=` pins both bounds. Later clauses for
/// the same bound overwrite earlier ones.
fn apply_clause(
    condition: &mut Condition,
    dimension: Dimension,
    comparator: Comparator,
    literal: f64,
) {
    let (min, max) = match dimension {
        Dimension::Width => (&mut condition.min_width, &mut condition.max_width),
        Dimension::Height => (&mut condition.min_height, &mut condition.max_height),
    };

    match comparator {
        Comparator::Greater => *min = Some(literal + 1.0),
        Comparator::GreaterOrEqual => *min = Some(literal),
        Comparator::Less => *max = Some(literal - 1.0),
        Comparator::LessOrEqual => *max = Some(literal),
        Comparator::Equal => {
            *min = Some(literal);
            *max = Some(literal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_none() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
    }

    #[test]
    fn test_exclusive_operators_adjust_to_inclusive() {
        let condition = parse("w>10").unwrap();
        assert_eq!(condition.min_width, Some(11.0));
        assert_eq!(condition.max_width, None);

        let condition = parse("w<10").unwrap();
        assert_eq!(condition.max_width, Some(9.0));
        assert_eq!(condition.min_width, None);
    }

    #[test]
    fn test_inclusive_operators() {
        let condition = parse("h>=5").unwrap();
        assert_eq!(condition.min_height, Some(5.0));

        let condition = parse("h<=7").unwrap();
        assert_eq!(condition.max_height, Some(7.0));
    }

    #[test]
    fn test_equality_pins_both_bounds() {
        let condition = parse("w=10").unwrap();
        assert_eq!(condition.min_width, Some(10.0));
        assert_eq!(condition.max_width, Some(10.0));
    }

    #[test]
    fn test_long_dimension_names() {
        let condition = parse("width<100;height>50").unwrap();
        assert_eq!(condition.max_width, Some(99.0));
        assert_eq!(condition.min_height, Some(51.0));
    }

    #[test]
    fn test_normalization() {
        let condition = parse(" W >= 10 ; H < 5 ").unwrap();
        assert_eq!(condition.expression, "w>=10;h<5");
        assert_eq!(condition.min_width, Some(10.0));
        assert_eq!(condition.max_height, Some(4.0));
    }

    #[test]
    fn test_malformed_clauses_are_dropped() {
        let condition = parse("w>10;banana;h<5").unwrap();
        assert_eq!(condition.min_width, Some(11.0));
        assert_eq!(condition.max_height, Some(4.0));
        assert_eq!(condition.expression, "w>10;banana;h<5");
    }

    #[test]
    fn test_partial_clause_matches_are_dropped() {
        // Trailing garbage and a missing literal both fail the grammar.
        let condition = parse("w>10pt;h<").unwrap();
        assert_eq!(condition.min_width, None);
        assert_eq!(condition.max_height, None);
        assert_eq!(condition.expression, "w>10pt;h<");
    }

    #[test]
    fn test_all_clauses_malformed_still_returns_expression() {
        let condition = parse("banana").unwrap();
        assert_eq!(condition, Condition::new("banana"));
    }

    #[test]
    fn test_last_write_wins() {
        let condition = parse("w>10;w>20").unwrap();
        assert_eq!(condition.min_width, Some(21.0));

        let condition = parse("h=10;h<=4").unwrap();
        assert_eq!(condition.min_height, Some(10.0));
        assert_eq!(condition.max_height, Some(4.0));
    }

    #[test]
    fn test_parse_strict_rejects_malformed() {
        assert_eq!(
            parse_strict("w>10;banana"),
            Err(DecodeError::MalformedClause {
                clause: "banana".to_string()
            })
        );
        assert_eq!(parse_strict(""), Ok(None));
        assert_eq!(parse_strict("w>10").unwrap().unwrap().min_width, Some(11.0));
    }
}
