//! Shorthand codec for padding values.
//!
//! The encoding follows CSS box-model shorthand: up to four values in
//! clockwise order (top, right, bottom, left), minimized by dropping
//! sides that repeat, with an optional `;`-separated condition expression
//! appended.

use std::fmt::Write;

use smallvec::SmallVec;

use outset_core::{DecodeError, Padding, SideValue};

use crate::condition;

const VALUE_SEPARATOR: char = ' ';

/// Encode a padding as its shortest shorthand form.
///
/// Drops `left` when it equals `right`, then `bottom` when it equals
/// `top`, then `right` when it equals `top`, so uniform padding encodes
/// as a single value. The fit-offset sentinel participates in the
/// comparisons like any other value.
pub fn encode(padding: &Padding) -> String {
    let mut values: SmallVec<[SideValue; 4]> = SmallVec::new();
    values.push(padding.top);
    values.push(padding.right);
    values.push(padding.bottom);
    values.push(padding.left);

    if padding.right == padding.left {
        values.pop();
        if padding.top == padding.bottom {
            values.pop();
            if padding.top == padding.right {
                values.pop();
            }
        }
    }

    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(VALUE_SEPARATOR);
        }
        let _ = write!(out, "{value}");
    }

    if let Some(condition) = &padding.condition {
        out.push(condition::CLAUSE_SEPARATOR);
        out.push_str(&condition.expression);
    }
    out
}

/// Decode a shorthand string into a padding.
///
/// Returns `None` for an empty string, meaning "no padding configured"
/// (distinct from zero padding). Decoding never fails: unparseable side
/// tokens become 0, malformed condition clauses are dropped, and a token
/// count outside 1..=4 yields all-zero sides.
pub fn decode(input: &str) -> Option<Padding> {
    if input.is_empty() {
        return None;
    }

    let (values_segment, condition_segment) = split_expression(input);
    let tokens = side_tokens(values_segment);

    let mut padding = padding_from_tokens(&tokens);
    padding.condition = condition_segment.and_then(condition::parse);
    Some(padding)
}

/// Decode a shorthand string, reporting what the lenient path degrades on.
///
/// Accepts exactly the inputs that [`decode`] maps losslessly; anything
/// that would fall back to a default produces an error a host can show.
pub fn decode_strict(input: &str) -> Result<Padding, DecodeError> {
    if input.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let (values_segment, condition_segment) = split_expression(input);
    let tokens = side_tokens(values_segment);

    if tokens.is_empty() || tokens.len() > 4 {
        return Err(DecodeError::InvalidValueCount {
            count: tokens.len(),
        });
    }
    for token in &tokens {
        if *token != SideValue::FIT_TOKEN && token.parse::<f64>().is_err() {
            return Err(DecodeError::InvalidSideToken {
                token: (*token).to_string(),
            });
        }
    }

    let mut padding = padding_from_tokens(&tokens);
    padding.condition = match condition_segment {
        Some(segment) => condition::parse_strict(segment)?,
        None => None,
    };
    Ok(padding)
}

/// Split at the first `;` into the values segment and the (multi-clause)
/// condition expression.
fn split_expression(input: &str) -> (&str, Option<&str>) {
    match input.split_once(condition::CLAUSE_SEPARATOR) {
        Some((values, expression)) => (values, Some(expression)),
        None => (input, None),
    }
}

/// Split the values segment into side tokens, dropping empty ones.
fn side_tokens(segment: &str) -> SmallVec<[&str; 4]> {
    segment
        .split(VALUE_SEPARATOR)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Expand side tokens by CSS shorthand ordering. Any count outside 1..=4
/// yields all-zero sides.
fn padding_from_tokens(tokens: &[&str]) -> Padding {
    let side = SideValue::from_token;
    match *tokens {
        [all] => Padding::new(side(all), side(all), side(all), side(all)),
        [vertical, horizontal] => Padding::new(
            side(vertical),
            side(horizontal),
            side(vertical),
            side(horizontal),
        ),
        [top, horizontal, bottom] => Padding::new(
            side(top),
            side(horizontal),
            side(bottom),
            side(horizontal),
        ),
        [top, right, bottom, left] => {
            Padding::new(side(top), side(right), side(bottom), side(left))
        }
        _ => Padding::default(),
    }
}
