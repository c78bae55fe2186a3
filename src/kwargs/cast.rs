//! Type-directed string coercion
//!
//! The reference value's tag decides how a string is parsed. Only booleans,
//! integers, floats and lists of those are coerced; every other reference
//! passes the string through unchanged.

use crate::error::{Error, Result};
use crate::value::Value;

const TRUE_WORDS: [&str; 5] = ["true", "t", "yes", "y", "1"];
const FALSE_WORDS: [&str; 5] = ["false", "f", "no", "n", "0"];

/// Coerce `input` to the type of `reference`. `name` is only used to label
/// the error.
pub fn cast_str(name: &str, reference: &Value, input: &str) -> Result<Value> {
    match reference {
        Value::List(items) => {
            let tokens = input.split_whitespace();
            match items.first() {
                Some(exemplar) => tokens
                    .map(|token| cast_scalar(name, exemplar, token))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::List),
                None => Ok(Value::List(tokens.map(Value::from).collect())),
            }
        }
        other => cast_scalar(name, other, input),
    }
}

fn cast_scalar(name: &str, reference: &Value, input: &str) -> Result<Value> {
    let fail = |expected: &'static str| Error::Cast {
        name: name.to_string(),
        input: input.to_string(),
        expected,
    };
    match reference {
        Value::Bool(_) => parse_bool(input).map(Value::Bool).ok_or_else(|| fail("boolean")),
        Value::Int(_) => input.trim().parse::<i64>().map(Value::Int).map_err(|_| fail("integer")),
        Value::Float(_) => input.trim().parse::<f64>().map(Value::Float).map_err(|_| fail("float")),
        _ => Ok(Value::from(input)),
    }
}

/// Case-insensitive truth words; anything else is rejected.
pub fn parse_bool(input: &str) -> Option<bool> {
    let lowered = input.trim().to_ascii_lowercase();
    if TRUE_WORDS.contains(&lowered.as_str()) {
        Some(true)
    } else if FALSE_WORDS.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}
