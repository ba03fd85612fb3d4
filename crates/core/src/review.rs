//! Review submission constants and validation functions.
//!
//! Submissions arrive as loosely typed JSON. A field counts as missing when
//! it is absent, `null`, `false`, an empty string, or zero; every missing
//! field is reported with the same [`REQUIRED_FIELDS_MESSAGE`]. Present
//! fields must additionally have the right shape (text or integer).

use serde_json::Value;

use crate::error::CoreError;
use crate::types::Vote;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Reported whenever any of the four review fields is missing.
pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required: movieId, name, vote, text";

/// JSON name of the movie reference field.
pub const FIELD_MOVIE_ID: &str = "movieId";

/// JSON name of the reviewer name field.
pub const FIELD_NAME: &str = "name";

/// JSON name of the rating field.
pub const FIELD_VOTE: &str = "vote";

/// JSON name of the review body field.
pub const FIELD_TEXT: &str = "text";

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

fn missing() -> CoreError {
    CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())
}

/// Whether a submitted value counts as absent.
pub fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

/// Require a non-empty string field.
pub fn require_text(field: &str, value: Option<&Value>) -> Result<String, CoreError> {
    if is_missing(value) {
        return Err(missing());
    }
    match value {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(CoreError::Validation(format!("{field} must be a string"))),
    }
}

/// Require a non-zero integer field.
///
/// Accepts JSON numbers without a fractional part and strings holding a
/// decimal integer (surrounding whitespace is ignored).
pub fn require_integer(field: &str, value: Option<&Value>) -> Result<i64, CoreError> {
    if is_missing(value) {
        return Err(missing());
    }
    let parsed = match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match parsed {
        Some(0) => Err(missing()),
        Some(n) => Ok(n),
        None => Err(CoreError::Validation(format!("{field} must be an integer"))),
    }
}

/// Require a vote. No range is enforced beyond fitting the column type.
pub fn require_vote(value: Option<&Value>) -> Result<Vote, CoreError> {
    let vote = require_integer(FIELD_VOTE, value)?;
    Vote::try_from(vote)
        .map_err(|_| CoreError::Validation(format!("{FIELD_VOTE} is out of range")))
}
