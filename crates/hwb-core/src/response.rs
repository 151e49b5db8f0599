use serde_json::Value;

use crate::{errors::Error, Result};

/// Validate an API body against the documented shape and pull out the
/// homework list.
///
/// The body must be a JSON object with a `homeworks` key holding an array.
/// The array comes back untouched, order preserved; callers treat the first
/// element as the most recent submission.
pub fn extract_homeworks(response: &Value) -> Result<&[Value]> {
    let map = response.as_object().ok_or_else(|| {
        Error::Shape(format!("api response is not a mapping: {response}"))
    })?;

    let homeworks = map
        .get("homeworks")
        .ok_or_else(|| Error::MissingField("homeworks".to_string()))?;

    homeworks.as_array().map(Vec::as_slice).ok_or_else(|| {
        Error::Shape(format!("value under `homeworks` is not a list: {homeworks}"))
    })
}
