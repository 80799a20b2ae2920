//! Slash-separated lookups into parsed JSON bodies.
//!
//! A path is a list of segments separated by `/`. Each segment names an object
//! field and may be followed by one or more `[index]` suffixes into arrays:
//!
//! ```text
//! data[0]/first_name
//! support/url
//! matrix[1][0]
//! ```

use serde_json::{Map, Value};
use std::fmt;

/// Errors that can occur while resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonPathError {
    /// The segment does not exist in the document.
    NotFound(String),

    /// The path itself is malformed.
    InvalidPath(String),
}

impl fmt::Display for JsonPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonPathError::NotFound(segment) => write!(f, "Path segment not found: {}", segment),
            JsonPathError::InvalidPath(msg) => write!(f, "Invalid path: {}", msg),
        }
    }
}

impl std::error::Error for JsonPathError {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PathSegment {
    Field(String),
    ArrayIndex(usize),
}

/// Resolves `path` against `json` and renders the value as text.
///
/// Strings come back without quotes, numbers and booleans as written, `null`
/// as `"null"`, and arrays or objects as compact JSON.
///
/// # Examples
///
/// ```
/// use rest_harness::json_path::value_by_jpath;
/// use serde_json::json;
///
/// let body = json!({"data": [{"first_name": "Eve"}]});
/// assert_eq!(value_by_jpath(&body, "data[0]/first_name").unwrap(), "Eve");
/// ```
pub fn value_by_jpath(json: &Value, path: &str) -> Result<String, JsonPathError> {
    let value = resolve(json, path)?;
    Ok(value_to_string(value))
}

/// Same as [`value_by_jpath`], starting from a parsed JSON object.
pub fn value_in_object(object: &Map<String, Value>, path: &str) -> Result<String, JsonPathError> {
    let segments = parse_segments(path)?;
    let mut iter = segments.into_iter();

    let mut current = match iter.next() {
        Some(PathSegment::Field(name)) => object
            .get(&name)
            .ok_or(JsonPathError::NotFound(name))?,
        Some(PathSegment::ArrayIndex(index)) => {
            return Err(JsonPathError::NotFound(format!("[{}]", index)))
        }
        None => return Err(JsonPathError::InvalidPath("empty path".to_string())),
    };

    for segment in iter {
        current = step(current, segment)?;
    }

    Ok(value_to_string(current))
}

/// Walks `path` and returns a reference to the value it names.
pub fn resolve<'a>(json: &'a Value, path: &str) -> Result<&'a Value, JsonPathError> {
    parse_segments(path)?
        .into_iter()
        .try_fold(json, |current, segment| step(current, segment))
}

fn step(current: &Value, segment: PathSegment) -> Result<&Value, JsonPathError> {
    match segment {
        PathSegment::Field(name) => current
            .as_object()
            .and_then(|obj| obj.get(&name))
            .ok_or(JsonPathError::NotFound(name)),
        PathSegment::ArrayIndex(index) => current
            .as_array()
            .and_then(|items| items.get(index))
            .ok_or_else(|| JsonPathError::NotFound(format!("[{}]", index))),
    }
}

fn parse_segments(path: &str) -> Result<Vec<PathSegment>, JsonPathError> {
    let path = path.trim().trim_matches('/');
    if path.is_empty() {
        return Err(JsonPathError::InvalidPath("empty path".to_string()));
    }

    let mut segments = Vec::new();

    for part in path.split('/') {
        let (field, mut indexes) = match part.find('[') {
            Some(pos) => (&part[..pos], &part[pos..]),
            None => (part, ""),
        };

        if field.is_empty() && indexes.is_empty() {
            return Err(JsonPathError::InvalidPath(format!(
                "empty segment in '{}'",
                path
            )));
        }
        if !field.is_empty() {
            segments.push(PathSegment::Field(field.to_string()));
        }

        while !indexes.is_empty() {
            let close = indexes
                .find(']')
                .filter(|_| indexes.starts_with('['))
                .ok_or_else(|| {
                    JsonPathError::InvalidPath(format!("unbalanced brackets in '{}'", part))
                })?;
            let index = indexes[1..close].trim().parse::<usize>().map_err(|_| {
                JsonPathError::InvalidPath(format!(
                    "'{}' is not an array index",
                    &indexes[1..close]
                ))
            })?;
            segments.push(PathSegment::ArrayIndex(index));
            indexes = &indexes[close + 1..];
        }
    }

    Ok(segments)
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        // Display on Value is compact JSON and cannot fail.
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
