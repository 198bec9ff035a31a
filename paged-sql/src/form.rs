//! Runtime extraction of a [`Request`] from generic JSON.
//!
//! Web handlers that know their request shape should construct a
//! [`Request`] directly with its builder methods. This module covers the
//! generic path: a JSON payload whose fields are not known at compile
//! time, e.g. a search form forwarded as-is.
//!
//! Fields named `Page`, `PageSize`, `OrderBy`, `Select`, and `Search`
//! (exactly) populate the corresponding request fields. Every other field
//! becomes a where-argument keyed by the snake_case conversion of its
//! name, with zero values (null, `0`, `""`, `false`, empty arrays)
//! omitted so that absent form fields do not turn into filters.
//!
//! # Quick Start
//!
//! ```
//! use paged_sql::Request;
//!
//! let request = Request::parse(r#"{
//!     "Page": 1,
//!     "PageSize": 10,
//!     "OrderBy": ["name asc"],
//!     "Search": "bob",
//!     "DocAge": 128
//! }"#).unwrap();
//!
//! assert_eq!(request.page, 1);
//! assert_eq!(request.where_args[0].0, "doc_age");
//! ```

use miniserde::json::{Number, Value as JsonValue};
use std::fmt;

use crate::request::{Request, Value};

/// Error type for JSON request extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormError {
    /// Invalid JSON syntax or encoding.
    InvalidJson,
    /// Expected an object but got something else.
    ExpectedObject,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson => write!(f, "Invalid JSON syntax or encoding"),
            Self::ExpectedObject => write!(f, "Expected JSON object"),
        }
    }
}

impl std::error::Error for FormError {}

impl Value {
    /// Convert from a miniserde JSON scalar.
    ///
    /// Arrays and objects are not bindable values and convert to `None`.
    #[must_use]
    pub fn from_json(json: &JsonValue) -> Option<Self> {
        match json {
            JsonValue::Null => Some(Self::Null),
            JsonValue::Bool(b) => Some(Self::Bool(*b)),
            JsonValue::Number(n) => match n {
                Number::I64(i) => Some(Self::Int(*i)),
                Number::U64(u) => i64::try_from(*u).ok().map(Self::Int),
                Number::F64(f) => Some(Self::Float(*f)),
            },
            JsonValue::String(s) => Some(Self::String(s.clone())),
            JsonValue::Array(_) | JsonValue::Object(_) => None,
        }
    }
}

impl Request {
    /// Extract a request from a JSON string. See the [module docs](self).
    ///
    /// # Errors
    ///
    /// Returns `FormError` if the payload is not a JSON object.
    pub fn parse(json_str: &str) -> Result<Self, FormError> {
        let json: JsonValue =
            miniserde::json::from_str(json_str).map_err(|_| FormError::InvalidJson)?;
        Self::from_json(&json)
    }

    /// Extract a request from raw JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns `FormError` if the payload is not a JSON object.
    pub fn parse_bytes(bytes: &[u8]) -> Result<Self, FormError> {
        let json_str = std::str::from_utf8(bytes).map_err(|_| FormError::InvalidJson)?;
        Self::parse(json_str)
    }

    /// Extract a request from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns `FormError::ExpectedObject` for non-object payloads.
    pub fn from_json(json: &JsonValue) -> Result<Self, FormError> {
        let obj = match json {
            JsonValue::Object(o) => o,
            _ => return Err(FormError::ExpectedObject),
        };

        let mut request = Self::new();
        for (name, field) in obj.iter() {
            match name.as_str() {
                "Page" => {
                    // Non-numeric page fields are silently skipped.
                    if let Some(page) = as_u64(field).and_then(|v| u32::try_from(v).ok()) {
                        request.page = page;
                    }
                },
                "PageSize" => {
                    if let Some(size) = as_u64(field).and_then(|v| u16::try_from(v).ok()) {
                        request.page_size = size;
                    }
                },
                "OrderBy" => append_strings(&mut request.order_by, field),
                "Select" => append_strings(&mut request.select, field),
                "Search" => {
                    if let JsonValue::String(s) = field {
                        request.search = s.clone();
                    }
                },
                other => {
                    // Zero values mean "field not set" and are omitted.
                    if is_zero(field) {
                        continue;
                    }
                    if let Some(value) = Value::from_json(field) {
                        request.where_args.push((snake_case(other), value));
                    }
                },
            }
        }
        Ok(request)
    }
}

fn as_u64(value: &JsonValue) -> Option<u64> {
    match value {
        JsonValue::Number(Number::I64(i)) => u64::try_from(*i).ok(),
        JsonValue::Number(Number::U64(u)) => Some(*u),
        _ => None,
    }
}

/// Append a string or an array of strings; anything else is skipped.
fn append_strings(target: &mut Vec<String>, value: &JsonValue) {
    match value {
        JsonValue::String(s) => target.push(s.clone()),
        JsonValue::Array(items) => {
            for item in items.iter() {
                if let JsonValue::String(s) = item {
                    target.push(s.clone());
                }
            }
        },
        _ => {},
    }
}

fn is_zero(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::Bool(b) => !b,
        JsonValue::Number(n) => match n {
            Number::I64(i) => *i == 0,
            Number::U64(u) => *u == 0,
            Number::F64(f) => *f == 0.0,
        },
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(items) => items.is_empty(),
        JsonValue::Object(fields) => fields.is_empty(),
    }
}

/// Transform a CamelCase field name into snake_case.
fn snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    let mut last: Option<char> = None;
    for c in s.chars() {
        if c.is_uppercase() {
            if let Some(prev) = last {
                if !prev.is_uppercase() && prev != '_' {
                    out.push('_');
                }
            }
        }
        out.extend(c.to_lowercase());
        last = Some(c);
    }
    out
}
