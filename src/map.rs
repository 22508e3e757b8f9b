//! Map-backed sources: structured values, TOML tables, and plain string maps.
//!
//! A structured map treats only a missing key as absent (`null` is present and
//! rejected). A string map also treats the empty string as absent, matching
//! how the environment and file sources behave.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::constraints::Validation;
use crate::error::ConfigReaderError;
use crate::primitive::Primitive;
use crate::types::Locator;
use crate::validate;

/// A key/value container holding opaque structured values.
pub trait ValueMap {
    fn get_value(&self, key: &str) -> Option<&Value>;
}

impl ValueMap for serde_json::Map<String, Value> {
    fn get_value(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl ValueMap for HashMap<String, Value> {
    fn get_value(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl ValueMap for BTreeMap<String, Value> {
    fn get_value(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

/// Resolve `key` from a map of structured values.
pub fn from_value_map<T, M>(key: &str, map: &M, v: &Validation<T>) -> Result<T, ConfigReaderError>
where
    T: Primitive,
    M: ValueMap + ?Sized,
{
    let result = match map.get_value(key) {
        Some(raw) => validate::from_value(raw, v),
        None => {
            tracing::debug!(key, "key absent from map");
            validate::validate_missing(v)
        }
    };
    result.map_err(|e| e.with_locator(Locator::Key(key.to_string())))
}

/// Resolve `key` from a parsed TOML table.
///
/// TOML values are converted to their JSON shape first, so datetimes, arrays and
/// tables fail coercion the same way they would from a structured map.
pub fn from_toml_table<T: Primitive>(
    key: &str,
    table: &toml::Table,
    v: &Validation<T>,
) -> Result<T, ConfigReaderError> {
    let result = match table.get(key) {
        // JSON has no infinities or NaN; serde_json would turn them into null.
        Some(toml::Value::Float(f)) if !f.is_finite() => {
            Err(ConfigReaderError::InvalidPrimitiveType {
                value: f.to_string(),
                expected: T::KIND,
            })
        }
        Some(raw) => match serde_json::to_value(raw) {
            Ok(value) => validate::from_value(&value, v),
            Err(_) => Err(ConfigReaderError::InvalidPrimitiveType {
                value: raw.to_string(),
                expected: T::KIND,
            }),
        },
        None => {
            tracing::debug!(key, "key absent from table");
            validate::validate_missing(v)
        }
    };
    result.map_err(|e| e.with_locator(Locator::Key(key.to_string())))
}

/// Resolve `key` from a string map. Empty strings count as absent.
pub fn from_str_map<T: Primitive>(
    key: &str,
    map: &HashMap<String, String>,
    v: &Validation<T>,
) -> Result<T, ConfigReaderError> {
    let result = match map.get(key).map(String::as_str) {
        Some(raw) if !raw.is_empty() => validate::from_str(raw, v),
        _ => {
            tracing::debug!(key, "key absent or empty in string map");
            validate::validate_missing(v)
        }
    };
    result.map_err(|e| e.with_locator(Locator::Key(key.to_string())))
}
