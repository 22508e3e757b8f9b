//! Source-agnostic core of the pipeline: coerce, check constraints, fill defaults.
//!
//! Nothing here knows where a value came from. The source adapters read their
//! medium, decide whether the value is absent, and hand off to
//! [`from_value`], [`from_str`] or [`validate_missing`]. Locator context is
//! added by the adapters, not here.
//!
//! Checks run in a fixed order so that a value failing several constraints
//! always reports the same one:
//!
//! 1. `greater_than`
//! 2. `greater_than_or_equal_to`
//! 3. `less_than`
//! 4. `less_than_or_equal_to`
//! 5. `allowed_values`
//! 6. the custom validator

use std::cmp::Ordering;

use serde_json::Value;

use crate::constraints::Validation;
use crate::error::ConfigReaderError;
use crate::primitive::Primitive;

/// Check bounds and membership, then run the custom validator.
///
/// The validator sees the value only after every declarative check passed, and
/// its output (possibly transformed) is the result.
pub fn validate<T: Primitive>(value: T, v: &Validation<T>) -> Result<T, ConfigReaderError> {
    validate_bounds(&value, v)?;

    match &v.validator {
        Some(validator) => validator(value).map_err(ConfigReaderError::Validator),
        None => Ok(value),
    }
}

/// Bound and membership checks only, without the custom validator.
///
/// A value that does not compare with a bound (a float NaN) fails that bound.
pub fn validate_bounds<T: Primitive>(value: &T, v: &Validation<T>) -> Result<(), ConfigReaderError> {
    if let Some(bound) = &v.greater_than
        && !compares_as(value, bound, &[Ordering::Greater])
    {
        return Err(ConfigReaderError::MustBeGreaterThan {
            value: value.render(),
            bound: bound.render(),
        });
    }
    if let Some(bound) = &v.greater_than_or_equal_to
        && !compares_as(value, bound, &[Ordering::Greater, Ordering::Equal])
    {
        return Err(ConfigReaderError::MustBeGreaterThanOrEqualTo {
            value: value.render(),
            bound: bound.render(),
        });
    }
    if let Some(bound) = &v.less_than
        && !compares_as(value, bound, &[Ordering::Less])
    {
        return Err(ConfigReaderError::MustBeLessThan {
            value: value.render(),
            bound: bound.render(),
        });
    }
    if let Some(bound) = &v.less_than_or_equal_to
        && !compares_as(value, bound, &[Ordering::Less, Ordering::Equal])
    {
        return Err(ConfigReaderError::MustBeLessThanOrEqualTo {
            value: value.render(),
            bound: bound.render(),
        });
    }

    if !v.allowed_values.is_empty() && !v.allowed_values.iter().any(|a| a == value) {
        return Err(ConfigReaderError::InvalidAllowedValue {
            value: value.render(),
            allowed: v.allowed_values.iter().map(T::render).collect(),
        });
    }

    Ok(())
}

fn compares_as<T: PartialOrd>(value: &T, bound: &T, accepted: &[Ordering]) -> bool {
    value
        .partial_cmp(bound)
        .is_some_and(|ord| accepted.contains(&ord))
}

/// Outcome for a value the source did not provide.
pub fn validate_missing<T: Primitive>(v: &Validation<T>) -> Result<T, ConfigReaderError> {
    if v.required {
        return Err(ConfigReaderError::MustBeDefined);
    }
    validate(v.default.clone(), v)
}

/// Coerce an opaque structured value and validate it.
pub fn from_value<T: Primitive>(raw: &Value, v: &Validation<T>) -> Result<T, ConfigReaderError> {
    if raw.is_null() {
        return Err(ConfigReaderError::CannotBeNull);
    }
    let casted = T::from_value(raw).ok_or_else(|| ConfigReaderError::InvalidPrimitiveType {
        value: raw.to_string(),
        expected: T::KIND,
    })?;
    validate(casted, v)
}

/// Parse a raw string and validate it. The empty string counts as absent.
pub fn from_str<T: Primitive>(raw: &str, v: &Validation<T>) -> Result<T, ConfigReaderError> {
    if raw.is_empty() {
        return validate_missing(v);
    }
    let casted = T::parse_str(raw).ok_or_else(|| ConfigReaderError::InvalidPrimitiveType {
        value: format!("{raw:?}"),
        expected: T::KIND,
    })?;
    validate(casted, v)
}
