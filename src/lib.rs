//! Typed, constraint-checked configuration values from wherever they live.
//!
//! Configreader resolves a single scalar (an integer, float, bool or string)
//! from one of several sources, checks it against a declarative set of
//! constraints, fills in a default when it is missing, and tells you exactly
//! which datum was wrong when it fails.
//!
//! ```ignore
//! use configreader::{ConfigReader, IntValidation};
//!
//! let reader = ConfigReader::default();
//! let workers: i64 = reader.from_env_or_file(
//!     "WORKERS",
//!     "/run/secrets/workers",
//!     &IntValidation::default().with_default(4).greater_than(0),
//! )?;
//! ```
//!
//! # Sources
//!
//! | Source | Absent when | Errors prefixed with |
//! |--------|-------------|----------------------|
//! | [`from_value_map`] | key missing (`null` is present, and rejected) | key |
//! | [`from_toml_table`] | key missing | key |
//! | [`from_str_map`] | key missing or empty | key |
//! | [`ConfigReader::from_env`] | variable unset or empty | `ENV:NAME` |
//! | [`ConfigReader::from_file`] | unreadable or zero bytes | file path |
//! | [`ConfigReader::from_env_or_file`] | both of the above | whichever was used |
//! | [`from_prompt`] | empty answer | (none) |
//!
//! Whatever the source, the value goes through the same pipeline, so a given
//! string resolves to the same typed value (or the same error) from a map, the
//! environment or a file.
//!
//! # Constraints
//!
//! A [`Validation`] holds the rules for one value: `required`, `default`,
//! `allowed_values`, four optional bounds, and an optional custom validator.
//! Checks run in a fixed order (bounds, then membership, then the validator)
//! and stop at the first failure, so error messages are reproducible.
//!
//! Defaults are not exempt. A missing, optional value resolves to
//! `validate(default)`, and a default that breaks its own bounds is an error at
//! resolution time.
//!
//! # Two error tiers
//!
//! Every source returns `Result<T, ConfigReaderError>`. For startup values the
//! process cannot run without, the `must_*` variants (and [`Must::must`] on any
//! result) panic with the full locator-prefixed message instead.
//!
//! # Testing
//!
//! [`ConfigReader::builder`] accepts a synthetic environment and a base
//! directory for relative paths, and prompts read through a [`LineReader`] you
//! pass in. Nothing in the pipeline touches global state except the default
//! reader's environment lookups.

pub mod error;
pub mod types;

mod constraints;
mod env;
mod file;
mod map;
mod must;
mod primitive;
mod prompt;
mod reader;
mod validate;

#[cfg(test)]
mod fixtures;

pub use constraints::{
    BoolValidation, FloatValidation, IntValidation, StringValidation, Validation, ValidatorFn,
};
pub use env::{from_env, from_env_or_file};
pub use error::ConfigReaderError;
pub use file::from_file;
pub use map::{ValueMap, from_str_map, from_toml_table, from_value_map};
pub use must::{
    Must, must_from_env, must_from_env_or_file, must_from_file, must_from_prompt,
    must_from_str_map, must_from_value_map,
};
pub use primitive::Primitive;
pub use prompt::{LineReader, StdinReader, from_prompt};
pub use reader::{ConfigReader, ConfigReaderBuilder};
pub use types::{Locator, PrimitiveType, PromptOptions};
pub use validate::{from_str, from_value, validate, validate_bounds, validate_missing};
