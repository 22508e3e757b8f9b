use std::io;

use thiserror::Error;

use crate::types::{Locator, PrimitiveType};

#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum ConfigReaderError {
    #[error("cannot be null")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(configreader::cannot_be_null)))]
    CannotBeNull,

    #[error("{value} is not a valid {expected}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(code(configreader::invalid_primitive_type))
    )]
    InvalidPrimitiveType {
        value: String,
        expected: PrimitiveType,
    },

    #[error("must be defined")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(configreader::must_be_defined),
            help("set a value for this key, or make it optional with a default")
        )
    )]
    MustBeDefined,

    #[error("{value} must be greater than {bound}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(configreader::bound)))]
    MustBeGreaterThan { value: String, bound: String },

    #[error("{value} must be greater than or equal to {bound}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(configreader::bound)))]
    MustBeGreaterThanOrEqualTo { value: String, bound: String },

    #[error("{value} must be less than {bound}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(configreader::bound)))]
    MustBeLessThan { value: String, bound: String },

    #[error("{value} must be less than or equal to {bound}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(configreader::bound)))]
    MustBeLessThanOrEqualTo { value: String, bound: String },

    #[error("invalid value {value} (valid values: {})", .allowed.join(", "))]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(code(configreader::invalid_allowed_value))
    )]
    InvalidAllowedValue { value: String, allowed: Vec<String> },

    /// Rejection from a caller-supplied validator. The message is shown as-is.
    #[error("{0}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(configreader::validator)))]
    Validator(String),

    #[error("failed to read prompt input: {0}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(configreader::prompt)))]
    Prompt(#[source] io::Error),

    #[error("{locator}: {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(configreader::context)))]
    Context {
        locator: Locator,
        #[source]
        source: Box<ConfigReaderError>,
    },
}

impl ConfigReaderError {
    /// Attach the source locator to this error.
    pub fn with_locator(self, locator: Locator) -> Self {
        ConfigReaderError::Context {
            locator,
            source: Box::new(self),
        }
    }

    /// The innermost error, with all locator context peeled off.
    pub fn root(&self) -> &ConfigReaderError {
        match self {
            ConfigReaderError::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// The outermost locator, if this error carries one.
    pub fn locator(&self) -> Option<&Locator> {
        match self {
            ConfigReaderError::Context { locator, .. } => Some(locator),
            _ => None,
        }
    }
}
