//! Fail-fast variants of every source.
//!
//! For startup configuration the process cannot run without. Each `must_*`
//! function calls its result-returning counterpart and panics with the full,
//! locator-prefixed error message if resolution fails.

use std::collections::HashMap;
use std::path::Path;

use crate::constraints::Validation;
use crate::error::ConfigReaderError;
use crate::map::{self, ValueMap};
use crate::primitive::Primitive;
use crate::prompt::{self, LineReader};
use crate::reader::ConfigReader;
use crate::types::PromptOptions;

/// Unwrap a resolution result or abort.
pub trait Must<T> {
    fn must(self) -> T;
}

impl<T> Must<T> for Result<T, ConfigReaderError> {
    #[track_caller]
    fn must(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(error = %err, "required configuration could not be resolved");
                panic!("{err}")
            }
        }
    }
}

impl ConfigReader {
    #[track_caller]
    pub fn must_from_env<T: Primitive>(&self, name: &str, v: &Validation<T>) -> T {
        self.from_env(name, v).must()
    }

    #[track_caller]
    pub fn must_from_file<T: Primitive>(&self, path: impl AsRef<Path>, v: &Validation<T>) -> T {
        self.from_file(path, v).must()
    }

    #[track_caller]
    pub fn must_from_env_or_file<T: Primitive>(
        &self,
        name: &str,
        path: impl AsRef<Path>,
        v: &Validation<T>,
    ) -> T {
        self.from_env_or_file(name, path, v).must()
    }
}

#[track_caller]
pub fn must_from_env<T: Primitive>(name: &str, v: &Validation<T>) -> T {
    ConfigReader::default().must_from_env(name, v)
}

#[track_caller]
pub fn must_from_file<T: Primitive>(path: impl AsRef<Path>, v: &Validation<T>) -> T {
    ConfigReader::default().must_from_file(path, v)
}

#[track_caller]
pub fn must_from_env_or_file<T: Primitive>(
    name: &str,
    path: impl AsRef<Path>,
    v: &Validation<T>,
) -> T {
    ConfigReader::default().must_from_env_or_file(name, path, v)
}

#[track_caller]
pub fn must_from_value_map<T, M>(key: &str, map: &M, v: &Validation<T>) -> T
where
    T: Primitive,
    M: ValueMap + ?Sized,
{
    map::from_value_map(key, map, v).must()
}

#[track_caller]
pub fn must_from_str_map<T: Primitive>(
    key: &str,
    map: &HashMap<String, String>,
    v: &Validation<T>,
) -> T {
    map::from_str_map(key, map, v).must()
}

#[track_caller]
pub fn must_from_prompt<T, R>(opts: &PromptOptions, reader: &mut R, v: &Validation<T>) -> T
where
    T: Primitive,
    R: LineReader + ?Sized,
{
    prompt::from_prompt(opts, reader, v).must()
}
