use std::path::Path;

use crate::constraints::Validation;
use crate::error::ConfigReaderError;
use crate::primitive::Primitive;
use crate::reader::ConfigReader;
use crate::types::Locator;
use crate::validate;

impl ConfigReader {
    /// Resolve a value from the environment variable `name`.
    ///
    /// Unset and empty variables are absent. Errors are reported as `ENV:{name}`.
    pub fn from_env<T: Primitive>(
        &self,
        name: &str,
        v: &Validation<T>,
    ) -> Result<T, ConfigReaderError> {
        let result = match self.env_var(name) {
            Some(raw) if !raw.is_empty() => validate::from_str(&raw, v),
            _ => {
                tracing::debug!(env = name, "environment variable unset or empty");
                validate::validate_missing(v)
            }
        };
        result.map_err(|e| e.with_locator(Locator::Env(name.to_string())))
    }

    /// Prefer the environment variable `name`; fall back to the file at `path`.
    ///
    /// The file is consulted only when the variable is unset or empty, and then
    /// entirely replaces it, defaulting included.
    pub fn from_env_or_file<T: Primitive>(
        &self,
        name: &str,
        path: impl AsRef<Path>,
        v: &Validation<T>,
    ) -> Result<T, ConfigReaderError> {
        if self.env_var(name).is_some_and(|raw| !raw.is_empty()) {
            return self.from_env(name, v);
        }
        tracing::trace!(env = name, "falling back to file");
        self.from_file(path, v)
    }
}

/// [`ConfigReader::from_env`] against the process environment.
pub fn from_env<T: Primitive>(name: &str, v: &Validation<T>) -> Result<T, ConfigReaderError> {
    ConfigReader::default().from_env(name, v)
}

/// [`ConfigReader::from_env_or_file`] against the process environment.
pub fn from_env_or_file<T: Primitive>(
    name: &str,
    path: impl AsRef<Path>,
    v: &Validation<T>,
) -> Result<T, ConfigReaderError> {
    ConfigReader::default().from_env_or_file(name, path, v)
}
