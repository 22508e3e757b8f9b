use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Entry point for the environment and file sources.
///
/// A default reader looks at the real process environment and resolves file
/// paths as given. The builder swaps either of those out, which is how tests
/// and embedders get deterministic behavior without touching global state.
///
/// A reader is immutable once built and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ConfigReader {
    env_vars: Option<HashMap<String, String>>,
    base_dir: Option<PathBuf>,
}

impl ConfigReader {
    pub fn builder() -> ConfigReaderBuilder {
        ConfigReaderBuilder::default()
    }

    /// Look up an environment variable. Unset and non-UTF-8 both read as `None`.
    pub(crate) fn env_var(&self, name: &str) -> Option<String> {
        match &self.env_vars {
            Some(vars) => vars.get(name).cloned(),
            None => std::env::var(name).ok(),
        }
    }

    /// Relative paths are joined onto the base directory, if one is set.
    pub(crate) fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Builder for a [`ConfigReader`].
#[derive(Debug, Default)]
pub struct ConfigReaderBuilder {
    env_vars: Option<HashMap<String, String>>,
    base_dir: Option<PathBuf>,
}

impl ConfigReaderBuilder {
    /// Replace the process environment with a fixed set of variables.
    ///
    /// Takes an iterator so callers can pass `std::env::vars()` or synthetic data.
    pub fn env_vars<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env_vars = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Directory that relative file paths are resolved against
    /// (e.g. a secrets mount such as `/run/secrets`).
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn build(self) -> ConfigReader {
        ConfigReader {
            env_vars: self.env_vars,
            base_dir: self.base_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_env_replaces_process_env() {
        let reader = ConfigReader::builder()
            .env_vars([("MYAPP_PORT", "3000")])
            .build();
        assert_eq!(reader.env_var("MYAPP_PORT").as_deref(), Some("3000"));
        assert_eq!(reader.env_var("PATH"), None);
    }

    #[test]
    fn empty_synthetic_env_hides_everything() {
        let reader = ConfigReader::builder()
            .env_vars(Vec::<(String, String)>::new())
            .build();
        assert_eq!(reader.env_var("HOME"), None);
    }

    #[test]
    fn relative_path_joined_to_base_dir() {
        let reader = ConfigReader::builder().base_dir("/run/secrets").build();
        assert_eq!(
            reader.resolve_path(Path::new("db_password")),
            PathBuf::from("/run/secrets/db_password")
        );
    }

    #[test]
    fn absolute_path_ignores_base_dir() {
        let reader = ConfigReader::builder().base_dir("/run/secrets").build();
        assert_eq!(
            reader.resolve_path(Path::new("/etc/myapp/port")),
            PathBuf::from("/etc/myapp/port")
        );
    }

    #[test]
    fn default_reader_keeps_paths() {
        let reader = ConfigReader::default();
        assert_eq!(
            reader.resolve_path(Path::new("port")),
            PathBuf::from("port")
        );
    }
}
