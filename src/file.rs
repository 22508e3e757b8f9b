use std::path::Path;

use crate::constraints::Validation;
use crate::error::ConfigReaderError;
use crate::primitive::Primitive;
use crate::reader::ConfigReader;
use crate::types::Locator;
use crate::validate;

impl ConfigReader {
    /// Resolve a value from the full contents of the file at `path`.
    ///
    /// A file that cannot be read, or is zero bytes long, is absent. Content is
    /// passed on as-is; numeric and boolean coercion ignore surrounding
    /// whitespace, strings keep it. Errors are reported against the path that
    /// was actually read.
    pub fn from_file<T: Primitive>(
        &self,
        path: impl AsRef<Path>,
        v: &Validation<T>,
    ) -> Result<T, ConfigReaderError> {
        let path = self.resolve_path(path.as_ref());

        let result = match std::fs::read(&path) {
            Ok(bytes) if !bytes.is_empty() => {
                validate::from_str(&String::from_utf8_lossy(&bytes), v)
            }
            Ok(_) => {
                tracing::debug!(path = %path.display(), "file is empty");
                validate::validate_missing(v)
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "file unreadable, treating as absent");
                validate::validate_missing(v)
            }
        };
        result.map_err(|e| e.with_locator(Locator::File(path)))
    }
}

/// [`ConfigReader::from_file`] with paths taken as given.
pub fn from_file<T: Primitive>(
    path: impl AsRef<Path>,
    v: &Validation<T>,
) -> Result<T, ConfigReaderError> {
    ConfigReader::default().from_file(path, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{BoolValidation, IntValidation, StringValidation};
    use crate::fixtures::test::write_file;
    use tempfile::TempDir;

    #[test]
    fn reads_file_content() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "port", "8080");
        let v = IntValidation::default().less_than(65536);
        assert_eq!(ConfigReader::default().from_file(&path, &v).unwrap(), 8080);
    }

    #[test]
    fn trailing_newline_tolerated_for_numbers() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "port", "8080\n");
        let v = IntValidation::default();
        assert_eq!(ConfigReader::default().from_file(&path, &v).unwrap(), 8080);
    }

    #[test]
    fn string_content_not_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "token", "abc\n");
        let v = StringValidation::required();
        assert_eq!(ConfigReader::default().from_file(&path, &v).unwrap(), "abc\n");
    }

    #[test]
    fn empty_file_uses_default() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "port", "");
        let v = IntValidation::default().with_default(7);
        assert_eq!(ConfigReader::default().from_file(&path, &v).unwrap(), 7);
    }

    #[test]
    fn missing_file_required() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope");
        let err = ConfigReader::default()
            .from_file::<i64>(&path, &IntValidation::required())
            .unwrap_err();
        assert!(matches!(err.root(), ConfigReaderError::MustBeDefined));
        assert!(err.to_string().ends_with("nope: must be defined"));
    }

    #[test]
    fn invalid_content_names_path() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "debug", "maybe");
        let err = ConfigReader::default()
            .from_file(&path, &BoolValidation::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("{}: \"maybe\" is not a valid boolean", path.display())
        );
    }

    #[test]
    fn free_function_reads_absolute_path() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "ratio", "0.25");
        let v = crate::constraints::FloatValidation::default().less_than(1.0);
        assert_eq!(from_file(&path, &v).unwrap(), 0.25);
    }

    #[test]
    fn relative_path_uses_base_dir() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "replicas", "3");
        let reader = ConfigReader::builder().base_dir(dir.path()).build();
        let v = IntValidation::default();
        assert_eq!(reader.from_file("replicas", &v).unwrap(), 3);
    }
}
