//! Interactive prompt source.
//!
//! Line input is injected through [`LineReader`] so the prompt path can be driven
//! by a script in tests. [`StdinReader`] is the terminal implementation.

use std::io::{self, BufRead, Write};

use crate::constraints::Validation;
use crate::error::ConfigReaderError;
use crate::primitive::Primitive;
use crate::types::PromptOptions;
use crate::validate;

/// Reads one line of user input.
pub trait LineReader {
    /// Show the prompt and return the entered line without its line terminator.
    ///
    /// `default` is the value that will be used if the line comes back empty;
    /// it is for display only.
    fn read_line(&mut self, opts: &PromptOptions, default: &str) -> io::Result<String>;
}

impl<R: LineReader + ?Sized> LineReader for &mut R {
    fn read_line(&mut self, opts: &PromptOptions, default: &str) -> io::Result<String> {
        (**self).read_line(opts, default)
    }
}

/// Prompts on stdout and reads from stdin.
///
/// Input is always echoed; `hide_typing` is not honored here.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinReader;

impl LineReader for StdinReader {
    fn read_line(&mut self, opts: &PromptOptions, default: &str) -> io::Result<String> {
        let mut out = io::stdout().lock();
        if default.is_empty() {
            write!(out, "{}: ", opts.message)?;
        } else {
            write!(out, "{} [{default}]: ", opts.message)?;
        }
        out.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(strip_line_ending(line))
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Ask the user for a value.
///
/// The prompt shows the stringified default, except for a required value: its
/// default is never used, so nothing is pre-filled. An empty answer resolves
/// like any other absent value. A failure to read input is reported as
/// [`ConfigReaderError::Prompt`].
pub fn from_prompt<T, R>(
    opts: &PromptOptions,
    reader: &mut R,
    v: &Validation<T>,
) -> Result<T, ConfigReaderError>
where
    T: Primitive,
    R: LineReader + ?Sized,
{
    let default = if v.required {
        String::new()
    } else {
        v.default.prompt_default()
    };

    let line = reader
        .read_line(opts, &default)
        .map_err(ConfigReaderError::Prompt)?;

    if line.is_empty() {
        tracing::debug!(prompt = %opts.message, "empty answer");
        return validate::validate_missing(v);
    }
    validate::from_str(&line, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{IntValidation, StringValidation};
    use crate::fixtures::test::ScriptedReader;

    #[test]
    fn entered_value_is_validated() {
        let mut reader = ScriptedReader::new(["12"]);
        let v = IntValidation::default().less_than(10);
        let err = from_prompt(&PromptOptions::new("Workers"), &mut reader, &v).unwrap_err();
        assert!(matches!(err, ConfigReaderError::MustBeLessThan { .. }));
    }

    #[test]
    fn empty_answer_uses_default() {
        let mut reader = ScriptedReader::new([""]);
        let v = IntValidation::default().with_default(4);
        assert_eq!(
            from_prompt(&PromptOptions::new("Workers"), &mut reader, &v).unwrap(),
            4
        );
    }

    #[test]
    fn default_is_shown_to_the_user() {
        let mut reader = ScriptedReader::new([""]);
        let v = StringValidation::default().with_default("us-west-2".into());
        from_prompt(&PromptOptions::new("Region"), &mut reader, &v).unwrap();
        assert_eq!(reader.shown, vec![("Region".to_string(), "us-west-2".to_string())]);
    }

    #[test]
    fn required_prompt_shows_no_default() {
        let mut reader = ScriptedReader::new([""]);
        let v = IntValidation::required().with_default(4);
        let err = from_prompt(&PromptOptions::new("Workers"), &mut reader, &v).unwrap_err();
        assert!(matches!(err, ConfigReaderError::MustBeDefined));
        assert_eq!(reader.shown[0].1, "");
    }

    #[test]
    fn read_failure_is_prompt_error() {
        let mut reader = ScriptedReader::new(Vec::<&str>::new());
        let err = from_prompt(
            &PromptOptions::new("Workers"),
            &mut reader,
            &IntValidation::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigReaderError::Prompt(_)));
    }

    #[test]
    fn works_through_dyn_reader() {
        let mut scripted = ScriptedReader::new(["3"]);
        let reader: &mut dyn LineReader = &mut scripted;
        let v = IntValidation::default();
        assert_eq!(
            from_prompt(&PromptOptions::new("Workers"), reader, &v).unwrap(),
            3
        );
    }

    #[test]
    fn line_endings_stripped() {
        assert_eq!(strip_line_ending("abc\n".into()), "abc");
        assert_eq!(strip_line_ending("abc\r\n".into()), "abc");
        assert_eq!(strip_line_ending("abc".into()), "abc");
        assert_eq!(strip_line_ending("\n".into()), "");
    }
}
