#[cfg(test)]
pub mod test {
    use std::collections::VecDeque;
    use std::io;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use crate::prompt::LineReader;
    use crate::reader::ConfigReader;
    use crate::types::PromptOptions;

    /// A reader over a fixed environment, isolated from the process.
    pub fn reader_with_env(pairs: &[(&str, &str)]) -> ConfigReader {
        ConfigReader::builder()
            .env_vars(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())))
            .build()
    }

    /// Write `content` to `{dir}/{name}` and return the full path.
    pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Answers prompts from a script and records what was shown.
    pub struct ScriptedReader {
        answers: VecDeque<String>,
        /// `(message, default)` for each prompt shown.
        pub shown: Vec<(String, String)>,
    }

    impl ScriptedReader {
        pub fn new<I, S>(answers: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                answers: answers.into_iter().map(Into::into).collect(),
                shown: Vec::new(),
            }
        }
    }

    impl LineReader for ScriptedReader {
        fn read_line(&mut self, opts: &PromptOptions, default: &str) -> io::Result<String> {
            self.shown.push((opts.message.clone(), default.to_string()));
            self.answers
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }
    }

    #[test]
    fn scripted_reader_replays_in_order() {
        let mut reader = ScriptedReader::new(["a", "b"]);
        let opts = PromptOptions::new("q");
        assert_eq!(reader.read_line(&opts, "").unwrap(), "a");
        assert_eq!(reader.read_line(&opts, "d").unwrap(), "b");
        assert!(reader.read_line(&opts, "").is_err());
        assert_eq!(reader.shown.len(), 3);
    }
}
