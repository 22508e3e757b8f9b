use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The primitive kind a raw value is expected to coerce into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Int,
    Float,
    Bool,
    String,
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimitiveType::Int => "integer",
            PrimitiveType::Float => "float",
            PrimitiveType::Bool => "boolean",
            PrimitiveType::String => "string",
        };
        f.write_str(name)
    }
}

/// Identifies the configuration datum an error belongs to.
///
/// Rendered as the bare key, `ENV:NAME`, or the file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Key(String),
    Env(String),
    File(PathBuf),
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Key(key) => f.write_str(key),
            Locator::Env(name) => write!(f, "ENV:{name}"),
            Locator::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// What to show the user when a value is read interactively.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptOptions {
    /// The question shown before the input cursor.
    pub message: String,
    /// Hint that the input is a secret. Line readers that can suppress echo should.
    pub hide_typing: bool,
}

impl PromptOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hide_typing: false,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.hide_typing = true;
        self
    }
}
