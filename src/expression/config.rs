use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::expression::ExpressionError;

static PREFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_]\w*$").expect("valid column prefix regex"));
static FUNCTION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w+$").expect("valid intern function regex"));

/// Settings used by the expression parser.
///
/// - `column_prefix` is prepended to the running counter to build placeholders.
/// - `intern_function` is the marker call wrapped around string literals.
///
/// Both must be plain identifiers, so placeholders stay engine-safe and the
/// bucket pass can recognise the marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ParserConfigFields")]
pub struct ParserConfig {
    column_prefix: String,
    intern_function: String,
}

#[derive(Deserialize)]
struct ParserConfigFields {
    column_prefix: String,
    intern_function: String,
}

impl TryFrom<ParserConfigFields> for ParserConfig {
    type Error = ExpressionError;

    fn try_from(fields: ParserConfigFields) -> Result<Self, Self::Error> {
        ParserConfig::from(&fields.column_prefix, &fields.intern_function)
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            column_prefix: "COLUMN".to_string(),
            intern_function: "intern".to_string(),
        }
    }
}

impl ParserConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with explicit placeholder prefix and intern marker.
    pub fn from(column_prefix: &str, intern_function: &str) -> Result<Self, ExpressionError> {
        if !PREFIX_REGEX.is_match(column_prefix) {
            return Err(ExpressionError::InvalidConfig {
                field: "column_prefix",
                value: column_prefix.to_string(),
            });
        }
        if !FUNCTION_REGEX.is_match(intern_function) {
            return Err(ExpressionError::InvalidConfig {
                field: "intern_function",
                value: intern_function.to_string(),
            });
        }

        Ok(Self {
            column_prefix: column_prefix.to_string(),
            intern_function: intern_function.to_string(),
        })
    }

    /// Prefix of every column placeholder (`COLUMN0`, `COLUMN1`, ...)
    pub fn column_prefix(&self) -> &str {
        &self.column_prefix
    }

    /// Name of the call used to intern string literals
    pub fn intern_function(&self) -> &str {
        &self.intern_function
    }

    pub fn placeholder(&self, index: usize) -> String {
        format!("{}{index}", self.column_prefix)
    }
}
