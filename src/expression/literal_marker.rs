use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::expression::ParserConfig;

static STRING_LITERAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'(.*?[^\\])'").expect("valid string literal regex"));

/// Wraps every single-quoted literal in the intern marker call.
pub struct LiteralMarker;

impl LiteralMarker {
    pub fn mark(text: &str, config: &ParserConfig) -> String {
        let mut literals = 0usize;
        let parsed = STRING_LITERAL_REGEX
            .replace_all(text, |caps: &Captures| {
                literals += 1;
                format!("{}({})", config.intern_function(), &caps[0])
            })
            .into_owned();

        tracing::trace!(literals, "string literals interned");
        parsed
    }
}
