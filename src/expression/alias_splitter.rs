use once_cell::sync::Lazy;
use regex::Regex;

static ALIAS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"//(.+)\n").expect("valid alias regex"));

/// Separates the `// alias\n` annotation from an expression body.
pub struct AliasSplitter;

impl AliasSplitter {
    /// Returns `(alias, working_text)`.
    ///
    /// Without an annotation the whole raw text is the alias and the working
    /// text is the raw text unchanged.
    pub fn split(expression: &str) -> (String, String) {
        match ALIAS_REGEX.captures(expression) {
            Some(caps) => {
                let alias = caps[1].trim().to_string();
                let working = ALIAS_REGEX.replace_all(expression, "").into_owned();
                tracing::trace!(alias = %alias, "alias annotation found");
                (alias, working)
            }
            None => (expression.to_string(), expression.to_string()),
        }
    }
}
