use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::expression::ParserConfig;

static BUCKET_LITERAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(bucket\(.*?, *)(\w+)\('([smhDWMY])'\)\)").expect("valid bucket literal regex")
});

/// Time unit accepted as the second argument of `bucket()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BucketUnit {
    Seconds,
    Minutes,
    Hours,
    Day,
    Week,
    Month,
    Year,
}

impl BucketUnit {
    pub fn from_char(unit: char) -> Option<BucketUnit> {
        match unit {
            's' => Some(BucketUnit::Seconds),
            'm' => Some(BucketUnit::Minutes),
            'h' => Some(BucketUnit::Hours),
            'D' => Some(BucketUnit::Day),
            'W' => Some(BucketUnit::Week),
            'M' => Some(BucketUnit::Month),
            'Y' => Some(BucketUnit::Year),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            BucketUnit::Seconds => 's',
            BucketUnit::Minutes => 'm',
            BucketUnit::Hours => 'h',
            BucketUnit::Day => 'D',
            BucketUnit::Week => 'W',
            BucketUnit::Month => 'M',
            BucketUnit::Year => 'Y',
        }
    }
}

/// Undoes the interning of the unit literal in `bucket(x, intern('u'))`.
///
/// The unit decides the return type of the bucket call, so the engine must
/// see the bare literal at parse time.
pub struct BucketRewriter;

impl BucketRewriter {
    pub fn rewrite(text: &str, config: &ParserConfig) -> String {
        BUCKET_LITERAL_REGEX
            .replace_all(text, |caps: &Captures| {
                let unit = caps[3].chars().next().and_then(BucketUnit::from_char);
                match unit {
                    Some(unit) if &caps[2] == config.intern_function() => {
                        tracing::trace!(?unit, "bucket unit unwrapped");
                        format!("{}'{}')", &caps[1], unit.as_char())
                    }
                    _ => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}
