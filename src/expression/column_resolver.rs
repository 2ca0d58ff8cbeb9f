use std::collections::HashMap;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

use crate::expression::ParserConfig;

static COLUMN_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""(.*?[^\\])""#).expect("valid column name regex"));

/// Placeholder -> column name, kept in assignment order, with the reverse
/// lookup maintained alongside.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ColumnIdMap {
    ids: IndexMap<String, String>,
    names: HashMap<String, String>,
}

impl ColumnIdMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new association. Returns `false` if either the column name
    /// or the placeholder is already mapped, in which case nothing changes.
    pub fn insert(&mut self, placeholder: &str, column_name: &str) -> bool {
        if self.names.contains_key(column_name) || self.ids.contains_key(placeholder) {
            return false;
        }
        self.names.insert(column_name.to_string(), placeholder.to_string());
        self.ids.insert(placeholder.to_string(), column_name.to_string());
        true
    }

    pub fn column_name(&self, placeholder: &str) -> Option<&str> {
        self.ids.get(placeholder).map(String::as_str)
    }

    pub fn placeholder(&self, column_name: &str) -> Option<&str> {
        self.names.get(column_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate `(placeholder, column_name)` pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.ids.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for ColumnIdMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.ids.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ColumnIdMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ids = IndexMap::<String, String>::deserialize(deserializer)?;
        let mut column_ids = ColumnIdMap::new();
        for (placeholder, column_name) in &ids {
            if !column_ids.insert(placeholder, column_name) {
                return Err(D::Error::custom(format!(
                    "column '{column_name}' is mapped by more than one placeholder"
                )));
            }
        }
        Ok(column_ids)
    }
}

/// Replaces double-quoted column references with engine-safe placeholders.
pub struct ColumnResolver;

impl ColumnResolver {
    /// The counter advances on every match, repeated names included, so a
    /// name seen for the second time reuses its first placeholder while the
    /// next new name skips ahead.
    pub fn resolve(text: &str, config: &ParserConfig) -> (String, ColumnIdMap) {
        let mut column_ids = ColumnIdMap::new();
        let mut running_index = 0usize;

        let parsed = COLUMN_NAME_REGEX
            .replace_all(text, |caps: &Captures| {
                let column_name = &caps[1];
                let placeholder = match column_ids.placeholder(column_name).map(str::to_string) {
                    Some(existing) => existing,
                    None => {
                        let placeholder = config.placeholder(running_index);
                        column_ids.insert(&placeholder, column_name);
                        placeholder
                    }
                };
                running_index += 1;
                placeholder
            })
            .into_owned();

        tracing::trace!(
            references = running_index,
            columns = column_ids.len(),
            "column references resolved"
        );
        (parsed, column_ids)
    }
}
