use indexmap::IndexMap;

use crate::expression::ValidatedExpression;

/// Alias-keyed collection of processed expressions.
///
/// A repeated alias replaces the stored record in place, so every alias keeps
/// the position where it was first seen.
#[derive(Debug, Default, Clone)]
pub struct ExpressionRegistry {
    by_alias: IndexMap<String, ValidatedExpression>,
}

impl ExpressionRegistry {
    pub fn new() -> Self {
        Self { by_alias: IndexMap::new() }
    }

    /// Returns the position of the record and whether it replaced an earlier one.
    pub fn insert(&mut self, record: ValidatedExpression) -> (usize, bool) {
        let (index, previous) = self.by_alias.insert_full(record.alias.clone(), record);
        if previous.is_some() {
            tracing::debug!(index, "alias already registered, replacing in place");
        }
        (index, previous.is_some())
    }

    pub fn get(&self, alias: &str) -> Option<&ValidatedExpression> {
        self.by_alias.get(alias)
    }

    pub fn len(&self) -> usize {
        self.by_alias.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_alias.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidatedExpression> {
        self.by_alias.values()
    }

    pub fn into_vec(self) -> Vec<ValidatedExpression> {
        self.by_alias.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::ColumnIdMap;

    fn record(alias: &str, parsed: &str) -> ValidatedExpression {
        ValidatedExpression::new(alias.into(), parsed.into(), parsed.into(), ColumnIdMap::new())
    }

    #[test]
    fn appends_new_aliases_in_order() {
        let mut registry = ExpressionRegistry::new();
        assert_eq!(registry.insert(record("a", "1")), (0, false));
        assert_eq!(registry.insert(record("b", "2")), (1, false));
        assert_eq!(registry.len(), 2);

        let aliases: Vec<_> = registry.iter().map(|r| r.alias.as_str()).collect();
        assert_eq!(aliases, vec!["a", "b"]);
    }

    #[test]
    fn duplicate_alias_replaces_in_place() {
        let mut registry = ExpressionRegistry::new();
        registry.insert(record("a", "1"));
        registry.insert(record("b", "2"));
        registry.insert(record("c", "3"));
        assert_eq!(registry.insert(record("a", "4")), (0, true));

        let out = registry.into_vec();
        let pairs: Vec<_> = out.iter().map(|r| (r.alias.as_str(), r.parsed.as_str())).collect();
        assert_eq!(pairs, vec![("a", "4"), ("b", "2"), ("c", "3")]);
    }

    #[test]
    fn lookup_by_alias() {
        let mut registry = ExpressionRegistry::new();
        assert!(registry.is_empty());
        registry.insert(record("x", "COLUMN0"));
        assert_eq!(registry.get("x").map(|r| r.parsed.as_str()), Some("COLUMN0"));
        assert!(registry.get("y").is_none());
    }
}
