use serde::{Deserialize, Serialize};

use crate::expression::ColumnIdMap;

/// One preprocessed expression, ready to hand to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedExpression {
    /// Explicit alias or, without annotation, the raw expression text
    pub alias: String,
    /// The expression exactly as the user typed it
    pub expression: String,
    /// Text after placeholder substitution and literal interning
    pub parsed: String,
    /// Placeholder -> original column name
    pub column_id_map: ColumnIdMap,
}

impl ValidatedExpression {
    pub fn new(
        alias: String,
        expression: String,
        parsed: String,
        column_id_map: ColumnIdMap,
    ) -> Self {
        Self { alias, expression, parsed, column_id_map }
    }

    /// `(alias, expression, parsed, column_id_map)`
    pub fn into_parts(self) -> (String, String, String, ColumnIdMap) {
        (self.alias, self.expression, self.parsed, self.column_id_map)
    }
}
