use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionError {
    /// A `""` column reference; `position` is the byte offset in the raw text.
    EmptyColumnReference { expression: String, position: usize },
    /// A parser setting that is not a plain identifier.
    InvalidConfig { field: &'static str, value: String },
}

impl ExpressionError {
    pub fn empty_reference(expression: &str, position: usize) -> Self {
        ExpressionError::EmptyColumnReference { expression: expression.to_string(), position }
    }
}

impl Display for ExpressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpressionError::EmptyColumnReference { expression, position } => write!(
                f,
                "Cannot reference empty column in expression!\n  at [{}] -> '{}'",
                position,
                expression
            ),
            ExpressionError::InvalidConfig { field, value } => {
                write!(f, "Invalid parser config: {} must be an identifier, got '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for ExpressionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_problem() {
        let msg = ExpressionError::empty_reference("\"\"", 0).to_string();
        assert!(msg.starts_with("Cannot reference empty column in expression!"));
        assert!(msg.contains("at [0]"));
    }

    #[test]
    fn display_names_the_config_field() {
        let err = ExpressionError::InvalidConfig { field: "column_prefix", value: "a b".into() };
        assert_eq!(
            err.to_string(),
            "Invalid parser config: column_prefix must be an identifier, got 'a b'"
        );
    }
}
