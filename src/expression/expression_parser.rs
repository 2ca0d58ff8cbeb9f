use crate::expression::{
    AliasSplitter, BucketRewriter, ColumnResolver, ExpressionError, ExpressionRegistry,
    LiteralMarker, ParserConfig, ValidatedExpression,
};

/// Runs the preprocessing passes over user expressions.
///
/// Per expression: alias split, column placeholders, literal interning, and
/// the bucket unit fix-up, in that order. Batches are deduplicated by alias.
#[derive(Debug, Default, Clone)]
pub struct ExpressionParser {
    config: ParserConfig,
}

impl ExpressionParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Any `""` in the raw text, alias annotation included, is rejected.
    fn check_empty_reference(expression: &str) -> Result<(), ExpressionError> {
        match expression.find("\"\"") {
            Some(position) => Err(ExpressionError::empty_reference(expression, position)),
            None => Ok(()),
        }
    }

    pub fn parse_expression(
        &self,
        expression: &str,
    ) -> Result<ValidatedExpression, ExpressionError> {
        Self::check_empty_reference(expression)?;

        let (alias, working) = AliasSplitter::split(expression);
        let (parsed, column_id_map) = ColumnResolver::resolve(&working, &self.config);
        let parsed = LiteralMarker::mark(&parsed, &self.config);
        let parsed = BucketRewriter::rewrite(&parsed, &self.config);

        tracing::debug!(
            alias = %alias,
            columns = column_id_map.len(),
            parsed = %parsed,
            "expression parsed"
        );

        Ok(ValidatedExpression::new(alias, expression.to_string(), parsed, column_id_map))
    }

    /// Parse a batch. Any failure aborts the whole batch.
    pub fn parse_expressions<I, S>(
        &self,
        expressions: I,
    ) -> Result<Vec<ValidatedExpression>, ExpressionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = ExpressionRegistry::new();
        for expression in expressions {
            let record = self.parse_expression(expression.as_ref())?;
            registry.insert(record);
        }
        Ok(registry.into_vec())
    }
}

/// Parse a batch of expressions with the default configuration.
pub fn parse_expression_strings<S: AsRef<str>>(
    expressions: &[S],
) -> Result<Vec<ValidatedExpression>, ExpressionError> {
    ExpressionParser::new().parse_expressions(expressions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_pipeline_on_one_expression() {
        let parser = ExpressionParser::new();
        let text = concat!(
            "// weekly\n",
            "if (\"Status\" == 'open') { bucket(\"Opened\", 'W') } else { null }"
        );
        let record = parser.parse_expression(text).unwrap();

        assert_eq!(record.alias, "weekly");
        assert_eq!(
            record.parsed,
            "if (COLUMN0 == intern('open')) { bucket(COLUMN1, 'W') } else { null }"
        );
        assert_eq!(record.column_id_map.column_name("COLUMN0"), Some("Status"));
        assert_eq!(record.column_id_map.column_name("COLUMN1"), Some("Opened"));
    }

    #[test]
    fn raw_expression_is_kept_verbatim() {
        let raw = "// a\n\"x\" + 'y'";
        let record = ExpressionParser::new().parse_expression(raw).unwrap();
        assert_eq!(record.expression, raw);
        assert_eq!(record.parsed, "COLUMN0 + intern('y')");
    }

    #[test]
    fn custom_config_flows_through_all_passes() {
        let parser = ExpressionParser::with_config(ParserConfig::from("c", "lit").unwrap());
        let record = parser.parse_expression("bucket(\"d\", 'D') + 'z'").unwrap();
        assert_eq!(record.parsed, "bucket(c0, 'D') + lit('z')");
        assert_eq!(parser.config().intern_function(), "lit");
    }

    #[test]
    fn empty_reference_reports_first_position() {
        let err = ExpressionParser::new().parse_expression("\"A\" + \"\"").unwrap_err();
        assert_eq!(err, ExpressionError::empty_reference("\"A\" + \"\"", 6));
    }

    #[test]
    fn quoted_names_are_accepted() {
        assert!(ExpressionParser::new().parse_expression("\"A\" + 'b'").is_ok());
    }

    #[test]
    fn batch_accepts_owned_strings() {
        let batch = vec!["\"a\"".to_string(), "\"b\"".to_string()];
        let out = ExpressionParser::new().parse_expressions(&batch).unwrap();
        assert_eq!(out.len(), 2);
    }
}
