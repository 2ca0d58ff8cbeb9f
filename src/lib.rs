pub mod expression;
pub use expression::{
    ColumnIdMap, ExpressionError, ExpressionParser, ExpressionRegistry, ParserConfig,
    ValidatedExpression, parse_expression_strings,
};
