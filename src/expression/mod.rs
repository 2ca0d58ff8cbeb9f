pub mod config;
pub use config::*;

pub mod expression_error;
pub use expression_error::*;

pub mod alias_splitter;
pub use alias_splitter::*;

pub mod column_resolver;
pub use column_resolver::*;

pub mod literal_marker;
pub use literal_marker::*;

pub mod bucket_rewriter;
pub use bucket_rewriter::*;

pub mod validated_expression;
pub use validated_expression::*;

pub mod expression_registry;
pub use expression_registry::*;

pub mod expression_parser;
pub use expression_parser::*;
