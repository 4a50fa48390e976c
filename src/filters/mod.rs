//! Property search criteria: the [`FilterState`] value, the filter expression language that
//! builds one and the evaluator that applies it to the catalog.

pub mod ai;
pub mod apply;
pub mod parser;
pub mod state;

pub use ai::ai_search;
pub use apply::{apply_filters, matches};
pub use parser::parse_filter;
pub use state::{FilterState, Minimum, PriceRange};
