//! Land-grab dataset model definitions.
//!
//! The cleaner is driven by a declarative [`CleaningSchema`]: which columns get
//! renamed, which are currency, flag or year columns, and which are dropped.
//! [`CleaningStep`] names the stages the schema is applied in.

mod schema;
mod step;

pub use schema::{CleaningSchema, ColumnRename, ColumnRole};
pub use step::CleaningStep;
