//! Land-grab data normalization crate.
//!
//! Applies the fixed cleaning pipeline to a loaded table:
//!
//! 1. rename columns with a stray embedded space
//! 2. parse currency text (`"$1,234.50"`) as `Float64`
//! 3. map `Y` / `N` markers to `Boolean`
//! 4. fill missing years with `0` and cast to `Int64`
//! 5. drop the derived inflation column
//! 6. drop source and notes columns
//!
//! Every rule is driven by a [`landgrab_model::CleaningSchema`]; no step
//! recovers from its own errors.
//!
//! # Example
//!
//! ```ignore
//! use landgrab_model::CleaningSchema;
//! use landgrab_normalization::clean_table;
//!
//! let outcome = clean_table(df, &CleaningSchema::landgrab())?;
//! let (rows, cols) = outcome.shape();
//! ```

mod error;
mod executor;
mod types;
mod validation;

pub mod coerce;

// Core types
pub use types::{CleaningOutcome, StepReport};

// Error type
pub use error::{ErrorCategory, NormalizationError};

// Execution
pub use executor::{
    clean_table, coerce_currency, coerce_flags, coerce_years, drop_columns, rename_columns,
};

// Validation
pub use validation::{missing_required_columns, validate_required_columns};
