//! Shared utilities for the land-grab cleaner crates.
//!
//! This crate provides common helpers used across the workspace,
//! mostly around reading and rendering Polars `AnyValue` cells.

pub mod polars;

pub use polars::{MISSING_MARKERS, any_to_string, format_float, is_missing, parse_f64};
