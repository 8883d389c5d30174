//! CLI library components for the land-grab cleaner.

pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
