//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait, and the [Harvest] pipeline
//! that fetches every source, extracts its words and writes them in a single CSV file.
pub mod harvest;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use harvest::{Diagnostic, Harvest, Harvested, Summary};
pub use pipeline::Pipeline;
