#[macro_use]
extern crate log;

pub mod config;
pub mod download;
pub mod error;
pub mod extract;
pub mod pipelines;
pub mod sources;
pub mod writing;
