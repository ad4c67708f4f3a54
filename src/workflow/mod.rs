//! Workflow module
//!
//! This module wires configuration, discovery and reporting into one run.

mod engine;

pub use engine::{EnumerateOptions, ProcessingOptions, enumerate_batches, process_batches, run};
