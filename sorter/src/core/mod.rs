//! Deterministic, pure logic shared by the sorter.
//!
//! Core modules must be free of I/O side effects. They operate on plain values
//! and return deterministic outputs suitable for tests and concurrent callers.

pub mod assessment;
pub mod classifier;
pub mod error;
pub mod measurement;
pub mod types;

pub use assessment::{Assessment, Reason, assess};
pub use classifier::{Package, classify};
pub use error::ClassifyError;
pub use measurement::Measurement;
pub use types::{Classification, Field};
