//! Package sorting for a robotic dispatch line.
//!
//! Packages are classified into one of three stacks from their width, height,
//! length (cm) and mass (kg):
//!
//! - `STANDARD`: neither bulky nor heavy.
//! - `SPECIAL`: bulky or heavy, but not both.
//! - `REJECTED`: bulky and heavy.
//!
//! The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic classification. No I/O, no shared state;
//!   safe to call from any number of threads.
//! - **[`io`]**: Config file handling for the CLI.
//!
//! Presentation modules ([`report`], [`demo`], [`bench`]) build on the core to
//! implement CLI commands.
//!
//! ```
//! use sorter::{Classification, ClassifyError, classify};
//!
//! assert_eq!(classify(150, 10, 10, 20), Ok(Classification::Rejected));
//! assert_eq!(classify("10", "10", "10", "5"), Ok(Classification::Standard));
//! assert!(matches!(
//!     classify(-1, 10, 10, 5),
//!     Err(ClassifyError::InvalidInputValue { .. })
//! ));
//! ```

pub mod bench;
pub mod core;
pub mod demo;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::{
    Assessment, Classification, ClassifyError, Field, Measurement, Package, Reason, assess,
    classify,
};
