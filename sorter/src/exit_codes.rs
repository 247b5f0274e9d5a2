//! Stable exit codes for sorter CLI commands.

use crate::core::ClassifyError;

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed for a reason other than invalid package input (config, I/O, bench budget).
pub const ERROR: i32 = 1;
/// Reserved by clap for usage errors.
pub const USAGE: i32 = 2;
/// A measurement could not be interpreted as a number.
pub const INVALID_INPUT_TYPE: i32 = 3;
/// A measurement was negative.
pub const INVALID_INPUT_VALUE: i32 = 4;

/// Map a command failure to its exit code.
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ClassifyError>() {
        Some(ClassifyError::InvalidInputType { .. }) => INVALID_INPUT_TYPE,
        Some(ClassifyError::InvalidInputValue { .. }) => INVALID_INPUT_VALUE,
        None => ERROR,
    }
}
