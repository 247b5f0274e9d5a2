//! Side-effecting operations isolated from the pure core.

pub mod config;
