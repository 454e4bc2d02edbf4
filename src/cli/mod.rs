//! Command-line interface for the Xiphos binary.

pub mod args;
pub mod commands;
pub mod output;
