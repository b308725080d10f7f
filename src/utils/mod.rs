//! Shared limits and helpers used by the parsers and the CLI.

pub mod validation;
