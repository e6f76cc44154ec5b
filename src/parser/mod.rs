//! Format string parsing module
//!
//! This module walks printf-style format strings and turns every placeholder into the
//! argument categories it expects. The main entry point is the `scan_format` function.

pub mod directives;
mod format;
mod placeholder;
pub mod tokens;

pub use format::{scan_format, scan_format_with, scan_placeholders, scan_placeholders_with};
pub use placeholder::{parse_first_placeholder, parse_placeholder};
