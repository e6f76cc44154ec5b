pub mod config;
pub mod parser;
pub mod types;
pub mod verify;

// Main API exports
pub use config::{Config, ConfigError};
pub use parser::{
    parse_first_placeholder, scan_format, scan_format_with, scan_placeholders,
    scan_placeholders_with,
};
pub use types::*;
pub use verify::{FormatArgument, VerifyError, verify_arguments};
