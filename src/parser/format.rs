use winnow::Parser;

use crate::config::Config;
use crate::parser::placeholder::parse_placeholder;
use crate::parser::tokens::{consume_string, skip_character};
use crate::types::*;

/// Scan a printf-style format string and return the argument categories it expects
///
/// This is the main entry point of the crate. Matchers are returned in call order,
/// one per variadic argument (a `*` width or precision demands its own argument).
///
/// # Examples
/// ```
/// use printf_check::{TypeMatcher, scan_format};
///
/// let matchers = scan_format("Hello %s, you are %d years old");
/// assert_eq!(matchers, vec![TypeMatcher::String, TypeMatcher::SignedInt]);
/// ```
pub fn scan_format(format: &str) -> Vec<TypeMatcher> {
    scan_format_with(format, &Config::default())
}

/// Same as [`scan_format`] with explicit options
pub fn scan_format_with(format: &str, config: &Config) -> Vec<TypeMatcher> {
    scan_placeholders_with(format, config)
        .iter()
        .flat_map(|scanned| scanned.placeholder.type_matchers())
        .collect()
}

/// Find every valid placeholder of a format string, with its byte position
pub fn scan_placeholders(format: &str) -> Vec<ScannedPlaceholder> {
    scan_placeholders_with(format, &Config::default())
}

/// Same as [`scan_placeholders`] with explicit options
pub fn scan_placeholders_with(format: &str, config: &Config) -> Vec<ScannedPlaceholder> {
    let mut placeholders = Vec::new();
    let mut placeholder = parse_placeholder(config.stacked_flags);
    let mut input = format;

    while !input.is_empty() {
        // "%%" is a literal percent sign
        if consume_string(&mut input, "%%").is_ok() {
            continue;
        }

        let offset = format.len() - input.len();
        match placeholder.parse_next(&mut input) {
            Ok(parsed) => {
                let length = format.len() - input.len() - offset;
                log::trace!(
                    "placeholder {:?} at {offset}: {parsed:?}",
                    &format[offset..offset + length]
                );
                placeholders.push(ScannedPlaceholder {
                    offset,
                    length,
                    placeholder: parsed,
                });
            }
            Err(_) => {
                if input.starts_with('%') {
                    log::trace!("'%' at {offset} does not start a placeholder, treating as text");
                }
                if skip_character(&mut input).is_err() {
                    break;
                }
            }
        }
    }

    log::debug!(
        "scanned {} placeholder(s) in format {format:?}",
        placeholders.len()
    );
    placeholders
}
