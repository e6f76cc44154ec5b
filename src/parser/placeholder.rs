use winnow::error::{ContextError, ErrMode, ParserError};
use winnow::{ModalResult, Parser};

use crate::config::Config;
use crate::parser::directives::*;
use crate::parser::tokens::consume_character;
use crate::types::*;

/// Parse one `%[flags][width][.precision][length]specifier` placeholder.
///
/// On failure the input is left where it was.
pub fn parse_placeholder(stacked_flags: bool) -> impl FnMut(&mut &str) -> ModalResult<Placeholder> {
    move |input: &mut &str| {
        let original_input_state = *input;

        let parsed = parse_placeholder_parts(input, stacked_flags);
        if parsed.is_err() {
            *input = original_input_state;
        }
        parsed
    }
}

fn parse_placeholder_parts(input: &mut &str, stacked_flags: bool) -> ModalResult<Placeholder> {
    consume_character(input, '%')?;
    let flags = parse_flags(input, stacked_flags);
    let width = parse_width(input);
    let precision = parse_precision(input);
    let length = parse_length_modifier(input);
    let specifier = parse_specifier(input, length)?;
    if !flags.allows(specifier) {
        return Err(ErrMode::Backtrack(ContextError::from_input(&*input)));
    }

    Ok(Placeholder {
        flags,
        width,
        precision,
        length,
        specifier,
    })
}

/// Try to parse a placeholder at the very start of `format`
///
/// # Examples
/// ```
/// use printf_check::{Config, TypeMatcher, parse_first_placeholder};
///
/// let result = parse_first_placeholder("%*.2f apples", &Config::default());
/// assert!(result.is_valid);
/// assert_eq!(result.consumed_length, 5);
/// assert_eq!(
///     result.type_matchers,
///     vec![TypeMatcher::UnsignedInt, TypeMatcher::Floating]
/// );
/// ```
pub fn parse_first_placeholder(format: &str, config: &Config) -> PlaceholderResult {
    let mut input = format;
    match parse_placeholder(config.stacked_flags).parse_next(&mut input) {
        Ok(placeholder) => PlaceholderResult {
            is_valid: true,
            type_matchers: placeholder.type_matchers(),
            consumed_length: format.len() - input.len(),
        },
        Err(_) => PlaceholderResult::default(),
    }
}
