use winnow::error::ErrMode;
use winnow::stream::ContainsToken;
use winnow::token::{any, literal, one_of};
use winnow::{ModalResult, Parser};

// Every consumer either advances the cursor past what it matched or leaves it untouched.
// Running out of input is an ordinary backtrack, never a panic.

/// Consume `character` if it is the next character of the input
pub fn consume_character(input: &mut &str, character: char) -> ModalResult<char> {
    one_of(character)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Consume the next character if it lies in `first..=last`
pub fn consume_character_from_range(
    input: &mut &str,
    first: char,
    last: char,
) -> ModalResult<char> {
    one_of(first..=last)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Consume the next character if it belongs to `set`
pub fn consume_character_from_set(
    input: &mut &str,
    set: impl ContainsToken<char>,
) -> ModalResult<char> {
    one_of(set).parse_next(input).map_err(ErrMode::Backtrack)
}

/// Consume `expected` if the input starts with it exactly
pub fn consume_string<'s>(input: &mut &'s str, expected: &str) -> ModalResult<&'s str> {
    literal(expected)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Consume any single character
pub fn skip_character(input: &mut &str) -> ModalResult<char> {
    any.parse_next(input).map_err(ErrMode::Backtrack)
}

/// Apply `consumer` until it fails or stops making progress, returning everything it consumed.
///
/// A step that succeeds without consuming anything ends the repetition, so a zero-width
/// consumer cannot loop forever.
pub fn consume_repeatedly<'s, O>(
    input: &mut &'s str,
    mut consumer: impl FnMut(&mut &'s str) -> ModalResult<O>,
) -> &'s str {
    let start = *input;
    loop {
        let before = *input;
        match consumer(input) {
            Ok(_) if input.len() < before.len() => {}
            _ => {
                *input = before;
                break;
            }
        }
    }
    &start[..start.len() - input.len()]
}

/// Consume a (possibly empty) run of decimal digits
pub fn consume_digits<'s>(input: &mut &'s str) -> &'s str {
    consume_repeatedly(input, |i| consume_character_from_range(i, '0', '9'))
}
