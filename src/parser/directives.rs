//! Sub-parsers for the pieces of a placeholder, applied in grammar order:
//! flags, width, precision, length modifier, specifier.
//!
//! Only the specifier is mandatory. The optional pieces return their default
//! without consuming anything when they do not match.

use winnow::error::ErrMode;
use winnow::token::any;
use winnow::{ModalResult, Parser};

use crate::parser::tokens::*;
use crate::types::*;

const FLAG_CHARACTERS: [char; 5] = ['+', '-', ' ', '#', '0'];

/// Parse placeholder flags.
///
/// With `stacked` set, flags are consumed until none matches (`%-+05d`);
/// otherwise at most one flag is consumed.
pub fn parse_flags(input: &mut &str, stacked: bool) -> Flags {
    let mut flags = Flags::default();
    while let Ok(flag) = consume_character_from_set(input, FLAG_CHARACTERS) {
        match flag {
            '-' => flags.left_justify = true,
            '+' => flags.force_sign = true,
            ' ' => flags.space_sign = true,
            '#' => flags.alternate = true,
            _ => flags.zero_pad = true,
        }
        if !stacked {
            break;
        }
    }
    flags
}

/// Parse a width: `*` or a run of digits
pub fn parse_width(input: &mut &str) -> Count {
    if consume_character(input, '*').is_ok() {
        return Count::FromArgument;
    }
    let digits = consume_digits(input);
    if digits.is_empty() {
        Count::Omitted
    } else {
        Count::Literal(digits_value(digits))
    }
}

/// Parse a precision: `.` followed by `*` or a run of digits.
///
/// A `.` with no digits is a precision of zero.
pub fn parse_precision(input: &mut &str) -> Option<Count> {
    consume_character(input, '.').ok()?;
    match parse_width(input) {
        Count::Omitted => Some(Count::Literal(0)),
        count => Some(count),
    }
}

/// Parse a length modifier, longest match first
pub fn parse_length_modifier(input: &mut &str) -> LengthModifier {
    if consume_string(input, "hh").is_ok() {
        return LengthModifier::Hh;
    }
    if consume_string(input, "ll").is_ok() {
        return LengthModifier::Ll;
    }
    if consume_character(input, 'l').is_ok() {
        return LengthModifier::L;
    }
    if consume_character(input, 'L').is_ok() {
        return LengthModifier::BigL;
    }
    match consume_character_from_set(input, ['h', 'j', 'z', 't']) {
        Ok('h') => LengthModifier::H,
        Ok('j') => LengthModifier::J,
        Ok('z') => LengthModifier::Z,
        Ok(_) => LengthModifier::T,
        Err(_) => LengthModifier::None,
    }
}

/// Parse a specifier legal after `length`
pub fn parse_specifier(input: &mut &str, length: LengthModifier) -> ModalResult<Specifier> {
    any.verify_map(|c| Specifier::from_char(c).filter(|s| length.allows(*s)))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

fn digits_value(digits: &str) -> usize {
    digits
        .bytes()
        .fold(0usize, |value, digit| {
            value
                .saturating_mul(10)
                .saturating_add(usize::from(digit - b'0'))
        })
}
