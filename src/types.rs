//! Type definitions for the printf format checker
//!
//! This module defines the values produced by scanning a format string:
//! type matchers, the grammar elements of a placeholder and the tables
//! linking length modifiers and specifiers to argument categories.

use serde::{Deserialize, Serialize};

/// Category of argument a placeholder demands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeMatcher {
    /// Signed integer (d, i)
    SignedInt,
    /// Unsigned integer (u, o, x, X, and `*` width/precision)
    UnsignedInt,
    /// Floating point (f, F, e, E, g, G, a, A)
    Floating,
    /// Single character (c)
    Char,
    /// String (s)
    String,
    /// Pointer (p)
    Pointer,
    /// No type requirement (n)
    Unconstrained,
}

/// Category of an argument actually supplied at a call site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgumentType {
    SignedInt,
    UnsignedInt,
    Floating,
    Char,
    String,
    Pointer,
}

impl TypeMatcher {
    /// Checks if an argument of the given type satisfies this matcher
    pub fn accepts(self, argument: ArgumentType) -> bool {
        match self {
            TypeMatcher::SignedInt => argument == ArgumentType::SignedInt,
            TypeMatcher::UnsignedInt => argument == ArgumentType::UnsignedInt,
            TypeMatcher::Floating => argument == ArgumentType::Floating,
            TypeMatcher::Char => argument == ArgumentType::Char,
            TypeMatcher::String => argument == ArgumentType::String,
            TypeMatcher::Pointer => argument == ArgumentType::Pointer,
            TypeMatcher::Unconstrained => true,
        }
    }
}

/// Conversion specifier, the terminal character of a placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specifier {
    /// d
    Decimal,
    /// i
    Integer,
    /// u
    Unsigned,
    /// o
    Octal,
    /// x
    Hex,
    /// X
    UpperHex,
    /// f
    Fixed,
    /// F
    UpperFixed,
    /// e
    Exponent,
    /// E
    UpperExponent,
    /// g
    General,
    /// G
    UpperGeneral,
    /// a
    HexFloat,
    /// A
    UpperHexFloat,
    /// c
    Char,
    /// s
    String,
    /// p
    Pointer,
    /// n
    WriteBack,
}

const ALL_SPECIFIERS: &[Specifier] = &Specifier::ALL;

const INTEGER_SPECIFIERS: &[Specifier] = &[
    Specifier::Decimal,
    Specifier::Integer,
    Specifier::Unsigned,
    Specifier::Octal,
    Specifier::Hex,
    Specifier::UpperHex,
    Specifier::WriteBack,
];

const LONG_SPECIFIERS: &[Specifier] = &[
    Specifier::Decimal,
    Specifier::Integer,
    Specifier::Unsigned,
    Specifier::Octal,
    Specifier::Hex,
    Specifier::UpperHex,
    Specifier::Char,
    Specifier::String,
    Specifier::WriteBack,
];

const LONG_DOUBLE_SPECIFIERS: &[Specifier] = &[
    Specifier::Fixed,
    Specifier::UpperFixed,
    Specifier::Exponent,
    Specifier::UpperExponent,
    Specifier::General,
    Specifier::UpperGeneral,
    Specifier::HexFloat,
    Specifier::UpperHexFloat,
];

impl Specifier {
    /// Every specifier, in the order they are listed in the printf grammar
    pub const ALL: [Specifier; 18] = [
        Specifier::Decimal,
        Specifier::Integer,
        Specifier::Unsigned,
        Specifier::Octal,
        Specifier::Hex,
        Specifier::UpperHex,
        Specifier::Fixed,
        Specifier::UpperFixed,
        Specifier::Exponent,
        Specifier::UpperExponent,
        Specifier::General,
        Specifier::UpperGeneral,
        Specifier::HexFloat,
        Specifier::UpperHexFloat,
        Specifier::Char,
        Specifier::String,
        Specifier::Pointer,
        Specifier::WriteBack,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_char() == c)
    }

    pub fn as_char(self) -> char {
        match self {
            Specifier::Decimal => 'd',
            Specifier::Integer => 'i',
            Specifier::Unsigned => 'u',
            Specifier::Octal => 'o',
            Specifier::Hex => 'x',
            Specifier::UpperHex => 'X',
            Specifier::Fixed => 'f',
            Specifier::UpperFixed => 'F',
            Specifier::Exponent => 'e',
            Specifier::UpperExponent => 'E',
            Specifier::General => 'g',
            Specifier::UpperGeneral => 'G',
            Specifier::HexFloat => 'a',
            Specifier::UpperHexFloat => 'A',
            Specifier::Char => 'c',
            Specifier::String => 's',
            Specifier::Pointer => 'p',
            Specifier::WriteBack => 'n',
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self.type_matcher(),
            TypeMatcher::SignedInt | TypeMatcher::UnsignedInt | TypeMatcher::Floating
        )
    }

    /// Argument category this specifier formats
    pub fn type_matcher(self) -> TypeMatcher {
        match self {
            Specifier::Decimal | Specifier::Integer => TypeMatcher::SignedInt,
            Specifier::Unsigned | Specifier::Octal | Specifier::Hex | Specifier::UpperHex => {
                TypeMatcher::UnsignedInt
            }
            Specifier::Fixed
            | Specifier::UpperFixed
            | Specifier::Exponent
            | Specifier::UpperExponent
            | Specifier::General
            | Specifier::UpperGeneral
            | Specifier::HexFloat
            | Specifier::UpperHexFloat => TypeMatcher::Floating,
            Specifier::Char => TypeMatcher::Char,
            Specifier::String => TypeMatcher::String,
            Specifier::Pointer => TypeMatcher::Pointer,
            Specifier::WriteBack => TypeMatcher::Unconstrained,
        }
    }
}

/// Length modifier placed between precision and specifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthModifier {
    #[default]
    None,
    /// hh
    Hh,
    /// h
    H,
    /// l
    L,
    /// ll
    Ll,
    /// j
    J,
    /// z
    Z,
    /// t
    T,
    /// L
    BigL,
}

impl LengthModifier {
    /// Specifiers that may legally follow this modifier
    pub fn allowed_specifiers(self) -> &'static [Specifier] {
        match self {
            LengthModifier::None => ALL_SPECIFIERS,
            LengthModifier::Hh
            | LengthModifier::Ll
            | LengthModifier::H
            | LengthModifier::J
            | LengthModifier::Z
            | LengthModifier::T => INTEGER_SPECIFIERS,
            LengthModifier::L => LONG_SPECIFIERS,
            LengthModifier::BigL => LONG_DOUBLE_SPECIFIERS,
        }
    }

    pub fn allows(self, specifier: Specifier) -> bool {
        self.allowed_specifiers().contains(&specifier)
    }
}

/// Flags parsed from a placeholder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub left_justify: bool, // '-'
    pub force_sign: bool,   // '+'
    pub space_sign: bool,   // ' '
    pub alternate: bool,    // '#'
    pub zero_pad: bool,     // '0'
}

impl Flags {
    pub fn is_empty(&self) -> bool {
        *self == Flags::default()
    }

    /// Sign flags (`+`, space) only apply to numeric conversions
    pub fn allows(&self, specifier: Specifier) -> bool {
        !(self.force_sign || self.space_sign) || specifier.is_numeric()
    }
}

/// Width or precision value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Count {
    #[default]
    Omitted,
    Literal(usize),
    /// `*`, the value is taken from an extra argument
    FromArgument,
}

/// A fully parsed `%[flags][width][.precision][length]specifier` placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub flags: Flags,
    pub width: Count,
    /// `None` when no `.` is present
    pub precision: Option<Count>,
    pub length: LengthModifier,
    pub specifier: Specifier,
}

impl Placeholder {
    /// Argument categories this placeholder consumes, in call order:
    /// width argument, precision argument, then the value itself.
    pub fn type_matchers(&self) -> Vec<TypeMatcher> {
        let mut matchers = Vec::with_capacity(3);
        if self.width == Count::FromArgument {
            matchers.push(TypeMatcher::UnsignedInt);
        }
        if self.precision == Some(Count::FromArgument) {
            matchers.push(TypeMatcher::UnsignedInt);
        }
        matchers.push(self.specifier.type_matcher());
        matchers
    }
}

/// Outcome of one placeholder parse attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaceholderResult {
    pub is_valid: bool,
    pub type_matchers: Vec<TypeMatcher>,
    /// Bytes from the leading `%` to just past the specifier, zero when invalid
    pub consumed_length: usize,
}

/// A valid placeholder found while scanning a format string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedPlaceholder {
    /// Byte offset of the leading `%`
    pub offset: usize,
    /// Byte length of the placeholder
    pub length: usize,
    pub placeholder: Placeholder,
}
