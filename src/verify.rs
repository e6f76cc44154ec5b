//! Verification of call-site arguments against a format string
//!
//! The scanner cannot run at compile time, so checks happen when this module is
//! called, typically from tests exercising representative call sites through
//! [`verify_format!`](crate::verify_format) or [`assert_format!`](crate::assert_format).

use std::ffi::{CStr, CString};

use crate::config::Config;
use crate::parser::scan_format_with;
use crate::types::{ArgumentType, TypeMatcher};

/// Error type for argument verification
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error(
        "number of arguments passed ({actual}) does not match the number of placeholders in the format ({expected})"
    )]
    CountMismatch { expected: usize, actual: usize },
    #[error("argument {index} is {actual:?} but the format expects {expected:?}")]
    TypeMismatch {
        /// Zero-based argument position
        index: usize,
        expected: TypeMatcher,
        actual: ArgumentType,
    },
}

/// A value that can be passed to a printf-style call
pub trait FormatArgument {
    fn argument_type(&self) -> ArgumentType;
}

macro_rules! impl_format_argument {
    ($argument_type:ident => $($t:ty),+) => {
        $(
            impl FormatArgument for $t {
                fn argument_type(&self) -> ArgumentType {
                    ArgumentType::$argument_type
                }
            }
        )+
    };
}

impl_format_argument!(SignedInt => i8, i16, i32, i64, i128, isize);
impl_format_argument!(UnsignedInt => u8, u16, u32, u64, u128, usize);
impl_format_argument!(Floating => f32, f64);
impl_format_argument!(Char => char);
impl_format_argument!(String => str, String, CStr, CString);

impl<T: ?Sized> FormatArgument for *const T {
    fn argument_type(&self) -> ArgumentType {
        ArgumentType::Pointer
    }
}

impl<T: ?Sized> FormatArgument for *mut T {
    fn argument_type(&self) -> ArgumentType {
        ArgumentType::Pointer
    }
}

impl<T: FormatArgument + ?Sized> FormatArgument for &T {
    fn argument_type(&self) -> ArgumentType {
        (**self).argument_type()
    }
}

/// Check supplied arguments against the matchers of a scanned format.
///
/// The count is always checked first. Categories are compared only when
/// `config.check_types` is set; the first mismatching position is reported.
pub fn verify_arguments(
    matchers: &[TypeMatcher],
    arguments: &[ArgumentType],
    config: &Config,
) -> Result<(), VerifyError> {
    if matchers.len() != arguments.len() {
        return Err(VerifyError::CountMismatch {
            expected: matchers.len(),
            actual: arguments.len(),
        });
    }

    if !config.check_types {
        return Ok(());
    }

    match matchers
        .iter()
        .zip(arguments)
        .position(|(matcher, argument)| !matcher.accepts(*argument))
    {
        Some(index) => Err(VerifyError::TypeMismatch {
            index,
            expected: matchers[index],
            actual: arguments[index],
        }),
        None => Ok(()),
    }
}

/// Scan `format` and check the supplied arguments against it
pub fn verify_format(
    format: &str,
    arguments: &[ArgumentType],
    config: &Config,
) -> Result<(), VerifyError> {
    let matchers = scan_format_with(format, config);
    verify_arguments(&matchers, arguments, config)
        .inspect_err(|e| log::debug!("format {format:?} rejected: {e}"))
}

/// Verify a format string against the arguments of a call, returning a `Result`
///
/// ```
/// use printf_check::verify_format;
///
/// assert!(verify_format!("%s is %d", "answer", 42).is_ok());
/// assert!(verify_format!("%s is %d", "answer").is_err());
/// ```
#[macro_export]
macro_rules! verify_format {
    ($format:expr $(, $argument:expr)* $(,)?) => {
        $crate::verify::verify_format(
            $format,
            &[$($crate::verify::FormatArgument::argument_type(&$argument)),*],
            &$crate::config::Config::default(),
        )
    };
}

/// Like [`verify_format!`] but panics with the diagnostic on mismatch
#[macro_export]
macro_rules! assert_format {
    ($format:expr $(, $argument:expr)* $(,)?) => {{
        let format = $format;
        if let Err(error) = $crate::verify_format!(format $(, $argument)*) {
            panic!("format {:?}: {}", format, error);
        }
    }};
}
