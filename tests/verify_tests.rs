use std::ffi::CString;

use printf_check::{
    ArgumentType, Config, FormatArgument, TypeMatcher, VerifyError, assert_format, scan_format,
    verify, verify_arguments, verify_format,
};

#[test]
fn test_count_check() {
    let matchers = scan_format("%d %d");
    let config = Config::default();

    assert_eq!(
        verify_arguments(&matchers, &[ArgumentType::SignedInt], &config),
        Err(VerifyError::CountMismatch {
            expected: 2,
            actual: 1
        })
    );
    assert_eq!(
        verify_arguments(
            &matchers,
            &[ArgumentType::SignedInt, ArgumentType::SignedInt],
            &config
        ),
        Ok(())
    );
}

#[test]
fn test_count_message() {
    let error = verify_format!("%s and %s", "one").unwrap_err();
    assert_eq!(
        error.to_string(),
        "number of arguments passed (1) does not match the number of placeholders in the format (2)"
    );
}

#[test]
fn test_type_check() {
    let error = verify_format!("%s is %d", "answer", 4.2).unwrap_err();
    assert_eq!(
        error,
        VerifyError::TypeMismatch {
            index: 1,
            expected: TypeMatcher::SignedInt,
            actual: ArgumentType::Floating,
        }
    );
    assert_eq!(
        error.to_string(),
        "argument 1 is Floating but the format expects SignedInt"
    );
}

#[test]
fn test_type_check_can_be_disabled() {
    let config = Config::default().with_check_types(false);
    let matchers = scan_format("%s is %d");
    assert_eq!(
        verify_arguments(
            &matchers,
            &[ArgumentType::Floating, ArgumentType::Pointer],
            &config
        ),
        Ok(())
    );
    assert!(matches!(
        verify_arguments(&matchers, &[ArgumentType::Floating], &config),
        Err(VerifyError::CountMismatch { .. })
    ));
}

#[test]
fn test_star_arguments_come_first() {
    let width: usize = 8;
    let precision: u32 = 3;
    assert!(verify_format!("%*.*f", width, precision, 1.5f64).is_ok());
    assert!(verify_format!("%*.*f", 1.5f64, width, precision).is_err());
}

#[test]
fn test_write_back_is_unconstrained() {
    let mut written = 0i32;
    let target: *mut i32 = &mut written;
    assert!(verify_format!("abc%n", target).is_ok());
    assert!(verify_format!("abc%n", 'x').is_ok());
    assert!(verify_format!("abc%n").is_err());
}

#[test]
fn test_argument_types() {
    let owned = String::from("owned");
    let c_string = CString::new("c").unwrap();
    let value = 7u8;
    let pointer: *const u8 = &value;

    assert_eq!(owned.argument_type(), ArgumentType::String);
    assert_eq!("literal".argument_type(), ArgumentType::String);
    assert_eq!(c_string.as_c_str().argument_type(), ArgumentType::String);
    assert_eq!(value.argument_type(), ArgumentType::UnsignedInt);
    assert_eq!((-1i64).argument_type(), ArgumentType::SignedInt);
    assert_eq!(1.0f32.argument_type(), ArgumentType::Floating);
    assert_eq!('c'.argument_type(), ArgumentType::Char);
    assert_eq!(pointer.argument_type(), ArgumentType::Pointer);
}

#[test]
fn test_matcher_accepts() {
    assert!(TypeMatcher::Unconstrained.accepts(ArgumentType::String));
    assert!(TypeMatcher::UnsignedInt.accepts(ArgumentType::UnsignedInt));
    assert!(!TypeMatcher::UnsignedInt.accepts(ArgumentType::SignedInt));
    assert!(!TypeMatcher::Char.accepts(ArgumentType::UnsignedInt));
}

#[test]
fn test_assert_format_passes() {
    let name = String::from("world");
    assert_format!("Hello %s, you are %d years old", name, 42);
    assert_format!("100%% done");
}

#[test]
#[should_panic(expected = "does not match the number of placeholders")]
fn test_assert_format_panics_on_count() {
    assert_format!("%d %d", 1);
}

#[test]
fn test_verify_format_with_config() {
    let single = Config::default().with_stacked_flags(false);
    let arguments = [ArgumentType::SignedInt];
    assert!(verify::verify_format("%-+5d", &arguments, &Config::default()).is_ok());
    assert!(verify::verify_format("%-+5d", &arguments, &single).is_err());
}
