//! Value <-> text conversion
//!
//! Formatting follows fixed-point stream rules: floating values print with
//! the requested number of fractional digits, or with the type's decimal
//! digit capacity when no precision is given. Parsing reads the leading
//! parseable prefix of the text and ignores whatever follows it.
//!
//! The default paths never fail:
//!
//! ```rust
//! use strutil::convert::{from_text, to_text, to_text_with_precision};
//!
//! assert_eq!(to_text(&3000i32), "3000");
//! assert_eq!(to_text_with_precision(&9.234f64, 3), "9.234");
//! assert_eq!(to_text(&9.234f64), "9.234000000000000");
//!
//! assert_eq!(from_text::<i32>("3000 volts"), 3000);
//! assert_eq!(from_text::<i32>("abc"), 0);
//! ```
//!
//! Use [`try_from_text`] when the caller needs to tell a real zero from a
//! failed parse.

use std::fmt::Write;
use std::num::IntErrorKind;

use strutil_errors::{StrUtilError, StrUtilResult};
use tracing::debug;

use crate::numfmt::{push_fixed, push_integer};

/// A value that can be written as text
pub trait ToText {
    /// Decimal digits the type can hold without loss (`digits10`)
    ///
    /// Used as the precision when the caller asks for precision `0`.
    const DIGITS10: usize = 0;

    /// Append the text of `self` to `out`
    ///
    /// `precision` is already resolved (never `0` for floating types unless
    /// the type's capacity is `0`).
    fn write_text(&self, precision: usize, out: &mut String);
}

/// Outcome of scanning the leading prefix of a text
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scan<T> {
    /// A prefix was read and fits the type
    Parsed(T),
    /// A prefix was read but exceeds the type's range; holds the clamped value
    Saturated(T),
    /// A negative prefix was read for an unsigned type; holds the value
    /// wrapped modulo 2^N
    Wrapped(T),
    /// No valid prefix
    Invalid,
}

/// A value that can be read from the leading prefix of a text
pub trait FromText: Sized + Default {
    /// Type name used in logs and errors
    const TYPE_NAME: &'static str;

    fn scan_text(text: &str) -> Scan<Self>;
}

/// Convert a value to text using the type's maximum decimal precision
pub fn to_text<T: ToText + ?Sized>(value: &T) -> String {
    to_text_with_precision(value, 0)
}

/// Convert a value to text with `precision` fractional digits
///
/// A `precision` of `0` selects [`ToText::DIGITS10`]. Integer, boolean and
/// textual values are not affected by the precision.
pub fn to_text_with_precision<T: ToText + ?Sized>(value: &T, precision: usize) -> String {
    let precision = if precision > 0 {
        precision
    } else {
        T::DIGITS10
    };

    let mut out = String::new();
    value.write_text(precision, &mut out);
    out
}

/// Parse a value from the leading prefix of `text`
///
/// Leading whitespace is skipped and trailing characters are ignored. When
/// the text has no valid prefix the type's default value is returned; values
/// outside the type's range are clamped, and negative text read into an
/// unsigned type wraps around (`"-5"` as `u32` is `4294967291`).
pub fn from_text<T: FromText>(text: &str) -> T {
    match T::scan_text(text) {
        Scan::Parsed(value) => value,
        Scan::Saturated(value) => {
            debug!(input = text, target = T::TYPE_NAME, "value out of range, clamped");
            value
        },
        Scan::Wrapped(value) => {
            debug!(input = text, target = T::TYPE_NAME, "negative value wrapped");
            value
        },
        Scan::Invalid => {
            debug!(input = text, target = T::TYPE_NAME, "no valid prefix, using default");
            T::default()
        },
    }
}

/// Checked counterpart of [`from_text`]
///
/// Same prefix rules, but a missing prefix is reported as
/// [`StrUtilError::Parse`] and an out-of-range or wrapped prefix as
/// [`StrUtilError::OutOfRange`].
pub fn try_from_text<T: FromText>(text: &str) -> StrUtilResult<T> {
    match T::scan_text(text) {
        Scan::Parsed(value) => Ok(value),
        Scan::Saturated(_) | Scan::Wrapped(_) => Err(StrUtilError::out_of_range(text, T::TYPE_NAME)),
        Scan::Invalid => Err(StrUtilError::parse(text, T::TYPE_NAME)),
    }
}

/// Formats any value as its storage address
///
/// Degenerate fallback for values that have no textual form. The output is
/// only meaningful for the lifetime of the borrowed value.
///
/// ```rust
/// use strutil::convert::{to_text, Opaque};
///
/// struct Handle;
/// let handle = Handle;
/// assert!(to_text(&Opaque(&handle)).starts_with("0x"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Opaque<'a, T: ?Sized>(pub &'a T);

impl<T: ?Sized> ToText for Opaque<'_, T> {
    fn write_text(&self, _precision: usize, out: &mut String) {
        debug!(
            value_type = std::any::type_name::<T>(),
            "formatting opaque value as its address"
        );
        let _ = write!(out, "{:p}", self.0);
    }
}

// ============================================================================
// Prefix scanning
// ============================================================================

/// Stream whitespace: space, \t, \n, \v, \f, \r
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

fn skip_space(text: &str) -> &str {
    text.trim_start_matches(is_space)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// `[+|-]digits`
fn integer_prefix(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let sign = match bytes.first() {
        Some(b'+' | b'-') => 1,
        _ => 0,
    };

    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    Some(&text[..sign + digits])
}

/// `[+|-]digits[.digits][(e|E)[+|-]digits]` with at least one mantissa digit
fn float_prefix(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut end = match bytes.first() {
        Some(b'+' | b'-') => 1,
        _ => 0,
    };

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(bytes.get(exp_end..).unwrap_or(&[]));
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    Some(&text[..end])
}

// ============================================================================
// Scalar implementations
// ============================================================================

macro_rules! impl_integer_text {
    ($($ty:ty => digits10: $digits:expr, signed: $signed:expr;)*) => {$(
        impl ToText for $ty {
            const DIGITS10: usize = $digits;

            #[inline]
            fn write_text(&self, _precision: usize, out: &mut String) {
                push_integer(out, *self);
            }
        }

        impl FromText for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn scan_text(text: &str) -> Scan<Self> {
                let Some(prefix) = integer_prefix(skip_space(text)) else {
                    return Scan::Invalid;
                };

                // Unsigned types read the magnitude and negate modulo 2^N
                if !$signed {
                    if let Some(magnitude) = prefix.strip_prefix('-') {
                        return match magnitude.parse::<$ty>() {
                            Ok(0) => Scan::Parsed(0),
                            Ok(value) => Scan::Wrapped(value.wrapping_neg()),
                            Err(_) => Scan::Saturated(<$ty>::MAX),
                        };
                    }
                }

                match prefix.parse::<$ty>() {
                    Ok(value) => Scan::Parsed(value),
                    Err(e) => match e.kind() {
                        IntErrorKind::PosOverflow => Scan::Saturated(<$ty>::MAX),
                        IntErrorKind::NegOverflow => Scan::Saturated(<$ty>::MIN),
                        _ => Scan::Invalid,
                    },
                }
            }
        }
    )*};
}

impl_integer_text! {
    i8 => digits10: 2, signed: true;
    u8 => digits10: 2, signed: false;
    i16 => digits10: 4, signed: true;
    u16 => digits10: 4, signed: false;
    i32 => digits10: 9, signed: true;
    u32 => digits10: 9, signed: false;
    i64 => digits10: 18, signed: true;
    u64 => digits10: 19, signed: false;
    i128 => digits10: 38, signed: true;
    u128 => digits10: 38, signed: false;
    isize => digits10: if isize::BITS == 64 { 18 } else { 9 }, signed: true;
    usize => digits10: if usize::BITS == 64 { 19 } else { 9 }, signed: false;
}

macro_rules! impl_float_text {
    ($($ty:ident),*) => {$(
        impl ToText for $ty {
            const DIGITS10: usize = $ty::DIGITS as usize;

            #[inline]
            fn write_text(&self, precision: usize, out: &mut String) {
                push_fixed(out, f64::from(*self), precision);
            }
        }

        impl FromText for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn scan_text(text: &str) -> Scan<Self> {
                let Some(prefix) = float_prefix(skip_space(text)) else {
                    return Scan::Invalid;
                };

                match prefix.parse::<$ty>() {
                    Ok(value) if value.is_infinite() => Scan::Saturated(value),
                    Ok(value) => Scan::Parsed(value),
                    Err(_) => Scan::Invalid,
                }
            }
        }
    )*};
}

impl_float_text!(f32, f64);

/// Booleans use their numeric form: `1` / `0`
impl ToText for bool {
    fn write_text(&self, _precision: usize, out: &mut String) {
        out.push(if *self { '1' } else { '0' });
    }
}

/// Any integer other than `0` / `1` reads as `true`, reported out of range
impl FromText for bool {
    const TYPE_NAME: &'static str = "bool";

    fn scan_text(text: &str) -> Scan<Self> {
        match i64::scan_text(text) {
            Scan::Parsed(0) => Scan::Parsed(false),
            Scan::Parsed(1) => Scan::Parsed(true),
            Scan::Parsed(_) | Scan::Saturated(_) | Scan::Wrapped(_) => Scan::Saturated(true),
            Scan::Invalid => Scan::Invalid,
        }
    }
}

impl ToText for char {
    fn write_text(&self, _precision: usize, out: &mut String) {
        out.push(*self);
    }
}

/// First non-whitespace character
impl FromText for char {
    const TYPE_NAME: &'static str = "char";

    fn scan_text(text: &str) -> Scan<Self> {
        skip_space(text)
            .chars()
            .next()
            .map_or(Scan::Invalid, Scan::Parsed)
    }
}

impl ToText for str {
    fn write_text(&self, _precision: usize, out: &mut String) {
        out.push_str(self);
    }
}

impl ToText for String {
    fn write_text(&self, _precision: usize, out: &mut String) {
        out.push_str(self);
    }
}

/// First whitespace-delimited word
impl FromText for String {
    const TYPE_NAME: &'static str = "string";

    fn scan_text(text: &str) -> Scan<Self> {
        match skip_space(text).split(is_space).next() {
            Some(word) if !word.is_empty() => Scan::Parsed(word.to_string()),
            _ => Scan::Invalid,
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_integer_to_text_ignores_precision() {
        assert_eq!(to_text(&3000i32), "3000");
        assert_eq!(to_text_with_precision(&3000i32, 4), "3000");
        assert_eq!(to_text(&-17i8), "-17");
        assert_eq!(to_text(&u64::MAX), "18446744073709551615");
    }

    #[test]
    fn test_float_to_text_default_precision() {
        assert_eq!(to_text(&9.234f64), "9.234000000000000");
        assert_eq!(to_text(&9.234f32), "9.234000");
        assert_eq!(to_text(&0.0f64), "0.000000000000000");
    }

    #[test]
    fn test_float_to_text_explicit_precision() {
        assert_eq!(to_text_with_precision(&9.234f64, 3), "9.234");
        assert_eq!(to_text_with_precision(&9.234f64, 1), "9.2");
        assert_eq!(to_text_with_precision(&-1.5f64, 2), "-1.50");
        assert_eq!(to_text_with_precision(&1e3f32, 1), "1000.0");
    }

    #[test]
    fn test_float_to_text_special_values() {
        assert_eq!(to_text(&f64::NAN), "nan");
        assert_eq!(to_text(&f32::INFINITY), "inf");
        assert_eq!(to_text_with_precision(&f64::NEG_INFINITY, 2), "-inf");
    }

    #[test]
    fn test_non_numeric_to_text() {
        assert_eq!(to_text(&true), "1");
        assert_eq!(to_text(&false), "0");
        assert_eq!(to_text(&'x'), "x");
        assert_eq!(to_text("São Paulo"), "São Paulo");
        assert_eq!(to_text(&String::from("text")), "text");
    }

    #[test]
    fn test_digits10() {
        assert_eq!(<u8 as ToText>::DIGITS10, 2);
        assert_eq!(<i32 as ToText>::DIGITS10, 9);
        assert_eq!(<u64 as ToText>::DIGITS10, 19);
        assert_eq!(<f32 as ToText>::DIGITS10, 6);
        assert_eq!(<f64 as ToText>::DIGITS10, 15);
        assert_eq!(<str as ToText>::DIGITS10, 0);
    }

    #[test]
    fn test_opaque_is_address() {
        struct Handle {
            _id: u32,
        }
        let handle = Handle { _id: 7 };
        let text = to_text(&Opaque(&handle));
        assert_eq!(text, format!("{:p}", &handle));
        assert!(text.starts_with("0x"));
    }

    #[test]
    fn test_integer_prefix_parsing() {
        assert_eq!(from_text::<i32>("3000"), 3000);
        assert_eq!(from_text::<i32>("  -42abc"), -42);
        assert_eq!(from_text::<i32>("+7"), 7);
        assert_eq!(from_text::<i32>("12.9"), 12);
        assert_eq!(from_text::<u16>("\t\n65535 "), 65535);
    }

    #[test]
    fn test_integer_invalid_is_zero() {
        assert_eq!(from_text::<i32>("abc"), 0);
        assert_eq!(from_text::<i32>(""), 0);
        assert_eq!(from_text::<i32>("-"), 0);
        assert_eq!(from_text::<i64>("- 5"), 0);
        assert_eq!(from_text::<u32>("-"), 0);
    }

    #[test]
    fn test_unsigned_negative_wraps() {
        assert_eq!(from_text::<u32>("-5"), 4294967291);
        assert_eq!(from_text::<u8>(" -1"), u8::MAX);
        assert_eq!(from_text::<u64>("-0"), 0);
        assert_eq!(from_text::<u16>("-70000"), u16::MAX);
        assert_eq!(u32::scan_text("-5"), Scan::Wrapped(4294967291));

        let err = try_from_text::<u32>("-5").unwrap_err();
        assert!(matches!(err, StrUtilError::OutOfRange { target: "u32", .. }));
    }

    #[test]
    fn test_integer_overflow_clamps() {
        assert_eq!(from_text::<u8>("300"), u8::MAX);
        assert_eq!(from_text::<i8>("-129"), i8::MIN);
        assert_eq!(from_text::<i64>("99999999999999999999"), i64::MAX);
    }

    #[test]
    fn test_float_prefix_parsing() {
        assert_eq!(from_text::<f64>("9.234"), 9.234);
        assert_eq!(from_text::<f64>("  -1.5e3xyz"), -1500.0);
        assert_eq!(from_text::<f64>(".5"), 0.5);
        assert_eq!(from_text::<f64>("5."), 5.0);
        assert_eq!(from_text::<f64>("2e"), 2.0);
        assert_eq!(from_text::<f64>("2e+"), 2.0);
        assert_eq!(from_text::<f64>("1E-2"), 0.01);
        assert_eq!(from_text::<f32>("0.25V"), 0.25);
    }

    #[test]
    fn test_float_invalid_is_zero() {
        assert_eq!(from_text::<f64>("abc"), 0.0);
        assert_eq!(from_text::<f64>("."), 0.0);
        assert_eq!(from_text::<f64>("-.e5"), 0.0);
        assert_eq!(from_text::<f64>("nan"), 0.0);
    }

    #[test]
    fn test_float_overflow_is_infinite() {
        assert_eq!(from_text::<f64>("1e999"), f64::INFINITY);
        assert_eq!(from_text::<f32>("-1e99"), f32::NEG_INFINITY);
    }

    #[test]
    fn test_bool_char_string_parsing() {
        assert!(from_text::<bool>("1"));
        assert!(!from_text::<bool>("0"));
        assert!(!from_text::<bool>("true"));
        assert!(from_text::<bool>("2"));
        assert!(from_text::<bool>("-1"));
        assert!(from_text::<bool>("99999999999999999999"));
        assert_eq!(bool::scan_text("2"), Scan::Saturated(true));
        assert_eq!(
            try_from_text::<bool>("2").unwrap_err().error_code(),
            "OUT_OF_RANGE"
        );

        assert_eq!(from_text::<char>("  xyz"), 'x');
        assert_eq!(from_text::<char>(""), '\0');

        assert_eq!(from_text::<String>("  hello world"), "hello");
        assert_eq!(from_text::<String>("   "), "");
    }

    #[test]
    fn test_try_from_text() {
        assert_eq!(try_from_text::<i32>("42 apples").unwrap(), 42);

        let err = try_from_text::<i32>("abc").unwrap_err();
        assert!(matches!(err, StrUtilError::Parse { target: "i32", .. }));

        let err = try_from_text::<u8>("256").unwrap_err();
        assert!(matches!(err, StrUtilError::OutOfRange { target: "u8", .. }));

        let err = try_from_text::<f64>("1e400").unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE");
    }

    #[test]
    fn test_scan_outcomes() {
        assert_eq!(i16::scan_text("12"), Scan::Parsed(12));
        assert_eq!(i16::scan_text("40000"), Scan::Saturated(i16::MAX));
        assert_eq!(i16::scan_text("x"), Scan::Invalid);
    }

    #[test]
    #[traced_test]
    fn test_silent_fallback_is_logged() {
        assert_eq!(from_text::<i32>("abc"), 0);
        assert!(logs_contain("no valid prefix, using default"));
    }

    #[test]
    #[traced_test]
    fn test_clamp_is_logged() {
        assert_eq!(from_text::<u8>("1000"), 255);
        assert!(logs_contain("value out of range, clamped"));
    }

    #[test]
    #[traced_test]
    fn test_wrap_is_logged() {
        assert_eq!(from_text::<u8>("-2"), 254);
        assert!(logs_contain("negative value wrapped"));
    }
}
