//! Allocation-free integer formatting
//!
//! Integer text is produced through an `itoa` stack buffer and appended to
//! the caller's output, so formatting a value costs at most the growth of
//! the destination `String`.
//!
//! # Usage
//!
//! ```rust
//! use strutil::numfmt::push_integer;
//!
//! let mut out = String::from("id=");
//! push_integer(&mut out, -42i32);
//! assert_eq!(out, "id=-42");
//! ```

/// Append the decimal text of an integer to `out`
#[inline]
pub fn push_integer<I: itoa::Integer>(out: &mut String, n: I) {
    let mut buffer = itoa::Buffer::new();
    out.push_str(buffer.format(n));
}

/// Append `n` formatted in fixed-point notation with exactly `precision`
/// fractional digits
///
/// Non-finite values are spelled the way C-style streams spell them
/// (`nan`, `inf`, `-inf`).
pub fn push_fixed(out: &mut String, n: f64, precision: usize) {
    if n.is_nan() {
        out.push_str("nan");
    } else if n.is_infinite() {
        out.push_str(if n.is_sign_negative() { "-inf" } else { "inf" });
    } else {
        use std::fmt::Write;
        // Writing to String buffer is infallible
        let _ = write!(out, "{:.*}", precision, n);
    }
}
