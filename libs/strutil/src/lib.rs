//! strutil - string helpers for 8-bit Western European text
//!
//! # Key Components
//!
//! - **convert**: generic value <-> text conversion with fixed-point precision
//! - **case**: Latin-1 / Windows-125x uppercase and lowercase mapping
//! - **hex**: uppercase hex encoding with an optional separator
//! - **config**: format options loaded from file and environment
//!
//! Every operation is a pure function over its arguments; nothing here holds
//! state, so all of it is safe to call from any thread.
//!
//! # Example
//!
//! ```rust
//! use strutil::{from_text, to_hex_string, to_text_with_precision, to_upper_case};
//!
//! assert_eq!(to_text_with_precision(&2.5f64, 2), "2.50");
//! assert_eq!(from_text::<u32>("42 kW"), 42);
//! assert_eq!(to_upper_case("garçon"), "GARÇON");
//! assert_eq!(to_hex_string("AB", "-"), "41-42-");
//! ```

pub mod case;
pub mod config;
pub mod convert;
pub mod hex;
pub mod numfmt;

// Re-exports
pub use case::{
    char_to_lower, char_to_upper, latin1_to_lower, latin1_to_upper, to_lower_bytes,
    to_lower_case, to_upper_bytes, to_upper_case,
};
pub use config::{load_options, FormatOptions};
pub use convert::{
    from_text, to_text, to_text_with_precision, try_from_text, FromText, Opaque, Scan, ToText,
};
pub use hex::{encode_upper, to_hex_string};
pub use strutil_errors::{StrUtilError, StrUtilResult};
