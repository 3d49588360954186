//! Subcommands of the strutil tool

use clap::{Subcommand, ValueEnum};
use strutil::{
    to_lower_case, to_upper_case, try_from_text, FormatOptions, FromText, StrUtilResult, ToText,
};
use tracing::debug;

/// Scalar type a command reads or writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    I128,
    U128,
    F32,
    F64,
    Bool,
    Char,
    String,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read a value of the given kind and print its text form
    Format {
        kind: ValueKind,
        value: String,

        /// Fractional digits (0 = type's maximum precision)
        #[arg(short, long)]
        precision: Option<usize>,
    },

    /// Parse the leading prefix of a text as the given kind
    Parse {
        kind: ValueKind,
        text: String,

        /// Fail on unparsable input instead of printing the default value
        #[arg(long)]
        checked: bool,
    },

    /// Convert text to uppercase (Latin-1 rules)
    Upper { text: String },

    /// Convert text to lowercase (Latin-1 rules)
    Lower { text: String },

    /// Encode the bytes of a text as uppercase hex
    Hex {
        text: String,

        /// Separator appended after every byte
        #[arg(short, long)]
        separator: Option<String>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Format { .. } => "format",
            Self::Parse { .. } => "parse",
            Self::Upper { .. } => "upper",
            Self::Lower { .. } => "lower",
            Self::Hex { .. } => "hex",
        }
    }

    /// The text the command operates on
    pub fn input(&self) -> &str {
        match self {
            Self::Format { value, .. } => value,
            Self::Parse { text, .. }
            | Self::Upper { text }
            | Self::Lower { text }
            | Self::Hex { text, .. } => text,
        }
    }
}

/// Dispatch a generic helper over the runtime value kind
macro_rules! with_kind {
    ($kind:expr, $func:ident($($arg:expr),*)) => {
        match $kind {
            ValueKind::I8 => $func::<i8>($($arg),*),
            ValueKind::U8 => $func::<u8>($($arg),*),
            ValueKind::I16 => $func::<i16>($($arg),*),
            ValueKind::U16 => $func::<u16>($($arg),*),
            ValueKind::I32 => $func::<i32>($($arg),*),
            ValueKind::U32 => $func::<u32>($($arg),*),
            ValueKind::I64 => $func::<i64>($($arg),*),
            ValueKind::U64 => $func::<u64>($($arg),*),
            ValueKind::I128 => $func::<i128>($($arg),*),
            ValueKind::U128 => $func::<u128>($($arg),*),
            ValueKind::F32 => $func::<f32>($($arg),*),
            ValueKind::F64 => $func::<f64>($($arg),*),
            ValueKind::Bool => $func::<bool>($($arg),*),
            ValueKind::Char => $func::<char>($($arg),*),
            ValueKind::String => $func::<String>($($arg),*),
        }
    };
}

/// Input of `format` must be a valid value, so it always goes through the
/// checked parse
fn format_as<T: FromText + ToText>(value: &str, options: &FormatOptions) -> StrUtilResult<String> {
    let value = try_from_text::<T>(value)?;
    Ok(options.format(&value))
}

fn parse_as<T: FromText + ToText>(text: &str, options: &FormatOptions) -> StrUtilResult<String> {
    let value = options.parse::<T>(text)?;
    Ok(options.format(&value))
}

/// Run a command; CLI flags take precedence over loaded options
pub fn execute(command: &Commands, options: &FormatOptions) -> StrUtilResult<String> {
    debug!(command = command.name(), input = command.input(), "Executing");

    match command {
        Commands::Format {
            kind,
            value,
            precision,
        } => {
            let options = FormatOptions {
                precision: precision.unwrap_or(options.precision),
                ..options.clone()
            };
            options.validate()?;
            with_kind!(kind, format_as(value, &options))
        },
        Commands::Parse {
            kind,
            text,
            checked,
        } => {
            let options = FormatOptions {
                checked: *checked || options.checked,
                ..options.clone()
            };
            with_kind!(kind, parse_as(text, &options))
        },
        Commands::Upper { text } => Ok(to_upper_case(text)),
        Commands::Lower { text } => Ok(to_lower_case(text)),
        Commands::Hex { text, separator } => match separator {
            Some(separator) => Ok(strutil::to_hex_string(text, separator)),
            None => Ok(options.hex(text)),
        },
    }
}
