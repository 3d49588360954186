//! Format options
//!
//! Defaults for callers that drive the conversions from configuration
//! rather than per-call arguments (the `strutil` tool does).
//!
//! Priority (highest to lowest):
//! 1. Environment variables prefixed `STRUTIL_` (e.g. `STRUTIL_PRECISION=3`)
//! 2. Options file (TOML, YAML or JSON, chosen by extension)
//! 3. Default values

use std::fmt;
use std::path::Path;

use figment::{
    providers::{Env, Format, Json, Toml, Yaml},
    Figment,
};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use strutil_errors::{config_error, StrUtilError, StrUtilResult};
use tracing::debug;

use crate::convert::{from_text, to_text_with_precision, try_from_text, FromText, ToText};
use crate::hex::to_hex_string;

/// Environment variable prefix for options
pub const ENV_PREFIX: &str = "STRUTIL_";

/// Largest accepted fractional precision
pub const MAX_PRECISION: usize = 64;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Fractional digits for floating output; `0` uses the type's capacity
    pub precision: usize,
    /// Separator appended after every hex-encoded byte
    #[serde(deserialize_with = "text_or_scalar")]
    pub separator: String,
    /// Report parse failures instead of falling back to the default value
    pub checked: bool,
}

impl FormatOptions {
    pub fn validate(&self) -> StrUtilResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(StrUtilError::invalid_config(
                "precision",
                format!("{} exceeds maximum {}", self.precision, MAX_PRECISION),
            ));
        }
        Ok(())
    }

    /// Format a value with the configured precision
    pub fn format<T: ToText + ?Sized>(&self, value: &T) -> String {
        to_text_with_precision(value, self.precision)
    }

    /// Hex-encode with the configured separator
    pub fn hex(&self, data: impl AsRef<[u8]>) -> String {
        to_hex_string(data, &self.separator)
    }

    /// Parse a value, checked or silent depending on `checked`
    pub fn parse<T: FromText>(&self, text: &str) -> StrUtilResult<T> {
        if self.checked {
            try_from_text(text)
        } else {
            Ok(from_text(text))
        }
    }
}

/// Accept any scalar as text
///
/// Environment values are typed before extraction, so `STRUTIL_SEPARATOR=0`
/// arrives as an integer.
fn text_or_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextVisitor;

    impl Visitor<'_> for TextVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or scalar value")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_char<E: de::Error>(self, v: char) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(TextVisitor)
}

/// Load options from an optional file, then `STRUTIL_*` environment variables
pub fn load_options(path: Option<&Path>) -> StrUtilResult<FormatOptions> {
    load_options_with_env(path, Env::prefixed(ENV_PREFIX))
}

fn load_options_with_env(path: Option<&Path>, env: Env) -> StrUtilResult<FormatOptions> {
    let mut figment = Figment::new();

    if let Some(path) = path {
        if !path.exists() {
            return Err(config_error!("Options file not found: {}", path.display()));
        }

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        figment = match extension {
            "toml" => figment.merge(Toml::file(path)),
            "yaml" | "yml" => figment.merge(Yaml::file(path)),
            "json" => figment.merge(Json::file(path)),
            _ => {
                return Err(config_error!(
                    "Unsupported options file format: {}",
                    extension
                ))
            },
        };
        debug!(path = %path.display(), "Loading options file");
    }

    let options: FormatOptions = figment
        .merge(env)
        .extract()
        .map_err(|e| config_error!("Failed to load options: {}", e))?;

    options.validate()?;
    debug!(
        precision = options.precision,
        separator = %options.separator,
        checked = options.checked,
        "Options loaded"
    );
    Ok(options)
}
