//! Result rendering (plain text or JSON)

use colored::Colorize;
use serde::Serialize;
use strutil_errors::{StrUtilError, StrUtilResult};

/// JSON form of a successful command
#[derive(Debug, Serialize)]
pub struct CommandOutput<'a> {
    pub command: &'a str,
    pub input: &'a str,
    pub output: &'a str,
}

pub fn render_success(command: &str, input: &str, output: &str, json: bool) -> StrUtilResult<String> {
    if json {
        let record = CommandOutput {
            command,
            input,
            output,
        };
        Ok(serde_json::to_string(&record)?)
    } else {
        Ok(output.to_string())
    }
}

pub fn render_error(err: &StrUtilError, json: bool) -> String {
    if json {
        serde_json::to_string(&err.to_error_info())
            .unwrap_or_else(|_| format!(r#"{{"code":"{}"}}"#, err.error_code()))
    } else {
        format!("{} {}", "error:".red().bold(), err)
    }
}
