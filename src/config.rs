//! Page settings.
//!
//! Settings come from command-line flags, each with an environment variable
//! fallback. `main` loads a `.env` file first, so these also work:
//!
//! ```bash
//! export NIET_PREFIX="NIET.ly"      # domain shown before the code
//! export NIET_CODE_LENGTH="6"       # characters per short code
//! export NIET_CONFIRM_MS="2000"     # how long "Copied!" stays visible
//! ```
//!
//! Logging is controlled separately through `RUST_LOG`.

use std::time::Duration;

use clap::Args;

use crate::codegen::CODE_LENGTH;
use crate::error::{Error, Result};
use crate::link::DEFAULT_PREFIX;

/// Default time the copy confirmation stays visible, in milliseconds.
pub const DEFAULT_CONFIRMATION_MS: u64 = 2000;

/// Longest short code accepted.
pub const MAX_CODE_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Domain prefix shown in front of the code, without trailing slash.
    pub prefix: String,
    pub code_length: usize,
    /// How long the copy confirmation stays visible.
    pub confirmation: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            code_length: CODE_LENGTH,
            confirmation: Duration::from_millis(DEFAULT_CONFIRMATION_MS),
        }
    }
}

impl Settings {
    /// Normalize and check the settings.
    ///
    /// A single trailing `/` is dropped from the prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when the prefix is empty or contains
    /// whitespace, or the code length is outside `1..=64`.
    pub fn validate(mut self) -> Result<Self> {
        if let Some(stripped) = self.prefix.strip_suffix('/') {
            self.prefix = stripped.to_string();
        }

        if self.prefix.is_empty() {
            return Err(Error::InvalidConfig("prefix must not be empty".into()));
        }

        if self.prefix.chars().any(char::is_whitespace) {
            return Err(Error::InvalidConfig(format!(
                "prefix must not contain whitespace: {:?}",
                self.prefix
            )));
        }

        if !(1..=MAX_CODE_LENGTH).contains(&self.code_length) {
            return Err(Error::InvalidConfig(format!(
                "code length must be between 1 and {MAX_CODE_LENGTH}, got {}",
                self.code_length
            )));
        }

        Ok(self)
    }
}

/// Command-line form of [`Settings`].
#[derive(Args, Debug, Clone)]
pub struct SettingsArgs {
    /// Domain prefix shown in front of the short code
    #[arg(long = "prefix", env = "NIET_PREFIX", default_value = DEFAULT_PREFIX, global = true)]
    pub prefix: String,

    /// Number of characters in the short code
    #[arg(
        short = 'l',
        long = "length",
        env = "NIET_CODE_LENGTH",
        default_value_t = CODE_LENGTH,
        global = true
    )]
    pub length: usize,

    /// How long the copy confirmation stays visible (milliseconds)
    #[arg(
        long = "confirm-ms",
        env = "NIET_CONFIRM_MS",
        default_value_t = DEFAULT_CONFIRMATION_MS,
        global = true
    )]
    pub confirm_ms: u64,
}

impl SettingsArgs {
    pub fn into_settings(self) -> Result<Settings> {
        Settings {
            prefix: self.prefix,
            code_length: self.length,
            confirmation: Duration::from_millis(self.confirm_ms),
        }
        .validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default().validate().unwrap();
        assert_eq!(s.prefix, "NIET.ly");
        assert_eq!(s.code_length, 6);
        assert_eq!(s.confirmation, Duration::from_secs(2));
    }

    #[test]
    fn test_trailing_slash_dropped() {
        let s = Settings {
            prefix: "go.example/".into(),
            ..Settings::default()
        }
        .validate()
        .unwrap();
        assert_eq!(s.prefix, "go.example");
    }

    #[test]
    fn test_empty_prefix_rejected() {
        for prefix in ["", "/"] {
            let err = Settings {
                prefix: prefix.into(),
                ..Settings::default()
            }
            .validate()
            .unwrap_err();
            assert!(err.to_string().contains("prefix must not be empty"));
        }
    }

    #[test]
    fn test_whitespace_prefix_rejected() {
        let result = Settings {
            prefix: "NIET ly".into(),
            ..Settings::default()
        }
        .validate();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_code_length_bounds() {
        for (len, ok) in [(0, false), (1, true), (64, true), (65, false)] {
            let result = Settings {
                code_length: len,
                ..Settings::default()
            }
            .validate();
            assert_eq!(result.is_ok(), ok, "length {len}");
        }
    }

    #[test]
    fn test_args_into_settings() {
        let args = SettingsArgs {
            prefix: "x.io".into(),
            length: 8,
            confirm_ms: 500,
        };
        let s = args.into_settings().unwrap();
        assert_eq!(s.prefix, "x.io");
        assert_eq!(s.code_length, 8);
        assert_eq!(s.confirmation, Duration::from_millis(500));
    }
}
