//! Diagnostic severity levels and color configuration.
//!
//! # Examples
//!
//! ```
//! use coolc_util::diagnostic::{ColorConfig, Level};
//!
//! assert!(Level::Error.is_error());
//! assert!(!ColorConfig::Never.use_color(true));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Diagnostic severity level
///
/// Lexical errors are the only diagnostics the toolchain produces. They are
/// reported at [`Level::Error`] even though scanning continues past them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// An error that makes the input invalid
    Error,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns the canonical name for this level
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
        }
    }

    /// Returns the ANSI color code for this level
    #[inline]
    pub const fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "31", // Red
        }
    }

    /// Returns the intensity modifier for terminal output
    #[inline]
    pub const fn intensity(&self) -> &'static str {
        match self {
            Level::Error => "1",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Color configuration for diagnostic rendering
///
/// Read from the `color` key of the configuration file as `"auto"`,
/// `"always"` or `"never"`.
///
/// # Examples
///
/// ```
/// use coolc_util::diagnostic::ColorConfig;
///
/// assert!(ColorConfig::Always.use_color(false));
/// assert!(ColorConfig::Auto.use_color(true));
/// assert!(!ColorConfig::Auto.use_color(false));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorConfig {
    /// Color only when writing to a terminal
    #[default]
    Auto,
    /// Always use colors, even in pipes
    Always,
    /// Never use colors
    Never,
}

impl ColorConfig {
    /// Returns true if colors should be used for the given environment
    ///
    /// # Arguments
    ///
    /// * `is_tty` - Whether the output is a terminal
    pub fn use_color(&self, is_tty: bool) -> bool {
        match self {
            ColorConfig::Auto => is_tty,
            ColorConfig::Always => true,
            ColorConfig::Never => false,
        }
    }
}
