//! Numeric entry modes.
//!
//! A [`Mode`] is the discipline applied to a field's text. Hosts that receive
//! the mode as a string (config files, deserialized props) go through
//! [`Mode::from_tag`], which is the only place an unknown mode can appear.

use std::fmt;
use std::str::FromStr;

/// Fractional digits kept by [`Mode::Decimal`] when none are configured.
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// Entry discipline for a number field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Signed integers.
    Integer,
    /// Non-negative integers; a leading minus rejects the whole entry.
    Whole,
    /// Signed decimals, fraction truncated to `places` digits.
    Decimal { places: u32 },
}

impl Mode {
    /// Decimal mode with [`DEFAULT_DECIMAL_PLACES`].
    pub const fn decimal() -> Self {
        Mode::Decimal {
            places: DEFAULT_DECIMAL_PLACES,
        }
    }

    /// Resolve a boundary mode tag.
    ///
    /// Tags are matched ASCII case-insensitively after trimming. `decimal_places`
    /// is only meaningful for `"decimal"`; supplying it for another mode is a
    /// configuration error, as is any unrecognized tag.
    ///
    /// ```
    /// use number_core::{Mode, ModeError};
    ///
    /// assert_eq!(Mode::from_tag("whole", None), Ok(Mode::Whole));
    /// assert_eq!(Mode::from_tag("Decimal", Some(3)), Ok(Mode::Decimal { places: 3 }));
    /// assert!(matches!(
    ///     Mode::from_tag("percent", None),
    ///     Err(ModeError::UnknownMode { .. })
    /// ));
    /// ```
    pub fn from_tag(tag: &str, decimal_places: Option<u32>) -> Result<Self, ModeError> {
        let t = tag.trim();

        let mode = if t.eq_ignore_ascii_case("integer") {
            Mode::Integer
        } else if t.eq_ignore_ascii_case("whole") {
            Mode::Whole
        } else if t.eq_ignore_ascii_case("decimal") {
            return Ok(Mode::Decimal {
                places: decimal_places.unwrap_or(DEFAULT_DECIMAL_PLACES),
            });
        } else {
            return Err(ModeError::UnknownMode {
                tag: tag.to_string(),
            });
        };

        if let Some(places) = decimal_places {
            return Err(ModeError::UnexpectedDecimalPlaces { mode, places });
        }
        Ok(mode)
    }

    /// The boundary tag for this mode.
    pub const fn tag(self) -> &'static str {
        match self {
            Mode::Integer => "integer",
            Mode::Whole => "whole",
            Mode::Decimal { .. } => "decimal",
        }
    }

    /// Placeholder shown while the field is empty.
    pub fn placeholder(self) -> String {
        match self {
            Mode::Integer => "Enter Integer".to_string(),
            Mode::Whole => "Enter Whole Number".to_string(),
            Mode::Decimal { places } => format!("Enter Decimal (Up to {places} decimal places)"),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Decimal { places } => write!(f, "decimal({places})"),
            _ => f.write_str(self.tag()),
        }
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::from_tag(s, None)
    }
}

/// Configuration error raised while resolving a [`Mode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModeError {
    UnknownMode { tag: String },
    UnexpectedDecimalPlaces { mode: Mode, places: u32 },
}

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeError::UnknownMode { tag } => {
                write!(f, "unknown number mode {tag:?} (expected integer, whole or decimal)")
            }
            ModeError::UnexpectedDecimalPlaces { mode, places } => {
                write!(f, "decimal places ({places}) given for {} mode", mode.tag())
            }
        }
    }
}

impl std::error::Error for ModeError {}
