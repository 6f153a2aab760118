//! CSS Measurements
//!
//! A measurement is a number plus a `px` or `em` unit. Bare numbers and
//! unit-less strings are pixels.
//!
//! String parsing is deliberately lax: the first `digits[.digits][px|em]`
//! run anywhere in the input is taken and everything around it ignored, so
//! `"width: 32emfoo"` reads as `32em` and `"-5px"` as `5px`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CssError;

/// Length unit of a measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// CSS pixels
    #[default]
    Px,
    /// Font-relative
    Em,
}

impl LengthUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Em => "em",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measure {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Measure {
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub const fn px(value: f64) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    pub const fn em(value: f64) -> Self {
        Self::new(value, LengthUnit::Em)
    }

    /// Same unit, different value
    pub fn with_value(self, value: f64) -> Self {
        Self { value, ..self }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit)
    }
}

impl FromStr for Measure {
    type Err = CssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        scan_measure(s).ok_or_else(|| CssError::Unparseable { input: s.to_string() })
    }
}

/// Shortest round-trip rendering of a CSS number; negative zero prints as `0`
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Measurement as supplied by a caller: a bare number (pixels) or a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeasureInput {
    Number(f64),
    Text(String),
}

impl MeasureInput {
    /// Interpret this input as a measurement
    pub fn to_measure(&self) -> Result<Measure, CssError> {
        match self {
            Self::Number(value) => Ok(Measure::px(*value)),
            Self::Text(text) => text.parse(),
        }
    }
}

impl fmt::Display for MeasureInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => f.write_str(&format_number(*value)),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for MeasureInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for MeasureInput {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for MeasureInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for MeasureInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Measure> for MeasureInput {
    fn from(measure: Measure) -> Self {
        Self::Text(measure.to_string())
    }
}

/// Interpret a number or string as a CSS measurement.
///
/// Numbers are pixels, taken verbatim. Strings yield the first numeric
/// token with its optional `px`/`em` suffix; a string without any digit is
/// an error.
pub fn parse_measure(input: impl Into<MeasureInput>) -> Result<Measure, CssError> {
    input.into().to_measure()
}

/// Find the first `digits[.digits][px|em]` run in `text`
fn scan_measure(text: &str) -> Option<Measure> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;

    let mut end = start + count_digits(&bytes[start..]);
    if bytes.get(end) == Some(&b'.') {
        let fraction = count_digits(&bytes[end + 1..]);
        if fraction > 0 {
            end += 1 + fraction;
        }
    }

    let value: f64 = text[start..end].parse().ok()?;
    let unit = match bytes.get(end..end + 2) {
        Some(b"em") => LengthUnit::Em,
        _ => LengthUnit::Px,
    };
    tracing::trace!("Scanned measurement {}{} from {:?}", value, unit, text);
    Some(Measure::new(value, unit))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
