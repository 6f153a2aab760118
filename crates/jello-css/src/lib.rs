//! jello CSS - Measurements & Properties
//!
//! Length parsing for `px`/`em` measurements and the typed property ids
//! the mold writes as inline styles.

mod measure;
mod properties;

pub use measure::{LengthUnit, Measure, MeasureInput, format_number, parse_measure};
pub use properties::{PropertyId, TextAlign};

/// CSS parsing error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CssError {
    /// No numeric token anywhere in a measurement string
    #[error("cannot parse measurement: {input}")]
    Unparseable { input: String },
    /// Keyword not valid for a property
    #[error("unknown {property} keyword: {keyword}")]
    UnknownKeyword { property: &'static str, keyword: String },
}
