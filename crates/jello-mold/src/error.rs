//! Mold errors

use jello_css::{CssError, LengthUnit, Measure};
use jello_dom::DomError;

/// Invalid combination of mold options
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// min, max and outer widths must share one unit
    #[error("inconsistent measurement units: min-width in {min}, max-width in {max}, outer width in {outer}")]
    InconsistentUnits {
        min: LengthUnit,
        max: LengthUnit,
        outer: LengthUnit,
    },
    /// Sizer percentage is undefined (outer width equal to min width)
    #[error("outer width {outer} leaves no room above min-width {min}")]
    DegenerateOuterWidth { min: Measure, outer: Measure },
    /// Sizer percentage does not fit an integer
    #[error("sizer width for min-width {min}, max-width {max}, outer width {outer} is out of range")]
    WidthPercentOutOfRange { min: Measure, max: Measure, outer: Measure },
    /// Malformed JSON configuration
    #[error("invalid mold configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of `build_mold`
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Parse(#[from] CssError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dom(#[from] DomError),
}

impl BuildError {
    /// A measurement could not be parsed
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// The options were inconsistent
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
