//! Mold Configuration

use jello_css::{MeasureInput, TextAlign};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Mold configuration options
///
/// Deserializes from the camelCase object form
/// (`{"align": "left", "minWidth": "32em", "maxWidth": "64em"}`); omitted
/// keys take their defaults and unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoldConfig {
    /// Text alignment of the container; `center` also centers the sizer
    pub align: TextAlign,

    /// Width below which content stops shrinking
    pub min_width: MeasureInput,

    /// Width content never exceeds
    pub max_width: Option<MeasureInput>,

    /// Available width at which content reaches `max_width`.
    /// Defaults to `max_width`; ignored without it.
    pub outer_width: Option<MeasureInput>,

    /// Emit the IE `expression()` width for pixel molds
    pub legacy_pixel_expression_fallback: bool,
}

impl Default for MoldConfig {
    fn default() -> Self {
        Self {
            align: TextAlign::Center,
            min_width: MeasureInput::Text("320px".to_string()),
            max_width: None,
            outer_width: None,
            legacy_pixel_expression_fallback: false,
        }
    }
}

impl MoldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration object
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn min_width(mut self, width: impl Into<MeasureInput>) -> Self {
        self.min_width = width.into();
        self
    }

    pub fn max_width(mut self, width: impl Into<MeasureInput>) -> Self {
        self.max_width = Some(width.into());
        self
    }

    pub fn outer_width(mut self, width: impl Into<MeasureInput>) -> Self {
        self.outer_width = Some(width.into());
        self
    }

    pub fn legacy_pixel_expression_fallback(mut self, enabled: bool) -> Self {
        self.legacy_pixel_expression_fallback = enabled;
        self
    }

    /// Outer width actually used: the explicit one, else `max_width`.
    /// `None` whenever `max_width` is unset.
    pub fn effective_outer_width(&self) -> Option<&MeasureInput> {
        let max = self.max_width.as_ref()?;
        Some(self.outer_width.as_ref().unwrap_or(max))
    }
}
