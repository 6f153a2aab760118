//! CSS Property Definitions
//!
//! The properties the mold writes inline, plus the `text-align` keyword
//! set. Uses enums for fixed values instead of free-form strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CssError;

/// Property identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum PropertyId {
    // Layout
    Position,
    Zoom,

    // Box Model
    Width,
    MinWidth,
    MaxWidth,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,

    // Text
    TextAlign,
}

impl PropertyId {
    /// CSS property name
    pub fn name(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Zoom => "zoom",
            Self::Width => "width",
            Self::MinWidth => "min-width",
            Self::MaxWidth => "max-width",
            Self::MarginTop => "margin-top",
            Self::MarginRight => "margin-right",
            Self::MarginBottom => "margin-bottom",
            Self::MarginLeft => "margin-left",
            Self::PaddingTop => "padding-top",
            Self::PaddingRight => "padding-right",
            Self::PaddingBottom => "padding-bottom",
            Self::PaddingLeft => "padding-left",
            Self::TextAlign => "text-align",
        }
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `text-align` keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextAlign {
    type Err = CssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            "justify" => Ok(Self::Justify),
            _ => Err(CssError::UnknownKeyword {
                property: "text-align",
                keyword: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_names() {
        assert_eq!(PropertyId::Position.name(), "position");
        assert_eq!(PropertyId::Zoom.name(), "zoom");
        assert_eq!(PropertyId::MinWidth.name(), "min-width");
        assert_eq!(PropertyId::MarginLeft.name(), "margin-left");
        assert_eq!(PropertyId::PaddingBottom.name(), "padding-bottom");
        assert_eq!(PropertyId::TextAlign.name(), "text-align");
    }

    #[test]
    fn test_text_align_parse() {
        assert_eq!("left".parse::<TextAlign>(), Ok(TextAlign::Left));
        assert_eq!(" Right ".parse::<TextAlign>(), Ok(TextAlign::Right));
        assert_eq!(TextAlign::default(), TextAlign::Center);
        assert_eq!(
            "middle".parse::<TextAlign>(),
            Err(CssError::UnknownKeyword { property: "text-align", keyword: "middle".to_string() })
        );
    }
}
