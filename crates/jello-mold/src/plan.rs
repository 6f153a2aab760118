//! Mold Planning
//!
//! Every measurement is parsed and every style value computed here, before
//! the DOM is touched. A bad configuration therefore never leaves a
//! half-built mold behind.

use jello_css::{LengthUnit, Measure, PropertyId, TextAlign, format_number};

use crate::{BuildError, ConfigError, MoldConfig};

/// Inline declarations for one wrapper, in write order
pub type Declarations = Vec<(PropertyId, String)>;

/// Computed mold layout
#[derive(Debug, Clone, PartialEq)]
pub struct MoldPlan {
    pub align: TextAlign,
    /// Parsed minimum width; its unit is the unit of the whole mold
    pub min_width: Measure,
    /// Present when a maximum width was configured
    pub sizer: Option<SizerPlan>,
}

/// Computed sizer wrapper
#[derive(Debug, Clone, PartialEq)]
pub struct SizerPlan {
    pub max_width: Measure,
    pub outer_width: Measure,
    /// `max - min`, the sizer's max-width
    pub cap: Measure,
    /// `floor(100 * (max - min) / (outer - min))`
    pub width_percent: i64,
    /// `auto` when centered, `0` otherwise
    pub horizontal_margin: &'static str,
    /// IE `expression()` replacing the percentage width
    pub legacy_expression: Option<String>,
}

impl MoldPlan {
    /// Parse and validate `config`
    pub fn compute(config: &MoldConfig) -> Result<Self, BuildError> {
        let min_width = config.min_width.to_measure()?;

        let sizer = match (&config.max_width, config.effective_outer_width()) {
            (Some(max), Some(outer)) => Some(SizerPlan::compute(
                config,
                min_width,
                max.to_measure()?,
                outer.to_measure()?,
            )?),
            _ => None,
        };

        tracing::debug!(
            "Planned mold: min-width {}, sizer {:?}",
            min_width,
            sizer.as_ref().map(|s| s.width_percent)
        );

        Ok(Self { align: config.align, min_width, sizer })
    }

    /// Shared unit of all measurements
    pub fn unit(&self) -> LengthUnit {
        self.min_width.unit
    }

    /// `min / 2`, the container's side padding
    pub fn half_min(&self) -> Measure {
        self.min_width.with_value(self.min_width.value / 2.0)
    }

    /// `-min / 2`, the expander's side margins
    pub fn negative_half_min(&self) -> Measure {
        self.min_width.with_value(-self.min_width.value / 2.0)
    }

    pub fn container_declarations(&self) -> Declarations {
        let half = self.half_min().to_string();
        vec![
            (PropertyId::PaddingTop, "0".to_string()),
            (PropertyId::PaddingBottom, "0".to_string()),
            (PropertyId::PaddingLeft, half.clone()),
            (PropertyId::PaddingRight, half),
            (PropertyId::Zoom, "1".to_string()),
            (PropertyId::TextAlign, self.align.to_string()),
        ]
    }

    pub fn sizer_declarations(&self) -> Option<Declarations> {
        self.sizer.as_ref().map(SizerPlan::declarations)
    }

    pub fn expander_declarations(&self) -> Declarations {
        let margin = self.negative_half_min().to_string();
        vec![
            (PropertyId::Position, "relative".to_string()),
            (PropertyId::Zoom, "1".to_string()),
            (PropertyId::MarginTop, "0".to_string()),
            (PropertyId::MarginBottom, "0".to_string()),
            (PropertyId::MarginLeft, margin.clone()),
            (PropertyId::MarginRight, margin),
            (PropertyId::MinWidth, self.min_width.to_string()),
            (PropertyId::TextAlign, TextAlign::Left.to_string()),
        ]
    }

    pub fn fixer_declarations(&self) -> Declarations {
        vec![(PropertyId::Width, "100%".to_string())]
    }
}

impl SizerPlan {
    fn compute(
        config: &MoldConfig,
        min: Measure,
        max: Measure,
        outer: Measure,
    ) -> Result<Self, ConfigError> {
        if min.unit != max.unit || max.unit != outer.unit {
            return Err(ConfigError::InconsistentUnits {
                min: min.unit,
                max: max.unit,
                outer: outer.unit,
            });
        }

        let ratio = (100.0 * (max.value - min.value) / (outer.value - min.value)).floor();
        if !ratio.is_finite() {
            return Err(ConfigError::DegenerateOuterWidth { min, outer });
        }
        // `as i64` would saturate; 2^63 is the first value out of range
        if ratio < i64::MIN as f64 || ratio >= i64::MAX as f64 {
            return Err(ConfigError::WidthPercentOutOfRange { min, max, outer });
        }

        let horizontal_margin = if config.align == TextAlign::Center { "auto" } else { "0" };

        let cap = max.with_value(max.value - min.value);
        let legacy_expression = (config.legacy_pixel_expression_fallback
            && min.unit == LengthUnit::Px)
            .then(|| {
                format!(
                    "expression(document.body.clientWidth > {} ? {}: \"100%\")",
                    format_number(outer.value),
                    cap
                )
            });

        Ok(Self {
            max_width: max,
            outer_width: outer,
            cap,
            width_percent: ratio as i64,
            horizontal_margin,
            legacy_expression,
        })
    }

    /// Value written to the sizer's `width`
    pub fn width(&self) -> String {
        match &self.legacy_expression {
            Some(expression) => expression.clone(),
            None => format!("{}%", self.width_percent),
        }
    }

    fn declarations(&self) -> Declarations {
        vec![
            (PropertyId::Width, self.width()),
            (PropertyId::MarginTop, "0".to_string()),
            (PropertyId::MarginBottom, "0".to_string()),
            (PropertyId::MarginLeft, self.horizontal_margin.to_string()),
            (PropertyId::MarginRight, self.horizontal_margin.to_string()),
            (PropertyId::TextAlign, TextAlign::Left.to_string()),
            (PropertyId::MaxWidth, self.cap.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(decls: &Declarations, property: PropertyId) -> Option<&str> {
        decls.iter().find(|(p, _)| *p == property).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_plan_without_max_width() {
        let plan = MoldPlan::compute(&MoldConfig::default()).unwrap();
        assert_eq!(plan.min_width, Measure::px(320.0));
        assert_eq!(plan.half_min().to_string(), "160px");
        assert_eq!(plan.negative_half_min().to_string(), "-160px");
        assert!(plan.sizer.is_none());
        assert!(plan.sizer_declarations().is_none());
    }

    #[test]
    fn test_sizer_percentage() {
        let config = MoldConfig::new().min_width("320px").max_width("640px").outer_width("960px");
        let sizer = MoldPlan::compute(&config).unwrap().sizer.unwrap();
        assert_eq!(sizer.width_percent, 50);
        assert_eq!(sizer.cap, Measure::px(320.0));
        assert_eq!(sizer.width(), "50%");
        assert_eq!(sizer.horizontal_margin, "auto");
    }

    #[test]
    fn test_percentage_floors() {
        let config = MoldConfig::new().min_width(300).max_width(500).outer_width(1000);
        let sizer = MoldPlan::compute(&config).unwrap().sizer.unwrap();
        // 100 * 200 / 700 = 28.57
        assert_eq!(sizer.width_percent, 28);
    }

    #[test]
    fn test_negative_percentage_floors() {
        // max below min: 100 * -120 / 640 = -18.75
        let config = MoldConfig::new().min_width(320).max_width(200).outer_width(960);
        let sizer = MoldPlan::compute(&config).unwrap().sizer.unwrap();
        assert_eq!(sizer.width_percent, -19);
        assert_eq!(sizer.width(), "-19%");
        assert_eq!(sizer.cap, Measure::px(-120.0));
    }

    #[test]
    fn test_percentage_out_of_range() {
        let config = MoldConfig::new().min_width(0).max_width(1e200).outer_width(1e-100);
        let err = MoldPlan::compute(&config).unwrap_err();
        assert!(matches!(err, BuildError::Config(ConfigError::WidthPercentOutOfRange { .. })));

        let config = MoldConfig::new().min_width(0).max_width(-1e200).outer_width(1e-100);
        assert!(MoldPlan::compute(&config).unwrap_err().is_config());
    }

    #[test]
    fn test_outer_defaults_to_max() {
        let config = MoldConfig::new().min_width("32em").max_width("64em");
        let sizer = MoldPlan::compute(&config).unwrap().sizer.unwrap();
        assert_eq!(sizer.outer_width, Measure::em(64.0));
        assert_eq!(sizer.width_percent, 100);
        assert_eq!(sizer.cap.to_string(), "32em");
    }

    #[test]
    fn test_degenerate_outer_width() {
        let config = MoldConfig::new().min_width("320px").max_width("640px").outer_width("320px");
        let err = MoldPlan::compute(&config).unwrap_err();
        assert!(matches!(err, BuildError::Config(ConfigError::DegenerateOuterWidth { .. })));

        let config = MoldConfig::new().min_width(320).max_width(320);
        assert!(MoldPlan::compute(&config).unwrap_err().is_config());
    }

    #[test]
    fn test_unit_mismatch() {
        let config = MoldConfig::new().min_width("10em").max_width("20px");
        let err = MoldPlan::compute(&config).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Config(ConfigError::InconsistentUnits {
                min: LengthUnit::Em,
                max: LengthUnit::Px,
                outer: LengthUnit::Px,
            })
        ));

        let config = MoldConfig::new().min_width("10em").max_width("20em").outer_width("30px");
        assert!(MoldPlan::compute(&config).unwrap_err().is_config());
    }

    #[test]
    fn test_parse_errors() {
        assert!(MoldPlan::compute(&MoldConfig::new().min_width("wide")).unwrap_err().is_parse());
        let config = MoldConfig::new().max_width("100px").outer_width("big");
        assert!(MoldPlan::compute(&config).unwrap_err().is_parse());
    }

    #[test]
    fn test_side_alignment_margins() {
        for align in [TextAlign::Left, TextAlign::Right, TextAlign::Justify] {
            let config = MoldConfig::new().align(align).max_width(640).outer_width(960);
            let plan = MoldPlan::compute(&config).unwrap();
            let decls = plan.sizer_declarations().unwrap();
            assert_eq!(value(&decls, PropertyId::MarginLeft), Some("0"));
            assert_eq!(value(&decls, PropertyId::MarginRight), Some("0"));
            assert_eq!(value(&plan.container_declarations(), PropertyId::TextAlign), Some(align.as_str()));
        }
    }

    #[test]
    fn test_legacy_expression_only_for_pixels() {
        let config = MoldConfig::new()
            .max_width("640px")
            .outer_width("960px")
            .legacy_pixel_expression_fallback(true);
        let sizer = MoldPlan::compute(&config).unwrap().sizer.unwrap();
        assert_eq!(
            sizer.width(),
            r#"expression(document.body.clientWidth > 960 ? 320px: "100%")"#
        );

        let config = MoldConfig::new()
            .min_width("20em")
            .max_width("40em")
            .legacy_pixel_expression_fallback(true);
        let sizer = MoldPlan::compute(&config).unwrap().sizer.unwrap();
        assert_eq!(sizer.legacy_expression, None);
        assert_eq!(sizer.width(), "100%");
    }

    #[test]
    fn test_expander_declarations() {
        let plan = MoldPlan::compute(&MoldConfig::new().min_width("33em")).unwrap();
        let decls = plan.expander_declarations();
        assert_eq!(value(&decls, PropertyId::MarginLeft), Some("-16.5em"));
        assert_eq!(value(&decls, PropertyId::MinWidth), Some("33em"));
        assert_eq!(value(&decls, PropertyId::Position), Some("relative"));
        assert_eq!(plan.fixer_declarations(), vec![(PropertyId::Width, "100%".to_string())]);
    }
}
