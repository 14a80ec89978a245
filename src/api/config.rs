use serde::{Deserialize, Serialize};

use crate::core::{Margins, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipConfig;

/// Public chart bootstrap configuration.
///
/// This type is serializable so hosts can keep chart setup in a JSON file
/// instead of inventing their own format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_marker_radius_px")]
    pub marker_radius_px: f64,
    #[serde(default = "default_annotation_font_size_px")]
    pub annotation_font_size_px: f64,
    #[serde(default = "default_tick_font_size_px")]
    pub tick_font_size_px: f64,
    #[serde(default)]
    pub tooltip: TooltipConfig,
}

impl Default for SceneChartConfig {
    fn default() -> Self {
        Self::new(Viewport::new(800, 600))
    }
}

impl SceneChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            marker_radius_px: default_marker_radius_px(),
            annotation_font_size_px: default_annotation_font_size_px(),
            tick_font_size_px: default_tick_font_size_px(),
            tooltip: TooltipConfig::default(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_marker_radius(mut self, marker_radius_px: f64) -> Self {
        self.marker_radius_px = marker_radius_px;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipConfig) -> Self {
        self.tooltip = tooltip;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.margins.validate()?;
        for (value, name) in [
            (self.marker_radius_px, "marker_radius_px"),
            (self.annotation_font_size_px, "annotation_font_size_px"),
            (self.tick_font_size_px, "tick_font_size_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "chart config `{name}` must be finite and > 0"
                )));
            }
        }
        for (value, name) in [
            (self.tooltip.fade_in_ms, "tooltip.fade_in_ms"),
            (self.tooltip.fade_out_ms, "tooltip.fade_out_ms"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "chart config `{name}` must be finite and >= 0"
                )));
            }
        }
        for (value, name) in [
            (self.tooltip.offset_x_px, "tooltip.offset_x_px"),
            (self.tooltip.offset_y_px, "tooltip.offset_y_px"),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "chart config `{name}` must be finite"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.tooltip.visible_opacity) {
            return Err(ChartError::InvalidData(
                "chart config `tooltip.visible_opacity` must be in [0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_marker_radius_px() -> f64 {
    5.0
}

fn default_annotation_font_size_px() -> f64 {
    12.0
}

fn default_tick_font_size_px() -> f64 {
    10.0
}
