use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);
    pub const STEELBLUE: Self = Self::from_rgb8(70, 130, 180);
    pub const ORANGE: Self = Self::from_rgb8(255, 165, 0);
    pub const GREEN: Self = Self::from_rgb8(0, 128, 0);
    pub const LIGHT_STEELBLUE: Self = Self::from_rgb8(176, 196, 222);
    pub const FIREBRICK: Self = Self::from_rgb8(178, 34, 34);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// `#rrggbb` form; alpha is dropped.
    #[must_use]
    pub fn to_hex(self) -> String {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled circle marker bound to one dataset record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill_color: Color,
    /// Index into the working dataset; drives tooltip content.
    pub record_index: usize,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, fill_color: Color, record_index: usize) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill_color,
            record_index,
        }
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        let dx = x - self.cx;
        let dy = y - self.cy;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// What a text element labels; lets backends and tests tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    TickLabel,
    AxisTitle,
    Annotation,
    Banner,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    /// Clockwise rotation around `(x, y)` in degrees.
    pub rotation_deg: f64,
    pub role: TextRole,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            rotation_deg: 0.0,
            role: TextRole::TickLabel,
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: TextRole) -> Self {
        self.role = role;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotation_deg.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Floating tooltip box; at most one per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipPrimitive {
    pub left: f64,
    pub top: f64,
    pub lines: Vec<String>,
    pub opacity: f64,
    pub font_size_px: f64,
    pub fill_color: Color,
    pub text_color: Color,
}

impl TooltipPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.left.is_finite() || !self.top.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip position must be finite".to_owned(),
            ));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ChartError::InvalidData(
                "tooltip opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.text_color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_render_as_css_hex() {
        assert_eq!(Color::STEELBLUE.to_hex(), "#4682b4");
        assert_eq!(Color::ORANGE.to_hex(), "#ffa500");
        assert_eq!(Color::GREEN.to_hex(), "#008000");
    }

    #[test]
    fn circle_contains_points_within_radius() {
        let circle = CirclePrimitive::new(10.0, 10.0, 5.0, Color::GREEN, 0);
        assert!(circle.contains(13.0, 14.0));
        assert!(!circle.contains(14.0, 14.0));
    }

    #[test]
    fn out_of_range_color_is_rejected() {
        assert!(Color::rgb(1.5, 0.0, 0.0).validate().is_err());
    }
}
