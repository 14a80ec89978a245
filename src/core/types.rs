use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Fixed space reserved around the plot area for axes and titles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (value, name) in [
            (self.top, "top"),
            (self.right, "right"),
            (self.bottom, "bottom"),
            (self.left, "left"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(10.0, 10.0, 50.0, 60.0)
    }
}

/// Current canvas dimensions plus margins.
///
/// Only resize handling replaces this value; scales are derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub viewport: Viewport,
    pub margins: Margins,
}

impl ViewportState {
    /// Builds a state whose plot area has a positive extent on both axes.
    pub fn new(viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        let margins = margins.validate()?;
        let state = Self { viewport, margins };
        if !viewport.is_valid() || state.plot_width() <= 0.0 || state.plot_height() <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(state)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        f64::from(self.viewport.width)
    }

    #[must_use]
    pub fn height(self) -> f64 {
        f64::from(self.viewport.height)
    }

    #[must_use]
    pub fn plot_left(self) -> f64 {
        self.margins.left
    }

    #[must_use]
    pub fn plot_right(self) -> f64 {
        self.width() - self.margins.right
    }

    #[must_use]
    pub fn plot_top(self) -> f64 {
        self.margins.top
    }

    #[must_use]
    pub fn plot_bottom(self) -> f64 {
        self.height() - self.margins.bottom
    }

    #[must_use]
    pub fn plot_width(self) -> f64 {
        self.plot_right() - self.plot_left()
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.plot_bottom() - self.plot_top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_margins_leave_plot_area() {
        let state = ViewportState::new(Viewport::new(800, 600), Margins::default()).expect("state");
        assert_eq!(state.plot_left(), 60.0);
        assert_eq!(state.plot_right(), 790.0);
        assert_eq!(state.plot_top(), 10.0);
        assert_eq!(state.plot_bottom(), 550.0);
    }

    #[test]
    fn margins_consuming_canvas_are_rejected() {
        let err = ViewportState::new(Viewport::new(60, 600), Margins::default())
            .expect_err("no horizontal room");
        assert!(matches!(err, ChartError::InvalidViewport { width: 60, .. }));
    }

    #[test]
    fn negative_margin_is_rejected() {
        let margins = Margins::new(-1.0, 0.0, 0.0, 0.0);
        assert!(ViewportState::new(Viewport::new(100, 100), margins).is_err());
    }
}
