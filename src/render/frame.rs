use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, TextHAlign, TextPrimitive, TextRole, TooltipPrimitive,
};

/// Backend-agnostic scene for one chart draw pass.
///
/// A frame is always built from scratch, so drawing one replaces everything
/// the previous frame showed.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub tooltip: Option<TooltipPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
            tooltip: None,
        }
    }

    /// Frame shown in place of the chart when the dataset cannot be loaded.
    #[must_use]
    pub fn error_banner(viewport: Viewport, message: &str) -> Self {
        let center_x = f64::from(viewport.width) / 2.0;
        let center_y = f64::from(viewport.height) / 2.0;
        Self::new(viewport)
            .with_text(
                TextPrimitive::new(
                    "Unable to load dataset",
                    center_x,
                    center_y - 10.0,
                    16.0,
                    Color::FIREBRICK,
                    TextHAlign::Center,
                )
                .with_role(TextRole::Banner),
            )
            .with_text(
                TextPrimitive::new(
                    message,
                    center_x,
                    center_y + 12.0,
                    12.0,
                    Color::BLACK,
                    TextHAlign::Center,
                )
                .with_role(TextRole::Banner),
            )
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    pub fn texts_with_role(&self, role: TextRole) -> impl Iterator<Item = &TextPrimitive> {
        self.texts.iter().filter(move |text| text.role == role)
    }

    /// Topmost marker under `(x, y)`; later markers draw above earlier ones.
    #[must_use]
    pub fn marker_at(&self, x: f64, y: f64) -> Option<&CirclePrimitive> {
        self.circles.iter().rev().find(|circle| circle.contains(x, y))
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        if let Some(tooltip) = &self.tooltip {
            tooltip.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
            && self.tooltip.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_at_prefers_last_drawn() {
        let frame = RenderFrame::new(Viewport::new(100, 100))
            .with_circle(CirclePrimitive::new(10.0, 10.0, 5.0, Color::GREEN, 0))
            .with_circle(CirclePrimitive::new(12.0, 10.0, 5.0, Color::GREEN, 1));
        let hit = frame.marker_at(11.0, 10.0).expect("hit");
        assert_eq!(hit.record_index, 1);
        assert!(frame.marker_at(50.0, 50.0).is_none());
    }

    #[test]
    fn error_banner_is_valid_and_has_no_markers() {
        let frame = RenderFrame::error_banner(Viewport::new(800, 600), "connection refused");
        frame.validate().expect("valid banner");
        assert!(frame.circles.is_empty());
        assert_eq!(frame.texts_with_role(TextRole::Banner).count(), 2);
    }
}
