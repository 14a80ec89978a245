use serde::{Deserialize, Serialize};

use crate::scene::SCENE_COUNT;

/// Session-scoped interaction state owned by the chart controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    current_scene_index: usize,
}

impl SessionState {
    #[must_use]
    pub fn current_scene_index(self) -> usize {
        self.current_scene_index
    }

    /// Moves to the next scene, wrapping after the last one.
    pub fn advance(&mut self) -> usize {
        self.current_scene_index = (self.current_scene_index + 1) % SCENE_COUNT;
        self.current_scene_index
    }

    pub(crate) fn set_scene_index(&mut self, index: usize) {
        self.current_scene_index = index % SCENE_COUNT;
    }
}

/// Tooltip timing and placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    pub fade_in_ms: f64,
    pub fade_out_ms: f64,
    /// Opacity reached once the fade-in completes.
    pub visible_opacity: f64,
    pub offset_x_px: f64,
    pub offset_y_px: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            fade_in_ms: 200.0,
            fade_out_ms: 500.0,
            visible_opacity: 0.9,
            offset_x_px: 5.0,
            offset_y_px: -28.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct OpacityFade {
    from: f64,
    to: f64,
    duration_ms: f64,
    elapsed_ms: f64,
}

impl OpacityFade {
    fn current(self) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }

    fn is_finished(self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

/// The single tooltip overlay of a chart.
///
/// Content stays bound to the last hovered record while fading out, the
/// same way a hidden overlay keeps its last text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipState {
    config: TooltipConfig,
    record_index: Option<usize>,
    left: f64,
    top: f64,
    opacity: f64,
    fade: Option<OpacityFade>,
}

impl TooltipState {
    #[must_use]
    pub fn new(config: TooltipConfig) -> Self {
        Self {
            config,
            record_index: None,
            left: 0.0,
            top: 0.0,
            opacity: 0.0,
            fade: None,
        }
    }

    #[must_use]
    pub fn config(self) -> TooltipConfig {
        self.config
    }

    #[must_use]
    pub fn record_index(self) -> Option<usize> {
        self.record_index
    }

    /// Top-left corner of the overlay in canvas pixels.
    #[must_use]
    pub fn position(self) -> (f64, f64) {
        (self.left, self.top)
    }

    #[must_use]
    pub fn opacity(self) -> f64 {
        self.opacity
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self.record_index.is_some() && self.opacity > 0.0
    }

    #[must_use]
    pub fn is_fading(self) -> bool {
        self.fade.is_some()
    }

    /// Binds the overlay to a record and starts the fade-in.
    pub fn show(&mut self, record_index: usize, pointer_x: f64, pointer_y: f64) {
        self.record_index = Some(record_index);
        self.left = pointer_x + self.config.offset_x_px;
        self.top = pointer_y + self.config.offset_y_px;
        self.start_fade(self.config.visible_opacity, self.config.fade_in_ms);
    }

    /// Starts the fade-out; content is kept until replaced.
    pub fn hide(&mut self) {
        if self.record_index.is_none() {
            return;
        }
        self.start_fade(0.0, self.config.fade_out_ms);
    }

    /// Advances the running fade and returns the resulting opacity.
    pub fn step(&mut self, delta_ms: f64) -> f64 {
        if let Some(fade) = self.fade.as_mut() {
            fade.elapsed_ms += delta_ms.max(0.0);
            self.opacity = fade.current();
            if fade.is_finished() {
                self.fade = None;
            }
        }
        self.opacity
    }

    fn start_fade(&mut self, to: f64, duration_ms: f64) {
        let fade = OpacityFade {
            from: self.opacity,
            to,
            duration_ms,
            elapsed_ms: 0.0,
        };
        if fade.is_finished() {
            self.opacity = to;
            self.fade = None;
        } else {
            self.fade = Some(fade);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_wraps_after_last_scene() {
        let mut session = SessionState::default();
        assert_eq!(session.current_scene_index(), 0);
        assert_eq!(session.advance(), 1);
        assert_eq!(session.advance(), 2);
        assert_eq!(session.advance(), 0);
    }

    #[test]
    fn tooltip_fades_in_then_out() {
        let mut tooltip = TooltipState::new(TooltipConfig::default());
        tooltip.show(3, 100.0, 100.0);
        assert_eq!(tooltip.position(), (105.0, 72.0));
        assert_eq!(tooltip.opacity(), 0.0);

        assert!((tooltip.step(100.0) - 0.45).abs() <= 1e-9);
        assert!((tooltip.step(100.0) - 0.9).abs() <= 1e-9);
        assert!(!tooltip.is_fading());

        tooltip.hide();
        assert!((tooltip.step(250.0) - 0.45).abs() <= 1e-9);
        assert_eq!(tooltip.step(250.0), 0.0);
        assert!(!tooltip.is_visible());
        assert_eq!(tooltip.record_index(), Some(3));
    }

    #[test]
    fn hide_without_content_is_noop() {
        let mut tooltip = TooltipState::new(TooltipConfig::default());
        tooltip.hide();
        assert!(!tooltip.is_fading());
    }

    #[test]
    fn zero_duration_fade_applies_immediately() {
        let config = TooltipConfig {
            fade_in_ms: 0.0,
            ..TooltipConfig::default()
        };
        let mut tooltip = TooltipState::new(config);
        tooltip.show(0, 0.0, 0.0);
        assert_eq!(tooltip.opacity(), 0.9);
    }
}
