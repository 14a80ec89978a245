use tracing::{debug, trace, warn};

use crate::core::{ChartScales, Viewport, ViewportState};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipState;
use crate::render::Renderer;

use super::SceneChart;

impl<R: Renderer> SceneChart<R> {
    /// Handles the "next scene" action.
    ///
    /// The index wraps after the last scene. Scales are reused as-is; only a
    /// resize rebuilds them.
    pub fn advance_scene(&mut self) -> ChartResult<usize> {
        let previous = self.session.current_scene_index();
        let next = self.session.advance();
        debug!(
            from = previous,
            to = next,
            scene = self.current_scene().kind.label(),
            "advance scene"
        );
        self.discard_overlay();
        self.redraw_scene()?;
        Ok(next)
    }

    /// Jumps straight to scene `index`.
    pub fn set_scene(&mut self, index: usize) -> ChartResult<()> {
        if let Err(err) = self.catalog.scene(index) {
            warn!(index, "rejected scene selection");
            return Err(err);
        }
        self.session.set_scene_index(index);
        debug!(index, "set scene");
        self.discard_overlay();
        self.redraw_scene()
    }

    /// Handles a canvas size change.
    ///
    /// The current scene index is kept; scales are rebuilt from the unchanged
    /// dataset domain and the new plot area. On error nothing changes.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        let viewport_state = match ViewportState::new(viewport, self.config.margins) {
            Ok(state) => state,
            Err(err) => {
                warn!(
                    width = viewport.width,
                    height = viewport.height,
                    "rejected resize"
                );
                return Err(err);
            }
        };
        let scales = ChartScales::build(self.dataset.domain(), viewport_state)?;

        debug!(
            width = viewport.width,
            height = viewport.height,
            scene = self.current_scene_index(),
            "resize"
        );
        self.viewport_state = viewport_state;
        self.config.viewport = viewport;
        self.scales = scales;
        self.discard_overlay();
        self.redraw_scene()
    }

    /// Pointer moved over the canvas; drives marker hover tooltips.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(
                "pointer position must be finite".to_owned(),
            ));
        }
        let hit = self.frame.marker_at(x, y).map(|marker| marker.record_index);
        if hit == self.hovered_record {
            return Ok(());
        }

        match hit {
            Some(record_index) => {
                trace!(record_index, "marker pointer enter");
                self.tooltip.show(record_index, x, y);
            }
            None => {
                trace!("marker pointer leave");
                self.tooltip.hide();
            }
        }
        self.hovered_record = hit;
        self.present()
    }

    /// Pointer left the canvas.
    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        if self.hovered_record.take().is_some() {
            self.tooltip.hide();
        }
        self.present()
    }

    /// Advances the tooltip fade by `delta_ms`.
    ///
    /// Returns `true` while a fade is still running so hosts know whether to
    /// keep ticking.
    pub fn step_tooltip(&mut self, delta_ms: f64) -> ChartResult<bool> {
        if !delta_ms.is_finite() || delta_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "tooltip step must be finite and >= 0".to_owned(),
            ));
        }
        if !self.tooltip.is_fading() {
            return Ok(false);
        }
        self.tooltip.step(delta_ms);
        self.present()?;
        Ok(self.tooltip.is_fading())
    }

    fn discard_overlay(&mut self) {
        self.tooltip = TooltipState::new(self.config.tooltip);
        self.hovered_record = None;
    }
}
