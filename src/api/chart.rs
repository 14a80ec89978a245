use tracing::{debug, error};

use crate::core::{ChartScales, Dataset, Viewport, ViewportState};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{SessionState, TooltipState};
use crate::render::{Color, RenderFrame, Renderer, TooltipPrimitive};
use crate::scene::{SceneCatalog, SceneDefinition};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::SceneChartConfig;
use super::scene_renderer::{SceneRenderStyle, build_scene_frame};

const TOOLTIP_FONT_SIZE_PX: f64 = 12.0;

/// Main orchestration facade consumed by host applications.
///
/// `SceneChart` owns the loaded dataset, the scene catalog, the current
/// viewport and scales, session state, and the renderer. It can only be
/// built from an already loaded `Dataset`, so nothing is drawn before the
/// data is available.
pub struct SceneChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: SceneChartConfig,
    pub(super) catalog: SceneCatalog,
    pub(super) dataset: Dataset,
    pub(super) viewport_state: ViewportState,
    pub(super) scales: ChartScales,
    pub(super) session: SessionState,
    pub(super) tooltip: TooltipState,
    pub(super) hovered_record: Option<usize>,
    pub(super) frame: RenderFrame,
}

impl<R: Renderer> std::fmt::Debug for SceneChart<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneChart")
            .field("viewport_state", &self.viewport_state)
            .field("session", &self.session)
            .field("records", &self.dataset.len())
            .field("markers", &self.frame.circles.len())
            .finish_non_exhaustive()
    }
}

impl<R: Renderer> SceneChart<R> {
    /// Builds scales for the initial viewport and renders the first scene.
    pub fn new(renderer: R, config: SceneChartConfig, dataset: Dataset) -> ChartResult<Self> {
        let config = config.validate()?;
        let viewport_state = ViewportState::new(config.viewport, config.margins)?;
        let scales = ChartScales::build(dataset.domain(), viewport_state)?;

        let mut chart = Self {
            renderer,
            config,
            catalog: SceneCatalog::standard(),
            dataset,
            viewport_state,
            scales,
            session: SessionState::default(),
            tooltip: TooltipState::new(config.tooltip),
            hovered_record: None,
            frame: RenderFrame::new(config.viewport),
        };
        debug!(
            records = chart.dataset.len(),
            width = config.viewport.width,
            height = config.viewport.height,
            "scene chart initialized"
        );
        chart.redraw_scene()?;
        Ok(chart)
    }

    #[must_use]
    pub fn config(&self) -> SceneChartConfig {
        self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &SceneCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn viewport_state(&self) -> ViewportState {
        self.viewport_state
    }

    #[must_use]
    pub fn scales(&self) -> ChartScales {
        self.scales
    }

    #[must_use]
    pub fn session(&self) -> SessionState {
        self.session
    }

    #[must_use]
    pub fn current_scene_index(&self) -> usize {
        self.session.current_scene_index()
    }

    #[must_use]
    pub fn current_scene(&self) -> &SceneDefinition {
        self.catalog
            .scene_wrapping(self.session.current_scene_index())
    }

    #[must_use]
    pub fn tooltip_state(&self) -> TooltipState {
        self.tooltip
    }

    /// The frame currently on screen.
    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Re-presents the current frame, e.g. after the host surface was exposed.
    pub fn render(&mut self) -> ChartResult<()> {
        self.present()
    }

    /// Draws the current frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        self.frame.tooltip = self.tooltip_primitive();
        self.renderer.render_on_cairo_context(context, &self.frame)
    }

    pub(super) fn render_style(&self) -> SceneRenderStyle {
        SceneRenderStyle {
            marker_radius_px: self.config.marker_radius_px,
            annotation_font_size_px: self.config.annotation_font_size_px,
            tick_font_size_px: self.config.tick_font_size_px,
            ..SceneRenderStyle::default()
        }
    }

    /// Replaces the whole frame with the current scene and presents it.
    pub(super) fn redraw_scene(&mut self) -> ChartResult<()> {
        let scene = self
            .catalog
            .scene(self.session.current_scene_index())?;
        self.frame = build_scene_frame(
            scene,
            &self.dataset,
            self.scales,
            self.viewport_state,
            self.render_style(),
        );
        self.present()
    }

    /// Attaches the single tooltip overlay to the frame and hands it to the renderer.
    pub(super) fn present(&mut self) -> ChartResult<()> {
        self.frame.tooltip = self.tooltip_primitive();
        self.renderer.render(&self.frame)
    }

    fn tooltip_primitive(&self) -> Option<TooltipPrimitive> {
        if !self.tooltip.is_visible() {
            return None;
        }
        let record = self.dataset.get(self.tooltip.record_index()?)?;
        let (left, top) = self.tooltip.position();
        Some(TooltipPrimitive {
            left,
            top,
            lines: vec![
                format!("Name: {}", record.name),
                format!("Horsepower: {}", record.horsepower),
                format!("MPG: {}", record.miles_per_gallon),
            ],
            opacity: self.tooltip.opacity(),
            font_size_px: TOOLTIP_FONT_SIZE_PX,
            fill_color: Color::LIGHT_STEELBLUE,
            text_color: Color::BLACK,
        })
    }
}

/// Shows an explicit error banner when the dataset could not be loaded.
///
/// Load failures are fatal to the session; this is the only frame a host
/// draws in that case.
pub fn render_load_failure<R: Renderer>(
    renderer: &mut R,
    viewport: Viewport,
    err: &ChartError,
) -> ChartResult<()> {
    error!(error = %err, "dataset load failed");
    renderer.render(&RenderFrame::error_banner(viewport, &err.to_string()))
}
