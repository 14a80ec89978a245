use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign, TooltipPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
    pub tooltips_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        Ok(Self {
            surface: create_surface(width, height)?,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Replaces the offscreen surface when the frame viewport changed size.
    fn ensure_surface_matches(&mut self, viewport: Viewport) -> ChartResult<()> {
        let to_i32 = |value: u32| {
            i32::try_from(value).map_err(|_| ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            })
        };
        let (width, height) = (to_i32(viewport.width)?, to_i32(viewport.height)?);
        if self.surface.width() == width && self.surface.height() == height {
            return Ok(());
        }
        self.surface = create_surface(width, height)?;
        Ok(())
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for circle in &frame.circles {
            context.new_sub_path();
            context.arc(circle.cx, circle.cy, circle.radius, 0.0, 2.0 * PI);
            apply_color(context, circle.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill marker", err))?;
            stats.circles_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            layout.set_font_description(Some(&font(text.font_size_px)));
            layout.set_text(&text.text);

            let (text_width, text_height) = layout.pixel_size();
            let dx = match text.h_align {
                TextHAlign::Left => 0.0,
                TextHAlign::Center => -f64::from(text_width) / 2.0,
                TextHAlign::Right => -f64::from(text_width),
            };

            context
                .save()
                .map_err(|err| map_backend_error("failed to save context", err))?;
            context.translate(text.x, text.y);
            context.rotate(text.rotation_deg.to_radians());
            apply_color(context, text.color);
            // Frame text positions are baselines; pango lays out from the top.
            context.move_to(dx, -f64::from(text_height));
            pangocairo::functions::show_layout(context, &layout);
            context
                .restore()
                .map_err(|err| map_backend_error("failed to restore context", err))?;
            stats.texts_drawn += 1;
        }

        if let Some(tooltip) = &frame.tooltip {
            draw_tooltip(context, tooltip)?;
            stats.tooltips_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.ensure_surface_matches(frame.viewport)?;
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn create_surface(width: i32, height: i32) -> ChartResult<ImageSurface> {
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn draw_tooltip(context: &Context, tooltip: &TooltipPrimitive) -> ChartResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    layout.set_font_description(Some(&font(tooltip.font_size_px)));
    layout.set_text(&tooltip.lines.join("\n"));
    let (text_width, text_height) = layout.pixel_size();

    let padding = 4.0;
    let width = f64::from(text_width) + 2.0 * padding;
    let height = f64::from(text_height) + 2.0 * padding;
    append_rounded_rect(context, tooltip.left, tooltip.top, width, height, 8.0);
    apply_color_with_opacity(context, tooltip.fill_color, tooltip.opacity);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill tooltip", err))?;

    apply_color_with_opacity(context, tooltip.text_color, tooltip.opacity);
    context.move_to(tooltip.left + padding, tooltip.top + padding);
    pangocairo::functions::show_layout(context, &layout);
    Ok(())
}

fn font(size_px: f64) -> FontDescription {
    FontDescription::from_string(&format!("Sans {size_px}"))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn apply_color_with_opacity(context: &Context, color: Color, opacity: f64) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha * opacity);
}

fn append_rounded_rect(context: &Context, x: f64, y: f64, width: f64, height: f64, radius: f64) {
    let radius = radius.min(width * 0.5).min(height * 0.5);
    let right = x + width;
    let bottom = y + height;

    context.new_sub_path();
    context.arc(right - radius, y + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(x + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(x + radius, y + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
