use std::fmt::Write as _;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

const TOOLTIP_PADDING_PX: f64 = 4.0;
const TOOLTIP_LINE_HEIGHT_FACTOR: f64 = 1.25;
const TOOLTIP_CHAR_WIDTH_FACTOR: f64 = 0.6;

/// Renders frames into a standalone SVG document.
///
/// Each render replaces the stored document; nothing from earlier frames
/// is carried over.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    render_count: usize,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    fn write_document(frame: &RenderFrame) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        let width = frame.viewport.width;
        let height = frame.viewport.height;
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#)?;

        for line in &frame.lines {
            writeln!(
                out,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"{}/>"#,
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                line.color.to_hex(),
                line.stroke_width,
                opacity_attr("stroke-opacity", line.color),
            )?;
        }

        for circle in &frame.circles {
            writeln!(
                out,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}"{}/>"#,
                circle.cx,
                circle.cy,
                circle.radius,
                circle.fill_color.to_hex(),
                opacity_attr("fill-opacity", circle.fill_color),
            )?;
        }

        for text in &frame.texts {
            let transform = if text.rotation_deg == 0.0 {
                String::new()
            } else {
                format!(
                    r#" transform="rotate({} {:.2} {:.2})""#,
                    text.rotation_deg, text.x, text.y
                )
            };
            writeln!(
                out,
                r#"<text x="{:.2}" y="{:.2}" font-size="{}px" font-family="sans-serif" fill="{}" text-anchor="{}"{}>{}</text>"#,
                text.x,
                text.y,
                text.font_size_px,
                text.color.to_hex(),
                text_anchor(text.h_align),
                transform,
                escape_text(&text.text),
            )?;
        }

        if let Some(tooltip) = &frame.tooltip {
            let line_height = tooltip.font_size_px * TOOLTIP_LINE_HEIGHT_FACTOR;
            let longest = tooltip
                .lines
                .iter()
                .map(|line| line.chars().count())
                .max()
                .unwrap_or(0);
            let box_width =
                longest as f64 * tooltip.font_size_px * TOOLTIP_CHAR_WIDTH_FACTOR + 2.0 * TOOLTIP_PADDING_PX;
            let box_height = tooltip.lines.len() as f64 * line_height + 2.0 * TOOLTIP_PADDING_PX;
            writeln!(
                out,
                r#"<g class="tooltip" opacity="{:.3}">"#,
                tooltip.opacity
            )?;
            writeln!(
                out,
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="8" fill="{}"/>"#,
                tooltip.left,
                tooltip.top,
                box_width,
                box_height,
                tooltip.fill_color.to_hex(),
            )?;
            for (row, line) in tooltip.lines.iter().enumerate() {
                writeln!(
                    out,
                    r#"<text x="{:.2}" y="{:.2}" font-size="{}px" font-family="sans-serif" fill="{}">{}</text>"#,
                    tooltip.left + TOOLTIP_PADDING_PX,
                    tooltip.top + TOOLTIP_PADDING_PX + (row as f64 + 1.0) * line_height,
                    tooltip.font_size_px,
                    tooltip.text_color.to_hex(),
                    escape_text(line),
                )?;
            }
            writeln!(out, "</g>")?;
        }

        writeln!(out, "</svg>")?;
        Ok(out)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.document = Self::write_document(frame)
            .map_err(|e| ChartError::InvalidData(format!("failed to write svg: {e}")))?;
        self.render_count += 1;
        Ok(())
    }
}

fn text_anchor(align: TextHAlign) -> &'static str {
    match align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    }
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.alpha >= 1.0 {
        String::new()
    } else {
        format!(r#" {name}="{:.3}""#, color.alpha)
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
