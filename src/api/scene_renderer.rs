use tracing::trace;

use crate::core::{ChartScales, Dataset, ViewportState};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive, TextRole,
};
use crate::scene::SceneDefinition;

use super::axis_ticks::axis_ticks;

pub const HORSEPOWER_AXIS_TITLE: &str = "Horsepower";
pub const MPG_AXIS_TITLE: &str = "Miles per Gallon";

const AXIS_STROKE_WIDTH_PX: f64 = 1.0;
const TICK_SIZE_PX: f64 = 6.0;
const TICK_LABEL_GAP_PX: f64 = 3.0;
const AXIS_TITLE_FONT_SIZE_PX: f64 = 12.0;
const AXIS_TITLE_EDGE_INSET_PX: f64 = 10.0;

/// Sizes used when turning a scene into primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneRenderStyle {
    pub marker_radius_px: f64,
    pub annotation_font_size_px: f64,
    pub tick_font_size_px: f64,
    pub axis_color: Color,
    pub annotation_color: Color,
}

impl Default for SceneRenderStyle {
    fn default() -> Self {
        Self {
            marker_radius_px: 5.0,
            annotation_font_size_px: 12.0,
            tick_font_size_px: 10.0,
            axis_color: Color::BLACK,
            annotation_color: Color::BLACK,
        }
    }
}

/// Builds the complete frame for one scene.
///
/// The frame starts empty, so nothing from a previously shown scene can leak
/// into it. Annotation anchors go through the same data-space scales as the
/// markers.
#[must_use]
pub fn build_scene_frame(
    scene: &SceneDefinition,
    dataset: &Dataset,
    scales: ChartScales,
    state: ViewportState,
    style: SceneRenderStyle,
) -> RenderFrame {
    let mut frame = RenderFrame::new(state.viewport);

    push_bottom_axis(&mut frame, scales, state, style);
    push_left_axis(&mut frame, scales, state, style);
    push_axis_titles(&mut frame, state, style);

    for record_index in scene.visible_indices(dataset.records()) {
        let record = &dataset.records()[record_index];
        let (cx, cy) = scales.project(record.horsepower, record.miles_per_gallon);
        frame.circles.push(CirclePrimitive::new(
            cx,
            cy,
            style.marker_radius_px,
            scene.color,
            record_index,
        ));
    }

    for annotation in &scene.annotations {
        let (x, y) = scales.project(annotation.x, annotation.y);
        frame.texts.push(
            TextPrimitive::new(
                annotation.text.as_str(),
                x,
                y,
                style.annotation_font_size_px,
                style.annotation_color,
                TextHAlign::Left,
            )
            .with_role(TextRole::Annotation),
        );
    }

    trace!(
        scene = scene.kind.label(),
        markers = frame.circles.len(),
        annotations = scene.annotations.len(),
        "scene frame built"
    );
    frame
}

fn push_bottom_axis(
    frame: &mut RenderFrame,
    scales: ChartScales,
    state: ViewportState,
    style: SceneRenderStyle,
) {
    let axis_y = state.plot_bottom();
    let (range_start, range_end) = scales.x.range();
    frame.lines.push(LinePrimitive::new(
        range_start,
        axis_y,
        range_end,
        axis_y,
        AXIS_STROKE_WIDTH_PX,
        style.axis_color,
    ));

    let label_y = axis_y + TICK_SIZE_PX + TICK_LABEL_GAP_PX + style.tick_font_size_px * 0.71;
    for tick in axis_ticks(scales.x) {
        let x = scales.x.map(tick.value);
        frame.lines.push(LinePrimitive::new(
            x,
            axis_y,
            x,
            axis_y + TICK_SIZE_PX,
            AXIS_STROKE_WIDTH_PX,
            style.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            tick.label,
            x,
            label_y,
            style.tick_font_size_px,
            style.axis_color,
            TextHAlign::Center,
        ));
    }
}

fn push_left_axis(
    frame: &mut RenderFrame,
    scales: ChartScales,
    state: ViewportState,
    style: SceneRenderStyle,
) {
    let axis_x = state.plot_left();
    let (range_start, range_end) = scales.y.range();
    frame.lines.push(LinePrimitive::new(
        axis_x,
        range_start,
        axis_x,
        range_end,
        AXIS_STROKE_WIDTH_PX,
        style.axis_color,
    ));

    let label_x = axis_x - TICK_SIZE_PX - TICK_LABEL_GAP_PX;
    for tick in axis_ticks(scales.y) {
        let y = scales.y.map(tick.value);
        frame.lines.push(LinePrimitive::new(
            axis_x - TICK_SIZE_PX,
            y,
            axis_x,
            y,
            AXIS_STROKE_WIDTH_PX,
            style.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            tick.label,
            label_x,
            y + style.tick_font_size_px * 0.32,
            style.tick_font_size_px,
            style.axis_color,
            TextHAlign::Right,
        ));
    }
}

// Titles are drawn for every viewport size, fixed or resized.
fn push_axis_titles(frame: &mut RenderFrame, state: ViewportState, style: SceneRenderStyle) {
    frame.texts.push(
        TextPrimitive::new(
            HORSEPOWER_AXIS_TITLE,
            state.plot_left() + state.plot_width() / 2.0,
            state.height() - AXIS_TITLE_EDGE_INSET_PX,
            AXIS_TITLE_FONT_SIZE_PX,
            style.axis_color,
            TextHAlign::Center,
        )
        .with_role(TextRole::AxisTitle),
    );
    frame.texts.push(
        TextPrimitive::new(
            MPG_AXIS_TITLE,
            AXIS_TITLE_EDGE_INSET_PX + AXIS_TITLE_FONT_SIZE_PX,
            state.plot_top() + state.plot_height() / 2.0,
            AXIS_TITLE_FONT_SIZE_PX,
            style.axis_color,
            TextHAlign::Center,
        )
        .with_rotation(-90.0)
        .with_role(TextRole::AxisTitle),
    );
}
