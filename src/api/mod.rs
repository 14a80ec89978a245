mod axis_ticks;
mod chart;
mod config;
mod interaction_controller;
mod scene_renderer;
mod snapshot;

pub use axis_ticks::{AxisTick, axis_ticks, nice_ticks};
pub use chart::{SceneChart, render_load_failure};
pub use config::SceneChartConfig;
pub use scene_renderer::{
    HORSEPOWER_AXIS_TITLE, MPG_AXIS_TITLE, SceneRenderStyle, build_scene_frame,
};
pub use snapshot::{
    AnnotationSnapshot, MarkerSnapshot, SCENE_SNAPSHOT_JSON_SCHEMA_V1, SceneSnapshot,
    SceneSnapshotJsonContractV1, TooltipSnapshot,
};
