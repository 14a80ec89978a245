//! car-scenes: a scene-driven scatter plot of car horsepower vs. fuel efficiency.
//!
//! The crate keeps a strict split between the scene model (`scene`), pure
//! data and scale math (`core`), interaction state (`interaction`), frame
//! building and orchestration (`api`), and drawing backends (`render`).

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod scene;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{SceneChart, SceneChartConfig};
pub use error::{ChartError, ChartResult};
