pub mod dataset;
pub mod scale;
pub mod types;

pub use dataset::{CarRecord, DEFAULT_DATASET_URL, DataDomain, Dataset};
pub use scale::{ChartScales, LinearScale};
pub use types::{Margins, Viewport, ViewportState};
