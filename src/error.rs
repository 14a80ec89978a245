use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("scene index {index} out of range (catalog holds {count} scenes)")]
    SceneOutOfRange { index: usize, count: usize },

    #[error("failed to load dataset: {0}")]
    DatasetLoad(String),
}
