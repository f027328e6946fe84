use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid scope size: width={width}, height={height}")]
    InvalidScope { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
