use thiserror::Error;

/// Error type definitions
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Dimension mismatch error: {0}")]
    DimensionMismatch(String),

    #[error("Empty data: {0}")]
    EmptyData(String),

    #[error("Distribution error: {0}")]
    Distribution(String),

    #[error("Unknown test: {0}")]
    UnknownTest(String),

    #[error("Invalid tail code: {0} (expected 1=left, 2=right, 3=two-sided)")]
    InvalidTailCode(i64),

    #[error("Visualization error: {0}")]
    Visualization(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<statrs::distribution::NormalError> for Error {
    fn from(err: statrs::distribution::NormalError) -> Self {
        Error::Distribution(err.to_string())
    }
}

impl From<statrs::distribution::StudentsTError> for Error {
    fn from(err: statrs::distribution::StudentsTError) -> Self {
        Error::Distribution(err.to_string())
    }
}

impl From<statrs::distribution::GammaError> for Error {
    fn from(err: statrs::distribution::GammaError) -> Self {
        Error::Distribution(err.to_string())
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Visualization(format!("PNG encoding error: {}", err))
    }
}

// Conversion for Plotters errors
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for Error
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Error::Visualization(format!("Plot drawing error: {}", err))
    }
}
