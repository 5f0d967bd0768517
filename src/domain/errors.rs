/// Simplified error system - no over-engineering!
///
/// The simulator itself has no genuine failure modes (no network, no disk);
/// errors only exist at the drawing-surface boundary and for input
/// validation.
#[derive(Debug, Clone)]
pub enum AppError {
    SurfaceError(String),
    ValidationError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::SurfaceError(msg) => write!(f, "Surface Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

pub type SurfaceResult<T> = Result<T, AppError>;
