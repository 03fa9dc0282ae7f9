use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid view mode: {0:?}")]
    InvalidMode(String),
}

/// Failure of the markdown transform. Never escapes the render pipeline;
/// its message is shown inline in place of the preview.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("{0}")]
    Parse(String),

    #[error("parser panicked: {0}")]
    Panicked(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::InvalidMode("gallery".to_string());
        assert_eq!(err.to_string(), "Invalid view mode: \"gallery\"");
    }

    #[test]
    fn test_render_error_display() {
        let err = RenderError::Parse("unexpected token".to_string());
        assert_eq!(err.to_string(), "unexpected token");

        let err = RenderError::Panicked("index out of bounds".to_string());
        assert_eq!(err.to_string(), "parser panicked: index out of bounds");
    }
}
