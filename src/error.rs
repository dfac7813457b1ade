pub use masterror::{AppError, AppResult};

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create file write error
pub fn file_write_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to write file '{}': {}", path, source))
}

/// Create mapping document parse error
pub fn mapping_parse_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(format!("Mapping parse error:\n  {}", message.into()))
}

/// Create error for a fuzzy threshold outside the valid range
pub fn invalid_threshold(value: f64) -> AppError {
    AppError::bad_request(format!(
        "Invalid fuzzy similarity threshold {}: must be within 0.0..=1.0",
        value
    ))
}

/// Create error for a missing fuzzy threshold
pub fn missing_threshold() -> AppError {
    AppError::bad_request(
        "Fuzzy similarity threshold required (use --threshold or set it in the config file)"
            .to_string()
    )
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}
