use thiserror::Error;

/// Errors that can occur while loading a roster or building an org chart.
#[derive(Error, Debug)]
pub enum OrgChartError {
    #[error("csv error: {message} (path: {path})")]
    Csv { message: String, path: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("no node with id '{id}'")]
    NotFound { id: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `OrgChartError`.
pub type Result<T> = std::result::Result<T, OrgChartError>;
