/// Errors that can occur during conversion I/O.
///
/// Row-level problems are not errors at this level: they are accumulated
/// as messages in [`crate::ConvertStats`] and never abort a run.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
