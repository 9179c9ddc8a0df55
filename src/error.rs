use thiserror::Error;

/// Errors surfaced by the task repository. Handlers translate these into
/// HTTP responses at the boundary; database detail never reaches the client.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
