use thiserror::Error;

/// Top-level error type for Tarefa.
#[derive(Debug, Error)]
pub enum TarefaError {
    /// A backing document could not be read, parsed, or written.
    /// Lower-level I/O and serialization failures are converted to this
    /// variant at the store boundary.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}
