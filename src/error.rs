//! Error types.

/// Errors surfaced by the greeter binary.
///
/// Composing a greeting cannot fail; the only fallible step is writing it out.
#[derive(Debug, thiserror::Error)]
pub enum GreeterError {
    /// Writing to an output stream failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for greeter operations.
pub type Result<T> = std::result::Result<T, GreeterError>;
