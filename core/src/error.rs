use thiserror::Error;

/// Result type for stackview operations
pub type Result<T> = std::result::Result<T, StackError>;

/// Error types for stackview operations
///
/// Every registry operation is total over well-formed inputs: unknown-key
/// lookups return `None` and empty display sets build trivially, so the
/// taxonomy stays small.
#[derive(Error, Debug)]
pub enum StackError {
    /// An argument that must be invocable was not
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
