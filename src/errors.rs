//! Provides the error type used throughout this crate.

use thiserror::Error;

/// Errors raised by the container and its cursors. Failed operations
/// never modify the container or the cursor they were called on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    /// Raised by [`remove_all`](crate::OrderedContainer::remove_all) when the container
    /// is empty or no element equals the requested value.
    #[error("Element not found in container")]
    NotFound,
    /// Raised when a cursor is dereferenced or advanced at or past the end of its sequence.
    #[error("Cursor position {index} is out of bounds for a sequence of length {len}")]
    OutOfBounds { index: usize, len: usize },
}
