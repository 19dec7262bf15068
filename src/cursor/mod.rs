//! Cursors for the traversal orderings of an [OrderedContainer](crate::OrderedContainer).
//!
//! There are two kinds of cursors:
//!
//! * [InsertionOrderIterator] holds a handle to the *live* container. Elements appended after
//!   its construction become reachable, and its end boundary is the container's current size.
//! * [SnapshotIterator] copies the elements once, rearranges them with an [Arrangement] and
//!   walks that private copy. Later mutations of the container are invisible to it.
//!
//! Both share the state machine of [OrderCursor]: a cursor is *valid* while its position is
//! below the sequence length and *exhausted* once it reaches it. Exhaustion is terminal.

pub mod arrangement;
pub mod insertion;
pub mod snapshot;

pub use arrangement::{Arrangement, Ascending, Descending, MiddleOut, Reverse, SideCross};
pub use insertion::InsertionOrderIterator;
pub use snapshot::{
    AscendingOrderIterator, DescendingOrderIterator, MiddleOutOrderIterator, ReverseOrderIterator,
    SideCrossOrderIterator, SnapshotIterator,
};

use crate::ContainerError;
use std::ops::Deref;

/// Traversal capability shared by all cursors.
///
/// The methods mirror the usual cursor contract: dereference ([OrderCursor::current]), prefix and
/// postfix increment and a position query. Every cursor also implements [Iterator], which
/// yields cloned elements and returns `None` instead of failing once exhausted.
pub trait OrderCursor: Sized {
    type Element;
    /// Guard returned by [OrderCursor::current]. A plain reference for snapshots, a borrow guard
    /// for the live cursor.
    type Ref<'r>: Deref<Target = Self::Element>
    where
        Self: 'r;

    /// Zero-based position of the element produced next.
    fn cursor(&self) -> usize;

    /// Length of the sequence the cursor walks. For the live cursor this is evaluated on every call.
    fn len(&self) -> usize;

    /// Element at the current position. Fails with [ContainerError::OutOfBounds] once exhausted.
    ///
    /// # Panics
    ///
    /// For [InsertionOrderIterator] the returned guard borrows the container's storage, and
    /// appending to or removing from the container while it is alive panics. Drop the guard
    /// (or copy the element out) first. Snapshot cursors return a plain reference into their
    /// own copy and never panic this way.
    fn current(&self) -> Result<Self::Ref<'_>, ContainerError>;

    /// Moves one element forward (prefix increment). Fails with [ContainerError::OutOfBounds]
    /// and leaves the position untouched if the cursor is already exhausted.
    fn advance(&mut self) -> Result<&mut Self, ContainerError>;

    /// Postfix increment: returns a copy of the cursor as it was before advancing.
    fn post_advance(&mut self) -> Result<Self, ContainerError>
    where
        Self: Clone,
    {
        let previous = self.clone();
        self.advance()?;
        Ok(previous)
    }

    fn is_exhausted(&self) -> bool {
        self.cursor() >= self.len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Error for a cursor standing at `index` in a sequence of `len` elements.
pub(crate) fn out_of_bounds(index: usize, len: usize) -> ContainerError {
    tracing::debug!(index, len, "cursor out of bounds");
    ContainerError::OutOfBounds { index, len }
}
