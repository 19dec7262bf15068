//! Cursor over a private, rearranged copy of the container's elements.

use super::{out_of_bounds, Arrangement, Ascending, Descending, MiddleOut, OrderCursor, Reverse, SideCross};
use crate::ContainerError;
use std::{fmt, marker::PhantomData, rc::Rc};

/// Cursor that copies the elements once on construction, permutes them with the
/// [Arrangement] `S` and walks the copy. Mutating the container afterwards has no
/// effect on the cursor.
///
/// Equality compares the position only, not the underlying sequence: two snapshot cursors
/// of the same ordering at the same position are equal even when they were built from
/// different containers.
pub struct SnapshotIterator<T, S> {
    /// Rearranged copy. Shared between clones of the cursor, never mutated.
    elements: Rc<[T]>,
    position: usize,
    arrangement: PhantomData<S>,
}

pub type AscendingOrderIterator<T = i32> = SnapshotIterator<T, Ascending>;
pub type DescendingOrderIterator<T = i32> = SnapshotIterator<T, Descending>;
pub type ReverseOrderIterator<T = i32> = SnapshotIterator<T, Reverse>;
pub type SideCrossOrderIterator<T = i32> = SnapshotIterator<T, SideCross>;
pub type MiddleOutOrderIterator<T = i32> = SnapshotIterator<T, MiddleOut>;

impl<T, S> SnapshotIterator<T, S>
where
    T: Ord + Clone,
    S: Arrangement,
{
    /// Copies and arranges `source`, positioned on the first element.
    pub(crate) fn begin(source: &[T]) -> Self {
        Self::build(source, false)
    }

    /// Copies and arranges `source`, positioned past the last element (already exhausted).
    pub(crate) fn end(source: &[T]) -> Self {
        Self::build(source, true)
    }

    fn build(source: &[T], at_end: bool) -> Self {
        let elements: Rc<[T]> = S::arrange(source.to_vec()).into();
        tracing::trace!(order = ?S::ORDER, len = elements.len(), at_end, "built snapshot");
        let position = if at_end { elements.len() } else { 0 };
        SnapshotIterator {
            elements,
            position,
            arrangement: PhantomData,
        }
    }
}

impl<T, S> SnapshotIterator<T, S> {
    /// The whole arranged sequence, independent of the position.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }
}

impl<T, S> OrderCursor for SnapshotIterator<T, S> {
    type Element = T;
    type Ref<'r> = &'r T where Self: 'r;

    fn cursor(&self) -> usize {
        self.position
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn current(&self) -> Result<Self::Ref<'_>, ContainerError> {
        self.elements
            .get(self.position)
            .ok_or_else(|| out_of_bounds(self.position, self.elements.len()))
    }

    fn advance(&mut self) -> Result<&mut Self, ContainerError> {
        if self.position >= self.elements.len() {
            return Err(out_of_bounds(self.position, self.elements.len()));
        }
        self.position += 1;
        Ok(self)
    }
}

impl<T, S> Iterator for SnapshotIterator<T, S>
where
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.elements.get(self.position)?.clone();
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T, S> Clone for SnapshotIterator<T, S> {
    fn clone(&self) -> Self {
        SnapshotIterator {
            elements: Rc::clone(&self.elements),
            position: self.position,
            arrangement: PhantomData,
        }
    }
}

impl<T, S> PartialEq for SnapshotIterator<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T, S> Eq for SnapshotIterator<T, S> {}

impl<T, S> fmt::Debug for SnapshotIterator<T, S>
where
    T: fmt::Debug,
    S: Arrangement,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotIterator")
            .field("order", &S::ORDER)
            .field("position", &self.position)
            .field("elements", &self.elements)
            .finish()
    }
}
