//! Live cursor walking the container in insertion order.

use super::{out_of_bounds, OrderCursor};
use crate::ContainerError;
use std::{
    cell::{self, RefCell},
    fmt,
    rc::Rc,
};

/// Cursor over the container's live sequence. It holds a shared handle to the container's
/// storage instead of a copy: elements appended after construction are reachable, removals
/// shrink the end boundary, and [OrderCursor::len] is the container's size at the time of the call.
///
/// Two cursors are equal if they walk the same container (identity, not content) and stand
/// at the same position.
pub struct InsertionOrderIterator<T = i32> {
    elements: Rc<RefCell<Vec<T>>>,
    position: usize,
}

impl<T> InsertionOrderIterator<T> {
    pub(crate) fn new(elements: Rc<RefCell<Vec<T>>>, position: usize) -> Self {
        InsertionOrderIterator { elements, position }
    }
}

impl<T> OrderCursor for InsertionOrderIterator<T> {
    type Element = T;
    type Ref<'r> = cell::Ref<'r, T> where Self: 'r;

    fn cursor(&self) -> usize {
        self.position
    }

    fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    /// # Panics
    ///
    /// The returned guard borrows the container's storage. Mutating the container while
    /// the guard is alive panics.
    fn current(&self) -> Result<Self::Ref<'_>, ContainerError> {
        let position = self.position;
        cell::Ref::filter_map(self.elements.borrow(), |elements| elements.get(position))
            .map_err(|elements| out_of_bounds(position, elements.len()))
    }

    fn advance(&mut self) -> Result<&mut Self, ContainerError> {
        let len = self.len();
        if self.position >= len {
            return Err(out_of_bounds(self.position, len));
        }
        self.position += 1;
        Ok(self)
    }
}

impl<T> Iterator for InsertionOrderIterator<T>
where
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.elements.borrow().get(self.position)?.clone();
        self.position += 1;
        Some(item)
    }
}

impl<T> Clone for InsertionOrderIterator<T> {
    fn clone(&self) -> Self {
        InsertionOrderIterator {
            elements: Rc::clone(&self.elements),
            position: self.position,
        }
    }
}

impl<T> PartialEq for InsertionOrderIterator<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.elements, &other.elements) && self.position == other.position
    }
}

impl<T> Eq for InsertionOrderIterator<T> {}

impl<T> fmt::Debug for InsertionOrderIterator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertionOrderIterator")
            .field("container", &Rc::as_ptr(&self.elements))
            .field("position", &self.position)
            .finish()
    }
}
