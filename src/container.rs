//! The ordered, duplicate-permitting container and its cursor factories.

use crate::cursor::{
    AscendingOrderIterator, DescendingOrderIterator, InsertionOrderIterator, MiddleOutOrderIterator,
    ReverseOrderIterator, SideCrossOrderIterator,
};
use crate::{ContainerError, Order};
use itertools::Itertools;
use std::{
    cell::{Ref, RefCell},
    fmt,
    rc::Rc,
};
use tracing_attributes::instrument;

/// A sequence of elements kept in insertion order. Duplicates are permitted.
///
/// The elements can be traversed in six [orderings](Order), each through its own cursor type
/// created by a `begin_*`/`end_*` factory pair. The cursor of [Order::Insertion] observes the
/// live container; all other cursors work on a rearranged copy taken when the factory is called.
/// Consequently, `end_*` performs the full rearrangement as well and a `begin_*`/`end_*` pair
/// obtained around a mutation describes two different sequences.
///
/// The container is single-threaded (neither `Send` nor `Sync`) as the insertion-order cursor
/// shares its storage.
pub struct OrderedContainer<T = i32> {
    elements: Rc<RefCell<Vec<T>>>,
}

impl<T> OrderedContainer<T> {
    pub fn new() -> Self {
        OrderedContainer {
            elements: Rc::new(RefCell::new(vec![])),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        OrderedContainer {
            elements: Rc::new(RefCell::new(Vec::with_capacity(capacity))),
        }
    }

    /// Adds `value` at the end of the sequence.
    ///
    /// # Panics
    ///
    /// If an element guard obtained from [InsertionOrderIterator] is still alive.
    #[instrument(level = "trace", skip_all)]
    pub fn append(&mut self, value: T) {
        let mut elements = self.elements.borrow_mut();
        elements.push(value);
        tracing::trace!(size = elements.len(), "appended element");
    }

    /// Removes every element equal to `value` and returns how many were removed.
    /// The remaining elements keep their relative order.
    ///
    /// Fails with [ContainerError::NotFound] and leaves the container untouched if it is
    /// empty or holds no such element.
    ///
    /// # Panics
    ///
    /// If an element guard obtained from [InsertionOrderIterator] is still alive.
    #[instrument(level = "trace", skip_all)]
    pub fn remove_all(&mut self, value: &T) -> Result<usize, ContainerError>
    where
        T: PartialEq,
    {
        let mut elements = self.elements.borrow_mut();
        let before = elements.len();
        elements.retain(|element| element != value);
        let removed = before - elements.len();
        if removed == 0 {
            tracing::debug!(size = before, "nothing to remove");
            return Err(ContainerError::NotFound);
        }
        tracing::debug!(removed, size = elements.len(), "removed elements");
        Ok(removed)
    }

    /// Number of elements
    pub fn size(&self) -> usize {
        self.elements.borrow().len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.elements.borrow().contains(value)
    }

    /// Text of the form `[e1, e2, ..., en]`; `[]` if empty.
    pub fn render(&self) -> String
    where
        T: fmt::Display,
    {
        format!("[{}]", self.elements.borrow().iter().join(", "))
    }

    /// Read access for the cursor factories. Not exposed outside the crate.
    pub(crate) fn elements(&self) -> Ref<'_, Vec<T>> {
        self.elements.borrow()
    }

    pub fn begin_order(&self) -> InsertionOrderIterator<T> {
        InsertionOrderIterator::new(Rc::clone(&self.elements), 0)
    }

    /// End of the insertion order. The position is the size at the time of this call and
    /// does not follow later mutations.
    pub fn end_order(&self) -> InsertionOrderIterator<T> {
        InsertionOrderIterator::new(Rc::clone(&self.elements), self.size())
    }
}

/// Snapshot factories. Each call copies and rearranges the current elements.
impl<T> OrderedContainer<T>
where
    T: Ord + Clone,
{
    pub fn begin_ascending_order(&self) -> AscendingOrderIterator<T> {
        AscendingOrderIterator::begin(self.elements().as_slice())
    }

    pub fn end_ascending_order(&self) -> AscendingOrderIterator<T> {
        AscendingOrderIterator::end(self.elements().as_slice())
    }

    pub fn begin_descending_order(&self) -> DescendingOrderIterator<T> {
        DescendingOrderIterator::begin(self.elements().as_slice())
    }

    pub fn end_descending_order(&self) -> DescendingOrderIterator<T> {
        DescendingOrderIterator::end(self.elements().as_slice())
    }

    pub fn begin_reverse_order(&self) -> ReverseOrderIterator<T> {
        ReverseOrderIterator::begin(self.elements().as_slice())
    }

    pub fn end_reverse_order(&self) -> ReverseOrderIterator<T> {
        ReverseOrderIterator::end(self.elements().as_slice())
    }

    pub fn begin_side_cross_order(&self) -> SideCrossOrderIterator<T> {
        SideCrossOrderIterator::begin(self.elements().as_slice())
    }

    pub fn end_side_cross_order(&self) -> SideCrossOrderIterator<T> {
        SideCrossOrderIterator::end(self.elements().as_slice())
    }

    pub fn begin_middle_out_order(&self) -> MiddleOutOrderIterator<T> {
        MiddleOutOrderIterator::begin(self.elements().as_slice())
    }

    pub fn end_middle_out_order(&self) -> MiddleOutOrderIterator<T> {
        MiddleOutOrderIterator::end(self.elements().as_slice())
    }

    /// Iterates in the given ordering, starting at the beginning. The returned iterator
    /// has the same live/snapshot semantics as the corresponding `begin_*` cursor.
    pub fn iter<'a>(&'a self, order: Order) -> Box<dyn Iterator<Item = T> + 'a> {
        match order {
            Order::Insertion => Box::new(self.begin_order()),
            Order::Ascending => Box::new(self.begin_ascending_order()),
            Order::Descending => Box::new(self.begin_descending_order()),
            Order::Reverse => Box::new(self.begin_reverse_order()),
            Order::SideCross => Box::new(self.begin_side_cross_order()),
            Order::MiddleOut => Box::new(self.begin_middle_out_order()),
        }
    }
}

impl<T> Default for OrderedContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy. The clone is a distinct container: insertion-order cursors of the two never compare equal.
impl<T> Clone for OrderedContainer<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        OrderedContainer {
            elements: Rc::new(RefCell::new(self.elements().clone())),
        }
    }
}

impl<T> FromIterator<T> for OrderedContainer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        OrderedContainer {
            elements: Rc::new(RefCell::new(iter.into_iter().collect_vec())),
        }
    }
}

impl<T> Extend<T> for OrderedContainer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.borrow_mut().extend(iter);
    }
}

impl<T> fmt::Display for OrderedContainer<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl<T> fmt::Debug for OrderedContainer<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.elements().iter()).finish()
    }
}
