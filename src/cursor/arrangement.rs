//! Permutations applied to a copy of the container's elements when a snapshot cursor is built.
//!
//! Each strategy is a zero-sized marker type so that every snapshot ordering is a distinct
//! cursor type ([SnapshotIterator](super::SnapshotIterator)`<T, S>`) while sharing one
//! implementation of the traversal itself.

use crate::Order;
use itertools::Itertools;
use std::fmt::Debug;

/// A deterministic permutation of an element sequence.
pub trait Arrangement: Debug {
    /// The ordering this strategy produces
    const ORDER: Order;

    /// Rearranges `elements` (a copy of the container's sequence in insertion order).
    /// The result is always a permutation of the input.
    fn arrange<T: Ord>(elements: Vec<T>) -> Vec<T>;
}

/// Natural ascending order. Ties keep no particular order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ascending;

/// Natural descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descending;

/// Insertion order reversed end to end. No sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reverse;

/// Alternating low/high selection from an ascending copy: `s[0], s[n-1], s[1], s[n-2], ...`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideCross;

/// Expansion from the middle of the insertion order: `o[mid]`, then `o[mid-1], o[mid+1], o[mid-2], ...`
/// with `mid = n / 2` (the later of the two middle positions for even `n`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiddleOut;

impl Arrangement for Ascending {
    const ORDER: Order = Order::Ascending;

    fn arrange<T: Ord>(mut elements: Vec<T>) -> Vec<T> {
        elements.sort_unstable();
        elements
    }
}

impl Arrangement for Descending {
    const ORDER: Order = Order::Descending;

    fn arrange<T: Ord>(mut elements: Vec<T>) -> Vec<T> {
        elements.sort_unstable_by(|a, b| b.cmp(a));
        elements
    }
}

impl Arrangement for Reverse {
    const ORDER: Order = Order::Reverse;

    fn arrange<T: Ord>(mut elements: Vec<T>) -> Vec<T> {
        elements.reverse();
        elements
    }
}

impl Arrangement for SideCross {
    const ORDER: Order = Order::SideCross;

    fn arrange<T: Ord>(elements: Vec<T>) -> Vec<T> {
        let mut sorted = Ascending::arrange(elements);
        // The low half takes the middle element when n is odd, so it is emitted exactly once.
        let high = sorted.split_off((sorted.len() + 1) / 2);
        sorted.into_iter().interleave(high.into_iter().rev()).collect_vec()
    }
}

impl Arrangement for MiddleOut {
    const ORDER: Order = Order::MiddleOut;

    fn arrange<T: Ord>(mut elements: Vec<T>) -> Vec<T> {
        if elements.is_empty() {
            return elements;
        }
        let mid = elements.len() / 2;
        let right = elements.split_off(mid + 1);
        // `elements` is now `o[..=mid]`; popping yields the middle first, then walks left
        let middle = elements.pop();
        middle
            .into_iter()
            .chain(elements.into_iter().rev().interleave(right))
            .collect_vec()
    }
}
