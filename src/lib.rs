//! ## About
//!
//! This crate contains an ordered, duplicate-permitting container ([OrderedContainer]) that can be
//! traversed in six [orderings](Order). Each ordering has its own cursor type, created by a
//! `begin_*`/`end_*` factory pair on the container and driven through the [OrderCursor] trait
//! (dereference, prefix/postfix advance, comparison) or as a plain [Iterator].
//!
//! | Ordering    | Factory pair                                        | Source          |
//! |-------------|-----------------------------------------------------|-----------------|
//! | insertion   | `begin_order`/`end_order`                           | live container  |
//! | ascending   | `begin_ascending_order`/`end_ascending_order`       | sorted copy     |
//! | descending  | `begin_descending_order`/`end_descending_order`     | sorted copy     |
//! | reverse     | `begin_reverse_order`/`end_reverse_order`           | reversed copy   |
//! | side-cross  | `begin_side_cross_order`/`end_side_cross_order`     | sorted copy     |
//! | middle-out  | `begin_middle_out_order`/`end_middle_out_order`     | unsorted copy   |
//!
//! See the [cursor] module for the difference between live and snapshot cursors.
//!
//! ```
//! use ordering_container::{OrderCursor, OrderedContainer};
//!
//! let mut container = OrderedContainer::new();
//! for value in [7, 15, 6, 1, 2] {
//!     container.append(value);
//! }
//!
//! let mut it = container.begin_side_cross_order();
//! let end = container.end_side_cross_order();
//! let mut visited = vec![];
//! while it != end {
//!     visited.push(*it.current()?);
//!     it.advance()?;
//! }
//! assert_eq!(visited, [1, 15, 2, 7, 6]);
//! assert_eq!(container.render(), "[7, 15, 6, 1, 2]");
//! # Ok::<(), ordering_container::ContainerError>(())
//! ```
//!
//! ## Naming conventions
//! * Traits – adjectives or capabilities (`OrderCursor`, `Arrangement`)
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories, which
//!             use substantives (i.e., omit a `get_` prefix) much like the standard library.

pub mod container;
pub mod cursor;
pub mod errors;
pub mod order;

pub use container::OrderedContainer;
pub use cursor::{
    AscendingOrderIterator, DescendingOrderIterator, InsertionOrderIterator, MiddleOutOrderIterator, OrderCursor,
    ReverseOrderIterator, SideCrossOrderIterator, SnapshotIterator,
};
pub use errors::ContainerError;
pub use order::Order;
