//! Definition of the traversal orderings a container offers

/// Order of iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Live walk in insertion order
    Insertion,
    Ascending,
    Descending,
    /// Insertion order, back to front
    Reverse,
    /// Smallest, largest, second smallest, second largest, ...
    SideCross,
    /// Middle element of the insertion order first, then alternating left and right
    MiddleOut,
}

impl Order {
    /// All orderings, in the order they are declared.
    pub const ALL: [Order; 6] = [
        Order::Insertion,
        Order::Ascending,
        Order::Descending,
        Order::Reverse,
        Order::SideCross,
        Order::MiddleOut,
    ];

    /// Whether a cursor of this ordering copies the elements on construction.
    pub const fn is_snapshot(self) -> bool {
        !matches!(self, Order::Insertion)
    }
}
