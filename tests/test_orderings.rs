use itertools::Itertools;
use ordering_container::{ContainerError, OrderCursor, OrderedContainer};

/// Walks `begin` until it compares equal to `end`, the way a caller would with a factory pair.
fn collect_range<C>(mut begin: C, end: C) -> Vec<C::Element>
where
    C: OrderCursor + PartialEq,
    C::Element: Clone,
{
    let mut result = vec![];
    while begin != end {
        result.push((*begin.current().unwrap()).clone());
        begin.advance().unwrap();
    }
    result
}

/// Asserts that a cursor is exhausted and stays so.
fn assert_exhausted<C: OrderCursor>(cursor: &mut C) {
    let position = cursor.cursor();
    for _ in 0..3 {
        assert!(matches!(cursor.current(), Err(ContainerError::OutOfBounds { .. })));
        assert!(matches!(cursor.advance(), Err(ContainerError::OutOfBounds { .. })));
        assert_eq!(cursor.cursor(), position);
    }
}

fn container(values: &[i32]) -> OrderedContainer {
    values.iter().copied().collect()
}

#[test]
fn test_empty_container() {
    let mut c = OrderedContainer::<i32>::new();
    assert_eq!(c.size(), 0);
    assert_eq!(c.remove_all(&42), Err(ContainerError::NotFound));
    assert_eq!(c.render(), "[]");

    let mut it = c.begin_order();
    assert_eq!(it, c.end_order());
    assert_exhausted(&mut it);

    let mut it = c.begin_ascending_order();
    assert_eq!(it, c.end_ascending_order());
    assert_exhausted(&mut it);

    let mut it = c.begin_descending_order();
    assert_eq!(it, c.end_descending_order());
    assert_exhausted(&mut it);

    let mut it = c.begin_reverse_order();
    assert_eq!(it, c.end_reverse_order());
    assert_exhausted(&mut it);

    let mut it = c.begin_side_cross_order();
    assert_eq!(it, c.end_side_cross_order());
    assert_exhausted(&mut it);

    let mut it = c.begin_middle_out_order();
    assert_eq!(it, c.end_middle_out_order());
    assert_exhausted(&mut it);
}

#[test]
fn test_factory_pairs() {
    let c = container(&[7, 15, 6, 1, 2]);
    assert_eq!(collect_range(c.begin_order(), c.end_order()), &[7, 15, 6, 1, 2]);
    assert_eq!(
        collect_range(c.begin_ascending_order(), c.end_ascending_order()),
        &[1, 2, 6, 7, 15]
    );
    assert_eq!(
        collect_range(c.begin_descending_order(), c.end_descending_order()),
        &[15, 7, 6, 2, 1]
    );
    assert_eq!(
        collect_range(c.begin_reverse_order(), c.end_reverse_order()),
        &[2, 1, 6, 15, 7]
    );
    assert_eq!(
        collect_range(c.begin_side_cross_order(), c.end_side_cross_order()),
        &[1, 15, 2, 7, 6]
    );
    assert_eq!(
        collect_range(c.begin_middle_out_order(), c.end_middle_out_order()),
        &[6, 15, 1, 7, 2]
    );
}

#[test]
fn test_insertion_order_with_duplicates_and_removal() {
    let mut c = OrderedContainer::new();
    c.append(42);
    let mut it = c.begin_order();
    assert_eq!(collect_range(it.clone(), c.end_order()), &[42]);
    it.advance().unwrap();
    assert_eq!(it, c.end_order());
    assert_exhausted(&mut it);

    c.append(42);
    c.append(7);
    assert_eq!(collect_range(c.begin_order(), c.end_order()), &[42, 42, 7]);

    c.remove_all(&42).unwrap();
    assert_eq!(collect_range(c.begin_order(), c.end_order()), &[7]);

    c.remove_all(&7).unwrap();
    let mut it = c.begin_order();
    assert_eq!(it, c.end_order());
    assert_exhausted(&mut it);
}

#[test]
fn test_single_element_orderings() {
    let c = container(&[100]);
    for order in ordering_container::Order::ALL {
        assert_eq!(c.iter(order).collect_vec(), &[100], "{order:?}");
    }

    let mut it = c.begin_middle_out_order();
    let end = c.end_middle_out_order();
    it.advance().unwrap();
    assert_eq!(it, end);
    assert_exhausted(&mut it);
}

#[test]
fn test_middle_out_even_count() {
    let c = container(&[100, 200, 300, 400]);
    assert_eq!(
        collect_range(c.begin_middle_out_order(), c.end_middle_out_order()),
        &[300, 200, 400, 100]
    );
}

#[test]
fn test_snapshot_immutability() {
    let mut c = container(&[7, 15, 6, 1, 2]);
    let ascending = c.begin_ascending_order();
    let descending = c.begin_descending_order();
    let reverse = c.begin_reverse_order();
    let side_cross = c.begin_side_cross_order();
    let middle_out = c.begin_middle_out_order();

    c.append(100);
    c.remove_all(&7).unwrap();
    assert_eq!(c.render(), "[15, 6, 1, 2, 100]");

    assert_eq!(ascending.collect_vec(), &[1, 2, 6, 7, 15]);
    assert_eq!(descending.collect_vec(), &[15, 7, 6, 2, 1]);
    assert_eq!(reverse.collect_vec(), &[2, 1, 6, 15, 7]);
    assert_eq!(side_cross.collect_vec(), &[1, 15, 2, 7, 6]);
    assert_eq!(middle_out.collect_vec(), &[6, 15, 1, 7, 2]);
}

#[test]
fn test_insertion_order_liveness() {
    let mut c = container(&[1, 2]);
    let mut it = c.begin_order();
    let end_before = c.end_order();

    it.advance().unwrap().advance().unwrap();
    assert_eq!(it, end_before);
    assert!(it.is_exhausted());

    c.append(3);
    // The cursor reaches the new element, the old end stays where it was
    assert!(!it.is_exhausted());
    assert_eq!(*it.current().unwrap(), 3);
    assert_eq!(it, end_before);
    it.advance().unwrap();
    assert_ne!(it, end_before);
    assert_eq!(it, c.end_order());
}

#[test]
fn test_cursor_equality() {
    let a = container(&[1, 2, 3]);
    let b = container(&[1, 2, 3]);

    // Live cursors compare container identity
    assert_ne!(a.begin_order(), b.begin_order());
    assert_eq!(a.begin_order(), a.begin_order());

    // Snapshot cursors compare the position only
    let mut left = a.begin_ascending_order();
    let mut right = container(&[9, 8, 7, 6]).begin_ascending_order();
    left.advance().unwrap().advance().unwrap();
    right.advance().unwrap().advance().unwrap();
    assert_eq!(left, right);
    assert_ne!(*left.current().unwrap(), *right.current().unwrap());
}

#[test]
fn test_post_advance_returns_previous_state() {
    let c = container(&[4, 1, 3, 2]);
    let mut it = c.begin_side_cross_order();
    let previous = it.post_advance().unwrap();
    assert_eq!(*previous.current().unwrap(), 1);
    assert_eq!(*it.current().unwrap(), 4);

    let mut it = c.begin_order();
    let previous = it.post_advance().unwrap();
    assert_eq!(*previous.current().unwrap(), 4);
    assert_eq!(*it.current().unwrap(), 1);

    let mut end = c.end_order();
    assert!(end.post_advance().is_err());
    assert_eq!(end.cursor(), 4);
}

#[test]
fn test_remove_all_semantics() {
    let mut c = container(&[5, 3, 5, 1, 5, 2]);
    assert_eq!(c.remove_all(&5), Ok(3));
    assert_eq!(collect_range(c.begin_order(), c.end_order()), &[3, 1, 2]);
    assert_eq!(c.size(), 3);
    assert_eq!(c.remove_all(&5), Err(ContainerError::NotFound));
    assert_eq!(c.size(), 3);
}

#[test]
fn test_string_elements() {
    let mut c = OrderedContainer::new();
    c.append("one".to_string());
    c.append("two".to_string());
    c.append("three".to_string());
    assert_eq!(c.render(), "[one, two, three]");
    assert_eq!(
        collect_range(c.begin_ascending_order(), c.end_ascending_order()),
        &["one", "three", "two"]
    );
}
