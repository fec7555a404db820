#![cfg(test)]

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::iter;
use std::mem;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_construction() {
    let list = LinkedList::<u32>::new();
    assert!(list.is_empty());
    assert_eq!(list.front(), None, "A new list should have no head.");

    let list = LinkedList::with_value(10);
    assert_eq!(list.len(), 1);
    assert_eq!(list.front(), Some(&10), "A seeded list should hold its value at the head.");

    let list = LinkedList::from_values([1, 2, 3, 4]);
    assert_eq!(list.to_vec(), [1, 2, 3, 4], "Values should keep their order.");
    assert_eq!(list.len(), 4);
    list.verify_length();

    assert_eq!(LinkedList::from_values(Vec::<u8>::new()).len(), 0);
    assert_eq!(LinkedList::from(["a", "b"]).to_vec(), ["a", "b"]);
}

#[test]
fn test_append() {
    let mut list = LinkedList::new();
    list.append(10);
    assert_eq!(list.to_vec(), [10], "Appending to an empty list should set the head.");
    assert_eq!(list.len(), 1);

    list.append(20);
    assert_eq!(list.to_string(), "10, 20");

    list.append(30).append(40).append(50);
    assert_eq!(list.to_string(), "10, 20, 30, 40, 50", "Appends should chain.");
    assert_eq!(*list.at(list.len() as isize - 1), 50);
    list.verify_length();
}

#[test]
fn test_prepend() {
    let mut list = LinkedList::new();
    list.prepend(10);
    assert_eq!(list.front(), Some(&10));

    list.prepend(20).prepend(30).prepend(40).prepend(50);
    assert_eq!(list.to_string(), "50, 40, 30, 20, 10");
    assert_eq!(*list.at(0), 50, "The last prepended value should be at index 0.");
    list.verify_length();
}

#[test]
fn test_insert_at() {
    let mut list = LinkedList::new();
    list.insert_at(10, 0);
    assert_eq!(list.to_vec(), [10], "Inserting at 0 on an empty list should set the head.");

    let mut list = LinkedList::from_values([10, 20, 30]);
    list.insert_at(99, 1);
    assert_eq!(list.to_vec(), [10, 99, 20, 30]);

    let mut list = LinkedList::from_values([1, 2, 3, 4, 5]);
    list.insert_at(10, 3);
    assert_eq!(list.to_string(), "1, 2, 3, 10, 4, 5");

    list.insert_at(0, 0);
    assert_eq!(list.front(), Some(&0), "Inserting at 0 should replace the head.");
    assert_eq!(list.len(), 7);
    list.verify_length();

    let mut list = LinkedList::from_values([10, 20, 30]);
    assert_eq!(
        list.try_insert_at(10, -10).err(),
        Some(IndexOutOfBounds { index: -10, len: 3 }),
        "Negative positions should be rejected."
    );
    assert_eq!(
        list.try_insert_at(10, 10).err(),
        Some(IndexOutOfBounds { index: 10, len: 3 })
    );
    assert!(
        list.try_insert_at(40, 3).is_err(),
        "Inserting one past the terminal node should be rejected."
    );
    assert_eq!(list.to_vec(), [10, 20, 30], "Failed inserts shouldn't modify the list.");

    assert!(LinkedList::new().try_insert_at(1, 1).is_err());

    assert_panics!({
        LinkedList::from_values([1]).insert_at(2, 5);
    });
}

#[test]
fn test_at() {
    let mut list = LinkedList::with_value("this is a string");
    assert!(list.try_at(2).is_err(), "Indexing past a single element should fail.");

    list.append("abc").append("bcd").append("cde").append("def");
    assert!(list.try_at(10).is_err());
    assert!(list.try_at(-10).is_err());
    assert!(list.try_at(5).is_err());
    assert!(list.try_at(-6).is_err());

    assert_eq!(*list.at(2), "bcd");
    assert_eq!(list[2], "bcd", "Index should match at.");
    assert_eq!(*list.at(-1), "def");
    assert_eq!(*list.at(-2), "cde");
    assert_eq!(*list.at(-5), "this is a string");
    assert_eq!(list.at(-1), list.at(list.len() as isize - 1));

    assert_eq!(
        LinkedList::<u8>::new().try_at(0),
        Err(IndexOutOfBounds { index: 0, len: 0 }),
        "Indexing an empty list should fail."
    );

    assert_panics!({
        let _ = LinkedList::<u8>::new()[0];
    });
}

#[test]
fn test_at_mut() {
    let mut list = LinkedList::from_values([1, 2, 3]);
    *list.at_mut(-1) = 30;
    list[0] = 10;
    *list.try_at_mut(1).unwrap() += 18;
    assert_eq!(list.to_vec(), [10, 20, 30]);
    assert!(list.try_at_mut(3).is_err());
}

#[test]
fn test_find() {
    let mut list = LinkedList::from_values([3, 8, 12, 15]);
    assert_eq!(list.find(|v| v % 4 == 0), Some(&8), "Should return the first match.");
    assert_eq!(list.find(|v| *v > 100), None);
    assert_eq!(LinkedList::<u8>::new().find(|_| true), None);

    if let Some(value) = list.find_mut(|v| *v == 12) {
        *value = 13;
    }
    assert_eq!(list.to_vec(), [3, 8, 13, 15]);

    list.delete(&8);
    assert_eq!(list.find(|v| *v == 8), None, "Deleted values shouldn't be found.");

    let mut list = LinkedList::from_values([1, 2, 1]);
    list.delete(&1);
    assert_eq!(list.find(|v| *v == 1), Some(&1), "Duplicates should survive a delete.");
    assert_eq!(list.to_vec(), [2, 1], "Only the first match should be deleted.");
}

#[test]
fn test_delete() {
    let mut list = LinkedList::new();
    assert_eq!(
        list.try_delete(&2).err(),
        Some(DeleteError::ContainerIsEmpty(ContainerIsEmpty))
    );

    list.append(5);
    list.delete(&5);
    assert!(list.is_empty(), "Deleting the only node should remove the head.");
    assert_eq!(list.len(), 0);

    list.append(10).append(20);
    list.delete(&10);
    assert_eq!(list.front(), Some(&20), "The second node should become the head.");

    let mut list = LinkedList::from_values((1..=10).map(|i| i * 10));
    list.delete(&50);
    assert_eq!(list.to_string(), "10, 20, 30, 40, 60, 70, 80, 90, 100");
    list.verify_length();

    let mut list = LinkedList::from_values([10, 20]);
    list.delete(&20);
    assert_eq!(list.to_vec(), [10], "Deleting the terminal node should work.");

    let mut list = LinkedList::from_values([10, 20, 30]);
    let error = list.try_delete(&99).err();
    assert!(error.is_some_and(|e| e.is_container_does_not_contain()));
    assert_eq!(list.len(), 3);

    assert_panics!({
        LinkedList::<u8>::new().delete(&1);
    });
}

#[test]
fn test_remove_at() {
    let mut list = LinkedList::<u8>::new();
    assert_eq!(
        list.try_remove_at(0).err(),
        Some(RemoveError::ContainerIsEmpty(ContainerIsEmpty)),
        "Emptiness should be reported before the index."
    );
    assert!(list.try_remove_at(-1).is_err_and(|e| e.is_container_is_empty()));

    let mut list = LinkedList::from_values([1, 2, 3, 4, 5]);
    list.remove_at(0);
    assert_eq!(list.to_vec(), [2, 3, 4, 5]);
    list.remove_at(3);
    assert_eq!(list.to_vec(), [2, 3, 4]);
    list.remove_at(1).remove_at(1);
    assert_eq!(list.to_vec(), [2]);
    list.verify_length();

    let error = list.try_remove_at(1).err();
    assert_eq!(
        error.map(IndexOutOfBounds::try_from).and_then(Result::ok),
        Some(IndexOutOfBounds { index: 1, len: 1 })
    );
    assert!(list.try_remove_at(-1).is_err_and(|e| e.is_index_out_of_bounds()));

    assert_eq!(list.take_at(0), Ok(2));
    assert!(list.is_empty());

    assert_panics!({
        LinkedList::from_values([1, 2]).remove_at(2);
    });
}

#[test]
fn test_length_tracking() {
    let mut list = LinkedList::new();
    list.append(1).prepend(0).append(3);
    list.insert_at(2, 2);
    list.verify_length();
    assert_eq!(list.to_vec(), [0, 1, 2, 3]);

    list.delete(&1).remove_at(0);
    list.verify_length();
    assert_eq!(list.len(), 2);

    let _ = list.try_delete(&42);
    let _ = list.try_remove_at(9);
    let _ = list.try_insert_at(9, 9);
    list.verify_length();
    assert_eq!(list.len(), 2, "Failed operations shouldn't change the length.");

    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), Some(3));
    assert_eq!(list.pop_front(), None);
    list.verify_length();
}

#[test]
fn test_to_vec_is_repeatable() {
    let list = LinkedList::from_values(["x", "y", "z"]);
    assert_eq!(list.to_vec(), list.to_vec());
    assert_eq!(list.len(), 3, "Converting shouldn't consume the list.");
    assert_eq!(list.back(), Some(&"z"));
}

#[test]
fn test_display() {
    let list = LinkedList::from_values([1, 2, 3]);
    assert_eq!(list.to_string(), "1, 2, 3");
    assert_eq!(list.joined(",").to_string(), "1,2,3");
    assert_eq!(list.joined(" -> ").to_string(), "1 -> 2 -> 3");
    assert_eq!(LinkedList::<u8>::new().to_string(), "");
    assert_eq!(
        format!("{list:?}"),
        "LinkedList { contents: [1, 2, 3], len: 3 }"
    );
}

#[test]
fn test_iterators() {
    let mut list = LinkedList::from_values([1, 2, 3]);
    assert_eq!(list.iter().len(), 3);

    for value in list.iter_mut() {
        *value *= 2;
    }
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 4, 6]);

    let mut owned = list.clone().into_iter();
    assert_eq!(owned.len(), 3);
    assert_eq!(owned.next(), Some(2));
    assert_eq!(owned.collect::<Vec<_>>(), [4, 6]);

    list.extend([8, 10]);
    assert_eq!(list.to_vec(), [2, 4, 6, 8, 10]);
    list.verify_length();

    let mut empty = LinkedList::new();
    empty.extend(iter::empty::<u8>());
    assert!(empty.is_empty());
}

#[test]
fn test_equality_and_hash() {
    let hash = |list: &LinkedList<u8>| {
        let mut hasher = DefaultHasher::new();
        list.hash(&mut hasher);
        hasher.finish()
    };

    let a = LinkedList::from_values([1, 2, 3]);
    let b = a.clone();
    assert_eq!(a, b);
    assert_eq!(hash(&a), hash(&b));
    assert_ne!(a, LinkedList::from_values([1, 2]));
    assert_ne!(a, LinkedList::from_values([1, 2, 4]));
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut list = LinkedList::from_values(iter::repeat_with(|| counter.clone()).take(10));

    list.remove_at(4);
    assert_eq!(counter.count(), 1, "A removed element should be dropped.");

    let _ = list.pop_front();
    assert_eq!(counter.count(), 2);

    drop(list);
    assert_eq!(counter.count(), 10, "Dropping the list should drop every element once.");
}

#[test]
fn test_long_list_drop() {
    let list = LinkedList::from_values(0..200_000);
    assert_eq!(list.len(), 200_000);
    drop(list);
}

#[test]
fn test_contains_and_index_of() {
    let mut list = LinkedList::from_values(["a", "b", "c", "b"]);
    assert!(list.contains(&"c"));
    assert!(!list.contains(&"z"));
    assert_eq!(list.index_of(&"b"), Some(1), "Should return the first matching position.");
    assert_eq!(list.index_of(&"z"), None);

    list.clear();
    assert!(list.is_empty());
    assert!(!list.contains(&"a"));
}

#[test]
fn test_default_and_take() {
    let mut list = LinkedList::from_values([1, 2]);
    let taken = mem::take(&mut list);
    assert!(list.is_empty(), "Taking a list should leave an empty one behind.");
    assert_eq!(taken.to_vec(), [1, 2]);
    assert!(LinkedList::<u8>::default().is_empty());

    list.append(3);
    assert_eq!(list.pop_front(), Some(3));
    assert_eq!(list.pop_front(), None, "Popping the last node should leave the list empty.");
    list.verify_length();
}
