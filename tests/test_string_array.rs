use dynarray::collections::array::StringArray;
use dynarray::errors::ArrayError;

use proptest::prelude::*;

fn filled(values: &[String]) -> StringArray {
    let mut arr = StringArray::with_capacity(1).unwrap();
    for value in values {
        arr.append(value);
    }
    arr
}

proptest! {
    /// Every appended value reads back at the index it was appended to.
    #[test]
    fn append_then_read(values in prop::collection::vec("[a-m]{0,6}", 0..24)) {
        let arr = filled(&values);
        prop_assert_eq!(arr.count(), values.len());
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(arr.read(i), Ok(value.as_str()));
        }
    }

    /// Inserting at `at` places the new value there and shifts the suffix
    /// right by one, leaving the prefix untouched.
    #[test]
    fn insert_shifts_suffix_right(
        values in prop::collection::vec("[a-m]{0,6}", 0..16),
        new_value in "[a-m]{0,6}",
        seed in any::<usize>(),
    ) {
        let at = seed % (values.len() + 1);
        let mut arr = filled(&values);
        arr.insert(&new_value, at).unwrap();

        prop_assert_eq!(arr.count(), values.len() + 1);
        prop_assert_eq!(arr.read(at), Ok(new_value.as_str()));
        for (i, value) in values[..at].iter().enumerate() {
            prop_assert_eq!(arr.read(i), Ok(value.as_str()));
        }
        for (i, value) in values[at..].iter().enumerate() {
            prop_assert_eq!(arr.read(at + 1 + i), Ok(value.as_str()));
        }
    }

    /// Removing a present value drops exactly the first occurrence and keeps
    /// the relative order of everything else.
    #[test]
    fn remove_shifts_suffix_left(
        values in prop::collection::vec("[a-m]{0,6}", 1..16),
        seed in any::<usize>(),
    ) {
        let target = values[seed % values.len()].clone();
        let mut arr = filled(&values);

        prop_assert_eq!(arr.remove(&target), Ok(target.clone()));

        let first = values.iter().position(|v| *v == target).unwrap();
        let mut expected = values.clone();
        expected.remove(first);

        prop_assert_eq!(arr.count(), expected.len());
        for (i, value) in expected.iter().enumerate() {
            prop_assert_eq!(arr.read(i), Ok(value.as_str()));
        }
    }

    /// Overflowing the initial capacity at least doubles it and never loses,
    /// corrupts, or reorders an element.
    #[test]
    fn growth_is_transparent(
        capacity in 1_usize..8,
        extra in "[a-m]{0,6}",
    ) {
        let mut arr = StringArray::with_capacity(capacity).unwrap();
        let values: Vec<String> = (0..capacity).map(|i| i.to_string()).collect();
        for value in &values {
            arr.append(value);
        }
        prop_assert_eq!(arr.capacity(), capacity);

        arr.append(&extra);
        prop_assert!(arr.capacity() >= capacity * 2);
        prop_assert_eq!(arr.count(), capacity + 1);
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(arr.read(i), Ok(value.as_str()));
        }
        prop_assert_eq!(arr.read(capacity), Ok(extra.as_str()));
    }

    /// Reading at or past `count` always fails, even while storage has spare
    /// capacity.
    #[test]
    fn read_past_count_fails(
        values in prop::collection::vec("[a-m]{0,6}", 0..8),
        past in 0_usize..8,
    ) {
        let arr = filled(&values);
        let index = values.len() + past;
        prop_assert_eq!(
            arr.read(index),
            Err(ArrayError::IndexOutOfRange { index, count: values.len() })
        );
    }

    /// Removing an absent value fails with NotFound and leaves the array
    /// unchanged. The target alphabet is disjoint from the element alphabet.
    #[test]
    fn remove_missing_fails(
        values in prop::collection::vec("[a-m]{0,6}", 0..8),
        missing in "z[0-9]{0,3}",
    ) {
        let mut arr = filled(&values);
        prop_assert_eq!(arr.remove(&missing), Err(ArrayError::NotFound));
        prop_assert_eq!(arr.count(), values.len());
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(arr.read(i), Ok(value.as_str()));
        }
    }

    /// Stored copies are independent of the caller's buffer.
    #[test]
    fn stored_copies_are_isolated(original in "[a-m]{0,6}", suffix in "[n-z]{1,4}") {
        let mut caller_owned = original.clone();
        let mut arr = StringArray::with_capacity(1).unwrap();
        arr.append(&caller_owned);
        caller_owned.push_str(&suffix);
        prop_assert_eq!(arr.read(0), Ok(original.as_str()));
    }
}
