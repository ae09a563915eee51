use dynarray::{DynamicArray, GrowthPolicy};

fn strings(values: &[&str]) -> DynamicArray<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

#[test]
fn test_empty_array() {
    let array: DynamicArray<String> = DynamicArray::new();

    assert_eq!(array.len(), 0);
    assert_eq!(array.capacity(), 0);
    assert!(array.is_empty());
    assert!(!array.is_allocated());
    assert!(array.first().is_none());
    assert!(array.last().is_none());
}

#[test]
fn test_default_is_empty() {
    let array: DynamicArray<i32> = DynamicArray::default();

    assert!(array.is_empty());
    assert_eq!(array.policy(), GrowthPolicy::default());
}

#[test]
fn test_fill_same_value() {
    let ints = DynamicArray::filled(5, &3).unwrap();
    assert_eq!(ints, [3, 3, 3, 3, 3]);
    assert_eq!(ints.capacity(), 5);

    let words = DynamicArray::filled(3, &"x".to_string()).unwrap();
    assert_eq!(words, ["x", "x", "x"]);

    let none = DynamicArray::filled(0, &1).unwrap();
    assert!(none.is_empty());
    assert!(!none.is_allocated());
}

#[test]
fn test_from_slice() {
    let array = DynamicArray::from_slice(&[1, 2, 3, 4, 5]).unwrap();

    assert_eq!(array.len(), 5);
    assert_eq!(array.capacity(), 5);
    assert_eq!(array, [1, 2, 3, 4, 5]);
}

#[test]
fn test_copy_constructor() {
    let mut source = DynamicArray::from([1, 2, 3]);
    source.reserve(10).unwrap();

    let copy = source.clone();
    assert_eq!(copy, source);
    assert_eq!(copy.capacity(), source.capacity());

    let words = strings(&["a", "b", "c", "d"]);
    let words_copy = words.try_clone().unwrap();
    assert_eq!(words_copy, words);
}

#[test]
fn test_copy_is_independent() {
    let source = strings(&["a", "b", "c"]);
    let mut copy = source.clone();

    copy[0] = "changed".to_string();
    copy.push_back("d".to_string()).unwrap();
    copy.erase(1).unwrap();

    assert_eq!(source, ["a", "b", "c"]);
    assert_eq!(copy, ["changed", "c", "d"]);
}

#[test]
fn test_move_constructor() {
    let mut source = strings(&["a", "b", "c"]);
    let capacity = source.capacity();

    let moved = source.take();

    assert_eq!(moved, ["a", "b", "c"]);
    assert_eq!(moved.capacity(), capacity);
    assert_eq!(source.len(), 0);
    assert_eq!(source.capacity(), 0);
    assert!(!source.is_allocated());
}

#[test]
fn test_moved_from_array_is_reusable() {
    let mut source = DynamicArray::from([1, 2]);
    let _moved = source.take();

    source.push_back(9).unwrap();
    assert_eq!(source, [9]);
}

#[test]
fn test_constructor_takes_iterators() {
    let values = [10, 20, 30, 40];
    let array = DynamicArray::try_from_iter(values[1..3].iter().copied()).unwrap();

    assert_eq!(array, [20, 30]);
    assert_eq!(array.capacity(), 2);

    let collected: DynamicArray<i32> = (0..5).filter(|x| x % 2 == 0).collect();
    assert_eq!(collected, [0, 2, 4]);
}

#[test]
fn test_from_vec_and_array() {
    let from_vec = DynamicArray::from(vec!["a", "b"]);
    assert_eq!(from_vec, ["a", "b"]);
    assert_eq!(from_vec.capacity(), 2);

    let from_array = DynamicArray::from([1.5, 2.5]);
    assert_eq!(from_array.len(), 2);
}

#[test]
fn test_copy_assignment() {
    let source = strings(&["a", "b"]);

    // destination large enough: buffer reused
    let mut large = strings(&["x", "y", "z", "w"]);
    large.clone_from(&source);
    assert_eq!(large, ["a", "b"]);
    assert_eq!(large.capacity(), 4);

    // destination too small: buffer replaced
    let mut small = DynamicArray::new();
    small.clone_from(&source);
    assert_eq!(small, ["a", "b"]);
    assert_eq!(small.capacity(), 2);
}

#[test]
fn test_assign_slice() {
    let mut array = DynamicArray::from([1, 2, 3, 4, 5]);

    array.assign_slice(&[7, 8]).unwrap();
    assert_eq!(array, [7, 8]);
    assert_eq!(array.capacity(), 5);

    array.assign_slice(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
    assert_eq!(array, [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(array.capacity(), 7);

    array.assign_slice(&[]).unwrap();
    assert!(array.is_empty());
}

#[test]
fn test_equality() {
    let a = DynamicArray::from([1, 2, 3, 4, 5]);
    let b = DynamicArray::from([1, 2, 3, 4, 5]);
    let first_differs = DynamicArray::from([9, 2, 3, 4, 5]);
    let last_matches_only = DynamicArray::from([9, 9, 9, 9, 5]);
    let shorter = DynamicArray::from([1, 2, 3]);

    assert_eq!(a, b);
    assert_ne!(a, first_differs);
    assert_ne!(a, last_matches_only);
    assert_ne!(a, shorter);
}

#[test]
fn test_equality_ignores_capacity() {
    let a = DynamicArray::from([1, 2]);
    let mut b = DynamicArray::with_capacity(10).unwrap();
    b.push_back(1).unwrap();
    b.push_back(2).unwrap();

    assert_eq!(a, b);
    assert_eq!(a, vec![1, 2]);
    let slice: &[i32] = &[1, 2];
    assert!(a == *slice);
}
