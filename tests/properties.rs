//! Property tests for the resizing policy and heap ordering

use hsort::array::SHRINK_FLOOR;
use hsort::{DynamicArray, MinHeap, heapsort};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum ArrayOp {
    Append(i32),
    Insert(usize, i32),
    Remove(usize),
}

fn array_op() -> impl Strategy<Value = ArrayOp> {
    prop_oneof![
        1 => any::<i32>().prop_map(ArrayOp::Append),
        1 => (any::<usize>(), any::<i32>()).prop_map(|(i, v)| ArrayOp::Insert(i, v)),
        // Weighted so arrays also drain far enough to exercise shrinking
        3 => any::<usize>().prop_map(ArrayOp::Remove),
    ]
}

#[derive(Clone, Debug)]
enum HeapOp {
    Add(i32),
    Extract,
}

fn heap_op() -> impl Strategy<Value = HeapOp> {
    prop_oneof![
        2 => any::<i32>().prop_map(HeapOp::Add),
        1 => Just(HeapOp::Extract),
    ]
}

fn contents<T: Clone>(array: &DynamicArray<T>) -> Vec<T> {
    array.iter().cloned().collect()
}

fn assert_heap_order(array: &DynamicArray<i32>) -> Result<(), TestCaseError> {
    for i in 1..array.len() {
        let parent = (i - 1) / 2;
        prop_assert!(array.get(parent).unwrap() <= array.get(i).unwrap());
    }
    Ok(())
}

proptest! {
    #[test]
    fn appends_grow_geometrically(n in 0usize..3000) {
        let mut array = DynamicArray::new();
        let mut copies = 0usize;
        for i in 0..n {
            if array.len() == array.capacity() {
                copies += array.len();
            }
            array.append(i);
            prop_assert!(array.len() <= array.capacity());
        }
        prop_assert!(array.capacity() <= 4usize.max(2 * n));
        prop_assert!(copies <= 2 * n);
    }

    #[test]
    fn array_matches_vec_model(
        initial in prop::collection::vec(any::<i32>(), 0..40),
        ops in prop::collection::vec(array_op(), 0..200),
    ) {
        let mut array: DynamicArray<i32> = initial.iter().copied().collect();
        let mut model = initial;

        for op in ops {
            match op {
                ArrayOp::Append(v) => {
                    array.append(v);
                    model.push(v);
                }
                ArrayOp::Insert(i, v) => {
                    let i = i % (model.len() + 1);
                    array.insert_at(i, v).unwrap();
                    model.insert(i, v);
                }
                ArrayOp::Remove(i) => {
                    if model.is_empty() {
                        prop_assert!(array.remove_at(0).is_err());
                        continue;
                    }
                    let i = i % model.len();
                    let (size, capacity) = (array.len(), array.capacity());
                    prop_assert_eq!(array.remove_at(i).unwrap(), model.remove(i));

                    if capacity > SHRINK_FLOOR && size * 4 < capacity {
                        prop_assert_eq!(array.capacity(), SHRINK_FLOOR.max(size * 2));
                    } else {
                        prop_assert_eq!(array.capacity(), capacity);
                    }
                }
            }
            prop_assert!(array.capacity() >= 4);
            prop_assert!(array.len() <= array.capacity());
        }

        prop_assert_eq!(contents(&array), model);
    }

    #[test]
    fn invalid_resize_changes_nothing(
        values in prop::collection::vec(any::<i32>(), 1..50),
        pick in any::<usize>(),
    ) {
        let mut array: DynamicArray<i32> = values.iter().copied().collect();
        let capacity = array.capacity();
        array.resize(pick % values.len());
        prop_assert_eq!(array.capacity(), capacity);
        prop_assert_eq!(array.len(), values.len());
        prop_assert_eq!(contents(&array), values);
    }

    #[test]
    fn insert_then_remove_restores(
        values in prop::collection::vec(any::<i32>(), 0..50),
        pick in any::<usize>(),
        value in any::<i32>(),
    ) {
        let mut array: DynamicArray<i32> = values.iter().copied().collect();
        let index = pick % (values.len() + 1);
        array.insert_at(index, value).unwrap();
        prop_assert_eq!(array.remove_at(index).unwrap(), value);
        prop_assert_eq!(contents(&array), values);
    }

    #[test]
    fn slice_copies_range(
        values in prop::collection::vec(any::<i32>(), 1..50),
        a in any::<usize>(),
        b in any::<usize>(),
    ) {
        let array: DynamicArray<i32> = values.iter().copied().collect();
        let start = a % values.len();
        let length = b % (values.len() - start + 1);
        let mut slice = array.slice(start, length).unwrap();
        prop_assert_eq!(contents(&slice), values[start..start + length].to_vec());
        if !slice.is_empty() {
            slice.set(0, 0).unwrap();
        }
        prop_assert_eq!(contents(&array), values);
    }

    #[test]
    fn heap_order_holds_after_any_ops(ops in prop::collection::vec(heap_op(), 0..300)) {
        let mut heap = MinHeap::new();
        let mut model: Vec<i32> = Vec::new();
        for op in ops {
            match op {
                HeapOp::Add(v) => {
                    heap.add(v).unwrap();
                    model.push(v);
                }
                HeapOp::Extract => {
                    if model.is_empty() {
                        prop_assert!(heap.extract_min().is_err());
                    } else {
                        model.sort_unstable();
                        prop_assert_eq!(heap.extract_min().unwrap(), model.remove(0));
                    }
                }
            }
            prop_assert_eq!(heap.size(), model.len());
            assert_heap_order(heap.as_array())?;
        }
    }

    #[test]
    fn build_heap_extracts_sorted(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let source: DynamicArray<i32> = values.iter().copied().collect();
        let mut heap = MinHeap::new();
        heap.build_heap(&source).unwrap();
        assert_heap_order(heap.as_array())?;

        let mut expected = values;
        expected.sort_unstable();
        let sorted = heap.into_sorted().unwrap();
        prop_assert_eq!(contents(&sorted), expected);
    }

    #[test]
    fn build_heap_does_not_alias_source(
        values in prop::collection::vec(any::<i32>(), 1..100),
        replacement in any::<i32>(),
    ) {
        let mut source: DynamicArray<i32> = values.iter().copied().collect();
        let mut heap = MinHeap::new();
        heap.build_heap(&source).unwrap();
        let before = contents(heap.as_array());

        for i in 0..source.len() {
            source.set(i, replacement).unwrap();
        }
        prop_assert_eq!(contents(heap.as_array()), before);

        heap.extract_min().unwrap();
        prop_assert_eq!(source.len(), values.len());
    }

    #[test]
    fn heapsort_sorts_in_place(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut array: DynamicArray<i32> = values.iter().copied().collect();
        let capacity = array.capacity();
        heapsort(&mut array).unwrap();

        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(contents(&array), expected);
        prop_assert_eq!(array.capacity(), capacity);
    }

    #[test]
    fn heapsort_strings(values in prop::collection::vec("[a-z]{0,6}", 0..100)) {
        let mut array: DynamicArray<String> = values.iter().cloned().collect();
        heapsort(&mut array).unwrap();

        let mut expected = values;
        expected.sort();
        prop_assert_eq!(contents(&array), expected);
    }
}
