use crate::array::DynamicArray;
use crate::compare::Record;
use crate::config::{Config, Method};
use crate::error::Result;
use crate::heap::{MinHeap, heapify, percolate_down};

/// Sort an array ascending in place with heap-sort
///
/// The array is heapified where it stands, then the minimum of the shrinking
/// heap prefix is swapped into the growing suffix on each pass. That leaves
/// the suffix descending, so a final in-place reversal produces ascending
/// order. No storage beyond a few indices is used. Not stable.
pub fn heapsort<T: PartialOrd>(array: &mut DynamicArray<T>) -> Result<()> {
    if array.is_empty() {
        return Ok(());
    }

    heapify(array)?;

    let mut counter = array.len() - 1;
    while counter > 0 {
        array.swap(0, counter)?;
        counter -= 1;
        percolate_down(array, 0, counter)?;
    }

    reverse_in_place(array)
}

/// Reverse the live elements by swapping from both ends
pub fn reverse_in_place<T>(array: &mut DynamicArray<T>) -> Result<()> {
    let len = array.len();
    for i in 0..len / 2 {
        array.swap(i, len - 1 - i)?;
    }
    Ok(())
}

/// Sort records according to configuration
///
/// `Method::Heapsort` sorts in place. `Method::Extract` copies the records
/// into a `MinHeap` and drains it. Both yield the same order because ties on
/// the key fall back to comparing whole lines.
pub fn sort_records(records: &mut DynamicArray<Record>, config: &Config) -> Result<()> {
    match config.method {
        Method::Heapsort => heapsort(records)?,
        Method::Extract => {
            let mut heap = MinHeap::new();
            heap.build_heap(records)?;
            *records = heap.into_sorted()?;
        }
    }

    if config.reverse {
        reverse_in_place(records)?;
    }
    Ok(())
}
