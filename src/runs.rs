//! Algorithms that read a `DynamicArray` through its public interface only

use crate::array::DynamicArray;
use crate::error::Result;
use crate::heap::less;

/// Split an array into maximal non-descending runs
///
/// A new run starts wherever an element is smaller than the one before it.
/// An empty array yields no runs.
pub fn chunk<T: PartialOrd + Clone>(array: &DynamicArray<T>) -> Result<DynamicArray<DynamicArray<T>>> {
    let mut runs = DynamicArray::new();
    let mut current: DynamicArray<T> = DynamicArray::new();
    let mut prev: Option<&T> = None;

    for value in array {
        if let Some(prev) = prev {
            if less(value, prev)? {
                runs.append(std::mem::take(&mut current));
            }
        }
        current.append(value.clone());
        prev = Some(value);
    }

    if !current.is_empty() {
        runs.append(current);
    }
    Ok(runs)
}

/// Most frequent value(s) of a sorted array and their count
///
/// Values tied for the highest count are returned in array order. The array
/// must be non-empty; equal values must be adjacent.
pub fn find_mode<T: PartialEq + Clone>(array: &DynamicArray<T>) -> Result<(DynamicArray<T>, usize)> {
    let first = array.get(0)?;

    let mut modes = DynamicArray::new();
    modes.append(first.clone());
    let mut frequency = 1;

    let mut count = 1;
    let mut prev = first;
    for value in array.iter().skip(1) {
        if value == prev {
            count += 1;
        } else {
            count = 1;
        }

        if count == frequency {
            modes.append(value.clone());
        } else if count > frequency {
            modes = DynamicArray::new();
            modes.append(value.clone());
            frequency = count;
        }
        prev = value;
    }

    Ok((modes, frequency))
}
