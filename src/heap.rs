//! Binary min-heap stored in a `DynamicArray`
//!
//! The element at index `i` has children at `2i + 1` and `2i + 2` and is
//! never greater than either of them. Elements only need `PartialOrd`; a
//! comparison that returns `None` (e.g. a NaN float) fails the operation
//! with `Uncomparable`.

use std::cmp::Ordering;
use std::fmt;

use crate::array::DynamicArray;
use crate::error::{HsortError, Result};

/// Whether `a` orders strictly before `b`
pub(crate) fn less<T: PartialOrd>(a: &T, b: &T) -> Result<bool> {
    match a.partial_cmp(b) {
        Some(ord) => Ok(ord == Ordering::Less),
        None => Err(HsortError::Uncomparable),
    }
}

/// Sift the element at `index` toward the leaves
///
/// Only children at indices `<= max_index` are considered, which lets
/// heap-sort run this over the unsorted prefix of an array while leaving the
/// sorted suffix alone. When both children compare equal the left one wins.
pub(crate) fn percolate_down<T: PartialOrd>(
    array: &mut DynamicArray<T>,
    mut index: usize,
    max_index: usize,
) -> Result<()> {
    loop {
        let left = 2 * index + 1;
        if left > max_index {
            return Ok(());
        }
        let right = left + 1;

        let mut child = left;
        if right <= max_index && less(array.get(right)?, array.get(left)?)? {
            child = right;
        }

        if !less(array.get(child)?, array.get(index)?)? {
            return Ok(());
        }
        array.swap(index, child)?;
        index = child;
    }
}

/// Bottom-up heap construction over the whole array, O(n)
pub(crate) fn heapify<T: PartialOrd>(array: &mut DynamicArray<T>) -> Result<()> {
    let len = array.len();
    if len < 2 {
        return Ok(());
    }
    for i in (0..=(len - 2) / 2).rev() {
        percolate_down(array, i, len - 1)?;
    }
    Ok(())
}

pub struct MinHeap<T> {
    heap: DynamicArray<T>,
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        Self {
            heap: DynamicArray::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every element and start over with a fresh backing array
    pub fn clear(&mut self) {
        self.heap = DynamicArray::new();
    }

    /// Exchange two elements by index
    ///
    /// This can break heap order; it exists for callers that reuse the
    /// backing storage in place.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.heap.swap(a, b)
    }

    /// Smallest element, without removing it
    pub fn peek_min(&self) -> Result<&T> {
        self.heap.first().ok_or(HsortError::EmptyHeap)
    }

    /// Read-only view of the backing array in heap order
    pub fn as_array(&self) -> &DynamicArray<T> {
        &self.heap
    }
}

impl<T: PartialOrd> MinHeap<T> {
    /// Build a heap by adding each value in turn
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self> {
        let mut heap = MinHeap::new();
        for value in iter {
            heap.add(value)?;
        }
        Ok(heap)
    }

    /// Insert a value, restoring heap order in O(log n)
    pub fn add(&mut self, value: T) -> Result<()> {
        self.heap.append(value);
        self.percolate_up(self.heap.len() - 1)
    }

    fn percolate_up(&mut self, mut index: usize) -> Result<()> {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !less(self.heap.get(index)?, self.heap.get(parent)?)? {
                break;
            }
            self.heap.swap(index, parent)?;
            index = parent;
        }
        Ok(())
    }

    /// Remove and return the smallest element
    pub fn extract_min(&mut self) -> Result<T> {
        if self.heap.is_empty() {
            return Err(HsortError::EmptyHeap);
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last)?;
        let min = self.heap.remove_at(last)?;

        if !self.heap.is_empty() {
            let max_index = self.heap.len() - 1;
            percolate_down(&mut self.heap, 0, max_index)?;
        }
        Ok(min)
    }

    /// Drain the heap into an ascending array
    pub fn into_sorted(mut self) -> Result<DynamicArray<T>> {
        let mut sorted = DynamicArray::new();
        while !self.is_empty() {
            sorted.append(self.extract_min()?);
        }
        Ok(sorted)
    }
}

impl<T: PartialOrd + Clone> MinHeap<T> {
    /// Replace the contents with a copy of `source`, heapified bottom-up
    ///
    /// The heap owns its copy: later changes to `source` are not visible
    /// through the heap and vice versa. On error the heap is left unchanged.
    pub fn build_heap(&mut self, source: &DynamicArray<T>) -> Result<()> {
        let mut heap: DynamicArray<T> = source.iter().cloned().collect();
        heapify(&mut heap)?;
        self.heap = heap;
        Ok(())
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HEAP [")?;
        for (i, value) in self.heap.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap").field("heap", &self.heap).finish()
    }
}
