//! Growable array over a fixed-capacity store
//!
//! Capacity doubles when an append or insert finds the store full. Removal
//! shrinks the store only once utilization drops below a quarter, and never
//! below `SHRINK_FLOOR` slots, so alternating appends and removals around a
//! threshold cannot trigger a reallocation on every call.

use std::fmt;

use crate::error::{HsortError, Result};
use crate::store::BoundedStore;

/// Capacity of a freshly created array
pub const INITIAL_CAPACITY: usize = 4;

/// Shrinking never reduces capacity below this
pub const SHRINK_FLOOR: usize = 10;

pub struct DynamicArray<T> {
    size: usize,
    capacity: usize,
    data: BoundedStore<T>,
}

impl<T> DynamicArray<T> {
    pub fn new() -> Self {
        Self {
            size: 0,
            capacity: INITIAL_CAPACITY,
            data: BoundedStore::new(INITIAL_CAPACITY),
        }
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.size
    }

    /// Number of allocated slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.size {
            return Err(HsortError::out_of_bounds(index, self.size));
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        self.data.get(index)
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        self.data.set(index, value)
    }

    /// Exchange two live elements
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.data.swap(a, b)
    }

    /// Move the live elements into a new store of `new_capacity` slots
    ///
    /// Does nothing when `new_capacity` is zero or would not hold the
    /// current elements.
    pub fn resize(&mut self, new_capacity: usize) {
        if new_capacity < self.size || new_capacity < 1 {
            return;
        }

        let mut fresh = BoundedStore::new(new_capacity);
        for i in 0..self.size {
            // Slots below `size` are always occupied and `new_capacity >= size`.
            if let Ok(value) = self.data.take(i) {
                let _ = fresh.set(i, value);
            }
        }

        self.data = fresh;
        self.capacity = new_capacity;
    }

    /// Add a value at the end, doubling capacity first if full
    pub fn append(&mut self, value: T) {
        if self.size == self.capacity {
            self.resize(self.capacity * 2);
        }
        // `size < capacity` after the resize above.
        let _ = self.data.set(self.size, value);
        self.size += 1;
    }

    /// Insert a value at `index`, shifting later elements right
    ///
    /// `index == len()` is the same as `append`.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.size {
            return Err(HsortError::out_of_bounds(index, self.size));
        }

        if self.size == self.capacity {
            self.resize(self.capacity * 2);
        }

        // Highest slot first so nothing is overwritten before it moves.
        for i in (index + 1..=self.size).rev() {
            let moved = self.data.take(i - 1)?;
            self.data.set(i, moved)?;
        }

        self.data.set(index, value)?;
        self.size += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements left
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;

        if self.capacity > SHRINK_FLOOR && self.size * 4 < self.capacity {
            self.resize(SHRINK_FLOOR.max(self.size * 2));
        }

        let removed = self.data.take(index)?;
        for i in index + 1..self.size {
            let moved = self.data.take(i)?;
            self.data.set(i - 1, moved)?;
        }

        self.size -= 1;
        Ok(removed)
    }

    /// Remove and return the last element
    pub fn pop(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }
        self.remove_at(self.size - 1).ok()
    }

    pub fn first(&self) -> Option<&T> {
        self.get(0).ok()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            array: self,
            front: 0,
            back: self.size,
        }
    }

    /// New array holding `f` applied to each element
    pub fn map<U, F>(&self, f: F) -> DynamicArray<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect()
    }

    /// Fold the elements left to right
    ///
    /// Without `initial`, the first element seeds the fold; an empty array
    /// then has nothing to return and fails with `EmptyReduce`.
    pub fn reduce<F>(&self, mut f: F, initial: Option<T>) -> Result<T>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        let mut iter = self.iter();
        let seed = match initial {
            Some(seed) => seed,
            None => iter.next().cloned().ok_or(HsortError::EmptyReduce)?,
        };
        Ok(iter.fold(seed, |acc, v| f(acc, v)))
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Copy of `length` elements starting at `start`
    ///
    /// An empty array has no valid start index, even for a zero length.
    pub fn slice(&self, start: usize, length: usize) -> Result<DynamicArray<T>> {
        if start >= self.size {
            return Err(HsortError::out_of_bounds(start, self.size));
        }
        let end = start
            .checked_add(length)
            .filter(|&end| end <= self.size)
            .ok_or_else(|| HsortError::out_of_bounds(start.saturating_add(length), self.size))?;

        let mut out = DynamicArray::new();
        for i in start..end {
            out.append(self.get(i)?.clone());
        }
        Ok(out)
    }

    /// New array holding the elements that satisfy `keep`
    pub fn filter<F>(&self, mut keep: F) -> DynamicArray<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|v| keep(*v)).cloned().collect()
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut data = BoundedStore::new(self.capacity);
        for (i, value) in self.iter().enumerate() {
            let _ = data.set(i, value.clone());
        }
        Self {
            size: self.size,
            capacity: self.capacity,
            data,
        }
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = DynamicArray::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DYN_ARR Size/Cap: {}/{} [", self.size, self.capacity)?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over the live elements in index order
pub struct Iter<'a, T> {
    array: &'a DynamicArray<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        let value = self.array.data.get(self.front).ok();
        self.front += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.array.data.get(self.back).ok()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
