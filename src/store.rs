//! Fixed-capacity backing storage
//!
//! The growable array never touches raw memory directly; every slot access
//! goes through a `BoundedStore`, which is allocated once with an exact
//! capacity and replaced wholesale on resize.

use crate::error::{HsortError, Result};

/// A fixed number of slots with bounds-checked access
pub struct BoundedStore<T> {
    slots: Box<[Option<T>]>,
}

impl<T> BoundedStore<T> {
    /// Allocate exactly `capacity` empty slots
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Borrow the value in a slot
    pub fn get(&self, index: usize) -> Result<&T> {
        self.slots
            .get(index)
            .and_then(Option::as_ref)
            .ok_or_else(|| HsortError::out_of_bounds(index, self.capacity()))
    }

    /// Overwrite a slot, dropping whatever it held
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.capacity();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or_else(|| HsortError::out_of_bounds(index, len))?;
        *slot = Some(value);
        Ok(())
    }

    /// Move the value out of a slot, leaving it empty
    pub fn take(&mut self, index: usize) -> Result<T> {
        let len = self.capacity();
        self.slots
            .get_mut(index)
            .and_then(Option::take)
            .ok_or_else(|| HsortError::out_of_bounds(index, len))
    }

    /// Exchange two slots
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let len = self.capacity();
        if a >= len {
            return Err(HsortError::out_of_bounds(a, len));
        }
        if b >= len {
            return Err(HsortError::out_of_bounds(b, len));
        }
        self.slots.swap(a, b);
        Ok(())
    }
}
