//! Growable array and binary min-heap built on a fixed-capacity store,
//! with in-place heap-sort and the `hsort` line-sorting tool on top.

pub mod array;
pub mod cli;
pub mod compare;
pub mod config;
pub mod debug;
pub mod error;
pub mod heap;
pub mod input;
pub mod output;
pub mod runs;
pub mod sort;
pub mod store;

pub use array::DynamicArray;
pub use error::{HsortError, Result};
pub use heap::MinHeap;
pub use runs::{chunk, find_mode};
pub use sort::heapsort;
pub use store::BoundedStore;
