use std::fmt::Display;
use std::io::{self, Write};

use crate::array::DynamicArray;

/// Trace one stage of a run to the diagnostic stream
///
/// Writes the array summary line followed by one indented line per element,
/// so records with embedded separators stay readable.
pub fn debug_stage<W: Write, T: Display>(
    writer: &mut W,
    stage: &str,
    array: &DynamicArray<T>,
) -> io::Result<()> {
    writeln!(
        writer,
        "{}: size={} capacity={}",
        stage,
        array.len(),
        array.capacity()
    )?;
    for (i, value) in array.iter().enumerate() {
        writeln!(writer, "  [{}] {}", i, value)?;
    }
    Ok(())
}
