use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::array::DynamicArray;
use crate::compare::Record;
use crate::config::Config;

/// Write records to output with optional deduplication
pub fn write_records<W: Write>(
    writer: W,
    records: &DynamicArray<Record>,
    config: &Config,
) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    let delimiter = config.record_delimiter;

    let mut prev: Option<&Record> = None;
    for record in records {
        // -u keeps the first of each run of equal keys; input is sorted.
        let is_dup = config.unique && prev.is_some_and(|p| p.same_key(record));
        if !is_dup {
            writer.write_all(record.line())?;
            writer.write_all(&[delimiter])?;
            prev = Some(record);
        }
    }

    writer.flush()
}

/// Open output file or return stdout
pub fn open_output(config: &Config) -> io::Result<Box<dyn Write>> {
    match &config.output_file {
        Some(path) => {
            let file = File::create(path)?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
