use std::io::{self, BufRead};

use crate::array::DynamicArray;
use crate::compare::Record;
use crate::config::Config;

/// Reads records from input, splitting on the specified delimiter
pub struct RecordReader<R> {
    reader: R,
    delimiter: u8,
    buffer: Vec<u8>,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R, delimiter: u8) -> Self {
        Self {
            reader,
            delimiter,
            buffer: Vec::new(),
        }
    }

    /// Read the next record, returning None at EOF
    pub fn read_record(&mut self) -> io::Result<Option<&[u8]>> {
        self.buffer.clear();
        let bytes_read = self.reader.read_until(self.delimiter, &mut self.buffer)?;

        if bytes_read == 0 {
            return Ok(None);
        }

        if self.buffer.last() == Some(&self.delimiter) {
            self.buffer.pop();
        }

        Ok(Some(&self.buffer))
    }
}

/// Read every record from `reader` and append it to `records`
///
/// Each line is keyed under `config` as it is read, so the sort itself never
/// re-parses a line.
pub fn read_records<R: BufRead>(
    reader: R,
    config: &Config,
    records: &mut DynamicArray<Record>,
) -> io::Result<()> {
    let mut rec_reader = RecordReader::new(reader, config.record_delimiter);

    while let Some(line) = rec_reader.read_record()? {
        records.append(Record::new(line.to_vec(), config));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(input: &[u8], config: &Config) -> Vec<Vec<u8>> {
        let mut records = DynamicArray::new();
        read_records(Cursor::new(input), config, &mut records).unwrap();
        records.iter().map(|r| r.line().to_vec()).collect()
    }

    #[test]
    fn test_read_records_newline() {
        let records = read(b"a\nb\nc\n", &Config::default());
        assert_eq!(records, vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
    }

    #[test]
    fn test_read_records_no_trailing_newline() {
        let records = read(b"a\nb\nc", &Config::default());
        assert_eq!(records, vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
    }

    #[test]
    fn test_read_records_nul_delimiter() {
        let config = Config {
            record_delimiter: 0u8,
            ..Config::default()
        };
        let records = read(b"a\0b\0c\0", &config);
        assert_eq!(records, vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
    }

    #[test]
    fn test_empty_records() {
        let records = read(b"\n\na\n\n", &Config::default());
        assert_eq!(
            records,
            vec![b"".to_vec(), b"".to_vec(), b"a".to_vec(), b"".to_vec()]
        );
    }

    #[test]
    fn test_appends_across_readers() {
        let config = Config::default();
        let mut records = DynamicArray::new();
        read_records(Cursor::new(b"x\n"), &config, &mut records).unwrap();
        read_records(Cursor::new(b"y\nz\n"), &config, &mut records).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records.get(2).unwrap().line(), b"z");
    }
}
