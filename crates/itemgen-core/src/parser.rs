//! CSV loader for item exports

use crate::error::{Error, Result};
use crate::record::RawRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Lazy iterator over the records of a CSV file with a header row
pub struct RecordReader<R: Read> {
    headers: Vec<String>,
    records: csv::StringRecordsIntoIter<R>,
    path: PathBuf,
    row: usize,
}

impl<R: Read> RecordReader<R> {
    /// Wrap any reader. `source` names the input in errors.
    pub fn from_reader(reader: R, source: impl Into<PathBuf>) -> Result<Self> {
        let path = source.into();
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // Short rows leave trailing columns absent
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(|e| Error::Csv {
                path: path.clone(),
                source: e,
            })?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.is_empty() {
            tracing::warn!("{} has no header row", path.display());
        }

        Ok(Self {
            headers,
            records: csv_reader.into_records(),
            path,
            row: 0,
        })
    }

    /// Header names in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.records.next()?;
        self.row += 1;

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                return Some(Err(Error::Csv {
                    path: self.path.clone(),
                    source: e,
                }))
            }
        };

        if record.len() > self.headers.len() {
            tracing::warn!(
                "row {} in {} has more cells than columns, ignoring the extra cells",
                self.row,
                self.path.display()
            );
        }

        let mut raw = RawRecord::new(self.row);
        for (name, value) in self.headers.iter().zip(record.iter()) {
            raw.insert(name.as_str(), value);
        }

        Some(Ok(raw))
    }
}

/// Open a CSV file for lazy record iteration
pub fn open_records<P: AsRef<Path>>(path: P) -> Result<RecordReader<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    RecordReader::from_reader(BufReader::new(file), path)
}

/// Parse CSV from a string (useful for testing and previews)
pub fn read_records_str(content: &str, source_name: &str) -> Result<Vec<RawRecord>> {
    RecordReader::from_reader(content.as_bytes(), source_name)?.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_simple_csv() {
        let csv = "Name,Category,SellPrice\nRusty Bolt,Basic Material,50\nBandage,Quick Use,\n";
        let records = read_records_str(csv, "test.csv").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].row, 1);
        assert_eq!(records[0].get("Name"), Some("Rusty Bolt"));
        assert_eq!(records[0].get("SellPrice"), Some("50"));
        assert_eq!(records[1].row, 2);
        assert_eq!(records[1].get("SellPrice"), Some(""));
    }

    #[test]
    fn test_short_row_leaves_columns_absent() {
        let csv = "Name,Category,Weight\nKey Card,Key\n";
        let records = read_records_str(csv, "test.csv").unwrap();

        assert_eq!(records[0].get("Category"), Some("Key"));
        assert_eq!(records[0].get("Weight"), None);
    }

    #[test]
    fn test_long_row_is_truncated() {
        let csv = "Name,Category\nKey Card,Key,extra\n";
        let records = read_records_str(csv, "test.csv").unwrap();

        assert_eq!(records[0].len(), 2);
    }

    #[test]
    fn test_quoted_fields() {
        let csv = "Name,Category\n\"Wire, Copper\",Recyclable\n\"The \"\"Best\"\" Key\",Key\n";
        let records = read_records_str(csv, "test.csv").unwrap();

        assert_eq!(records[0].get("Name"), Some("Wire, Copper"));
        assert_eq!(records[1].get("Name"), Some("The \"Best\" Key"));
    }

    #[test]
    fn test_reader_is_lazy() {
        let csv = "Name\nA\nB\nC\n";
        let mut reader = RecordReader::from_reader(csv.as_bytes(), "test.csv").unwrap();

        assert_eq!(reader.headers(), ["Name".to_string()]);
        assert_eq!(reader.next().unwrap().unwrap().get("Name"), Some("A"));
        assert_eq!(reader.count(), 2);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let bytes: &[u8] = b"Name\n\xff\xfe\n";
        let result: Result<Vec<RawRecord>> =
            RecordReader::from_reader(bytes, "bad.csv").unwrap().collect();

        assert!(matches!(result, Err(Error::Csv { .. })));
    }

    #[test]
    fn test_open_missing_file() {
        let result = open_records("definitely/not/here.csv");
        assert!(matches!(result, Err(Error::FileRead { .. })));
    }

    #[test]
    fn test_open_records_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Name,Rarity\nShield Cell,Rare\n").unwrap();

        let records: Vec<RawRecord> = open_records(file.path())
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("Rarity"), Some("Rare"));
    }
}
