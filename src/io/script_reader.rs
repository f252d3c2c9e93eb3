//! CSV script reader with iterator interface
//!
//! Provides a streaming iterator over ledger commands read from a script file.
//! Delegates row conversion to the csv_format module.
//!
//! ```no_run
//! use online_banking::io::script_reader::ScriptReader;
//! use std::path::Path;
//!
//! let reader = ScriptReader::new(Path::new("commands.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(command) => println!("Applying {}", command.name()),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file cannot be read, bad header) are returned from `new()`
//! - Individual row errors are yielded as Err variants in the iterator
//! - Row errors carry the physical line the row starts on; blank lines the
//!   CSV parser skips still count

use crate::io::csv_format::{convert_command_record, CommandRecord};
use crate::types::{BankingError, Command};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

/// Streaming reader over a command script
#[derive(Debug)]
pub struct ScriptReader {
    reader: csv::Reader<Cursor<Arc<[u8]>>>,
    data: Arc<[u8]>,
    headers: StringRecord,
    record: StringRecord,
    /// Bytes of `data` already counted into `line`
    scanned: usize,
    line: u64,
}

impl ScriptReader {
    /// Open a script file for iteration
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (for the optional trailing columns)
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file could not be read, or `ParseError` if
    /// the header row is malformed.
    pub fn new(path: &Path) -> Result<Self, BankingError> {
        let data: Arc<[u8]> = fs::read(path)
            .map_err(|e| BankingError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            })?
            .into();

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(Cursor::new(Arc::clone(&data)));
        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            data,
            headers,
            record: StringRecord::new(),
            scanned: 0,
            line: 1,
        })
    }

    /// Physical line of the first content byte at or after `byte`
    ///
    /// A record's position starts right after the previous record, before
    /// any skipped blank lines, so line terminators are stepped over first.
    /// Records arrive in file order, so counting resumes from the last call.
    fn line_at(&mut self, byte: u64) -> u64 {
        let len = self.data.len();
        let start = usize::try_from(byte).map_or(len, |b| b.min(len));
        let target = self.data[start..]
            .iter()
            .position(|b| !matches!(b, b'\r' | b'\n'))
            .map_or(len, |n| start + n)
            .max(self.scanned);

        let newlines = self.data[self.scanned..target]
            .iter()
            .filter(|&&b| b == b'\n')
            .count();
        self.line += newlines as u64;
        self.scanned = target;
        self.line
    }
}

impl Iterator for ScriptReader {
    type Item = Result<Command, BankingError>;

    /// Read and convert the next script row
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Command))` - Successfully parsed row
    /// * `Some(Err(BankingError))` - Parse or conversion error
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
            Ok(true) => {
                let byte = self.record.position().map_or(0, |pos| pos.byte());
                let line = self.line_at(byte);
                let parsed = self
                    .record
                    .deserialize::<CommandRecord>(Some(&self.headers))
                    .map_err(BankingError::from);
                Some(parsed.and_then(|record| convert_command_record(record, line)))
            }
        }
    }
}
