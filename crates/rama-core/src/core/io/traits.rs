use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Defines the interface for reading and writing tabular data files.
///
/// Implementors map between a delimited text format and a sequence of domain
/// records, so the rest of the library never handles raw rows.
pub trait TabularFile {
    /// The domain record produced for each logical entry in the file.
    type Record;

    /// The error type for I/O and parsing operations.
    type Error: Error + From<io::Error>;

    /// Reads all records from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if a row cannot be parsed or the reader fails.
    fn read_from(reader: impl Read) -> Result<Vec<Self::Record>, Self::Error>;

    /// Writes records, including a header row, to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying writer fails.
    fn write_to(records: &[Self::Record], writer: impl Write) -> Result<(), Self::Error>;

    /// Reads all records from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Self::Record>, Self::Error> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    /// Writes records to a file path, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        records: &[Self::Record],
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(records, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
