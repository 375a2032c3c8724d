use crate::error::GuesserError;
use crate::error::Result;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// A source of candidate words, read one per line.
///
/// Words are streamed rather than loaded up front. Any underlying file is closed when the
/// `Dictionary` is dropped.
#[derive(Debug)]
pub struct Dictionary<R> {
    reader: R,
}

impl Dictionary<BufReader<File>> {
    /// Opens the dictionary file at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| GuesserError::DictionaryUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened dictionary");
        Ok(Dictionary::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> Dictionary<R> {
    /// Constructs a `Dictionary` that reads words from the given reader.
    pub fn from_reader(reader: R) -> Self {
        Dictionary { reader }
    }

    /// Returns an iterator over the words in this dictionary.
    ///
    /// Line endings are stripped and empty lines are skipped. Words are otherwise returned as-is.
    pub fn words(self) -> impl Iterator<Item = io::Result<String>> {
        self.reader
            .lines()
            .filter(|maybe_word| maybe_word.as_ref().map_or(true, |word| !word.is_empty()))
    }
}
