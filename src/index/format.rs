//! Text serialization of an inverted index
//!
//! One line per word: `word docid1 count1 docid2 count2 ...`, each field
//! followed by a single space. Pairs with a zero count are not written.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use super::InvertedIndex;
use crate::base::{Count, DocId, Len};
use crate::error::{Error, Result};

impl InvertedIndex {
    /// Writes the index (one line per word)
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for (word, postings) in self.iter() {
            write!(writer, "{} ", word)?;
            for posting in postings.iter().filter(|p| p.count > 0) {
                write!(writer, "{} {} ", posting.docid, posting.count)?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }

    /// Saves the index into a file (truncating it)
    pub fn save(&self, path: &Path) -> Result<()> {
        let context = || format!("cannot write index file {}", path.display());

        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| Error::io(context(), e))?;

        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| Error::io(context(), e))?;

        info!(
            "Saved {} words ({} postings) into {}",
            self.len(),
            self.postings_count(),
            path.display()
        );
        Ok(())
    }

    /// Reads an index from text lines, using `slots` buckets for the word map
    pub fn read_from<R: BufRead>(reader: R, slots: usize) -> Result<Self> {
        let mut index = InvertedIndex::new(slots)?;

        for (ix, line) in reader.lines().enumerate() {
            let line_number = ix + 1;
            let line = line.map_err(|e| Error::io(format!("cannot read line {}", line_number), e))?;

            let mut fields = line.split_whitespace();
            let word = match fields.next() {
                Some(word) => word,
                None => continue,
            };

            if index.get(word).is_some() {
                return Err(Error::invalid_format(
                    line_number,
                    format!("word '{}' appears twice", word),
                ));
            }
            let postings = index.insert_word(word)?;

            while let Some(docid) = fields.next() {
                let count = fields.next().ok_or_else(|| {
                    Error::invalid_format(
                        line_number,
                        format!("document {} has no count", docid),
                    )
                })?;
                let docid: DocId = parse_field(docid, line_number)?;
                let count: Count = parse_field(count, line_number)?;

                if docid > 0 && count > 0 {
                    postings.set(docid, count);
                } else {
                    debug!("Skipping pair ({}, {}) at line {}", docid, count, line_number);
                }
            }
        }

        Ok(index)
    }

    /// Loads an index saved with [`InvertedIndex::save`]
    ///
    /// The word map gets one slot per line of the file.
    pub fn load(path: &Path) -> Result<Self> {
        let context = || format!("cannot read index file {}", path.display());

        let open = || {
            File::options()
                .read(true)
                .open(path)
                .map(BufReader::new)
                .map_err(|e| Error::io(context(), e))
        };

        let lines = open()?
            .lines()
            .try_fold(0usize, |n, line| line.map(|_| n + 1))
            .map_err(|e| Error::io(context(), e))?;

        let index = Self::read_from(open()?, lines.max(1))?;
        info!(
            "Loaded {} words ({} postings) from {}",
            index.len(),
            index.postings_count(),
            path.display()
        );
        Ok(index)
    }
}

fn parse_field<T: std::str::FromStr>(field: &str, line: usize) -> Result<T> {
    field
        .parse()
        .map_err(|_| Error::invalid_format(line, format!("'{}' is not a valid number", field)))
}
