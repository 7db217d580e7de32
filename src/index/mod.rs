//! Main data structure used to describe an index

pub mod format;
pub mod postings;

use crate::base::{Count, DocId, Len};
use crate::error::{Error, Result};
use crate::utils::keyed_map::KeyedMap;

pub use postings::{Posting, PostingList};

/// Maps each (normalized) word to its posting list
///
/// The index owns all its words and posting lists; [`InvertedIndex::get`]
/// only lends them out.
pub struct InvertedIndex {
    words: KeyedMap<PostingList>,
}

impl InvertedIndex {
    /// Creates an empty index whose word map has `slots` buckets
    pub fn new(slots: usize) -> Result<Self> {
        Ok(Self {
            words: KeyedMap::new(slots)?,
        })
    }

    fn check_docid(docid: DocId) -> Result<()> {
        if docid == 0 {
            return Err(Error::invalid_arg("docid", "document IDs start at 1"));
        }
        Ok(())
    }

    /// Increments the count of `word` in document `docid`, and returns the
    /// new count
    pub fn add(&mut self, word: &str, docid: DocId) -> Result<Count> {
        Self::check_docid(docid)?;
        let postings = self.words.find_or_insert_with(word, PostingList::new)?;
        Ok(postings.add(docid))
    }

    /// Sets the exact count of `word` in document `docid`
    pub fn set(&mut self, word: &str, docid: DocId, count: Count) -> Result<()> {
        Self::check_docid(docid)?;
        if count == 0 {
            return Err(Error::invalid_arg("count", "counts must be positive"));
        }
        self.words
            .find_or_insert_with(word, PostingList::new)?
            .set(docid, count);
        Ok(())
    }

    /// Makes sure `word` has an entry, even with no posting
    pub fn insert_word(&mut self, word: &str) -> Result<&mut PostingList> {
        self.words.find_or_insert_with(word, PostingList::new)
    }

    /// Returns the posting list of a word, if indexed
    pub fn get(&self, word: &str) -> Option<&PostingList> {
        self.words.find(word)
    }

    /// Removes a word from the index
    pub fn remove(&mut self, word: &str) -> Option<PostingList> {
        self.words.remove(word)
    }

    /// Iterates over (word, postings), in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PostingList)> + '_ {
        self.words.iter()
    }

    /// Number of slots of the underlying word map
    pub fn slots(&self) -> usize {
        self.words.slots()
    }

    /// Total number of (word, document) pairs
    pub fn postings_count(&self) -> usize {
        self.words.iter().map(|(_, postings)| postings.len()).sum()
    }
}

impl Len for InvertedIndex {
    fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut index = InvertedIndex::new(11).unwrap();
        assert_eq!(index.add("fox", 1).unwrap(), 1);
        assert_eq!(index.add("fox", 1).unwrap(), 2);
        assert_eq!(index.add("fox", 2).unwrap(), 1);
        index.add("dog", 3).unwrap();

        let fox = index.get("fox").unwrap();
        assert_eq!(fox.get(1), 2);
        assert_eq!(fox.get(2), 1);
        assert_eq!(fox.get(3), 0);
        assert!(index.get("cat").is_none());
        assert_eq!(index.len(), 2);
        assert_eq!(index.postings_count(), 3);
    }

    #[test]
    fn test_set_does_not_accumulate() {
        let mut index = InvertedIndex::new(3).unwrap();
        index.set("fox", 1, 4).unwrap();
        index.set("fox", 1, 4).unwrap();
        assert_eq!(index.get("fox").unwrap().get(1), 4);
    }

    #[test]
    fn test_invalid_arguments() {
        let mut index = InvertedIndex::new(3).unwrap();
        assert!(matches!(index.add("fox", 0), Err(Error::InvalidArgument { .. })));
        assert!(matches!(index.add("", 1), Err(Error::InvalidArgument { .. })));
        assert!(matches!(index.set("fox", 1, 0), Err(Error::InvalidArgument { .. })));
        assert!(matches!(index.set("fox", 0, 1), Err(Error::InvalidArgument { .. })));
        assert!(index.is_empty());
        assert!(InvertedIndex::new(0).is_err());
    }

    #[test]
    fn test_remove() {
        let mut index = InvertedIndex::new(3).unwrap();
        index.add("fox", 1).unwrap();
        let postings = index.remove("fox").unwrap();
        assert_eq!(postings.get(1), 1);
        assert!(index.get("fox").is_none());
        assert!(index.is_empty());
    }
}
