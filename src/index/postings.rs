//! Per-word document counters

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::base::{Count, DocId, Len};

/// Posting = document ID + count
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Posting {
    pub docid: DocId,
    pub count: Count,
}

impl std::fmt::Display for Posting {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.docid, self.count)
    }
}

/// Sparse mapping from document ID to a count
///
/// Enumeration follows insertion order. Setting a count to 0 keeps the
/// entry (it is then logically absent but still enumerated).
#[derive(Clone, Debug, Default)]
pub struct PostingList {
    postings: Vec<Posting>,
    // Position of each document in `postings`
    positions: HashMap<DocId, usize>,
}

impl PostingList {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, docid: DocId) -> &mut Posting {
        let position = match self.positions.get(&docid) {
            Some(&position) => position,
            None => {
                self.postings.push(Posting { docid, count: 0 });
                self.positions.insert(docid, self.postings.len() - 1);
                self.postings.len() - 1
            }
        };
        &mut self.postings[position]
    }

    /// Increments the count of a document (starting from 1), and returns
    /// the new count
    pub fn add(&mut self, docid: DocId) -> Count {
        let posting = self.entry(docid);
        posting.count = posting.count.saturating_add(1);
        posting.count
    }

    /// Overwrites (or creates) the count of a document
    pub fn set(&mut self, docid: DocId, count: Count) {
        self.entry(docid).count = count;
    }

    /// Returns the count of a document, 0 if absent
    pub fn get(&self, docid: DocId) -> Count {
        self.positions
            .get(&docid)
            .map_or(0, |&position| self.postings[position].count)
    }

    /// Iterates over the postings in insertion order
    pub fn iter(&self) -> impl Iterator<Item = Posting> + '_ {
        self.postings.iter().copied()
    }

    /// Sum of all the counts
    pub fn total(&self) -> u64 {
        self.postings.iter().map(|p| p.count as u64).sum()
    }
}

impl Len for PostingList {
    fn len(&self) -> usize {
        self.postings.len()
    }
}

impl FromIterator<Posting> for PostingList {
    fn from_iter<I: IntoIterator<Item = Posting>>(iter: I) -> Self {
        let mut list = PostingList::new();
        for posting in iter {
            list.set(posting.docid, posting.count);
        }
        list
    }
}

impl std::fmt::Display for PostingList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (ix, posting) in self.postings.iter().enumerate() {
            if ix > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", posting)?;
        }
        write!(f, "]")
    }
}
