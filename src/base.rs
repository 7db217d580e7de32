/// Document identifier, assigned sequentially from 1 by the document store
pub type DocId = u64;

/// Number of occurrences of a word in a document (or a query score)
pub type Count = u32;

/// Default number of slots of the word map when building an index
pub const DEFAULT_SLOTS: usize = 500;

/// Words shorter than this are never indexed
pub const MIN_WORD_LENGTH: usize = 3;

/// Marks object that have a length
pub trait Len {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
