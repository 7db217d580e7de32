//! Document stores: where crawled pages are read from
//!
//! A page directory holds one file per document, named after its ID, plus a
//! `.crawler` marker file. Each page file contains the URL on the first line,
//! the crawl depth on the second one, and the page content afterwards.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::base::DocId;
use crate::error::{Error, Result};

/// A fetched page
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub url: String,
    pub depth: u32,
    pub content: String,
}

impl Document {
    pub fn new(url: impl Into<String>, depth: u32, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            depth,
            content: content.into(),
        }
    }
}

/// Gives access to documents by their ID
pub trait DocumentStore {
    /// Returns the document with the given ID, or None if there is none
    fn load(&self, docid: DocId) -> Option<Document>;

    /// Returns the URL of a document
    fn url(&self, docid: DocId) -> Option<String> {
        self.load(docid).map(|document| document.url)
    }
}

/// Documents stored in a directory, one file per document
pub struct PageDirectory {
    path: PathBuf,
}

impl PageDirectory {
    /// Name of the file marking a page directory
    pub const MARKER: &'static str = ".crawler";

    /// Returns true if `path` is a page directory
    pub fn validate(path: &Path) -> bool {
        path.join(Self::MARKER).is_file()
    }

    /// Opens an existing page directory
    pub fn open(path: &Path) -> Result<Self> {
        if !Self::validate(path) {
            return Err(Error::InvalidStore(path.to_path_buf()));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Creates (if needed) and marks a page directory
    pub fn init(path: &Path) -> Result<Self> {
        fs::create_dir_all(path)
            .map_err(|e| Error::io(format!("cannot create {}", path.display()), e))?;
        let marker = path.join(Self::MARKER);
        File::create(&marker)
            .map_err(|e| Error::io(format!("cannot create {}", marker.display()), e))?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn page_path(&self, docid: DocId) -> PathBuf {
        self.path.join(docid.to_string())
    }

    /// Saves a document under the given ID
    pub fn save(&self, docid: DocId, document: &Document) -> Result<()> {
        if docid == 0 {
            return Err(Error::invalid_arg("docid", "document IDs start at 1"));
        }
        let path = self.page_path(docid);
        let context = || format!("cannot write page {}", path.display());

        let mut file = File::create(&path).map_err(|e| Error::io(context(), e))?;
        write!(
            file,
            "{}\n{}\n{}",
            document.url, document.depth, document.content
        )
        .map_err(|e| Error::io(context(), e))
    }

    fn read_page(path: &Path) -> std::io::Result<Option<Document>> {
        let mut reader = BufReader::new(File::open(path)?);

        let mut url = String::new();
        let mut depth = String::new();
        if reader.read_line(&mut url)? == 0 || reader.read_line(&mut depth)? == 0 {
            return Ok(None);
        }
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let depth = match depth.trim().parse() {
            Ok(depth) => depth,
            Err(_) => {
                warn!("Invalid depth '{}' in {}", depth.trim(), path.display());
                return Ok(None);
            }
        };

        Ok(Some(Document {
            url: url.trim_end_matches(['\n', '\r']).to_string(),
            depth,
            content,
        }))
    }
}

impl DocumentStore for PageDirectory {
    fn load(&self, docid: DocId) -> Option<Document> {
        if docid == 0 {
            return None;
        }
        let path = self.page_path(docid);
        match Self::read_page(&path) {
            Ok(document) => document,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No page {}", path.display());
                None
            }
            Err(e) => {
                warn!("Cannot read page {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// Documents held in memory; the document at position `i` has ID `i + 1`
#[derive(Default, Clone)]
pub struct MemoryStore {
    documents: Vec<Document>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a document and returns its ID
    pub fn push(&mut self, document: Document) -> DocId {
        self.documents.push(document);
        self.documents.len() as DocId
    }
}

impl FromIterator<Document> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self {
            documents: iter.into_iter().collect(),
        }
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self, docid: DocId) -> Option<Document> {
        let ix = usize::try_from(docid).ok()?.checked_sub(1)?;
        self.documents.get(ix).cloned()
    }
}
