//! Inverted index over a directory of crawled pages, with a boolean
//! (AND / OR) query engine ranking documents by word frequency.

pub mod base;
pub mod builder;
pub mod documents;
pub mod error;
pub mod index;
pub mod query;
pub mod search;
pub mod utils;

pub use error::{Error, Result};
