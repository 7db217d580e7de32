//! Boolean queries: words joined by (implicit) AND, and OR between clauses

pub mod lexer;
pub mod parser;

use serde::Serialize;
use thiserror::Error;

/// Syntax errors; the whole query is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("empty query")]
    Empty,

    #[error("bad character '{character}' in '{word}'")]
    BadCharacter { character: char, word: String },

    #[error("'{0}' cannot be first")]
    LeadingOperator(String),

    #[error("'{0}' cannot be last")]
    TrailingOperator(String),

    #[error("'{0}' and '{1}' cannot be adjacent")]
    AdjacentOperators(String, String),
}

/// A parsed query: a disjunction of clauses, each clause being a
/// conjunction of words
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    clauses: Vec<Vec<String>>,
    /// Normalized tokens, operators included
    #[serde(skip)]
    tokens: Vec<String>,
}

impl Query {
    /// Parses a query line
    pub fn parse(line: &str) -> Result<Query, QueryError> {
        Ok(parser::Parser::new(line)?.parse())
    }

    /// The OR-clauses, each one a non-empty list of words
    pub fn clauses(&self) -> &[Vec<String>] {
        &self.clauses
    }

    /// All the words of the query, in order
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.clauses.iter().flatten().map(|w| w.as_str())
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_normalized() {
        let query = Query::parse("  Quick   AND brown\tOR fox ").unwrap();
        assert_eq!(query.to_string(), "quick and brown or fox");
    }

    #[test]
    fn test_words() {
        let query = Query::parse("quick brown or fox").unwrap();
        assert_eq!(query.words().collect::<Vec<_>>(), vec!["quick", "brown", "fox"]);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            QueryError::LeadingOperator("and".to_string()).to_string(),
            "'and' cannot be first"
        );
        assert_eq!(
            QueryError::BadCharacter {
                character: '5',
                word: "cat5".to_string()
            }
            .to_string(),
            "bad character '5' in 'cat5'"
        );
    }
}
