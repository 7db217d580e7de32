//! Lexer for query lines
//!
//! Splits a line on whitespace into words and the two boolean operators.

use super::QueryError;

/// Token types for query parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A (lower-cased) word
    Word(String),
    /// AND operator
    And,
    /// OR operator
    Or,
}

impl Token {
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::And | Token::Or)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Token::Word(word) => word,
            Token::And => "and",
            Token::Or => "or",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tokenizes a query line
///
/// Every character of a token must be an ASCII letter; tokens are lower-cased
/// before operators are recognized, so `AND` and `Or` are operators too.
pub fn tokenize(line: &str) -> Result<Vec<Token>, QueryError> {
    line.split_whitespace()
        .map(|raw| {
            if let Some(character) = raw.chars().find(|c| !c.is_ascii_alphabetic()) {
                return Err(QueryError::BadCharacter {
                    character,
                    word: raw.to_string(),
                });
            }
            let word = raw.to_ascii_lowercase();
            Ok(match word.as_str() {
                "and" => Token::And,
                "or" => Token::Or,
                _ => Token::Word(word),
            })
        })
        .collect()
}
