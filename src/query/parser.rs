//! Parser for query lines
//!
//! Grammar (AND binds tighter than OR, and is implicit between words):
//!
//! ```text
//! query  ::= clause ( "or" clause )*
//! clause ::= word ( "and"? word )*
//! ```

use super::lexer::{tokenize, Token};
use super::{Query, QueryError};

/// Parser over a validated token stream
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    /// Tokenizes and validates a query line
    pub fn new(line: &str) -> Result<Self, QueryError> {
        let tokens = tokenize(line)?;
        validate(&tokens)?;
        Ok(Self {
            tokens,
            position: 0,
        })
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.position);
        self.position += 1;
        token
    }

    /// Parses the whole query
    pub fn parse(mut self) -> Query {
        let mut clauses = vec![self.parse_clause()];
        while let Some(Token::Or) = self.peek() {
            self.advance();
            clauses.push(self.parse_clause());
        }
        Query {
            clauses,
            tokens: self.tokens.iter().map(|t| t.as_str().to_string()).collect(),
        }
    }

    fn parse_clause(&mut self) -> Vec<String> {
        let mut words = Vec::new();
        loop {
            match self.peek() {
                Some(Token::Word(word)) => {
                    words.push(word.clone());
                    self.advance();
                }
                Some(Token::And) => {
                    self.advance();
                }
                Some(Token::Or) | None => break,
            }
        }
        words
    }
}

/// Checks the operator placement rules
///
/// Operators cannot start or end a query, nor follow each other. Once this
/// holds, every clause has at least one word.
pub fn validate(tokens: &[Token]) -> Result<(), QueryError> {
    let first = tokens.first().ok_or(QueryError::Empty)?;
    if first.is_operator() {
        return Err(QueryError::LeadingOperator(first.to_string()));
    }

    for pair in tokens.windows(2) {
        if pair[0].is_operator() && pair[1].is_operator() {
            return Err(QueryError::AdjacentOperators(
                pair[0].to_string(),
                pair[1].to_string(),
            ));
        }
    }

    // Not empty (checked above)
    let last = &tokens[tokens.len() - 1];
    if last.is_operator() {
        return Err(QueryError::TrailingOperator(last.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clauses(line: &str) -> Vec<Vec<String>> {
        Query::parse(line).unwrap().clauses().to_vec()
    }

    fn v(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_single_word() {
        assert_eq!(clauses("Dog"), vec![v(&["dog"])]);
    }

    #[test]
    fn test_implicit_and() {
        assert_eq!(clauses("dog cat"), vec![v(&["dog", "cat"])]);
        assert_eq!(clauses("dog and cat"), clauses("dog cat"));
    }

    #[test]
    fn test_or_clauses() {
        assert_eq!(
            clauses("dog cat or mouse and rat or bird"),
            vec![v(&["dog", "cat"]), v(&["mouse", "rat"]), v(&["bird"])]
        );
    }

    #[test]
    fn test_operator_errors() {
        assert_eq!(
            Query::parse("and dog").unwrap_err(),
            QueryError::LeadingOperator("and".to_string())
        );
        assert_eq!(
            Query::parse("dog and").unwrap_err(),
            QueryError::TrailingOperator("and".to_string())
        );
        assert_eq!(
            Query::parse("dog and and cat").unwrap_err(),
            QueryError::AdjacentOperators("and".to_string(), "and".to_string())
        );
        assert_eq!(
            Query::parse("dog or and cat").unwrap_err(),
            QueryError::AdjacentOperators("or".to_string(), "and".to_string())
        );
        assert_eq!(
            Query::parse("OR").unwrap_err(),
            QueryError::LeadingOperator("or".to_string())
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(Query::parse("").unwrap_err(), QueryError::Empty);
        assert_eq!(Query::parse("  \t").unwrap_err(), QueryError::Empty);
    }

    #[test]
    fn test_bad_character_wins_over_grammar() {
        assert!(matches!(
            Query::parse("and dog!").unwrap_err(),
            QueryError::BadCharacter { character: '!', .. }
        ));
    }
}
