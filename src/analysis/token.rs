//! Token types for text analysis.
//!
//! A [`Token`] is a single word after analysis together with its zero-based
//! position in the token sequence of the text it came from.
//!
//! ```
//! use shabda::analysis::token::Token;
//!
//! let token = Token::new("राम", 0);
//! assert_eq!(token.text, "राम");
//! assert_eq!(token.position, 0);
//! ```

use serde::{Deserialize, Serialize};

/// A single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,
}

/// Type alias for a stream of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the number of characters (code points) in the token.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.text, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("सीता", 2);
        assert_eq!(token.text, "सीता");
        assert_eq!(token.position, 2);
        assert!(!token.is_empty());
    }

    #[test]
    fn test_char_count_differs_from_byte_len() {
        // स ी त ा: four code points, three bytes each
        let token = Token::new("सीता", 0);
        assert_eq!(token.char_count(), 4);
        assert_eq!(token.len(), 12);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::new("राम", 1).to_string(), "राम@1");
    }
}
