//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};

/// A tokenizer that splits text on runs of Unicode whitespace.
///
/// Empty pieces are never produced, so leading, trailing and repeated
/// whitespace do not consume positions.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let tokens: Vec<Token> = text
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest").collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], Token::new("hello", 0));
        assert_eq!(tokens[1], Token::new("world", 1));
        assert_eq!(tokens[2], Token::new("test", 2));
    }

    #[test]
    fn test_unicode_whitespace() {
        let tokenizer = WhitespaceTokenizer::new();
        // no-break space and ideographic space
        let tokens: Vec<Token> = tokenizer.tokenize("राम\u{00A0}सीता\u{3000}गीता").collect();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].text, "गीता");
    }

    #[test]
    fn test_blank_input() {
        let tokenizer = WhitespaceTokenizer::new();
        assert_eq!(tokenizer.tokenize("").count(), 0);
        assert_eq!(tokenizer.tokenize(" \n\t ").count(), 0);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
