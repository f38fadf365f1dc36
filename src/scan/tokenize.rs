//! Rule-based word tokenizer.
//!
//! Splits on whitespace and on punctuation that cannot appear inside a host
//! name, then trims sentence punctuation from both ends of each word. Dots,
//! hyphens, slashes, colons and `@` inside a word are kept, so
//! `"gists.github.com,"` yields `gists.github.com`.

use std::ops::Range;

/// A word of the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    /// Word text, punctuation trimmed
    pub text: &'a str,
    /// True when the word is a URL found by the URL pattern
    pub is_url: bool,
}

fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            ',' | ';' | '!' | '"' | '(' | ')' | '[' | ']' | '{' | '}' | '<' | '>' | '|'
                | '«' | '»' | '“' | '”' | '‘' | '’' | '`'
        )
}

fn is_edge_punctuation(c: char) -> bool {
    matches!(c, '.' | ':' | '?' | '\'' | '*' | '_' | '-' | '/' | '@' | '#' | '&' | '=')
}

/// Splits `text` into words.
pub(crate) fn tokenize(text: &str) -> Vec<&str> {
    text.split(is_separator)
        .map(|word| word.trim_matches(is_edge_punctuation))
        .filter(|word| !word.is_empty())
        .collect()
}

/// Splits `text` into words, keeping each range in `urls` as one URL token.
///
/// `urls` must be sorted and non-overlapping, as returned by the URL pattern.
pub(crate) fn tokenize_with_urls<'a>(text: &'a str, urls: &[Range<usize>]) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    let mut cursor = 0;
    for range in urls {
        tokens.extend(tokenize(&text[cursor..range.start]).into_iter().map(|text| Token {
            text,
            is_url: false,
        }));
        tokens.push(Token {
            text: &text[range.clone()],
            is_url: true,
        });
        cursor = range.end;
    }
    tokens.extend(tokenize(&text[cursor..]).into_iter().map(|text| Token {
        text,
        is_url: false,
    }));
    tokens
}
