//! Byte-level word tokenizer
//!
//! A token is a maximal run of ASCII letters, folded to lowercase. Every other
//! byte (digits, punctuation, whitespace, non-ASCII) ends the current token.

/// Lazy iterator over the lowercase tokens of a byte buffer
///
/// The iterator is `Clone`, so a sequence can be restarted from any point by
/// cloning it, or from the start by calling [`tokenize`] again.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    bytes: &'a [u8],
    pos: usize,
}

/// Tokenize a byte buffer
pub fn tokenize(bytes: &[u8]) -> Tokens<'_> {
    Tokens { bytes, pos: 0 }
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let bytes = self.bytes;
        let rest = &bytes[self.pos..];

        let start = rest.iter().position(u8::is_ascii_alphabetic)?;
        let len = rest[start..]
            .iter()
            .position(|b| !b.is_ascii_alphabetic())
            .unwrap_or(rest.len() - start);

        self.pos += start + len;

        let word = rest[start..start + len]
            .iter()
            .map(|b| b.to_ascii_lowercase() as char)
            .collect();
        Some(word)
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
