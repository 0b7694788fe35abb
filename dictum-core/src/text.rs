//! Char-indexed view of a text buffer and caret helpers
//!
//! The engine addresses text by char offsets. For text inside the Basic
//! Multilingual Plane these equal UTF-16 code-unit offsets; callers that
//! hold real UTF-16 offsets convert with [`utf16_to_char_offset`] and
//! [`char_to_utf16_offset`].

use crate::types::CaretIndex;

/// A text buffer split into chars for index arithmetic
#[derive(Debug, Clone)]
pub struct CharBuffer {
    chars: Vec<char>,
}

impl CharBuffer {
    /// Split `text` into chars
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// Number of chars
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True if the buffer holds no chars
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// All chars
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Char at `index`, if any
    #[inline]
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Clamp a caller-supplied caret into `0..=len`
    pub fn clamp_caret(&self, caret_index: CaretIndex) -> usize {
        clamp_caret(caret_index, self.len())
    }

    /// Chars left of the clamped caret and chars from it onwards
    pub fn split_at_caret(&self, caret_index: CaretIndex) -> (&[char], &[char]) {
        self.chars.split_at(self.clamp_caret(caret_index))
    }
}

/// Clamp `caret_index` into `0..=len`
///
/// A negative caret behaves as "nothing left of the caret", a caret past
/// the end behaves as "caret at end".
#[inline]
pub fn clamp_caret(caret_index: CaretIndex, len: usize) -> usize {
    if caret_index <= 0 {
        0
    } else {
        usize::try_from(caret_index).map_or(len, |index| index.min(len))
    }
}

/// Convert a char offset to the caret type, saturating on overflow
#[inline]
pub fn to_caret(index: usize) -> CaretIndex {
    CaretIndex::try_from(index).unwrap_or(CaretIndex::MAX)
}

/// Trim leading and trailing whitespace from a slice of chars
pub(crate) fn trim_chars(chars: &[char]) -> &[char] {
    let start = chars
        .iter()
        .position(|c| !c.is_whitespace())
        .unwrap_or(chars.len());
    let end = chars
        .iter()
        .rposition(|c| !c.is_whitespace())
        .map_or(start, |i| i + 1);
    &chars[start..end]
}

/// Convert a UTF-16 code-unit offset into a char offset
///
/// An offset that lands inside a surrogate pair maps to the char that pair
/// encodes; offsets past the end map to the char length.
pub fn utf16_to_char_offset(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (index, ch) in text.chars().enumerate() {
        units += ch.len_utf16();
        if units > utf16_offset {
            return index;
        }
    }
    text.chars().count()
}

/// Convert a char offset into a UTF-16 code-unit offset
pub fn char_to_utf16_offset(text: &str, char_offset: usize) -> usize {
    text.chars().take(char_offset).map(char::len_utf16).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_caret() {
        assert_eq!(clamp_caret(-1, 10), 0);
        assert_eq!(clamp_caret(0, 10), 0);
        assert_eq!(clamp_caret(4, 10), 4);
        assert_eq!(clamp_caret(10, 10), 10);
        assert_eq!(clamp_caret(29, 10), 10);
        assert_eq!(clamp_caret(CaretIndex::MAX, 3), 3);
    }

    #[test]
    fn test_to_caret_saturates() {
        assert_eq!(to_caret(0), 0);
        assert_eq!(to_caret(42), 42);
        assert_eq!(to_caret(usize::MAX), CaretIndex::MAX);
    }

    #[test]
    fn test_split_at_caret() {
        let buffer = CharBuffer::new("日本語です");
        let (left, right) = buffer.split_at_caret(3);
        assert_eq!(left.iter().collect::<String>(), "日本語");
        assert_eq!(right.iter().collect::<String>(), "です");

        let (left, right) = buffer.split_at_caret(-5);
        assert!(left.is_empty());
        assert_eq!(right.len(), 5);
    }

    #[test]
    fn test_trim_chars() {
        let chars: Vec<char> = "  hello world \n".chars().collect();
        assert_eq!(trim_chars(&chars).iter().collect::<String>(), "hello world");

        let blank: Vec<char> = "   ".chars().collect();
        assert!(trim_chars(&blank).is_empty());
        assert!(trim_chars(&[]).is_empty());
    }

    #[test]
    fn test_utf16_offsets_bmp_text() {
        let text = "私はテニスが好きです。";
        assert_eq!(utf16_to_char_offset(text, 11), 11);
        assert_eq!(char_to_utf16_offset(text, 11), 11);
    }

    #[test]
    fn test_utf16_offsets_astral_text() {
        // U+1F600 is a surrogate pair in UTF-16
        let text = "a\u{1F600}b";
        assert_eq!(char_to_utf16_offset(text, 0), 0);
        assert_eq!(char_to_utf16_offset(text, 1), 1);
        assert_eq!(char_to_utf16_offset(text, 2), 3);
        assert_eq!(char_to_utf16_offset(text, 3), 4);

        assert_eq!(utf16_to_char_offset(text, 0), 0);
        assert_eq!(utf16_to_char_offset(text, 1), 1);
        assert_eq!(utf16_to_char_offset(text, 2), 1);
        assert_eq!(utf16_to_char_offset(text, 3), 2);
        assert_eq!(utf16_to_char_offset(text, 4), 3);
        assert_eq!(utf16_to_char_offset(text, 99), 3);
    }
}
