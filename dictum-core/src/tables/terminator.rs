//! Terminator and punctuation lookup with an ASCII fast path.

/// Characters that end a sentence for navigation and capitalization.
///
/// The full-width forms matter for CJK text, where no space follows the
/// terminator and ASCII-only detection would miss every boundary.
pub const SENTENCE_TERMINATOR_CHARS: &[char] = &[';', '!', '.', '?', '。', '．', '？', '！'];

/// Non-ASCII punctuation recognized in addition to ASCII punctuation.
pub const WIDE_PUNCTUATION_CHARS: &[char] = &[
    '。', '．', '？', '！', '、', '，', '；', '：', '「', '」', '『', '』', '（', '）', '【', '】',
    '〜', '・', '…', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}',
];

/// Sentence terminator table
pub static SENTENCE_TERMINATORS: CharTable = CharTable::new(SENTENCE_TERMINATOR_CHARS);

/// Punctuation table: all ASCII punctuation plus [`WIDE_PUNCTUATION_CHARS`]
pub static PUNCTUATION: CharTable =
    CharTable::new(WIDE_PUNCTUATION_CHARS).with_ascii_punctuation();

/// Fast character membership table
#[derive(Debug, Clone, Copy)]
pub struct CharTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// Non-ASCII members (short, scanned linearly)
    non_ascii: &'static [char],
}

impl CharTable {
    /// Create from a list of member characters
    pub const fn new(chars: &'static [char]) -> Self {
        let mut ascii_table = [false; 128];
        let mut i = 0;
        while i < chars.len() {
            let code = chars[i] as u32;
            if code < 128 {
                ascii_table[code as usize] = true;
            }
            i += 1;
        }

        Self {
            ascii_table,
            non_ascii: chars,
        }
    }

    /// Add every ASCII punctuation character to the table
    pub const fn with_ascii_punctuation(mut self) -> Self {
        let mut code = 0u8;
        while code < 128 {
            if code.is_ascii_punctuation() {
                self.ascii_table[code as usize] = true;
            }
            code += 1;
        }
        self
    }

    /// Check membership - hot path
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }
}

/// True if `ch` ends a sentence
#[inline]
pub fn is_sentence_terminator(ch: char) -> bool {
    SENTENCE_TERMINATORS.contains(ch)
}

/// True if `ch` is punctuation
#[inline]
pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminator_lookup() {
        // ASCII fast path
        assert!(is_sentence_terminator('.'));
        assert!(is_sentence_terminator('!'));
        assert!(is_sentence_terminator('?'));
        assert!(is_sentence_terminator(';'));
        assert!(!is_sentence_terminator(','));
        assert!(!is_sentence_terminator(':'));

        // Full-width forms
        assert!(is_sentence_terminator('。'));
        assert!(is_sentence_terminator('．'));
        assert!(is_sentence_terminator('！'));
        assert!(is_sentence_terminator('？'));
        assert!(!is_sentence_terminator('、'));
    }

    #[test]
    fn test_punctuation_lookup() {
        for ch in ['.', ',', '-', '"', '(', ')', '@', '_', '~'] {
            assert!(is_punctuation(ch), "{ch:?} should be punctuation");
        }
        for ch in ['a', 'Z', '0', ' ', '\n', 'é', 'テ'] {
            assert!(!is_punctuation(ch), "{ch:?} should not be punctuation");
        }
        assert!(is_punctuation('、'));
        assert!(is_punctuation('「'));
    }

    #[test]
    fn test_ascii_only_table_ignores_punctuation_without_flag() {
        let table = CharTable::new(&['x', 'ü']);
        assert!(table.contains('x'));
        assert!(table.contains('ü'));
        assert!(!table.contains('.'));
    }
}
