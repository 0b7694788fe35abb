//! Rightmost phrase matching
//!
//! Every editing command acts on the occurrence of a phrase closest to the
//! caret, so the search runs from the end of the haystack backwards and the
//! first hit wins, whatever surrounds it. Matching is literal and case-insensitive. When words are
//! space-delimited a match must also sit on word boundaries at both ends,
//! so `a` never matches inside `square`.

/// Shape of a match around the phrase itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchVariant {
    /// The phrase alone
    Plain,
    /// One space followed by the phrase; the space is part of the match
    LeadingSpace,
    /// The phrase followed by one space; the space is part of the match
    TrailingSpace,
}

/// A matched range in chars, `start` inclusive and `end` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseMatch {
    /// First matched char
    pub start: usize,
    /// One past the last matched char
    pub end: usize,
}

/// Word chars for boundary detection: letters, digits and underscore
#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// True if a word boundary sits between `text[pos - 1]` and `text[pos]`
#[inline]
fn is_word_boundary(text: &[char], pos: usize) -> bool {
    let before = pos
        .checked_sub(1)
        .and_then(|i| text.get(i))
        .is_some_and(|&c| is_word_char(c));
    let after = text.get(pos).is_some_and(|&c| is_word_char(c));
    before != after
}

#[inline]
fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[inline]
fn phrase_at(text: &[char], start: usize, phrase: &[char]) -> bool {
    text[start..start + phrase.len()]
        .iter()
        .zip(phrase)
        .all(|(&a, &b)| eq_ignore_case(a, b))
}

/// Find the occurrence of `phrase` in `text` closest to the end of `text`
///
/// `word_boundaries` requires a word boundary at both ends of the phrase.
/// An empty phrase never matches. The space variants only widen that
/// closest occurrence: if it lacks the space, the result is `None`.
pub fn rightmost_match(
    text: &[char],
    phrase: &[char],
    variant: MatchVariant,
    word_boundaries: bool,
) -> Option<PhraseMatch> {
    if phrase.is_empty() || phrase.len() > text.len() {
        return None;
    }

    let start = (0..=text.len() - phrase.len()).rev().find(|&start| {
        let end = start + phrase.len();
        phrase_at(text, start, phrase)
            && (!word_boundaries || is_word_boundary(text, start) && is_word_boundary(text, end))
    })?;
    let end = start + phrase.len();

    match variant {
        MatchVariant::Plain => Some(PhraseMatch { start, end }),
        MatchVariant::LeadingSpace => (start > 0 && text[start - 1] == ' ').then(|| PhraseMatch {
            start: start - 1,
            end,
        }),
        MatchVariant::TrailingSpace => (text.get(end) == Some(&' ')).then(|| PhraseMatch {
            start,
            end: end + 1,
        }),
    }
}
