//! Editing commands over a text buffer and a caret
//!
//! Every operation is a pure function of the buffer, the caret and the
//! phrases involved. Nothing here fails: a phrase that cannot be found
//! leaves the buffer untouched, and out-of-range carets are clamped.
//!
//! The free functions take the locale spacing flag explicitly;
//! [`TextEditingEngine`] asks a [`SpacingPolicy`] for it on every call.

use crate::language::{SpaceDelimited, SpacingPolicy};
use crate::matcher::{rightmost_match, MatchVariant, PhraseMatch};
use crate::tables::terminator::{is_punctuation, is_sentence_terminator};
use crate::text::{to_caret, trim_chars, CharBuffer};
use crate::types::{CaretIndex, EditResult, SelectionRange};

/// Replace the occurrence of `delete_phrase` closest to the left of the
/// caret with `insert_phrase`
///
/// An empty `insert_phrase` deletes the phrase together with one adjacent
/// space (the one before it if present, otherwise the one after it). When
/// nothing matches, the original value and the caller's caret are returned
/// as given, even if the caret was out of range.
pub fn replace_phrase(
    value: &str,
    caret_index: CaretIndex,
    delete_phrase: &str,
    insert_phrase: &str,
    consider_spaces: bool,
) -> EditResult {
    let buffer = CharBuffer::new(value);
    let (left, right) = buffer.split_at_caret(caret_index);
    let delete: Vec<char> = delete_phrase.trim().chars().collect();
    let insert = insert_phrase.trim();
    let performing_delete = insert.is_empty();

    let find = |variant| rightmost_match(left, &delete, variant, consider_spaces);
    let found = performing_delete
        .then(|| find(MatchVariant::LeadingSpace).or_else(|| find(MatchVariant::TrailingSpace)))
        .flatten()
        .or_else(|| find(MatchVariant::Plain));

    let Some(found) = found else {
        tracing::trace!(phrase = delete_phrase, "replace: phrase not found left of caret");
        return EditResult::unchanged(value, caret_index);
    };

    tracing::debug!(
        start = found.start,
        end = found.end,
        performing_delete,
        "replace: matched phrase"
    );
    splice(left, right, found, insert)
}

/// Insert `insert_phrase` right before the occurrence of `before_phrase`
/// closest to the left of the caret
///
/// The two phrases are joined by a space in space-delimited locales and
/// directly otherwise. The caret lands just after the inserted phrase.
pub fn insert_before(
    value: &str,
    caret_index: CaretIndex,
    insert_phrase: &str,
    before_phrase: &str,
    consider_spaces: bool,
) -> EditResult {
    let buffer = CharBuffer::new(value);
    let (left, right) = buffer.split_at_caret(caret_index);
    let before_phrase = before_phrase.trim();
    let insert_phrase = insert_phrase.trim();
    let before: Vec<char> = before_phrase.chars().collect();

    let Some(found) = rightmost_match(left, &before, MatchVariant::Plain, consider_spaces) else {
        tracing::trace!(phrase = before_phrase, "insert: anchor phrase not found left of caret");
        return EditResult::unchanged(value, caret_index);
    };

    let separator = if consider_spaces { " " } else { "" };
    let replacement = format!("{insert_phrase}{separator}{before_phrase}");
    let mut result = splice(left, right, found, &replacement);
    result.caret_index = to_caret(found.start + insert_phrase.chars().count());
    result
}

/// Select from `start_phrase` through `end_phrase`, both taken as the
/// occurrences closest to the left of the caret
///
/// Returns `None` if either phrase is missing or the start phrase lies
/// after the end phrase. Both phrases may be the same.
pub fn select_between(
    value: &str,
    caret_index: CaretIndex,
    start_phrase: &str,
    end_phrase: &str,
    consider_spaces: bool,
) -> Option<SelectionRange> {
    let buffer = CharBuffer::new(value);
    let (left, _) = buffer.split_at_caret(caret_index);
    let start: Vec<char> = start_phrase.trim().chars().collect();
    let end: Vec<char> = end_phrase.trim().chars().collect();

    let start = rightmost_match(left, &start, MatchVariant::Plain, consider_spaces)?;
    let end = rightmost_match(left, &end, MatchVariant::Plain, consider_spaces)?;
    let range = SelectionRange::new(start.start, end.end);
    if range.is_none() {
        tracing::trace!(
            start = start.start,
            end = end.end,
            "select: start phrase lies after end phrase"
        );
    }
    range
}

/// Offset of the start of the sentence after the caret
///
/// That is the position just past the first sentence terminator at or
/// after the caret, or the end of the text if there is none.
pub fn nav_next_sentence(value: &str, caret_index: CaretIndex) -> usize {
    let buffer = CharBuffer::new(value);
    let caret = buffer.clamp_caret(caret_index);
    buffer.chars()[caret..]
        .iter()
        .position(|&ch| is_sentence_terminator(ch))
        .map_or(buffer.len(), |offset| caret + offset + 1)
}

/// Offset of the start of the sentence holding the caret
///
/// Scans backwards for a sentence terminator that has real text (anything
/// but whitespace and punctuation) after it. A caret at the end of the
/// text starts from the last char. Returns 0 when no such terminator
/// exists.
pub fn nav_prev_sentence(value: &str, caret_index: CaretIndex) -> usize {
    let buffer = CharBuffer::new(value);
    let mut caret = buffer.clamp_caret(caret_index);
    if caret == buffer.len() {
        let Some(last) = caret.checked_sub(1) else {
            return 0;
        };
        caret = last;
    }

    let chars = buffer.chars();
    let mut encountered_text = false;
    for index in (0..=caret).rev() {
        let ch = chars[index];
        if encountered_text && is_sentence_terminator(ch) {
            return if buffer.get(index + 1).is_some_and(char::is_whitespace) {
                index + 1
            } else {
                index
            };
        }
        if !ch.is_whitespace() && !is_punctuation(ch) {
            encountered_text = true;
        }
    }
    0
}

/// Pad `commit_text` with spaces so it does not run into its neighbours
///
/// Text that already starts with whitespace or punctuation is trusted as
/// formatted and returned unchanged, as is anything committed into an
/// empty field. Empty or blank `commit_text` is returned as-is, never
/// turned into a lone space.
pub fn smart_spacing(value: &str, caret_index: CaretIndex, commit_text: &str) -> String {
    if value.is_empty() || commit_text.trim().is_empty() {
        return commit_text.to_string();
    }
    if commit_text
        .chars()
        .next()
        .is_some_and(|ch| ch.is_whitespace() || is_punctuation(ch))
    {
        return commit_text.to_string();
    }

    let buffer = CharBuffer::new(value);
    let (left, right) = buffer.split_at_caret(caret_index);
    let mut result = String::with_capacity(commit_text.len() + 2);

    if left.last().is_some_and(|ch| !ch.is_whitespace()) {
        result.push(' ');
    }
    result.push_str(commit_text.trim());
    if right
        .first()
        .is_some_and(|&ch| !ch.is_whitespace() || is_punctuation(ch))
    {
        result.push(' ');
    }
    result
}

/// Capitalize or lowercase the first char of `commit_text` to fit the
/// sentence it lands in
///
/// The first char is capitalized at the start of the field or after a
/// sentence terminator and lowercased anywhere else. Text starting with
/// punctuation is returned unchanged.
pub fn smart_capitalization(value: &str, caret_index: CaretIndex, commit_text: &str) -> String {
    if commit_text.chars().next().is_some_and(is_punctuation) {
        return commit_text.to_string();
    }
    if value.is_empty() {
        return capitalize_first(commit_text);
    }

    let buffer = CharBuffer::new(value);
    let (left, _) = buffer.split_at_caret(caret_index);
    match trim_chars(left).last() {
        None => capitalize_first(commit_text),
        Some(&ch) if is_sentence_terminator(ch) => capitalize_first(commit_text),
        Some(_) => lowercase_first(commit_text),
    }
}

/// Prepare recognized text for committing at the caret
///
/// Applies [`smart_capitalization`], then [`smart_spacing`] when the
/// locale separates words with spaces.
pub fn commit_text(
    value: &str,
    caret_index: CaretIndex,
    commit_text: &str,
    consider_spaces: bool,
) -> String {
    let capitalized = smart_capitalization(value, caret_index, commit_text);
    if consider_spaces {
        smart_spacing(value, caret_index, &capitalized)
    } else {
        capitalized
    }
}

/// Rebuild the buffer with `found` (a range of `left`) replaced
fn splice(left: &[char], right: &[char], found: PhraseMatch, replacement: &str) -> EditResult {
    let mut value = String::with_capacity((left.len() + right.len()) * 4 + replacement.len());
    value.extend(&left[..found.start]);
    value.push_str(replacement);
    value.extend(&left[found.end..]);
    value.extend(right);
    EditResult::new(value, to_caret(found.start + replacement.chars().count()))
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Editing commands bound to a spacing policy
///
/// The policy is consulted on every call, so a shared, reconfigurable
/// policy takes effect immediately.
#[derive(Debug, Clone, Default)]
pub struct TextEditingEngine<P = SpaceDelimited> {
    policy: P,
}

impl<P: SpacingPolicy> TextEditingEngine<P> {
    /// Create an engine using `policy`
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    /// The spacing policy
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// See [`replace_phrase`]
    pub fn replace_phrase(
        &self,
        value: &str,
        caret_index: CaretIndex,
        delete_phrase: &str,
        insert_phrase: &str,
    ) -> EditResult {
        replace_phrase(
            value,
            caret_index,
            delete_phrase,
            insert_phrase,
            self.policy.consider_spaces(),
        )
    }

    /// See [`insert_before`]
    pub fn insert_before(
        &self,
        value: &str,
        caret_index: CaretIndex,
        insert_phrase: &str,
        before_phrase: &str,
    ) -> EditResult {
        insert_before(
            value,
            caret_index,
            insert_phrase,
            before_phrase,
            self.policy.consider_spaces(),
        )
    }

    /// See [`select_between`]
    pub fn select_between(
        &self,
        value: &str,
        caret_index: CaretIndex,
        start_phrase: &str,
        end_phrase: &str,
    ) -> Option<SelectionRange> {
        select_between(
            value,
            caret_index,
            start_phrase,
            end_phrase,
            self.policy.consider_spaces(),
        )
    }

    /// See [`nav_next_sentence`]
    pub fn nav_next_sentence(&self, value: &str, caret_index: CaretIndex) -> usize {
        nav_next_sentence(value, caret_index)
    }

    /// See [`nav_prev_sentence`]
    pub fn nav_prev_sentence(&self, value: &str, caret_index: CaretIndex) -> usize {
        nav_prev_sentence(value, caret_index)
    }

    /// See [`smart_spacing`]
    pub fn smart_spacing(&self, value: &str, caret_index: CaretIndex, commit_text: &str) -> String {
        smart_spacing(value, caret_index, commit_text)
    }

    /// See [`smart_capitalization`]
    pub fn smart_capitalization(
        &self,
        value: &str,
        caret_index: CaretIndex,
        commit_text: &str,
    ) -> String {
        smart_capitalization(value, caret_index, commit_text)
    }

    /// See [`commit_text`]
    pub fn commit_text(&self, value: &str, caret_index: CaretIndex, text: &str) -> String {
        commit_text(value, caret_index, text, self.policy.consider_spaces())
    }
}
