//! Property tests for the editing command invariants

use dictum_core::{
    nav_next_sentence, replace_phrase, select_between, smart_capitalization, smart_spacing,
};
use dictum_core::text::{char_to_utf16_offset, utf16_to_char_offset};
use proptest::prelude::*;

/// Space-separated sentences over a tiny vocabulary, so phrases repeat
fn sentence_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!["the", "cow", "moon", "is", "a", "test", ".", "!"]),
        0..16,
    )
    .prop_map(|words| words.join(" "))
}

/// Words joined by a mix of spaces, newlines and punctuation
fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (
            word(),
            prop::sample::select(vec![" ", "\n", " (", ", ", ") ", "\n("]),
        ),
        1..12,
    )
    .prop_map(|tokens| {
        let mut text = String::new();
        for (index, (word, separator)) in tokens.iter().enumerate() {
            if index > 0 {
                text.push_str(separator);
            }
            text.push_str(word);
        }
        text
    })
}

fn word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["the", "cow", "moon", "is", "a", "test"])
}

proptest! {
    #[test]
    fn replace_acts_on_closest_occurrence(text in sentence_text(), phrase in word()) {
        let len = text.chars().count() as i64;
        let result = replace_phrase(&text, len, phrase, "X", true);

        let words: Vec<&str> = text.split(' ').collect();
        match words.iter().rposition(|w| w.eq_ignore_ascii_case(phrase)) {
            Some(index) => {
                let mut expected = words.clone();
                expected[index] = "X";
                prop_assert_eq!(result.value, expected.join(" "));
            }
            None => {
                prop_assert_eq!(result.value, text);
                prop_assert_eq!(result.caret_index, len);
            }
        }
    }

    #[test]
    fn delete_acts_on_closest_occurrence(text in mixed_text(), phrase in word()) {
        let len = text.chars().count() as i64;
        let result = replace_phrase(&text, len, phrase, "", true);

        let occurrence = text
            .match_indices(phrase)
            .map(|(start, _)| start)
            .filter(|&start| {
                let end = start + phrase.len();
                let before = text[..start].chars().next_back();
                let after = text[end..].chars().next();
                !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
            })
            .last();
        match occurrence {
            Some(start) => {
                let end = start + phrase.len();
                let (start, end) = if text[..start].ends_with(' ') {
                    (start - 1, end)
                } else if text[end..].starts_with(' ') {
                    (start, end + 1)
                } else {
                    (start, end)
                };
                let expected = format!("{}{}", &text[..start], &text[end..]);
                prop_assert_eq!(result.value, expected);
                prop_assert_eq!(result.caret_index, start as i64);
            }
            None => {
                prop_assert_eq!(result.value, text);
                prop_assert_eq!(result.caret_index, len);
            }
        }
    }

    #[test]
    fn replace_never_touches_text_right_of_caret(
        text in sentence_text(),
        phrase in word(),
        caret in 0usize..80,
    ) {
        let chars: Vec<char> = text.chars().collect();
        let caret = caret.min(chars.len());
        let right: String = chars[caret..].iter().collect();

        let result = replace_phrase(&text, caret as i64, phrase, "", true);
        prop_assert!(result.value.ends_with(&right));
        prop_assert!(result.caret_index <= caret as i64);
    }

    #[test]
    fn selection_is_ordered(
        text in sentence_text(),
        start in word(),
        end in word(),
        caret in -5i64..80,
    ) {
        if let Some(range) = select_between(&text, caret, start, end, true) {
            prop_assert!(range.start <= range.end);
            prop_assert!(range.end as i64 <= caret.max(0));
        }
    }

    #[test]
    fn next_sentence_advances_to_end(text in sentence_text(), caret in 0usize..80) {
        let len = text.chars().count();
        let caret = caret.min(len);
        let next = nav_next_sentence(&text, caret as i64);
        prop_assert!(next >= caret);
        prop_assert!(next <= len);
        prop_assert_eq!(nav_next_sentence(&text, len as i64), len);
    }

    #[test]
    fn spacing_never_doubles_spaces(
        text in sentence_text(),
        commit in "[a-z]{1,8}( [a-z]{1,8})?",
    ) {
        let value = format!("{text} ");
        let caret = value.chars().count() as i64;
        let spaced = smart_spacing(&value, caret, &commit);
        prop_assert!(!spaced.starts_with(' '));
        prop_assert_eq!(spaced, commit);
    }

    #[test]
    fn capitalization_keeps_punctuated_text(
        text in sentence_text(),
        commit in "[.,!?;:][a-zA-Z ]{0,8}",
        caret in 0i64..80,
    ) {
        prop_assert_eq!(smart_capitalization(&text, caret, &commit), commit);
    }

    #[test]
    fn utf16_offsets_round_trip(text in "[a-zé私\u{1F600}]{0,12}", offset in 0usize..16) {
        let offset = offset.min(text.chars().count());
        let utf16 = char_to_utf16_offset(&text, offset);
        prop_assert_eq!(utf16_to_char_offset(&text, utf16), offset);
    }
}
