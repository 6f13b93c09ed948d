//! Pure validation: alphabet membership and letter-multiset checks.
//!
//! Both functions are stateless and allocate nothing across calls; each
//! check recomputes from its inputs, so results are idempotent.

use super::types::Language;
use std::collections::HashMap;

/// Checks that every character of `s` belongs to `language`'s alphabet.
///
/// Callers are expected to lowercase input first; uppercase letters,
/// digits, punctuation, and letters from the other alphabet all reject
/// the whole string. Empty strings are rejected.
pub fn fits_alphabet(s: &str, language: Language) -> bool {
    if s.is_empty() {
        return false;
    }

    match language {
        Language::Russian => s.chars().all(|c| ('а'..='я').contains(&c) || c == 'ё'),
        Language::English => s.chars().all(|c| c.is_ascii_lowercase()),
    }
}

/// Checks that `word` can be assembled from the letters of `base`,
/// respecting multiplicity: a word needing two 'о' requires the base
/// word to contain at least two 'о'.
///
/// Builds a fresh letter-count map from `base` on every call and
/// consumes it over `word`'s characters, bailing out on the first
/// letter that is missing or exhausted. Base words are at most 30
/// letters, so recomputing the map is cheap.
pub fn can_form_from(word: &str, base: &str) -> bool {
    let mut remaining: HashMap<char, usize> = HashMap::new();
    for c in base.chars() {
        *remaining.entry(c).or_insert(0) += 1;
    }

    for c in word.chars() {
        match remaining.get_mut(&c) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }

    true
}
