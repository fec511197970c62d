//! Word roots and circular definition detection
//!
//! A definition is circular when it gives the answer away: it contains the word
//! itself, or another form of it that shares the same suffix-stripped root.

/// Suffixes stripped when looking for a root, longest first
const SUFFIXES: &[&str] = &[
    "tion", "sion", "ness", "ment", "less", "able", "ible", "ing", "est", "ity", "ous", "ful",
    "ize", "ise", "ies", "ed", "er", "ly", "es", "s",
];

/// Shortest stem left after stripping a suffix
const MIN_STEM_LEN: usize = 3;

/// Shortest root that counts as a match between two different word forms
pub const MIN_ROOT_LEN: usize = 4;

/// Strip the first matching suffix from a lowercased word
///
/// # Examples
/// ```
/// use clue_budget::dataset::roots::word_root;
///
/// assert_eq!(word_root("Printing"), "print");
/// assert_eq!(word_root("boxes"), "box");
/// assert_eq!(word_root("stories"), "story");
/// assert_eq!(word_root("cat"), "cat");
/// ```
#[must_use]
pub fn word_root(word: &str) -> String {
    let word = word.trim().to_lowercase();

    for suffix in SUFFIXES {
        let Some(stem) = word.strip_suffix(suffix) else {
            continue;
        };
        if stem.chars().count() < MIN_STEM_LEN {
            continue;
        }
        match *suffix {
            "ies" => return format!("{stem}y"),
            // Plain "s" handles "makes" -> "make"
            "es" if !is_sibilant_stem(stem) => {}
            _ => return stem.to_string(),
        }
    }

    word
}

fn is_sibilant_stem(stem: &str) -> bool {
    ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|ending| stem.ends_with(ending))
}

/// Lowercased alphabetic tokens of a text
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}

/// First token of `text` that gives `word` away, if any
///
/// # Examples
/// ```
/// use clue_budget::dataset::roots::revealing_token;
///
/// assert_eq!(revealing_token("printer", "A machine used for printing"), Some("printing".to_string()));
/// assert_eq!(revealing_token("harbor", "A sheltered place for ships"), None);
/// ```
#[must_use]
pub fn revealing_token(word: &str, text: &str) -> Option<String> {
    let word = word.trim().to_lowercase();
    let root = word_root(&word);
    let match_roots = root.chars().count() >= MIN_ROOT_LEN;

    tokens(text).find(|token| *token == word || (match_roots && word_root(token) == root))
}

/// Whether a definition contains the word or a form sharing its root
#[must_use]
pub fn is_circular(word: &str, definition: &str) -> bool {
    revealing_token(word, definition).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_strips_longest_suffix_first() {
        assert_eq!(word_root("development"), "develop");
        assert_eq!(word_root("kindness"), "kind");
        assert_eq!(word_root("walked"), "walk");
        assert_eq!(word_root("quickly"), "quick");
    }

    #[test]
    fn root_keeps_short_stems() {
        // Stripping would leave fewer than three letters
        assert_eq!(word_root("being"), "being");
        assert_eq!(word_root("bed"), "bed");
        assert_eq!(word_root("is"), "is");
    }

    #[test]
    fn root_handles_es_plurals() {
        assert_eq!(word_root("churches"), "church");
        assert_eq!(word_root("wishes"), "wish");
        assert_eq!(word_root("makes"), "make");
    }

    #[test]
    fn tokens_split_on_punctuation() {
        let found: Vec<String> = tokens("A well-known, OLD place.").collect();
        assert_eq!(found, vec!["a", "well", "known", "old", "place"]);
    }

    #[test]
    fn exact_word_is_circular_regardless_of_length() {
        assert!(is_circular("law", "A rule made by law makers"));
        assert!(is_circular("Law", "LAW and order"));
    }

    #[test]
    fn shared_root_is_circular() {
        assert!(is_circular("walking", "The act of going for a walk"));
        assert!(is_circular("teacher", "One who teaches"));
        assert!(is_circular("kindness", "The quality of being kind"));
    }

    #[test]
    fn short_roots_only_match_exactly() {
        // "forest" strips to "for", too short to compare by root
        assert!(!is_circular("forest", "A large area covered with trees, good for hiking"));
    }

    #[test]
    fn unrelated_definition_is_clean() {
        assert!(!is_circular("harbor", "A sheltered place where ships anchor"));
        assert!(!is_circular("lantern", "A portable case protecting a flame"));
    }

    #[test]
    fn substring_is_not_a_match() {
        assert!(!is_circular("art", "A party with friends"));
    }
}
