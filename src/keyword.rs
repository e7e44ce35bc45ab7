//! Turning raw tokens into keywords.
//!
//! A keyword is a token that, after its trailing punctuation is stripped,
//! consists only of letters and is not a noise word. Keywords are always
//! lower case.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{LseErrorKind, LseResult};

/// A normalized keyword: lower case, letters only, never a noise word.
pub type Keyword = String;

/// The only characters stripped from the end of a token.
const PUNCTUATION: [char; 6] = ['.', ',', '?', ':', ';', '!'];

/// The set of noise words (stop words) excluded from indexing.
///
/// Entries are stored lower case. The set never changes after it is loaded.
#[derive(Debug, Clone, Default)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    /// An empty set: every well-formed token is a keyword.
    pub fn new() -> NoiseWords {
        NoiseWords::default()
    }

    /// Load noise words from a file containing whitespace-separated words.
    pub fn load<P: AsRef<Path>>(path: P) -> LseResult<NoiseWords> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| {
            LseErrorKind::NoiseWordsUnavailable {
                path: path.display().to_string(),
                source,
            }
        })?;
        Ok(text.split_whitespace().collect())
    }

    /// True if `word` (already lower case) is a noise word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct noise words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if there are no noise words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for NoiseWords {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> NoiseWords {
        NoiseWords {
            words: iter.into_iter().map(str::to_lowercase).collect(),
        }
    }
}

/// Return `token` as a keyword, or `None` if it is not one.
///
/// Trailing punctuation (`. , ? : ; !`, any number of them) is stripped
/// first. Any other character that is not a letter, anywhere in what is
/// left, disqualifies the token: `"don't"`, `"x-ray"` and `"(word)"` are
/// not keywords. The comparison against `noise` is case-insensitive.
pub fn normalize(token: &str, noise: &NoiseWords) -> Option<Keyword> {
    let stripped = token.trim_end_matches(PUNCTUATION);
    if stripped.is_empty() || !stripped.chars().all(char::is_alphabetic) {
        return None;
    }

    // Some letters lower-case to a letter plus a combining mark ("İ").
    let keyword = stripped.to_lowercase();
    if !keyword.chars().all(char::is_alphabetic) || noise.contains(&keyword) {
        None
    } else {
        Some(keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn noise() -> NoiseWords {
        ["a", "the", "And", "of"].into_iter().collect()
    }

    #[test]
    fn strips_repeated_trailing_punctuation() {
        let noise = noise();
        assert_eq!(normalize("Deep!!", &noise).as_deref(), Some("deep"));
        assert_eq!(normalize("word?!?!", &noise).as_deref(), Some("word"));
        assert_eq!(normalize("end.", &noise).as_deref(), Some("end"));
        assert_eq!(normalize("list:;,", &noise).as_deref(), Some("list"));
    }

    #[test]
    fn rejects_inner_non_letters() {
        let noise = noise();
        assert_eq!(normalize("don't", &noise), None);
        assert_eq!(normalize("x-ray", &noise), None);
        assert_eq!(normalize("abc123", &noise), None);
        assert_eq!(normalize("a.b", &noise), None);
    }

    #[test]
    fn rejects_trailing_characters_outside_the_punctuation_set() {
        let noise = noise();
        assert_eq!(normalize("word)", &noise), None);
        assert_eq!(normalize("quoted\"", &noise), None);
        assert_eq!(normalize("hello!\"", &noise), None);
        assert_eq!(normalize("(word", &noise), None);
    }

    #[test]
    fn rejects_empty_and_punctuation_only() {
        let noise = noise();
        assert_eq!(normalize("", &noise), None);
        assert_eq!(normalize("?!", &noise), None);
    }

    #[test]
    fn rejects_letters_that_lower_case_to_a_combining_mark() {
        let noise = noise();
        assert_eq!(normalize("İstanbul", &noise), None);
        assert_eq!(normalize("i\u{307}stanbul", &noise), None);
        assert_eq!(normalize("Ärger!", &noise).as_deref(), Some("ärger"));
    }

    #[test]
    fn noise_words_are_case_insensitive() {
        let noise = noise();
        assert_eq!(normalize("The", &noise), None);
        assert_eq!(normalize("THE.", &noise), None);
        assert_eq!(normalize("and!", &noise), None);
        assert_eq!(normalize("Theme", &noise).as_deref(), Some("theme"));
    }

    #[test]
    fn load_reads_whitespace_separated_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"a an\nthe\n\n  Of\t").unwrap();
        let noise = NoiseWords::load(file.path()).unwrap();
        assert_eq!(noise.len(), 4);
        assert!(noise.contains("of"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("noise.txt");
        let err = NoiseWords::load(&missing).unwrap_err();
        assert!(matches!(
            err.into_inner(),
            LseErrorKind::NoiseWordsUnavailable { .. }
        ));
    }

    #[quickcheck]
    fn normalizing_a_keyword_again_is_a_no_op(token: String) -> bool {
        let noise = noise();
        match normalize(&token, &noise) {
            Some(keyword) => normalize(&keyword, &noise).as_deref() == Some(keyword.as_str()),
            None => true,
        }
    }

    #[quickcheck]
    fn noise_words_never_become_keywords(index: usize, suffix: Vec<bool>) -> bool {
        let words = ["a", "the", "and", "of"];
        let mut token = words[index % words.len()].to_uppercase();
        token.extend(suffix.iter().map(|&b| if b { '!' } else { '.' }));
        normalize(&token, &noise()).is_none()
    }
}
