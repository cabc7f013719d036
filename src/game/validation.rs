//! Word validation for a scramble round
//!
//! Validates submitted words against, in order:
//! - Minimum length (3 characters)
//! - The root word itself
//! - Words already used this round
//! - Letter availability in the root word (with multiplicity)
//! - The spell checker
//!
//! Validation is pure: it never mutates the round.

use super::dictionary::{SpellChecker, ENGLISH};
use super::RoundState;

/// Minimum word length for valid submissions
pub const MIN_WORD_LENGTH: usize = 3;

/// Why a candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TooShort,
    SameAsRoot,
    AlreadyUsed,
    NotPossible,
    NotRecognized,
}

impl ErrorKind {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::TooShort => "Too Short",
            ErrorKind::SameAsRoot => "Same As Root",
            ErrorKind::AlreadyUsed => "Already Used",
            ErrorKind::NotPossible => "Not Possible",
            ErrorKind::NotRecognized => "Not Recognized",
        }
    }

    /// Alert title shown to the player.
    pub fn title(&self, root_word: &str) -> String {
        match self {
            ErrorKind::TooShort => "Word is too short".to_string(),
            ErrorKind::SameAsRoot => format!("Word is same as {}", root_word),
            ErrorKind::AlreadyUsed => "Word used already".to_string(),
            ErrorKind::NotPossible => "Word not possible".to_string(),
            ErrorKind::NotRecognized => "Word not recognized".to_string(),
        }
    }

    /// Alert body shown to the player.
    pub fn message(&self, root_word: &str) -> String {
        match self {
            ErrorKind::TooShort => {
                format!("Word should be at least {} characters.", MIN_WORD_LENGTH)
            }
            ErrorKind::SameAsRoot => "Word can't be same as original word!".to_string(),
            ErrorKind::AlreadyUsed => "Be more original".to_string(),
            ErrorKind::NotPossible => format!("You can't spell that word from '{}'!", root_word),
            ErrorKind::NotRecognized => "You can't just make them up, you know!".to_string(),
        }
    }
}

/// Result of validating one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Word passed every check. Carries the normalized word.
    Accepted { word: String },
    /// Nothing left after trimming. Not an error; the submission is ignored.
    Empty,
    /// Word failed a check
    Rejected {
        kind: ErrorKind,
        title: String,
        message: String,
    },
}

impl ValidationOutcome {
    fn rejected(kind: ErrorKind, root_word: &str) -> Self {
        ValidationOutcome::Rejected {
            kind,
            title: kind.title(root_word),
            message: kind.message(root_word),
        }
    }

    /// Returns true if the word was accepted
    #[cfg(test)]
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted { .. })
    }

    /// The rejection reason, if any
    #[cfg(test)]
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            ValidationOutcome::Rejected { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Trim surrounding whitespace and lowercase.
pub fn normalize(candidate: &str) -> String {
    candidate.trim().to_lowercase()
}

/// Validate a candidate against the current round and a spell checker.
pub fn validate<C>(candidate: &str, state: &RoundState, checker: &C) -> ValidationOutcome
where
    C: SpellChecker + ?Sized,
{
    let word = normalize(candidate);
    if word.is_empty() {
        return ValidationOutcome::Empty;
    }

    let root = state.root_word();

    if word.chars().count() < MIN_WORD_LENGTH {
        return ValidationOutcome::rejected(ErrorKind::TooShort, root);
    }

    if word == root {
        return ValidationOutcome::rejected(ErrorKind::SameAsRoot, root);
    }

    if state.is_used(&word) {
        return ValidationOutcome::rejected(ErrorKind::AlreadyUsed, root);
    }

    if !is_possible(&word, root) {
        return ValidationOutcome::rejected(ErrorKind::NotPossible, root);
    }

    if checker.is_misspelled(&word, ENGLISH) {
        return ValidationOutcome::rejected(ErrorKind::NotRecognized, root);
    }

    ValidationOutcome::Accepted { word }
}

/// Check that every letter of `word` can be taken from `root`, each root
/// letter used at most once.
pub fn is_possible(word: &str, root: &str) -> bool {
    let mut available: Vec<char> = root.chars().collect();

    for c in word.chars() {
        match available.iter().position(|&r| r == c) {
            Some(pos) => {
                available.swap_remove(pos);
            }
            None => return false,
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::dictionary::{FakeDictionary, PermissiveDictionary};

    fn round(root: &str, used: &[&str]) -> RoundState {
        let mut state = RoundState::new(root);
        // Record oldest first so `used` reads most-recent-first.
        for word in used.iter().rev() {
            state.record(word.to_string());
        }
        state
    }

    #[test]
    fn test_valid_word() {
        let state = round("listen", &[]);
        let dict = FakeDictionary::with_words(&["silent", "tiles"]);
        assert_eq!(
            validate("silent", &state, &dict),
            ValidationOutcome::Accepted {
                word: "silent".to_string()
            }
        );
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        let state = round("listen", &[]);
        let dict = FakeDictionary::with_words(&["silent"]);
        assert_eq!(
            validate("  SiLeNt\t", &state, &dict),
            ValidationOutcome::Accepted {
                word: "silent".to_string()
            }
        );
    }

    #[test]
    fn test_empty_is_not_an_error() {
        let state = round("listen", &[]);
        assert_eq!(validate("", &state, &PermissiveDictionary), ValidationOutcome::Empty);
        assert_eq!(validate("   \n", &state, &PermissiveDictionary), ValidationOutcome::Empty);
    }

    #[test]
    fn test_too_short() {
        let state = round("listen", &[]);
        for word in ["l", "li", " IS ", "zz"] {
            assert_eq!(
                validate(word, &state, &PermissiveDictionary).error_kind(),
                Some(ErrorKind::TooShort),
                "{:?}",
                word
            );
        }
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Two characters, four bytes
        let state = round("listen", &[]);
        for word in ["éé", "ÉÉ", " éa "] {
            assert_eq!(
                validate(word, &state, &PermissiveDictionary).error_kind(),
                Some(ErrorKind::TooShort),
                "{:?}",
                word
            );
        }

        // Three characters is long enough; it then fails on letters instead
        assert_eq!(
            validate("été", &state, &PermissiveDictionary).error_kind(),
            Some(ErrorKind::NotPossible)
        );
        let accented = round("éléphant", &[]);
        assert!(validate("été", &accented, &PermissiveDictionary).is_accepted());
    }

    #[test]
    fn test_too_short_wins_over_other_checks() {
        // Two-letter root, already used, impossible letters, unknown word:
        // length is still reported first.
        let state = round("ab", &["zq"]);
        let dict = FakeDictionary::with_words(&[]);
        assert_eq!(validate("ab", &state, &dict).error_kind(), Some(ErrorKind::TooShort));
        assert_eq!(validate("zq", &state, &dict).error_kind(), Some(ErrorKind::TooShort));
    }

    #[test]
    fn test_three_letters_is_long_enough() {
        let state = round("bread", &[]);
        let dict = FakeDictionary::with_words(&["bra"]);
        assert!(validate("bra", &state, &dict).is_accepted());
    }

    #[test]
    fn test_same_as_root() {
        let state = round("bread", &[]);
        let outcome = validate(" Bread ", &state, &PermissiveDictionary);
        assert_eq!(
            outcome,
            ValidationOutcome::Rejected {
                kind: ErrorKind::SameAsRoot,
                title: "Word is same as bread".to_string(),
                message: "Word can't be same as original word!".to_string(),
            }
        );
    }

    #[test]
    fn test_already_used() {
        let state = round("bread", &["bad"]);
        assert_eq!(
            validate("BAD", &state, &PermissiveDictionary).error_kind(),
            Some(ErrorKind::AlreadyUsed)
        );
    }

    #[test]
    fn test_not_possible() {
        let state = round("listen", &[]);
        let outcome = validate("zebra", &state, &PermissiveDictionary);
        assert_eq!(
            outcome,
            ValidationOutcome::Rejected {
                kind: ErrorKind::NotPossible,
                title: "Word not possible".to_string(),
                message: "You can't spell that word from 'listen'!".to_string(),
            }
        );
    }

    #[test]
    fn test_multiplicity_respected() {
        // Root has a single 's'
        let state = round("listen", &[]);
        assert_eq!(
            validate("sells", &state, &PermissiveDictionary).error_kind(),
            Some(ErrorKind::NotPossible)
        );
    }

    #[test]
    fn test_not_recognized() {
        let state = round("listen", &[]);
        let dict = FakeDictionary::with_words(&["silent"]);
        let outcome = validate("nilst", &state, &dict);
        assert_eq!(outcome.error_kind(), Some(ErrorKind::NotRecognized));
        if let ValidationOutcome::Rejected { title, message, .. } = outcome {
            assert_eq!(title, "Word not recognized");
            assert_eq!(message, "You can't just make them up, you know!");
        }
    }

    #[test]
    fn test_possibility_checked_before_dictionary() {
        let state = round("bread", &[]);
        let dict = FakeDictionary::with_words(&[]);
        assert_eq!(
            validate("zzz", &state, &dict).error_kind(),
            Some(ErrorKind::NotPossible)
        );
    }

    #[test]
    fn test_is_possible() {
        assert!(is_possible("silent", "listen"));
        assert!(is_possible("tin", "listen"));
        assert!(is_possible("", "listen"));
        assert!(!is_possible("sells", "listen"));
        assert!(!is_possible("listens", "listen"));
        assert!(is_possible("dare", "bread"));
    }

    #[test]
    fn test_too_short_message() {
        assert_eq!(
            ErrorKind::TooShort.message("bread"),
            "Word should be at least 3 characters."
        );
        assert_eq!(ErrorKind::TooShort.title("bread"), "Word is too short");
        assert_eq!(ErrorKind::AlreadyUsed.title("bread"), "Word used already");
        assert_eq!(ErrorKind::AlreadyUsed.message("bread"), "Be more original");
    }
}
