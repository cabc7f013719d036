//! Game logic: rounds, scoring, root words, word validation

pub mod dictionary;
pub mod validation;
pub mod word_list;

use dictionary::SpellChecker;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};
use validation::{validate, ValidationOutcome};
use word_list::{WordList, FALLBACK_ROOT_WORD};

/// Per-round state shown to the player.
///
/// `used_words` is most-recent-first, never holds duplicates and never holds
/// the root word. Only accepted words reach it, and validation rejects both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    root_word: String,
    used_words: Vec<String>,
    score: u32,
    round: u32,
}

impl RoundState {
    /// First round with the given root word. A blank root word becomes
    /// [`FALLBACK_ROOT_WORD`].
    pub fn new(root_word: &str) -> Self {
        Self {
            root_word: normalize_root(root_word),
            used_words: Vec::new(),
            score: 0,
            round: 1,
        }
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first.
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn is_used(&self, word: &str) -> bool {
        self.used_words.iter().any(|w| w == word)
    }

    /// Record an accepted word.
    pub(crate) fn record(&mut self, word: String) {
        self.used_words.insert(0, word);
        self.score += 1;
    }

    /// Begin play on a new root word with no used words.
    fn begin(&mut self, root_word: &str) {
        self.used_words.clear();
        self.root_word = normalize_root(root_word);
    }
}

fn normalize_root(root_word: &str) -> String {
    let root = root_word.trim().to_lowercase();
    if root.is_empty() {
        FALLBACK_ROOT_WORD.to_string()
    } else {
        root
    }
}

/// One game session: a round state machine fed by a root-word list and a
/// spell checker.
pub struct Game<C> {
    state: RoundState,
    words: WordList,
    checker: C,
    rng: StdRng,
}

impl<C: SpellChecker> Game<C> {
    /// Start a session. The first round begins immediately.
    pub fn new(words: WordList, checker: C, rng: StdRng) -> Self {
        let mut game = Self {
            state: RoundState::new(FALLBACK_ROOT_WORD),
            words,
            checker,
            rng,
        };
        game.start_round();
        game
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Validate a candidate and, if accepted, record it.
    ///
    /// Rejections and empty submissions leave the round untouched.
    pub fn submit_word(&mut self, candidate: &str) -> ValidationOutcome {
        let outcome = validate(candidate, &self.state, &self.checker);

        match &outcome {
            ValidationOutcome::Accepted { word } => {
                self.state.record(word.clone());
                info!(word = %word, score = self.state.score, "word accepted");
            }
            ValidationOutcome::Rejected { kind, .. } => {
                debug!(candidate, reason = kind.label(), "word rejected");
            }
            ValidationOutcome::Empty => {}
        }

        outcome
    }

    /// Discard the current root word and start the next round. Score
    /// carries over.
    pub fn change_word(&mut self) {
        self.state.round += 1;
        self.start_round();
    }

    /// Pick a root word for the current round number.
    pub fn start_round(&mut self) {
        if self.words.is_empty() {
            warn!(fallback = FALLBACK_ROOT_WORD, "word list is empty");
        }
        let root = self.words.pick_root(&mut self.rng);
        self.state.begin(&root);
        info!(round = self.state.round, root = %self.state.root_word, "round started");
    }
}
