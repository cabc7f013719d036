//! Application state management
//!
//! Holds what the screen needs beyond the round itself: the pending input
//! line and the alert raised by the last rejected submission.

use crate::game::dictionary::SpellChecker;
use crate::game::validation::ValidationOutcome;
use crate::game::{Game, RoundState};

/// A rejection waiting to be acknowledged by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Main application state
pub struct App<C> {
    /// Whether the application should quit
    pub should_quit: bool,
    /// Current user input
    pub input: String,
    /// Open alert, if any. Input is locked while it is shown.
    alert: Option<Alert>,
    game: Game<C>,
}

impl<C: SpellChecker> App<C> {
    /// Create a new application instance around a running game
    pub fn new(game: Game<C>) -> Self {
        Self {
            should_quit: false,
            input: String::new(),
            alert: None,
            game,
        }
    }

    /// Signal the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn round(&self) -> &RoundState {
        self.game.state()
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Handle character input (locked while an alert is open)
    pub fn on_char(&mut self, c: char) {
        if self.alert.is_some() {
            return;
        }
        self.input.push(c);
    }

    /// Handle backspace (locked while an alert is open)
    pub fn on_backspace(&mut self) {
        if self.alert.is_some() {
            return;
        }
        self.input.pop();
    }

    /// Handle word submission (Enter key)
    ///
    /// With an alert open, Enter only dismisses it. An accepted word clears
    /// the input; a rejected one keeps it so the player can fix it.
    pub fn on_submit(&mut self) {
        if self.alert.take().is_some() {
            return;
        }

        match self.game.submit_word(&self.input) {
            ValidationOutcome::Accepted { .. } => self.input.clear(),
            ValidationOutcome::Rejected { title, message, .. } => {
                self.alert = Some(Alert { title, message });
            }
            ValidationOutcome::Empty => {}
        }
    }

    /// Handle Esc: close the alert if one is open, otherwise quit
    pub fn on_escape(&mut self) {
        if self.alert.take().is_none() {
            self.quit();
        }
    }

    /// Handle the change-word action. Pending input is kept.
    pub fn on_change_word(&mut self) {
        if self.alert.is_some() {
            return;
        }
        self.game.change_word();
    }
}
