//! Word Scramble - make as many words as you can from one root word
//!
//! Every word must use the root word's letters, be at least three letters
//! long, be a real word and not repeat. Change the root word any time.

mod app;
mod config;
mod error;
mod game;
mod tui;

use anyhow::{Context, Result};
use app::App;
use config::Config;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use game::dictionary::EmbeddedDictionary;
use game::word_list::WordList;
use game::Game;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tui::Tui;

fn main() -> Result<()> {
    let config = Config::from_env().context("invalid configuration")?;

    let log_path = config.log_file_path();
    // Logging is optional; the game still runs without it.
    if let Err(e) = init_tracing(&log_path) {
        eprintln!("logging disabled: cannot open {}: {}", log_path.display(), e);
    }
    info!(log = %log_path.display(), "starting word scramble");

    // The game cannot run without root words; give up before touching the
    // terminal so the error is readable.
    let words = match &config.word_list_path {
        Some(path) => WordList::load(path).inspect_err(|e| error!(error = %e, "fatal"))?,
        None => WordList::bundled(),
    };
    info!(words = words.len(), "word list ready");

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut app = App::new(Game::new(words, EmbeddedDictionary, rng));

    let mut terminal = Tui::new()?;
    terminal.enter()?;

    // Main event loop
    while !app.should_quit {
        terminal.draw(|frame| tui::render(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only handle key press events (not release)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc => app.on_escape(),
                KeyCode::Enter => app.on_submit(),
                KeyCode::Backspace => app.on_backspace(),
                KeyCode::Tab => app.on_change_word(),
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.on_change_word()
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
                KeyCode::Char(c) if c.is_alphabetic() || c == ' ' => app.on_char(c),
                _ => {}
            }
        }
    }

    terminal.exit()?;
    info!(
        rounds = app.round().round(),
        score = app.round().score(),
        "session ended"
    );
    Ok(())
}

/// Open the log file for appending, creating it if needed.
fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Send tracing output to a file; the terminal belongs to the UI.
fn init_tracing(path: &Path) -> io::Result<()> {
    let log_file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("word_scramble=info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("word-scramble-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_log_file_is_appended() {
        let path = temp_path("append.log");
        std::fs::write(&path, "previous run\n").unwrap();

        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "this run").unwrap();
        drop(file);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "previous run\nthis run\n");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_log_file_is_created() {
        let path = temp_path("fresh.log");
        let _ = std::fs::remove_file(&path);

        open_log_file(&path).unwrap();
        assert!(path.exists());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unwritable_log_path_is_an_error() {
        let path = temp_path("missing-dir").join("nested").join("ws.log");
        assert!(open_log_file(&path).is_err());
    }
}
