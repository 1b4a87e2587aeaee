//! TUI application state and logic

use crate::core::{Rejection, SubmissionResult};
use crate::dictionary::DictionaryOracle;
use crate::game::Game;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest input the text box accepts
const MAX_INPUT: usize = 32;

/// Application state
pub struct App<'a, O: DictionaryOracle> {
    pub game: Game<'a, O>,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub last_accepted: Option<(String, u32)>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// A rejection waiting to be dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub streak_lost: bool,
}

impl Alert {
    fn from_rejection(reason: Rejection, root: &str, min_length: usize) -> Self {
        Self {
            title: reason.title().to_string(),
            message: reason.message(root, min_length),
            streak_lost: reason.resets_streak(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub best_score: u32,
    pub best_streak: u32,
}

impl<'a, O: DictionaryOracle> App<'a, O> {
    #[must_use]
    pub fn new(game: Game<'a, O>) -> Self {
        Self {
            game,
            input_buffer: String::new(),
            alert: None,
            last_accepted: None,
            stats: Statistics {
                rounds_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
        }
    }

    /// Submit whatever is in the input box
    pub fn submit(&mut self) {
        let result = self.game.submit(&self.input_buffer);

        match result {
            SubmissionResult::Empty => {}
            SubmissionResult::Rejected(reason) => {
                self.alert = Some(Alert::from_rejection(
                    reason,
                    self.game.state().root_word(),
                    self.game.rules().min_length,
                ));
            }
            SubmissionResult::Accepted { word, points } => {
                let state = self.game.state();
                self.stats.best_score = self.stats.best_score.max(state.score());
                self.stats.best_streak = self.stats.best_streak.max(state.streak());
                self.last_accepted = Some((word, points));
                self.input_buffer.clear();
            }
        }
    }

    pub fn new_round(&mut self) {
        match self.game.new_round() {
            Ok(()) => {
                self.stats.rounds_played += 1;
                self.input_buffer.clear();
                self.alert = None;
                self.last_accepted = None;
            }
            Err(e) => {
                self.alert = Some(Alert {
                    title: "Cannot start a new round".to_string(),
                    message: e.to_string(),
                    streak_lost: false,
                });
            }
        }
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Any key dismisses an open alert, like tapping OK
        if self.alert.take().is_some() {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_round();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                if self.input_buffer.chars().count() < MAX_INPUT && !c.is_control() {
                    self.input_buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                self.submit();
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<O: DictionaryOracle>(app: App<'_, O>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, O>(terminal: &mut Terminal<B>, mut app: App<'_, O>) -> Result<()>
where
    B: ratatui::backend::Backend,
    O: DictionaryOracle,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;

    fn press(app: &mut App<'_, WordListDictionary>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<'_, WordListDictionary>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn new_app(roots: &[String]) -> App<'_, WordListDictionary> {
        App::new(Game::new(roots, WordListDictionary::embedded()).unwrap())
    }

    #[test]
    fn typing_and_submitting() {
        let roots = vec!["silkworm".to_string()];
        let mut app = new_app(&roots);

        type_word(&mut app, "silk");

        assert_eq!(app.game.state().score(), 40);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.last_accepted, Some(("silk".to_string(), 40)));
        assert_eq!(app.stats.best_streak, 1);
    }

    #[test]
    fn rejection_opens_alert_and_keeps_input() {
        let roots = vec!["silkworm".to_string()];
        let mut app = new_app(&roots);

        type_word(&mut app, "xyz");

        let alert = app.alert.clone().unwrap();
        assert_eq!(alert.title, "Word not possible");
        assert!(alert.streak_lost);
        assert_eq!(app.input_buffer, "xyz");
    }

    #[test]
    fn too_short_alert_uses_configured_length() {
        let roots = vec!["silkworm".to_string()];
        let game = Game::with_options(
            &roots,
            WordListDictionary::embedded(),
            crate::game::Rules::new(5, 10),
            "en",
        )
        .unwrap();
        let mut app = App::new(game);

        type_word(&mut app, "silk");

        let alert = app.alert.clone().unwrap();
        assert_eq!(alert.title, "Word is too short");
        assert_eq!(alert.message, "Write something longer than 4 letters");
    }

    #[test]
    fn key_dismisses_alert_without_typing() {
        let roots = vec!["silkworm".to_string()];
        let mut app = new_app(&roots);
        type_word(&mut app, "si");
        assert!(app.alert.is_some());

        press(&mut app, KeyCode::Char('x'));

        assert!(app.alert.is_none());
        assert_eq!(app.input_buffer, "si");
    }

    #[test]
    fn empty_submission_is_silent() {
        let roots = vec!["silkworm".to_string()];
        let mut app = new_app(&roots);

        press(&mut app, KeyCode::Enter);

        assert!(app.alert.is_none());
        assert!(app.last_accepted.is_none());
    }

    #[test]
    fn backspace_edits_input() {
        let roots = vec!["silkworm".to_string()];
        let mut app = new_app(&roots);

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.input_buffer, "a");
    }

    #[test]
    fn ctrl_n_starts_new_round() {
        let roots = vec!["silkworm".to_string()];
        let mut app = new_app(&roots);
        type_word(&mut app, "silk");

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

        assert_eq!(app.stats.rounds_played, 2);
        assert_eq!(app.stats.best_score, 40);
        assert_eq!(app.game.state().score(), 0);
    }

    #[test]
    fn quit_keys() {
        let roots = vec!["silkworm".to_string()];

        let mut app = new_app(&roots);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = new_app(&roots);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn input_is_capped() {
        let roots = vec!["silkworm".to_string()];
        let mut app = new_app(&roots);

        for _ in 0..100 {
            press(&mut app, KeyCode::Char('a'));
        }

        assert_eq!(app.input_buffer.len(), MAX_INPUT);
    }
}
