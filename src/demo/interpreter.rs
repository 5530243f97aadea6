use log::{debug, info};

use super::{Command, Transcript};
use crate::theme::{self, Theme};

pub const WELCOME_LINES: [&str; 2] = [
    "Welcome to fkthemes.nvim interactive demo!",
    r#"Try: ":FkTheme catppuccin" or ":FkTheme tokyonight""#,
];

pub const HELP_LINES: [&str; 6] = [
    "Available commands:",
    "  :FkTheme <name>  - Switch to theme",
    "  :FkThemePicker   - Show theme picker",
    "  :FkThemeList     - List all themes",
    "  :FkThemeNext     - Cycle to next theme",
    "  :help            - Show this help",
];

pub const UNKNOWN_COMMAND: &str = r#"✗ Unknown command. Type ":help" for available commands."#;

/// What a single `execute` call did, beyond mutating the state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Lines appended by this call, echo included
    pub emitted: Vec<String>,
    /// The surface should present the theme picker
    pub open_picker: bool,
    pub theme_changed: bool,
    pub cleared: bool,
}

/// Selected theme plus scrollback of the simulated terminal
#[derive(Debug, Clone)]
pub struct InterpreterState {
    theme: &'static Theme,
    transcript: Transcript,
}

impl InterpreterState {
    /// Fresh state on the default theme with the welcome banner
    pub fn new() -> Self {
        Self::with_theme(theme::default_theme())
    }

    pub fn with_theme(theme: &'static Theme) -> Self {
        let mut transcript = Transcript::new();
        transcript.extend(WELCOME_LINES);
        Self { theme, transcript }
    }

    /// Start without the welcome banner
    pub fn quiet(theme: &'static Theme) -> Self {
        Self {
            theme,
            transcript: Transcript::new(),
        }
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    pub fn theme_key(&self) -> &'static str {
        self.theme.key
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Run one line of user input. Never fails: bad input turns into an
    /// error line in the transcript.
    pub fn execute(&mut self, raw: &str) -> Outcome {
        let input = raw.trim();
        let command = Command::parse(input);
        debug!("dispatching {:?} for input {:?}", command, input);

        let mut outcome = Outcome::default();
        let before = self.theme.key;
        self.emit(&mut outcome, format!("> {}", input));

        match command {
            Command::SetTheme(name) => match theme::find(&name) {
                Some(found) => {
                    self.theme = found;
                    self.emit(&mut outcome, format!("✓ Theme switched to {}", found.name));
                }
                None => {
                    let available = theme::keys().collect::<Vec<_>>().join(", ");
                    self.emit(
                        &mut outcome,
                        format!("✗ Theme \"{}\" not found. Available: {}", name, available),
                    );
                }
            },
            Command::Picker => {
                self.emit(&mut outcome, "→ Opening theme picker...");
                outcome.open_picker = true;
            }
            Command::List => {
                self.emit(&mut outcome, "Available themes:");
                for t in theme::all() {
                    self.emit(&mut outcome, format!("  • {} (:FkTheme {})", t.name, t.key));
                }
            }
            Command::Next => {
                let next = self.next_theme();
                self.theme = next;
                self.emit(&mut outcome, format!("✓ Cycled to {}", next.name));
            }
            Command::Help => {
                for line in HELP_LINES {
                    self.emit(&mut outcome, line);
                }
            }
            Command::Clear => {
                self.transcript.clear();
                outcome.emitted.clear();
                outcome.cleared = true;
            }
            Command::Unknown => self.emit(&mut outcome, UNKNOWN_COMMAND),
        }

        if self.theme.key != before {
            info!("theme changed from {} to {}", before, self.theme.key);
            outcome.theme_changed = true;
        }
        outcome
    }

    /// Selection made in the picker overlay. Records the equivalent
    /// command so the transcript reads as if it had been typed.
    pub fn select_theme(&mut self, key: &str) -> Outcome {
        let mut outcome = Outcome::default();
        let Some(selected) = theme::get(key) else {
            return outcome;
        };

        outcome.theme_changed = selected.key != self.theme.key;
        self.theme = selected;
        self.emit(&mut outcome, format!("> :FkTheme {}", selected.key));
        self.emit(&mut outcome, format!("✓ Theme switched to {}", selected.name));
        if outcome.theme_changed {
            info!("theme picked: {}", selected.key);
        }
        outcome
    }

    fn next_theme(&self) -> &'static Theme {
        let themes = theme::all();
        let current = theme::index_of(self.theme.key).unwrap_or(0);
        &themes[(current + 1) % themes.len()]
    }

    fn emit(&mut self, outcome: &mut Outcome, line: impl Into<String>) {
        let line = line.into();
        self.transcript.push(line.clone());
        outcome.emitted.push(line);
    }
}

impl Default for InterpreterState {
    fn default() -> Self {
        Self::new()
    }
}
