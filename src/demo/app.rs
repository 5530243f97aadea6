use log::debug;

use super::{InterpreterState, Mode, Outcome, QUICK_COMMANDS};
use crate::theme;

/// Columns in the picker grid; up/down move by a whole row
pub const PICKER_COLUMNS: usize = 3;

/// Everything the terminal UI shows: the interpreter plus prompt,
/// picker and scroll state around it.
pub struct Demo {
    pub state: InterpreterState,
    pub mode: Mode,
    pub input: String,
    pub running: bool,
    /// Lines scrolled back from the bottom of the transcript
    pub scroll: usize,
    pub picker_cursor: usize,
    pub quick_cursor: Option<usize>,
    pub transparent_background: bool,
}

impl Demo {
    pub fn new(state: InterpreterState) -> Self {
        Self {
            state,
            mode: Mode::default(),
            input: String::new(),
            running: true,
            scroll: 0,
            picker_cursor: 0,
            quick_cursor: None,
            transparent_background: false,
        }
    }

    /// Run whatever is in the prompt. Whitespace-only input is ignored.
    pub fn submit(&mut self) -> Option<Outcome> {
        if self.input.trim().is_empty() {
            return None;
        }
        let line = std::mem::take(&mut self.input);
        self.quick_cursor = None;
        Some(self.run(&line))
    }

    /// Execute a command line directly, bypassing the prompt
    pub fn run(&mut self, line: &str) -> Outcome {
        let outcome = self.state.execute(line);
        if outcome.cleared {
            debug!("transcript cleared");
        }
        self.scroll = 0;
        if outcome.open_picker {
            self.open_picker();
        }
        outcome
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    // Prompt editing

    pub fn insert_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn delete_char_backward(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.quick_cursor = None;
    }

    // Quick commands

    /// Fill the prompt with a shortcut; the user still has to submit it
    pub fn apply_quick_command(&mut self, index: usize) {
        if let Some(quick) = QUICK_COMMANDS.get(index) {
            self.input = quick.command.to_string();
            self.quick_cursor = Some(index);
        }
    }

    pub fn cycle_quick_command(&mut self) {
        let next = match self.quick_cursor {
            Some(i) => (i + 1) % QUICK_COMMANDS.len(),
            None => 0,
        };
        self.apply_quick_command(next);
    }

    // Transcript scrolling

    pub fn scroll_up(&mut self, lines: usize, viewport_height: usize) {
        let max = self.state.transcript().len().saturating_sub(viewport_height);
        self.scroll = (self.scroll + lines).min(max);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    // Picker

    pub fn open_picker(&mut self) {
        self.picker_cursor = theme::index_of(self.state.theme_key()).unwrap_or(0);
        self.mode = Mode::Picker;
    }

    pub fn close_picker(&mut self) {
        self.mode = Mode::Prompt;
    }

    pub fn picker_left(&mut self) {
        let len = theme::len();
        self.picker_cursor = (self.picker_cursor + len - 1) % len;
    }

    pub fn picker_right(&mut self) {
        self.picker_cursor = (self.picker_cursor + 1) % theme::len();
    }

    pub fn picker_up(&mut self) {
        let len = theme::len();
        self.picker_cursor = (self.picker_cursor + len - PICKER_COLUMNS % len) % len;
    }

    pub fn picker_down(&mut self) {
        self.picker_cursor = (self.picker_cursor + PICKER_COLUMNS) % theme::len();
    }

    /// Apply the highlighted theme and close the picker
    pub fn confirm_picker(&mut self) -> Outcome {
        let key = theme::all()[self.picker_cursor % theme::len()].key;
        debug!("picker confirmed {}", key);
        let outcome = self.state.select_theme(key);
        self.scroll = 0;
        self.close_picker();
        outcome
    }
}

impl Default for Demo {
    fn default() -> Self {
        Self::new(InterpreterState::new())
    }
}
