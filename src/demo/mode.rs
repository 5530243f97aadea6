#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Typing into the terminal prompt
    #[default]
    Prompt,
    /// Theme picker overlay has focus
    Picker,
}

impl Mode {
    pub fn display(&self) -> &'static str {
        match self {
            Mode::Prompt => "PROMPT",
            Mode::Picker => "PICKER",
        }
    }
}
