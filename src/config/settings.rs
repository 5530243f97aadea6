use std::collections::HashMap;

use crate::error::{DemoError, Result};
use crate::theme::{self, DEFAULT_THEME, Theme};

/// Demo settings that can be customized via the Rhai init script
#[derive(Debug, Clone)]
pub struct Settings {
    /// Theme key selected at startup
    pub theme: String,
    /// Leave the preview pane on the terminal's own background
    pub transparent_background: bool,
    /// Print the welcome banner into a fresh transcript
    pub show_welcome: bool,

    // Custom keybinds: key notation -> command line
    pub keybinds: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            transparent_background: false,
            show_welcome: true,
            keybinds: HashMap::new(),
        }
    }
}

impl Settings {
    /// Registry entry for the configured startup theme
    pub fn startup_theme(&self) -> Result<&'static Theme> {
        theme::find(&self.theme).ok_or_else(|| DemoError::UnknownTheme(self.theme.clone()))
    }
}
