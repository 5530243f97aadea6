mod colors;
mod theme;

pub use colors::Color;
pub use theme::{SyntaxRole, Theme};
use theme::THEMES;

/// Theme selected when the demo starts
pub const DEFAULT_THEME: &str = "catppuccin";

pub fn all() -> &'static [Theme] {
    &THEMES
}

pub fn len() -> usize {
    THEMES.len()
}

/// All theme keys in declaration order
pub fn keys() -> impl Iterator<Item = &'static str> {
    THEMES.iter().map(|t| t.key)
}

/// Exact lookup by registry key
pub fn get(key: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.key == key)
}

/// Case-insensitive lookup used by `:FkTheme <name>`
pub fn find(name: &str) -> Option<&'static Theme> {
    let name = name.to_lowercase();
    THEMES.iter().find(|t| t.key.to_lowercase() == name)
}

pub fn index_of(key: &str) -> Option<usize> {
    THEMES.iter().position(|t| t.key == key)
}

/// The default theme is always present in the registry
pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}
