//! Parsing of demo command lines into a closed set of commands.
//!
//! Matching ignores ASCII case, so `:FkTheme Nord` and `:fktheme nord`
//! parse the same. The theme argument keeps the case the user typed.

const THEME_PREFIX: &str = ":fktheme ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `:FkTheme <name>`
    SetTheme(String),
    /// `:FkThemePicker`
    Picker,
    /// `:FkThemeList`
    List,
    /// `:FkThemeNext`
    Next,
    /// `:help` or `help`
    Help,
    /// `clear`
    Clear,
    Unknown,
}

impl Command {
    /// Parse an already trimmed line
    pub fn parse(line: &str) -> Self {
        if let Some(name) = strip_prefix_ignore_case(line, THEME_PREFIX) {
            return Command::SetTheme(name.trim().to_string());
        }

        let lowered = line.to_ascii_lowercase();
        match lowered.as_str() {
            ":fkthemepicker" => Command::Picker,
            ":fkthemelist" => Command::List,
            ":fkthemenext" => Command::Next,
            ":help" | "help" => Command::Help,
            "clear" => Command::Clear,
            _ => Command::Unknown,
        }
    }
}

fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        line.get(prefix.len()..)
    } else {
        None
    }
}
