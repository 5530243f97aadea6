//! Headless mode: feed command lines to the interpreter and report the
//! resulting transcript, for scripted runs and test harnesses.

use std::io::{BufRead, Write};

use log::debug;
use serde::Serialize;

use crate::demo::{InterpreterState, LineKind};
use crate::error::Result;

#[derive(Debug, Serialize)]
pub struct ReportLine {
    pub kind: LineKind,
    pub text: String,
}

/// Final state after a batch run
#[derive(Debug, Serialize)]
pub struct Report {
    pub theme: &'static str,
    pub picker_requests: usize,
    pub transcript: Vec<ReportLine>,
}

impl Report {
    pub fn from_state(state: &InterpreterState, picker_requests: usize) -> Self {
        Self {
            theme: state.theme_key(),
            picker_requests,
            transcript: state
                .transcript()
                .iter()
                .map(|(kind, text)| ReportLine {
                    kind,
                    text: text.to_string(),
                })
                .collect(),
        }
    }

    pub fn write_text(&self, out: &mut impl Write) -> Result<()> {
        for line in &self.transcript {
            writeln!(out, "{}", line.text)?;
        }
        writeln!(out, "theme: {}", self.theme)?;
        Ok(())
    }

    pub fn write_json(&self, out: &mut impl Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Execute every non-blank line from `reader`. Returns how many commands
/// asked for the picker, which has no headless counterpart.
pub fn run(state: &mut InterpreterState, reader: impl BufRead) -> Result<usize> {
    let mut picker_requests = 0;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let outcome = state.execute(&line);
        debug!("batch: {:?} emitted {} lines", line.trim(), outcome.emitted.len());
        if outcome.open_picker {
            picker_requests += 1;
        }
    }
    Ok(picker_requests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SCRIPT: &str = "\
:FkTheme tokyonight

banana
:FkThemePicker
";

    #[test]
    fn runs_each_non_blank_line() {
        let mut state = InterpreterState::new();
        let pickers = run(&mut state, SCRIPT.as_bytes()).unwrap();

        assert_eq!(pickers, 1);
        assert_eq!(state.theme_key(), "tokyonight");
        assert_eq!(
            &state.transcript().lines()[2..],
            [
                "> :FkTheme tokyonight",
                "✓ Theme switched to Tokyo Night",
                "> banana",
                "✗ Unknown command. Type \":help\" for available commands.",
                "> :FkThemePicker",
                "→ Opening theme picker...",
            ]
        );
    }

    #[test]
    fn text_report_ends_with_theme() {
        let mut state = InterpreterState::new();
        run(&mut state, "clear\n:FkThemeNext\n".as_bytes()).unwrap();

        let mut out = Vec::new();
        Report::from_state(&state, 0).write_text(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "> :FkThemeNext\n✓ Cycled to Tokyo Night\ntheme: tokyonight\n"
        );
    }

    #[test]
    fn json_report_tags_line_kinds() {
        let mut state = InterpreterState::new();
        run(&mut state, ":fktheme nope\n".as_bytes()).unwrap();

        let mut out = Vec::new();
        Report::from_state(&state, 0).write_json(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["theme"], "catppuccin");
        assert_eq!(value["picker_requests"], 0);
        assert_eq!(value["transcript"][0]["kind"], "info");
        assert_eq!(value["transcript"][2]["kind"], "echo");
        assert_eq!(value["transcript"][3]["kind"], "error");
    }
}
