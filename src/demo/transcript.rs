use serde::Serialize;

/// How a transcript line is colored, derived from its leading glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Echo,
    Success,
    Error,
    Progress,
    Info,
}

impl LineKind {
    pub fn of(line: &str) -> Self {
        if line.starts_with('>') {
            LineKind::Echo
        } else if line.starts_with('✓') {
            LineKind::Success
        } else if line.starts_with('✗') {
            LineKind::Error
        } else if line.starts_with('→') {
            LineKind::Progress
        } else {
            LineKind::Info
        }
    }
}

/// Scrollback of the simulated terminal, oldest line first.
/// Lines are only ever appended; `clear` is the single way to drop them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = (LineKind, &str)> {
        self.lines.iter().map(|l| (LineKind::of(l), l.as_str()))
    }
}
