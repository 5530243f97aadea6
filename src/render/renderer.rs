use std::io::{self, Write, stdout};

use crossterm::{
    cursor::{Hide, MoveTo, SetCursorStyle, Show},
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute, queue,
    style::{self, Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use super::{Layout, Rect};
use crate::demo::{Demo, LineKind, Mode, PICKER_COLUMNS, QUICK_COMMANDS, preview};
use crate::theme::{self, Color, Theme};

/// Colors of the terminal pane itself; only the preview follows the theme
mod chrome {
    use crate::theme::Color;

    pub const BACKGROUND: Color = Color::hex(0x0f1117);
    pub const TITLE_BAR: Color = Color::hex(0x1c202b);
    pub const FOREGROUND: Color = Color::hex(0xe5e7eb);
    pub const MUTED: Color = Color::hex(0x8b93a7);
    pub const PRIMARY: Color = Color::hex(0x89b4fa);
    pub const ACCENT: Color = Color::hex(0xf5c2e7);
    pub const SUCCESS: Color = Color::hex(0x22c55e);
    pub const DESTRUCTIVE: Color = Color::hex(0xef4444);
    pub const WARNING: Color = Color::hex(0xeab308);
    pub const BORDER: Color = Color::hex(0x2d3343);
}

const PROMPT: &str = "› ";
const TIP: &str = " Tip: type :help to see all available commands";
const PICKER_CELL_WIDTH: u16 = 24;

pub struct Renderer {
    pub width: u16,
    pub height: u16,
}

impl Renderer {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self::with_size(width, height))
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Enters raw mode and the alternate screen. If the screen commands
    /// fail, raw mode is turned off again before the error is returned.
    pub fn setup() -> io::Result<()> {
        terminal::enable_raw_mode()?;
        if let Err(e) = enter_screen(&mut stdout()) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(())
    }

    /// Restores the terminal. Raw mode is disabled even when leaving the
    /// alternate screen fails; the first error is returned.
    pub fn teardown() -> io::Result<()> {
        let left = leave_screen(&mut stdout());
        let raw = terminal::disable_raw_mode();
        left.and(raw)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn layout(&self) -> Layout {
        Layout::compute(self.width, self.height)
    }

    /// Rows of transcript visible at once, used for paging
    pub fn transcript_height(&self) -> usize {
        self.layout().transcript.height as usize
    }

    pub fn render(&self, demo: &Demo) -> io::Result<()> {
        let mut stdout = stdout();
        self.render_to(&mut stdout, demo)
    }

    pub fn render_to(&self, out: &mut impl Write, demo: &Demo) -> io::Result<()> {
        let layout = self.layout();
        let theme = demo.state.theme();

        // Hide cursor during redraw to prevent flicker
        queue!(out, Hide)?;

        self.render_title(out, &layout.title, theme)?;
        self.render_transcript(out, &layout.transcript, demo)?;
        self.render_prompt(out, &layout.prompt, demo)?;
        self.render_quick_commands(out, &layout.quick, demo)?;

        if let Some(rect) = layout.preview {
            self.render_separator(out, &layout)?;
            self.render_preview(out, &rect, theme, demo.transparent_background)?;
        }

        self.render_status_line(out, layout.status_row, demo)?;

        if demo.mode == Mode::Picker {
            self.render_picker(out, &layout.screen, demo)?;
        }

        self.position_cursor(out, &layout, demo)?;

        queue!(out, SetAttribute(Attribute::Reset))?;
        out.flush()?;
        Ok(())
    }

    fn render_title(&self, out: &mut impl Write, rect: &Rect, theme: &Theme) -> io::Result<()> {
        if rect.height == 0 {
            return Ok(());
        }
        let width = rect.width as usize;
        queue!(out, MoveTo(rect.x, rect.y))?;
        queue!(out, SetBackgroundColor(chrome::TITLE_BAR.to_crossterm()))?;

        // Window dots
        let mut used = 0;
        if width >= 6 {
            for color in [chrome::DESTRUCTIVE, chrome::WARNING, chrome::SUCCESS] {
                queue!(out, SetForegroundColor(color.to_crossterm()), Print(" ●"))?;
            }
            used = 6;
        }

        let left = "  fkthemes.nvim";
        let left_width = left.chars().count().min(width - used);
        queue!(out, SetForegroundColor(chrome::FOREGROUND.to_crossterm()))?;
        queue!(out, SetAttribute(Attribute::Bold))?;
        queue!(out, Print(fit(left, left_width)))?;
        queue!(out, SetAttribute(Attribute::NormalIntensity))?;
        used += left_width;

        let right = format!("Current: {} ", theme.name);
        let right_width = right.chars().count();
        if used + right_width <= width {
            queue!(out, Print(" ".repeat(width - used - right_width)))?;
            queue!(out, SetForegroundColor(chrome::PRIMARY.to_crossterm()))?;
            queue!(out, Print(right))?;
        } else {
            queue!(out, Print(" ".repeat(width - used)))?;
        }
        Ok(())
    }

    fn render_transcript(&self, out: &mut impl Write, rect: &Rect, demo: &Demo) -> io::Result<()> {
        let width = rect.width as usize;
        let lines = demo.state.transcript().lines();
        let (start, end) = visible_window(lines.len(), rect.height as usize, demo.scroll);

        queue!(out, SetBackgroundColor(chrome::BACKGROUND.to_crossterm()))?;
        for row in 0..rect.height {
            queue!(out, MoveTo(rect.x, rect.y + row))?;
            match lines[start..end].get(row as usize) {
                Some(line) => {
                    let color = line_color(LineKind::of(line));
                    queue!(out, SetForegroundColor(color.to_crossterm()))?;
                    queue!(out, Print(fit(&format!(" {}", line), width)))?;
                }
                None => queue!(out, Print(" ".repeat(width)))?,
            }
        }
        Ok(())
    }

    fn render_prompt(&self, out: &mut impl Write, rect: &Rect, demo: &Demo) -> io::Result<()> {
        let width = rect.width as usize;
        queue!(out, MoveTo(rect.x, rect.y))?;
        queue!(out, SetBackgroundColor(chrome::TITLE_BAR.to_crossterm()))?;
        queue!(out, SetForegroundColor(chrome::PRIMARY.to_crossterm()))?;
        let prompt = format!(" {}", PROMPT);
        queue!(out, Print(fit(&prompt, prompt.chars().count().min(width))))?;

        let available = width.saturating_sub(3);
        queue!(out, SetForegroundColor(chrome::FOREGROUND.to_crossterm()))?;
        if demo.input.is_empty() {
            queue!(out, SetForegroundColor(chrome::MUTED.to_crossterm()))?;
            queue!(
                out,
                Print(fit(r#"Type ":FkTheme catppuccin" or ":help""#, available))
            )?;
        } else {
            queue!(out, Print(fit(tail(&demo.input, available), available)))?;
        }
        Ok(())
    }

    fn render_quick_commands(&self, out: &mut impl Write, rect: &Rect, demo: &Demo) -> io::Result<()> {
        let width = rect.width as usize;
        queue!(out, MoveTo(rect.x, rect.y))?;
        queue!(out, SetBackgroundColor(chrome::BACKGROUND.to_crossterm()))?;

        let mut used = 0;
        for (i, quick) in QUICK_COMMANDS.iter().enumerate() {
            let label = format!(" F{} {} ", i + 1, quick.label);
            let len = label.chars().count();
            if used + len > width {
                break;
            }
            let color = if demo.quick_cursor == Some(i) {
                chrome::ACCENT
            } else {
                chrome::MUTED
            };
            queue!(out, SetForegroundColor(color.to_crossterm()), Print(&label))?;
            used += len;
        }
        queue!(out, Print(" ".repeat(width - used)))?;
        Ok(())
    }

    fn render_separator(&self, out: &mut impl Write, layout: &Layout) -> io::Result<()> {
        let x = layout.title.x + layout.title.width;
        queue!(out, SetBackgroundColor(chrome::BACKGROUND.to_crossterm()))?;
        queue!(out, SetForegroundColor(chrome::BORDER.to_crossterm()))?;
        for y in 0..layout.status_row {
            queue!(out, MoveTo(x, y), Print("│"))?;
        }
        Ok(())
    }

    fn render_preview(
        &self,
        out: &mut impl Write,
        rect: &Rect,
        theme: &Theme,
        transparent: bool,
    ) -> io::Result<()> {
        let width = rect.width as usize;
        let background = if transparent {
            style::Color::Reset
        } else {
            theme.background.to_crossterm()
        };
        queue!(out, SetBackgroundColor(background))?;

        for row in 0..rect.height {
            queue!(out, MoveTo(rect.x, rect.y + row))?;

            // File name header, then the code
            if row == 0 {
                queue!(out, SetForegroundColor(theme.comment.to_crossterm()))?;
                queue!(out, Print(fit(&format!("  {}", preview::FILE_NAME), width)))?;
                continue;
            }

            let mut used = 0;
            let code = preview::PREVIEW.get(row as usize - 1).filter(|_| width > 2);
            if let Some(spans) = code {
                queue!(out, Print("  "))?;
                used = 2;
                for (role, text) in spans.iter() {
                    let remaining = width.saturating_sub(used);
                    if remaining == 0 {
                        break;
                    }
                    let piece: String = text.chars().take(remaining).collect();
                    used += piece.chars().count();
                    queue!(out, SetForegroundColor(theme.color_for(*role).to_crossterm()))?;
                    queue!(out, Print(piece))?;
                }
            }
            queue!(out, Print(" ".repeat(width.saturating_sub(used))))?;
        }
        Ok(())
    }

    fn render_status_line(&self, out: &mut impl Write, row: u16, demo: &Demo) -> io::Result<()> {
        let width = self.width as usize;
        queue!(out, MoveTo(0, row))?;
        queue!(out, SetBackgroundColor(chrome::BACKGROUND.to_crossterm()))?;
        queue!(out, SetForegroundColor(chrome::MUTED.to_crossterm()))?;

        let right = format!(" {} ", demo.mode.display());
        let right_len = right.chars().count();
        if width > right_len {
            queue!(out, Print(fit(TIP, width - right_len)))?;
            queue!(out, SetForegroundColor(chrome::PRIMARY.to_crossterm()))?;
            queue!(out, Print(right))?;
        } else {
            queue!(out, Print(fit(TIP, width)))?;
        }
        Ok(())
    }

    fn render_picker(&self, out: &mut impl Write, screen: &Rect, demo: &Demo) -> io::Result<()> {
        let themes = theme::all();
        let grid_rows = themes.len().div_ceil(PICKER_COLUMNS) as u16;
        let box_width = PICKER_CELL_WIDTH * PICKER_COLUMNS as u16 + 4;
        // Title, blank, grid, blank, help
        let box_height = grid_rows + 6;
        let area = screen.centered(box_width, box_height);
        let inner = area.width.saturating_sub(2) as usize;

        queue!(out, SetBackgroundColor(chrome::TITLE_BAR.to_crossterm()))?;
        queue!(out, SetForegroundColor(chrome::BORDER.to_crossterm()))?;
        for row in 0..area.height {
            queue!(out, MoveTo(area.x, area.y + row))?;
            let (left, fill, right) = if row == 0 {
                ("╭", "─", "╮")
            } else if row + 1 == area.height {
                ("╰", "─", "╯")
            } else {
                ("│", " ", "│")
            };
            queue!(out, Print(left), Print(fill.repeat(inner)), Print(right))?;
        }

        queue!(out, MoveTo(area.x + 2, area.y + 1))?;
        queue!(out, SetForegroundColor(chrome::FOREGROUND.to_crossterm()))?;
        queue!(out, SetAttribute(Attribute::Bold), Print("Theme Picker"))?;
        queue!(out, SetAttribute(Attribute::NormalIntensity))?;

        let cell_width = PICKER_CELL_WIDTH as usize;
        for (i, t) in themes.iter().enumerate() {
            let col = (i % PICKER_COLUMNS) as u16;
            let row = (i / PICKER_COLUMNS) as u16;
            let x = area.x + 2 + col * PICKER_CELL_WIDTH;
            let y = area.y + 3 + row;
            if x + PICKER_CELL_WIDTH > area.x + area.width || y + 1 >= area.bottom() {
                continue;
            }

            let focused = i == demo.picker_cursor;
            let current = t.key == demo.state.theme_key();
            queue!(out, MoveTo(x, y))?;
            queue!(out, SetBackgroundColor(t.background.to_crossterm()))?;
            queue!(out, SetForegroundColor(chrome::PRIMARY.to_crossterm()))?;
            queue!(out, Print(if focused { "›" } else { " " }))?;

            queue!(out, SetForegroundColor(t.foreground.to_crossterm()))?;
            if focused {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            queue!(out, Print(fit(t.name, cell_width - 9)))?;
            queue!(out, SetAttribute(Attribute::NormalIntensity))?;

            for swatch in t.swatches() {
                queue!(out, SetForegroundColor(swatch.to_crossterm()), Print("●"))?;
            }
            queue!(out, SetForegroundColor(chrome::PRIMARY.to_crossterm()))?;
            queue!(out, Print(if current { " ✓ " } else { "   " }))?;
            queue!(out, SetBackgroundColor(chrome::TITLE_BAR.to_crossterm()), Print(" "))?;
        }

        queue!(out, MoveTo(area.x + 2, area.bottom().saturating_sub(2)))?;
        queue!(out, SetBackgroundColor(chrome::TITLE_BAR.to_crossterm()))?;
        queue!(out, SetForegroundColor(chrome::MUTED.to_crossterm()))?;
        queue!(
            out,
            Print(fit("hjkl/arrows move  Enter select  Esc close", inner.saturating_sub(2)))
        )?;
        Ok(())
    }

    fn position_cursor(&self, out: &mut impl Write, layout: &Layout, demo: &Demo) -> io::Result<()> {
        if demo.mode != Mode::Prompt || layout.prompt.width < 4 {
            queue!(out, Hide)?;
            return Ok(());
        }
        let available = layout.prompt.width as usize - 3;
        let typed = tail(&demo.input, available).chars().count() as u16;
        let x = (layout.prompt.x + 3 + typed).min(layout.prompt.x + layout.prompt.width - 1);
        queue!(out, MoveTo(x, layout.prompt.y))?;
        queue!(out, SetCursorStyle::BlinkingBar)?;
        queue!(out, Show)?;
        Ok(())
    }
}

fn line_color(kind: LineKind) -> Color {
    match kind {
        LineKind::Echo => chrome::ACCENT,
        LineKind::Success => chrome::SUCCESS,
        LineKind::Error => chrome::DESTRUCTIVE,
        LineKind::Progress => chrome::PRIMARY,
        LineKind::Info => chrome::MUTED,
    }
}

/// Range of transcript lines to draw: the last `height` lines before the
/// scroll offset
fn visible_window(len: usize, height: usize, scroll: usize) -> (usize, usize) {
    let end = len.saturating_sub(scroll);
    (end.saturating_sub(height), end)
}

/// Pad or truncate to exactly `width` characters
fn fit(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{:width$}", truncated, width = width)
}

/// Last `width` characters, so the end of a long input stays visible
fn tail(text: &str, width: usize) -> &str {
    let count = text.chars().count();
    if count <= width {
        return text;
    }
    let skip = count - width;
    text.char_indices()
        .nth(skip)
        .map(|(i, _)| &text[i..])
        .unwrap_or_default()
}

/// Bracketed paste makes a pasted block arrive as one `Event::Paste`
/// instead of key presses, so a pasted newline never submits.
fn enter_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(
        out,
        EnterAlternateScreen,
        EnableBracketedPaste,
        DisableLineWrap,
        Hide,
        Clear(ClearType::All)
    )
}

fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(
        out,
        DisableBracketedPaste,
        SetCursorStyle::DefaultUserShape,
        Show,
        EnableLineWrap,
        LeaveAlternateScreen
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(demo: &Demo, width: u16, height: u16) -> String {
        let renderer = Renderer::with_size(width, height);
        let mut out = Vec::new();
        renderer.render_to(&mut out, demo).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 3), "abc");
        assert_eq!(fit("✓ ok", 2), "✓ ");
    }

    #[test]
    fn tail_keeps_end_of_long_input() {
        assert_eq!(tail(":FkTheme tokyonight", 9), "okyonight");
        assert_eq!(tail("short", 10), "short");
        assert_eq!(tail("→→→", 2), "→→");
    }

    #[test]
    fn window_follows_bottom_then_scrolls_back() {
        assert_eq!(visible_window(3, 10, 0), (0, 3));
        assert_eq!(visible_window(20, 5, 0), (15, 20));
        assert_eq!(visible_window(20, 5, 4), (11, 16));
        assert_eq!(visible_window(2, 5, 10), (0, 0));
    }

    #[test]
    fn line_colors_follow_kind() {
        assert_eq!(line_color(LineKind::Error), chrome::DESTRUCTIVE);
        assert_eq!(line_color(LineKind::Success), chrome::SUCCESS);
        assert_eq!(line_color(LineKind::Info), chrome::MUTED);
    }

    #[test]
    fn frame_shows_current_theme_and_transcript() {
        let mut demo = Demo::default();
        demo.run(":FkTheme tokyonight");
        let frame = render(&demo, 120, 30);

        assert!(frame.contains("Current: Tokyo Night"));
        assert!(frame.contains("✓ Theme switched to Tokyo Night"));
        assert!(frame.contains("config.lua"));
        assert!(frame.contains("F1 Catppuccin"));
    }

    #[test]
    fn preview_uses_theme_colors() {
        let mut demo = Demo::default();
        demo.run(":FkTheme gruvbox");
        let frame = render(&demo, 120, 30);
        // Gruvbox keyword orange, #fe8019
        assert!(frame.contains("38;2;254;128;25m"));
        // Gruvbox background, #282828
        assert!(frame.contains("48;2;40;40;40m"));
    }

    #[test]
    fn transparent_preview_skips_theme_background() {
        let mut demo = Demo::default();
        demo.run(":FkTheme gruvbox");
        demo.transparent_background = true;
        let frame = render(&demo, 120, 30);
        assert!(!frame.contains("48;2;40;40;40m"));
    }

    #[test]
    fn narrow_frame_has_no_preview() {
        let frame = render(&Demo::default(), 60, 20);
        assert!(!frame.contains("config.lua"));
    }

    #[test]
    fn picker_overlay_lists_every_theme() {
        let mut demo = Demo::default();
        demo.run(":FkThemePicker");
        let frame = render(&demo, 120, 30);
        assert!(frame.contains("Theme Picker"));
        for t in theme::all() {
            assert!(frame.contains(t.name), "{} missing", t.name);
        }
    }

    #[test]
    fn tiny_terminal_renders_without_panicking() {
        let mut demo = Demo::default();
        demo.input = ":FkThemeList".to_string();
        render(&demo, 1, 1);
        demo.run(":FkThemePicker");
        render(&demo, 10, 3);
    }

    #[test]
    fn screen_enter_and_leave_toggle_bracketed_paste() {
        let mut out = Vec::new();
        enter_screen(&mut out).unwrap();
        let entered = String::from_utf8(out).unwrap();
        assert!(entered.contains("\x1b[?1049h"));
        assert!(entered.contains("\x1b[?2004h"));

        let mut out = Vec::new();
        leave_screen(&mut out).unwrap();
        let left = String::from_utf8(out).unwrap();
        assert!(left.contains("\x1b[?2004l"));
        assert!(left.contains("\x1b[?1049l"));
    }
}
