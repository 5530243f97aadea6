/// A rectangle of terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Split into left/right halves with a one-column gutter between them
    pub fn split_vertical(&self, ratio: f32) -> (Rect, Rect) {
        let left_width = (self.width as f32 * ratio) as u16;
        let left = Rect::new(self.x, self.y, left_width, self.height);
        let right_x = self.x + left_width + 1;
        let right = Rect::new(
            right_x,
            self.y,
            self.width.saturating_sub(left_width + 1),
            self.height,
        );
        (left, right)
    }

    /// Centered rect no larger than `width` x `height`
    pub fn centered(&self, width: u16, height: u16) -> Rect {
        let width = width.min(self.width);
        let height = height.min(self.height);
        Rect::new(
            self.x + (self.width - width) / 2,
            self.y + (self.height - height) / 2,
            width,
            height,
        )
    }

    pub fn bottom(&self) -> u16 {
        self.y + self.height
    }
}

/// Below this width the preview pane is dropped
pub const MIN_PREVIEW_WIDTH: u16 = 80;

/// Where each part of the demo goes on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub title: Rect,
    pub transcript: Rect,
    pub prompt: Rect,
    pub quick: Rect,
    pub preview: Option<Rect>,
    pub status_row: u16,
    pub screen: Rect,
}

impl Layout {
    pub fn compute(width: u16, height: u16) -> Self {
        let screen = Rect::new(0, 0, width, height);
        let content = Rect::new(0, 0, width, height.saturating_sub(1));

        let (terminal, preview) = if width >= MIN_PREVIEW_WIDTH {
            let (left, right) = content.split_vertical(0.5);
            (left, Some(right))
        } else {
            (content, None)
        };

        // Title on top, prompt and quick commands at the bottom
        let transcript_height = terminal.height.saturating_sub(3);
        let title = Rect::new(terminal.x, terminal.y, terminal.width, 1.min(terminal.height));
        let transcript = Rect::new(terminal.x, terminal.y + 1, terminal.width, transcript_height);
        let prompt = Rect::new(terminal.x, transcript.bottom(), terminal.width, 1);
        let quick = Rect::new(terminal.x, prompt.bottom(), terminal.width, 1);

        Self {
            title,
            transcript,
            prompt,
            quick,
            preview,
            status_row: height.saturating_sub(1),
            screen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_terminal_shows_preview() {
        let layout = Layout::compute(120, 40);
        let preview = layout.preview.unwrap();
        assert_eq!(layout.title.width, 60);
        assert_eq!(preview.x, 61);
        assert_eq!(preview.width, 59);
        assert_eq!(preview.height, 39);
    }

    #[test]
    fn narrow_terminal_drops_preview() {
        let layout = Layout::compute(60, 20);
        assert!(layout.preview.is_none());
        assert_eq!(layout.title.width, 60);
    }

    #[test]
    fn terminal_rows_stack_without_gaps() {
        let layout = Layout::compute(100, 30);
        assert_eq!(layout.title.y, 0);
        assert_eq!(layout.transcript.y, 1);
        assert_eq!(layout.transcript.height, 26);
        assert_eq!(layout.prompt.y, 27);
        assert_eq!(layout.quick.y, 28);
        assert_eq!(layout.status_row, 29);
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let layout = Layout::compute(2, 1);
        assert_eq!(layout.transcript.height, 0);
        assert_eq!(layout.status_row, 0);
    }

    #[test]
    fn centered_clamps_to_parent() {
        let outer = Rect::new(0, 0, 40, 10);
        assert_eq!(outer.centered(20, 4), Rect::new(10, 3, 20, 4));
        assert_eq!(outer.centered(100, 100), outer);
    }
}
