use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

use super::{Key, Keymap};
use crate::demo::{Demo, Mode};

/// Apply one terminal event to the demo. `page` is the number of
/// transcript rows currently visible, used for paging.
pub fn handle_event(demo: &mut Demo, keymap: &Keymap, event: Event, page: usize) {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            handle_key(demo, keymap, key, page);
        }
        Event::Paste(text) if demo.mode == Mode::Prompt => {
            // Only the first line; a pasted newline must not submit
            let line = text.lines().next().unwrap_or_default();
            demo.input.push_str(line);
        }
        Event::Resize(_, _) => {
            // Resize is handled by the renderer
        }
        _ => {}
    }
}

fn handle_key(demo: &mut Demo, keymap: &Keymap, key: KeyEvent, page: usize) {
    let normalized = Key::from_event(&key);

    // Ctrl-C / Ctrl-D quit from any mode
    if normalized == Key::ctrl('c') || normalized == Key::ctrl('d') {
        demo.quit();
        return;
    }

    match demo.mode {
        Mode::Prompt => {
            if let Some(command) = keymap.lookup(&normalized) {
                debug!("keybind {:?} -> {}", normalized, command);
                let command = command.to_string();
                demo.run(&command);
                return;
            }
            handle_prompt_mode(demo, key, page);
        }
        Mode::Picker => handle_picker_mode(demo, key),
    }
}

fn handle_prompt_mode(demo: &mut Demo, key: KeyEvent, page: usize) {
    match key.code {
        KeyCode::Enter => {
            demo.submit();
        }
        KeyCode::Backspace => demo.delete_char_backward(),
        KeyCode::Esc => demo.clear_input(),

        // Quick commands fill the prompt, Enter still has to be pressed
        KeyCode::Tab => demo.cycle_quick_command(),
        KeyCode::F(n) if n >= 1 => demo.apply_quick_command(usize::from(n - 1)),

        KeyCode::PageUp => demo.scroll_up(page.max(1), page),
        KeyCode::PageDown => demo.scroll_down(page.max(1)),

        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            demo.insert_char(c);
        }

        _ => {}
    }
}

fn handle_picker_mode(demo: &mut Demo, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => demo.close_picker(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            demo.confirm_picker();
        }
        KeyCode::Char('h') | KeyCode::Left => demo.picker_left(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => demo.picker_right(),
        KeyCode::Char('k') | KeyCode::Up => demo.picker_up(),
        KeyCode::Char('j') | KeyCode::Down => demo.picker_down(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(demo: &mut Demo, keymap: &Keymap, code: KeyCode) {
        let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
        handle_event(demo, keymap, event, 10);
    }

    fn type_line(demo: &mut Demo, keymap: &Keymap, line: &str) {
        for c in line.chars() {
            press(demo, keymap, KeyCode::Char(c));
        }
        press(demo, keymap, KeyCode::Enter);
    }

    #[test]
    fn typing_and_enter_runs_command() {
        let mut demo = Demo::default();
        let keymap = Keymap::new();
        type_line(&mut demo, &keymap, ":FkTheme nord");
        assert_eq!(demo.state.theme_key(), "nord");
        assert!(demo.input.is_empty());
    }

    #[test]
    fn backspace_and_escape_edit_prompt() {
        let mut demo = Demo::default();
        let keymap = Keymap::new();
        press(&mut demo, &keymap, KeyCode::Char('h'));
        press(&mut demo, &keymap, KeyCode::Char('x'));
        press(&mut demo, &keymap, KeyCode::Backspace);
        assert_eq!(demo.input, "h");
        press(&mut demo, &keymap, KeyCode::Esc);
        assert!(demo.input.is_empty());
    }

    #[test]
    fn function_keys_fill_quick_commands() {
        let mut demo = Demo::default();
        let keymap = Keymap::new();
        press(&mut demo, &keymap, KeyCode::F(3));
        assert_eq!(demo.input, ":FkTheme gruvbox");
        assert_eq!(demo.state.theme_key(), "catppuccin");
        press(&mut demo, &keymap, KeyCode::F(12));
        assert_eq!(demo.input, ":FkTheme gruvbox");
    }

    #[test]
    fn picker_flow_via_keys() {
        let mut demo = Demo::default();
        let keymap = Keymap::new();
        type_line(&mut demo, &keymap, ":FkThemePicker");
        assert_eq!(demo.mode, Mode::Picker);

        // Typing in the picker navigates instead of editing the prompt
        press(&mut demo, &keymap, KeyCode::Char('j'));
        press(&mut demo, &keymap, KeyCode::Char('l'));
        assert!(demo.input.is_empty());
        press(&mut demo, &keymap, KeyCode::Enter);

        assert_eq!(demo.mode, Mode::Prompt);
        assert_eq!(demo.state.theme_key(), "moonlight");
    }

    #[test]
    fn ctrl_c_quits_from_picker() {
        let mut demo = Demo::default();
        demo.open_picker();
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        handle_event(&mut demo, &Keymap::new(), event, 10);
        assert!(!demo.running);
    }

    #[test]
    fn keybind_runs_command_immediately() {
        let mut demo = Demo::default();
        let mut keymap = Keymap::new();
        keymap.bind("<C-n>", ":FkThemeNext").unwrap();

        let event = Event::Key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        handle_event(&mut demo, &keymap, event, 10);
        assert_eq!(demo.state.theme_key(), "tokyonight");
    }

    #[test]
    fn paste_keeps_first_line_only() {
        let mut demo = Demo::default();
        let event = Event::Paste(":FkTheme nord\nclear".to_string());
        handle_event(&mut demo, &Keymap::new(), event, 10);
        assert_eq!(demo.input, ":FkTheme nord");
        assert_eq!(demo.state.theme_key(), "catppuccin");
    }
}
