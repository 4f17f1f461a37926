//! Key event handling

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::engine::SoundEngine;
use crate::model::PromptKind;

use super::AppController;

impl<E: SoundEngine> AppController<E> {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Error message blocks all other interactions
        if self.model.has_error() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.model.clear_error();
            }
            return;
        }

        if self.model.ui.show_help_popup {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('?')) {
                self.model.hide_help_popup();
            }
            return;
        }

        if self.model.is_prompt_open() {
            self.handle_prompt_key(key);
            return;
        }

        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.model.set_should_quit(true),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.model.set_should_quit(true)
            }
            // Transport
            KeyCode::Char(' ') => self.toggle_play_pause(),
            KeyCode::Char('n') | KeyCode::Char('N') => self.next(),
            KeyCode::Char('p') | KeyCode::Char('P') => self.prev(),
            KeyCode::Right => self.skip_forward(shift),
            KeyCode::Left => self.skip_backward(shift),
            KeyCode::Char(']') => self.skip_forward(true),
            KeyCode::Char('[') => self.skip_backward(true),
            KeyCode::Char(c @ '0'..='9') => {
                let tenths = c.to_digit(10).unwrap_or(0);
                self.seek_fraction(f64::from(tenths) / 10.0);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.volume_up(),
            KeyCode::Char('-') => self.volume_down(),
            // Modes
            KeyCode::Char('s') | KeyCode::Char('S') => self.toggle_shuffle(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.cycle_repeat(),
            KeyCode::Char('f') | KeyCode::Char('F') => self.toggle_full_path(),
            // Playlist
            KeyCode::Up | KeyCode::Char('k') => self.model.move_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.model.move_cursor_down(),
            KeyCode::Enter => self.select_track(self.model.ui.cursor),
            KeyCode::Char('a') | KeyCode::Char('A') => self.model.open_prompt(PromptKind::AddFiles),
            KeyCode::Char('o') | KeyCode::Char('O') => {
                self.model.open_prompt(PromptKind::OpenPlaylist)
            }
            KeyCode::Char('w') | KeyCode::Char('W') => {
                self.model.open_prompt(PromptKind::SavePlaylist)
            }
            KeyCode::Char('d') | KeyCode::Char('D') => self.unload_track(),
            KeyCode::Char('x') | KeyCode::Char('X') => self.clear(),
            KeyCode::Char('h') | KeyCode::Char('?') => self.model.show_help_popup(),
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.model.ui.prompt.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.model.close_prompt();
            }
            KeyCode::Backspace => {
                prompt.input.pop();
            }
            KeyCode::Char(c) => prompt.input.push(c),
            KeyCode::Enter => {
                if let Some(prompt) = self.model.close_prompt() {
                    let input = prompt.input.trim();
                    if input.is_empty() {
                        return;
                    }
                    let path = expand_home(input);
                    match prompt.kind {
                        PromptKind::AddFiles => self.add_path(&path),
                        PromptKind::OpenPlaylist => self.load_playlist(&path),
                        PromptKind::SavePlaylist => self.save_playlist(&path),
                    }
                }
            }
            _ => {}
        }
    }
}

fn expand_home(input: &str) -> PathBuf {
    match input.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(input)),
        None => PathBuf::from(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expands_to_home() {
        let expanded = expand_home("~/Music/a.mp3");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("Music/a.mp3"));
        }
        assert_eq!(expand_home("/abs/b.mp3"), PathBuf::from("/abs/b.mp3"));
    }
}
