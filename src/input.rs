//! Input backend — raw key state behind a command query.
//!
//! Key events feed a map of key → last-seen frame.  A key counts as held
//! while its entry is fresh, which covers both terminal classes:
//! enhancement-capable terminals deliver real release events (the entry is
//! removed immediately), while classic terminals only deliver presses from
//! OS key-repeat, so entries expire after a few silent frames — a shorter
//! window than any repeat interval, keeping actively-held keys live.

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

/// Frames a key stays live after its last press/repeat event.
const HOLD_WINDOW: u64 = 4;

/// The game's discrete input commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Left,
    Right,
    Up,
    Down,
    Fire,
    Ok,
}

impl Command {
    fn keys(self) -> &'static [KeyCode] {
        match self {
            Command::Left => &[KeyCode::Left, KeyCode::Char('a')],
            Command::Right => &[KeyCode::Right, KeyCode::Char('d')],
            Command::Up => &[KeyCode::Up, KeyCode::Char('w')],
            Command::Down => &[KeyCode::Down, KeyCode::Char('s')],
            Command::Fire => &[KeyCode::Char(' ')],
            Command::Ok => &[KeyCode::Enter],
        }
    }
}

pub struct Controller {
    // Each held key → the frame it was last seen (press or repeat).
    key_frame: HashMap<KeyCode, u64>,
    frame: u64,
}

impl Controller {
    pub fn new() -> Self {
        Controller {
            key_frame: HashMap::new(),
            frame: 0,
        }
    }

    /// Advance the frame counter; call once per game tick, before feeding
    /// that tick's events.
    pub fn begin_frame(&mut self) {
        self.frame += 1;
    }

    pub fn handle_event(&mut self, event: &Event) {
        if let Event::Key(KeyEvent { code, kind, .. }) = event {
            match kind {
                KeyEventKind::Press | KeyEventKind::Repeat => self.press(*code),
                KeyEventKind::Release => self.release(*code),
            }
        }
    }

    pub fn press(&mut self, code: KeyCode) {
        self.key_frame.insert(code, self.frame);
    }

    pub fn release(&mut self, code: KeyCode) {
        self.key_frame.remove(&code);
    }

    pub fn is_command_pressed(&self, command: Command) -> bool {
        command.keys().iter().any(|key| self.is_key_held(key))
    }

    fn is_key_held(&self, key: &KeyCode) -> bool {
        self.key_frame
            .get(key)
            .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
