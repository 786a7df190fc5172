//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::Quit,
        );

        // Vim-style scrolling
        bindings.insert(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::ScrollDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            KeyAction::ScrollUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            KeyAction::ScrollToTop,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            KeyAction::ScrollToTop,
        );

        // Arrow key scrolling
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::ScrollUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::ScrollDown,
        );

        // Page navigation
        bindings.insert(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
            KeyAction::PageDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            KeyAction::PageUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
            KeyAction::PageDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
            KeyAction::PageUp,
        );

        // Table navigation
        bindings.insert(
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            KeyAction::NextTable,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char(']'), KeyModifiers::NONE),
            KeyAction::NextTable,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            KeyAction::PrevTable,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('['), KeyModifiers::NONE),
            KeyAction::PrevTable,
        );

        // Column activation: '1' is column 0
        for (offset, digit) in ('1'..='9').enumerate() {
            bindings.insert(
                KeyEvent::new(KeyCode::Char(digit), KeyModifiers::NONE),
                KeyAction::SortColumn(offset),
            );
        }

        Self { bindings }
    }
}
