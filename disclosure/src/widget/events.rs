//! Event handling for the Disclosure widget.

use std::time::Instant;

use super::state::Disclosure;

/// Part of the widget an interaction landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The clickable summary row.
    Header,
    /// The revealed panel.
    Panel,
}

/// Keys the header reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Escape,
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.ctrl || self.alt || self.shift
    }
}

/// A single user input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Click(Target),
    Tap(Target),
    /// Key press while the header has focus.
    Key { key: Key, modifiers: Modifiers },
}

impl Interaction {
    /// Key press without modifiers.
    pub fn key(key: Key) -> Self {
        Interaction::Key {
            key,
            modifiers: Modifiers::default(),
        }
    }
}

/// Whether the widget handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl Disclosure {
    /// Handle an input event received at `now`.
    ///
    /// Clicks and taps on the header, and Enter or Space without modifiers,
    /// toggle the widget. Everything else passes through so content inside
    /// the panel keeps its own interactions.
    pub fn handle_at(&self, interaction: Interaction, now: Instant) -> EventResult {
        let activates = match interaction {
            Interaction::Click(target) | Interaction::Tap(target) => target == Target::Header,
            Interaction::Key { key, modifiers } => {
                !modifiers.any() && matches!(key, Key::Enter | Key::Char(' '))
            }
        };

        if activates {
            self.toggle_at(now);
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Handle an input event.
    pub fn handle(&self, interaction: Interaction) -> EventResult {
        self.handle_at(interaction, Instant::now())
    }
}
