//! Keybinding system
//!
//! Maps keyboard input to commands. Supports single keys, modifier
//! combinations and two-key sequences.
//!
//! - `KeyBinding`: a textual key pattern bound to a command ID
//! - `KeyPattern`: parsed, matchable form of the pattern
//! - `Keymap`: the ordered binding list with matching logic

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::command_id::CommandId;

/// A pending first key older than this no longer completes a sequence
const SEQUENCE_TIMEOUT: Duration = Duration::from_secs(2);

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual key pattern, e.g. "ctrl+c", "g g", "down"
    pub keys: String,
    /// Display hint for the UI, e.g. "Ctrl+C", "gg", "↓"
    pub hint: String,
    /// The command this binding triggers
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPattern {
    /// Single key with modifiers
    Single {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Two plain characters pressed one after another
    Sequence { first: char, second: char },
}

/// Parse a textual key pattern
///
/// Supported formats:
/// - Single char, case-sensitive: "q", "G", "/", "?"
/// - Modifiers: "ctrl+c", "alt+x", "shift+tab"
/// - Named keys: "enter", "esc", "space", "up", "down", "backspace", ...
/// - Two-key sequence: "g g"
pub fn parse_key_pattern(pattern: &str) -> Option<KeyPattern> {
    let pattern = pattern.trim();

    if pattern.contains(' ') {
        let mut parts = pattern.split_whitespace();
        let (first, second) = (parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        return match (single_char(first), single_char(second)) {
            (Some(first), Some(second)) => Some(KeyPattern::Sequence { first, second }),
            _ => None,
        };
    }

    // Uppercase letters arrive from the terminal with SHIFT set
    if let Some(c) = single_char(pattern) {
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(KeyPattern::Single {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut rest = lower.as_str();

    while let Some((modifier, tail)) = rest.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
        rest = tail;
    }

    Some(KeyPattern::Single {
        code: parse_key_code(rest)?,
        modifiers,
    })
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    let code = match s {
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "space" => KeyCode::Char(' '),
        s => KeyCode::Char(single_char(s)?),
    };
    Some(code)
}

/// First key of a sequence waiting for its second key
#[derive(Debug, Clone)]
pub struct PendingKey {
    pub key: char,
    pub timestamp: Instant,
}

impl PendingKey {
    pub fn new(key: char) -> Self {
        Self {
            key,
            timestamp: Instant::now(),
        }
    }

    fn is_fresh(&self) -> bool {
        self.timestamp.elapsed() < SEQUENCE_TIMEOUT
    }
}

/// Result of looking up a key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMatch {
    /// One or more commands are bound to the key (or completed sequence)
    Commands(Vec<CommandId>),
    /// The key starts a sequence; wait for the next key
    Pending(char),
    /// Nothing bound
    None,
}

/// The keymap - an ordered collection of keybindings
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, KeyPattern)>,
}

impl Keymap {
    /// Build a keymap; bindings with unparsable patterns are dropped with a warning
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let bindings = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring invalid key pattern {:?}", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings }
    }

    /// Match a key event, completing `pending` when it forms a sequence
    ///
    /// A stale or non-matching pending key is dropped and the event is then
    /// matched on its own.
    pub fn match_key(&self, key: &KeyEvent, pending: Option<&PendingKey>) -> KeyMatch {
        let current_char = match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        };

        if let (Some(pending), Some(current)) = (pending.filter(|p| p.is_fresh()), current_char) {
            let completed = self.bindings.iter().find_map(|(binding, pattern)| match pattern {
                KeyPattern::Sequence { first, second }
                    if *first == pending.key && *second == current =>
                {
                    Some(binding.command)
                }
                _ => None,
            });
            if let Some(command) = completed {
                return KeyMatch::Commands(vec![command]);
            }
        }

        let commands: Vec<CommandId> = self
            .bindings
            .iter()
            .filter(|(_, pattern)| match pattern {
                KeyPattern::Single { code, modifiers } => {
                    key.code == *code && key.modifiers == *modifiers
                }
                KeyPattern::Sequence { .. } => false,
            })
            .map(|(binding, _)| binding.command)
            .collect();

        if !commands.is_empty() {
            return KeyMatch::Commands(commands);
        }

        let starts_sequence = current_char.filter(|c| {
            self.bindings
                .iter()
                .any(|(_, pattern)| matches!(pattern, KeyPattern::Sequence { first, .. } if first == c))
        });

        match starts_sequence {
            Some(c) => KeyMatch::Pending(c),
            None => KeyMatch::None,
        }
    }

    /// All bindings in declaration order
    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter().map(|(b, _)| b)
    }

    /// Hints of every binding for `command`, deduplicated and joined with "/"
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut hints: Vec<&str> = Vec::new();
        for binding in self.bindings().filter(|b| b.command == command) {
            if !hints.contains(&binding.hint.as_str()) {
                hints.push(&binding.hint);
            }
        }

        if hints.is_empty() {
            None
        } else {
            Some(hints.join("/"))
        }
    }

    /// Commands in first-binding order, without duplicates
    pub fn commands(&self) -> Vec<CommandId> {
        let mut commands = Vec::new();
        for binding in self.bindings() {
            if !commands.contains(&binding.command) {
                commands.push(binding.command);
            }
        }
        commands
    }
}
