//! winit key → [`SceneEvent`] translation.
//!
//! Only the logical key matters, so layouts and Shift behave the way the
//! user expects (`Shift+=` arrives as `+`).  Escape never reaches the scene;
//! the shell closes the window instead.

use robo_core::{SceneEvent, SpecialKey};
use winit::keyboard::{Key, NamedKey};

/// What the shell should do with a key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyInput {
    Scene(SceneEvent),
    Close,
}

pub fn translate_key(key: &Key) -> Option<KeyInput> {
    match key {
        Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyInput::Scene(SceneEvent::Key(c))),
                _ => None,
            }
        }
        Key::Named(NamedKey::Escape) => Some(KeyInput::Close),
        Key::Named(NamedKey::Space) => Some(KeyInput::Scene(SceneEvent::Key(' '))),
        Key::Named(named) => special_key(*named).map(|k| KeyInput::Scene(SceneEvent::SpecialKey(k))),
        _ => None,
    }
}

fn special_key(key: NamedKey) -> Option<SpecialKey> {
    let special = match key {
        NamedKey::ArrowLeft => SpecialKey::Left,
        NamedKey::ArrowRight => SpecialKey::Right,
        NamedKey::ArrowUp => SpecialKey::Up,
        NamedKey::ArrowDown => SpecialKey::Down,
        NamedKey::PageUp => SpecialKey::PageUp,
        NamedKey::PageDown => SpecialKey::PageDown,
        NamedKey::Home => SpecialKey::Home,
        NamedKey::End => SpecialKey::End,
        NamedKey::Insert => SpecialKey::Insert,
        NamedKey::F1 => SpecialKey::F(1),
        NamedKey::F2 => SpecialKey::F(2),
        NamedKey::F3 => SpecialKey::F(3),
        NamedKey::F4 => SpecialKey::F(4),
        NamedKey::F5 => SpecialKey::F(5),
        NamedKey::F6 => SpecialKey::F(6),
        NamedKey::F7 => SpecialKey::F(7),
        NamedKey::F8 => SpecialKey::F(8),
        NamedKey::F9 => SpecialKey::F(9),
        NamedKey::F10 => SpecialKey::F(10),
        NamedKey::F11 => SpecialKey::F(11),
        NamedKey::F12 => SpecialKey::F(12),
        _ => return None,
    };
    Some(special)
}
