//! Global hot key bookkeeping.
//!
//! Defines [`Key`], [`Modifiers`], and [`HotKey`], plus a [`HotKeyTable`]
//! that hands out stable ids for registration with the host windowing
//! system. Talking to that system is the host's job; the table only
//! guarantees each combination is registered once and that the same
//! combination always maps to the same id.

use std::collections::HashMap;
use std::fmt;
use std::ops::{BitAnd, BitOr};
use std::sync::{Mutex, MutexGuard, PoisonError};

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key, decoupled from any windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Insert,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}

impl Key {
    /// Stable numeric code, unique per key.
    ///
    /// Characters use their scalar value; named keys sit above the Unicode
    /// range so the two can never collide.
    fn code(self) -> u32 {
        match self {
            Key::Char(c) => c as u32,
            Key::Enter => 0x11_0001,
            Key::Escape => 0x11_0002,
            Key::Tab => 0x11_0003,
            Key::Backspace => 0x11_0004,
            Key::Delete => 0x11_0005,
            Key::Insert => 0x11_0006,
            Key::Left => 0x11_0007,
            Key::Right => 0x11_0008,
            Key::Up => 0x11_0009,
            Key::Down => 0x11_000A,
            Key::Home => 0x11_000B,
            Key::End => 0x11_000C,
            Key::PageUp => 0x11_000D,
            Key::PageDown => 0x11_000E,
            Key::F(n) => 0x11_0100 + n as u32,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c.to_uppercase()),
            Key::F(n) => write!(f, "F{n}"),
            other => write!(f, "{other:?}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);
    pub const WIN: Modifiers = Modifiers(8);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether no modifier bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitAnd for Modifiers {
    type Output = Modifiers;
    fn bitand(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 & rhs.0)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (bit, name) in [
            (Modifiers::CTRL, "Ctrl"),
            (Modifiers::SHIFT, "Shift"),
            (Modifiers::ALT, "Alt"),
            (Modifiers::WIN, "Win"),
        ] {
            if self.contains(bit) {
                write!(f, "{name}+")?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// HotKey
// ---------------------------------------------------------------------------

/// A modifier-plus-key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HotKey {
    pub modifiers: Modifiers,
    pub key: Key,
}

impl HotKey {
    pub fn new(modifiers: Modifiers, key: Key) -> Self {
        Self { modifiers, key }
    }

    /// Registration id: modifier bits in the top byte, key code below.
    ///
    /// Stable across processes, so re-registering after a restart reuses
    /// the same id.
    pub fn id(self) -> u32 {
        ((self.modifiers.0 as u32) << 24) | self.key.code()
    }
}

impl fmt::Display for HotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.modifiers, self.key)
    }
}

// ---------------------------------------------------------------------------
// HotKeyTable
// ---------------------------------------------------------------------------

/// Registered hot keys, keyed by id.
///
/// Shared between the frame and the host's message loop, hence the mutex.
#[derive(Debug, Default)]
pub struct HotKeyTable {
    entries: Mutex<HashMap<u32, HotKey>>,
}

impl HotKeyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a combination, returning its id, or `None` when it is
    /// already registered.
    pub fn register(&self, hot_key: HotKey) -> Option<u32> {
        let mut entries = self.lock();
        let id = hot_key.id();
        if entries.contains_key(&id) {
            log::warn!("[HotKey] {hot_key} is already registered");
            return None;
        }
        entries.insert(id, hot_key);
        log::debug!("[HotKey] registered {hot_key} as {id:#010x}");
        Some(id)
    }

    /// Remove a combination, returning the id it held.
    pub fn unregister(&self, hot_key: HotKey) -> Option<u32> {
        let removed = self.lock().remove(&hot_key.id()).map(|key| key.id());
        if let Some(id) = removed {
            log::debug!("[HotKey] unregistered {hot_key} ({id:#010x})");
        }
        removed
    }

    /// Look up the combination behind an id delivered by the host.
    pub fn resolve(&self, id: u32) -> Option<HotKey> {
        self.lock().get(&id).copied()
    }

    pub fn contains(&self, hot_key: HotKey) -> bool {
        self.lock().contains_key(&hot_key.id())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<u32, HotKey>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── Modifiers ────────────────────────────────────────────────────

    #[test]
    fn modifiers_combined() {
        let mods = Modifiers::CTRL | Modifiers::ALT;
        assert!(mods.contains(Modifiers::CTRL));
        assert!(mods.contains(Modifiers::ALT));
        assert!(!mods.contains(Modifiers::SHIFT));
    }

    #[test]
    fn modifiers_contains_none() {
        // Every modifier set contains NONE.
        assert!(Modifiers::WIN.contains(Modifiers::NONE));
        assert!(Modifiers::NONE.contains(Modifiers::NONE));
    }

    // ── HotKey ids ───────────────────────────────────────────────────

    #[test]
    fn id_is_stable() {
        let a = HotKey::new(Modifiers::CTRL | Modifiers::SHIFT, Key::F(5));
        let b = HotKey::new(Modifiers::CTRL | Modifiers::SHIFT, Key::F(5));
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn id_distinguishes_modifiers_and_keys() {
        let base = HotKey::new(Modifiers::CTRL, Key::Char('s'));
        assert_ne!(base.id(), HotKey::new(Modifiers::ALT, Key::Char('s')).id());
        assert_ne!(base.id(), HotKey::new(Modifiers::CTRL, Key::Char('a')).id());
        // Named keys sit above the highest scalar value.
        assert_ne!(
            HotKey::new(Modifiers::NONE, Key::Enter).id(),
            HotKey::new(Modifiers::NONE, Key::Char('\u{10FFFF}')).id(),
        );
    }

    #[test]
    fn display_reads_like_a_shortcut() {
        let hot_key = HotKey::new(Modifiers::CTRL | Modifiers::SHIFT, Key::F(5));
        insta::assert_snapshot!(hot_key.to_string(), @"Ctrl+Shift+F5");
        let plain = HotKey::new(Modifiers::ALT, Key::Char('x'));
        insta::assert_snapshot!(plain.to_string(), @"Alt+X");
    }

    // ── HotKeyTable ──────────────────────────────────────────────────

    #[test]
    fn register_hands_out_the_stable_id() {
        let table = HotKeyTable::new();
        let hot_key = HotKey::new(Modifiers::CTRL, Key::Char('k'));
        assert_eq!(table.register(hot_key), Some(hot_key.id()));
        assert!(table.contains(hot_key));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let table = HotKeyTable::new();
        let hot_key = HotKey::new(Modifiers::WIN, Key::Char('d'));
        assert!(table.register(hot_key).is_some());
        assert_eq!(table.register(hot_key), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn unregister_frees_the_slot() {
        let table = HotKeyTable::new();
        let hot_key = HotKey::new(Modifiers::CTRL | Modifiers::ALT, Key::Delete);
        let id = table.register(hot_key).unwrap();
        assert_eq!(table.unregister(hot_key), Some(id));
        assert_eq!(table.unregister(hot_key), None);
        // Gone means it can come back.
        assert_eq!(table.register(hot_key), Some(id));
    }

    #[test]
    fn resolve_maps_host_ids_back() {
        let table = HotKeyTable::new();
        let hot_key = HotKey::new(Modifiers::CTRL, Key::F(12));
        let id = table.register(hot_key).unwrap();
        assert_eq!(table.resolve(id), Some(hot_key));
        assert_eq!(table.resolve(id ^ 1), None);
    }
}
