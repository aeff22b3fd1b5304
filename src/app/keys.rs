//! Keyboard Bindings
//!
//! A small table mapping keys to handlers over some target `T`, with a
//! name and description per binding for the controls overlay.
//!
//! Letters match regardless of case: `Key::Char(b'w')` and `Key::Char(b'W')`
//! are the same binding.
//!
//! ```rust,ignore
//! let mut keys = KeyBindings::<Settings>::new();
//! keys.toggle(Key::Char(b'z'), "Z", "Toggle wireframe", |s| &mut s.wireframe)?;
//! keys.key_down(Key::Char(b'Z'), &mut settings);
//! ```

use std::fmt;

use rustc_hash::FxHashMap;

use crate::errors::{Error, Result};

/// Keys without an ASCII code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKey {
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// An ASCII key (`27` is escape, `b' '` the space bar).
    Char(u8),
    Special(SpecialKey),
}

impl Key {
    pub const ESCAPE: Key = Key::Char(27);
    pub const SPACE: Key = Key::Char(b' ');

    /// Folds letters to lowercase so both cases compare equal.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Key::Char(c) => Key::Char(c.to_ascii_lowercase()),
            special @ Key::Special(_) => special,
        }
    }

    /// Whether `self` and `other` trigger the same binding.
    #[must_use]
    pub fn matches(self, other: Key) -> bool {
        self.normalized() == other.normalized()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Key::Char(27) => f.write_str("ESC"),
            Key::Char(b' ') => f.write_str("Spacebar"),
            Key::Char(c) if c.is_ascii_graphic() => {
                write!(f, "{}", char::from(c.to_ascii_uppercase()))
            }
            Key::Char(c) => write!(f, "0x{c:02X}"),
            Key::Special(SpecialKey::Left) => f.write_str("Left Arrow"),
            Key::Special(SpecialKey::Right) => f.write_str("Right Arrow"),
            Key::Special(SpecialKey::Up) => f.write_str("Up Arrow"),
            Key::Special(SpecialKey::Down) => f.write_str("Down Arrow"),
            Key::Special(special) => write!(f, "{special:?}"),
        }
    }
}

pub type KeyHandler<T> = Box<dyn Fn(&mut T)>;

/// One entry of a [`KeyBindings`] table.
pub struct Binding<T> {
    pub key: Key,
    pub name: String,
    pub description: String,
    on_down: Option<KeyHandler<T>>,
    on_up: Option<KeyHandler<T>>,
}

impl<T> Binding<T> {
    /// Overlay line: `[name] description`.
    #[must_use]
    pub fn instruction(&self) -> String {
        format!("[{}] {}", self.name, self.description)
    }
}

impl<T> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("description", &self.description)
            .field("on_down", &self.on_down.is_some())
            .field("on_up", &self.on_up.is_some())
            .finish()
    }
}

/// Ordered key table; registration order is the overlay order.
pub struct KeyBindings<T> {
    bindings: Vec<Binding<T>>,
    lookup: FxHashMap<Key, usize>,
}

impl<T> Default for KeyBindings<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> KeyBindings<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            lookup: FxHashMap::default(),
        }
    }

    /// Registers handlers for `key`. Either handler may be absent.
    pub fn bind(
        &mut self,
        key: Key,
        name: impl Into<String>,
        description: impl Into<String>,
        on_down: Option<KeyHandler<T>>,
        on_up: Option<KeyHandler<T>>,
    ) -> Result<&mut Self> {
        let normalized = key.normalized();
        if self.lookup.contains_key(&normalized) {
            return Err(Error::DuplicateKeyBinding(key));
        }

        self.lookup.insert(normalized, self.bindings.len());
        self.bindings.push(Binding {
            key,
            name: name.into(),
            description: description.into(),
            on_down,
            on_up,
        });
        Ok(self)
    }

    /// Binds a key-down action, named after the key itself.
    pub fn on_press(
        &mut self,
        key: Key,
        description: impl Into<String>,
        action: impl Fn(&mut T) + 'static,
    ) -> Result<&mut Self> {
        self.bind(key, key.to_string(), description, Some(Box::new(action)), None)
    }

    /// Binds a key that sets a flag while held.
    pub fn hold(
        &mut self,
        key: Key,
        description: impl Into<String>,
        flag: fn(&mut T) -> &mut bool,
    ) -> Result<&mut Self>
    where
        T: 'static,
    {
        self.bind(
            key,
            key.to_string(),
            description,
            Some(Box::new(move |target| *flag(target) = true)),
            Some(Box::new(move |target| *flag(target) = false)),
        )
    }

    /// Binds a key that flips a flag on each press.
    pub fn toggle(
        &mut self,
        key: Key,
        name: impl Into<String>,
        description: impl Into<String>,
        flag: fn(&mut T) -> &mut bool,
    ) -> Result<&mut Self>
    where
        T: 'static,
    {
        let description = description.into();
        let label = description.clone();
        self.bind(
            key,
            name,
            description,
            Some(Box::new(move |target| {
                let value = flag(target);
                *value = !*value;
                log::info!("{label}: {}", if *value { "on" } else { "off" });
            })),
            None,
        )
    }

    /// Runs the key-down handler bound to `key`. Returns whether a binding
    /// matched (even one without a down handler).
    pub fn key_down(&self, key: Key, target: &mut T) -> bool {
        self.dispatch(key, target, |binding| binding.on_down.as_ref())
    }

    pub fn key_up(&self, key: Key, target: &mut T) -> bool {
        self.dispatch(key, target, |binding| binding.on_up.as_ref())
    }

    fn dispatch(
        &self,
        key: Key,
        target: &mut T,
        handler: impl Fn(&Binding<T>) -> Option<&KeyHandler<T>>,
    ) -> bool {
        let Some(binding) = self.get(key) else {
            log::debug!("No binding for key {key}");
            return false;
        };
        if let Some(handler) = handler(binding) {
            handler(target);
        }
        true
    }

    #[must_use]
    pub fn get(&self, key: Key) -> Option<&Binding<T>> {
        self.lookup.get(&key.normalized()).map(|&index| &self.bindings[index])
    }

    #[must_use]
    pub fn contains(&self, key: Key) -> bool {
        self.lookup.contains_key(&key.normalized())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding<T>> {
        self.bindings.iter()
    }

    /// Controls overlay: the mouse controls followed by one line per binding.
    #[must_use]
    pub fn instructions(&self) -> Vec<String> {
        let mut lines = vec![
            "Controls:".to_owned(),
            "[Move mouse] Look around".to_owned(),
            "[Scroll up] Increase FOV".to_owned(),
            "[Scroll down] Decrease FOV".to_owned(),
        ];
        lines.extend(self.bindings.iter().map(Binding::instruction));
        lines
    }
}

impl<T> fmt::Debug for KeyBindings<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.bindings).finish()
    }
}
