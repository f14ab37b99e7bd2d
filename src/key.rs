//! Key bindings for keyboard-driven navigation.

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// Short help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key label, e.g. `"←/h"`.
    pub key: String,
    /// What the key does.
    pub desc: String,
}

/// A set of keys bound to one action.
///
/// # Examples
///
/// ```rust
/// use paginated_table::key::Binding;
/// use bubbletea_rs::KeyMsg;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let next = Binding::new(vec![KeyCode::Right, KeyCode::Char('l')]).with_help("→/l", "next page");
/// let msg = KeyMsg { key: KeyCode::Char('l'), modifiers: KeyModifiers::NONE };
/// assert!(next.matches(&msg));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    keys: Vec<KeyCode>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates an enabled binding for `keys`.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: Help::default(),
            enabled: true,
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Bound keys.
    pub fn keys(&self) -> &[KeyCode] {
        &self.keys
    }

    /// Help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the binding is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns true if the binding is enabled and bound to the pressed key.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled && self.keys.contains(&msg.key)
    }
}

/// Bindings a component exposes to help views.
pub trait KeyMap {
    /// Bindings for a one-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for an expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
