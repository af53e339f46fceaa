//! Input system with action-based mapping
//!
//! Provides an abstraction layer between raw key snapshots and viewer actions.

use std::collections::{HashMap, HashSet};

use minifb::Key;

/// Viewer actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Pan up (W by default)
    MoveUp,
    /// Pan down (S by default)
    MoveDown,
    /// Pan left (A by default)
    MoveLeft,
    /// Pan right (D by default)
    MoveRight,
    /// Close the viewer (Escape by default)
    Quit,
}

/// Modifier keys held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    /// Modifier flags for a key snapshot, either side of the keyboard
    pub fn from_keys(keys: &[Key]) -> Self {
        Self {
            shift: keys
                .iter()
                .any(|k| matches!(k, Key::LeftShift | Key::RightShift)),
            ctrl: keys
                .iter()
                .any(|k| matches!(k, Key::LeftCtrl | Key::RightCtrl)),
        }
    }
}

/// Current state of all inputs for a frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Actions currently held down
    pub held: HashSet<InputAction>,
    /// Modifier flags, regardless of bindings
    pub modifiers: Modifiers,
}

impl InputState {
    /// Create a new empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Input state with the given actions held
    pub fn holding(actions: &[InputAction]) -> Self {
        Self {
            held: actions.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// The same state with different modifier flags
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check if an action is currently held
    pub fn is_held(&self, action: InputAction) -> bool {
        self.held.contains(&action)
    }
}

/// Maps keys to viewer actions
#[derive(Debug, Clone)]
pub struct InputBindings {
    bindings: HashMap<Key, InputAction>,
}

impl Default for InputBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };

        // Default WASD bindings
        bindings.bind(Key::W, InputAction::MoveUp);
        bindings.bind(Key::S, InputAction::MoveDown);
        bindings.bind(Key::A, InputAction::MoveLeft);
        bindings.bind(Key::D, InputAction::MoveRight);

        // Arrow keys as alternative
        bindings.bind(Key::Up, InputAction::MoveUp);
        bindings.bind(Key::Down, InputAction::MoveDown);
        bindings.bind(Key::Left, InputAction::MoveLeft);
        bindings.bind(Key::Right, InputAction::MoveRight);

        bindings.bind(Key::Escape, InputAction::Quit);

        bindings
    }
}

impl InputBindings {
    /// Create new input bindings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a key to an action
    pub fn bind(&mut self, key: Key, action: InputAction) {
        self.bindings.insert(key, action);
    }

    /// Get the action for a key, if any
    pub fn get_key_action(&self, key: Key) -> Option<InputAction> {
        self.bindings.get(&key).copied()
    }
}

/// Input handler that turns key snapshots into per-frame state
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Current input state
    pub state: InputState,
    /// Input bindings
    pub bindings: InputBindings,
}

impl InputHandler {
    /// Create a new input handler with default bindings
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the state with the keys down right now
    pub fn update_from_keys(&mut self, keys: &[Key]) {
        self.state.held = keys
            .iter()
            .filter_map(|key| self.bindings.get_key_action(*key))
            .collect();
        self.state.modifiers = Modifiers::from_keys(keys);
    }
}
