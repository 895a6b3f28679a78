use std::collections::{HashMap, HashSet};
use std::hash::Hash;
pub use winit::keyboard::KeyCode;

/// Keyboard state for a single frame.
///
/// The host feeds raw key transitions through [`press`](Self::press) and
/// [`release`](Self::release) and calls [`clear_frame_state`](Self::clear_frame_state)
/// once the frame has been processed.
#[derive(Debug, Default)]
pub struct InputState {
    pub keys_held: HashSet<KeyCode>,
    pub keys_pressed: HashSet<KeyCode>,
    pub keys_released: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down. Auto-repeat of a held key is not a new press.
    pub fn press(&mut self, key: KeyCode) {
        if self.keys_held.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    pub fn release(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
        self.keys_released.insert(key);
    }

    pub fn clear_frame_state(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool { self.keys_held.contains(&key) }
    pub fn is_key_pressed(&self, key: KeyCode) -> bool { self.keys_pressed.contains(&key) }
    pub fn is_key_released(&self, key: KeyCode) -> bool { self.keys_released.contains(&key) }
}

/// Maps logical actions (defined by a scene) to one or more keys.
#[derive(Debug, Clone)]
pub struct ActionMap<A: Hash + Eq + Copy> {
    bindings: HashMap<A, Vec<KeyCode>>,
}

impl<A: Hash + Eq + Copy> ActionMap<A> {
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    pub fn bind(&mut self, action: A, key: KeyCode) {
        self.bindings.entry(action).or_default().push(key);
    }

    /// Builder form of [`bind`](Self::bind).
    pub fn with(mut self, action: A, key: KeyCode) -> Self {
        self.bind(action, key);
        self
    }

    /// Returns true if the action was triggered this frame (pressed).
    pub fn is_pressed(&self, action: A, input: &InputState) -> bool {
        self.bindings
            .get(&action)
            .is_some_and(|keys| keys.iter().any(|k| input.is_key_pressed(*k)))
    }

    /// Returns true if the action is currently being held.
    pub fn is_held(&self, action: A, input: &InputState) -> bool {
        self.bindings
            .get(&action)
            .is_some_and(|keys| keys.iter().any(|k| input.is_key_held(*k)))
    }

    /// First bound action pressed this frame, in `order`.
    pub fn first_pressed(&self, order: &[A], input: &InputState) -> Option<A> {
        order.iter().copied().find(|a| self.is_pressed(*a, input))
    }
}

impl<A: Hash + Eq + Copy> Default for ActionMap<A> {
    fn default() -> Self { Self::new() }
}
