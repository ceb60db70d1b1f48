//! Input adapter
//!
//! Keyboard, touch and pointer handlers all funnel into
//! [`TickInput::set_intent`]. Handlers only flip flags; the simulation reads
//! a snapshot once per tick.

use crate::sim::TickInput;

/// A logical action the player can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Left,
    Right,
    Jump,
}

impl Intent {
    /// Action name understood by [`TickInput::set_intent`]
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Left => "left",
            Intent::Right => "right",
            Intent::Jump => "jump",
        }
    }

    /// Map a `KeyboardEvent.key` value to an intent
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Intent::Left),
            "ArrowRight" | "d" | "D" => Some(Intent::Right),
            "ArrowUp" | "w" | "W" | " " => Some(Intent::Jump),
            _ => None,
        }
    }
}

/// Apply a key-down (`held = true`) or key-up to the intent map
///
/// Returns true if the key is bound, so the caller can suppress the
/// browser default (scrolling on arrows and space).
pub fn apply_key(input: &mut TickInput, key: &str, held: bool) -> bool {
    match Intent::from_key(key) {
        Some(intent) => input.set_intent(intent.name(), held),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        let mut input = TickInput::default();
        assert!(apply_key(&mut input, "ArrowLeft", true));
        assert!(apply_key(&mut input, "ArrowUp", true));
        assert!(input.left && input.jump);

        assert!(apply_key(&mut input, "ArrowLeft", false));
        assert!(!input.left);
        assert!(input.jump);
    }

    #[test]
    fn test_level_sensitive() {
        // Key repeat sends many key-downs; the flag just stays held
        let mut input = TickInput::default();
        for _ in 0..5 {
            apply_key(&mut input, "d", true);
        }
        assert!(input.right);
        apply_key(&mut input, "d", false);
        assert!(!input.right);
    }

    #[test]
    fn test_unbound_key() {
        let mut input = TickInput::default();
        assert!(!apply_key(&mut input, "Escape", true));
        assert_eq!(input, TickInput::default());
    }

    #[test]
    fn test_intent_names_are_accepted() {
        for intent in [Intent::Left, Intent::Right, Intent::Jump] {
            let mut input = TickInput::default();
            assert!(input.set_intent(intent.name(), true));
            assert_ne!(input, TickInput::default());
        }
    }
}
