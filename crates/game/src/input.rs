//! Keyboard to direction mapping.

use crate::config::InputConfig;
use crate::entity::Direction;
use std::collections::HashMap;

/// Maps key identifiers to movement directions.
#[derive(Debug, Clone)]
pub struct InputMapper {
    bindings: HashMap<String, Direction>,
}

impl InputMapper {
    pub fn new(config: &InputConfig) -> Self {
        let mut bindings = HashMap::new();
        for (keys, direction) in [
            (&config.left, Direction::Left),
            (&config.up, Direction::Up),
            (&config.right, Direction::Right),
            (&config.down, Direction::Down),
        ] {
            for key in keys {
                bindings.insert(key.clone(), direction);
            }
        }
        Self { bindings }
    }

    #[inline]
    pub fn direction_for(&self, key: &str) -> Option<Direction> {
        self.bindings.get(key).copied()
    }

    /// New direction after `key` is pressed. The last key pressed wins.
    /// `None` for unmapped keys.
    #[inline]
    pub fn key_down(&self, key: &str) -> Option<Direction> {
        self.direction_for(key)
    }

    /// New direction after `key` is released. Only the key driving the
    /// `current` direction stops the cell; a stale release is a no-op.
    /// `None` for unmapped keys.
    pub fn key_up(&self, key: &str, current: Direction) -> Option<Direction> {
        let released = self.direction_for(key)?;
        Some(if released == current {
            Direction::Stationary
        } else {
            current
        })
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new(&InputConfig::default())
    }
}
