//! Bacteria decision making.

mod bacteria_brain;

pub use bacteria_brain::{chase_direction, think};
