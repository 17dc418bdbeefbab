//! Game entities.
//!
//! The cell, proteins and both bacteria variants share a [`Body`] (rectangle
//! plus movement state). Variant behavior is selected by [`SpriteKind`].

mod bacteria;
mod cell;
mod protein;
mod sprite;

pub use bacteria::{Bacteria, BacteriaStats};
pub use cell::PlayerCell;
pub use protein::Protein;
pub use sprite::{BacteriaKind, Body, Direction, Sprite, SpriteKind};
