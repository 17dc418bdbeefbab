//! Cell game simulation core.
//!
//! A player-steered cell roams a bounded arena, eating proteins and dodging
//! bacteria. Drawing, HUD updates and tutorial messages go through the
//! collaborator traits in [`frontend`]; randomness is injected into [`World`].

pub mod ai;
pub mod config;
pub mod entity;
pub mod error;
pub mod frontend;
pub mod geometry;
pub mod input;
pub mod lesson;
pub mod spawner;
pub mod world;

// Re-export commonly used types
pub use config::Config;
pub use entity::{BacteriaKind, Direction, SpriteKind};
pub use error::ConfigError;
pub use frontend::{Frame, KeyEvent, KeyResponse, LessonChannel, Renderer, UiOutput};
pub use geometry::{Bounds, Rect};
pub use world::{SessionState, SessionStats, TickOutcome, World};
