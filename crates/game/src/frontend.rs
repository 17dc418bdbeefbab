//! Collaborators the simulation reports to.
//!
//! The core never touches a drawing surface or document directly. Each tick
//! it hands a [`Frame`] of these capabilities to the world, which draws the
//! arena, updates the HUD and announces lessons through them.

use crate::entity::SpriteKind;
use crate::geometry::{Bounds, Rect};

/// Draws sprites. `clear` is called once per tick before any `draw`.
pub trait Renderer {
    fn clear(&mut self, bounds: &Bounds);

    fn draw(&mut self, kind: SpriteKind, rect: Rect);
}

/// Score, health, timer and end-of-game display.
pub trait UiOutput {
    fn set_score(&mut self, score: u32);

    fn set_health(&mut self, health: u32);

    /// Seconds since session start, rounded to one decimal place.
    fn set_elapsed_seconds(&mut self, seconds: f64);

    fn show_game_over(&mut self);

    /// Called when a session restarts.
    fn hide_game_over(&mut self) {}
}

/// One-shot tutorial messages.
pub trait LessonChannel {
    fn announce(&mut self, message: &str);
}

/// The collaborators for one tick.
pub struct Frame<'a> {
    pub renderer: &'a mut dyn Renderer,
    pub ui: &'a mut dyn UiOutput,
    pub lessons: &'a mut dyn LessonChannel,
}

impl<'a> Frame<'a> {
    pub fn new(
        renderer: &'a mut dyn Renderer,
        ui: &'a mut dyn UiOutput,
        lessons: &'a mut dyn LessonChannel,
    ) -> Self {
        Self {
            renderer,
            ui,
            lessons,
        }
    }
}

/// A key event from an input source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    Down(String),
    Up(String),
}

/// Whether the world recognised a key. Callers suppress the browser's default
/// action for handled keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    Handled,
    Ignored,
}
