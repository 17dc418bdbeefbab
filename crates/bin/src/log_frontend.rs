//! Collaborators that report the simulation through `tracing`.

use game::{Bounds, LessonChannel, Rect, Renderer, SpriteKind, UiOutput};
use tracing::{debug, info, trace};

/// Counts draw calls and traces each sprite.
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub frames: u64,
    pub draws_this_frame: usize,
}

impl Renderer for LogRenderer {
    fn clear(&mut self, bounds: &Bounds) {
        if self.frames > 0 {
            trace!("Frame {} drew {} sprites", self.frames, self.draws_this_frame);
        }
        self.frames += 1;
        self.draws_this_frame = 0;
        trace!("Clear {}x{}", bounds.width(), bounds.height());
    }

    fn draw(&mut self, kind: SpriteKind, rect: Rect) {
        self.draws_this_frame += 1;
        trace!("Draw {:?} at ({:.0}, {:.0})", kind, rect.x(), rect.y());
    }
}

/// Logs HUD values when they change.
#[derive(Debug, Default)]
pub struct LogUi {
    score: Option<u32>,
    health: Option<u32>,
    whole_seconds: Option<u64>,
}

impl UiOutput for LogUi {
    fn set_score(&mut self, score: u32) {
        if self.score != Some(score) {
            self.score = Some(score);
            info!("Score: {}", score);
        }
    }

    fn set_health(&mut self, health: u32) {
        if self.health != Some(health) {
            self.health = Some(health);
            info!("Health: {}", health);
        }
    }

    fn set_elapsed_seconds(&mut self, seconds: f64) {
        let whole = seconds.max(0.0) as u64;
        if self.whole_seconds != Some(whole) {
            self.whole_seconds = Some(whole);
            debug!("Time: {:.1}s", seconds);
        }
    }

    fn show_game_over(&mut self) {
        info!("GAME OVER");
    }

    fn hide_game_over(&mut self) {
        *self = Self::default();
        info!("Restarting");
    }
}

/// Logs each lesson.
#[derive(Debug, Default)]
pub struct LogLessons {
    pub announced: usize,
}

impl LessonChannel for LogLessons {
    fn announce(&mut self, message: &str) {
        self.announced += 1;
        info!("Lesson: {}", message);
    }
}
