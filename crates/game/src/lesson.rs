//! One-shot tutorial lessons.

use crate::entity::{BacteriaKind, SpriteKind};
use crate::frontend::LessonChannel;
use tracing::debug;

/// Gameplay trigger tied to a tutorial message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lesson {
    Protein,
    Bacteria,
    BombBacteria,
    LowHealth,
    Death,
}

impl Lesson {
    pub const ALL: [Lesson; 5] = [
        Lesson::Protein,
        Lesson::Bacteria,
        Lesson::BombBacteria,
        Lesson::LowHealth,
        Lesson::Death,
    ];

    pub const fn message(self) -> &'static str {
        match self {
            Lesson::Protein => "You ate a protein! Proteins restore your health and raise your score.",
            Lesson::Bacteria => "Ouch! Bacteria drain your health while they touch you. Keep moving.",
            Lesson::BombBacteria => "Bomb bacteria hit ten times harder than normal bacteria. Avoid them!",
            Lesson::LowHealth => "Your health is low. Find proteins quickly!",
            Lesson::Death => "Your cell has died. Press restart to try again.",
        }
    }

    /// Lesson taught on contact with a sprite of `kind`, if any.
    pub const fn for_contact(kind: SpriteKind) -> Option<Lesson> {
        match kind {
            SpriteKind::Protein => Some(Lesson::Protein),
            SpriteKind::Bacteria(BacteriaKind::Standard) => Some(Lesson::Bacteria),
            SpriteKind::Bacteria(BacteriaKind::Bomb) => Some(Lesson::BombBacteria),
            SpriteKind::Cell => None,
        }
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// Tracks which lessons have been taught this session.
#[derive(Debug, Clone)]
pub struct LessonBook {
    taught: [bool; Lesson::ALL.len()],
    enabled: bool,
}

impl LessonBook {
    pub fn new(enabled: bool) -> Self {
        Self {
            taught: [false; Lesson::ALL.len()],
            enabled,
        }
    }

    /// Announce `lesson` unless it has already been taught.
    /// Returns true when a message was sent.
    pub fn teach(&mut self, lesson: Lesson, channel: &mut dyn LessonChannel) -> bool {
        if !self.enabled || self.taught[lesson.index()] {
            return false;
        }
        self.taught[lesson.index()] = true;
        debug!("Teaching lesson {:?}", lesson);
        channel.announce(lesson.message());
        true
    }

    #[inline]
    pub fn is_taught(&self, lesson: Lesson) -> bool {
        self.taught[lesson.index()]
    }

    /// Forget every taught lesson.
    pub fn reset(&mut self) {
        self.taught = [false; Lesson::ALL.len()];
    }
}
