//! World state and the per-tick simulation.
//!
//! The world exclusively owns the cell, every protein and every bacteria.
//! One call to [`World::tick`] advances the whole arena by one step in a fixed
//! order: move the cell, spawn, think and move bacteria, resolve protein and
//! bacteria contacts, draw, update the HUD, then check for lessons and death.

use crate::ai;
use crate::config::Config;
use crate::entity::{Bacteria, Direction, PlayerCell, Protein, Sprite, SpriteKind};
use crate::error::ConfigError;
use crate::frontend::{Frame, KeyEvent, KeyResponse, UiOutput};
use crate::geometry::Bounds;
use crate::input::InputMapper;
use crate::lesson::{Lesson, LessonBook};
use crate::spawner::Spawner;
use glam::Vec2;
use rand::Rng;
use rand::rngs::SmallRng;
use tracing::{info, trace};

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    /// Terminal until [`World::restart`].
    Ended,
}

/// Result of one [`World::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// The cell died this tick. Returned exactly once per session.
    GameOver,
    /// The session had already ended; nothing was processed.
    Ended,
}

/// Per-session counters reported at game over.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionStats {
    pub ticks: u64,
    pub proteins_eaten: u32,
    pub damage_taken: f64,
}

/// The game world.
#[derive(Debug)]
pub struct World<R: Rng = SmallRng> {
    config: Config,
    bounds: Bounds,
    cell: PlayerCell,
    proteins: Vec<Protein>,
    bacteria: Vec<Bacteria>,
    spawner: Spawner,
    lessons: LessonBook,
    input: InputMapper,
    state: SessionState,
    started_at_ms: f64,
    stats: SessionStats,
    rng: R,

    // Reused between ticks.
    eaten_this_tick: Vec<u32>,
}

impl<R: Rng> World<R> {
    /// Validate `config` and start a session at `now_ms`.
    pub fn new(config: Config, rng: R, now_ms: f64) -> Result<Self, ConfigError> {
        config.validate()?;
        let bounds = Bounds::new(config.arena.width as f32, config.arena.height as f32);
        let mut world = Self {
            cell: Self::new_cell(&config, &bounds),
            lessons: LessonBook::new(config.lessons.enabled),
            input: InputMapper::new(&config.input),
            proteins: Vec::with_capacity(config.protein.target_count.max(config.protein.initial_count)),
            bacteria: Vec::new(),
            spawner: Spawner::new(now_ms),
            state: SessionState::Running,
            started_at_ms: now_ms,
            stats: SessionStats::default(),
            rng,
            eaten_this_tick: Vec::with_capacity(8),
            config,
            bounds,
        };
        world.populate(now_ms);
        Ok(world)
    }

    fn new_cell(config: &Config, bounds: &Bounds) -> PlayerCell {
        let size = config.cell.size as f32;
        PlayerCell::new(
            bounds.centered(Vec2::splat(size)),
            size,
            config.cell.velocity as f32,
            config.cell.max_health,
        )
    }

    /// Reset everything session-scoped and spawn the starting population.
    fn populate(&mut self, now_ms: f64) {
        self.cell = Self::new_cell(&self.config, &self.bounds);
        self.proteins = Spawner::initial_proteins(&self.config, &self.bounds, &mut self.rng);
        self.bacteria = Spawner::initial_bacteria(&self.config, &self.bounds, &mut self.rng);
        self.spawner = Spawner::new(now_ms);
        self.started_at_ms = now_ms;
        self.stats = SessionStats::default();
        self.state = SessionState::Running;

        info!(
            "Session started: arena {}x{}, {} proteins, {} bacteria",
            self.bounds.width(),
            self.bounds.height(),
            self.proteins.len(),
            self.bacteria.len()
        );
    }

    /// Start a fresh session: new cell, score, health, proteins, bacteria and
    /// timers. Lessons are forgotten unless configured to persist.
    pub fn restart(&mut self, now_ms: f64, ui: &mut dyn UiOutput) {
        if !self.config.lessons.persist_across_restarts {
            self.lessons.reset();
        }
        self.populate(now_ms);
        ui.hide_game_over();
        ui.set_score(self.cell.score);
        ui.set_health(self.cell.display_health());
        ui.set_elapsed_seconds(0.0);
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self, now_ms: f64, frame: &mut Frame<'_>) -> TickOutcome {
        if self.state == SessionState::Ended {
            return TickOutcome::Ended;
        }
        self.stats.ticks += 1;

        self.cell.step(&self.bounds);

        self.spawner
            .spawn_protein(&mut self.proteins, &self.config, &self.bounds, now_ms, &mut self.rng);
        self.spawner
            .spawn_bacteria(&mut self.bacteria, &self.config, &self.bounds, now_ms, &mut self.rng);

        let cell_position = self.cell.rect().origin;
        for bacteria in &mut self.bacteria {
            ai::think(bacteria, cell_position, &mut self.rng);
            bacteria.step(&self.bounds);
        }

        self.process_collisions(frame);
        self.render(frame);

        let elapsed = self.elapsed_seconds(now_ms);
        frame.ui.set_score(self.cell.score);
        frame.ui.set_health(self.cell.display_health());
        frame.ui.set_elapsed_seconds(elapsed);

        if self.cell.health < self.config.cell.low_health_threshold {
            self.lessons.teach(Lesson::LowHealth, frame.lessons);
        }

        trace!(
            "Tick {}: health {:.1}, score {}, {} proteins",
            self.stats.ticks,
            self.cell.health,
            self.cell.score,
            self.proteins.len()
        );

        if self.cell.is_dead() {
            self.lessons.teach(Lesson::Death, frame.lessons);
            self.state = SessionState::Ended;
            frame.ui.show_game_over();
            info!(
                "Game over after {:.1}s: score {}, {} proteins eaten, {:.1} damage taken",
                elapsed, self.cell.score, self.stats.proteins_eaten, self.stats.damage_taken
            );
            return TickOutcome::GameOver;
        }

        TickOutcome::Running
    }

    /// Eat every touching protein, then take damage from every touching
    /// bacteria. Simultaneous contacts all apply.
    fn process_collisions(&mut self, frame: &mut Frame<'_>) {
        let cell_rect = self.cell.rect();

        self.eaten_this_tick.clear();
        let eaten = &mut self.eaten_this_tick;
        self.proteins.retain(|protein| {
            if protein.rect().intersects(&cell_rect) {
                eaten.push(protein.nutrition);
                false
            } else {
                true
            }
        });
        for &nutrition in &self.eaten_this_tick {
            self.cell.eat(nutrition);
            self.stats.proteins_eaten += 1;
            self.lessons.teach(Lesson::Protein, frame.lessons);
        }

        for bacteria in &self.bacteria {
            if !bacteria.rect().intersects(&cell_rect) {
                continue;
            }
            self.cell.apply_damage(bacteria.attack);
            self.stats.damage_taken += bacteria.attack;
            if let Some(lesson) = Lesson::for_contact(bacteria.kind()) {
                self.lessons.teach(lesson, frame.lessons);
            }
        }
    }

    /// Proteins below, the cell above them, bacteria on top.
    fn render(&self, frame: &mut Frame<'_>) {
        let renderer = &mut *frame.renderer;
        renderer.clear(&self.bounds);
        for protein in &self.proteins {
            renderer.draw(SpriteKind::Protein, protein.rect());
        }
        renderer.draw(SpriteKind::Cell, self.cell.rect());
        for bacteria in &self.bacteria {
            renderer.draw(bacteria.kind(), bacteria.rect());
        }
    }

    /// Apply a key event to the cell's direction.
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyResponse {
        let next = match event {
            KeyEvent::Down(key) => self.input.key_down(key),
            KeyEvent::Up(key) => self.input.key_up(key, self.cell.direction()),
        };
        match next {
            Some(direction) => {
                self.cell.set_direction(direction);
                KeyResponse::Handled
            }
            None => KeyResponse::Ignored,
        }
    }

    /// Steer the cell directly.
    #[inline]
    pub fn set_cell_direction(&mut self, direction: Direction) {
        self.cell.set_direction(direction);
    }

    /// Seconds since session start, rounded to one decimal place.
    #[inline]
    pub fn elapsed_seconds(&self, now_ms: f64) -> f64 {
        ((now_ms - self.started_at_ms).max(0.0) / 100.0).round() / 10.0
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    #[inline]
    pub fn cell(&self) -> &PlayerCell {
        &self.cell
    }

    #[inline]
    pub fn proteins(&self) -> &[Protein] {
        &self.proteins
    }

    #[inline]
    pub fn bacteria(&self) -> &[Bacteria] {
        &self.bacteria
    }

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    #[inline]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    #[inline]
    pub fn lessons(&self) -> &LessonBook {
        &self.lessons
    }
}
