//! Timed creation of proteins and bacteria.

use crate::config::Config;
use crate::entity::{Bacteria, BacteriaKind, Protein, Sprite};
use crate::geometry::Bounds;
use glam::Vec2;
use rand::Rng;
use tracing::debug;

/// Random top-left position that keeps a box of `size` fully inside `bounds`.
#[inline]
pub fn random_position<R: Rng>(bounds: &Bounds, size: Vec2, rng: &mut R) -> Vec2 {
    let max_x = (bounds.right - size.x).max(bounds.left);
    let max_y = (bounds.bottom - size.y).max(bounds.top);
    Vec2::new(
        rng.random_range(bounds.left..=max_x),
        rng.random_range(bounds.top..=max_y),
    )
}

/// Protein with a random size in `[min_size, max_size)` at a random position.
pub fn random_protein<R: Rng>(config: &Config, bounds: &Bounds, rng: &mut R) -> Protein {
    let min_size = config.protein.min_size as f32;
    let max_size = config.protein.max_size as f32;
    let size = if max_size > min_size {
        rng.random_range(min_size..max_size)
    } else {
        min_size
    };
    let position = random_position(bounds, Vec2::splat(size), rng);
    Protein::new(position, size, config.protein.nutrition)
}

/// Bacteria of `kind` at a random position.
pub fn random_bacteria<R: Rng>(config: &Config, kind: BacteriaKind, bounds: &Bounds, rng: &mut R) -> Bacteria {
    let stats = config.bacteria_stats(kind);
    let position = random_position(bounds, Vec2::splat(stats.size), rng);
    Bacteria::new(kind, position, stats)
}

/// Spawn schedule state for one session.
#[derive(Debug, Clone, Copy)]
pub struct Spawner {
    pub last_protein_spawn_ms: f64,
    pub last_bacteria_spawn_ms: f64,
}

impl Spawner {
    pub fn new(now_ms: f64) -> Self {
        Self {
            last_protein_spawn_ms: now_ms,
            last_bacteria_spawn_ms: now_ms,
        }
    }

    /// Session-start population.
    pub fn initial_proteins<R: Rng>(config: &Config, bounds: &Bounds, rng: &mut R) -> Vec<Protein> {
        (0..config.protein.initial_count)
            .map(|_| random_protein(config, bounds, rng))
            .collect()
    }

    /// Session-start bacteria: every standard one, then every bomb one.
    pub fn initial_bacteria<R: Rng>(config: &Config, bounds: &Bounds, rng: &mut R) -> Vec<Bacteria> {
        let mut bacteria = Vec::with_capacity(
            config.bacteria_count(BacteriaKind::Standard) + config.bacteria_count(BacteriaKind::Bomb),
        );
        for kind in [BacteriaKind::Standard, BacteriaKind::Bomb] {
            for _ in 0..config.bacteria_count(kind) {
                bacteria.push(random_bacteria(config, kind, bounds, rng));
            }
        }
        bacteria
    }

    /// Whether a protein should spawn this tick.
    #[inline]
    pub fn protein_due(&self, live: usize, config: &Config, now_ms: f64) -> bool {
        live < config.protein.target_count
            && now_ms - self.last_protein_spawn_ms >= config.protein.spawn_cooldown_ms as f64
    }

    /// Spawn at most one protein if the cooldown has elapsed and the arena is
    /// below its target count. Returns true when one was created.
    pub fn spawn_protein<R: Rng>(
        &mut self,
        proteins: &mut Vec<Protein>,
        config: &Config,
        bounds: &Bounds,
        now_ms: f64,
        rng: &mut R,
    ) -> bool {
        if !self.protein_due(proteins.len(), config, now_ms) {
            return false;
        }
        let protein = random_protein(config, bounds, rng);
        let rect = protein.rect();
        debug!("Protein spawned at ({:.0}, {:.0}), size {:.1}", rect.x(), rect.y(), rect.width());
        proteins.push(protein);
        self.last_protein_spawn_ms = now_ms;
        true
    }

    /// Mid-session bacteria spawning. Disabled when the interval is zero.
    pub fn spawn_bacteria<R: Rng>(
        &mut self,
        bacteria: &mut Vec<Bacteria>,
        config: &Config,
        bounds: &Bounds,
        now_ms: f64,
        rng: &mut R,
    ) -> bool {
        let interval = config.spawner.bacteria_interval_ms;
        if interval == 0
            || bacteria.len() >= config.spawner.max_bacteria
            || now_ms - self.last_bacteria_spawn_ms < interval as f64
        {
            return false;
        }

        let standard = config.bacteria_count(BacteriaKind::Standard);
        let total = standard + config.bacteria_count(BacteriaKind::Bomb);
        let kind = if total == 0 || rng.random_range(0..total) < standard {
            BacteriaKind::Standard
        } else {
            BacteriaKind::Bomb
        };
        bacteria.push(random_bacteria(config, kind, bounds, rng));
        self.last_bacteria_spawn_ms = now_ms;
        debug!("Spawned {} ({} live)", kind.name(), bacteria.len());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bounds(config: &Config) -> Bounds {
        Bounds::new(config.arena.width as f32, config.arena.height as f32)
    }

    #[test]
    fn test_random_protein_fits_arena() {
        let config = Config::default();
        let bounds = bounds(&config);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let p = random_protein(&config, &bounds, &mut rng);
            let r = p.rect();
            assert!(r.width() >= 30.0 && r.width() < 40.0, "size {}", r.width());
            assert_eq!(r.width(), r.height());
            assert!(r.is_within(&bounds), "{r:?}");
        }
    }

    #[test]
    fn test_entity_as_large_as_arena_sits_at_origin() {
        let bounds = Bounds::new(50.0, 50.0);
        let mut rng = StdRng::seed_from_u64(3);
        let pos = random_position(&bounds, Vec2::splat(50.0), &mut rng);
        assert_eq!(pos, Vec2::ZERO);
    }

    #[test]
    fn test_initial_bacteria_counts() {
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(9);
        let bacteria = Spawner::initial_bacteria(&config, &bounds(&config), &mut rng);
        let bombs = bacteria.iter().filter(|b| b.variant == BacteriaKind::Bomb).count();
        assert_eq!(bacteria.len(), 10);
        assert_eq!(bombs, 7);
        for b in &bacteria {
            assert_eq!(b.rect().width(), b.variant.stats().size);
            assert!(b.rect().is_within(&bounds(&config)));
        }
    }

    #[test]
    fn test_protein_respects_cooldown_and_target() {
        let config = Config::default();
        let bounds = bounds(&config);
        let mut rng = StdRng::seed_from_u64(5);
        let mut spawner = Spawner::new(0.0);
        let mut proteins = Vec::new();

        assert!(!spawner.spawn_protein(&mut proteins, &config, &bounds, 2999.0, &mut rng));
        assert!(spawner.spawn_protein(&mut proteins, &config, &bounds, 3000.0, &mut rng));
        // One per cooldown, not a burst.
        assert!(!spawner.spawn_protein(&mut proteins, &config, &bounds, 3001.0, &mut rng));
        assert_eq!(proteins.len(), 1);

        let mut now = 3000.0;
        while proteins.len() < config.protein.target_count {
            now += 3000.0;
            assert!(spawner.spawn_protein(&mut proteins, &config, &bounds, now, &mut rng));
        }
        assert!(!spawner.spawn_protein(&mut proteins, &config, &bounds, now + 100_000.0, &mut rng));
        assert_eq!(proteins.len(), 5);
    }

    #[test]
    fn test_bacteria_spawning_disabled_by_default() {
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut spawner = Spawner::new(0.0);
        let mut bacteria = Vec::new();
        assert!(!spawner.spawn_bacteria(&mut bacteria, &config, &bounds(&config), 1e9, &mut rng));
        assert!(bacteria.is_empty());
    }

    #[test]
    fn test_bacteria_spawning_on_interval_up_to_cap() {
        let mut config = Config::default();
        config.spawner.bacteria_interval_ms = 1000;
        config.spawner.max_bacteria = 2;
        let bounds = bounds(&config);
        let mut rng = StdRng::seed_from_u64(5);
        let mut spawner = Spawner::new(0.0);
        let mut bacteria = Vec::new();

        assert!(!spawner.spawn_bacteria(&mut bacteria, &config, &bounds, 999.0, &mut rng));
        assert!(spawner.spawn_bacteria(&mut bacteria, &config, &bounds, 1000.0, &mut rng));
        assert!(spawner.spawn_bacteria(&mut bacteria, &config, &bounds, 2000.0, &mut rng));
        assert!(!spawner.spawn_bacteria(&mut bacteria, &config, &bounds, 3000.0, &mut rng));
        assert_eq!(bacteria.len(), 2);
    }
}
