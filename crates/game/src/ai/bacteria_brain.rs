use crate::entity::{Bacteria, Direction, Sprite};
use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Direction that closes the gap from `from` to `target` along the axis with
/// the larger absolute delta. Ties go vertical; an exact overlap stays put.
pub fn chase_direction(from: Vec2, target: Vec2) -> Direction {
    let delta = from - target;
    if delta == Vec2::ZERO {
        return Direction::Stationary;
    }
    if delta.x.abs() > delta.y.abs() {
        if delta.x > 0.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    } else if delta.y > 0.0 {
        Direction::Up
    } else {
        Direction::Down
    }
}

/// Pick this tick's direction for `bacteria`: chase `cell_position` with
/// probability `iq`, otherwise wander (pausing is a valid wander choice).
pub fn think<R: Rng>(bacteria: &mut Bacteria, cell_position: Vec2, rng: &mut R) -> Direction {
    let direction = if rng.random::<f64>() < bacteria.iq {
        chase_direction(bacteria.rect().origin, cell_position)
    } else {
        Direction::WANDER
            .choose(rng)
            .copied()
            .unwrap_or(Direction::Stationary)
    };
    bacteria.set_direction(direction);
    direction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{BacteriaKind, BacteriaStats};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn bacteria_at(x: f32, y: f32, iq: f64) -> Bacteria {
        let stats = BacteriaStats {
            iq,
            ..BacteriaKind::Standard.stats()
        };
        Bacteria::new(BacteriaKind::Standard, Vec2::new(x, y), stats)
    }

    #[test]
    fn test_genius_chases_left() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut b = bacteria_at(100.0, 0.0, 1.0);
        for _ in 0..100 {
            assert_eq!(think(&mut b, Vec2::ZERO, &mut rng), Direction::Left);
        }
        assert_eq!(b.direction(), Direction::Left);
    }

    #[test]
    fn test_chase_picks_dominant_axis() {
        let cell = Vec2::new(200.0, 200.0);
        assert_eq!(chase_direction(Vec2::new(100.0, 180.0), cell), Direction::Right);
        assert_eq!(chase_direction(Vec2::new(300.0, 250.0), cell), Direction::Left);
        assert_eq!(chase_direction(Vec2::new(190.0, 50.0), cell), Direction::Down);
        assert_eq!(chase_direction(Vec2::new(210.0, 350.0), cell), Direction::Up);
    }

    #[test]
    fn test_chase_ties_and_overlap() {
        let cell = Vec2::new(50.0, 50.0);
        assert_eq!(chase_direction(Vec2::new(60.0, 60.0), cell), Direction::Up);
        assert_eq!(chase_direction(Vec2::new(40.0, 40.0), cell), Direction::Down);
        assert_eq!(chase_direction(cell, cell), Direction::Stationary);
    }

    #[test]
    fn test_zero_iq_wanders_over_every_direction() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut b = bacteria_at(100.0, 0.0, 0.0);
        let mut seen: HashMap<Direction, usize> = HashMap::new();
        for _ in 0..5000 {
            *seen.entry(think(&mut b, Vec2::ZERO, &mut rng)).or_default() += 1;
        }
        for direction in Direction::WANDER {
            let count = seen.get(&direction).copied().unwrap_or(0);
            // Uniform over five choices: expect ~1000 each.
            assert!((800..1200).contains(&count), "{direction:?}: {count}");
        }
    }

    #[test]
    fn test_iq_sets_chase_rate() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut b = bacteria_at(100.0, 0.0, 0.5);
        let trials = 10_000;
        let lefts = (0..trials)
            .filter(|_| think(&mut b, Vec2::ZERO, &mut rng) == Direction::Left)
            .count();
        // Chases half the time plus a fifth of the wanders: 0.5 + 0.5 * 0.2 = 0.6.
        let rate = lefts as f64 / trials as f64;
        assert!((0.55..0.65).contains(&rate), "rate {rate}");
    }
}
