//! Game configuration.

use crate::entity::{BacteriaKind, BacteriaStats};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub arena: ArenaConfig,
    #[serde(default)]
    pub cell: CellConfig,
    #[serde(default)]
    pub protein: ProteinConfig,
    #[serde(default = "default_bacteria")]
    pub bacteria: BacteriaConfig,
    #[serde(default = "default_bomb_bacteria")]
    pub bomb_bacteria: BacteriaConfig,
    #[serde(default)]
    pub spawner: SpawnerConfig,
    #[serde(default)]
    pub lessons: LessonConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub runner: RunnerConfig,
}

impl Config {
    /// Load configuration from `config.toml` or use defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config.toml"))
    }

    /// Load configuration from `path`, writing the defaults there if it is missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Self::from_toml_str(&contents)
        } else {
            info!("No {} found, creating default config", path.display());
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            Ok(default_config)
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Effective constants for a bacteria variant (table values plus overrides).
    pub fn bacteria_stats(&self, kind: BacteriaKind) -> BacteriaStats {
        let base = kind.stats();
        let section = self.bacteria_section(kind);
        BacteriaStats {
            size: section.size.map_or(base.size, |v| v as f32),
            velocity: section.velocity.map_or(base.velocity, |v| v as f32),
            attack: section.attack.unwrap_or(base.attack),
            iq: section.iq.unwrap_or(base.iq),
        }
    }

    /// Number of bacteria of `kind` spawned at session start.
    pub fn bacteria_count(&self, kind: BacteriaKind) -> usize {
        let fallback = match kind {
            BacteriaKind::Standard => default_bacteria_count(),
            BacteriaKind::Bomb => default_bomb_bacteria_count(),
        };
        self.bacteria_section(kind).count.unwrap_or(fallback)
    }

    fn bacteria_section(&self, kind: BacteriaKind) -> &BacteriaConfig {
        match kind {
            BacteriaKind::Standard => &self.bacteria,
            BacteriaKind::Bomb => &self.bomb_bacteria,
        }
    }

    /// Reject values that would produce negative spawn ranges or nonsense
    /// movement.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let width = self.arena.width;
        let height = self.arena.height;
        // The world works in f32, so anything past f32::MAX would become inf.
        let in_f32 = |value: f64| value.is_finite() && value.abs() <= f64::from(f32::MAX);
        if !(in_f32(width) && in_f32(height) && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidArena { width, height });
        }

        let fits = |entity: &'static str, size: f64| {
            if !(size.is_finite() && size > 0.0) {
                return Err(ConfigError::InvalidParameter {
                    name: entity,
                    value: size,
                });
            }
            if size > width || size > height {
                return Err(ConfigError::EntityTooLarge {
                    entity,
                    size,
                    width,
                    height,
                });
            }
            Ok(())
        };
        let non_negative = |name: &'static str, value: f64| {
            if in_f32(value) && value >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidParameter { name, value })
            }
        };

        fits("cell", self.cell.size)?;
        non_negative("cell.velocity", self.cell.velocity)?;
        if !(self.cell.max_health.is_finite() && self.cell.max_health > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "cell.max_health",
                value: self.cell.max_health,
            });
        }
        non_negative("cell.low_health_threshold", self.cell.low_health_threshold)?;

        fits("protein", self.protein.min_size)?;
        fits("protein", self.protein.max_size)?;
        if self.protein.min_size > self.protein.max_size {
            return Err(ConfigError::InvalidSizeRange {
                entity: "protein",
                min: self.protein.min_size,
                max: self.protein.max_size,
            });
        }

        for kind in [BacteriaKind::Standard, BacteriaKind::Bomb] {
            let stats = self.bacteria_stats(kind);
            fits(kind.name(), f64::from(stats.size))?;
            non_negative("bacteria.velocity", f64::from(stats.velocity))?;
            non_negative("bacteria.attack", stats.attack)?;
            if !(0.0..=1.0).contains(&stats.iq) {
                return Err(ConfigError::InvalidParameter {
                    name: "bacteria.iq",
                    value: stats.iq,
                });
            }
        }

        if self.runner.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "runner.tick_interval_ms",
                value: 0.0,
            });
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            cell: CellConfig::default(),
            protein: ProteinConfig::default(),
            bacteria: default_bacteria(),
            bomb_bacteria: default_bomb_bacteria(),
            spawner: SpawnerConfig::default(),
            lessons: LessonConfig::default(),
            input: InputConfig::default(),
            runner: RunnerConfig::default(),
        }
    }
}

/// Arena size.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArenaConfig {
    #[serde(default = "default_arena_width")]
    pub width: f64,
    #[serde(default = "default_arena_height")]
    pub height: f64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: default_arena_width(),
            height: default_arena_height(),
        }
    }
}

fn default_arena_width() -> f64 {
    600.0
}
fn default_arena_height() -> f64 {
    400.0
}

/// Player cell configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CellConfig {
    #[serde(default = "default_cell_size")]
    pub size: f64,
    #[serde(default = "default_cell_velocity")]
    pub velocity: f64,
    #[serde(default = "default_cell_max_health")]
    pub max_health: f64,
    /// Health below which the low-health lesson fires.
    #[serde(default = "default_low_health_threshold")]
    pub low_health_threshold: f64,
}

impl Default for CellConfig {
    fn default() -> Self {
        Self {
            size: default_cell_size(),
            velocity: default_cell_velocity(),
            max_health: default_cell_max_health(),
            low_health_threshold: default_low_health_threshold(),
        }
    }
}

fn default_cell_size() -> f64 {
    50.0
}
fn default_cell_velocity() -> f64 {
    5.0
}
fn default_cell_max_health() -> f64 {
    100.0
}
fn default_low_health_threshold() -> f64 {
    20.0
}

/// Protein configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProteinConfig {
    #[serde(default = "default_protein_nutrition")]
    pub nutrition: u32,
    /// Inclusive lower bound of the random size.
    #[serde(default = "default_protein_min_size")]
    pub min_size: f64,
    /// Exclusive upper bound of the random size.
    #[serde(default = "default_protein_max_size")]
    pub max_size: f64,
    #[serde(default = "default_protein_initial_count")]
    pub initial_count: usize,
    /// Spawning stops while this many proteins are live.
    #[serde(default = "default_protein_target_count")]
    pub target_count: usize,
    #[serde(default = "default_protein_spawn_cooldown")]
    pub spawn_cooldown_ms: u64,
}

impl Default for ProteinConfig {
    fn default() -> Self {
        Self {
            nutrition: default_protein_nutrition(),
            min_size: default_protein_min_size(),
            max_size: default_protein_max_size(),
            initial_count: default_protein_initial_count(),
            target_count: default_protein_target_count(),
            spawn_cooldown_ms: default_protein_spawn_cooldown(),
        }
    }
}

fn default_protein_nutrition() -> u32 {
    5
}
fn default_protein_min_size() -> f64 {
    30.0
}
fn default_protein_max_size() -> f64 {
    40.0
}
fn default_protein_initial_count() -> usize {
    5
}
fn default_protein_target_count() -> usize {
    5
}
fn default_protein_spawn_cooldown() -> u64 {
    3000
}

/// Bacteria variant configuration. Unset values fall back to the variant's
/// constant table.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BacteriaConfig {
    /// Number spawned at session start.
    pub count: Option<usize>,
    pub size: Option<f64>,
    pub velocity: Option<f64>,
    pub attack: Option<f64>,
    pub iq: Option<f64>,
}

impl BacteriaConfig {
    fn from_table(kind: BacteriaKind, count: usize) -> Self {
        let stats = kind.stats();
        Self {
            count: Some(count),
            size: Some(f64::from(stats.size)),
            velocity: Some(f64::from(stats.velocity)),
            attack: Some(stats.attack),
            iq: Some(stats.iq),
        }
    }
}

fn default_bacteria() -> BacteriaConfig {
    BacteriaConfig::from_table(BacteriaKind::Standard, default_bacteria_count())
}
fn default_bomb_bacteria() -> BacteriaConfig {
    BacteriaConfig::from_table(BacteriaKind::Bomb, default_bomb_bacteria_count())
}
fn default_bacteria_count() -> usize {
    3
}
fn default_bomb_bacteria_count() -> usize {
    7
}

/// Mid-session bacteria spawning (disabled by default).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpawnerConfig {
    /// Milliseconds between bacteria spawns. 0 disables mid-session spawning.
    #[serde(default)]
    pub bacteria_interval_ms: u64,
    #[serde(default = "default_max_bacteria")]
    pub max_bacteria: usize,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            bacteria_interval_ms: 0,
            max_bacteria: default_max_bacteria(),
        }
    }
}

fn default_max_bacteria() -> usize {
    20
}

/// Tutorial lessons.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LessonConfig {
    #[serde(default = "default_lessons_enabled")]
    pub enabled: bool,
    /// Keep already-taught lessons silent after a restart.
    #[serde(default)]
    pub persist_across_restarts: bool,
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            enabled: default_lessons_enabled(),
            persist_across_restarts: false,
        }
    }
}

fn default_lessons_enabled() -> bool {
    true
}

/// Key identifiers bound to each direction.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    #[serde(default = "default_left_keys")]
    pub left: Vec<String>,
    #[serde(default = "default_up_keys")]
    pub up: Vec<String>,
    #[serde(default = "default_right_keys")]
    pub right: Vec<String>,
    #[serde(default = "default_down_keys")]
    pub down: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            left: default_left_keys(),
            up: default_up_keys(),
            right: default_right_keys(),
            down: default_down_keys(),
        }
    }
}

fn default_left_keys() -> Vec<String> {
    vec!["ArrowLeft".to_string(), "Left".to_string()]
}
fn default_up_keys() -> Vec<String> {
    vec!["ArrowUp".to_string(), "Up".to_string()]
}
fn default_right_keys() -> Vec<String> {
    vec!["ArrowRight".to_string(), "Right".to_string()]
}
fn default_down_keys() -> Vec<String> {
    vec!["ArrowDown".to_string(), "Down".to_string()]
}

/// Tick driver settings (headless runner and browser timer).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunnerConfig {
    /// Tick interval in milliseconds.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    /// Sessions to play before the runner exits.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u32,
    /// Stop after this many ticks in total (0 = unlimited).
    #[serde(default)]
    pub max_ticks: u64,
    /// Fixed RNG seed; random when unset.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Let the runner steer the cell.
    #[serde(default = "default_autopilot")]
    pub autopilot: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval(),
            max_sessions: default_max_sessions(),
            max_ticks: 0,
            seed: None,
            autopilot: default_autopilot(),
        }
    }
}

fn default_tick_interval() -> u64 {
    16
}
fn default_max_sessions() -> u32 {
    1
}
fn default_autopilot() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.bacteria_count(BacteriaKind::Standard), 3);
        assert_eq!(config.bacteria_count(BacteriaKind::Bomb), 7);
        assert_eq!(config.protein.spawn_cooldown_ms, 3000);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.arena.width, 600.0);
        assert_eq!(config.cell.size, 50.0);
        assert_eq!(config.bacteria_stats(BacteriaKind::Bomb), BacteriaKind::Bomb.stats());
    }

    #[test]
    fn test_partial_bacteria_section_falls_back_to_table() {
        let config = Config::from_toml_str(
            r#"
            [bomb_bacteria]
            count = 2
            attack = 4.0
            "#,
        )
        .unwrap();
        let stats = config.bacteria_stats(BacteriaKind::Bomb);
        assert_eq!(config.bacteria_count(BacteriaKind::Bomb), 2);
        assert_eq!(stats.attack, 4.0);
        assert_eq!(stats.iq, BacteriaKind::Bomb.stats().iq);
        assert_eq!(stats.size, BacteriaKind::Bomb.stats().size);
        assert_eq!(config.bacteria_count(BacteriaKind::Standard), 3);
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed = Config::from_toml_str(&text).unwrap();
        assert_eq!(parsed.bacteria_stats(BacteriaKind::Standard), BacteriaKind::Standard.stats());
        assert_eq!(parsed.input.left, default_left_keys());
    }

    #[test]
    fn test_rejects_bad_arena() {
        for doc in ["[arena]\nwidth = 0.0", "[arena]\nheight = -10.0"] {
            let err = Config::from_toml_str(doc).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidArena { .. }), "{err}");
        }
    }

    #[test]
    fn test_rejects_arena_beyond_f32() {
        let err = Config::from_toml_str("[arena]\nwidth = 1e39\nheight = 400.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidArena { .. }), "{err}");

        let err = Config::from_toml_str("[cell]\nvelocity = 1e39").unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidParameter { name: "cell.velocity", .. }),
            "{err}"
        );

        let err = Config::from_toml_str("[arena]\nwidth = 1e38\nheight = 400.0\n[bacteria]\nvelocity = 1e39")
            .unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidParameter { name: "bacteria.velocity", .. }),
            "{err}"
        );
    }

    #[test]
    fn test_rejects_entity_larger_than_arena() {
        let err = Config::from_toml_str("[arena]\nwidth = 40.0\nheight = 400.0").unwrap_err();
        assert!(matches!(err, ConfigError::EntityTooLarge { entity: "cell", .. }), "{err}");

        let err = Config::from_toml_str("[bacteria]\nsize = 1000.0").unwrap_err();
        assert!(matches!(err, ConfigError::EntityTooLarge { .. }), "{err}");
    }

    #[test]
    fn test_rejects_inverted_protein_range() {
        let err = Config::from_toml_str("[protein]\nmin_size = 45.0\nmax_size = 35.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSizeRange { .. }), "{err}");
    }

    #[test]
    fn test_rejects_out_of_range_iq() {
        let err = Config::from_toml_str("[bacteria]\niq = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { name: "bacteria.iq", .. }), "{err}");
    }

    #[test]
    fn test_rejects_zero_tick_interval() {
        let err = Config::from_toml_str("[runner]\ntick_interval_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { .. }), "{err}");
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = Config::from_toml_str("[arena\nwidth = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
