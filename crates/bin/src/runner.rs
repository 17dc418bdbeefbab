//! Fixed-rate session loop.

use crate::autopilot::Autopilot;
use crate::log_frontend::{LogLessons, LogRenderer, LogUi};
use game::{Config, Frame, TickOutcome, World};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info};

/// Play sessions on a `tick_interval_ms` timer until `max_sessions` have
/// ended, `max_ticks` is reached or Ctrl-C is pressed.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let rng = match config.runner.seed {
        Some(seed) => {
            info!("Using fixed seed {}", seed);
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_os_rng(),
    };

    let clock = std::time::Instant::now();
    let now_ms = || clock.elapsed().as_secs_f64() * 1000.0;

    let max_sessions = config.runner.max_sessions.max(1);
    let max_ticks = config.runner.max_ticks;
    let tick_interval = Duration::from_millis(config.runner.tick_interval_ms);
    let mut autopilot = config.runner.autopilot.then(Autopilot::new);

    let mut world = World::new(config, rng, now_ms())?;
    let mut renderer = LogRenderer::default();
    let mut ui = LogUi::default();
    let mut lessons = LogLessons::default();

    let mut ticker = interval_at(Instant::now() + tick_interval, tick_interval);
    // Skip missed ticks rather than bursting to catch up.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut session = 1u32;
    let mut total_ticks = 0u64;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut shutdown => {
                info!("Interrupted, shutting down");
                break;
            }
        }

        if let Some(pilot) = autopilot.as_mut() {
            for event in pilot.steer(&world) {
                debug!("Input {:?}", event);
                world.handle_key(&event);
            }
        }

        let outcome = {
            let mut frame = Frame::new(&mut renderer, &mut ui, &mut lessons);
            world.tick(now_ms(), &mut frame)
        };
        total_ticks += 1;

        if outcome == TickOutcome::GameOver {
            let stats = world.stats();
            info!(
                "Session {} finished: score {}, {} ticks, {} proteins eaten, {:.1} damage taken",
                session,
                world.cell().score,
                stats.ticks,
                stats.proteins_eaten,
                stats.damage_taken
            );
            if session >= max_sessions {
                break;
            }
            session += 1;
            world.restart(now_ms(), &mut ui);
            if let Some(pilot) = autopilot.as_mut() {
                pilot.reset();
            }
        }

        if max_ticks > 0 && total_ticks >= max_ticks {
            info!(
                "Tick limit {} reached in session {} (score {}, health {})",
                max_ticks,
                session,
                world.cell().score,
                world.cell().display_health()
            );
            break;
        }
    }

    info!(
        "Runner stopped after {} ticks, {} frames, {} lessons",
        total_ticks, renderer.frames, lessons.announced
    );
    Ok(())
}
