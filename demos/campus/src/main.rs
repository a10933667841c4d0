//! campus: students wandering an L-shaped courtyard, rendered as ASCII.
//!
//! Runs headless: frame timestamps come from a fixed 60 Hz schedule with one
//! long pause in the middle (as when a browser tab is hidden), which the
//! frame loop renders without simulating.
//!
//! Usage: `campus [settings.toml]`.  Set `RUST_LOG=debug` (or `trace`) for
//! per-frame and per-waypoint events.

mod ascii;
mod settings;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use roam_core::{AgentId, SpriteId};
use roam_grid::BfsOracle;
use roam_sim::{PopulationBuilder, SpriteCache};

use ascii::AsciiObserver;
use settings::Settings;

// ── Constants ─────────────────────────────────────────────────────────────────

const FRAME_MS:       f64 = 1_000.0 / 60.0;
const FRAMES:         u64 = 1_800;          // 30 s of wall time
const PAUSE_AT_FRAME: u64 = 900;
const PAUSE_MS:       f64 = 2_000.0;        // well past max_frame_gap_ms
const PRINT_EVERY:    u64 = 300;
const SPRITE_GLYPHS:  &[char] = &['a', 'b', 'c', 'd', 'e', 'f'];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(path.as_deref())?;
    let config = settings.roam;
    let campus = settings.campus;

    println!("=== campus: students roam ===");
    println!(
        "Students: {}  |  Grid: {} x {}  |  Seed: {}",
        config.population, campus.width, campus.height, config.seed
    );
    println!();

    // 1. Build the population.
    let offset = config.visual_offset_y;
    let mut pop = PopulationBuilder::new(config, campus, BfsOracle).build()?;

    // 2. Sprites: nothing is drawn until every student has one.
    let mut sprites = SpriteCache::new(SPRITE_GLYPHS.len() as u32);
    if let Err(err) = pop.bind_sprites(&mut sprites) {
        info!(%err, "sprite sheet still loading");
    }
    sprites.mark_loaded();
    pop.bind_sprites(&mut sprites)?;

    let glyphs: Vec<char> = (0..sprites.len())
        .filter_map(|i| sprites.variant(SpriteId(i as u32)))
        .map(|v| SPRITE_GLYPHS[v as usize % SPRITE_GLYPHS.len()])
        .collect();

    let mut obs = AsciiObserver::new(pop.region(), offset, glyphs, PRINT_EVERY);
    println!("Valid spots:");
    println!("{}", obs.valid_spots());
    println!();

    // 3. Run.
    let source = (0..FRAMES).map(|i| {
        let pause = if i >= PAUSE_AT_FRAME { PAUSE_MS } else { 0.0 };
        i as f64 * FRAME_MS + pause
    });
    let t0 = Instant::now();
    let frames = pop.run(source, &mut obs)?;
    let elapsed = t0.elapsed();

    // 4. Summary.
    println!(
        "{frames} frames in {:.3} s ({} simulated, {} skipped)",
        elapsed.as_secs_f64(),
        obs.simulated,
        obs.skipped
    );
    println!();

    println!("{:<8} {:<8} {:<18} {:<10}", "Student", "Walking", "Position", "Waypoints");
    println!("{}", "-".repeat(46));
    for i in 0..pop.students().len() {
        let s = pop.student(AgentId(i as u32))?;
        println!(
            "{:<8} {:<8} {:<18} {:<10}",
            i,
            if s.is_transiting() { "yes" } else { "no" },
            s.visual_position(offset).to_string(),
            s.waypoints().len(),
        );
    }

    Ok(())
}
