//! Reef Tank headless demo
//!
//! Runs the scene against the recording surface and reports draw-call
//! totals, standing in for a host that owns a real canvas. Usage:
//!
//! ```text
//! reef-tank [seed] [frames]
//! ```

use reef_tank::surface::RecordingSurface;
use reef_tank::{Scene, SceneConfig, ScenePhase};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    let frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(300);

    let config = SceneConfig::default();
    let mut scene = Scene::new(config, seed);
    let mut surface = RecordingSurface::new(config.width, config.height);

    log::info!("running {frames} frames, seed {seed}");

    for frame in 0..frames {
        // Click once a second, walking across the tank
        if frame % 60 == 0 {
            let x = (frame as f32 * 37.0 + 40.0) % config.width;
            let y = 120.0 + (frame as f32 * 53.0) % 360.0;
            scene.on_click(x, y);
        }

        scene.tick(&mut surface);
        if scene.phase() == ScenePhase::Fault {
            break;
        }
    }

    let counts = surface.counts();
    log::info!(
        "{} frames drawn: {} rects, {} paths, {} ellipses, {} circles",
        scene.frame(),
        counts.rects,
        counts.paths,
        counts.ellipses,
        counts.circles,
    );
    log::info!(
        "final population: {} fish, {} bubbles",
        scene.fish.len(),
        scene.bubbles.len(),
    );

    if scene.phase() == ScenePhase::Fault {
        std::process::exit(1);
    }
}
