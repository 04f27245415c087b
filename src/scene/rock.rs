//! Rock field
//!
//! Three rocks seated near the tank floor. Each rock paints its body and a
//! speckle highlight, then drives bubble emission: periodic bursts on a
//! re-randomized interval plus a low-probability one-bubble trickle every
//! frame. The spawned bubbles belong to the bubble system, not the rock.

use glam::Vec2;
use rand::Rng;

use super::bubble::{BubbleSpawn, BubbleSystem};
use crate::consts::{ROCK_COUNT, ROCK_MARGIN};
use crate::surface::{ColorStop, Paint, Rgba, Surface, SurfaceError};

/// Rock body gradient, lit at the top
const BODY_TOP: Rgba = Rgba::hex(0x6b6b4f);
const BODY_BOTTOM: Rgba = Rgba::hex(0x3d3d2b);
/// Faint white speckle highlight (0x0f of 255)
const SPECKLE: Rgba = Rgba::rgba(1.0, 1.0, 1.0, 15.0 / 255.0);

/// One rock on the tank floor
#[derive(Debug, Clone)]
pub struct Rock {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Frames since the last burst
    pub burst_timer: u32,
    /// Frames between bursts; re-randomized after each burst
    pub burst_interval: u32,
    /// Per-frame probability of one trickle bubble
    pub continuous_chance: f32,
}

/// Owns the fixed set of rocks
#[derive(Debug, Clone, Default)]
pub struct RockField {
    pub rocks: Vec<Rock>,
}

impl RockField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all rocks and seat a fresh set on the floor
    pub fn generate(&mut self, canvas_width: f32, canvas_height: f32, rng: &mut impl Rng) {
        self.rocks.clear();
        self.rocks.reserve(ROCK_COUNT);

        for _ in 0..ROCK_COUNT {
            let width = 60.0 + rng.random::<f32>() * 80.0;
            let height = 30.0 + rng.random::<f32>() * 30.0;
            self.rocks.push(Rock {
                x: ROCK_MARGIN + rng.random::<f32>() * (canvas_width - ROCK_MARGIN * 2.0),
                y: canvas_height - height * 0.5 - 6.0,
                width,
                height,
                burst_timer: 0,
                burst_interval: 8 + (rng.random::<f32>() * 24.0).floor() as u32,
                continuous_chance: 0.08 + rng.random::<f32>() * 0.18,
            });
        }
        log::info!("rock field: {} rocks", self.rocks.len());
    }

    /// Draw every rock and, when a bubble system is supplied, run its
    /// emission timers into it.
    pub fn update_and_render(
        &mut self,
        surface: &mut impl Surface,
        mut bubbles: Option<&mut BubbleSystem>,
        rng: &mut impl Rng,
    ) -> Result<(), SurfaceError> {
        for rock in &mut self.rocks {
            let body = Paint::linear_gradient(
                Vec2::new(rock.x, rock.y - rock.height),
                Vec2::new(rock.x, rock.y + rock.height),
                vec![
                    ColorStop::new(0.0, BODY_TOP),
                    ColorStop::new(1.0, BODY_BOTTOM),
                ],
            );
            surface.fill_ellipse(
                rock.x,
                rock.y,
                rock.width * 0.6,
                rock.height * 0.9,
                0.0,
                &body,
            )?;

            surface.fill_ellipse(
                rock.x - rock.width * 0.15,
                rock.y - rock.height * 0.2,
                rock.width * 0.18,
                rock.height * 0.12,
                -0.3,
                &Paint::Solid(SPECKLE),
            )?;

            if let Some(bubbles) = bubbles.as_deref_mut() {
                rock.emit(bubbles, rng);
            }
        }
        Ok(())
    }
}

impl Rock {
    /// Advance the burst timer and roll the trickle chance for one frame
    fn emit(&mut self, bubbles: &mut BubbleSystem, rng: &mut impl Rng) {
        self.burst_timer += 1;
        if self.burst_timer >= self.burst_interval {
            let to_spawn = 2 + (rng.random::<f32>() * 4.0).floor() as u32;
            for _ in 0..to_spawn {
                let spawn = BubbleSpawn {
                    radius: Some(2.0 + rng.random::<f32>() * 6.0),
                    vy: Some(-(1.0 + rng.random::<f32>() * 2.0)),
                    ..Default::default()
                };
                bubbles.spawn_from_rock(self, spawn, rng);
            }
            self.burst_timer = 0;
            self.burst_interval = 10 + (rng.random::<f32>() * 40.0).floor() as u32;
        }

        if rng.random::<f32>() < self.continuous_chance {
            let spawn = BubbleSpawn {
                radius: Some(1.0 + rng.random::<f32>() * 3.0),
                vy: Some(-(0.8 + rng.random::<f32>() * 1.2)),
                ..Default::default()
            };
            bubbles.spawn_from_rock(self, spawn, rng);
        }
    }
}
