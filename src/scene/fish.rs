//! Fish flock
//!
//! Fish are spawned one at a time by the host's click event and live for
//! the rest of the session. Each fish drifts horizontally at a fixed
//! velocity with wraparound, bobs vertically around its spawn height, and
//! wags its tail. Rendering mirrors the whole local frame when the fish
//! swims left so it always faces its direction of travel.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use crate::consts::{FISH_SIZE_MAX, FISH_SIZE_MIN};
use crate::surface::{Paint, Rgba, Surface, SurfaceError};

/// Tail phase advance per frame (radians)
const TAIL_SPEED: f32 = 0.5;
/// Bob phase advance per frame (radians)
const BOB_SPEED: f32 = 0.03;
/// Maximum tail rotation (radians)
const TAIL_SWING: f32 = 0.6;

/// One fish
#[derive(Debug, Clone)]
pub struct Fish {
    pub x: f32,
    /// Spawn height; bobbing is computed from this, never accumulated
    pub base_y: f32,
    pub y: f32,
    /// Body half-length; also drives bob amplitude and eye placement
    pub size: f32,
    /// Horizontal velocity; the sign is the facing direction and is fixed
    /// at spawn
    pub vx: f32,
    /// Vertical bob phase
    pub time: f32,
    /// Tail wag phase, independent of the bob
    pub tail_phase: f32,
    pub color: Rgba,
}

impl Fish {
    fn bob_amplitude(&self) -> f32 {
        (self.size * 0.2).max(6.0)
    }

    fn render(&self, surface: &mut impl Surface) -> Result<(), SurfaceError> {
        let s = self.size;
        let facing_left = self.vx < 0.0;

        surface.push();
        surface.translate(self.x, self.y);
        if facing_left {
            surface.scale(-1.0, 1.0);
        }

        // body
        let body = Paint::Solid(self.color);
        surface.fill_ellipse(0.0, 0.0, s, s * 0.6, 0.0, &body)?;

        // tail, rotated by the wag; the sign flips when mirrored so the
        // wag reads the same in both directions
        let wag = self.tail_phase.sin() * TAIL_SWING * if facing_left { -1.0 } else { 1.0 };
        surface.push();
        surface.translate(-s, 0.0);
        surface.rotate(wag);
        let tail = [
            Vec2::ZERO,
            Vec2::new(-s * 0.7, -s * 0.6),
            Vec2::new(-s * 0.7, s * 0.6),
        ];
        surface.fill_path(&tail, &body)?;
        surface.pop()?;

        // eye in the pre-mirror frame; the mirror transform carries it to
        // the leading side
        surface.fill_circle(s * 0.4, -s * 0.15, s * 0.15, &Paint::Solid(Rgba::WHITE))?;
        surface.fill_circle(s * 0.44, -s * 0.15, s * 0.07, &Paint::Solid(Rgba::BLACK))?;

        surface.pop()
    }
}

/// Owns every fish in the scene; fish are never removed
#[derive(Debug, Clone, Default)]
pub struct FishFlock {
    pub fish: Vec<Fish>,
}

impl FishFlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn one fish at the click position
    pub fn spawn(&mut self, x: f32, y: f32, rng: &mut impl Rng) {
        let size = FISH_SIZE_MIN + rng.random::<f32>() * (FISH_SIZE_MAX - FISH_SIZE_MIN);
        let dir = if rng.random::<f32>() > 0.5 { 1.0 } else { -1.0 };
        let speed = 1.2 + rng.random::<f32>() * 1.8;
        let hue = (rng.random::<f32>() * 360.0).floor();

        self.fish.push(Fish {
            x,
            base_y: y,
            y,
            size,
            vx: dir * speed,
            time: rng.random::<f32>() * TAU,
            tail_phase: rng.random::<f32>() * TAU,
            color: Rgba::hsl(hue, 70.0, 55.0),
        });
        log::info!("fish spawned at ({x}, {y}), {} total", self.fish.len());
    }

    /// Advance every fish one frame: drift, bob, wag, wrap
    pub fn update(&mut self, canvas_width: f32) {
        for f in &mut self.fish {
            f.time += BOB_SPEED;
            f.tail_phase += TAIL_SPEED;

            f.x += f.vx;
            f.y = f.base_y + f.time.sin() * f.bob_amplitude();

            // seamless wraparound: re-enter from the opposite edge
            if f.x - f.size > canvas_width {
                f.x = -f.size;
            }
            if f.x + f.size < 0.0 {
                f.x = canvas_width + f.size;
            }
        }
    }

    /// Draw every fish
    pub fn render(&self, surface: &mut impl Surface) -> Result<(), SurfaceError> {
        for f in &self.fish {
            f.render(surface)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.fish.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fish.is_empty()
    }
}
