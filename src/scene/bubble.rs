//! Bubble particles
//!
//! Bubbles are spawned at a rock's request but owned entirely by the
//! bubble system; rocks keep no reference to them. Each bubble rises,
//! drifts, and fades linearly over its lifetime, then is culled.

use glam::Vec2;
use rand::Rng;

use super::rock::Rock;
use crate::surface::{Paint, Rgba, Surface, SurfaceError};

/// Soft blue-white bubble body
const BODY_COLOR: Rgba = Rgba::hex(0xdcf5ff);
/// Body fill opacity before the per-bubble fade is applied
const BODY_ALPHA: f32 = 0.9;
/// Specular highlight opacity before the per-bubble fade
const HIGHLIGHT_ALPHA: f32 = 0.6;

/// One bubble particle
#[derive(Debug, Clone, Copy)]
pub struct Bubble {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Render opacity; recomputed from age/life every frame
    pub alpha: f32,
    /// Frames lived so far
    pub age: u32,
    /// Maximum age in frames
    pub life: f32,
}

/// Optional overrides for a spawn request; unset fields fall back to the
/// default small-bubble distribution
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSpawn {
    pub dx: f32,
    pub dy: f32,
    pub radius: Option<f32>,
    pub vx: Option<f32>,
    pub vy: Option<f32>,
    pub life: Option<f32>,
}

/// Owns every live bubble in the scene
#[derive(Debug, Clone, Default)]
pub struct BubbleSystem {
    pub bubbles: Vec<Bubble>,
}

impl BubbleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn one bubble near the top of `rock`.
    ///
    /// Horizontal jitter is uniform in ±20% of the rock width (the total
    /// spread is `width * 0.4`).
    pub fn spawn_from_rock(&mut self, rock: &Rock, spawn: BubbleSpawn, rng: &mut impl Rng) {
        let x = rock.x + (rng.random::<f32>() - 0.5) * (rock.width * 0.4) + spawn.dx;
        let y = rock.y - rock.height * 0.5 - 6.0 + spawn.dy;

        let radius = match spawn.radius {
            Some(r) => r,
            None => 1.5 + rng.random::<f32>() * 6.0,
        };
        let vx = match spawn.vx {
            Some(vx) => vx,
            None => (rng.random::<f32>() - 0.5) * (0.6 + rng.random::<f32>() * 0.6),
        };
        let vy = match spawn.vy {
            Some(vy) => vy,
            None => -(0.6 + rng.random::<f32>() * 2.0),
        };
        let life = match spawn.life {
            Some(life) => life,
            None => 60.0 + rng.random::<f32>() * 160.0,
        };

        self.bubbles.push(Bubble {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius,
            alpha: 0.95,
            age: 0,
            life,
        });
    }

    /// Advance every bubble one frame and cull expired ones.
    ///
    /// A bubble dies when it rises fully above the canvas top, outlives
    /// its lifetime, or fades to zero.
    pub fn update(&mut self) {
        self.bubbles.retain_mut(|b| {
            b.pos += b.vel;
            b.age += 1;
            b.alpha = (BODY_ALPHA * (1.0 - b.age as f32 / b.life)).max(0.0);
            b.pos.y + b.radius >= 0.0 && b.age as f32 <= b.life && b.alpha > 0.0
        });
    }

    /// Draw every bubble: a soft body disk plus an offset highlight
    pub fn render(&self, surface: &mut impl Surface) -> Result<(), SurfaceError> {
        for b in &self.bubbles {
            let body = Paint::Solid(BODY_COLOR.fade(BODY_ALPHA * b.alpha));
            surface.fill_circle(b.pos.x, b.pos.y, b.radius, &body)?;

            let highlight = Paint::Solid(Rgba::WHITE.fade(HIGHLIGHT_ALPHA * b.alpha));
            surface.fill_circle(
                b.pos.x - b.radius * 0.35,
                b.pos.y - b.radius * 0.35,
                (b.radius * 0.5).max(1.0),
                &highlight,
            )?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn test_rock() -> Rock {
        Rock {
            x: 400.0,
            y: 560.0,
            width: 100.0,
            height: 40.0,
            burst_timer: 0,
            burst_interval: 20,
            continuous_chance: 0.1,
        }
    }

    #[test]
    fn test_spawn_geometry_and_defaults() {
        let mut rng = Pcg32::seed_from_u64(17);
        let mut system = BubbleSystem::new();
        let rock = test_rock();

        for _ in 0..200 {
            system.spawn_from_rock(&rock, BubbleSpawn::default(), &mut rng);
        }

        for b in &system.bubbles {
            // Jitter spans ±20% of the rock width around its center
            assert!(b.pos.x >= rock.x - rock.width * 0.2);
            assert!(b.pos.x < rock.x + rock.width * 0.2);
            // Seated at the rock top: y - height/2 - 6
            assert_eq!(b.pos.y, 560.0 - 20.0 - 6.0);
            assert!(b.radius >= 1.5 && b.radius < 7.5);
            assert!(b.vel.x > -0.6 && b.vel.x < 0.6);
            assert!(b.vel.y <= -0.6 && b.vel.y > -2.6);
            assert!(b.life >= 60.0 && b.life < 220.0);
            assert_eq!(b.alpha, 0.95);
            assert_eq!(b.age, 0);
        }
    }

    #[test]
    fn test_spawn_overrides_win() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut system = BubbleSystem::new();
        let spawn = BubbleSpawn {
            dx: 5.0,
            dy: -3.0,
            radius: Some(4.0),
            vx: Some(0.1),
            vy: Some(-1.5),
            life: Some(90.0),
        };
        system.spawn_from_rock(&test_rock(), spawn, &mut rng);

        let b = &system.bubbles[0];
        assert_eq!(b.radius, 4.0);
        assert_eq!(b.vel, Vec2::new(0.1, -1.5));
        assert_eq!(b.life, 90.0);
        assert_eq!(b.pos.y, 560.0 - 20.0 - 6.0 - 3.0);
    }

    #[test]
    fn test_linear_fade_hits_zero_at_end_of_life() {
        let mut system = BubbleSystem::new();
        system.bubbles.push(Bubble {
            pos: Vec2::new(100.0, 1000.0),
            vel: Vec2::ZERO,
            radius: 3.0,
            alpha: 0.95,
            age: 0,
            life: 60.0,
        });

        for _ in 0..59 {
            system.update();
            assert_eq!(system.len(), 1);
            let b = &system.bubbles[0];
            let expected = 0.9 * (1.0 - b.age as f32 / 60.0);
            assert!((b.alpha - expected).abs() < 1e-6);
            assert!(b.alpha > 0.0);
        }

        // Frame 60: alpha reaches exactly zero and the bubble is culled
        system.update();
        assert!(system.is_empty());
    }

    #[test]
    fn test_risen_above_top_is_culled() {
        let mut system = BubbleSystem::new();
        system.bubbles.push(Bubble {
            pos: Vec2::new(50.0, 2.0),
            vel: Vec2::new(0.0, -4.0),
            radius: 1.0,
            alpha: 0.95,
            age: 0,
            life: 500.0,
        });

        // After one step y = -2, top edge y + r = -1 < 0
        system.update();
        assert!(system.is_empty());
    }

    #[test]
    fn test_render_two_circles_per_bubble() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut system = BubbleSystem::new();
        let rock = test_rock();
        for _ in 0..5 {
            system.spawn_from_rock(&rock, BubbleSpawn::default(), &mut rng);
        }

        let mut surface = RecordingSurface::new(800.0, 600.0);
        system.render(&mut surface).unwrap();
        assert_eq!(surface.counts().circles, 10);
    }
}
