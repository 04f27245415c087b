//! Coral field
//!
//! Static decoration anchored just below the visible bottom edge so stems
//! look rooted off-screen. Two variants: a ribbon-shaped stem built like a
//! seaweed stalk but without animation, and a stack of bulbous ellipses.
//! The depth parameter only desaturates and darkens; no z-ordering.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::ribbon::ribbon_outline;
use crate::consts::{CORAL_MIN_COUNT, CORAL_SPACING};
use crate::surface::{Paint, Rgba, Surface, SurfaceError};

/// Segments in a ribbon-style coral stem
const STEM_SEGMENTS: usize = 6;

/// Visual style of a coral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoralVariant {
    /// Curved tapering stem, drawn as a filled ribbon
    Ribbon,
    /// Stack of shrinking ellipses climbing from the base
    RockStack,
}

/// One coral
#[derive(Debug, Clone)]
pub struct Coral {
    /// Root x position
    pub x: f32,
    /// Root y position (just below the canvas bottom)
    pub y: f32,
    /// Shading depth in [0, 0.5): deeper corals are darker and duller
    pub depth: f32,
    pub height: f32,
    pub width: f32,
    /// Hue in degrees (warm orange/red band)
    pub hue: f32,
    /// Texture knob carried on the entity; reserved for variant styling
    pub rockiness: u32,
    pub variant: CoralVariant,
}

impl Coral {
    fn saturation(&self) -> f32 {
        80.0 - self.depth * 20.0
    }

    fn lightness(&self) -> f32 {
        55.0 - self.depth * 35.0
    }

    fn render(&self, surface: &mut impl Surface) -> Result<(), SurfaceError> {
        match self.variant {
            CoralVariant::Ribbon => self.render_stem(surface),
            CoralVariant::RockStack => self.render_rock_stack(surface),
        }
    }

    /// Draw the ribbon-style stem. Same construction as seaweed, but the
    /// bend is a fixed function of height, not of time.
    fn render_stem(&self, surface: &mut impl Surface) -> Result<(), SurfaceError> {
        let mut centerline = Vec::with_capacity(STEM_SEGMENTS + 1);
        for j in 0..=STEM_SEGMENTS {
            let t = j as f32 / STEM_SEGMENTS as f32;
            let y = self.y - t * self.height;
            let offset = (t * TAU).sin() * self.width * 0.15 * (1.0 - t.powf(1.1));
            centerline.push(Vec2::new(self.x + offset, y));
        }

        let point_count = centerline.len();
        let outline = ribbon_outline(&centerline, |j| {
            self.width * 0.5 * (1.0 - j as f32 / point_count as f32)
        });

        let paint = Paint::Solid(Rgba::hsl(self.hue, self.saturation(), self.lightness()));
        surface.fill_path(&outline, &paint)
    }

    /// Draw the boulder-stack variant: each rock is a body ellipse plus a
    /// darker ellipse nudged downward to fake underside shading.
    fn render_rock_stack(&self, surface: &mut impl Surface) -> Result<(), SurfaceError> {
        let saturation = self.saturation();
        let lightness = self.lightness();
        let body = Paint::Solid(Rgba::hsl(self.hue, saturation, lightness));
        let shade = Paint::Solid(Rgba::hsl(
            self.hue,
            saturation,
            (lightness - 15.0).max(20.0),
        ));

        let rock_count = 4 + (self.height / 60.0).floor() as usize;
        for r in 0..rock_count {
            let t = r as f32 / rock_count as f32;
            let rock_width = self.width * (1.0 - t * 0.4);
            let rock_height = self.height / rock_count as f32 * 1.2;
            // Fixed per-index wobble, not time-animated
            let wobble = (r as f32 * 1.5).sin() * self.width * 0.15;
            let cx = self.x + wobble;
            let cy = self.y - self.height * t;

            surface.fill_ellipse(cx, cy, rock_width * 0.6, rock_height * 0.5, 0.0, &body)?;
            surface.fill_ellipse(
                cx,
                cy + rock_height * 0.3,
                rock_width * 0.5,
                rock_height * 0.3,
                0.0,
                &shade,
            )?;
        }
        Ok(())
    }
}

/// Owns every coral in the scene
#[derive(Debug, Clone, Default)]
pub struct CoralField {
    pub corals: Vec<Coral>,
}

impl CoralField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of corals for a canvas width
    pub fn count_for_width(canvas_width: f32) -> usize {
        CORAL_MIN_COUNT.max((canvas_width / CORAL_SPACING).floor() as usize)
    }

    /// Discard all corals and grow a fresh field for the canvas size
    pub fn generate(&mut self, canvas_width: f32, canvas_height: f32, rng: &mut impl Rng) {
        let count = Self::count_for_width(canvas_width);
        self.corals.clear();
        self.corals.reserve(count);

        for _ in 0..count {
            self.corals.push(Coral {
                x: rng.random::<f32>() * canvas_width,
                // Rooted 30 px below the visible bottom edge
                y: canvas_height + 30.0,
                depth: rng.random::<f32>() * 0.5,
                height: 60.0 + rng.random::<f32>() * 280.0,
                width: 20.0 + rng.random::<f32>() * 50.0,
                hue: 5.0 + rng.random::<f32>() * 30.0,
                rockiness: 2 + (rng.random::<f32>() * 4.0).floor() as u32,
                variant: if rng.random::<f32>() < 0.5 {
                    CoralVariant::Ribbon
                } else {
                    CoralVariant::RockStack
                },
            });
        }
        log::info!("coral field: {} corals", self.corals.len());
    }

    /// Draw every coral; corals are static, there is no update step
    pub fn render(&self, surface: &mut impl Surface) -> Result<(), SurfaceError> {
        for coral in &self.corals {
            coral.render(surface)?;
        }
        Ok(())
    }
}
