//! Seaweed field
//!
//! A band of swaying stalks across the tank floor. Each stalk is a ribbon
//! whose centerline is bent by a phase-driven sine wave; the two parallax
//! layers sway at different speeds and get a lightness offset so back
//! stalks read as farther away without any depth sorting.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::ribbon::ribbon_outline;
use crate::consts::{SEAWEED_MIN_COUNT, SEAWEED_SPACING};
use crate::surface::{Paint, Rgba, Surface, SurfaceError};

/// One seaweed stalk
#[derive(Debug, Clone)]
pub struct Seaweed {
    /// Root x position
    pub x: f32,
    /// Stalk height in pixels
    pub height: f32,
    /// Sway amplitude in pixels
    pub sway_amp: f32,
    /// Phase advance per frame (radians)
    pub sway_speed: f32,
    /// Sway phase; accumulates without bound, periodicity comes from sin
    pub phase: f32,
    /// Half-width at the base
    pub base_width: f32,
    /// Hue in degrees (green band)
    pub hue: f32,
    /// Base lightness percent, adjusted per layer at draw time
    pub light: f32,
    /// Centerline segment count
    pub segments: usize,
    /// Parallax layer: 0 = back, 1 = front
    pub layer: u8,
}

impl Seaweed {
    /// Build the bent centerline for the current phase, base at `base_y`
    fn centerline(&self, base_y: f32) -> Vec<Vec2> {
        let seg = self.segments;
        let mut points = Vec::with_capacity(seg + 1);
        for j in 0..=seg {
            let t = j as f32 / seg as f32;
            let y = base_y - t * self.height;
            // Higher segments run ahead in phase, which twists the stalk
            // instead of swinging it rigidly; the damping term fades the
            // sway out toward the tip.
            let offset = (self.phase + t * TAU * (1.0 + 0.12 * j as f32)).sin()
                * self.sway_amp
                * (1.0 - t.powf(1.1));
            points.push(Vec2::new(self.x + offset, y));
        }
        points
    }

    fn fill_color(&self) -> Rgba {
        let light = if self.layer == 0 {
            (self.light - 8.0).max(6.0)
        } else {
            (self.light + 4.0).min(60.0)
        };
        Rgba::hsl(self.hue, 60.0, light)
    }
}

/// Owns and animates every seaweed stalk
#[derive(Debug, Clone, Default)]
pub struct SeaweedField {
    pub stalks: Vec<Seaweed>,
}

impl SeaweedField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stalks for a canvas width
    pub fn count_for_width(canvas_width: f32) -> usize {
        SEAWEED_MIN_COUNT.max((canvas_width / SEAWEED_SPACING).floor() as usize)
    }

    /// Discard all stalks and grow a fresh field for the canvas width
    pub fn generate(&mut self, canvas_width: f32, rng: &mut impl Rng) {
        let count = Self::count_for_width(canvas_width);
        self.stalks.clear();
        self.stalks.reserve(count);

        for _ in 0..count {
            let layer: u8 = if rng.random::<f32>() < 0.5 { 0 } else { 1 };
            let (speed_base, speed_spread) = if layer == 0 {
                (0.004, 0.01)
            } else {
                (0.01, 0.02)
            };
            self.stalks.push(Seaweed {
                x: rng.random::<f32>() * canvas_width,
                height: 160.0 + rng.random::<f32>() * 360.0,
                sway_amp: 14.0 + rng.random::<f32>() * 36.0,
                sway_speed: speed_base + rng.random::<f32>() * speed_spread,
                phase: rng.random::<f32>() * TAU,
                base_width: 6.0 + rng.random::<f32>() * 10.0,
                hue: 100.0 + rng.random::<f32>() * 50.0,
                light: 20.0 + rng.random::<f32>() * 30.0,
                segments: 10 + (rng.random::<f32>() * 8.0).floor() as usize,
                layer,
            });
        }
        log::info!("seaweed field: {} stalks", self.stalks.len());
    }

    /// Advance every stalk's sway phase by one frame
    pub fn update(&mut self) {
        for stalk in &mut self.stalks {
            stalk.phase += stalk.sway_speed;
        }
    }

    /// Draw every stalk as a filled ribbon rooted at `base_y`
    pub fn render(&self, surface: &mut impl Surface, base_y: f32) -> Result<(), SurfaceError> {
        for stalk in &self.stalks {
            let centerline = stalk.centerline(base_y);
            let point_count = centerline.len();
            let layer_scale = if stalk.layer == 0 { 1.0 } else { 1.4 };
            let outline = ribbon_outline(&centerline, |j| {
                stalk.base_width * layer_scale * (1.0 - j as f32 / point_count as f32)
            });
            let paint = Paint::Solid(stalk.fill_color());
            surface.fill_path(&outline, &paint)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_count_scales_with_width() {
        assert_eq!(SeaweedField::count_for_width(1000.0), 20);
        // Below 500 px the floor of 10 dominates
        assert_eq!(SeaweedField::count_for_width(400.0), 10);
        assert_eq!(SeaweedField::count_for_width(0.0), 10);
    }

    #[test]
    fn test_generate_replaces_field() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut field = SeaweedField::new();
        field.generate(1000.0, &mut rng);
        assert_eq!(field.stalks.len(), 20);
        field.generate(400.0, &mut rng);
        assert_eq!(field.stalks.len(), 10);
    }

    #[test]
    fn test_generated_parameters_in_range() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut field = SeaweedField::new();
        field.generate(1200.0, &mut rng);

        for stalk in &field.stalks {
            assert!(stalk.x >= 0.0 && stalk.x < 1200.0);
            assert!(stalk.height >= 160.0 && stalk.height < 520.0);
            assert!(stalk.sway_amp >= 14.0 && stalk.sway_amp < 50.0);
            assert!(stalk.base_width >= 6.0 && stalk.base_width < 16.0);
            assert!(stalk.hue >= 100.0 && stalk.hue < 150.0);
            assert!(stalk.light >= 20.0 && stalk.light < 50.0);
            assert!(stalk.segments >= 10 && stalk.segments < 18);
            assert!(stalk.layer <= 1);
            match stalk.layer {
                0 => assert!(stalk.sway_speed >= 0.004 && stalk.sway_speed < 0.014),
                _ => assert!(stalk.sway_speed >= 0.01 && stalk.sway_speed < 0.03),
            }
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let mut field_a = SeaweedField::new();
        let mut field_b = SeaweedField::new();
        field_a.generate(900.0, &mut Pcg32::seed_from_u64(123));
        field_b.generate(900.0, &mut Pcg32::seed_from_u64(123));

        assert_eq!(field_a.stalks.len(), field_b.stalks.len());
        for (a, b) in field_a.stalks.iter().zip(&field_b.stalks) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.height, b.height);
            assert_eq!(a.phase, b.phase);
            assert_eq!(a.segments, b.segments);
        }
    }

    #[test]
    fn test_update_accumulates_phase() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut field = SeaweedField::new();
        field.generate(600.0, &mut rng);
        let before: Vec<f32> = field.stalks.iter().map(|s| s.phase).collect();

        field.update();
        field.update();

        for (stalk, prev) in field.stalks.iter().zip(&before) {
            let expected = prev + 2.0 * stalk.sway_speed;
            assert!((stalk.phase - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_render_one_path_per_stalk() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = SeaweedField::new();
        field.generate(800.0, &mut rng);

        let mut surface = RecordingSurface::new(800.0, 600.0);
        field.render(&mut surface, 600.0).unwrap();
        assert_eq!(surface.counts().paths as usize, field.stalks.len());
        assert!(surface.transforms_balanced());
    }

    #[test]
    fn test_centerline_tip_is_pinned() {
        let stalk = Seaweed {
            x: 100.0,
            height: 200.0,
            sway_amp: 30.0,
            sway_speed: 0.01,
            phase: 1.3,
            base_width: 8.0,
            hue: 120.0,
            light: 30.0,
            segments: 12,
            layer: 0,
        };
        let points = stalk.centerline(600.0);
        assert_eq!(points.len(), 13);
        assert_eq!(points[0].y, 600.0);
        // Base sways at full amplitude for the current phase
        let expected_base_x = 100.0 + 1.3f32.sin() * 30.0;
        assert!((points[0].x - expected_base_x).abs() < 1e-4);
        // Damping term is zero at t=1, so the tip stays on the root axis
        assert!((points[12].x - 100.0).abs() < 1e-4);
        assert_eq!(points[12].y, 400.0);
    }
}
