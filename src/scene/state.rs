//! Scene state and per-frame driver
//!
//! Owns the five entity fields, the seeded RNG, and the loop state. The
//! host calls `tick` once per frame and forwards resize/click events; all
//! state mutation happens inside those three entry points, serialized by
//! the host's single-threaded event loop.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::bubble::BubbleSystem;
use super::coral::CoralField;
use super::fish::FishFlock;
use super::rock::RockField;
use super::seaweed::SeaweedField;
use crate::config::SceneConfig;
use crate::surface::{ColorStop, Paint, Rgba, Surface, SurfaceError};

/// Water column gradient, light at the surface
const WATER_TOP: Rgba = Rgba::hex(0x73c8ed);
const WATER_MID: Rgba = Rgba::hex(0x3790e8);
const WATER_DEEP: Rgba = Rgba::hex(0x063777);
/// Diagnostic screen colors
const FAULT_BG: Rgba = Rgba::hex(0xffeeee);
const FAULT_TEXT: Rgba = Rgba::rgb(1.0, 0.0, 0.0);

/// Loop state. There is no pause; a fault is terminal for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenePhase {
    /// Normal operation; entered at startup
    Running,
    /// A frame failed; the scene painted a diagnostic and stopped
    Fault,
}

/// The whole aquarium
#[derive(Debug, Clone)]
pub struct Scene {
    config: SceneConfig,
    width: f32,
    height: f32,
    rng: Pcg32,
    pub seaweed: SeaweedField,
    pub coral: CoralField,
    pub rocks: RockField,
    pub bubbles: BubbleSystem,
    pub fish: FishFlock,
    phase: ScenePhase,
    frame: u64,
}

impl Scene {
    /// Build a scene and generate all static decoration for the
    /// configured canvas size
    pub fn new(config: SceneConfig, seed: u64) -> Self {
        let mut scene = Self {
            config,
            width: config.width,
            height: config.height,
            rng: Pcg32::seed_from_u64(seed),
            seaweed: SeaweedField::new(),
            coral: CoralField::new(),
            rocks: RockField::new(),
            bubbles: BubbleSystem::new(),
            fish: FishFlock::new(),
            phase: ScenePhase::Running,
            frame: 0,
        };
        scene.regenerate();
        log::info!(
            "scene created: {}x{}, seed {seed}",
            config.width,
            config.height
        );
        scene
    }

    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Regrow every static field for the current canvas size
    fn regenerate(&mut self) {
        self.seaweed.generate(self.width, &mut self.rng);
        if self.config.with_coral {
            self.coral.generate(self.width, self.height, &mut self.rng);
        }
        if self.config.with_rocks {
            self.rocks.generate(self.width, self.height, &mut self.rng);
        }
    }

    /// Host resize event: regenerate the static decoration for the new
    /// size. Fish and bubbles persist; their own update rules pull them
    /// back in bounds or expire them.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.regenerate();
        log::info!("resized to {width}x{height}");
    }

    /// Host click event: spawn one fish at the click position
    pub fn on_click(&mut self, x: f32, y: f32) {
        self.fish.spawn(x, y, &mut self.rng);
    }

    /// Advance and draw one frame. After a fault this is a no-op; the
    /// session is over until the host reloads.
    pub fn tick(&mut self, surface: &mut impl Surface) {
        if self.phase == ScenePhase::Fault {
            return;
        }
        match self.run_frame(surface) {
            Ok(()) => self.frame += 1,
            Err(err) => self.fault(surface, &err),
        }
    }

    /// One frame in fixed order: background, seaweed, coral, bubbles,
    /// rocks (which may emit new bubbles), fish.
    fn run_frame(&mut self, surface: &mut impl Surface) -> Result<(), SurfaceError> {
        let background = Paint::linear_gradient(
            glam::Vec2::ZERO,
            glam::Vec2::new(0.0, self.height),
            vec![
                ColorStop::new(0.0, WATER_TOP),
                ColorStop::new(0.6, WATER_MID),
                ColorStop::new(1.0, WATER_DEEP),
            ],
        );
        surface.fill_rect(0.0, 0.0, self.width, self.height, &background)?;

        self.seaweed.update();
        self.seaweed.render(surface, self.height)?;

        if self.config.with_coral {
            self.coral.render(surface)?;
        }

        if self.config.with_bubbles {
            self.bubbles.update();
            self.bubbles.render(surface)?;
        }

        if self.config.with_rocks {
            let bubbles = self.config.with_bubbles.then_some(&mut self.bubbles);
            self.rocks.update_and_render(surface, bubbles, &mut self.rng)?;
        }

        self.fish.update(self.width);
        self.fish.render(surface)?;

        Ok(())
    }

    /// Terminal fault path: log, paint a plain diagnostic in place of the
    /// scene, and stop. Secondary draw failures are ignored; there is
    /// nothing left to do with them.
    fn fault(&mut self, surface: &mut impl Surface, err: &SurfaceError) {
        log::error!("frame {} fault: {err}", self.frame);
        self.phase = ScenePhase::Fault;

        let _ = surface.fill_rect(
            0.0,
            0.0,
            self.width,
            self.height,
            &Paint::Solid(FAULT_BG),
        );
        let message = format!("scene fault: {err}");
        let _ = surface.draw_text(&message, 20.0, 40.0, 18.0, &Paint::Solid(FAULT_TEXT));
    }
}
