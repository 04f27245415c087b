//! Reef Tank - a procedural aquarium scene
//!
//! Core modules:
//! - `scene`: Deterministic scene core (entity fields, procedural geometry,
//!   per-frame update/render loop)
//! - `surface`: Canvas2D-like drawing surface abstraction the host supplies
//! - `config`: Data-driven scene variants (feature flags per demo)
//!
//! The host owns the event loop, the real drawing surface, and input
//! plumbing; it forwards resize/click events and calls `Scene::tick`
//! once per frame.

pub mod config;
pub mod scene;
pub mod surface;

pub use config::SceneConfig;
pub use scene::{Scene, ScenePhase};
pub use surface::{Paint, Rgba, Surface, SurfaceError};

/// Scene layout constants
pub mod consts {
    /// Canvas width divisor for seaweed count (one stalk per 50 px)
    pub const SEAWEED_SPACING: f32 = 50.0;
    /// Minimum seaweed stalks regardless of canvas width
    pub const SEAWEED_MIN_COUNT: usize = 10;

    /// Canvas width divisor for coral count (one coral per 80 px)
    pub const CORAL_SPACING: f32 = 80.0;
    /// Minimum corals regardless of canvas width
    pub const CORAL_MIN_COUNT: usize = 8;

    /// Fixed number of rocks on the tank floor
    pub const ROCK_COUNT: usize = 3;
    /// Horizontal margin keeping rocks away from the canvas edges
    pub const ROCK_MARGIN: f32 = 60.0;

    /// Fish size range (min, max exclusive)
    pub const FISH_SIZE_MIN: f32 = 16.0;
    pub const FISH_SIZE_MAX: f32 = 52.0;
}
