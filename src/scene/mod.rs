//! Deterministic scene core
//!
//! All procedural generation and animation lives here. This module must be
//! pure and deterministic:
//! - Frame-counted time only (one tick = one frame)
//! - Seeded RNG only, owned by the scene and threaded into every spawn path
//! - Stable iteration order (entities update in insertion order)
//! - Drawing only through the `Surface` trait, no platform dependencies

pub mod bubble;
pub mod coral;
pub mod fish;
pub mod ribbon;
pub mod rock;
pub mod seaweed;
pub mod state;

pub use bubble::{Bubble, BubbleSpawn, BubbleSystem};
pub use coral::{Coral, CoralField, CoralVariant};
pub use fish::{Fish, FishFlock};
pub use ribbon::ribbon_outline;
pub use rock::{Rock, RockField};
pub use seaweed::{Seaweed, SeaweedField};
pub use state::{Scene, ScenePhase};
