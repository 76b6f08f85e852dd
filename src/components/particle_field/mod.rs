//! Decorative particle backgrounds rendered on an HTML canvas.
//!
//! Two independent effects share one frame loop:
//! - Falling snow that drifts sideways and respawns at the top
//! - A twinkling starfield with rare one-shot shooting stars
//!
//! Each mounted component owns a [`FieldState`]: a canvas-backed surface, a
//! particle pool sized from the canvas area at mount, and a random source.
//! The pool is never regenerated; resizing the window only resizes the canvas.
//!
//! # Example
//!
//! ```ignore
//! use particle_field::{FieldConfig, SnowEffect};
//!
//! provide_context(FieldConfig::default());
//! view! { <SnowEffect /> }
//! ```

mod component;
mod particles;
mod scheduler;
mod snow;
mod stars;
mod state;
mod surface;
#[cfg(test)]
mod testing;
pub mod theme;
mod types;

pub use component::{FieldBackground, SnowEffect, StarBackground};
pub use particles::{ParticleEffect, particle_count};
pub use scheduler::FrameScheduler;
pub use snow::{Snowfall, Snowflake};
pub use stars::{ShootingStar, Star, Starfield};
pub use state::{FieldState, LoopState};
pub use surface::{Surface, SurfaceError};
pub use theme::{Color, ShootingStarStyle, SnowStyle, StarStyle};
pub use types::{ConfigError, EffectKind, FieldConfig};
