//! Visual tuning for the particle effects.
//!
//! Every number that shapes an effect lives here, with defaults matching the
//! look of the live site. Styles deserialize with per-field defaults so a page
//! config only needs to name the values it overrides.

use std::ops::Range;

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	pub const WHITE: Color = Color::rgb(255, 255, 255);
	pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS `rgba()` string.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Tuning for the falling snow effect.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SnowStyle {
	/// Surface pixels per flake (the density constant K).
	pub density: f64,
	pub radius: Range<f64>,
	pub fall_speed: Range<f64>,
	/// Horizontal wind per frame; negative drifts left.
	pub drift: Range<f64>,
	pub opacity: Range<f64>,
	/// Flake tint. Its alpha is replaced by each flake's own opacity.
	pub tint: Color,
	pub glow_blur: f64,
	/// How far above the top edge a flake respawns after leaving the bottom.
	pub respawn_offset: f64,
	/// CSS opacity applied to the whole canvas element.
	pub canvas_opacity: f64,
}

impl Default for SnowStyle {
	fn default() -> Self {
		Self {
			density: 8000.0,
			radius: 1.0..4.0,
			fall_speed: 0.2..1.0,
			drift: -0.25..0.25,
			opacity: 0.1..0.5,
			tint: Color::rgb(156, 163, 175),
			glow_blur: 15.0,
			respawn_offset: 10.0,
			canvas_opacity: 0.8,
		}
	}
}

/// Tuning for the twinkling starfield and its shooting stars.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct StarStyle {
	/// Surface pixels per star (the density constant K).
	pub density: f64,
	pub radius: Range<f64>,
	/// Alpha change per frame.
	pub twinkle_velocity: Range<f64>,
	pub initial_alpha: Range<f64>,
	/// Brightness band a star oscillates within, inclusive at both ends.
	pub min_alpha: f64,
	pub max_alpha: f64,
	pub color: Color,
	pub shooting: ShootingStarStyle,
}

impl Default for StarStyle {
	fn default() -> Self {
		Self {
			density: 5000.0,
			radius: 0.0..1.5,
			twinkle_velocity: 0.0..0.05,
			initial_alpha: 0.0..1.0,
			min_alpha: 0.2,
			max_alpha: 1.0,
			color: Color::WHITE,
			shooting: ShootingStarStyle::default(),
		}
	}
}

/// One-shot streaks drawn from a star's position.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShootingStarStyle {
	/// Chance per star per frame.
	pub chance: f64,
	pub length: Range<f64>,
	pub line_width: f64,
	/// Color at the head; the streak fades to fully transparent at the tail.
	pub color: Color,
}

impl Default for ShootingStarStyle {
	fn default() -> Self {
		Self {
			chance: 0.0001,
			length: 50.0..150.0,
			line_width: 2.0,
			color: Color::WHITE,
		}
	}
}
