//! Falling snow.
//!
//! Flakes fall at their own speed with a constant sideways wind. Leaving the
//! bottom respawns a flake just above the top edge at a new column; leaving a
//! side wraps it to the opposite side.

use fastrand::Rng;

use super::particles::{ParticleEffect, particle_count, uniform};
use super::surface::Surface;
use super::theme::{Color, SnowStyle};

/// A single snowflake.
#[derive(Clone, Debug)]
pub struct Snowflake {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub fall_speed: f64,
	pub drift: f64,
	pub opacity: f64,
	/// Fill and glow color, fixed at creation.
	pub color: Color,
}

impl Snowflake {
	/// Create a flake somewhere on a `width` x `height` surface.
	pub fn spawn(width: f64, height: f64, style: &SnowStyle, rng: &mut Rng) -> Self {
		let opacity = uniform(rng, &style.opacity);
		Self {
			x: rng.f64() * width,
			y: rng.f64() * height,
			radius: uniform(rng, &style.radius),
			fall_speed: uniform(rng, &style.fall_speed),
			drift: uniform(rng, &style.drift),
			opacity,
			color: style.tint.with_alpha(opacity),
		}
	}

	/// Move one frame and wrap at the surface edges.
	pub fn advance(&mut self, width: f64, height: f64, respawn_offset: f64, rng: &mut Rng) {
		self.y += self.fall_speed;
		self.x += self.drift;

		if self.y > height {
			self.y = -respawn_offset;
			self.x = rng.f64() * width;
		}
		if self.x > width {
			self.x = 0.0;
		}
		if self.x < 0.0 {
			self.x = width;
		}
	}

	/// Draw with a glow in the flake's own color, then switch the glow off so
	/// it does not bleed onto the next flake.
	pub fn draw(&self, surface: &mut dyn Surface, glow_blur: f64) {
		surface.set_glow(glow_blur, self.color);
		surface.fill_circle(self.x, self.y, self.radius, self.color);
		surface.set_glow(0.0, Color::TRANSPARENT);
	}
}

/// The snow particle pool.
#[derive(Clone, Debug)]
pub struct Snowfall {
	pub flakes: Vec<Snowflake>,
	glow_blur: f64,
	respawn_offset: f64,
}

impl ParticleEffect for Snowfall {
	type Style = SnowStyle;

	fn populate(width: f64, height: f64, style: &SnowStyle, rng: &mut Rng) -> Self {
		let count = particle_count(width, height, style.density);
		Self {
			flakes: (0..count)
				.map(|_| Snowflake::spawn(width, height, style, rng))
				.collect(),
			glow_blur: style.glow_blur,
			respawn_offset: style.respawn_offset,
		}
	}

	fn len(&self) -> usize {
		self.flakes.len()
	}

	fn step(&mut self, surface: &mut dyn Surface, rng: &mut Rng) {
		let (width, height) = (surface.width(), surface.height());
		for flake in &mut self.flakes {
			flake.advance(width, height, self.respawn_offset, rng);
			flake.draw(surface, self.glow_blur);
		}
	}
}
