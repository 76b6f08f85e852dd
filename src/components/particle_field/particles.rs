//! Shared pieces of the particle effects: pool sizing, range sampling and the
//! [`ParticleEffect`] trait both variants implement.

use std::ops::Range;

use fastrand::Rng;

use super::surface::Surface;

/// Number of particles for a surface, `floor(width * height / density)`.
///
/// A surface with no area (layout not settled yet) gets an empty pool.
pub fn particle_count(width: f64, height: f64, density: f64) -> usize {
	let area = width * height;
	if area <= 0.0 || density <= 0.0 {
		return 0;
	}
	(area / density).floor() as usize
}

/// Draw uniformly from `[range.start, range.end)`.
pub fn uniform(rng: &mut Rng, range: &Range<f64>) -> f64 {
	range.start + rng.f64() * (range.end - range.start)
}

/// A self-contained particle effect: a fixed pool of particles that is
/// advanced and drawn once per frame.
pub trait ParticleEffect {
	/// Tuning the effect is built from.
	type Style;

	/// Build the full particle pool for a surface of the given size.
	fn populate(width: f64, height: f64, style: &Self::Style, rng: &mut Rng) -> Self;

	/// Number of particles in the pool.
	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Update then draw every particle, in pool order.
	fn step(&mut self, surface: &mut dyn Surface, rng: &mut Rng);
}
