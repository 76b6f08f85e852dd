//! Twinkling starfield with the occasional shooting star.

use std::f64::consts::TAU;

use fastrand::Rng;

use super::particles::{ParticleEffect, particle_count, uniform};
use super::surface::Surface;
use super::theme::{ShootingStarStyle, StarStyle};

/// A fixed star whose brightness oscillates inside a band.
#[derive(Clone, Debug)]
pub struct Star {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub twinkle_velocity: f64,
	/// Current brightness.
	pub alpha: f64,
	/// `1.0` while brightening, `-1.0` while dimming.
	pub direction: f64,
}

impl Star {
	pub fn spawn(width: f64, height: f64, style: &StarStyle, rng: &mut Rng) -> Self {
		Self {
			x: rng.f64() * width,
			y: rng.f64() * height,
			radius: uniform(rng, &style.radius),
			twinkle_velocity: uniform(rng, &style.twinkle_velocity),
			alpha: uniform(rng, &style.initial_alpha),
			direction: if rng.bool() { 1.0 } else { -1.0 },
		}
	}

	/// Step brightness by one frame, keeping it inside `[min, max]`.
	///
	/// Reaching a bound turns the star back toward the inside of the band.
	pub fn twinkle(&mut self, min: f64, max: f64) {
		self.alpha += self.twinkle_velocity * self.direction;

		if self.alpha <= min {
			self.alpha = min;
			self.direction = 1.0;
		} else if self.alpha >= max {
			self.alpha = max;
			self.direction = -1.0;
		}
	}

	pub fn draw(&self, surface: &mut dyn Surface, style: &StarStyle) {
		surface.fill_circle(self.x, self.y, self.radius, style.color.with_alpha(self.alpha));
	}
}

/// A streak drawn once from a star's position. Not tracked across frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShootingStar {
	pub from: (f64, f64),
	pub to: (f64, f64),
}

impl ShootingStar {
	/// Roll the per-frame chance of a streak starting at `origin`.
	pub fn roll(origin: (f64, f64), style: &ShootingStarStyle, rng: &mut Rng) -> Option<Self> {
		if rng.f64() >= style.chance {
			return None;
		}
		Some(Self::launch(origin, style, rng))
	}

	/// A streak of random length and heading from `origin`.
	pub fn launch(origin: (f64, f64), style: &ShootingStarStyle, rng: &mut Rng) -> Self {
		let length = uniform(rng, &style.length);
		let angle = rng.f64() * TAU;
		Self {
			from: origin,
			to: (
				origin.0 + angle.cos() * length,
				origin.1 + angle.sin() * length,
			),
		}
	}

	pub fn draw(&self, surface: &mut dyn Surface, style: &ShootingStarStyle) {
		surface.stroke_fading_line(self.from, self.to, style.line_width, style.color);
	}
}

/// The star particle pool.
#[derive(Clone, Debug)]
pub struct Starfield {
	pub stars: Vec<Star>,
	style: StarStyle,
}

impl ParticleEffect for Starfield {
	type Style = StarStyle;

	fn populate(width: f64, height: f64, style: &StarStyle, rng: &mut Rng) -> Self {
		let count = particle_count(width, height, style.density);
		Self {
			stars: (0..count)
				.map(|_| Star::spawn(width, height, style, rng))
				.collect(),
			style: style.clone(),
		}
	}

	fn len(&self) -> usize {
		self.stars.len()
	}

	fn step(&mut self, surface: &mut dyn Surface, rng: &mut Rng) {
		let style = &self.style;
		for star in &mut self.stars {
			star.twinkle(style.min_alpha, style.max_alpha);
			star.draw(surface, style);

			if let Some(streak) = ShootingStar::roll((star.x, star.y), &style.shooting, rng) {
				streak.draw(surface, &style.shooting);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::testing::{Draw, RecordingSurface};
	use crate::components::particle_field::theme::Color;

	fn star(alpha: f64, twinkle_velocity: f64, direction: f64) -> Star {
		Star {
			x: 10.0,
			y: 20.0,
			radius: 1.0,
			twinkle_velocity,
			alpha,
			direction,
		}
	}

	#[test]
	fn spawned_stars_respect_attribute_ranges() {
		let mut rng = Rng::with_seed(11);
		let field = Starfield::populate(1000.0, 500.0, &StarStyle::default(), &mut rng);
		assert_eq!(field.len(), 100);

		for s in &field.stars {
			assert!((0.0..1.5).contains(&s.radius));
			assert!((0.0..0.05).contains(&s.twinkle_velocity));
			assert!((0.0..1.0).contains(&s.alpha));
			assert!(s.direction == 1.0 || s.direction == -1.0);
		}
	}

	#[test]
	fn direction_turns_at_band_edges() {
		let mut dimming = star(0.22, 0.04, -1.0);
		dimming.twinkle(0.2, 1.0);
		assert_eq!(dimming.alpha, 0.2);
		assert_eq!(dimming.direction, 1.0);

		let mut brightening = star(0.98, 0.04, 1.0);
		brightening.twinkle(0.2, 1.0);
		assert_eq!(brightening.alpha, 1.0);
		assert_eq!(brightening.direction, -1.0);

		let mut inside = star(0.5, 0.04, 1.0);
		inside.twinkle(0.2, 1.0);
		assert!((inside.alpha - 0.54).abs() < 1e-12);
		assert_eq!(inside.direction, 1.0);
	}

	#[test]
	fn alpha_stays_in_band_indefinitely() {
		let mut rng = Rng::with_seed(5);
		let style = StarStyle::default();
		let mut field = Starfield::populate(400.0, 400.0, &style, &mut rng);

		for _ in 0..500 {
			let before: Vec<f64> = field.stars.iter().map(|s| s.direction).collect();
			let mut surface = RecordingSurface::new(400.0, 400.0);
			field.step(&mut surface, &mut rng);

			for (s, dir) in field.stars.iter().zip(before) {
				assert!((0.2..=1.0).contains(&s.alpha));
				if s.direction != dir {
					assert!(s.alpha == 0.2 || s.alpha == 1.0);
				}
			}
		}
	}

	#[test]
	fn dim_start_recovers_into_band() {
		let mut s = star(0.05, 0.01, -1.0);
		s.twinkle(0.2, 1.0);
		assert_eq!(s.alpha, 0.2);
		s.twinkle(0.2, 1.0);
		assert!((s.alpha - 0.21).abs() < 1e-12);
	}

	#[test]
	fn star_is_drawn_white_at_current_alpha() {
		let mut surface = RecordingSurface::new(100.0, 100.0);
		star(0.6, 0.0, 1.0).draw(&mut surface, &StarStyle::default());
		assert_eq!(
			surface.calls,
			vec![Draw::Circle {
				x: 10.0,
				y: 20.0,
				radius: 1.0,
				color: Color::WHITE.with_alpha(0.6),
			}]
		);
	}

	#[test]
	fn shooting_star_geometry() {
		let mut rng = Rng::with_seed(21);
		let style = ShootingStarStyle::default();
		for _ in 0..200 {
			let streak = ShootingStar::launch((300.0, 200.0), &style, &mut rng);
			assert_eq!(streak.from, (300.0, 200.0));
			let (dx, dy) = (streak.to.0 - streak.from.0, streak.to.1 - streak.from.1);
			let len = dx.hypot(dy);
			assert!(len >= 50.0 - 1e-9 && len < 150.0 + 1e-9);
		}
	}

	#[test]
	fn shooting_star_chance_is_honoured() {
		let mut rng = Rng::with_seed(2);
		let never = ShootingStarStyle {
			chance: 0.0,
			..ShootingStarStyle::default()
		};
		let always = ShootingStarStyle {
			chance: 1.0,
			..ShootingStarStyle::default()
		};
		assert!((0..1000).all(|_| ShootingStar::roll((0.0, 0.0), &never, &mut rng).is_none()));
		assert!((0..1000).all(|_| ShootingStar::roll((0.0, 0.0), &always, &mut rng).is_some()));
	}

	#[test]
	fn shooting_star_fades_from_head_color() {
		let mut rng = Rng::with_seed(8);
		let style = StarStyle {
			shooting: ShootingStarStyle {
				chance: 1.0,
				..ShootingStarStyle::default()
			},
			..StarStyle::default()
		};
		let mut field = Starfield::populate(100.0, 100.0, &style, &mut rng);
		let mut surface = RecordingSurface::new(100.0, 100.0);

		field.step(&mut surface, &mut rng);

		let lines: Vec<&Draw> = surface
			.calls
			.iter()
			.filter(|c| matches!(c, Draw::FadingLine { .. }))
			.collect();
		assert_eq!(lines.len(), field.len());
		for (line, s) in lines.into_iter().zip(&field.stars) {
			let Draw::FadingLine { from, line_width, color, .. } = line else {
				unreachable!();
			};
			assert_eq!(*from, (s.x, s.y));
			assert_eq!(*line_width, 2.0);
			assert_eq!(*color, Color::WHITE);
		}
	}
}
