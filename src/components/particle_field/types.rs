//! Page-level configuration for the background effect.

use std::ops::Range;

use serde::Deserialize;
use thiserror::Error;

use super::theme::{SnowStyle, StarStyle};

/// Smallest accepted density: one particle per surface pixel.
const MIN_DENSITY: f64 = 1.0;

/// A config that parsed but would break the animation.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
	#[error("{0}: density must be a finite number of at least 1, got {1}")]
	Density(&'static str, f64),
	#[error("{0}: range {1:?} must be finite with start <= end")]
	Range(&'static str, Range<f64>),
	#[error("{0}: radius must not be negative, got {1:?}")]
	NegativeRadius(&'static str, Range<f64>),
	#[error("stars: alpha band [{0}, {1}] must be finite with min <= max")]
	AlphaBand(f64, f64),
}

/// Which background a page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
	Snow,
	#[default]
	Stars,
}

/// Effect selection plus optional style overrides.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	pub effect: EffectKind,
	pub snow: SnowStyle,
	pub stars: StarStyle,
}

impl FieldConfig {
	/// Check every value that sizes the pools or feeds a uniform draw.
	///
	/// Both styles are checked regardless of `effect`.
	pub fn validate(&self) -> Result<(), ConfigError> {
		let snow = &self.snow;
		check_density("snow", snow.density)?;
		check_radius("snow", &snow.radius)?;
		check_range("snow.fall_speed", &snow.fall_speed)?;
		check_range("snow.drift", &snow.drift)?;
		check_range("snow.opacity", &snow.opacity)?;

		let stars = &self.stars;
		check_density("stars", stars.density)?;
		check_radius("stars", &stars.radius)?;
		check_range("stars.twinkle_velocity", &stars.twinkle_velocity)?;
		check_range("stars.initial_alpha", &stars.initial_alpha)?;
		check_range("stars.shooting.length", &stars.shooting.length)?;

		let (min, max) = (stars.min_alpha, stars.max_alpha);
		if !(min.is_finite() && max.is_finite() && min <= max) {
			return Err(ConfigError::AlphaBand(min, max));
		}
		Ok(())
	}
}

fn check_density(name: &'static str, density: f64) -> Result<(), ConfigError> {
	if density.is_finite() && density >= MIN_DENSITY {
		Ok(())
	} else {
		Err(ConfigError::Density(name, density))
	}
}

fn check_range(name: &'static str, range: &Range<f64>) -> Result<(), ConfigError> {
	if range.start.is_finite() && range.end.is_finite() && range.start <= range.end {
		Ok(())
	} else {
		Err(ConfigError::Range(name, range.clone()))
	}
}

fn check_radius(name: &'static str, radius: &Range<f64>) -> Result<(), ConfigError> {
	check_range(name, radius)?;
	if radius.start < 0.0 {
		return Err(ConfigError::NegativeRadius(name, radius.clone()));
	}
	Ok(())
}
