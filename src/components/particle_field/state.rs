//! Per-mount animation state and the frame loop state machine.
//!
//! A [`FieldState`] is created once when the component mounts: it owns the
//! surface, the particle pool and the random source. Each display frame calls
//! [`FieldState::tick`], which clears the surface, steps the effect and asks
//! the scheduler for the next frame. [`FieldState::stop`] is terminal; a new
//! mount builds a new state with a fresh pool.

use fastrand::Rng;

use super::particles::ParticleEffect;
use super::scheduler::FrameScheduler;
use super::surface::Surface;

/// Whether the frame loop is still scheduling ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
	Running,
	Stopped,
}

/// Everything one mounted effect owns.
pub struct FieldState<E, S> {
	effect: E,
	surface: S,
	rng: Rng,
	state: LoopState,
}

impl<E: ParticleEffect, S: Surface> FieldState<E, S> {
	/// Populate the particle pool from the surface's current size and enter
	/// [`LoopState::Running`].
	///
	/// The pool size is fixed from here on, including when the surface was
	/// still zero-sized at mount.
	pub fn mount(surface: S, style: &E::Style, mut rng: Rng) -> Self {
		let effect = E::populate(surface.width(), surface.height(), style, &mut rng);
		Self {
			effect,
			surface,
			rng,
			state: LoopState::Running,
		}
	}

	/// Run one frame. Returns `false` without touching the surface once stopped.
	pub fn tick(&mut self, scheduler: &mut dyn FrameScheduler) -> bool {
		if self.state == LoopState::Stopped {
			return false;
		}

		self.surface.clear();
		self.effect.step(&mut self.surface, &mut self.rng);
		scheduler.schedule_next_frame();
		true
	}

	/// Apply a new viewport size to the surface. The particle pool is kept;
	/// particles outside the new bounds come back on their next wrap.
	pub fn resize(&mut self, width: f64, height: f64) {
		if self.surface.width() == width && self.surface.height() == height {
			return;
		}
		self.surface.resize(width, height);
	}

	/// Enter [`LoopState::Stopped`] and cancel the pending frame.
	pub fn stop(&mut self, scheduler: &mut dyn FrameScheduler) {
		self.state = LoopState::Stopped;
		scheduler.cancel();
	}

	pub fn state(&self) -> LoopState {
		self.state
	}

	pub fn particle_count(&self) -> usize {
		self.effect.len()
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}
}
