//! Test doubles for the surface and frame scheduler.

use super::scheduler::FrameScheduler;
use super::surface::Surface;
use super::theme::Color;

/// Every call made against a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum Draw {
	Clear,
	Circle { x: f64, y: f64, radius: f64, color: Color },
	Glow { blur: f64, color: Color },
	FadingLine { from: (f64, f64), to: (f64, f64), line_width: f64, color: Color },
}

/// In-memory surface that records draw calls instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
	pub width: f64,
	pub height: f64,
	pub calls: Vec<Draw>,
	pub resizes: usize,
}

impl RecordingSurface {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width,
			height,
			..Self::default()
		}
	}

	pub fn clears(&self) -> usize {
		self.calls.iter().filter(|c| matches!(c, Draw::Clear)).count()
	}

	pub fn circles(&self) -> impl Iterator<Item = &Draw> {
		self.calls.iter().filter(|c| matches!(c, Draw::Circle { .. }))
	}
}

impl Surface for RecordingSurface {
	fn width(&self) -> f64 {
		self.width
	}

	fn height(&self) -> f64 {
		self.height
	}

	fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.resizes += 1;
	}

	fn clear(&mut self) {
		self.calls.push(Draw::Clear);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.calls.push(Draw::Circle { x, y, radius, color });
	}

	fn set_glow(&mut self, blur: f64, color: Color) {
		self.calls.push(Draw::Glow { blur, color });
	}

	fn stroke_fading_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		line_width: f64,
		color: Color,
	) {
		self.calls.push(Draw::FadingLine {
			from,
			to,
			line_width,
			color,
		});
	}
}

/// Scheduler that only counts requests and cancellations.
#[derive(Debug, Default)]
pub struct CountingScheduler {
	pub scheduled: usize,
	pub cancelled: usize,
	pub pending: bool,
}

impl FrameScheduler for CountingScheduler {
	fn schedule_next_frame(&mut self) {
		self.scheduled += 1;
		self.pending = true;
	}

	fn cancel(&mut self) {
		self.cancelled += 1;
		self.pending = false;
	}
}
