//! The drawing surface the effects render into.
//!
//! Effects only talk to the [`Surface`] trait so the update rules can run
//! against a recording double in native tests. [`CanvasSurface`] is the
//! browser implementation over an HTML canvas and its 2d context.

use std::f64::consts::TAU;

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::theme::Color;

/// Why a surface could not be attached. All of these end with no animation.
#[derive(Debug, Error)]
pub enum SurfaceError {
	#[error("no browser window available")]
	NoWindow,
	#[error("canvas did not provide a 2d drawing context")]
	ContextUnavailable,
	#[error("2d context has an unexpected type")]
	NotCanvas2d,
}

/// A 2d drawing area with a live size.
pub trait Surface {
	fn width(&self) -> f64;
	fn height(&self) -> f64;

	/// Apply a new size. Clears the pixel buffer as a side effect.
	fn resize(&mut self, width: f64, height: f64);

	/// Clear the whole surface.
	fn clear(&mut self);

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);

	/// Soft glow around shapes drawn after this call. A blur of zero turns it off.
	fn set_glow(&mut self, blur: f64, color: Color);

	/// Stroke a straight segment whose color fades from `color` at `from` to
	/// fully transparent at `to`.
	fn stroke_fading_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		line_width: f64,
		color: Color,
	);
}

/// Browser canvas surface.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Acquire the 2d context of `canvas`.
	pub fn attach(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
		let ctx = canvas
			.get_context("2d")
			.map_err(|_| SurfaceError::ContextUnavailable)?
			.ok_or(SurfaceError::ContextUnavailable)?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| SurfaceError::NotCanvas2d)?;
		Ok(Self { canvas, ctx })
	}

	/// Attach to `canvas` and size it to the current window.
	pub fn fill_viewport(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
		let (width, height) = viewport_size()?;
		let mut surface = Self::attach(canvas)?;
		surface.resize(width, height);
		Ok(surface)
	}
}

/// Current inner size of the browser window.
pub fn viewport_size() -> Result<(f64, f64), SurfaceError> {
	let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
	let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	Ok((width, height))
}

impl Surface for CanvasSurface {
	fn width(&self) -> f64 {
		self.canvas.width() as f64
	}

	fn height(&self) -> f64 {
		self.canvas.height() as f64
	}

	fn resize(&mut self, width: f64, height: f64) {
		self.canvas.set_width(width.max(0.0) as u32);
		self.canvas.set_height(height.max(0.0) as u32);
	}

	fn clear(&mut self) {
		self.ctx.clear_rect(0.0, 0.0, self.width(), self.height());
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();
	}

	fn set_glow(&mut self, blur: f64, color: Color) {
		self.ctx.set_shadow_blur(blur);
		self.ctx.set_shadow_color(&color.to_css());
	}

	fn stroke_fading_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		line_width: f64,
		color: Color,
	) {
		let gradient = self.ctx.create_linear_gradient(from.0, from.1, to.0, to.1);
		let _ = gradient.add_color_stop(0.0, &color.to_css());
		let _ = gradient.add_color_stop(1.0, &color.with_alpha(0.0).to_css());

		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		#[allow(deprecated)]
		self.ctx.set_stroke_style(&gradient);
		self.ctx.set_line_width(line_width);
		self.ctx.stroke();
	}
}
