//! Leptos components mounting the particle effects onto a viewport canvas.
//!
//! On mount the canvas is sized to the window, the particle pool is built and
//! a `requestAnimationFrame` loop starts ticking the [`FieldState`]. A window
//! resize listener keeps the canvas matched to the viewport. Unmounting stops
//! the loop, cancels the pending frame and removes the listener.

use std::cell::RefCell;
use std::rc::Rc;

use fastrand::Rng;
use leptos::html::Canvas;
use leptos::prelude::*;
use log::{debug, info};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::particles::ParticleEffect;
use super::scheduler::{AnimationFrameScheduler, FrameCallback, FrameScheduler};
use super::snow::Snowfall;
use super::stars::Starfield;
use super::state::FieldState;
use super::surface::{CanvasSurface, Surface, viewport_size};
use super::types::{EffectKind, FieldConfig};

/// A running effect together with the scheduler that drives it.
struct Mounted<E> {
	state: FieldState<E, CanvasSurface>,
	scheduler: AnimationFrameScheduler,
}

type Shared<T> = Rc<RefCell<Option<T>>>;

/// Falling snow behind the page content.
///
/// Takes no props; tuning comes from a [`FieldConfig`] in context when the
/// page provides one.
#[component]
pub fn SnowEffect() -> impl IntoView {
	let style = use_context::<FieldConfig>()
		.map(|c| c.snow)
		.unwrap_or_default();
	let opacity = style.canvas_opacity;
	let canvas_ref = NodeRef::<Canvas>::new();

	run_field::<Snowfall>(canvas_ref, style, "snow");

	view! {
		<canvas
			node_ref=canvas_ref
			class="snow-effect"
			aria-hidden="true"
			style=overlay_style(opacity)
		/>
	}
}

/// Twinkling stars with the occasional shooting star.
#[component]
pub fn StarBackground() -> impl IntoView {
	let style = use_context::<FieldConfig>()
		.map(|c| c.stars)
		.unwrap_or_default();
	let canvas_ref = NodeRef::<Canvas>::new();

	run_field::<Starfield>(canvas_ref, style, "stars");

	view! {
		<canvas
			node_ref=canvas_ref
			class="star-background"
			aria-hidden="true"
			style=overlay_style(1.0)
		/>
	}
}

/// Whichever background the [`FieldConfig`] in context selects.
#[component]
pub fn FieldBackground() -> impl IntoView {
	let effect = use_context::<FieldConfig>()
		.map(|c| c.effect)
		.unwrap_or_default();

	match effect {
		EffectKind::Snow => view! { <SnowEffect /> }.into_any(),
		EffectKind::Stars => view! { <StarBackground /> }.into_any(),
	}
}

/// Full-viewport layer that sits behind content and never takes pointer input.
fn overlay_style(opacity: f64) -> String {
	format!(
		"position: fixed; inset: 0; width: 100%; height: 100%; z-index: 0; \
		 pointer-events: none; background: transparent; opacity: {opacity};"
	)
}

/// Wire an effect to `canvas_ref` for the lifetime of the calling component.
fn run_field<E>(canvas_ref: NodeRef<Canvas>, style: E::Style, name: &'static str)
where
	E: ParticleEffect + 'static,
	E::Style: 'static,
{
	let field: Shared<Mounted<E>> = Rc::new(RefCell::new(None));
	let frame: FrameCallback = Rc::new(RefCell::new(None));
	let resize_cb: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let (field_init, frame_init, resize_cb_init) =
		(field.clone(), frame.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if field_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let surface = match CanvasSurface::fill_viewport(canvas) {
			Ok(surface) => surface,
			Err(e) => {
				debug!("{name}: {e}, background disabled");
				return;
			}
		};

		let state = FieldState::<E, _>::mount(surface, &style, Rng::new());
		info!(
			"{name}: {} particles on {}x{} surface",
			state.particle_count(),
			state.surface().width(),
			state.surface().height()
		);
		*field_init.borrow_mut() = Some(Mounted {
			state,
			scheduler: AnimationFrameScheduler::new(frame_init.clone()),
		});

		let field_resize = field_init.clone();
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Ok((w, h)) = viewport_size() else {
				return;
			};
			if let Some(ref mut m) = *field_resize.borrow_mut() {
				m.state.resize(w, h);
				debug!("{name}: surface resized to {w}x{h}");
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let field_frame = field_init.clone();
		*frame_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut m) = *field_frame.borrow_mut() {
				m.state.tick(&mut m.scheduler);
			}
		}));
		if let Some(ref mut m) = *field_init.borrow_mut() {
			m.scheduler.schedule_next_frame();
		}
	});

	let teardown = SendWrapper::new((field, frame, resize_cb));
	on_cleanup(move || {
		let (field, frame, resize_cb) = teardown.take();

		if let Some(mut m) = field.borrow_mut().take() {
			m.state.stop(&mut m.scheduler);
			debug!("{name}: stopped");
		}
		if let (Some(window), Some(cb)) = (web_sys::window(), resize_cb.borrow_mut().take()) {
			let _ =
				window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		// Dropping the frame closure breaks its reference cycle with the state.
		frame.borrow_mut().take();
	});
}
