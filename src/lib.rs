//! particle-field: decorative canvas backgrounds for a portfolio site.
//!
//! This crate provides WASM components that render an ambient particle effect
//! (falling snow or a twinkling starfield) behind the page content.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{
	EffectKind, FieldBackground, FieldConfig, SnowEffect, StarBackground,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Info);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

/// Load background configuration from a script element with id="particle-config".
/// Expected format: JSON with { effect: "snow" | "stars", snow: {...}, stars: {...} }
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	let config = match serde_json::from_str::<FieldConfig>(&json_text) {
		Ok(config) => config,
		Err(e) => {
			warn!("particle-field: failed to parse config: {}", e);
			return None;
		}
	};
	if let Err(e) = config.validate() {
		warn!("particle-field: invalid config, using defaults: {}", e);
		return None;
	}

	info!("particle-field: {:?} background configured", config.effect);
	Some(config)
}

/// Main application component.
/// Loads the background config from the DOM and mounts the selected effect
/// behind the page content.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	provide_context(load_field_config().unwrap_or_default());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="page-background">
			<FieldBackground />
		</div>
	}
}
