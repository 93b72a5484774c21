//! Leptos component wrapping the particle background canvas.
//!
//! The component creates a full-viewport canvas plus the hologram aura overlay.
//! Once mounted, a frame loop advances and draws the field every display
//! refresh, and the window resize listener reseeds it for the new viewport.
//! Without a canvas or a 2D context the component stays inactive and draws
//! nothing. Unmounting stops the loop and removes the listener.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::aura::HologramAura;
use super::config::FieldConfig;
use super::frame_loop::{self, StopHandle};
use super::particles::ParticleField;
use super::surface::CanvasSurface;
use crate::components::theme_toggle::ThemeHandle;

/// Everything the frame loop owns between frames.
struct FrameState {
	field: ParticleField,
	surface: CanvasSurface,
	aura: HologramAura,
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Animated particle and hologram background filling the viewport.
///
/// The theme is read through `theme` at every frame; the component never
/// changes it.
#[component]
pub fn ParticleBackground(
	theme: ThemeHandle,
	#[prop(optional)] config: Option<FieldConfig>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let aura_ref = NodeRef::<leptos::html::Div>::new();
	let config = match config.map(|c| c.validate().map(|()| c)) {
		Some(Ok(config)) => config,
		Some(Err(e)) => {
			warn!("portfolio: {}, using default particle settings", e);
			FieldConfig::default()
		}
		None => FieldConfig::default(),
	};

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("portfolio: no window, particle background inactive");
			return;
		};
		let Some((w, h)) = viewport_size(&window) else {
			warn!("portfolio: viewport size unavailable, particle background inactive");
			return;
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = context_2d(&canvas) else {
			warn!("portfolio: 2d context unavailable, particle background inactive");
			return;
		};

		let frame = Rc::new(RefCell::new(FrameState {
			field: ParticleField::new(config.clone(), w, h),
			surface: CanvasSurface::new(ctx),
			aura: HologramAura::default(),
		}));
		info!(
			"portfolio: particle background running with {} particles",
			frame.borrow().field.particles.len()
		);

		let (frame_resize, canvas_resize) = (frame.clone(), canvas.clone());
		let resize_listener = window_event_listener(ev::resize, move |_| {
			let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
				return;
			};
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			frame_resize.borrow_mut().field.resize(nw, nh);
		});

		let stop = StopHandle::new();
		let (theme, aura_el, performance) =
			(theme.clone(), aura_ref.get_untracked(), window.performance());
		frame_loop::run(stop.clone(), move || {
			let time = performance.as_ref().map(|p| p.now() / 1000.0).unwrap_or(0.0);
			let mut state = frame.borrow_mut();
			let FrameState {
				field,
				surface,
				aura,
			} = &mut *state;

			field.tick(surface, theme.get(), time);

			aura.advance();
			if let Some(el) = &aura_el {
				let style = web_sys::HtmlElement::style(el);
				let _ = style.set_property("transform", &aura.transform());
				let _ = style.set_property("opacity", &aura.opacity().to_string());
			}
		});

		on_cleanup(move || {
			stop.stop_and_cancel();
			resize_listener.remove();
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="particleCanvas"
			class="particle-canvas"
			style="position: fixed; inset: 0; z-index: 0; pointer-events: none;"
		/>
		<div
			node_ref=aura_ref
			class="hologram-aura"
			style="position: fixed; width: 50vw; height: 50vw; border-radius: 50%; left: 50%; top: 50%; transform: translate(-50%, -50%); pointer-events: none; z-index: 1; mix-blend-mode: screen; opacity: 0.25; background: radial-gradient(circle at 50% 40%, rgba(0,255,255,0.8), rgba(0,0,0,0));"
		/>
	}
}
