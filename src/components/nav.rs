//! Top navigation bar, mobile menu and scroll progress indicator.

use leptos::ev::{self, MouseEvent};
use leptos::prelude::*;
use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Page scroll (px) after which the navbar switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Section anchors shown in the navbar, in page order.
pub const NAV_LINKS: [(&str, &str); 6] = [
	("Home", "#home"),
	("About", "#about"),
	("Projects", "#projects"),
	("Skills", "#skills"),
	("Blog", "#blog"),
	("Contact", "#contact"),
];

pub fn is_scrolled(scroll_y: f64) -> bool {
	scroll_y > SCROLLED_THRESHOLD
}

/// Percentage of the scrollable range already scrolled, in `[0, 100]`.
/// A page that cannot scroll reports 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
	let range = scroll_height - viewport_height;
	if range <= 0.0 || !range.is_finite() {
		return 0.0;
	}
	(scroll_top / range * 100.0).clamp(0.0, 100.0)
}

/// Smoothly scrolls the first element matching `selector` into view.
pub fn scroll_to_section(selector: &str) {
	let Some(element) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.query_selector(selector).ok().flatten())
	else {
		debug!("portfolio: no section matches {}", selector);
		return;
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Reads `(scroll_y, scroll_height, viewport_height)` from the window.
fn scroll_metrics() -> Option<(f64, f64, f64)> {
	let window = web_sys::window()?;
	let scroll_y = window.scroll_y().ok()?;
	let viewport = window.inner_height().ok()?.as_f64()?;
	let height = window.document()?.document_element()?.scroll_height() as f64;
	Some((scroll_y, height, viewport))
}

/// Thin bar along the top edge whose width tracks how far the page is scrolled.
#[component]
pub fn ScrollProgress(progress: ReadSignal<f64>) -> impl IntoView {
	view! {
		<div
			id="scrollProgress"
			class="scroll-progress"
			style:width=move || format!("{}%", progress.get())
		/>
	}
}

/// Navbar with the burger menu and the scroll progress bar above it.
#[component]
pub fn Navbar(#[prop(into)] brand: String) -> impl IntoView {
	let menu_open = RwSignal::new(false);
	let scrolled = RwSignal::new(false);
	let (progress, set_progress) = signal(0.0_f64);

	let listener = window_event_listener(ev::scroll, move |_| {
		if let Some((scroll_y, height, viewport)) = scroll_metrics() {
			scrolled.set(is_scrolled(scroll_y));
			set_progress.set(scroll_progress(scroll_y, height, viewport));
		}
	});
	on_cleanup(move || listener.remove());

	let links = NAV_LINKS
		.into_iter()
		.map(|(label, href)| {
			view! {
				<li>
					<a
						href=href
						class="nav-link"
						on:click=move |_: MouseEvent| menu_open.set(false)
					>
						{label}
					</a>
				</li>
			}
		})
		.collect_view();

	view! {
		<ScrollProgress progress=progress />
		<nav class="navbar" class:scrolled=move || scrolled.get()>
			<a href="#home" class="nav-brand">{brand}</a>
			<button
				id="navToggle"
				class="nav-toggle"
				aria-label="Toggle navigation"
				on:click=move |_: MouseEvent| menu_open.update(|open| *open = !*open)
			>
				"☰"
			</button>
			<ul id="navMenu" class="nav-menu" class:active=move || menu_open.get()>
				{links}
			</ul>
		</nav>
	}
}
