//! portfolio-site: single-page personal portfolio for the browser.
//!
//! This crate renders the whole page as a WASM Leptos app: an animated particle
//! hologram background, theme switching, project/skill/blog sections built
//! from static data, and a contact form backed by a remote endpoint.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

// Only pulled in to enable its `js` entropy source for `rand` on wasm.
use getrandom as _;

pub mod components;
pub mod config;

use components::contact::{ContactSection, contact_endpoint};
use components::content::{BlogSection, HighlightsSection, ProjectsSection, SkillsSection};
use components::hero::HeroTitle;
use components::nav::{Navbar, scroll_to_section};
use components::particle_field::ParticleBackground;
use components::theme_toggle::{ThemeHandle, ThemeStore, ThemeToggle};
pub use config::SiteConfig;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio: logging initialized");
}

/// Main application component.
/// Loads the site config and theme from the DOM and renders every section.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let SiteConfig {
		backend_url,
		owner,
		tagline,
		particles,
		content,
	} = SiteConfig::load();

	let initial_theme = ThemeStore::load();
	ThemeStore::apply(initial_theme);
	let theme = ThemeHandle::new(initial_theme);

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=format!("{owner} | Portfolio") />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleBackground theme=theme.clone() config=particles />
		<Navbar brand=owner.clone() />
		<ThemeToggle theme=theme />

		<main class="page">
			<section id="home" class="hero">
				<HeroTitle text=owner />
				<p class="hero-subtitle">{tagline}</p>
				<div class="hero-actions">
					<button class="btn btn-primary" on:click=move |_| scroll_to_section("#projects")>
						"View Projects"
					</button>
					<button class="btn btn-secondary" on:click=move |_| scroll_to_section("#contact")>
						"Contact Me"
					</button>
				</div>
			</section>

			<HighlightsSection highlights=content.highlights />
			<ProjectsSection projects=content.projects />
			<SkillsSection skills=content.skills />
			<BlogSection posts=content.blog />
			<ContactSection endpoint=contact_endpoint(&backend_url) />
		</main>
	}
}
