//! Leptos components for the content sections.
//!
//! Every card starts hidden and fades in after its reveal delay.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::data::{BlogPost, Highlight, Project, Skill};
use super::view::{
	BlogCard, HighlightCard, ProjectCard, ProjectFilter, SkillRow, blog_cards, card_tilt,
	filter_options, highlight_cards, project_cards, resting_tilt, skill_rows,
};

/// Signal that flips to `true` once `delay` has passed.
fn reveal_after(delay: std::time::Duration) -> RwSignal<bool> {
	let revealed = RwSignal::new(false);
	set_timeout(move || revealed.set(true), delay);
	revealed
}

fn hidden_opacity(revealed: RwSignal<bool>) -> impl Fn() -> &'static str {
	move || if revealed.get() { "1" } else { "0" }
}

fn hidden_offset(revealed: RwSignal<bool>) -> &'static str {
	if revealed.get() {
		"translateY(0)"
	} else {
		"translateY(20px)"
	}
}

#[component]
fn ProjectCardView(card: ProjectCard) -> impl IntoView {
	let ProjectCard {
		title,
		description,
		image,
		tags,
		reveal_delay,
		..
	} = card;
	let revealed = reveal_after(reveal_delay);
	let tilt = RwSignal::new(None::<String>);

	let on_mousemove = move |ev: MouseEvent| {
		let Some(el) = ev
			.current_target()
			.and_then(|t| t.dyn_into::<web_sys::Element>().ok())
		else {
			return;
		};
		let rect = el.get_bounding_client_rect();
		tilt.set(Some(card_tilt(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
			rect.width(),
			rect.height(),
		)));
	};
	let on_mouseleave = move |_: MouseEvent| tilt.set(Some(resting_tilt()));
	let transform = move || {
		tilt.get()
			.unwrap_or_else(|| hidden_offset(revealed).to_string())
	};
	let alt = title.clone();

	view! {
		<div
			class="project-card"
			class:show=move || revealed.get()
			style:opacity=hidden_opacity(revealed)
			style:transform=transform
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
		>
			<img src=image alt=alt class="project-image" />
			<div class="project-content">
				<h3 class="project-title">{title}</h3>
				<p class="project-description">{description}</p>
				<div class="project-tags">
					{tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
				</div>
			</div>
		</div>
	}
}

/// Project grid with category filter buttons.
#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
	let filter = RwSignal::new(ProjectFilter::All);

	let buttons = filter_options(&projects)
		.into_iter()
		.map(|option| {
			let label = option.label().to_string();
			let current = option.clone();
			view! {
				<button
					class="filter-btn"
					class:active=move || filter.get() == current
					on:click=move |_: MouseEvent| filter.set(option.clone())
				>
					{label}
				</button>
			}
		})
		.collect_view();

	let cards = move || {
		project_cards(&projects, &filter.get())
			.into_iter()
			.map(|card| view! { <ProjectCardView card=card /> })
			.collect_view()
	};

	view! {
		<section id="projects" class="section projects">
			<h2 class="section-title">"Projects"</h2>
			<div class="project-filters">{buttons}</div>
			<div id="projectsGrid" class="projects-grid">{cards}</div>
		</section>
	}
}

#[component]
fn SkillRowView(row: SkillRow) -> impl IntoView {
	let SkillRow {
		name,
		label,
		width_percent,
		reveal_delay,
	} = row;
	let revealed = reveal_after(reveal_delay);

	view! {
		<div
			class="skill-item"
			style:opacity=hidden_opacity(revealed)
			style:transform=move || hidden_offset(revealed)
		>
			<div class="skill-name">
				<span>{name}</span>
				<span>{label}</span>
			</div>
			<div class="skill-bar">
				<div
					class="skill-progress"
					style:width=move || {
						if revealed.get() { format!("{width_percent}%") } else { "0%".to_string() }
					}
				/>
			</div>
		</div>
	}
}

/// Skill list with animated proficiency bars.
#[component]
pub fn SkillsSection(skills: Vec<Skill>) -> impl IntoView {
	let rows = skill_rows(&skills)
		.into_iter()
		.map(|row| view! { <SkillRowView row=row /> })
		.collect_view();

	view! {
		<section id="skills" class="section skills">
			<h2 class="section-title">"Skills"</h2>
			<div id="skillsList" class="skills-list">{rows}</div>
		</section>
	}
}

#[component]
fn HighlightCardView(card: HighlightCard) -> impl IntoView {
	let revealed = reveal_after(card.reveal_delay);

	view! {
		<div
			class="highlight-card"
			style:opacity=hidden_opacity(revealed)
			style:transform=move || hidden_offset(revealed)
		>
			<div class="highlight-icon">{card.icon}</div>
			<h4>{card.title}</h4>
			<p>{card.description}</p>
		</div>
	}
}

/// About section with the highlight cards.
#[component]
pub fn HighlightsSection(highlights: Vec<Highlight>) -> impl IntoView {
	let cards = highlight_cards(&highlights)
		.into_iter()
		.map(|card| view! { <HighlightCardView card=card /> })
		.collect_view();

	view! {
		<section id="about" class="section about">
			<h2 class="section-title">"About"</h2>
			<div id="highlightsGrid" class="highlights-grid">{cards}</div>
		</section>
	}
}

#[component]
fn BlogCardView(card: BlogCard) -> impl IntoView {
	let BlogCard {
		title,
		excerpt,
		image,
		category,
		date_label,
		read_label,
		reveal_delay,
		..
	} = card;
	let revealed = reveal_after(reveal_delay);
	let alt = title.clone();

	view! {
		<div
			class="blog-card"
			class:show=move || revealed.get()
			style:opacity=hidden_opacity(revealed)
			style:transform=move || hidden_offset(revealed)
		>
			<img src=image alt=alt class="blog-image" />
			<div class="blog-content">
				<span class="blog-category">{category}</span>
				<h3 class="blog-title">{title}</h3>
				<div class="blog-meta">
					<span>{date_label}</span>
					<span>{read_label}</span>
				</div>
				<p class="blog-excerpt">{excerpt}</p>
			</div>
		</div>
	}
}

#[component]
pub fn BlogSection(posts: Vec<BlogPost>) -> impl IntoView {
	let cards = blog_cards(&posts)
		.into_iter()
		.map(|card| view! { <BlogCardView card=card /> })
		.collect_view();

	view! {
		<section id="blog" class="section blog">
			<h2 class="section-title">"Blog"</h2>
			<div id="blogGrid" class="blog-grid">{cards}</div>
		</section>
	}
}
