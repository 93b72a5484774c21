//! Pure mapping from content data to the view models the sections render.
//!
//! Nothing here touches the DOM, so filtering, labels and reveal timing can be
//! tested natively.

use std::collections::HashSet;
use std::time::Duration;

use super::data::{BlogPost, Highlight, Project, Skill};

/// Stagger between consecutive cards appearing, per section.
pub const PROJECT_STAGGER: Duration = Duration::from_millis(100);
pub const SKILL_STAGGER: Duration = Duration::from_millis(100);
pub const HIGHLIGHT_STAGGER: Duration = Duration::from_millis(150);
pub const BLOG_STAGGER: Duration = Duration::from_millis(120);

/// Maximum card tilt in degrees on either axis.
const MAX_TILT: f64 = 5.0;

fn stagger(index: usize, step: Duration) -> Duration {
	step * index as u32
}

/// Which projects the grid shows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProjectFilter {
	#[default]
	All,
	Category(String),
}

impl ProjectFilter {
	pub fn matches(&self, project: &Project) -> bool {
		match self {
			Self::All => true,
			Self::Category(category) => project.category == *category,
		}
	}

	/// Button label.
	pub fn label(&self) -> &str {
		match self {
			Self::All => "All",
			Self::Category(category) => category,
		}
	}
}

/// `All` followed by each distinct category in first-seen order.
pub fn filter_options(projects: &[Project]) -> Vec<ProjectFilter> {
	let mut seen = HashSet::new();
	std::iter::once(ProjectFilter::All)
		.chain(
			projects
				.iter()
				.filter(|p| seen.insert(p.category.as_str()))
				.map(|p| ProjectFilter::Category(p.category.clone())),
		)
		.collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectCard {
	pub id: u32,
	pub title: String,
	pub description: String,
	pub image: String,
	pub tags: Vec<String>,
	/// Delay before the card fades in, counted among the visible cards.
	pub reveal_delay: Duration,
}

pub fn project_cards(projects: &[Project], filter: &ProjectFilter) -> Vec<ProjectCard> {
	projects
		.iter()
		.filter(|p| filter.matches(p))
		.enumerate()
		.map(|(i, p)| ProjectCard {
			id: p.id,
			title: p.title.clone(),
			description: p.description.clone(),
			image: p.image.clone(),
			tags: p.tags.clone(),
			reveal_delay: stagger(i, PROJECT_STAGGER),
		})
		.collect()
}

/// CSS transform tilting a card toward the pointer at `(x, y)` within a
/// `width` x `height` card.
pub fn card_tilt(x: f64, y: f64, width: f64, height: f64) -> String {
	if width <= 0.0 || height <= 0.0 {
		return resting_tilt();
	}
	let rotate_y = (x / width - 0.5) * 2.0 * MAX_TILT;
	let rotate_x = (y / height - 0.5) * -2.0 * MAX_TILT;
	format!("perspective(800px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) translateY(-6px)")
}

pub fn resting_tilt() -> String {
	"perspective(800px) rotateX(0deg) rotateY(0deg) translateY(0)".to_string()
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillRow {
	pub name: String,
	/// e.g. `"95%"`
	pub label: String,
	/// Bar fill once revealed, in `[0, 100]`.
	pub width_percent: f64,
	pub reveal_delay: Duration,
}

pub fn skill_rows(skills: &[Skill]) -> Vec<SkillRow> {
	skills
		.iter()
		.enumerate()
		.map(|(i, s)| {
			let level = s.level.min(100);
			SkillRow {
				name: s.name.clone(),
				label: format!("{level}%"),
				width_percent: f64::from(level),
				reveal_delay: stagger(i, SKILL_STAGGER),
			}
		})
		.collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct HighlightCard {
	pub icon: String,
	pub title: String,
	pub description: String,
	pub reveal_delay: Duration,
}

pub fn highlight_cards(highlights: &[Highlight]) -> Vec<HighlightCard> {
	highlights
		.iter()
		.enumerate()
		.map(|(i, h)| HighlightCard {
			icon: h.icon.clone(),
			title: h.title.clone(),
			description: h.description.clone(),
			reveal_delay: stagger(i, HIGHLIGHT_STAGGER),
		})
		.collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlogCard {
	pub id: u32,
	pub title: String,
	pub excerpt: String,
	pub image: String,
	pub category: String,
	pub date_label: String,
	pub read_label: String,
	pub reveal_delay: Duration,
}

pub fn blog_cards(posts: &[BlogPost]) -> Vec<BlogCard> {
	posts
		.iter()
		.enumerate()
		.map(|(i, p)| BlogCard {
			id: p.id,
			title: p.title.clone(),
			excerpt: p.excerpt.clone(),
			image: p.image.clone(),
			category: p.category.clone(),
			date_label: format!("📅 {}", p.date),
			read_label: format!("⏱️ {} read", p.read_time),
			reveal_delay: stagger(i, BLOG_STAGGER),
		})
		.collect()
}
