//! Static page content.

use serde::Deserialize;

/// A portfolio project card.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
	pub id: u32,
	pub title: String,
	pub description: String,
	pub image: String,
	pub tags: Vec<String>,
	/// Filter bucket; matched exactly by the project filter buttons.
	pub category: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Skill {
	pub name: String,
	/// Proficiency in percent.
	pub level: u8,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Highlight {
	pub title: String,
	pub description: String,
	pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BlogPost {
	pub id: u32,
	pub title: String,
	pub excerpt: String,
	pub image: String,
	pub category: String,
	pub date: String,
	pub read_time: String,
}

/// Everything rendered into the content sections.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Content {
	pub projects: Vec<Project>,
	pub skills: Vec<Skill>,
	pub highlights: Vec<Highlight>,
	pub blog: Vec<BlogPost>,
}

fn project(
	id: u32,
	title: &str,
	description: &str,
	image: &str,
	tags: &[&str],
	category: &str,
) -> Project {
	Project {
		id,
		title: title.into(),
		description: description.into(),
		image: image.into(),
		tags: tags.iter().map(|t| t.to_string()).collect(),
		category: category.into(),
	}
}

fn skill(name: &str, level: u8) -> Skill {
	Skill {
		name: name.into(),
		level,
	}
}

fn highlight(title: &str, description: &str, icon: &str) -> Highlight {
	Highlight {
		title: title.into(),
		description: description.into(),
		icon: icon.into(),
	}
}

impl Default for Content {
	fn default() -> Self {
		Self {
			projects: vec![
				project(
					1,
					"Neural Canvas",
					"AI-powered creative platform that transforms text prompts into stunning digital artwork.",
					"https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800&h=500&fit=crop",
					&["React", "Python", "TensorFlow"],
					"React",
				),
				project(
					2,
					"Quantum Dashboard",
					"Real-time analytics dashboard with 3D data visualization and millisecond precision.",
					"https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=500&fit=crop",
					&["TypeScript", "Three.js", "Node.js"],
					"TypeScript",
				),
				project(
					3,
					"Cyber Commerce",
					"Next-generation e-commerce platform with AR previews and cryptocurrency payments.",
					"https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=800&h=500&fit=crop",
					&["Next.js", "Stripe", "PostgreSQL"],
					"React",
				),
				project(
					4,
					"Synth Wave Radio",
					"Immersive music streaming platform with spatial audio and real-time visualizations.",
					"https://images.unsplash.com/photo-1614680376573-df3480f0c6ff?w=800&h=500&fit=crop",
					&["React Native", "Web Audio API"],
					"React",
				),
				project(
					5,
					"Code Forge",
					"Collaborative code editor with real-time pair programming and AI code completion.",
					"https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=800&h=500&fit=crop",
					&["React", "TypeScript", "WebSocket"],
					"TypeScript",
				),
				project(
					6,
					"Stellar Maps",
					"Interactive 3D space exploration app with real-time astronomical data.",
					"https://images.unsplash.com/photo-1462331940025-496dfbfc7564?w=800&h=500&fit=crop",
					&["Three.js", "WebGL", "Python"],
					"Python",
				),
			],
			skills: vec![
				skill("React / Next.js", 95),
				skill("TypeScript", 90),
				skill("Node.js", 88),
				skill("Python", 82),
				skill("Three.js / WebGL", 78),
				skill("UI/UX Design", 85),
			],
			highlights: vec![
				highlight("Clean Code", "Writing maintainable, scalable code", "💻"),
				highlight("Creative Design", "Crafting beautiful interfaces", "🎨"),
				highlight("Performance", "Optimizing for speed and efficiency", "⚡"),
				highlight("Collaboration", "Working effectively with teams", "🤝"),
			],
			blog: vec![
				BlogPost {
					id: 1,
					title: "Building Futuristic UIs with Glass Morphism".into(),
					excerpt: "Explore the techniques behind creating stunning glass morphism effects."
						.into(),
					image: "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=800&h=500&fit=crop".into(),
					category: "Design".into(),
					date: "Nov 25, 2024".into(),
					read_time: "5 min".into(),
				},
				BlogPost {
					id: 2,
					title: "The Power of Framer Motion in React".into(),
					excerpt: "Learn how to create smooth animations using Framer Motion.".into(),
					image: "https://images.unsplash.com/photo-1555099962-4199c345e5dd?w=800&h=500&fit=crop".into(),
					category: "Development".into(),
					date: "Nov 20, 2024".into(),
					read_time: "8 min".into(),
				},
				BlogPost {
					id: 3,
					title: "Optimizing Web Performance in 2024".into(),
					excerpt: "A comprehensive guide to making your websites lightning fast.".into(),
					image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=500&fit=crop".into(),
					category: "Performance".into(),
					date: "Nov 15, 2024".into(),
					read_time: "10 min".into(),
				},
			],
		}
	}
}
