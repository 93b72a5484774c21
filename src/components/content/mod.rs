//! Portfolio content: projects, skills, highlights and blog posts.
//!
//! Data lives in [`data`], is mapped to view models by the pure functions in
//! [`view`], and is rendered by the section components.

pub mod data;
mod sections;
pub mod view;

pub use data::{BlogPost, Content, Highlight, Project, Skill};
pub use sections::{BlogSection, HighlightsSection, ProjectsSection, SkillsSection};
pub use view::ProjectFilter;
