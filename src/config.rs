//! Site configuration embedded in the host page.
//!
//! The page may carry a `<script id="site-config" type="application/json">`
//! element. Any field it leaves out keeps its default, and a missing or broken
//! element falls back to the defaults entirely.

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::components::content::Content;
use crate::components::particle_field::FieldConfig;

/// Id of the script element holding the JSON config.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Deployed contact backend.
pub const DEFAULT_BACKEND_URL: &str =
	"https://portfolio-backend-1tv6a22so-mujahid137s-projects.vercel.app/";

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("invalid site config JSON: {0}")]
	Json(#[from] serde_json::Error),
	#[error("backend_url must be an http(s) URL, got {0:?}")]
	BackendUrl(String),
	#[error("invalid particle settings: {0}")]
	Particles(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	/// Base URL of the contact backend; `/api/contact` is appended.
	pub backend_url: String,
	/// Name shown in the navbar and hero.
	pub owner: String,
	pub tagline: String,
	pub particles: FieldConfig,
	pub content: Content,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			backend_url: DEFAULT_BACKEND_URL.to_string(),
			owner: "Mujahid".to_string(),
			tagline: "Creative developer building futuristic web experiences".to_string(),
			particles: FieldConfig::default(),
			content: Content::default(),
		}
	}
}

impl SiteConfig {
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		let config: Self = serde_json::from_str(json)?;
		let url = &config.backend_url;
		if !(url.starts_with("https://") || url.starts_with("http://")) {
			return Err(ConfigError::BackendUrl(config.backend_url));
		}
		config.particles.validate().map_err(ConfigError::Particles)?;
		Ok(config)
	}

	/// Reads the config element from the document, falling back to defaults.
	pub fn load() -> Self {
		let Some(json) = config_text() else {
			info!("portfolio: no #{} element, using default config", CONFIG_ELEMENT_ID);
			return Self::default();
		};

		match Self::from_json(&json) {
			Ok(config) => {
				info!(
					"portfolio: loaded site config ({} projects, {} posts)",
					config.content.projects.len(),
					config.content.blog.len()
				);
				config
			}
			Err(e) => {
				warn!("portfolio: {}, using defaults", e);
				Self::default()
			}
		}
	}
}

fn config_text() -> Option<String> {
	let element = web_sys::window()?
		.document()?
		.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::BoundaryPolicy;

	#[test]
	fn test_empty_object_is_default() {
		assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
	}

	#[test]
	fn test_partial_override() {
		let config = SiteConfig::from_json(
			r#"{
				"backend_url": "http://localhost:3000",
				"particles": {"boundary": "reflect", "link_distance": 120.0},
				"content": {"skills": [{"name": "Rust", "level": 90}]}
			}"#,
		)
		.unwrap();

		assert_eq!(config.backend_url, "http://localhost:3000");
		assert_eq!(config.particles.boundary, BoundaryPolicy::Reflect);
		assert_eq!(config.particles.link_distance, 120.0);
		assert_eq!(config.content.skills.len(), 1);
		// Sections left out keep their defaults
		assert_eq!(config.content.projects.len(), 6);
		assert_eq!(config.owner, "Mujahid");
	}

	#[test]
	fn test_rejects_bad_input() {
		assert!(matches!(
			SiteConfig::from_json("{not json"),
			Err(ConfigError::Json(_))
		));
		assert!(matches!(
			SiteConfig::from_json(r#"{"backend_url": "ftp://nope"}"#),
			Err(ConfigError::BackendUrl(_))
		));
	}

	#[test]
	fn test_rejects_particle_settings_that_would_panic() {
		assert!(matches!(
			SiteConfig::from_json(r#"{"particles": {"alpha_bounds": [0.9, 0.1]}}"#),
			Err(ConfigError::Particles(_))
		));
		assert!(matches!(
			SiteConfig::from_json(r#"{"particles": {"count": {"density": 1e-300}}}"#),
			Err(ConfigError::Particles(_))
		));
		assert!(matches!(
			SiteConfig::from_json(r#"{"particles": {"radius": [2.8, 0.6]}}"#),
			Err(ConfigError::Particles(_))
		));
	}
}
