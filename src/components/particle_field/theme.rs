//! Colors and per-theme palettes for the particle background.

use std::fmt;
use std::str::FromStr;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Always emits `rgba()` notation, alpha included.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Two-valued display mode. Only affects colors, never particle motion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
	#[default]
	Dark,
	Light,
}

impl ThemeMode {
	/// Value used for the `data-theme` attribute and local storage.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Dark => "dark",
			Self::Light => "light",
		}
	}

	pub fn toggled(self) -> Self {
		match self {
			Self::Dark => Self::Light,
			Self::Light => Self::Dark,
		}
	}

	/// Parses a stored value, falling back to dark for anything unrecognized.
	pub fn from_stored(value: Option<&str>) -> Self {
		value.and_then(|v| v.parse().ok()).unwrap_or_default()
	}

	pub fn palette(self) -> Palette {
		match self {
			Self::Dark => Palette::dark(),
			Self::Light => Palette::light(),
		}
	}
}

impl fmt::Display for ThemeMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ThemeMode {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"dark" => Ok(Self::Dark),
			"light" => Ok(Self::Light),
			_ => Err(()),
		}
	}
}

/// Colors used for one frame of the particle background.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
	/// Translucent fill painted over the previous frame (motion trails)
	pub trail: Color,
	/// Particle core color; alpha comes from the particle itself
	pub particle: Color,
	/// Multiplier applied to each particle's alpha
	pub particle_alpha_scale: f64,
	/// Middle stop of the gradient disc, fully transparent
	pub particle_fade: Color,
	/// Connective line color; alpha comes from distance
	pub link: Color,
	/// Scrolling hologram grid lines
	pub grid: Color,
}

impl Palette {
	pub fn dark() -> Self {
		Self {
			trail: Color::rgba(2, 6, 23, 0.6),
			particle: Color::rgb(0, 255, 255),
			particle_alpha_scale: 1.0,
			particle_fade: Color::rgba(0, 255, 255, 0.0),
			link: Color::rgb(0, 255, 255),
			grid: Color::rgba(0, 255, 255, 0.06),
		}
	}

	pub fn light() -> Self {
		Self {
			trail: Color::rgba(241, 245, 249, 0.5),
			particle: Color::rgb(0, 180, 255),
			particle_alpha_scale: 0.8,
			particle_fade: Color::rgba(0, 255, 255, 0.0),
			link: Color::rgb(0, 255, 255),
			grid: Color::rgba(0, 150, 255, 0.05),
		}
	}

	/// Particle color at the given particle alpha.
	pub fn particle_color(&self, alpha: f64) -> Color {
		self.particle.with_alpha(alpha * self.particle_alpha_scale)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_theme_mode_round_trip_through_storage_value() {
		assert_eq!(ThemeMode::from_stored(Some("light")), ThemeMode::Light);
		assert_eq!(ThemeMode::from_stored(Some("dark")), ThemeMode::Dark);
		assert_eq!(ThemeMode::from_stored(Some("sepia")), ThemeMode::Dark);
		assert_eq!(ThemeMode::from_stored(None), ThemeMode::Dark);
		assert_eq!(ThemeMode::Light.to_string(), "light");
	}

	#[test]
	fn test_toggle_flips_mode() {
		assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
		assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
	}

	#[test]
	fn test_light_palette_dims_particles() {
		let dark = ThemeMode::Dark.palette();
		let light = ThemeMode::Light.palette();
		assert_eq!(dark.particle_color(0.5).a, 0.5);
		assert!((light.particle_color(0.5).a - 0.4).abs() < 1e-9);
		assert_ne!(dark.trail, light.trail);
	}

	#[test]
	fn test_color_css() {
		assert_eq!(Color::rgba(2, 6, 23, 0.6).to_css(), "rgba(2, 6, 23, 0.6)");
		assert_eq!(Color::rgb(0, 255, 255).to_css(), "rgba(0, 255, 255, 1)");
	}
}
