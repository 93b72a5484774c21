//! Tunable parameters for the particle background.
//!
//! Defaults reproduce the hologram look: a fixed set of flickering gradient
//! discs that wrap around the edges, joined by fading lines, over a slowly
//! scrolling grid. Every field can be overridden from the site config JSON.
//!
//! # Policies
//!
//! - [`BoundaryPolicy`]: what a particle does when it leaves the surface.
//! - [`ParticleCount`]: how many particles a surface of a given size holds.
//! - [`ParticleShape`]: how a single particle is painted.

use serde::Deserialize;

/// What happens when a particle crosses a surface edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
	/// Reappear at the opposite edge.
	#[default]
	Wrap,
	/// Bounce: negate the velocity component and clamp back inside.
	Reflect,
}

/// How the particle count is derived from the surface.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleCount {
	/// Same count regardless of surface size.
	Fixed(usize),
	/// One particle per `n` square units of surface area.
	Density(f64),
}

impl Default for ParticleCount {
	fn default() -> Self {
		Self::Fixed(90)
	}
}

impl ParticleCount {
	/// Density constant used when the density policy is selected without a value.
	pub const DEFAULT_DENSITY: f64 = 15_000.0;

	/// Upper bound on any derived count. Links are O(n²), so a field past
	/// this size could not keep up with the frame rate anyway.
	pub const MAX: usize = 2_000;

	/// Number of particles for a `width` x `height` surface, at most [`Self::MAX`].
	pub fn for_surface(self, width: f64, height: f64) -> usize {
		match self {
			Self::Fixed(n) => n.min(Self::MAX),
			Self::Density(d) => {
				let area = width.max(0.0) * height.max(0.0);
				if d.is_nan() || d <= 0.0 || !area.is_finite() {
					return 0;
				}
				let count = (area / d).floor();
				if count.is_finite() {
					(count as usize).min(Self::MAX)
				} else {
					Self::MAX
				}
			}
		}
	}
}

/// How a particle is painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleShape {
	/// Soft radial gradient, four times the particle radius.
	#[default]
	GradientDisc,
	/// Solid filled circle at the particle radius.
	Solid,
}

/// Complete configuration for a particle field.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	pub count: ParticleCount,
	pub boundary: BoundaryPolicy,
	pub shape: ParticleShape,
	/// Radius range `[min, max)` sampled at creation.
	pub radius: (f64, f64),
	/// Each velocity component is sampled from `[-max_speed, max_speed)`.
	pub max_speed: f64,
	/// Initial alpha range `[min, max)`.
	pub alpha: (f64, f64),
	/// Enables random alpha drift each step.
	pub flicker: bool,
	/// Largest alpha change per step in either direction.
	pub flicker_step: f64,
	/// Alpha is clamped to this range while flickering.
	pub alpha_bounds: (f64, f64),
	/// Amplitude of the vertical sine wave added each step (0 disables it).
	pub wave_amplitude: f64,
	/// Particles closer than this are joined by a line.
	pub link_distance: f64,
	/// Line alpha at zero distance.
	pub link_alpha: f64,
	pub link_width: f64,
	/// Draws the scrolling hologram grid.
	pub grid: bool,
	pub grid_spacing: f64,
	/// Grid offset advance per step.
	pub grid_speed: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			count: ParticleCount::default(),
			boundary: BoundaryPolicy::default(),
			shape: ParticleShape::default(),
			radius: (0.6, 2.8),
			max_speed: 0.3,
			alpha: (0.2, 0.6),
			flicker: true,
			flicker_step: 0.01,
			alpha_bounds: (0.1, 0.9),
			wave_amplitude: 0.08,
			link_distance: 150.0,
			link_alpha: 0.2,
			link_width: 1.0,
			grid: true,
			grid_spacing: 45.0,
			grid_speed: 0.7,
		}
	}
}

/// Ordered `(min, max)` pair of finite numbers.
fn ordered((min, max): (f64, f64)) -> bool {
	min.is_finite() && max.is_finite() && min <= max
}

impl FieldConfig {
	/// Checks the values the animation relies on. Returns a description of
	/// the first bad field.
	pub fn validate(&self) -> Result<(), String> {
		if let ParticleCount::Density(d) = self.count {
			if !(d.is_finite() && d >= 1.0) {
				return Err(format!("count.density must be at least 1, got {d}"));
			}
		}
		if !ordered(self.radius) || self.radius.0 < 0.0 {
			return Err(format!(
				"radius must be an ordered non-negative range, got {:?}",
				self.radius
			));
		}
		if !ordered(self.alpha) {
			return Err(format!("alpha must be an ordered range, got {:?}", self.alpha));
		}
		if !ordered(self.alpha_bounds) {
			return Err(format!(
				"alpha_bounds must be an ordered range, got {:?}",
				self.alpha_bounds
			));
		}
		if !(self.link_distance.is_finite() && self.link_distance > 0.0) {
			return Err(format!("link_distance must be positive, got {}", self.link_distance));
		}
		if !(self.max_speed.is_finite() && self.flicker_step.is_finite()) {
			return Err("max_speed and flicker_step must be finite".to_string());
		}
		if self.grid && !(self.grid_spacing.is_finite() && self.grid_spacing > 0.0) {
			return Err(format!("grid_spacing must be positive, got {}", self.grid_spacing));
		}
		Ok(())
	}

	/// The simpler look: solid dots that bounce off the edges, with the
	/// count following the surface area and no flicker, wave or grid.
	pub fn bouncing() -> Self {
		Self {
			count: ParticleCount::Density(ParticleCount::DEFAULT_DENSITY),
			boundary: BoundaryPolicy::Reflect,
			shape: ParticleShape::Solid,
			radius: (1.0, 3.0),
			max_speed: 0.5,
			alpha: (0.5, 0.5),
			flicker: false,
			wave_amplitude: 0.0,
			link_distance: 120.0,
			link_alpha: 0.15,
			grid: false,
			..Self::default()
		}
	}
}
