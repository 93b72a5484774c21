//! Slowly rotating, breathing glow centered behind the page.

/// Degrees the aura turns per frame.
const DEGREES_PER_FRAME: f64 = 0.2;

/// Animation state for the hologram aura overlay.
#[derive(Clone, Debug, Default)]
pub struct HologramAura {
	angle: f64,
}

impl HologramAura {
	/// Angle in degrees, kept in `[0, 360)`.
	pub fn angle(&self) -> f64 {
		self.angle
	}

	pub fn advance(&mut self) {
		self.angle = (self.angle + DEGREES_PER_FRAME) % 360.0;
	}

	/// Scale pulses by up to 5% around 1.0.
	pub fn scale(&self) -> f64 {
		1.0 + self.angle.to_radians().sin() * 0.05
	}

	/// Opacity between 0.18 and 0.34.
	pub fn opacity(&self) -> f64 {
		0.18 + (self.angle.to_radians().cos() + 1.0) * 0.08
	}

	/// CSS `transform` value for the overlay element.
	pub fn transform(&self) -> String {
		format!(
			"translate(-50%, -50%) rotate({}deg) scale({})",
			self.angle,
			self.scale()
		)
	}
}
