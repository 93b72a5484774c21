//! Particle state and per-step motion.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::config::{BoundaryPolicy, FieldConfig};
use super::render;
use super::surface::Surface;
use super::theme::ThemeMode;

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub alpha: f64,
	pub phase: f64, // Offsets the vertical wave
}

/// Owns the particle set for one drawing surface.
///
/// The whole set is created at construction and replaced wholesale by
/// [`ParticleField::resize`]; particles are never added or removed in between.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	config: FieldConfig,
	width: f64,
	height: f64,
	grid_offset: f64,
	rng: SmallRng,
}

/// Uniform sample from `[min, max)`, or `min` when the range is empty.
fn sample(rng: &mut SmallRng, (min, max): (f64, f64)) -> f64 {
	if max > min { rng.gen_range(min..max) } else { min }
}

impl ParticleField {
	pub fn new(config: FieldConfig, width: f64, height: f64) -> Self {
		Self::from_rng(config, width, height, SmallRng::from_entropy())
	}

	/// Deterministic field, identical for identical seeds and sizes.
	pub fn with_seed(config: FieldConfig, width: f64, height: f64, seed: u64) -> Self {
		Self::from_rng(config, width, height, SmallRng::seed_from_u64(seed))
	}

	fn from_rng(config: FieldConfig, width: f64, height: f64, rng: SmallRng) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			config,
			width: width.max(0.0),
			height: height.max(0.0),
			grid_offset: 0.0,
			rng,
		};
		field.seed_particles();
		field
	}

	fn seed_particles(&mut self) {
		let count = self.config.count.for_surface(self.width, self.height);
		let speed = self.config.max_speed.abs();
		let mut particles = Vec::with_capacity(count);

		for _ in 0..count {
			let rng = &mut self.rng;
			particles.push(Particle {
				x: sample(rng, (0.0, self.width)),
				y: sample(rng, (0.0, self.height)),
				vx: sample(rng, (-speed, speed)),
				vy: sample(rng, (-speed, speed)),
				radius: sample(rng, self.config.radius),
				alpha: sample(rng, self.config.alpha),
				phase: sample(rng, (0.0, std::f64::consts::TAU)),
			});
		}

		self.particles = particles;
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	/// Current vertical shift of the hologram grid, in `[0, spacing]`.
	pub fn grid_offset(&self) -> f64 {
		self.grid_offset
	}

	/// Discards every particle and seeds a fresh set for the new bounds.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width.max(0.0);
		self.height = height.max(0.0);
		self.seed_particles();
	}

	/// Advances every particle by one frame. `time` is the host clock in
	/// seconds and only drives the vertical wave.
	pub fn step(&mut self, time: f64) {
		let (w, h) = (self.width, self.height);
		let FieldConfig {
			boundary,
			wave_amplitude,
			flicker,
			flicker_step,
			alpha_bounds,
			..
		} = self.config;

		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;
			if wave_amplitude != 0.0 {
				p.y += (p.phase + time).sin() * wave_amplitude;
			}

			match boundary {
				BoundaryPolicy::Wrap => {
					if p.x > w {
						p.x = 0.0;
					} else if p.x < 0.0 {
						p.x = w;
					}
					if p.y > h {
						p.y = 0.0;
					} else if p.y < 0.0 {
						p.y = h;
					}
				}
				BoundaryPolicy::Reflect => {
					if p.x < 0.0 {
						p.x = 0.0;
						p.vx = p.vx.abs();
					} else if p.x > w {
						p.x = w;
						p.vx = -p.vx.abs();
					}
					if p.y < 0.0 {
						p.y = 0.0;
						p.vy = p.vy.abs();
					} else if p.y > h {
						p.y = h;
						p.vy = -p.vy.abs();
					}
				}
			}

			if flicker {
				p.alpha += sample(&mut self.rng, (-flicker_step, flicker_step));
				// Unordered bounds must not panic
				p.alpha = p.alpha.max(alpha_bounds.0).min(alpha_bounds.1);
			}
		}

		if self.config.grid {
			self.grid_offset += self.config.grid_speed;
			if self.grid_offset > self.config.grid_spacing {
				self.grid_offset = 0.0;
			}
		}
	}

	/// One animation frame: advance, then draw with the palette for `mode`.
	pub fn tick<S: Surface>(&mut self, surface: &mut S, mode: ThemeMode, time: f64) {
		self.step(time);
		render::render(self, surface, &mode.palette());
	}
}

#[cfg(test)]
mod tests {
	use super::super::config::ParticleCount;
	use super::super::surface::RecordingSurface;
	use super::*;

	fn assert_in_bounds(field: &ParticleField) {
		for p in &field.particles {
			assert!(
				(0.0..=field.width()).contains(&p.x) && (0.0..=field.height()).contains(&p.y),
				"particle escaped: ({}, {}) in {}x{}",
				p.x,
				p.y,
				field.width(),
				field.height()
			);
		}
	}

	#[test]
	fn test_initial_particles_follow_config_ranges() {
		let field = ParticleField::with_seed(FieldConfig::default(), 800.0, 600.0, 7);
		assert_eq!(field.particles.len(), 90);
		for p in &field.particles {
			assert!((0.6..2.8).contains(&p.radius));
			assert!((-0.3..0.3).contains(&p.vx));
			assert!((-0.3..0.3).contains(&p.vy));
			assert!((0.2..0.6).contains(&p.alpha));
		}
		assert_in_bounds(&field);
	}

	#[test]
	fn test_wrap_keeps_particles_in_bounds() {
		let config = FieldConfig {
			max_speed: 25.0,
			..FieldConfig::default()
		};
		let mut field = ParticleField::with_seed(config, 320.0, 200.0, 1);
		for frame in 0..2_000 {
			field.step(frame as f64 / 60.0);
			assert_in_bounds(&field);
		}
	}

	#[test]
	fn test_reflect_keeps_particles_in_bounds() {
		let config = FieldConfig {
			max_speed: 25.0,
			..FieldConfig::bouncing()
		};
		let mut field = ParticleField::with_seed(config, 640.0, 480.0, 2);
		assert!(!field.particles.is_empty());
		for frame in 0..2_000 {
			field.step(frame as f64 / 60.0);
			assert_in_bounds(&field);
		}
	}

	#[test]
	fn test_reflect_reverses_velocity_at_edge() {
		let mut field = ParticleField::with_seed(FieldConfig::bouncing(), 100.0, 100.0, 3);
		field.particles = vec![Particle {
			x: 99.5,
			y: 50.0,
			vx: 1.0,
			vy: 0.0,
			radius: 1.0,
			alpha: 0.5,
			phase: 0.0,
		}];
		field.step(0.0);
		assert_eq!(field.particles[0].x, 100.0);
		assert_eq!(field.particles[0].vx, -1.0);
	}

	#[test]
	fn test_wrap_moves_to_opposite_edge() {
		let config = FieldConfig {
			wave_amplitude: 0.0,
			..FieldConfig::default()
		};
		let mut field = ParticleField::with_seed(config, 100.0, 100.0, 3);
		field.particles = vec![Particle {
			x: 99.9,
			y: 0.1,
			vx: 0.2,
			vy: -0.2,
			radius: 1.0,
			alpha: 0.5,
			phase: 0.0,
		}];
		field.step(0.0);
		assert_eq!(field.particles[0].x, 0.0);
		assert_eq!(field.particles[0].y, 100.0);
	}

	#[test]
	fn test_empty_surface_stays_in_bounds() {
		let mut field = ParticleField::with_seed(FieldConfig::default(), 0.0, 0.0, 4);
		assert_eq!(field.particles.len(), 90);
		for frame in 0..50 {
			field.step(frame as f64);
		}
		assert_in_bounds(&field);

		let empty = ParticleField::with_seed(FieldConfig::bouncing(), 0.0, 0.0, 4);
		assert!(empty.particles.is_empty());
	}

	#[test]
	fn test_flicker_stays_clamped() {
		let config = FieldConfig {
			flicker_step: 0.5,
			..FieldConfig::default()
		};
		let mut field = ParticleField::with_seed(config, 500.0, 500.0, 5);
		for frame in 0..500 {
			field.step(frame as f64);
			for p in &field.particles {
				assert!((0.1..=0.9).contains(&p.alpha));
			}
		}
	}

	#[test]
	fn test_unusable_config_does_not_panic() {
		let reversed = FieldConfig {
			alpha_bounds: (0.9, 0.1),
			..FieldConfig::default()
		};
		let mut field = ParticleField::with_seed(reversed, 200.0, 200.0, 9);
		for frame in 0..20 {
			field.step(frame as f64);
		}

		let dense = FieldConfig {
			count: ParticleCount::Density(1e-300),
			..FieldConfig::default()
		};
		let field = ParticleField::with_seed(dense, 1920.0, 1080.0, 9);
		assert_eq!(field.particles.len(), ParticleCount::MAX);
	}

	#[test]
	fn test_resize_replaces_whole_set() {
		let config = FieldConfig {
			count: ParticleCount::Density(10_000.0),
			..FieldConfig::default()
		};
		let mut field = ParticleField::with_seed(config, 1000.0, 1000.0, 6);
		assert_eq!(field.particles.len(), 100);

		field.resize(400.0, 250.0);
		assert_eq!(field.particles.len(), 10);
		assert_eq!((field.width(), field.height()), (400.0, 250.0));
		assert_in_bounds(&field);

		let mut fixed = ParticleField::with_seed(FieldConfig::default(), 1000.0, 1000.0, 6);
		fixed.resize(10.0, 10.0);
		assert_eq!(fixed.particles.len(), 90);
		assert_in_bounds(&fixed);
	}

	#[test]
	fn test_grid_offset_wraps_at_spacing() {
		let mut field = ParticleField::with_seed(FieldConfig::default(), 100.0, 100.0, 8);
		let mut wrapped = false;
		for frame in 0..200 {
			field.step(frame as f64);
			assert!((0.0..=45.0).contains(&field.grid_offset()));
			wrapped |= field.grid_offset() == 0.0;
		}
		assert!(wrapped);
	}

	#[test]
	fn test_same_seed_same_field() {
		let a = ParticleField::with_seed(FieldConfig::default(), 300.0, 300.0, 42);
		let b = ParticleField::with_seed(FieldConfig::default(), 300.0, 300.0, 42);
		assert_eq!(a.particles, b.particles);
	}

	#[test]
	fn test_theme_changes_colors_not_motion() {
		let mut dark = ParticleField::with_seed(FieldConfig::default(), 400.0, 300.0, 9);
		let mut light = ParticleField::with_seed(FieldConfig::default(), 400.0, 300.0, 9);
		let (mut dark_surface, mut light_surface) =
			(RecordingSurface::default(), RecordingSurface::default());

		dark.tick(&mut dark_surface, ThemeMode::Dark, 1.0);
		light.tick(&mut light_surface, ThemeMode::Light, 1.0);

		assert_eq!(dark.particles, light.particles);
		assert_ne!(dark_surface.trail_colors(), light_surface.trail_colors());
		assert_ne!(dark_surface.disc_colors(), light_surface.disc_colors());
	}
}
