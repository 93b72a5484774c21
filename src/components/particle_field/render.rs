//! Per-frame drawing for the particle background.
//!
//! Each frame is painted in passes:
//! 1. Clear, then a translucent theme fill so the previous frame leaves trails
//! 2. Particles (gradient discs or solid dots)
//! 3. Links between every pair of particles closer than the link distance
//! 4. The scrolling hologram grid

use super::config::{FieldConfig, ParticleShape};
use super::particles::ParticleField;
use super::surface::{Fill, GradientStop, Segment, Surface};
use super::theme::{Color, Palette};

/// Gradient disc radius relative to the particle radius.
const GLOW_SCALE: f64 = 4.0;

/// Line alpha for two particles `distance` apart, or `None` when they are too
/// far apart to be joined. Falls linearly from `base` at zero distance to zero
/// at `threshold`.
pub fn link_alpha(distance: f64, threshold: f64, base: f64) -> Option<f64> {
	if distance < threshold {
		Some(base * (1.0 - distance / threshold))
	} else {
		None
	}
}

/// Renders one frame of the field onto the surface.
pub fn render<S: Surface>(field: &ParticleField, surface: &mut S, palette: &Palette) {
	let config = field.config();

	draw_background(field, surface, palette);
	draw_particles(field, surface, config, palette);
	draw_links(field, surface, config, palette);

	if config.grid {
		draw_grid(field, surface, config, palette);
	}
}

fn draw_background<S: Surface>(field: &ParticleField, surface: &mut S, palette: &Palette) {
	surface.clear(field.width(), field.height());
	surface.fill_rect(0.0, 0.0, field.width(), field.height(), palette.trail);
}

fn draw_particles<S: Surface>(
	field: &ParticleField,
	surface: &mut S,
	config: &FieldConfig,
	palette: &Palette,
) {
	for p in &field.particles {
		let color = palette.particle_color(p.alpha);
		match config.shape {
			ParticleShape::GradientDisc => {
				let stops = [
					GradientStop {
						offset: 0.0,
						color,
					},
					GradientStop {
						offset: 0.7,
						color: palette.particle_fade,
					},
					GradientStop {
						offset: 1.0,
						color: Color::rgba(0, 0, 0, 0.0),
					},
				];
				surface.fill_disc(p.x, p.y, p.radius * GLOW_SCALE, Fill::Radial(&stops));
			}
			ParticleShape::Solid => surface.fill_disc(p.x, p.y, p.radius, Fill::Solid(color)),
		}
	}
}

fn draw_links<S: Surface>(
	field: &ParticleField,
	surface: &mut S,
	config: &FieldConfig,
	palette: &Palette,
) {
	let particles = &field.particles;

	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let distance = (dx * dx + dy * dy).sqrt();

			if let Some(alpha) = link_alpha(distance, config.link_distance, config.link_alpha) {
				surface.stroke_segments(
					&[((a.x, a.y), (b.x, b.y))],
					palette.link.with_alpha(alpha),
					config.link_width,
				);
			}
		}
	}
}

fn draw_grid<S: Surface>(
	field: &ParticleField,
	surface: &mut S,
	config: &FieldConfig,
	palette: &Palette,
) {
	let spacing = config.grid_spacing;
	if spacing <= 0.0 {
		return;
	}

	let (width, offset) = (field.width(), field.grid_offset());
	let mut lines: Vec<Segment> = Vec::new();
	let mut y = -spacing;
	while y < field.height() + spacing {
		lines.push(((0.0, y + offset), (width, y + offset)));
		y += spacing;
	}

	surface.stroke_segments(&lines, palette.grid, 1.0);
}

#[cfg(test)]
mod tests {
	use super::super::particles::Particle;
	use super::super::surface::{DrawCall, RecordingSurface};
	use super::super::theme::ThemeMode;
	use super::*;

	fn particle_at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 1.0,
			alpha: 0.5,
			phase: 0.0,
		}
	}

	fn field_with(particles: Vec<Particle>, config: FieldConfig) -> ParticleField {
		let mut field = ParticleField::with_seed(config, 1000.0, 1000.0, 0);
		field.particles = particles;
		field
	}

	#[test]
	fn test_link_alpha_falls_to_zero_at_threshold() {
		assert_eq!(link_alpha(0.0, 150.0, 0.2), Some(0.2));
		assert!((link_alpha(75.0, 150.0, 0.2).unwrap() - 0.1).abs() < 1e-12);
		assert_eq!(link_alpha(150.0, 150.0, 0.2), None);
		assert_eq!(link_alpha(151.0, 150.0, 0.2), None);

		let mut previous = f64::INFINITY;
		for d in (0..150).map(f64::from) {
			let alpha = link_alpha(d, 150.0, 0.2).unwrap();
			assert!(alpha < previous);
			previous = alpha;
		}
		assert!(link_alpha(149.999, 150.0, 0.2).unwrap() < 1e-4);
	}

	#[test]
	fn test_links_drawn_only_below_threshold() {
		let field = field_with(
			vec![
				particle_at(100.0, 100.0),
				particle_at(200.0, 100.0), // 100 from the first
				particle_at(100.0, 250.0), // exactly 150 from the first
				particle_at(900.0, 900.0), // far from everything
			],
			FieldConfig::default(),
		);
		let mut surface = RecordingSurface::default();
		render(&field, &mut surface, &ThemeMode::Dark.palette());

		let links = surface.links();
		assert_eq!(links.len(), 1);
		let (segment, color) = links[0];
		assert_eq!(segment, ((100.0, 100.0), (200.0, 100.0)));
		assert!((color.a - 0.2 * (1.0 - 100.0 / 150.0)).abs() < 1e-12);
	}

	#[test]
	fn test_closer_pairs_get_stronger_lines() {
		let field = field_with(
			vec![
				particle_at(0.0, 500.0),
				particle_at(30.0, 500.0),
				particle_at(500.0, 0.0),
				particle_at(500.0, 120.0),
			],
			FieldConfig::default(),
		);
		let mut surface = RecordingSurface::default();
		render(&field, &mut surface, &ThemeMode::Light.palette());

		let links = surface.links();
		assert_eq!(links.len(), 2);
		assert!(links[0].1.a > links[1].1.a);
	}

	#[test]
	fn test_frame_pass_order() {
		let field = field_with(vec![particle_at(10.0, 10.0)], FieldConfig::default());
		let mut surface = RecordingSurface::default();
		render(&field, &mut surface, &ThemeMode::Dark.palette());

		assert_eq!(surface.calls[0], DrawCall::Clear);
		assert_eq!(surface.calls[1], DrawCall::Rect(Color::rgba(2, 6, 23, 0.6)));
		assert!(matches!(
			surface.calls[2],
			DrawCall::Disc { radius, .. } if radius == 4.0
		));
		match surface.calls.last() {
			Some(DrawCall::Stroke { segments, color }) => {
				// -45, 0, 45, ... 1035
				assert_eq!(segments.len(), 25);
				assert_eq!(*color, Color::rgba(0, 255, 255, 0.06));
			}
			other => panic!("expected grid stroke, got {:?}", other),
		}
	}

	#[test]
	fn test_solid_shape_without_grid() {
		let config = FieldConfig {
			count: super::super::config::ParticleCount::Fixed(0),
			..FieldConfig::bouncing()
		};
		let field = field_with(vec![particle_at(10.0, 10.0)], config);
		let mut surface = RecordingSurface::default();
		render(&field, &mut surface, &ThemeMode::Dark.palette());

		assert_eq!(surface.calls.len(), 3);
		assert_eq!(
			surface.calls[2],
			DrawCall::Disc {
				x: 10.0,
				y: 10.0,
				radius: 1.0,
				color: Color::rgba(0, 255, 255, 0.5),
			}
		);
	}
}
