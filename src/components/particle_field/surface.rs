//! Drawing-surface seam between the renderer and the browser canvas.
//!
//! The renderer only needs a handful of primitives, so it draws through the
//! [`Surface`] trait. [`CanvasSurface`] forwards to a 2D canvas context; tests
//! record the calls instead.

use std::f64::consts::TAU;

use log::debug;
use web_sys::CanvasRenderingContext2d;

use super::theme::Color;

/// One color stop of a radial gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
	pub offset: f64,
	pub color: Color,
}

/// How a disc is filled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill<'a> {
	Solid(Color),
	/// Radial gradient from the disc center (offset 0) to its rim (offset 1).
	Radial(&'a [GradientStop]),
}

/// A straight segment from one point to another.
pub type Segment = ((f64, f64), (f64, f64));

/// Primitives the particle renderer draws with.
pub trait Surface {
	/// Makes the whole surface transparent.
	fn clear(&mut self, width: f64, height: f64);

	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);

	fn fill_disc(&mut self, x: f64, y: f64, radius: f64, fill: Fill<'_>);

	/// Strokes all segments as a single path.
	fn stroke_segments(&mut self, segments: &[Segment], color: Color, width: f64);
}

/// [`Surface`] backed by a browser `CanvasRenderingContext2d`.
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn new(ctx: CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}
}

impl Surface for CanvasSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill_rect(x, y, width, height);
	}

	fn fill_disc(&mut self, x: f64, y: f64, radius: f64, fill: Fill<'_>) {
		match fill {
			Fill::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
			Fill::Radial(stops) => {
				let gradient = match self.ctx.create_radial_gradient(x, y, 0.0, x, y, radius) {
					Ok(gradient) => gradient,
					Err(e) => {
						debug!("portfolio: skipping particle, gradient rejected: {:?}", e);
						return;
					}
				};
				for stop in stops {
					let _ = gradient.add_color_stop(stop.offset as f32, &stop.color.to_css());
				}
				#[allow(deprecated)]
				self.ctx.set_fill_style(&gradient);
			}
		}

		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
		self.ctx.fill();
	}

	fn stroke_segments(&mut self, segments: &[Segment], color: Color, width: f64) {
		self.ctx.begin_path();
		for &((x1, y1), (x2, y2)) in segments {
			self.ctx.move_to(x1, y1);
			self.ctx.line_to(x2, y2);
		}
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.stroke();
	}
}

/// Records draw calls so rendering can be checked without a browser.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
	pub calls: Vec<DrawCall>,
}

#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
	Clear,
	Rect(Color),
	Disc {
		x: f64,
		y: f64,
		radius: f64,
		color: Color,
	},
	Stroke {
		segments: Vec<Segment>,
		color: Color,
	},
}

#[cfg(test)]
impl RecordingSurface {
	pub fn trail_colors(&self) -> Vec<Color> {
		self.calls
			.iter()
			.filter_map(|c| match c {
				DrawCall::Rect(color) => Some(*color),
				_ => None,
			})
			.collect()
	}

	pub fn disc_colors(&self) -> Vec<Color> {
		self.calls
			.iter()
			.filter_map(|c| match c {
				DrawCall::Disc { color, .. } => Some(*color),
				_ => None,
			})
			.collect()
	}

	/// Strokes made of exactly one segment (particle links).
	pub fn links(&self) -> Vec<(Segment, Color)> {
		self.calls
			.iter()
			.filter_map(|c| match c {
				DrawCall::Stroke { segments, color } if segments.len() == 1 => {
					Some((segments[0], *color))
				}
				_ => None,
			})
			.collect()
	}
}

#[cfg(test)]
impl Surface for RecordingSurface {
	fn clear(&mut self, _width: f64, _height: f64) {
		self.calls.push(DrawCall::Clear);
	}

	fn fill_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64, color: Color) {
		self.calls.push(DrawCall::Rect(color));
	}

	fn fill_disc(&mut self, x: f64, y: f64, radius: f64, fill: Fill<'_>) {
		// The first stop carries the particle color.
		let color = match fill {
			Fill::Solid(color) => color,
			Fill::Radial(stops) => stops
				.first()
				.map(|s| s.color)
				.unwrap_or(Color::rgba(0, 0, 0, 0.0)),
		};
		self.calls.push(DrawCall::Disc {
			x,
			y,
			radius,
			color,
		});
	}

	fn stroke_segments(&mut self, segments: &[Segment], color: Color, _width: f64) {
		self.calls.push(DrawCall::Stroke {
			segments: segments.to_vec(),
			color,
		});
	}
}
