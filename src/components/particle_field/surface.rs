//! Drawing primitives the renderer needs, and their canvas 2D backing.

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use super::error::SurfaceError;
use super::types::Rgba;

/// Fill or stroke source.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
	Solid(Rgba),
	Linear {
		from: (f64, f64),
		to: (f64, f64),
		stops: Vec<(f64, Rgba)>,
	},
	Radial {
		center: (f64, f64),
		inner: f64,
		outer: f64,
		stops: Vec<(f64, Rgba)>,
	},
}

/// An immediate-mode 2D drawing target.
pub trait Surface {
	/// Resize the backing bitmap.
	fn set_size(&self, width: f64, height: f64);
	fn clear(&self, width: f64, height: f64);
	fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64, paint: &Paint);
	fn fill_circle(&self, x: f64, y: f64, radius: f64, paint: &Paint);
	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), width: f64, paint: &Paint);
	fn stroke_path(&self, points: &[(f64, f64)], width: f64, paint: &Paint);
	/// Empty `segments` restores solid lines.
	fn set_line_dash(&self, segments: &[f64], offset: f64);
}

/// Look up the 2D context of `canvas`.
pub fn acquire_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
	canvas
		.get_context("2d")
		.map_err(|_| SurfaceError::ContextRejected)?
		.ok_or(SurfaceError::NoContext)?
		.dyn_into::<CanvasRenderingContext2d>()
		.map_err(|_| SurfaceError::NotCanvas2d)
}

fn gradient_stops(gradient: &CanvasGradient, stops: &[(f64, Rgba)]) {
	for (offset, color) in stops {
		let _ = gradient.add_color_stop(offset.clamp(0.0, 1.0) as f32, &color.to_string());
	}
}

impl Paint {
	fn to_canvas(&self, ctx: &CanvasRenderingContext2d) -> Option<CanvasGradient> {
		match self {
			Paint::Solid(_) => None,
			Paint::Linear { from, to, stops } => {
				let gradient = ctx.create_linear_gradient(from.0, from.1, to.0, to.1);
				gradient_stops(&gradient, stops);
				Some(gradient)
			}
			Paint::Radial {
				center,
				inner,
				outer,
				stops,
			} => {
				let gradient = ctx
					.create_radial_gradient(center.0, center.1, *inner, center.0, center.1, *outer)
					.ok()?;
				gradient_stops(&gradient, stops);
				Some(gradient)
			}
		}
	}
}

fn apply_fill(ctx: &CanvasRenderingContext2d, paint: &Paint) {
	match (paint, paint.to_canvas(ctx)) {
		(Paint::Solid(color), _) => ctx.set_fill_style_str(&color.to_string()),
		#[allow(deprecated)]
		(_, Some(gradient)) => ctx.set_fill_style(&gradient),
		(_, None) => ctx.set_fill_style_str("transparent"),
	}
}

fn apply_stroke(ctx: &CanvasRenderingContext2d, paint: &Paint) {
	match (paint, paint.to_canvas(ctx)) {
		(Paint::Solid(color), _) => ctx.set_stroke_style_str(&color.to_string()),
		#[allow(deprecated)]
		(_, Some(gradient)) => ctx.set_stroke_style(&gradient),
		(_, None) => ctx.set_stroke_style_str("transparent"),
	}
}

impl Surface for CanvasRenderingContext2d {
	fn set_size(&self, width: f64, height: f64) {
		if let Some(canvas) = self.canvas() {
			canvas.set_width(width as u32);
			canvas.set_height(height as u32);
		}
	}

	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64, paint: &Paint) {
		apply_fill(self, paint);
		CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, paint: &Paint) {
		apply_fill(self, paint);
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, 2.0 * PI);
		self.fill();
	}

	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), width: f64, paint: &Paint) {
		apply_stroke(self, paint);
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}

	fn stroke_path(&self, points: &[(f64, f64)], width: f64, paint: &Paint) {
		let Some((first, rest)) = points.split_first() else {
			return;
		};
		apply_stroke(self, paint);
		self.set_line_width(width);
		self.begin_path();
		self.move_to(first.0, first.1);
		for (x, y) in rest {
			self.line_to(*x, *y);
		}
		self.stroke();
	}

	fn set_line_dash(&self, segments: &[f64], offset: f64) {
		let dash = js_sys::Array::new();
		for segment in segments {
			dash.push(&JsValue::from_f64(*segment));
		}
		let _ = CanvasRenderingContext2d::set_line_dash(self, &dash);
		self.set_line_dash_offset(offset);
	}
}
