use std::collections::VecDeque;
use std::fmt;

/// Number of past positions kept for entities with a trail.
pub const TRAIL_LEN: usize = 8;

/// An RGBA color with a floating point alpha channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity, `0.0..=1.0`.
	pub a: f64,
}

impl Rgba {
	/// Opaque white.
	pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
	/// Fully transparent black.
	pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

	/// Color from its channels and alpha.
	pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self::new(r, g, b, 1.0)
	}

	/// Same color with its alpha multiplied by `factor`.
	pub fn with_alpha(self, factor: f64) -> Self {
		Self {
			a: (self.a * factor).clamp(0.0, 1.0),
			..self
		}
	}
}

impl fmt::Display for Rgba {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Pixel dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
	pub width: f64,
	pub height: f64,
}

impl Bounds {
	/// Negative and non-finite dimensions collapse to zero.
	pub fn new(width: f64, height: f64) -> Self {
		let sane = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
		Self {
			width: sane(width),
			height: sane(height),
		}
	}

	pub fn area(&self) -> f64 {
		self.width * self.height
	}

	pub fn is_empty(&self) -> bool {
		self.width <= 0.0 || self.height <= 0.0
	}

	#[cfg(test)]
	pub fn contains(&self, x: f64, y: f64) -> bool {
		(0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
	}
}

/// Radius oscillation applied at render time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
	pub amplitude: f64,
	pub speed: f64,
}

/// Opacity oscillation between two bounds. `step` carries the direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Twinkle {
	pub low: f64,
	pub high: f64,
	pub step: f64,
}

/// Recent positions of an entity, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trail {
	points: VecDeque<(f64, f64)>,
}

impl Trail {
	pub fn push(&mut self, x: f64, y: f64) {
		if self.points.len() == TRAIL_LEN {
			self.points.pop_front();
		}
		self.points.push_back((x, y));
	}

	pub fn points(&self) -> impl ExactSizeIterator<Item = &(f64, f64)> {
		self.points.iter()
	}

	pub(super) fn len(&self) -> usize {
		self.points.len()
	}
}

/// One simulated point: a star, a network node or a neuron.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub color: Rgba,
	pub opacity: f64,
	/// Per-entity offset for drift and pulse oscillation.
	pub phase: f64,
	pub pulse: Option<Pulse>,
	pub twinkle: Option<Twinkle>,
	pub trail: Option<Trail>,
	/// Column index for layered topologies.
	pub layer: Option<usize>,
}

impl Entity {
	/// Plain entity with no behaviours attached.
	pub fn new(x: f64, y: f64, vx: f64, vy: f64, radius: f64, color: Rgba) -> Self {
		Self {
			x,
			y,
			vx,
			vy,
			radius,
			color,
			opacity: 1.0,
			phase: 0.0,
			pulse: None,
			twinkle: None,
			trail: None,
			layer: None,
		}
	}

	/// Radius to draw at `time`; the stored radius is never changed.
	pub fn effective_radius(&self, time: f64) -> f64 {
		match self.pulse {
			Some(p) => (self.radius * (1.0 + p.amplitude * (time * p.speed + self.phase).sin())).max(0.0),
			None => self.radius,
		}
	}
}

/// A directed connection between two entities, by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
	pub from: usize,
	pub to: usize,
}

/// A token traveling along one edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Packet {
	pub edge: usize,
	pub progress: f64,
	pub speed: f64,
	pub color: Rgba,
}

impl Packet {
	/// Interpolated position between the edge endpoints at `progress`.
	pub fn position(&self, edges: &[Edge], entities: &[Entity]) -> Option<(f64, f64)> {
		let edge = edges.get(self.edge)?;
		let (a, b) = (entities.get(edge.from)?, entities.get(edge.to)?);
		let t = self.progress.clamp(0.0, 1.0);
		Some((a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t))
	}
}
