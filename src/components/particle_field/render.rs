use super::config::{Background, ConnectionStyle};
use super::state::FieldState;
use super::surface::{Paint, Surface};
use super::types::{Bounds, Rgba};

/// Half width of the bright band of a pulse gradient, in edge fractions.
const PULSE_BAND: f64 = 0.12;

/// Draw one frame. Layer order: background, connections, glows, entities,
/// packets.
pub fn render<S: Surface + ?Sized>(state: &FieldState, surface: &S) {
	draw_background(state, surface);
	draw_connections(state, surface);
	draw_glows(state, surface);
	draw_entities(state, surface);
	draw_packets(state, surface);
}

fn draw_background<S: Surface + ?Sized>(state: &FieldState, surface: &S) {
	let Bounds { width, height } = state.bounds;
	match state.config.background {
		Background::Clear => surface.clear(width, height),
		Background::Solid(color) | Background::Fade(color) => {
			surface.fill_rect(0.0, 0.0, width, height, &Paint::Solid(color))
		}
	}
}

fn draw_connections<S: Surface + ?Sized>(state: &FieldState, surface: &S) {
	if state.edges.is_empty() {
		return;
	}
	let config = &state.config;
	let base = config.connection_color;
	let progress = match (config.connection_style, &state.packets) {
		(ConnectionStyle::Pulse, Some(pool)) => pool.progress_by_edge(state.edges.len()),
		_ => Vec::new(),
	};

	if let ConnectionStyle::Dashed { dash, gap, flow } = config.connection_style {
		let period = (dash + gap).max(f64::EPSILON);
		surface.set_line_dash(&[dash, gap], -(state.time * 60.0 * flow) % period);
	}

	for (i, edge) in state.edges.iter().enumerate() {
		let (Some(a), Some(b)) = (state.entities.get(edge.from), state.entities.get(edge.to)) else {
			continue;
		};
		let paint = match progress.get(i).copied().flatten() {
			Some(t) => pulse_gradient((a.x, a.y), (b.x, b.y), t, base),
			None => Paint::Solid(base),
		};
		surface.stroke_line((a.x, a.y), (b.x, b.y), config.connection_width, &paint);
	}

	if matches!(config.connection_style, ConnectionStyle::Dashed { .. }) {
		surface.set_line_dash(&[], 0.0);
	}
}

/// Gradient along an edge that peaks where its packet currently is.
fn pulse_gradient(from: (f64, f64), to: (f64, f64), progress: f64, base: Rgba) -> Paint {
	let t = progress.clamp(0.0, 1.0);
	let bright = Rgba { a: (base.a * 4.0).min(1.0), ..base };
	Paint::Linear {
		from,
		to,
		stops: vec![
			(0.0, base),
			((t - PULSE_BAND).max(0.0), base),
			(t, bright),
			((t + PULSE_BAND).min(1.0), base),
			(1.0, base),
		],
	}
}

fn draw_glows<S: Surface + ?Sized>(state: &FieldState, surface: &S) {
	let config = &state.config;
	if config.glow_scale <= 0.0 {
		return;
	}
	for e in state.entities.iter().filter(|e| e.radius >= config.glow_threshold) {
		let radius = e.effective_radius(state.time);
		let outer = radius * config.glow_scale;
		if outer <= 0.0 {
			continue;
		}
		let alpha = e.opacity * config.opacity;
		let glow = Paint::Radial {
			center: (e.x, e.y),
			inner: radius * 0.3,
			outer,
			stops: vec![
				(0.0, e.color.with_alpha(0.35 * alpha)),
				(0.6, e.color.with_alpha(0.1 * alpha)),
				(1.0, e.color.with_alpha(0.0)),
			],
		};
		surface.fill_circle(e.x, e.y, outer, &glow);
	}
}

fn draw_entities<S: Surface + ?Sized>(state: &FieldState, surface: &S) {
	let mut path = Vec::new();
	for e in &state.entities {
		let alpha = e.opacity * state.config.opacity;
		let radius = e.effective_radius(state.time);

		if let Some(trail) = e.trail.as_ref().filter(|t| t.len() > 1) {
			path.clear();
			path.extend(trail.points().copied());
			path.push((e.x, e.y));
			surface.stroke_path(&path, (radius * 0.6).max(0.5), &Paint::Solid(e.color.with_alpha(0.3 * alpha)));
		}

		surface.fill_circle(e.x, e.y, radius, &Paint::Solid(e.color.with_alpha(alpha)));
	}
}

fn draw_packets<S: Surface + ?Sized>(state: &FieldState, surface: &S) {
	let Some(pool) = &state.packets else {
		return;
	};
	for packet in pool.packets() {
		if let Some((x, y)) = packet.position(&state.edges, &state.entities) {
			surface.fill_circle(x, y, pool.radius(), &Paint::Solid(packet.color));
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::config::{FieldConfig, PacketConfig};
	use crate::components::particle_field::testing::{Op, RecordingSurface};
	use crate::components::particle_field::types::{Edge, Entity, Packet};

	const PACKET_COLOR: Rgba = Rgba::rgb(1, 2, 3);

	fn network() -> FieldState {
		let mut config = FieldConfig::data_network().with_seed(4);
		config.glow_threshold = 4.0;
		config.packets = Some(PacketConfig {
			initial: 0,
			spawn_chance: 0.0,
			..PacketConfig::default()
		});
		let mut state = FieldState::new(config, 0.0, 0.0);
		state.bounds = Bounds::new(100.0, 100.0);
		state.entities = vec![
			Entity::new(10.0, 10.0, 0.0, 0.0, 5.0, Rgba::WHITE),
			Entity::new(90.0, 10.0, 0.0, 0.0, 2.0, Rgba::WHITE),
			Entity::new(50.0, 90.0, 0.0, 0.0, 2.0, Rgba::WHITE),
		];
		state.edges = vec![Edge { from: 0, to: 1 }, Edge { from: 1, to: 2 }];
		state
	}

	fn with_packet(mut state: FieldState, progress: f64) -> FieldState {
		if let Some(pool) = state.packets.as_mut() {
			pool.push(Packet {
				edge: 0,
				progress,
				speed: 0.01,
				color: PACKET_COLOR,
			});
		}
		state
	}

	fn stage(op: &Op) -> u8 {
		match op {
			Op::Clear | Op::FillRect(_) => 0,
			Op::Dash(_) | Op::Line { .. } => 1,
			Op::Circle { paint: Paint::Radial { .. }, .. } => 2,
			Op::Circle { paint: Paint::Solid(c), .. } if *c == PACKET_COLOR => 4,
			Op::Circle { .. } | Op::Path(_) => 3,
			Op::SetSize(..) => 0,
		}
	}

	#[test]
	fn layers_are_drawn_in_order() {
		let state = with_packet(network(), 0.5);
		let surface = RecordingSurface::default();
		render(&state, &surface);
		let stages: Vec<u8> = surface.ops().iter().map(stage).collect();
		assert_eq!(stages.first(), Some(&0));
		assert!(stages.windows(2).all(|w| w[0] <= w[1]), "out of order: {stages:?}");
		for s in 0..=4 {
			assert!(stages.contains(&s), "stage {s} missing: {stages:?}");
		}
	}

	#[test]
	fn busy_edge_gets_gradient_at_packet_progress() {
		let state = with_packet(network(), 0.5);
		let surface = RecordingSurface::default();
		render(&state, &surface);
		let lines: Vec<Paint> = surface
			.ops()
			.into_iter()
			.filter_map(|op| match op {
				Op::Line { paint, .. } => Some(paint),
				_ => None,
			})
			.collect();
		assert_eq!(lines.len(), 2);
		match &lines[0] {
			Paint::Linear { stops, from, to } => {
				assert_eq!((*from, *to), ((10.0, 10.0), (90.0, 10.0)));
				assert!(stops.iter().any(|(offset, color)| *offset == 0.5 && color.a > 0.25));
			}
			other => panic!("expected gradient, got {other:?}"),
		}
		assert!(matches!(lines[1], Paint::Solid(_)));
	}

	#[test]
	fn packet_drawn_at_interpolated_position() {
		let state = with_packet(network(), 0.25);
		let surface = RecordingSurface::default();
		render(&state, &surface);
		let last = surface.ops().pop();
		assert!(matches!(last, Some(Op::Circle { x, y, .. }) if x == 30.0 && y == 10.0));
	}

	#[test]
	fn empty_field_draws_only_background() {
		let state = FieldState::new(FieldConfig::data_network(), 0.0, 0.0);
		let surface = RecordingSurface::default();
		render(&state, &surface);
		assert_eq!(surface.ops(), vec![Op::Clear]);

		let stars = FieldState::new(FieldConfig::starfield(), 0.0, 0.0);
		let surface = RecordingSurface::default();
		render(&stars, &surface);
		assert!(matches!(surface.ops().as_slice(), [Op::FillRect(Paint::Solid(_))]));
	}

	#[test]
	fn dashed_style_resets_dash_after_connections() {
		let mut state = network();
		state.config.connection_style = ConnectionStyle::Dashed {
			dash: 4.0,
			gap: 2.0,
			flow: 1.0,
		};
		let surface = RecordingSurface::default();
		render(&state, &surface);
		let dashes: Vec<Vec<f64>> = surface
			.ops()
			.into_iter()
			.filter_map(|op| match op {
				Op::Dash(d) => Some(d),
				_ => None,
			})
			.collect();
		assert_eq!(dashes, vec![vec![4.0, 2.0], vec![]]);
	}
}
