use std::f64::consts::TAU;

use rand::Rng;
use rand::seq::SliceRandom;

use super::config::{FieldConfig, Topology};
use super::types::{Bounds, Entity, Pulse, Rgba, Trail, Twinkle};

/// Entities for a surface of `bounds`, one per `area_per_entity` square
/// pixels, at most `max`.
pub fn entity_count(bounds: Bounds, area_per_entity: f64, max: usize) -> usize {
	if bounds.is_empty() || !area_per_entity.is_finite() || area_per_entity <= 0.0 {
		return 0;
	}
	((bounds.area() / area_per_entity).floor() as usize).min(max)
}

/// Build a fresh population for `bounds`.
pub fn generate<R: Rng>(bounds: Bounds, config: &FieldConfig, rng: &mut R) -> Vec<Entity> {
	if bounds.is_empty() {
		return Vec::new();
	}
	match &config.topology {
		Topology::Layered { sizes } => layered(bounds, sizes, config, rng),
		Topology::None | Topology::RandomFanout { .. } => {
			let count = entity_count(bounds, config.area_per_entity, config.max_entities);
			(0..count)
				.map(|_| {
					let x = rng.gen_range(0.0..=bounds.width);
					let y = rng.gen_range(0.0..=bounds.height);
					spawn(x, y, config, rng)
				})
				.collect()
		}
	}
}

/// Columns evenly spaced across the surface, nodes evenly spaced within
/// each column.
fn layered<R: Rng>(bounds: Bounds, sizes: &[usize], config: &FieldConfig, rng: &mut R) -> Vec<Entity> {
	let column_gap = bounds.width / (sizes.len() + 1) as f64;
	let mut entities = Vec::with_capacity(sizes.iter().sum());
	for (layer, &size) in sizes.iter().enumerate() {
		let row_gap = bounds.height / (size + 1) as f64;
		let x = column_gap * (layer + 1) as f64;
		for row in 0..size {
			let mut entity = spawn(x, row_gap * (row + 1) as f64, config, rng);
			entity.layer = Some(layer);
			entities.push(entity);
		}
	}
	entities
}

fn spawn<R: Rng>(x: f64, y: f64, config: &FieldConfig, rng: &mut R) -> Entity {
	let (lo, hi) = ordered(config.radius);
	let speed = config.speed.abs();
	let color = config
		.palette
		.choose_weighted(rng, |(_, weight)| *weight)
		.map(|(color, _)| *color)
		.unwrap_or(Rgba::WHITE);

	let mut entity = Entity::new(
		x,
		y,
		rng.gen_range(-speed..=speed),
		rng.gen_range(-speed..=speed),
		rng.gen_range(lo..=hi),
		color,
	);
	entity.phase = rng.gen_range(0.0..TAU);

	if chance(rng, config.pulse_chance) {
		entity.pulse = Some(Pulse {
			amplitude: rng.gen_range(0.15..=0.4),
			speed: rng.gen_range(1.0..=3.0),
		});
	}
	if chance(rng, config.twinkle_chance) {
		let low = rng.gen_range(0.2..=0.5);
		let high = rng.gen_range(0.7..=1.0);
		let step = rng.gen_range(0.003..=0.015);
		entity.opacity = rng.gen_range(low..=high);
		entity.twinkle = Some(Twinkle {
			low,
			high,
			step: if rng.gen_bool(0.5) { step } else { -step },
		});
	}
	if chance(rng, config.trail_chance) {
		entity.trail = Some(Trail::default());
	}
	entity
}

pub(super) fn chance<R: Rng>(rng: &mut R, p: f64) -> bool {
	p > 0.0 && rng.gen_bool(p.min(1.0))
}

pub(super) fn ordered((a, b): (f64, f64)) -> (f64, f64) {
	if a <= b { (a, b) } else { (b, a) }
}
