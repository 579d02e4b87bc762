use rand::Rng;

use super::config::FieldConfig;
use super::types::{Bounds, Entity};

/// Per-field constants for [`step`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionParams {
	pub drift: f64,
	pub drift_speed: f64,
	pub bounce_jitter: f64,
}

impl From<&FieldConfig> for MotionParams {
	fn from(config: &FieldConfig) -> Self {
		Self {
			drift: config.drift,
			drift_speed: config.drift_speed,
			// Above 1 a bounce could send the entity back into the wall.
			bounce_jitter: config.bounce_jitter.clamp(0.0, 0.9),
		}
	}
}

/// Advance one entity by a single frame of [`FRAME_DT`](super::state::FRAME_DT) seconds.
///
/// Velocities and drift are pixels per frame, so the step carries no `dt`.
/// `time` is the absolute simulated time in seconds and only feeds the drift
/// and pulse phase. Call exactly once per frame.
pub fn step<R: Rng>(entity: &mut Entity, time: f64, bounds: Bounds, params: &MotionParams, rng: &mut R) {
	if let Some(trail) = entity.trail.as_mut() {
		trail.push(entity.x, entity.y);
	}

	let wobble = time * params.drift_speed + entity.phase;
	let x = entity.x + entity.vx + params.drift * wobble.sin();
	let y = entity.y + entity.vy + params.drift * (wobble * 1.3).cos();

	(entity.x, entity.vx) = reflect(x, entity.vx, bounds.width, params.bounce_jitter, rng);
	(entity.y, entity.vy) = reflect(y, entity.vy, bounds.height, params.bounce_jitter, rng);

	if let Some(twinkle) = entity.twinkle.as_mut() {
		entity.opacity += twinkle.step;
		if entity.opacity >= twinkle.high {
			entity.opacity = twinkle.high;
			twinkle.step = -twinkle.step.abs();
		} else if entity.opacity <= twinkle.low {
			entity.opacity = twinkle.low;
			twinkle.step = twinkle.step.abs();
		}
	}
}

/// Clamp `pos` to `[0, limit]`, pointing `vel` back inside when a wall is hit.
fn reflect<R: Rng>(pos: f64, vel: f64, limit: f64, jitter: f64, rng: &mut R) -> (f64, f64) {
	let inward = if pos < 0.0 {
		1.0
	} else if pos > limit {
		-1.0
	} else {
		return (pos, vel);
	};
	let mut speed = vel.abs();
	if jitter > 0.0 {
		speed *= 1.0 + rng.gen_range(-jitter..=jitter);
	}
	(pos.clamp(0.0, limit.max(0.0)), inward * speed)
}
