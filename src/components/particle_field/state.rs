use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::config::FieldConfig;
use super::motion::{self, MotionParams};
use super::packets::PacketPool;
use super::population;
use super::topology;
use super::types::{Bounds, Edge, Entity};

/// Simulated seconds per frame.
pub const FRAME_DT: f64 = 1.0 / 60.0;

pub struct FieldState {
	pub config: FieldConfig,
	pub entities: Vec<Entity>,
	pub edges: Vec<Edge>,
	pub packets: Option<PacketPool>,
	pub bounds: Bounds,
	pub time: f64,
	motion: MotionParams,
	rng: SmallRng,
}

impl FieldState {
	pub fn new(config: FieldConfig, width: f64, height: f64) -> Self {
		let rng = match config.seed {
			Some(seed) => SmallRng::seed_from_u64(seed),
			None => SmallRng::from_entropy(),
		};
		let mut state = Self {
			motion: MotionParams::from(&config),
			packets: config.packets.clone().map(PacketPool::new),
			config,
			entities: Vec::new(),
			edges: Vec::new(),
			bounds: Bounds::default(),
			time: 0.0,
			rng,
		};
		state.regenerate(width, height);
		state
	}

	/// Throw away every entity, edge and packet and build new ones for the
	/// given surface size.
	pub fn regenerate(&mut self, width: f64, height: f64) {
		self.bounds = Bounds::new(width, height);
		self.entities = population::generate(self.bounds, &self.config, &mut self.rng);
		self.edges = topology::connect(&self.entities, &self.config.topology, &mut self.rng);
		if let Some(pool) = self.packets.as_mut() {
			pool.seed(&self.edges, &mut self.rng);
		}
		debug!(
			"particle field {}x{}: {} entities, {} edges",
			self.bounds.width,
			self.bounds.height,
			self.entities.len(),
			self.edges.len()
		);
	}

	/// Advance one frame: motion first, then packets.
	pub fn tick(&mut self) {
		self.time += FRAME_DT;
		for entity in &mut self.entities {
			motion::step(entity, self.time, self.bounds, &self.motion, &mut self.rng);
		}
		if let Some(pool) = self.packets.as_mut() {
			pool.advance(&self.edges, &mut self.rng);
		}
	}
}
