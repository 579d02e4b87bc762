use rand::Rng;
use rand::seq::SliceRandom;

use super::config::{PacketConfig, RecyclePolicy};
use super::population::{chance, ordered};
use super::types::{Edge, Packet, Rgba};

/// Bounded set of packets flowing over a fixed edge list.
#[derive(Clone, Debug, PartialEq)]
pub struct PacketPool {
	config: PacketConfig,
	packets: Vec<Packet>,
}

impl PacketPool {
	pub fn new(config: PacketConfig) -> Self {
		Self {
			packets: Vec::with_capacity(config.capacity),
			config,
		}
	}

	pub fn packets(&self) -> &[Packet] {
		&self.packets
	}

	#[cfg(test)]
	pub fn len(&self) -> usize {
		self.packets.len()
	}

	#[cfg(test)]
	pub fn is_empty(&self) -> bool {
		self.packets.is_empty()
	}

	pub fn radius(&self) -> f64 {
		self.config.radius
	}

	/// Add a packet unless the pool is full.
	pub fn push(&mut self, packet: Packet) -> bool {
		if self.packets.len() >= self.config.capacity {
			return false;
		}
		self.packets.push(packet);
		true
	}

	/// Replace the pool content with the configured initial packets.
	pub fn seed<R: Rng>(&mut self, edges: &[Edge], rng: &mut R) {
		self.packets.clear();
		for _ in 0..self.config.initial {
			let Some(packet) = self.spawn(edges, rng) else {
				break;
			};
			if !self.push(packet) {
				break;
			}
		}
	}

	/// Move every packet forward one frame, recycle finished ones and maybe
	/// inject a new one.
	pub fn advance<R: Rng>(&mut self, edges: &[Edge], rng: &mut R) {
		let mut finished = 0;
		for packet in &mut self.packets {
			packet.progress += packet.speed;
			if packet.progress < 1.0 {
				continue;
			}
			match self.config.policy {
				RecyclePolicy::Reset => {
					packet.progress = 0.0;
					packet.speed = random_speed(&self.config, rng);
					packet.color = random_color(&self.config, rng);
				}
				RecyclePolicy::Replace { .. } => finished += 1,
			}
		}

		if let RecyclePolicy::Replace { chance: replace } = self.config.policy {
			if finished > 0 {
				self.packets.retain(|p| p.progress < 1.0);
				for _ in 0..finished {
					if chance(rng, replace) {
						if let Some(packet) = self.spawn(edges, rng) {
							self.push(packet);
						}
					}
				}
			}
		}

		if self.packets.len() < self.config.capacity && chance(rng, self.config.spawn_chance) {
			if let Some(packet) = self.spawn(edges, rng) {
				self.push(packet);
			}
		}
	}

	/// Progress of the last packet seen on each edge.
	pub fn progress_by_edge(&self, edge_count: usize) -> Vec<Option<f64>> {
		let mut progress = vec![None; edge_count];
		for p in &self.packets {
			if let Some(slot) = progress.get_mut(p.edge) {
				*slot = Some(p.progress);
			}
		}
		progress
	}

	fn spawn<R: Rng>(&self, edges: &[Edge], rng: &mut R) -> Option<Packet> {
		if edges.is_empty() {
			return None;
		}
		Some(Packet {
			edge: rng.gen_range(0..edges.len()),
			progress: 0.0,
			speed: random_speed(&self.config, rng),
			color: random_color(&self.config, rng),
		})
	}
}

fn random_speed<R: Rng>(config: &PacketConfig, rng: &mut R) -> f64 {
	let (lo, hi) = ordered(config.speed);
	rng.gen_range(lo..=hi).max(f64::EPSILON)
}

fn random_color<R: Rng>(config: &PacketConfig, rng: &mut R) -> Rgba {
	config.palette.choose(rng).copied().unwrap_or(Rgba::WHITE)
}
