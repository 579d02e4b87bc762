//! Engine parameters and the presets for each background motif.

use super::types::Rgba;

/// How edges are derived from the population.
#[derive(Clone, Debug, PartialEq)]
pub enum Topology {
	/// No edges.
	None,
	/// Each entity links to `min..=max` distinct random targets.
	RandomFanout {
		/// Fewest targets per entity.
		min: usize,
		/// Most targets per entity.
		max: usize,
	},
	/// Entities are laid out in columns of the given sizes; each column is
	/// fully connected to the next.
	Layered {
		/// Entity count of each column, left to right.
		sizes: Vec<usize>,
	},
}

/// What happens to a packet once it reaches the end of its edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecyclePolicy {
	/// Drop it, and with probability `chance` start a new one on a random edge.
	Replace {
		/// Probability of a replacement, `0.0..=1.0`.
		chance: f64,
	},
	/// Restart on the same edge with a fresh speed and color.
	Reset,
}

/// Packets traveling along edges.
#[derive(Clone, Debug, PartialEq)]
pub struct PacketConfig {
	/// Most packets alive at once.
	pub capacity: usize,
	/// Packets created when the population is (re)generated.
	pub initial: usize,
	/// Per-frame probability of injecting a packet while below capacity.
	pub spawn_chance: f64,
	/// Progress per frame, picked uniformly from `(min, max)`.
	pub speed: (f64, f64),
	/// Colors picked uniformly per packet.
	pub palette: Vec<Rgba>,
	/// Fate of packets that reach their target.
	pub policy: RecyclePolicy,
	/// Drawn radius in pixels.
	pub radius: f64,
}

impl Default for PacketConfig {
	fn default() -> Self {
		Self {
			capacity: 30,
			initial: 10,
			spawn_chance: 0.05,
			speed: (0.004, 0.012),
			palette: vec![Rgba::rgb(96, 165, 250), Rgba::rgb(167, 139, 250)],
			policy: RecyclePolicy::Replace { chance: 0.7 },
			radius: 2.5,
		}
	}
}

/// Fill applied before anything else each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Background {
	/// Transparent surface; page content shows through.
	Clear,
	/// Opaque fill.
	Solid(Rgba),
	/// Translucent fill that leaves fading streaks behind moving entities.
	Fade(Rgba),
}

/// How edges are stroked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConnectionStyle {
	/// Plain line in the connection color.
	Solid,
	/// Linear gradient whose bright stop follows the packet on the edge.
	Pulse,
	/// Dashes flowing from source to target.
	Dashed {
		/// Dash length in pixels.
		dash: f64,
		/// Gap length in pixels.
		gap: f64,
		/// Dash offset advanced per frame.
		flow: f64,
	},
}

/// Full parameter set of one particle field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
	/// Square pixels per entity. Zero yields an empty field.
	pub area_per_entity: f64,
	/// Upper bound on the area-derived population.
	pub max_entities: usize,
	/// Entity radius range in pixels.
	pub radius: (f64, f64),
	/// Largest absolute velocity component, pixels per frame.
	pub speed: f64,
	/// Weighted entity palette.
	pub palette: Vec<(Rgba, f64)>,
	/// Multiplier applied to every entity's alpha.
	pub opacity: f64,
	/// Probability that an entity pulses.
	pub pulse_chance: f64,
	/// Probability that an entity leaves a trail.
	pub trail_chance: f64,
	/// Probability that an entity twinkles.
	pub twinkle_chance: f64,
	/// Amplitude of the sinusoidal drift added to velocity, pixels per frame.
	pub drift: f64,
	/// Angular speed of the drift, radians per second.
	pub drift_speed: f64,
	/// Relative speed change applied on each wall bounce.
	pub bounce_jitter: f64,
	/// Entities at least this large get a radial glow.
	pub glow_threshold: f64,
	/// Glow radius relative to the entity radius.
	pub glow_scale: f64,
	/// Edge layout.
	pub topology: Topology,
	/// Stroke color of edges.
	pub connection_color: Rgba,
	/// Stroke width of edges in pixels.
	pub connection_width: f64,
	/// Stroke style of edges.
	pub connection_style: ConnectionStyle,
	/// Packet flow; `None` disables packets.
	pub packets: Option<PacketConfig>,
	/// Per-frame background fill.
	pub background: Background,
	/// Fixed RNG seed for reproducible output.
	pub seed: Option<u64>,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self::starfield()
	}
}

impl FieldConfig {
	/// Dense twinkling stars, no connections.
	pub fn starfield() -> Self {
		Self {
			area_per_entity: 4_000.0,
			max_entities: 400,
			radius: (0.4, 1.8),
			speed: 0.15,
			palette: vec![
				(Rgba::rgb(255, 255, 255), 6.0),
				(Rgba::rgb(191, 219, 254), 2.0),
				(Rgba::rgb(196, 181, 253), 1.0),
				(Rgba::rgb(253, 230, 138), 1.0),
			],
			opacity: 1.0,
			pulse_chance: 0.4,
			trail_chance: 0.15,
			twinkle_chance: 1.0,
			drift: 0.05,
			drift_speed: 0.8,
			bounce_jitter: 0.1,
			glow_threshold: 1.4,
			glow_scale: 4.0,
			topology: Topology::None,
			connection_color: Rgba::TRANSPARENT,
			connection_width: 0.0,
			connection_style: ConnectionStyle::Solid,
			packets: None,
			background: Background::Fade(Rgba::new(2, 6, 23, 0.35)),
			seed: None,
		}
	}

	/// Drifting nodes with random links and packets hopping between them.
	pub fn data_network() -> Self {
		Self {
			area_per_entity: 18_000.0,
			max_entities: 80,
			radius: (1.5, 3.5),
			speed: 0.35,
			palette: vec![
				(Rgba::rgb(59, 130, 246), 3.0),
				(Rgba::rgb(139, 92, 246), 2.0),
				(Rgba::rgb(34, 211, 238), 1.0),
			],
			opacity: 0.9,
			pulse_chance: 0.3,
			trail_chance: 0.0,
			twinkle_chance: 0.0,
			drift: 0.1,
			drift_speed: 0.5,
			bounce_jitter: 0.15,
			glow_threshold: 3.0,
			glow_scale: 3.5,
			topology: Topology::RandomFanout { min: 1, max: 3 },
			connection_color: Rgba::new(99, 102, 241, 0.25),
			connection_width: 1.0,
			connection_style: ConnectionStyle::Pulse,
			packets: Some(PacketConfig::default()),
			background: Background::Clear,
			seed: None,
		}
	}

	/// Columns of neurons with persistent signal flow between layers.
	pub fn neural_network() -> Self {
		Self {
			area_per_entity: 0.0,
			max_entities: 64,
			radius: (3.0, 5.0),
			speed: 0.0,
			palette: vec![(Rgba::rgb(168, 85, 247), 2.0), (Rgba::rgb(236, 72, 153), 1.0)],
			opacity: 0.95,
			pulse_chance: 1.0,
			trail_chance: 0.0,
			twinkle_chance: 0.0,
			drift: 0.15,
			drift_speed: 1.2,
			bounce_jitter: 0.0,
			glow_threshold: 4.0,
			glow_scale: 3.0,
			topology: Topology::Layered {
				sizes: vec![6, 10, 8, 6],
			},
			connection_color: Rgba::new(168, 85, 247, 0.15),
			connection_width: 0.8,
			connection_style: ConnectionStyle::Pulse,
			packets: Some(PacketConfig {
				capacity: 30,
				initial: 30,
				spawn_chance: 0.0,
				speed: (0.005, 0.015),
				palette: vec![Rgba::rgb(244, 114, 182), Rgba::rgb(192, 132, 252), Rgba::rgb(255, 255, 255)],
				policy: RecyclePolicy::Reset,
				radius: 2.0,
			}),
			background: Background::Clear,
			seed: None,
		}
	}

	/// Sparse stages linked by flowing dashed lines.
	pub fn process_flow() -> Self {
		Self {
			area_per_entity: 40_000.0,
			max_entities: 24,
			radius: (4.0, 7.0),
			speed: 0.2,
			palette: vec![(Rgba::rgb(16, 185, 129), 1.0), (Rgba::rgb(14, 165, 233), 1.0)],
			opacity: 0.8,
			pulse_chance: 0.5,
			trail_chance: 0.0,
			twinkle_chance: 0.0,
			drift: 0.0,
			drift_speed: 0.0,
			bounce_jitter: 0.05,
			glow_threshold: 5.5,
			glow_scale: 2.5,
			topology: Topology::RandomFanout { min: 1, max: 2 },
			connection_color: Rgba::new(148, 163, 184, 0.35),
			connection_width: 1.2,
			connection_style: ConnectionStyle::Dashed {
				dash: 6.0,
				gap: 6.0,
				flow: 0.5,
			},
			packets: Some(PacketConfig {
				capacity: 12,
				initial: 4,
				spawn_chance: 0.03,
				speed: (0.003, 0.008),
				palette: vec![Rgba::rgb(52, 211, 153)],
				policy: RecyclePolicy::Replace { chance: 0.5 },
				radius: 3.0,
			}),
			background: Background::Clear,
			seed: None,
		}
	}

	/// Fix the RNG seed so every mount produces the same field.
	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}
}
