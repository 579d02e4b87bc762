//! Animated particle-field canvas backgrounds.
//!
//! One engine drives every motif: a population of entities drifting inside
//! the surface, an optional edge graph between them, and packets traveling
//! along those edges. The motif is picked with a [`FieldConfig`] preset:
//!
//! - [`FieldConfig::starfield`]: twinkling, pulsing stars with short trails
//! - [`FieldConfig::data_network`]: random links, packets hop between nodes
//! - [`FieldConfig::neural_network`]: layered columns with steady signal flow
//! - [`FieldConfig::process_flow`]: sparse stages joined by flowing dashes
//!
//! # Example
//!
//! ```ignore
//! use particle_field_canvas::{FieldConfig, ParticleFieldCanvas};
//!
//! view! { <ParticleFieldCanvas config=FieldConfig::data_network().with_seed(7) fullscreen=false /> }
//! ```

mod browser;
mod component;
mod config;
mod error;
mod lifecycle;
mod motion;
mod packets;
mod population;
mod render;
mod state;
mod surface;
#[cfg(test)]
mod testing;
mod topology;
mod types;

pub use component::ParticleFieldCanvas;
pub use config::{Background, ConnectionStyle, FieldConfig, PacketConfig, RecyclePolicy, Topology};
pub use types::Rgba;

#[cfg(test)]
mod tests {
	use crate::{Background, ConnectionStyle, FieldConfig, PacketConfig, RecyclePolicy, Rgba, Topology};

	#[test]
	fn custom_config_from_crate_root_types() {
		let config = FieldConfig {
			topology: Topology::Layered { sizes: vec![3, 2] },
			connection_style: ConnectionStyle::Dashed {
				dash: 4.0,
				gap: 2.0,
				flow: 1.0,
			},
			packets: Some(PacketConfig {
				policy: RecyclePolicy::Reset,
				..PacketConfig::default()
			}),
			background: Background::Solid(Rgba::rgb(0, 0, 0)),
			..FieldConfig::process_flow()
		}
		.with_seed(2);
		let state = super::state::FieldState::new(config, 300.0, 200.0);
		assert_eq!(state.entities.len(), 5);
		assert_eq!(state.edges.len(), 6);
	}
}
