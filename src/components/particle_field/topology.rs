use std::collections::HashSet;

use rand::Rng;

use super::config::Topology;
use super::types::{Edge, Entity};

/// Attempts allowed per wanted connection before giving up on an entity.
const ATTEMPTS_PER_LINK: usize = 4;

/// Derive the edge list for `entities` under `topology`.
pub fn connect<R: Rng>(entities: &[Entity], topology: &Topology, rng: &mut R) -> Vec<Edge> {
	match topology {
		Topology::None => Vec::new(),
		Topology::RandomFanout { min, max } => random_fanout(entities.len(), *min, *max, rng),
		Topology::Layered { .. } => layered(entities),
	}
}

fn random_fanout<R: Rng>(n: usize, min: usize, max: usize, rng: &mut R) -> Vec<Edge> {
	if n < 2 {
		return Vec::new();
	}
	let (min, max) = if min <= max { (min, max) } else { (max, min) };
	let mut edges = Vec::new();
	let mut pairs = HashSet::new();

	for from in 0..n {
		let want = rng.gen_range(min..=max);
		let mut linked = 0;
		for _ in 0..want * ATTEMPTS_PER_LINK {
			if linked == want {
				break;
			}
			let to = rng.gen_range(0..n);
			if to == from || !pairs.insert((from.min(to), from.max(to))) {
				continue;
			}
			edges.push(Edge { from, to });
			linked += 1;
		}
	}
	edges
}

/// Full bipartite links between consecutive layers. Entities without a
/// layer take no part.
fn layered(entities: &[Entity]) -> Vec<Edge> {
	let depth = entities.iter().filter_map(|e| e.layer).max().map_or(0, |d| d + 1);
	let mut members: Vec<Vec<usize>> = vec![Vec::new(); depth];
	for (i, e) in entities.iter().enumerate() {
		if let Some(layer) = e.layer {
			members[layer].push(i);
		}
	}

	members
		.windows(2)
		.flat_map(|pair| {
			let (sources, targets) = (&pair[0], &pair[1]);
			sources
				.iter()
				.flat_map(move |&from| targets.iter().map(move |&to| Edge { from, to }))
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::particle_field::types::Rgba;

	fn dots(n: usize) -> Vec<Entity> {
		(0..n)
			.map(|i| Entity::new(i as f64, 0.0, 0.0, 0.0, 1.0, Rgba::WHITE))
			.collect()
	}

	fn layers(sizes: &[usize]) -> Vec<Entity> {
		sizes
			.iter()
			.enumerate()
			.flat_map(|(layer, &size)| {
				(0..size).map(move |_| {
					let mut e = Entity::new(0.0, 0.0, 0.0, 0.0, 1.0, Rgba::WHITE);
					e.layer = Some(layer);
					e
				})
			})
			.collect()
	}

	#[test]
	fn two_by_two_layers_make_four_edges() {
		let edges = connect(
			&layers(&[2, 2]),
			&Topology::Layered { sizes: vec![2, 2] },
			&mut SmallRng::seed_from_u64(1),
		);
		assert_eq!(edges.len(), 4);
		for from in 0..2 {
			for to in 2..4 {
				assert!(edges.contains(&Edge { from, to }));
			}
		}
	}

	#[test]
	fn single_entity_has_no_edges() {
		let topology = Topology::RandomFanout { min: 1, max: 3 };
		assert!(connect(&dots(1), &topology, &mut SmallRng::seed_from_u64(1)).is_empty());
	}

	#[test]
	fn small_pool_accepts_fewer_links() {
		// Only one other entity exists, so three links are impossible.
		let topology = Topology::RandomFanout { min: 3, max: 3 };
		let edges = connect(&dots(2), &topology, &mut SmallRng::seed_from_u64(9));
		assert_eq!(edges.len(), 1);
	}

	#[test]
	fn no_topology_no_edges() {
		assert!(connect(&dots(10), &Topology::None, &mut SmallRng::seed_from_u64(1)).is_empty());
	}

	proptest! {
		#[test]
		fn fanout_edges_are_valid(n in 0usize..60, min in 0usize..4, extra in 0usize..3, seed: u64) {
			let topology = Topology::RandomFanout { min, max: min + extra };
			let edges = connect(&dots(n), &topology, &mut SmallRng::seed_from_u64(seed));
			let mut seen = HashSet::new();
			for e in &edges {
				prop_assert_ne!(e.from, e.to);
				prop_assert!(e.from < n && e.to < n);
				prop_assert!(seen.insert((e.from.min(e.to), e.from.max(e.to))));
			}
			for from in 0..n {
				prop_assert!(edges.iter().filter(|e| e.from == from).count() <= min + extra);
			}
		}

		#[test]
		fn layered_edges_join_adjacent_layers(sizes in proptest::collection::vec(0usize..8, 0..6)) {
			let entities = layers(&sizes);
			let edges = connect(&entities, &Topology::Layered { sizes: sizes.clone() }, &mut SmallRng::seed_from_u64(0));
			let expected: usize = sizes.windows(2).map(|w| w[0] * w[1]).sum();
			prop_assert_eq!(edges.len(), expected);
			for e in &edges {
				prop_assert_ne!(e.from, e.to);
				let (a, b) = (entities[e.from].layer.unwrap(), entities[e.to].layer.unwrap());
				prop_assert_eq!(a + 1, b);
			}
		}
	}
}
