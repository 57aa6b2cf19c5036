//! Per-frame proximity links between nodes.
//!
//! Every pair is tested. Node counts stay in the tens, so the quadratic
//! pass is a few thousand distance checks per frame.

use super::types::Node;

/// Two nodes closer than the link distance in the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
	/// Lower node index.
	pub from: usize,
	/// Higher node index.
	pub to: usize,
	pub distance: f64,
	/// `1 - distance / threshold`, in `(0, 1]`.
	pub strength: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ProximityGraph {
	edges: Vec<Edge>,
}

impl ProximityGraph {
	/// Recomputes the edge set from scratch and returns it.
	pub fn compute(&mut self, nodes: &[Node], threshold: f64) -> &[Edge] {
		self.edges.clear();
		if threshold <= 0.0 {
			return &self.edges;
		}

		for (i, a) in nodes.iter().enumerate() {
			for (offset, b) in nodes[i + 1..].iter().enumerate() {
				let distance = (a.x - b.x).hypot(a.y - b.y);
				if distance >= threshold {
					continue;
				}
				let strength = 1.0 - distance / threshold;
				if strength > 0.0 {
					self.edges.push(Edge {
						from: i,
						to: i + 1 + offset,
						distance,
						strength,
					});
				}
			}
		}
		&self.edges
	}

	#[cfg(test)]
	pub(crate) fn edges(&self) -> &[Edge] {
		&self.edges
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::ambient_graph::field::NodeField;
	use crate::components::ambient_graph::types::{AmbientConfig, NodeTone};

	fn node_at(x: f64, y: f64) -> Node {
		Node {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 1.0,
			tone: NodeTone::Violet,
		}
	}

	#[test]
	fn just_inside_threshold_links() {
		let mut graph = ProximityGraph::default();
		let edges = graph.compute(&[node_at(0.0, 0.0), node_at(149.0, 0.0)], 150.0);
		assert_eq!(edges.len(), 1);
		assert_eq!((edges[0].from, edges[0].to), (0, 1));
		assert!(edges[0].strength > 0.0);
		assert!((edges[0].strength - 1.0 / 150.0).abs() < 1e-12);
	}

	#[test]
	fn exactly_at_threshold_does_not_link() {
		let mut graph = ProximityGraph::default();
		let edges = graph.compute(&[node_at(0.0, 0.0), node_at(150.0, 0.0)], 150.0);
		assert!(edges.is_empty());
	}

	#[test]
	fn coincident_nodes_have_full_strength() {
		let mut graph = ProximityGraph::default();
		let edges = graph.compute(&[node_at(5.0, 5.0), node_at(5.0, 5.0)], 150.0);
		assert_eq!(edges.len(), 1);
		assert_eq!(edges[0].strength, 1.0);
	}

	#[test]
	fn non_positive_threshold_yields_nothing() {
		let mut graph = ProximityGraph::default();
		let nodes = [node_at(0.0, 0.0), node_at(0.0, 0.0)];
		assert!(graph.compute(&nodes, 0.0).is_empty());
		assert!(graph.compute(&nodes, -1.0).is_empty());
	}

	#[test]
	fn dense_cluster_links_every_pair() {
		let nodes: Vec<Node> = (0..10).map(|i| node_at(i as f64, 0.0)).collect();
		let mut graph = ProximityGraph::default();
		assert_eq!(graph.compute(&nodes, 150.0).len(), 45);
	}

	#[test]
	fn recompute_replaces_previous_edges() {
		let mut graph = ProximityGraph::default();
		graph.compute(&[node_at(0.0, 0.0), node_at(1.0, 0.0)], 150.0);
		graph.compute(&[node_at(0.0, 0.0), node_at(500.0, 0.0)], 150.0);
		assert!(graph.edges().is_empty());
	}

	#[test]
	fn random_fields_satisfy_edge_invariants() {
		let config = AmbientConfig::default();
		let mut rng = SmallRng::seed_from_u64(42);
		let mut field = NodeField::default();
		let mut graph = ProximityGraph::default();

		for _ in 0..20 {
			field.rebuild(&mut rng, 80, 1024.0, 768.0, 1.0, &config);
			let nodes = field.nodes();
			let n = nodes.len();
			let edges = graph.compute(nodes, 150.0);

			assert!(edges.len() <= n * (n - 1) / 2);
			for edge in edges {
				assert!(edge.from < edge.to);
				assert!(edge.distance < 150.0);
				assert!(edge.strength > 0.0 && edge.strength <= 1.0);
				let (a, b) = (&nodes[edge.from], &nodes[edge.to]);
				assert_eq!(edge.distance, (a.x - b.x).hypot(a.y - b.y));
			}

			let brute = (0..n)
				.flat_map(|i| (i + 1..n).map(move |j| (i, j)))
				.filter(|&(i, j)| {
					(nodes[i].x - nodes[j].x).hypot(nodes[i].y - nodes[j].y) < 150.0
				})
				.count();
			assert_eq!(edges.len(), brute);
		}
	}
}
