//! The set of drifting nodes.

use rand::Rng;

use super::types::{AmbientConfig, Node, NodeTone};

/// Node count for a viewport of the given CSS width.
pub fn node_count_for_width(css_width: f64, config: &AmbientConfig) -> usize {
	if css_width < config.breakpoint {
		config.compact_node_count
	} else {
		config.wide_node_count
	}
}

#[derive(Clone, Debug, Default)]
pub struct NodeField {
	nodes: Vec<Node>,
}

impl NodeField {
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// Replaces every node with `count` fresh ones spread over
	/// `[0, width] × [0, height]`.
	pub fn rebuild<R: Rng + ?Sized>(
		&mut self,
		rng: &mut R,
		count: usize,
		width: f64,
		height: f64,
		dpr: f64,
		config: &AmbientConfig,
	) {
		let speed = config.max_speed.abs();
		let (r_min, r_max) = config.radius_range;
		self.nodes.clear();
		self.nodes.extend((0..count).map(|_| Node {
			x: uniform(rng, 0.0, width),
			y: uniform(rng, 0.0, height),
			vx: uniform(rng, -speed, speed),
			vy: uniform(rng, -speed, speed),
			radius: uniform(rng, r_min, r_max) * dpr,
			tone: if rng.gen_bool(0.5) {
				NodeTone::Violet
			} else {
				NodeTone::Cyan
			},
		}));
	}

	/// Advances every node one frame and reflects velocities at the edges.
	///
	/// Positions are not clamped: a node that crosses a wall stays outside
	/// for a frame while its flipped velocity carries it back.
	pub fn integrate(&mut self, width: f64, height: f64, dpr: f64) {
		for node in &mut self.nodes {
			node.x += node.vx * dpr;
			node.y += node.vy * dpr;
			if node.x < 0.0 || node.x > width {
				node.vx = -node.vx;
			}
			if node.y < 0.0 || node.y > height {
				node.vy = -node.vy;
			}
		}
	}

	#[cfg(test)]
	pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
		Self { nodes }
	}
}

// `gen_range` rejects empty ranges, and a zero-sized viewport is legal.
fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
	if high > low {
		rng.gen_range(low..=high)
	} else {
		low
	}
}
