use rand::Rng;
use rand::rngs::SmallRng;

use super::field::{NodeField, node_count_for_width};
use super::lanes::FlowLanes;
use super::proximity::ProximityGraph;
use super::sizing::SurfaceSize;
use super::types::{AmbientConfig, DrawCommand, Node, Viewport};

/// Peak alpha of a link at full strength.
pub const EDGE_ALPHA: f64 = 0.15;
/// Link line width at full strength, before dpr scaling.
pub const EDGE_WIDTH: f64 = 0.7;
/// Radius the node gradient fades out at, before dpr scaling.
pub const GLOW_RADIUS: f64 = 6.0;

/// The animation engine: surface, nodes, lanes and per-frame links.
///
/// Generic over the random source so tests can drive it with a seeded one.
pub struct AmbientState<R = SmallRng> {
	config: AmbientConfig,
	surface: SurfaceSize,
	field: NodeField,
	lanes: FlowLanes,
	graph: ProximityGraph,
	rng: R,
}

impl<R: Rng> AmbientState<R> {
	pub fn new(config: AmbientConfig, viewport: Viewport, mut rng: R) -> Self {
		let surface = SurfaceSize::resolve(viewport, config.max_pixel_ratio);
		let lanes = FlowLanes::new(&mut rng, config.lane_count);
		let mut state = Self {
			config,
			surface,
			field: NodeField::default(),
			lanes,
			graph: ProximityGraph::default(),
			rng,
		};
		state.rebuild_nodes();
		state
	}

	/// Re-resolves the surface and regenerates every node for it.
	pub fn resize(&mut self, viewport: Viewport) {
		self.surface = SurfaceSize::resolve(viewport, self.config.max_pixel_ratio);
		self.rebuild_nodes();
	}

	fn rebuild_nodes(&mut self) {
		let count = node_count_for_width(self.surface.css_width, &self.config);
		let SurfaceSize {
			width, height, dpr, ..
		} = self.surface;
		self.field
			.rebuild(&mut self.rng, count, width, height, dpr, &self.config);
	}

	/// Link distance in device pixels.
	pub fn link_threshold(&self) -> f64 {
		self.config.link_distance * self.surface.dpr
	}

	/// Advances one frame at `time` seconds and returns what to draw, in order.
	pub fn tick(&mut self, time: f64) -> Vec<DrawCommand> {
		let SurfaceSize {
			width, height, dpr, ..
		} = self.surface;
		let threshold = self.link_threshold();

		let node_count = self.field.nodes().len();
		let mut commands = Vec::with_capacity(1 + self.lanes.lanes().len() + node_count * 2);
		commands.push(DrawCommand::Clear { width, height });
		self.lanes.draw(time, &self.surface, &mut commands);

		let nodes = self.field.nodes();
		for edge in self.graph.compute(nodes, threshold) {
			let (a, b) = (&nodes[edge.from], &nodes[edge.to]);
			commands.push(DrawCommand::Edge {
				from: (a.x, a.y),
				to: (b.x, b.y),
				tone: a.tone,
				alpha: EDGE_ALPHA * edge.strength,
				line_width: EDGE_WIDTH * dpr * edge.strength,
			});
		}

		self.field.integrate(width, height, dpr);
		commands.extend(self.field.nodes().iter().map(|node| DrawCommand::Node {
			x: node.x,
			y: node.y,
			radius: node.radius,
			glow_radius: GLOW_RADIUS * dpr,
			tone: node.tone,
		}));
		commands
	}

	pub fn surface(&self) -> SurfaceSize {
		self.surface
	}

	pub fn nodes(&self) -> &[Node] {
		self.field.nodes()
	}

	pub fn config(&self) -> &AmbientConfig {
		&self.config
	}
}
