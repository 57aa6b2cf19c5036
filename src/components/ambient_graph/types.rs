/// Tunables for the ambient background.
///
/// Distances and speeds are in device-independent units; the engine scales
/// them by the effective device pixel ratio.
#[derive(Clone, Debug, PartialEq)]
pub struct AmbientConfig {
	/// Node count below the breakpoint.
	pub compact_node_count: usize,
	/// Node count at or above the breakpoint.
	pub wide_node_count: usize,
	/// Viewport width (CSS pixels) that switches between the two counts.
	pub breakpoint: f64,
	/// Pairs closer than this are linked.
	pub link_distance: f64,
	/// Upper bound on the device pixel ratio.
	pub max_pixel_ratio: f64,
	/// Bound on each velocity component, per frame.
	pub max_speed: f64,
	/// Node radius range, before dpr scaling.
	pub radius_range: (f64, f64),
	/// Number of flow lanes.
	pub lane_count: usize,
	/// Fixed RNG seed; `None` seeds from the host.
	pub seed: Option<u64>,
}

impl Default for AmbientConfig {
	fn default() -> Self {
		Self {
			compact_node_count: 40,
			wide_node_count: 80,
			breakpoint: 768.0,
			link_distance: 150.0,
			max_pixel_ratio: 2.0,
			max_speed: 0.15,
			radius_range: (1.2, 2.2),
			lane_count: 8,
			seed: None,
		}
	}
}

/// Viewport as reported by the host, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
	/// Raw, unclamped device pixel ratio.
	pub device_pixel_ratio: f64,
}

impl Viewport {
	pub const fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
		Self {
			width,
			height,
			device_pixel_ratio,
		}
	}
}

/// Color family of a node. Fixed for the node's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeTone {
	Violet,
	Cyan,
}

impl NodeTone {
	pub const fn rgb(self) -> (u8, u8, u8) {
		match self {
			Self::Violet => (124, 58, 237),
			Self::Cyan => (6, 182, 212),
		}
	}

	/// CSS `rgba(...)` string for this tone at the given alpha.
	pub fn rgba(self, alpha: f64) -> String {
		let (r, g, b) = self.rgb();
		format!("rgba({}, {}, {}, {})", r, g, b, alpha)
	}
}

/// A moving point, in device pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub tone: NodeTone,
}

/// One drawing step of a frame, replayed in order by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	/// Clear the whole surface.
	Clear { width: f64, height: f64 },
	/// Open polyline for a flow lane.
	Lane { points: Vec<(f64, f64)>, line_width: f64 },
	/// Line between two linked nodes.
	Edge {
		from: (f64, f64),
		to: (f64, f64),
		tone: NodeTone,
		alpha: f64,
		line_width: f64,
	},
	/// Glowing disc for a node.
	Node {
		x: f64,
		y: f64,
		radius: f64,
		glow_radius: f64,
		tone: NodeTone,
	},
}
