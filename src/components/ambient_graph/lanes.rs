//! Slow horizontal waves behind the node field.

use rand::Rng;

use super::sizing::SurfaceSize;
use super::types::DrawCommand;

pub const LANE_STROKE: &str = "rgba(148, 163, 184, 0.06)";

const SWAY: f64 = 10.0;
const RIPPLE: f64 = 8.0;
const RIPPLE_FREQUENCY: f64 = 0.002;
const SAMPLE_SPACING: f64 = 20.0;
const MAX_PHASE: f64 = 10.0;

/// A wave source with a fixed baseline (fraction of height) and phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lane {
	pub baseline: f64,
	pub phase: f64,
}

impl Lane {
	/// Samples the lane across the surface at `time` seconds.
	pub fn points(&self, time: f64, surface: &SurfaceSize) -> Vec<(f64, f64)> {
		let dpr = surface.dpr;
		let step = SAMPLE_SPACING * dpr;
		if step <= 0.0 || !step.is_finite() {
			return Vec::new();
		}

		let base_y = self.baseline * surface.height + (time + self.phase).sin() * SWAY * dpr;
		let samples = (surface.width / step).floor() as usize + 1;
		(0..samples)
			.map(|i| {
				let x = i as f64 * step;
				let y = base_y + (x * RIPPLE_FREQUENCY + time + self.phase).sin() * RIPPLE * dpr;
				(x, y)
			})
			.collect()
	}
}

#[derive(Clone, Debug, Default)]
pub struct FlowLanes {
	lanes: Vec<Lane>,
}

impl FlowLanes {
	/// Evenly spaced baselines `k / count` with random phases.
	pub fn new<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
		let lanes = (0..count)
			.map(|k| Lane {
				baseline: k as f64 / count as f64,
				phase: rng.gen_range(0.0..MAX_PHASE),
			})
			.collect();
		Self { lanes }
	}

	pub fn lanes(&self) -> &[Lane] {
		&self.lanes
	}

	/// Appends one polyline command per lane.
	pub fn draw(&self, time: f64, surface: &SurfaceSize, out: &mut Vec<DrawCommand>) {
		out.extend(self.lanes.iter().map(|lane| DrawCommand::Lane {
			points: lane.points(time, surface),
			line_width: surface.dpr,
		}));
	}
}

#[cfg(test)]
mod tests {
	use std::f64::consts::TAU;

	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::ambient_graph::types::Viewport;

	fn surface(width: f64, height: f64, dpr: f64) -> SurfaceSize {
		SurfaceSize::resolve(Viewport::new(width, height, dpr), 2.0)
	}

	#[test]
	fn eight_lanes_evenly_spaced() {
		let mut rng = SmallRng::seed_from_u64(3);
		let lanes = FlowLanes::new(&mut rng, 8);
		assert_eq!(lanes.lanes().len(), 8);
		for (k, lane) in lanes.lanes().iter().enumerate() {
			assert_eq!(lane.baseline, k as f64 / 8.0);
			assert!((0.0..10.0).contains(&lane.phase));
		}
	}

	#[test]
	fn samples_every_twenty_device_pixels() {
		let lane = Lane { baseline: 0.5, phase: 0.0 };
		let points = lane.points(0.0, &surface(100.0, 100.0, 1.0));
		let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
		assert_eq!(xs, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);

		let points = lane.points(0.0, &surface(100.0, 100.0, 2.0));
		assert_eq!(points.len(), 6);
		assert_eq!(points[1].0, 40.0);
	}

	#[test]
	fn wave_follows_baseline_sway_and_ripple() {
		let lane = Lane { baseline: 0.25, phase: 1.0 };
		let size = surface(200.0, 400.0, 1.0);
		let time = 2.0;
		let points = lane.points(time, &size);

		let base = 0.25 * 400.0 + (time + 1.0_f64).sin() * 10.0;
		for &(x, y) in &points {
			let expected = base + (x * 0.002 + time + 1.0).sin() * 8.0;
			assert!((y - expected).abs() < 1e-9);
		}
	}

	#[test]
	fn displacement_stays_within_amplitude() {
		let lane = Lane { baseline: 0.5, phase: 3.3 };
		let size = surface(1024.0, 768.0, 2.0);
		for step in 0..200 {
			let time = step as f64 * 0.1;
			for (_, y) in lane.points(time, &size) {
				assert!((y - 0.5 * size.height).abs() <= (SWAY + RIPPLE) * 2.0 + 1e-9);
			}
		}
	}

	#[test]
	fn lanes_are_periodic_in_time() {
		let lane = Lane { baseline: 0.5, phase: 0.7 };
		let size = surface(300.0, 300.0, 1.0);
		let a = lane.points(1.0, &size);
		let b = lane.points(1.0 + TAU, &size);
		for (p, q) in a.iter().zip(&b) {
			assert!((p.1 - q.1).abs() < 1e-9);
		}
	}

	#[test]
	fn draw_emits_one_command_per_lane() {
		let mut rng = SmallRng::seed_from_u64(3);
		let lanes = FlowLanes::new(&mut rng, 8);
		let mut out = Vec::new();
		lanes.draw(0.5, &surface(640.0, 480.0, 1.0), &mut out);
		assert_eq!(out.len(), 8);
		assert!(out.iter().all(|c| matches!(c, DrawCommand::Lane { line_width, .. } if *line_width == 1.0)));
	}
}
