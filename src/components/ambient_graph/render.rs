use std::f64::consts::PI;
use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::lanes::LANE_STROKE;
use super::types::{DrawCommand, NodeTone};

/// Core alpha of a node's gradient.
const NODE_CORE_ALPHA: f64 = 0.9;

static NODE_FAILURE_LOGGED: AtomicBool = AtomicBool::new(false);

/// Replays one frame's commands onto the canvas.
pub fn render(ctx: &CanvasRenderingContext2d, commands: &[DrawCommand]) {
	for command in commands {
		match command {
			DrawCommand::Clear { width, height } => ctx.clear_rect(0.0, 0.0, *width, *height),
			DrawCommand::Lane { points, line_width } => draw_lane(ctx, points, *line_width),
			DrawCommand::Edge {
				from,
				to,
				tone,
				alpha,
				line_width,
			} => draw_edge(ctx, *from, *to, *tone, *alpha, *line_width),
			DrawCommand::Node {
				x,
				y,
				radius,
				glow_radius,
				tone,
			} => {
				// A failed node is skipped; the rest of the frame still draws.
				if let Err(e) = draw_node(ctx, *x, *y, *radius, *glow_radius, *tone) {
					if !NODE_FAILURE_LOGGED.swap(true, Ordering::Relaxed) {
						log::debug!("ambient background: node not drawn: {e:?}");
					}
				}
			}
		}
	}
}

fn draw_lane(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)], line_width: f64) {
	let Some((&(x0, y0), rest)) = points.split_first() else {
		return;
	};
	ctx.save();
	ctx.set_line_width(line_width);
	ctx.set_stroke_style_str(LANE_STROKE);
	ctx.begin_path();
	ctx.move_to(x0, y0);
	for &(x, y) in rest {
		ctx.line_to(x, y);
	}
	ctx.stroke();
	ctx.restore();
}

fn draw_edge(
	ctx: &CanvasRenderingContext2d,
	(x1, y1): (f64, f64),
	(x2, y2): (f64, f64),
	tone: NodeTone,
	alpha: f64,
	line_width: f64,
) {
	ctx.set_stroke_style_str(&tone.rgba(alpha));
	ctx.set_line_width(line_width);
	ctx.begin_path();
	ctx.move_to(x1, y1);
	ctx.line_to(x2, y2);
	ctx.stroke();
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	x: f64,
	y: f64,
	radius: f64,
	glow_radius: f64,
	tone: NodeTone,
) -> Result<(), JsValue> {
	let gradient = ctx.create_radial_gradient(x, y, 0.0, x, y, glow_radius)?;
	gradient.add_color_stop(0.0, &tone.rgba(NODE_CORE_ALPHA))?;
	gradient.add_color_stop(1.0, &tone.rgba(0.0))?;

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.begin_path();
	ctx.arc(x, y, radius, 0.0, 2.0 * PI)?;
	ctx.fill();
	Ok(())
}
