//! Device-pixel-ratio aware surface sizing.

use web_sys::HtmlCanvasElement;

use super::error::SurfaceError;
use super::types::Viewport;

/// Clamps a reported device pixel ratio to `max`.
///
/// Hosts that report no usable ratio (NaN, zero, negative) are treated as 1.
pub fn effective_pixel_ratio(raw: f64, max: f64) -> f64 {
	if !raw.is_finite() || raw <= 0.0 {
		return 1.0;
	}
	raw.min(max)
}

/// Resolved drawing surface dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
	/// Backing-store width in device pixels.
	pub width: f64,
	/// Backing-store height in device pixels.
	pub height: f64,
	/// CSS width, unscaled.
	pub css_width: f64,
	/// CSS height, unscaled.
	pub css_height: f64,
	/// Effective (clamped) device pixel ratio.
	pub dpr: f64,
}

impl SurfaceSize {
	pub fn resolve(viewport: Viewport, max_pixel_ratio: f64) -> Self {
		let dpr = effective_pixel_ratio(viewport.device_pixel_ratio, max_pixel_ratio);
		let css_width = viewport.width.max(0.0);
		let css_height = viewport.height.max(0.0);
		Self {
			width: (css_width * dpr).floor(),
			height: (css_height * dpr).floor(),
			css_width,
			css_height,
			dpr,
		}
	}
}

/// Sizes the canvas backing store in device pixels and its CSS box in
/// viewport pixels.
///
/// # Errors
///
/// Returns [`SurfaceError::Style`] if the CSS size cannot be applied.
pub fn apply_to_canvas(canvas: &HtmlCanvasElement, size: &SurfaceSize) -> Result<(), SurfaceError> {
	canvas.set_width(size.width as u32);
	canvas.set_height(size.height as u32);

	let style = canvas.style();
	style
		.set_property("width", &format!("{}px", size.css_width))
		.map_err(|e| SurfaceError::Style(format!("{e:?}")))?;
	style
		.set_property("height", &format!("{}px", size.css_height))
		.map_err(|e| SurfaceError::Style(format!("{e:?}")))?;
	Ok(())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
	#![allow(clippy::expect_used)]

	use wasm_bindgen::JsCast;
	use wasm_bindgen_test::*;

	use super::*;

	wasm_bindgen_test_configure!(run_in_browser);

	#[wasm_bindgen_test]
	fn apply_sets_backing_store_and_css_box() {
		let document = web_sys::window()
			.and_then(|w| w.document())
			.expect("document");
		let canvas = document
			.create_element("canvas")
			.expect("create canvas")
			.dyn_into::<HtmlCanvasElement>()
			.expect("canvas element");

		let size = SurfaceSize::resolve(Viewport::new(640.0, 480.0, 2.0), 2.0);
		apply_to_canvas(&canvas, &size).expect("apply size");

		assert_eq!(canvas.width(), 1280);
		assert_eq!(canvas.height(), 960);
		let style = canvas.style();
		assert_eq!(style.get_property_value("width").ok().as_deref(), Some("640px"));
		assert_eq!(style.get_property_value("height").ok().as_deref(), Some("480px"));
	}
}
