use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use super::mount::{BackgroundHandle, mount};
use super::types::AmbientConfig;

/// Full-viewport animated backdrop of drifting, linked nodes over flow lanes.
#[component]
pub fn AmbientGraphCanvas(
	#[prop(optional)] config: AmbientConfig,
	#[prop(into, default = "ambient-bg".into())] id: String,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |previous: Option<Option<BackgroundHandle>>| {
		if let Some(Some(handle)) = previous {
			if let Err(e) = handle.stop() {
				log::warn!("ambient background: {e}");
			}
		}
		let canvas: Option<HtmlCanvasElement> = canvas_ref.get().map(Into::into);
		mount(canvas, config.clone())
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id=id
			class="ambient-graph-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; display: block; pointer-events: none; z-index: -1;"
		/>
	}
}
