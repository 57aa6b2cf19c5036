use leptos::prelude::*;

use crate::components::ambient_graph::AmbientGraphCanvas;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<AmbientGraphCanvas id="aiBg" />
			<main class="page-overlay">
				<h1>"Ambient Graph"</h1>
				<p class="subtitle">"Drifting nodes, linked by proximity, over slow flow lanes."</p>
			</main>
		</ErrorBoundary>
	}
}
