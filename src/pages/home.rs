use leptos::prelude::*;

use crate::components::particle_field::{FieldConfig, ParticleFieldCanvas};

/// One contained background with a caption on top.
#[component]
fn Showcase(config: FieldConfig, title: &'static str, caption: &'static str) -> impl IntoView {
	let (paused, set_paused) = signal(false);

	view! {
		<section class="showcase" style="position: relative; min-height: 60vh; overflow: hidden;">
			<ParticleFieldCanvas config=config fullscreen=false paused=paused />
			<div class="showcase-overlay">
				<h2>{title}</h2>
				<p class="subtitle">{caption}</p>
				<button on:click=move |_| set_paused.update(|p| *p = !*p)>
					{move || if paused.get() { "Resume" } else { "Pause" }}
				</button>
			</div>
		</section>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ParticleFieldCanvas config={FieldConfig::starfield()} />
		<div class="page-overlay">
			<h1>"Particle Field Backgrounds"</h1>
			<p class="subtitle">"One engine, four motifs. Resize the window to regenerate."</p>
		</div>

		<Showcase
			config={FieldConfig::data_network()}
			title="Data network"
			caption="Random links; packets hop between nodes and are replaced on new edges."
		/>
		<Showcase
			config={FieldConfig::neural_network()}
			title="Neural network"
			caption="Layers of 6, 10, 8 and 6 neurons, fully connected to the next layer."
		/>
		<Showcase
			config={FieldConfig::process_flow()}
			title="Process flow"
			caption="Sparse stages joined by flowing dashed lines."
		/>
	}
}
