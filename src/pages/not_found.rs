use leptos::prelude::*;

use crate::components::particle_field::{FieldConfig, ParticleFieldCanvas};

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<ParticleFieldCanvas config={FieldConfig::starfield()} />
		<div class="page-overlay">
			<h1>"Uh oh!" <br /> "We couldn't find that page!"</h1>
		</div>
	}
}
