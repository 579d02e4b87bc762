use leptos::prelude::*;
use log::warn;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::browser::BrowserHost;
use super::config::FieldConfig;
use super::lifecycle::Animation;
use super::surface::acquire_context;

const FULLSCREEN_STYLE: &str = "position: fixed; inset: 0; display: block; pointer-events: none;";
const CONTAINED_STYLE: &str = "position: absolute; inset: 0; display: block; pointer-events: none;";

/// Animated background canvas. Never intercepts input; renders nothing when
/// no 2d context is available.
#[component]
pub fn ParticleFieldCanvas(
	/// Motif and tuning; read once at mount.
	#[prop(default = FieldConfig::starfield())]
	config: FieldConfig,
	/// Cover the viewport instead of the positioned parent.
	#[prop(default = true)]
	fullscreen: bool,
	/// Freeze the animation on its current frame.
	#[prop(into, default = Signal::stored(false))]
	paused: Signal<bool>,
	/// Extra CSS classes for the canvas.
	#[prop(into, optional)]
	class: String,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let style = if fullscreen { FULLSCREEN_STYLE } else { CONTAINED_STYLE };
	let animation = StoredValue::new_local(None::<Animation<BrowserHost, CanvasRenderingContext2d>>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let attached = BrowserHost::new(&canvas, fullscreen)
			.and_then(|host| Ok((host, acquire_context(&canvas)?)));

		match attached {
			Ok((host, ctx)) => {
				let mounted = Animation::mount(host, ctx, config.clone());
				mounted.set_paused(paused.get_untracked());
				// Replacing a previous instance drops it, which tears it down.
				animation.set_value(Some(mounted));
			}
			Err(err) => warn!("particle field disabled: {err}"),
		}
	});

	Effect::new(move |_| {
		let paused = paused.get();
		animation.with_value(|mounted| {
			if let Some(mounted) = mounted {
				mounted.set_paused(paused);
			}
		});
	});

	on_cleanup(move || {
		let _ = animation.try_update_value(Option::take);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class=class
			aria-hidden="true"
			style=style
		/>
	}
}
