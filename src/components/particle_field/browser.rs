use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlCanvasElement, Window};

use super::error::SurfaceError;
use super::lifecycle::Host;

/// [`Host`] backed by the browser window.
pub struct BrowserHost {
	window: Window,
	/// Element whose size the canvas follows; the window when `None`.
	container: Option<Element>,
}

impl BrowserHost {
	pub fn new(canvas: &HtmlCanvasElement, fullscreen: bool) -> Result<Self, SurfaceError> {
		let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
		let container = if fullscreen {
			None
		} else {
			canvas.parent_element()
		};
		Ok(Self { window, container })
	}
}

impl Host for BrowserHost {
	type Callback = Closure<dyn FnMut()>;

	fn wrap(&self, callback: Box<dyn FnMut()>) -> Self::Callback {
		Closure::wrap(callback)
	}

	fn request_frame(&self, callback: &Self::Callback) -> Option<i32> {
		self.window
			.request_animation_frame(callback.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel_frame(&self, handle: i32) {
		let _ = self.window.cancel_animation_frame(handle);
	}

	fn viewport_size(&self) -> (f64, f64) {
		match &self.container {
			Some(parent) => (parent.client_width() as f64, parent.client_height() as f64),
			None => (
				self.window
					.inner_width()
					.ok()
					.and_then(|w| w.as_f64())
					.unwrap_or(0.0),
				self.window
					.inner_height()
					.ok()
					.and_then(|h| h.as_f64())
					.unwrap_or(0.0),
			),
		}
	}

	fn listen_resize(&self, callback: &Self::Callback) {
		let _ = self
			.window
			.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
	}

	fn unlisten_resize(&self, callback: &Self::Callback) {
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
	}
}
