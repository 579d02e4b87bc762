//! Ownership of a running particle field: frame scheduling, resize handling
//! and teardown.
//!
//! [`Animation::mount`] acquires everything (first frame request, resize
//! listener) and [`Animation::teardown`] releases it again. Dropping the
//! `Animation` tears down as well, so an unmounted component can never leave
//! a frame callback or listener behind.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info};

use super::config::FieldConfig;
use super::render::render;
use super::state::FieldState;
use super::surface::Surface;

/// The environment a field runs in: frame scheduling, resize notifications
/// and the viewport size.
pub trait Host {
	/// Host-side handle for a Rust callback.
	type Callback;

	fn wrap(&self, callback: Box<dyn FnMut()>) -> Self::Callback;
	/// Run `callback` once before the next repaint.
	fn request_frame(&self, callback: &Self::Callback) -> Option<i32>;
	fn cancel_frame(&self, handle: i32);
	fn viewport_size(&self) -> (f64, f64);
	fn listen_resize(&self, callback: &Self::Callback);
	fn unlisten_resize(&self, callback: &Self::Callback);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	/// A frame is always pending.
	Running,
	/// Listener attached, no frame pending.
	Paused,
	/// Nothing attached, nothing pending.
	Unmounted,
}

struct Shared<H: Host, S: Surface> {
	host: H,
	surface: S,
	field: RefCell<FieldState>,
	phase: Cell<Phase>,
	pending: Cell<Option<i32>>,
	drawn: Cell<bool>,
	on_frame: RefCell<Option<H::Callback>>,
	on_resize: RefCell<Option<H::Callback>>,
}

impl<H: Host, S: Surface> Shared<H, S> {
	fn frame(&self) {
		self.pending.set(None);
		if self.phase.get() != Phase::Running {
			return;
		}
		{
			let mut field = self.field.borrow_mut();
			field.tick();
			self.draw(&field);
		}
		// Teardown may have run while drawing.
		if self.phase.get() == Phase::Running {
			self.schedule();
		}
	}

	fn schedule(&self) {
		if self.pending.get().is_some() {
			return;
		}
		if let Some(callback) = self.on_frame.borrow().as_ref() {
			self.pending.set(self.host.request_frame(callback));
		}
	}

	fn cancel(&self) {
		if let Some(handle) = self.pending.take() {
			self.host.cancel_frame(handle);
		}
	}

	fn resize(&self) {
		if self.phase.get() == Phase::Unmounted {
			return;
		}
		let (width, height) = self.host.viewport_size();
		self.surface.set_size(width, height);
		let mut field = self.field.borrow_mut();
		field.regenerate(width, height);
		// Resizing wipes the bitmap; a paused field would otherwise stay blank.
		if self.phase.get() == Phase::Paused {
			self.draw(&field);
		}
	}

	fn draw(&self, field: &FieldState) {
		render(field, &self.surface);
		self.drawn.set(true);
	}
}

/// A mounted particle field.
pub struct Animation<H: Host, S: Surface> {
	shared: Rc<Shared<H, S>>,
}

impl<H: Host + 'static, S: Surface + 'static> Animation<H, S> {
	/// Size `surface` to the viewport, seed the field, attach the resize
	/// listener and schedule the first frame.
	pub fn mount(host: H, surface: S, config: FieldConfig) -> Self {
		let (width, height) = host.viewport_size();
		surface.set_size(width, height);
		let shared = Rc::new(Shared {
			field: RefCell::new(FieldState::new(config, width, height)),
			host,
			surface,
			phase: Cell::new(Phase::Running),
			pending: Cell::new(None),
			drawn: Cell::new(false),
			on_frame: RefCell::new(None),
			on_resize: RefCell::new(None),
		});

		// Callbacks hold weak references so the host never keeps the field alive.
		let weak = Rc::downgrade(&shared);
		let on_frame = shared.host.wrap(Box::new(move || {
			if let Some(shared) = weak.upgrade() {
				shared.frame();
			}
		}));
		*shared.on_frame.borrow_mut() = Some(on_frame);

		let weak = Rc::downgrade(&shared);
		let on_resize = shared.host.wrap(Box::new(move || {
			if let Some(shared) = weak.upgrade() {
				shared.resize();
			}
		}));
		shared.host.listen_resize(&on_resize);
		*shared.on_resize.borrow_mut() = Some(on_resize);

		shared.schedule();
		info!("particle field mounted at {width}x{height}");
		Self { shared }
	}
}

impl<H: Host, S: Surface> Animation<H, S> {
	#[cfg(test)]
	pub fn phase(&self) -> Phase {
		self.shared.phase.get()
	}

	/// Pausing cancels the pending frame; resuming schedules a new one. A
	/// field paused before its first frame draws one still frame.
	pub fn set_paused(&self, paused: bool) {
		let shared = &self.shared;
		match (shared.phase.get(), paused) {
			(Phase::Running, true) => {
				shared.phase.set(Phase::Paused);
				shared.cancel();
				if !shared.drawn.get() {
					shared.draw(&shared.field.borrow());
				}
				debug!("particle field paused");
			}
			(Phase::Paused, false) => {
				shared.phase.set(Phase::Running);
				shared.schedule();
				debug!("particle field resumed");
			}
			_ => {}
		}
	}

	/// Read access to the simulation.
	#[cfg(test)]
	pub fn with_field<T>(&self, f: impl FnOnce(&FieldState) -> T) -> T {
		f(&self.shared.field.borrow())
	}

	/// Remove the resize listener and cancel the pending frame. Safe to call
	/// any number of times.
	pub fn teardown(&self) {
		let shared = &self.shared;
		if shared.phase.replace(Phase::Unmounted) == Phase::Unmounted {
			return;
		}
		shared.cancel();
		if let Some(callback) = shared.on_resize.borrow().as_ref() {
			shared.host.unlisten_resize(callback);
		}
		info!("particle field torn down");
	}
}

impl<H: Host, S: Surface> Drop for Animation<H, S> {
	fn drop(&mut self) {
		self.teardown();
	}
}
