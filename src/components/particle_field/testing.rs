//! Native stand-ins for the browser, used by the unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::lifecycle::Host;
use super::surface::{Paint, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
	SetSize(f64, f64),
	Clear,
	FillRect(Paint),
	Circle { x: f64, y: f64, radius: f64, paint: Paint },
	Line { from: (f64, f64), to: (f64, f64), paint: Paint },
	Path(usize),
	Dash(Vec<f64>),
}

/// Surface that records every call. Clones share the log.
#[derive(Clone, Default)]
pub struct RecordingSurface {
	ops: Rc<RefCell<Vec<Op>>>,
}

impl RecordingSurface {
	pub fn ops(&self) -> Vec<Op> {
		self.ops.borrow().clone()
	}

	pub fn clear_ops(&self) {
		self.ops.borrow_mut().clear();
	}

	fn record(&self, op: Op) {
		self.ops.borrow_mut().push(op);
	}
}

impl Surface for RecordingSurface {
	fn set_size(&self, width: f64, height: f64) {
		self.record(Op::SetSize(width, height));
	}

	fn clear(&self, _: f64, _: f64) {
		self.record(Op::Clear);
	}

	fn fill_rect(&self, _: f64, _: f64, _: f64, _: f64, paint: &Paint) {
		self.record(Op::FillRect(paint.clone()));
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, paint: &Paint) {
		self.record(Op::Circle {
			x,
			y,
			radius,
			paint: paint.clone(),
		});
	}

	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), _: f64, paint: &Paint) {
		self.record(Op::Line {
			from,
			to,
			paint: paint.clone(),
		});
	}

	fn stroke_path(&self, points: &[(f64, f64)], _: f64, _: &Paint) {
		self.record(Op::Path(points.len()));
	}

	fn set_line_dash(&self, segments: &[f64], _: f64) {
		self.record(Op::Dash(segments.to_vec()));
	}
}

type Callback = Rc<RefCell<Box<dyn FnMut()>>>;

#[derive(Default)]
struct ManualState {
	size: Cell<(f64, f64)>,
	next_handle: Cell<i32>,
	queued: RefCell<Vec<(i32, Callback)>>,
	cancelled: Cell<usize>,
	listeners: RefCell<Vec<Callback>>,
	last_frame: RefCell<Option<Callback>>,
}

/// Host whose frames only run when the test says so. Clones share state.
#[derive(Clone, Default)]
pub struct ManualHost {
	state: Rc<ManualState>,
}

impl ManualHost {
	pub fn new(width: f64, height: f64) -> Self {
		let host = Self::default();
		host.state.size.set((width, height));
		host
	}

	pub fn pending(&self) -> usize {
		self.state.queued.borrow().len()
	}

	pub fn cancelled(&self) -> usize {
		self.state.cancelled.get()
	}

	pub fn listeners(&self) -> usize {
		self.state.listeners.borrow().len()
	}

	/// Run the oldest queued frame. False when nothing was queued.
	pub fn run_frame(&self) -> bool {
		let next = {
			let mut queued = self.state.queued.borrow_mut();
			if queued.is_empty() {
				return false;
			}
			queued.remove(0)
		};
		(next.1.borrow_mut())();
		true
	}

	/// Invoke the most recently requested frame callback even though it was
	/// cancelled, as a browser might for a frame already in flight.
	pub fn fire_stale_frame(&self) {
		let stale = self.state.last_frame.borrow().clone();
		if let Some(callback) = stale {
			(callback.borrow_mut())();
		}
	}

	pub fn resize(&self, width: f64, height: f64) {
		self.state.size.set((width, height));
		let listeners = self.state.listeners.borrow().clone();
		for listener in listeners {
			(listener.borrow_mut())();
		}
	}
}

impl Host for ManualHost {
	type Callback = Callback;

	fn wrap(&self, callback: Box<dyn FnMut()>) -> Callback {
		Rc::new(RefCell::new(callback))
	}

	fn request_frame(&self, callback: &Callback) -> Option<i32> {
		let handle = self.state.next_handle.get();
		self.state.next_handle.set(handle + 1);
		self.state.queued.borrow_mut().push((handle, callback.clone()));
		*self.state.last_frame.borrow_mut() = Some(callback.clone());
		Some(handle)
	}

	fn cancel_frame(&self, handle: i32) {
		self.state.queued.borrow_mut().retain(|(h, _)| *h != handle);
		self.state.cancelled.set(self.state.cancelled.get() + 1);
	}

	fn viewport_size(&self) -> (f64, f64) {
		self.state.size.get()
	}

	fn listen_resize(&self, callback: &Callback) {
		self.state.listeners.borrow_mut().push(callback.clone());
	}

	fn unlisten_resize(&self, callback: &Callback) {
		self.state.listeners.borrow_mut().retain(|l| !Rc::ptr_eq(l, callback));
	}
}
