//! Pointer-follow glow with damped-spring smoothing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

/// One-dimensional damped spring.
///
/// Overdamped at the configured constants, so the glow eases toward the
/// pointer without overshooting or oscillating.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
	stiffness: f64,
	damping: f64,
	position: f64,
	velocity: f64,
}

impl Spring {
	/// A spring at rest at the origin.
	pub fn new(stiffness: f64, damping: f64) -> Self {
		Self {
			stiffness,
			damping,
			position: 0.0,
			velocity: 0.0,
		}
	}

	/// Current smoothed position.
	pub fn position(&self) -> f64 {
		self.position
	}

	/// Advance the spring by `dt` seconds toward `target`.
	pub fn step(&mut self, target: f64, dt: f64) -> f64 {
		let accel = self.stiffness * (target - self.position) - self.damping * self.velocity;
		self.velocity += accel * dt;
		self.position += self.velocity * dt;
		self.position
	}
}

/// Overdamped constants, so the glow trails without wobbling.
const GLOW_STIFFNESS: f64 = 45.0;
const GLOW_DAMPING: f64 = 22.0;

/// Half the glow diameter; the disc is centered on the pointer.
const GLOW_OFFSET: f64 = 200.0;

/// Soft glow that trails the pointer.
///
/// The mousemove listener only records the latest target; an animation
/// loop advances two springs toward it and writes the element transform.
/// Listener and loop are torn down when the component drops.
#[component]
pub fn MouseFollower() -> impl IntoView {
	let glow_ref = NodeRef::<leptos::html::Div>::new();

	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let on_move: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> = Rc::new(RefCell::new(None));
	let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let target: Rc<Cell<(f64, f64)>> = Rc::new(Cell::new((0.0, 0.0)));

	let (animate_init, on_move_init, raf_id_init, target_init) = (
		animate.clone(),
		on_move.clone(),
		raf_id.clone(),
		target.clone(),
	);

	Effect::new(move |_| {
		let Some(glow) = glow_ref.get() else {
			return;
		};
		if raf_id_init.get().is_some() {
			return;
		}
		let glow: web_sys::HtmlDivElement = glow.into();
		let window = web_sys::window().unwrap();

		let target_move = target_init.clone();
		*on_move_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			target_move.set((
				f64::from(ev.client_x()) - GLOW_OFFSET,
				f64::from(ev.client_y()) - GLOW_OFFSET,
			));
		}));
		if let Some(ref cb) = *on_move_init.borrow() {
			let _ = window
				.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let mut spring_x = Spring::new(GLOW_STIFFNESS, GLOW_DAMPING);
		let mut spring_y = Spring::new(GLOW_STIFFNESS, GLOW_DAMPING);
		let (animate_inner, raf_inner, target_anim) = (
			animate_init.clone(),
			raf_id_init.clone(),
			target_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let dt = 0.016;
			let (tx, ty) = target_anim.get();
			let x = spring_x.step(tx, dt);
			let y = spring_y.step(ty, dt);
			let _ = web_sys::HtmlElement::style(&glow)
				.set_property("transform", &format!("translate({x}px, {y}px)"));

			if let Some(ref cb) = *animate_inner.borrow() {
				raf_inner.set(
					web_sys::window()
						.unwrap()
						.request_animation_frame(cb.as_ref().unchecked_ref())
						.ok(),
				);
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			raf_id_init.set(
				window
					.request_animation_frame(cb.as_ref().unchecked_ref())
					.ok(),
			);
		}
	});

	let cleanup_handles = SendWrapper::new((raf_id, on_move, animate));
	on_cleanup(move || {
		let (raf_id, on_move, animate) = cleanup_handles.take();
		let window = web_sys::window().unwrap();
		if let Some(id) = raf_id.take() {
			let _ = window.cancel_animation_frame(id);
		}
		if let Some(cb) = on_move.borrow_mut().take() {
			let _ = window
				.remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}
		animate.borrow_mut().take();
	});

	view! { <div node_ref=glow_ref class="mouse-follower"></div> }
}

#[cfg(test)]
mod tests {
	use super::{GLOW_DAMPING, GLOW_STIFFNESS, Spring};

	#[test]
	fn spring_converges_to_target() {
		let mut spring = Spring::new(GLOW_STIFFNESS, GLOW_DAMPING);
		for _ in 0..600 {
			spring.step(100.0, 1.0 / 60.0);
		}
		assert!((spring.position() - 100.0).abs() < 1.0);
	}

	#[test]
	fn spring_does_not_overshoot() {
		let mut spring = Spring::new(GLOW_STIFFNESS, GLOW_DAMPING);
		for _ in 0..600 {
			let pos = spring.step(100.0, 1.0 / 60.0);
			assert!(pos <= 100.5, "overshot to {pos}");
		}
	}

	#[test]
	fn redundant_identical_targets_are_idempotent() {
		let mut a = Spring::new(GLOW_STIFFNESS, GLOW_DAMPING);
		let mut b = Spring::new(GLOW_STIFFNESS, GLOW_DAMPING);
		for _ in 0..120 {
			a.step(50.0, 1.0 / 60.0);
		}
		// Same target set once vs. re-set every frame: same trajectory.
		for _ in 0..120 {
			b.step(50.0, 1.0 / 60.0);
		}
		assert_eq!(a.position(), b.position());
	}
}
