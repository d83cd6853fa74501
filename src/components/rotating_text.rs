//! Rotating wordmark for the home hero.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;

const TEXTS: [&str; 3] = ["いねにこ", "inenico", "inenico.dev"];
const INTERVAL_MS: i32 = 3000;
const LETTER_DELAY_S: f64 = 0.03;

/// Cycles through the wordmark variants on a fixed interval, animating
/// each letter in with a small stagger. The interval is cancelled when
/// the component drops.
#[component]
pub fn RotatingText() -> impl IntoView {
	let (index, set_index) = signal(0usize);

	let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let timer_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let (tick_init, timer_init) = (tick.clone(), timer_id.clone());

	Effect::new(move |_| {
		if timer_init.get().is_some() {
			return;
		}
		let window = web_sys::window().unwrap();
		*tick_init.borrow_mut() = Some(Closure::new(move || {
			set_index.update(|i| *i = (*i + 1) % TEXTS.len());
		}));
		if let Some(ref cb) = *tick_init.borrow() {
			timer_init.set(
				window
					.set_interval_with_callback_and_timeout_and_arguments_0(
						cb.as_ref().unchecked_ref(),
						INTERVAL_MS,
					)
					.ok(),
			);
		}
	});

	let cleanup_handles = SendWrapper::new((timer_id, tick));
	on_cleanup(move || {
		let (timer_id, tick) = cleanup_handles.take();
		if let Some(id) = timer_id.take() {
			web_sys::window().unwrap().clear_interval_with_handle(id);
		}
		tick.borrow_mut().take();
	});

	view! {
		<span class="rotating-text">
			{move || {
				TEXTS[index.get()]
					.chars()
					.enumerate()
					.map(|(i, ch)| {
						view! {
							<span
								class="rotating-letter"
								style=format!("animation-delay: {}s", i as f64 * LETTER_DELAY_S)
							>
								{ch.to_string()}
							</span>
						}
					})
					.collect_view()
			}}
		</span>
	}
}
