//! SVG wave layer driven by a frame-capped animation loop.
//!
//! The component owns a fixed pool of `<path>` handles, one per curve,
//! created once on mount. Each rendered frame recomputes every curve's
//! `d` attribute from its config and the elapsed wall-clock time; the
//! loop and its clock are torn down when the component drops, so a later
//! remount starts the animation phase at zero.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use super::waves::{FrameClock, WAVE_COLORS, WavePathConfig, wave_path_d};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

fn create_svg_element(document: &Document, name: &str) -> Element {
	document.create_element_ns(Some(SVG_NS), name).unwrap()
}

/// Build the per-curve stroke gradient: dim at the edges, vivid mid-span,
/// with the palette rotated so neighbouring curves never share stops.
fn build_gradient(document: &Document, index: usize) -> Element {
	let gradient = create_svg_element(document, "linearGradient");
	let _ = gradient.set_attribute("id", &format!("wave-gradient-{index}"));
	let _ = gradient.set_attribute("x1", "0%");
	let _ = gradient.set_attribute("y1", "0%");
	let _ = gradient.set_attribute("x2", "100%");
	let _ = gradient.set_attribute("y2", "0%");

	let stops = [
		("0%", WAVE_COLORS[index % WAVE_COLORS.len()], "0.1"),
		("50%", WAVE_COLORS[(index + 2) % WAVE_COLORS.len()], "0.6"),
		("100%", WAVE_COLORS[(index + 4) % WAVE_COLORS.len()], "0.1"),
	];
	for (offset, color, opacity) in stops {
		let stop = create_svg_element(document, "stop");
		let _ = stop.set_attribute("offset", offset);
		let _ = stop.set_attribute("stop-color", color);
		let _ = stop.set_attribute("stop-opacity", opacity);
		let _ = gradient.append_child(&stop);
	}
	gradient
}

fn build_glow_filter(document: &Document, opacity_scale: f64) -> Element {
	let filter = create_svg_element(document, "filter");
	let _ = filter.set_attribute("id", "wave-glow");
	let _ = filter.set_attribute("x", "-50%");
	let _ = filter.set_attribute("y", "-50%");
	let _ = filter.set_attribute("width", "200%");
	let _ = filter.set_attribute("height", "200%");

	let blur = create_svg_element(document, "feGaussianBlur");
	let deviation = if opacity_scale < 1.0 { "0.2" } else { "0.3" };
	let _ = blur.set_attribute("stdDeviation", deviation);
	let _ = blur.set_attribute("result", "blur");
	let _ = filter.append_child(&blur);

	let merge = create_svg_element(document, "feMerge");
	for input in ["blur", "SourceGraphic"] {
		let node = create_svg_element(document, "feMergeNode");
		let _ = node.set_attribute("in", input);
		let _ = merge.append_child(&node);
	}
	let _ = filter.append_child(&merge);
	filter
}

/// Flowing colored waves across the background.
///
/// Callers skip this component entirely when the profile disables waves;
/// with a zero `path_count` nothing would be drawn and no loop started.
#[component]
pub fn WaveLayer(
	path_count: usize,
	segments: usize,
	max_fps: f64,
	opacity_scale: f64,
) -> impl IntoView {
	let host_ref = NodeRef::<leptos::html::Div>::new();

	let animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
	let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let clock = Rc::new(RefCell::new(FrameClock::new(max_fps)));
	let (animate_init, raf_id_init, clock_init) = (animate.clone(), raf_id.clone(), clock.clone());

	Effect::new(move |_| {
		let Some(host) = host_ref.get() else {
			return;
		};
		let host: web_sys::HtmlDivElement = host.into();
		if path_count == 0 || host.first_child().is_some() {
			return;
		}
		let window = web_sys::window().unwrap();
		let document = window.document().unwrap();

		let svg = create_svg_element(&document, "svg");
		let _ = svg.set_attribute("class", "wave-layer");
		let _ = svg.set_attribute("viewBox", "0 0 100 100");
		let _ = svg.set_attribute("preserveAspectRatio", "none");

		let defs = create_svg_element(&document, "defs");
		for index in 0..path_count {
			let _ = defs.append_child(&build_gradient(&document, index));
		}
		let _ = defs.append_child(&build_glow_filter(&document, opacity_scale));
		let _ = svg.append_child(&defs);

		let configs: Vec<WavePathConfig> = (0..path_count)
			.map(|index| WavePathConfig::for_index(index, opacity_scale))
			.collect();

		let mut paths = Vec::with_capacity(path_count);
		for (index, config) in configs.iter().enumerate() {
			let path = create_svg_element(&document, "path");
			let _ = path.set_attribute("fill", "none");
			let _ = path.set_attribute("stroke", &format!("url(#wave-gradient-{index})"));
			let _ = path.set_attribute("stroke-width", &config.stroke_width.to_string());
			let _ = path.set_attribute("stroke-linecap", "round");
			let _ = path.set_attribute("filter", "url(#wave-glow)");
			let _ = path.set_attribute("opacity", &config.opacity.to_string());
			let _ = svg.append_child(&path);
			paths.push(path);
		}
		let _ = host.append_child(&svg);

		let (animate_inner, raf_inner, clock_anim) =
			(animate_init.clone(), raf_id_init.clone(), clock_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move |now: f64| {
			if let Some(elapsed) = clock_anim.borrow_mut().tick(now) {
				for (config, path) in configs.iter().zip(&paths) {
					let _ = path.set_attribute("d", &wave_path_d(config, segments, elapsed));
				}
			}
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

	let cleanup_handles = SendWrapper::new((raf_id, animate, clock));
	on_cleanup(move || {
		let (raf_id, animate, clock) = cleanup_handles.take();
		if let Some(id) = raf_id.take() {
			let _ = web_sys::window().unwrap().cancel_animation_frame(id);
		}
		animate.borrow_mut().take();
		clock.borrow_mut().reset();
	});

	view! { <div node_ref=host_ref class="wave-layer-host"></div> }
}
