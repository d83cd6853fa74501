//! Profile selection and layer composition for the background.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{MediaQueryList, MediaQueryListEvent};

use super::layers::{
	AuroraBands, FloatingOrb, GridLines, MorphingBlobs, NoiseTexture, ParticleField, PulsingRings,
	Vignette,
};
use super::pointer::MouseFollower;
use super::profile::{CapabilityProfile, ProfileVariant, select_profile};
use super::wave_layer::WaveLayer;

/// Reactive boolean signal for a media query.
///
/// Subscribes to `change` events so the value tracks live environment
/// changes (OS accessibility toggles, docking a touch device). A host
/// without `matchMedia` reads as a permanent `false`, which selects the
/// default tier rather than erroring.
fn use_media_query(query: &'static str) -> ReadSignal<bool> {
	let (matches, set_matches) = signal(false);

	let list: Rc<RefCell<Option<MediaQueryList>>> = Rc::new(RefCell::new(None));
	let on_change: Rc<RefCell<Option<Closure<dyn FnMut(MediaQueryListEvent)>>>> =
		Rc::new(RefCell::new(None));
	let (list_init, on_change_init) = (list.clone(), on_change.clone());

	Effect::new(move |_| {
		let window = web_sys::window().unwrap();
		let Ok(Some(media)) = window.match_media(query) else {
			debug!("media query unavailable, treating {query:?} as non-matching");
			return;
		};
		set_matches.set(media.matches());

		let cb: Closure<dyn FnMut(MediaQueryListEvent)> =
			Closure::new(move |ev: MediaQueryListEvent| set_matches.set(ev.matches()));
		let _ = media.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
		*on_change_init.borrow_mut() = Some(cb);
		*list_init.borrow_mut() = Some(media);
	});

	let cleanup_handles = SendWrapper::new((list, on_change));
	on_cleanup(move || {
		let (list, on_change) = cleanup_handles.take();
		if let (Some(media), Some(cb)) = (list.borrow_mut().take(), on_change.borrow_mut().take())
		{
			let _ =
				media.remove_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
		}
	});

	matches
}

fn full_stack(profile: CapabilityProfile) -> impl IntoView {
	view! {
		<AuroraBands blur_px=profile.band_blur_px />
		<MorphingBlobs scale=profile.blob_scale />

		<FloatingOrb
			size={600.0 * profile.blob_scale}
			color="radial-gradient(circle, oklch(0.45 0.15 200) 0%, transparent 70%)"
			initial_x="10%"
			initial_y="20%"
			duration_s=25.0
			blur_px=profile.orb_blur_px
		/>
		<FloatingOrb
			size={500.0 * profile.blob_scale}
			color="radial-gradient(circle, oklch(0.5 0.12 280) 0%, transparent 70%)"
			initial_x="60%"
			initial_y="50%"
			duration_s=30.0
			blur_px=profile.orb_blur_px
		/>
		<FloatingOrb
			size={400.0 * profile.blob_scale}
			color="radial-gradient(circle, oklch(0.4 0.1 160) 0%, transparent 70%)"
			initial_x="30%"
			initial_y="70%"
			duration_s=20.0
			blur_px=profile.orb_blur_px
		/>

		{(profile.wave_path_count > 0)
			.then(|| {
				view! {
					<WaveLayer
						path_count=profile.wave_path_count
						segments=profile.wave_segments
						max_fps=profile.wave_max_fps
						opacity_scale=profile.wave_opacity_scale
					/>
				}
			})}

		<PulsingRings scale=profile.ring_scale />
		<GridLines opacity=profile.grid_opacity />
		<ParticleField count=profile.particles />

		{profile.show_mouse_follower.then(|| view! { <MouseFollower /> })}

		<NoiseTexture />
		<Vignette />
	}
}

fn reduced_stack(profile: CapabilityProfile) -> impl IntoView {
	view! {
		<div class="static-gradient"></div>
		<GridLines opacity=profile.grid_opacity />
		<Vignette />
	}
}

/// The animated decorative background behind every page.
///
/// Re-selects its [`CapabilityProfile`] whenever the reduced-motion or
/// pointer-type signal changes, rebuilding the layer stack under the new
/// parameters; the swap tears down any running animation loops.
#[component]
pub fn AnimatedBackground() -> impl IntoView {
	let reduced_motion = use_media_query("(prefers-reduced-motion: reduce)");
	let coarse_pointer = use_media_query("(hover: none), (pointer: coarse)");

	let profile = Memo::new(move |_| select_profile(reduced_motion.get(), coarse_pointer.get()));

	view! {
		<div class="background-root">
			{move || {
				let profile = profile.get();
				debug!("background profile: {:?}", profile.variant);
				match profile.variant {
					ProfileVariant::Reduced => reduced_stack(profile).into_any(),
					_ => full_stack(profile).into_any(),
				}
			}}
		</div>
	}
}
