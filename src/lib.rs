//! inenico-site: a personal portfolio as a WASM single-page application.
//!
//! Four pages (home, about, works, contact) compose over a shared
//! [`AnimatedBackground`] whose quality tier adapts to the host's
//! reduced-motion and pointer-type signals. Content lists are static,
//! with an optional typed client for the microCMS content service.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
pub mod content;
pub mod data;
pub mod pages;

pub use components::background::{AnimatedBackground, CapabilityProfile, select_profile};

use components::nav::CreativeNav;
use pages::{AboutPage, ContactPage, HomePage, Route, WorksPage};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("inenico-site: logging initialized");
}

/// Main application component.
///
/// Holds the current [`Route`] in a signal; the nav overlay writes it,
/// the page view reads it. The background and nav mount once and persist
/// across page switches.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let route = RwSignal::new(Route::Home);
	let current_year = js_sys::Date::new_0().get_full_year();

	view! {
		<Html attr:lang="ja" attr:dir="ltr" attr:data-theme="dark" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Title text=move || route.get().title() />

		<AnimatedBackground />
		<CreativeNav route=route current_year=current_year />

		<main class="page">
			{move || match route.get() {
				Route::Home => view! { <HomePage route=route /> }.into_any(),
				Route::About => view! { <AboutPage /> }.into_any(),
				Route::Works => view! { <WorksPage /> }.into_any(),
				Route::Contact => view! { <ContactPage current_year=current_year /> }.into_any(),
			}}
		</main>
	}
}
