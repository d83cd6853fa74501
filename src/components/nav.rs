//! Creative navigation overlay: toggle button, logo chip, page
//! indicator, side-dot rail, and the full-screen menu.

use leptos::prelude::*;

use crate::data::NAV_ITEMS;
use crate::pages::Route;

/// Floating navigation chrome shared by every page.
///
/// Selecting a menu entry or dot writes the new route into the shared
/// signal and closes the overlay.
#[component]
pub fn CreativeNav(route: RwSignal<Route>, current_year: u32) -> impl IntoView {
	let (open, set_open) = signal(false);

	let current_index = move || {
		NAV_ITEMS
			.iter()
			.position(|item| item.route == route.get())
			.unwrap_or(0)
	};

	view! {
		<button
			type="button"
			aria-label="Menu button"
			class="nav-toggle"
			on:click=move |_| set_open.update(|o| *o = !*o)
		>
			{move || if open.get() { "✕" } else { "☰" }}
		</button>

		<button type="button" class="nav-logo" on:click=move |_| route.set(Route::Home)>
			"いねにこ"
		</button>

		<div class="nav-indicator">
			<span class="nav-indicator-current">
				{move || format!("{:02}", current_index() + 1)}
			</span>
			<span class="nav-indicator-sep">"/"</span>
			<span class="nav-indicator-total">{format!("{:02}", NAV_ITEMS.len())}</span>
		</div>

		<nav class="nav-dots">
			{NAV_ITEMS
				.iter()
				.map(|item| {
					let target = item.route;
					view! {
						<button
							type="button"
							class="nav-dot"
							class:active=move || route.get() == target
							aria-label=item.label
							on:click=move |_| route.set(target)
						>
							<span class="nav-dot-label">{item.label}</span>
							<span class="nav-dot-marker"></span>
						</button>
					}
				})
				.collect_view()}
		</nav>

		{move || {
			open.get()
				.then(|| {
					view! {
						<div class="nav-overlay">
							<div class="nav-backdrop" on:click=move |_| set_open.set(false)></div>
							<nav class="nav-menu">
								{NAV_ITEMS
									.iter()
									.map(|item| {
										let target = item.route;
										view! {
											<button
												type="button"
												class="nav-menu-item"
												class:active=move || route.get() == target
												on:click=move |_| {
													route.set(target);
													set_open.set(false);
												}
											>
												<span class="nav-menu-num">{item.num}</span>
												<span class="nav-menu-label">{item.label}</span>
											</button>
										}
									})
									.collect_view()}
							</nav>
							<span class="nav-footer nav-footer-left">
								{format!("Portfolio {current_year}")}
							</span>
							<span class="nav-footer nav-footer-right">"Frontend Developer"</span>
						</div>
					}
				})
		}}
	}
}
