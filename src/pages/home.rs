//! Home page: hero with the rotating wordmark and character card.

use leptos::prelude::*;

use crate::components::rotating_text::RotatingText;
use crate::pages::Route;

/// Landing hero.
#[component]
pub fn HomePage(route: RwSignal<Route>) -> impl IntoView {
	view! {
		<div class="page-inner hero">
			<div class="hero-text">
				<div class="badge">
					<span class="badge-dot"></span>
					<span>"Available for work"</span>
				</div>

				<h1 class="hero-title">
					<span class="hero-title-name">
						<RotatingText />
					</span>
					<span class="hero-title-role">"Frontend Developer"</span>
				</h1>

				<p class="hero-lead">
					"ゆるく、でも真剣に。"
					<br />
					"デザインとコードで世界をちょっと楽しくする。"
				</p>

				<div class="hero-actions">
					<button
						type="button"
						class="button-primary"
						on:click=move |_| route.set(Route::Works)
					>
						"View Works →"
					</button>
					<button
						type="button"
						class="button-ghost"
						on:click=move |_| route.set(Route::Contact)
					>
						"Contact"
					</button>
				</div>
			</div>

			<div class="hero-figure">
				<div class="hero-card">
					<div class="hero-card-glass hero-card-glass-a"></div>
					<div class="hero-card-glass hero-card-glass-b"></div>
					<img src="/images/inenico-waving.png" alt="いねにこ" class="hero-portrait" />
					<div class="hero-ring hero-ring-inner"></div>
					<div class="hero-ring hero-ring-outer"></div>
				</div>
			</div>
		</div>
	}
}
