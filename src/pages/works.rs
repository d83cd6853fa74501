//! Works page: grid of work samples with hover reveal.

use leptos::prelude::*;

use crate::data::WORKS;

/// Selected works grid.
#[component]
pub fn WorksPage() -> impl IntoView {
	view! {
		<div class="page-inner works">
			<header class="works-header">
				<span class="badge">"Selected Works"</span>
				<h1 class="works-title">
					<span>"Recent"</span>
					" "
					<span class="accent">"Projects"</span>
				</h1>
			</header>

			<div class="works-grid">
				{WORKS
					.iter()
					.map(|work| {
						view! {
							<article class="work-card">
								<div class="work-card-gradient"></div>
								<img src=work.image alt=work.title class="work-image" />
								<div class="work-meta">
									<span class="work-category">{work.category}</span>
									<span class="work-year">{work.year}</span>
								</div>
								<div class="work-reveal">
									<h3>{work.title}</h3>
									<p>{work.description}</p>
									<span class="work-link">"View Project ↗"</span>
								</div>
							</article>
						}
					})
					.collect_view()}
			</div>

			<div class="works-footer">
				<button type="button" class="button-ghost">"View All Projects ↗"</button>
			</div>
		</div>
	}
}
