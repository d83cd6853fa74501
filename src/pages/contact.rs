//! Contact page: social links and a closing note.

use leptos::prelude::*;

use crate::data::SOCIALS;

/// Contact page.
#[component]
pub fn ContactPage(current_year: u32) -> impl IntoView {
	view! {
		<div class="page-inner contact">
			<div class="contact-content">
				<span class="badge">"Get In Touch"</span>

				<h1 class="contact-title">
					<span>"Let's work"</span>
					<br />
					<span class="accent">"together"</span>
				</h1>

				<p class="contact-lead">
					"プロジェクトのご相談やお仕事のご依頼など、"
					"お気軽にご連絡ください。新しいアイデアを一緒に形にしましょう。"
				</p>

				<div class="socials">
					{SOCIALS
						.iter()
						.map(|social| {
							view! {
								<a
									href=social.href
									target="_blank"
									rel="noopener noreferrer"
									class="social-link"
								>
									<span class="social-label">{social.label}</span>
									<span class="social-handle">{social.handle}</span>
									<span class="social-arrow">"↗"</span>
								</a>
							}
						})
						.collect_view()}
				</div>
			</div>

			<div class="contact-figure">
				<div class="contact-card">
					<img src="/images/inenico-phone.png" alt="いねにこ contact" class="contact-portrait" />
					<span class="speech-bubble">"Hi!"</span>
				</div>
				<p class="contact-footer">
					{format!("© {current_year} いねにこ. All rights reserved.")}
				</p>
			</div>
		</div>
	}
}
