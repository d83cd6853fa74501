//! About page: profile, skill bars, and the experience timeline.
//!
//! The timeline prefers the content service when it is configured and
//! reachable, and falls back to the static entries otherwise; the rest
//! of the page never depends on the network.

use leptos::prelude::*;
use log::warn;

use crate::content::{self, Experience, ExperienceListResponse, ListQueries};
use crate::data::{EXPERIENCES, SKILLS};

async fn load_experiences() -> Result<ExperienceListResponse, content::Error> {
	let client = content::Client::from_env()?;
	client
		.get_experiences(ListQueries {
			orders: Some("-start_date"),
			..Default::default()
		})
		.await
}

/// Format a remote record's span as `"2023 - 2025"` / `"2025 - now"`.
fn year_range(experience: &Experience) -> String {
	let start = experience
		.start_date
		.get(..4)
		.unwrap_or(&experience.start_date);
	match experience.end_date.as_deref() {
		Some(end) => format!("{start} - {}", end.get(..4).unwrap_or(end)),
		None => format!("{start} - now"),
	}
}

fn experience_row(year: String, role: String, company: String) -> impl IntoView {
	view! {
		<div class="experience-row">
			<span class="experience-year">{year}</span>
			<span class="experience-role">{role}</span>
			<span class="experience-company">{format!("@ {company}")}</span>
		</div>
	}
}

/// Profile page.
#[component]
pub fn AboutPage() -> impl IntoView {
	let (remote, set_remote) = signal(None::<ExperienceListResponse>);

	// One-shot fetch on mount; no retries. A failure just leaves the
	// static fallback in place.
	leptos::task::spawn_local(async move {
		match load_experiences().await {
			Ok(list) => {
				let _ = set_remote.try_set(Some(list));
			}
			Err(err) => warn!("content: falling back to static experience list: {err}"),
		}
	});

	view! {
		<div class="page-inner about">
			<div class="about-figure">
				<div class="about-card">
					<img src="/images/inenico-laptop.png" alt="いねにこ working" class="about-portrait" />
					<div class="about-stat about-stat-top">
						<span class="about-stat-value">"5+"</span>
						<span class="about-stat-label">"Years"</span>
					</div>
					<div class="about-stat about-stat-bottom">
						<span class="about-stat-value">"50+"</span>
						<span class="about-stat-label">"Projects"</span>
					</div>
				</div>
			</div>

			<div class="about-content">
				<span class="badge">"About Me"</span>

				<h1 class="about-title">
					<span>"ものづくりが"</span>
					<br />
					<span class="accent">"好きです"</span>
				</h1>

				<p class="about-lead">
					"フロントエンド開発を中心に、個人開発ではバックエンドまで幅広く手がけています。"
					"ユーザーが触れて楽しいと感じるインターフェースを作ることが目標です。"
					"ゆるいキャラクターですが、仕事は真剣に取り組んでいます。"
				</p>

				<section class="skills">
					<h3>"Skills"</h3>
					{SKILLS
						.iter()
						.map(|skill| {
							view! {
								<div class="skill">
									<div class="skill-head">
										<span>{skill.name}</span>
										<span class="skill-level">{format!("{}%", skill.level)}</span>
									</div>
									<div class="skill-track">
										<div class="skill-bar" style=format!("width: {}%", skill.level)></div>
									</div>
								</div>
							}
						})
						.collect_view()}
				</section>

				<section class="experience">
					<h3>"Experience"</h3>
					{move || match remote.get() {
						Some(list) => {
							list.contents
								.iter()
								.map(|exp| {
									experience_row(
										year_range(exp),
										exp.role.clone(),
										exp.name.clone(),
									)
								})
								.collect_view()
								.into_any()
						}
						None => {
							EXPERIENCES
								.iter()
								.map(|exp| {
									experience_row(
										exp.year.to_owned(),
										exp.role.to_owned(),
										exp.company.to_owned(),
									)
								})
								.collect_view()
								.into_any()
						}
					}}
				</section>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::year_range;
	use crate::content::Experience;

	fn experience(start_date: &str, end_date: Option<&str>) -> Experience {
		Experience {
			id: "exp".into(),
			created_at: "2023-04-01T00:00:00.000Z".into(),
			updated_at: "2023-04-01T00:00:00.000Z".into(),
			published_at: None,
			revised_at: None,
			name: "YUMEMI Inc.".into(),
			role: "Frontend Dev Lead".into(),
			start_date: start_date.into(),
			end_date: end_date.map(Into::into),
		}
	}

	#[test]
	fn closed_range_uses_both_years() {
		let exp = experience("2023-04-01", Some("2025-03-31"));
		assert_eq!(year_range(&exp), "2023 - 2025");
	}

	#[test]
	fn open_range_ends_in_now() {
		let exp = experience("2025-04-01", None);
		assert_eq!(year_range(&exp), "2025 - now");
	}
}
