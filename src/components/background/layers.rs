//! Declarative decoration layers.
//!
//! Everything here animates through CSS keyframes parameterized by inline
//! styles; only the wave layer and the pointer glow need per-frame Rust.

use leptos::prelude::*;

use super::particles::particle_field;

/// Closed blob silhouettes the morphing layer cycles through.
const BLOB_PATHS: [&str; 3] = [
	"M44.5,-76.3C57.8,-69.5,68.7,-57.5,76.5,-43.5C84.3,-29.6,89,-13.8,88.2,1.5C87.4,16.9,81.1,31.8,71.8,44.4C62.5,57,50.2,67.3,36.2,74.1C22.2,80.9,6.4,84.2,-9.1,82.6C-24.6,81,-39.9,74.6,-52.7,65C-65.5,55.4,-75.8,42.7,-81.2,28C-86.6,13.3,-87.1,-3.4,-82.8,-18.5C-78.5,-33.6,-69.4,-47.2,-57.2,-54.5C-45,-61.8,-29.7,-62.9,-15.6,-67.5C-1.5,-72.1,11.4,-80.2,24.8,-81.1C38.2,-82,52.1,-75.7,44.5,-76.3Z",
	"M39.9,-68.1C52.5,-61.8,64,-52.4,72.2,-40.3C80.4,-28.2,85.3,-13.3,84.5,1.1C83.7,15.5,77.2,29.5,68.4,41.8C59.6,54.1,48.5,64.7,35.5,71.1C22.5,77.5,7.6,79.7,-7.1,78.6C-21.8,77.5,-36.3,73.1,-48.5,65C-60.7,56.9,-70.6,45.1,-76.4,31.4C-82.2,17.7,-83.9,2.1,-81.1,-12.5C-78.3,-27.1,-71,-40.7,-60.4,-51.1C-49.8,-61.5,-35.9,-68.7,-22,-73.4C-8.1,-78.1,5.8,-80.3,19.5,-78.3C33.2,-76.3,46.7,-70.1,39.9,-68.1Z",
	"M47.7,-79.5C61.5,-72.7,72.5,-59.5,79.4,-44.7C86.3,-29.9,89.1,-13.5,87.3,2.1C85.5,17.7,79.1,32.4,70,45C60.9,57.6,49.1,68.1,35.4,74.5C21.7,80.9,6.1,83.2,-9.3,81.4C-24.7,79.6,-39.9,73.7,-52.5,64.5C-65.1,55.3,-75.1,42.8,-80.6,28.4C-86.1,14,-87.1,-2.3,-83,-17.1C-78.9,-31.9,-69.7,-45.2,-57.6,-52.9C-45.5,-60.6,-30.5,-62.7,-16.7,-67.6C-2.9,-72.5,9.7,-80.2,23.1,-81.7C36.5,-83.2,50.7,-78.5,47.7,-79.5Z",
];

/// Slow horizontal gradient bands drifting across the top and middle.
#[component]
pub fn AuroraBands(blur_px: u32) -> impl IntoView {
	let blur = format!("blur({blur_px}px)");
	view! {
		<div class="aurora">
			<div
				class="aurora-band aurora-band-a"
				style=format!(
					"filter: {blur}; background: linear-gradient(90deg, transparent 0%, \
					oklch(0.5 0.15 180 / 0.1) 20%, oklch(0.6 0.12 200 / 0.15) 40%, \
					oklch(0.5 0.1 220 / 0.1) 60%, oklch(0.4 0.15 190 / 0.08) 80%, transparent 100%)",
				)
			></div>
			<div
				class="aurora-band aurora-band-b"
				style=format!(
					"filter: {blur}; background: linear-gradient(90deg, transparent 0%, \
					oklch(0.4 0.12 200 / 0.08) 30%, oklch(0.5 0.15 175 / 0.12) 50%, \
					oklch(0.45 0.1 210 / 0.08) 70%, transparent 100%)",
				)
			></div>
		</div>
	}
}

/// One stack of cross-fading blob silhouettes.
///
/// The three pre-authored curves fade in and out on staggered delays so
/// exactly one dominates at a time over the cycle.
fn blob_stack(paths: Vec<&'static str>, cycle_s: f64, fill: &'static str) -> impl IntoView {
	let step = cycle_s / paths.len() as f64;
	view! {
		<svg viewBox="0 0 200 200">
			{paths
				.into_iter()
				.enumerate()
				.map(|(i, d)| {
					view! {
						<path
							class="blob-shape"
							d=d
							fill=fill
							style=format!(
								"animation-duration: {cycle_s}s; animation-delay: {}s",
								i as f64 * step,
							)
						></path>
					}
				})
				.collect_view()}
		</svg>
	}
}

/// Two morphing blob silhouettes in opposite corners.
///
/// Same curve list, opposite order, different cycle lengths, so the pair
/// never moves in lockstep.
#[component]
pub fn MorphingBlobs(scale: f64) -> impl IntoView {
	let left_size = (600.0 * scale).round();
	let left_offset = (200.0 * scale).round();
	let right_size = (500.0 * scale).round();
	let right_offset_x = (150.0 * scale).round();
	let right_offset_y = (100.0 * scale).round();

	view! {
		<div class="blobs">
			<div
				class="blob"
				style=format!(
					"width: {left_size}px; height: {left_size}px; left: -{left_offset}px; top: -{left_offset}px",
				)
			>
				{blob_stack(BLOB_PATHS.to_vec(), 15.0, "oklch(0.5 0.12 180 / 0.3)")}
			</div>
			<div
				class="blob"
				style=format!(
					"width: {right_size}px; height: {right_size}px; right: -{right_offset_x}px; bottom: -{right_offset_y}px",
				)
			>
				{blob_stack(
					BLOB_PATHS.iter().rev().copied().collect(),
					18.0,
					"oklch(0.45 0.1 200 / 0.25)",
				)}
			</div>
		</div>
	}
}

/// A large soft-edged color orb drifting on an infinite keyframe loop.
#[component]
pub fn FloatingOrb(
	size: f64,
	color: &'static str,
	initial_x: &'static str,
	initial_y: &'static str,
	duration_s: f64,
	blur_px: u32,
) -> impl IntoView {
	let size = size.round();
	view! {
		<div
			class="orb"
			style=format!(
				"width: {size}px; height: {size}px; left: {initial_x}; top: {initial_y}; \
				background: {color}; filter: blur({blur_px}px); animation-duration: {duration_s}s",
			)
		></div>
	}
}

/// Ring outlines expanding and fading from three fixed screen positions.
#[component]
pub fn PulsingRings(scale: f64) -> impl IntoView {
	let rings = [("20%", "30%", 0.0), ("70%", "60%", 2.0), ("50%", "80%", 4.0)];
	let mid = (300.0 * scale).round();
	let max = (500.0 * scale).round();

	view! {
		<div class="rings">
			{rings
				.into_iter()
				.map(|(x, y, delay)| {
					view! {
						<div
							class="ring"
							style=format!(
								"left: {x}; top: {y}; animation-delay: {delay}s; \
								--ring-mid: {mid}px; --ring-max: {max}px",
							)
						></div>
					}
				})
				.collect_view()}
		</div>
	}
}

/// Faint square grid overlay.
#[component]
pub fn GridLines(opacity: f64) -> impl IntoView {
	view! {
		<svg class="grid-lines" style=format!("opacity: {opacity}")>
			<defs>
				<pattern id="grid" width="60" height="60" patternUnits="userSpaceOnUse">
					<path d="M 60 0 L 0 0 0 60"></path>
				</pattern>
			</defs>
			<rect width="100%" height="100%" fill="url(#grid)"></rect>
		</svg>
	}
}

/// The deterministic particle field, floating gently upward.
#[component]
pub fn ParticleField(count: usize) -> impl IntoView {
	view! {
		<div class="particles">
			{particle_field(count)
				.into_iter()
				.map(|p| {
					view! {
						<div
							class="particle"
							style=format!(
								"width: {0}px; height: {0}px; left: {1}%; top: {2}%; \
								animation-duration: {3}s; animation-delay: {4}s",
								p.size,
								p.x,
								p.y,
								p.duration,
								p.delay,
							)
						></div>
					}
				})
				.collect_view()}
		</div>
	}
}

/// Static fractal-noise texture at barely-visible opacity.
#[component]
pub fn NoiseTexture() -> impl IntoView {
	view! {
		<div
			class="noise"
			style="background-image: url(\"data:image/svg+xml,%3Csvg viewBox='0 0 256 256' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='noise'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.8' numOctaves='4' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23noise)'/%3E%3C/svg%3E\")"
		></div>
	}
}

/// Darkened edges pulling focus to the center.
#[component]
pub fn Vignette() -> impl IntoView {
	view! { <div class="vignette"></div> }
}
