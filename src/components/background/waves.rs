//! Wave-curve math and frame-rate governance.
//!
//! Each decorative wave is described by a [`WavePathConfig`] derived from
//! its index; the time-varying path string is recomputed from that config
//! plus the elapsed wall-clock time on every rendered frame. The redraw
//! loop itself is throttled by a [`FrameClock`], which keeps the visual
//! speed tied to elapsed time rather than achieved frame rate.

use std::f64::consts::PI;
use std::fmt::Write;

/// Stroke colors cycled across the wave gradients.
pub const WAVE_COLORS: [&str; 8] = [
	"oklch(0.7 0.15 180)",
	"oklch(0.6 0.12 200)",
	"oklch(0.5 0.1 220)",
	"oklch(0.55 0.13 190)",
	"oklch(0.65 0.14 175)",
	"oklch(0.45 0.08 240)",
	"oklch(0.6 0.11 185)",
	"oklch(0.5 0.09 210)",
];

/// Shape parameters for one wave curve.
///
/// Derived from the curve index: deeper curves sit lower, swing wider,
/// ripple slightly faster, and fade toward the background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WavePathConfig {
	/// Baseline vertical offset in viewBox units.
	pub base_y: f64,
	/// Peak displacement of the primary sine term.
	pub amplitude: f64,
	/// Horizontal frequency of the primary sine term.
	pub frequency: f64,
	/// Phase advance per elapsed millisecond.
	pub speed: f64,
	/// Stroke opacity, already attenuated by the profile.
	pub opacity: f64,
	/// Stroke width in viewBox units, already attenuated by the profile.
	pub stroke_width: f64,
}

impl WavePathConfig {
	/// Config for curve `index` under the given profile opacity scale.
	pub fn for_index(index: usize, opacity_scale: f64) -> Self {
		let i = index as f64;
		Self {
			base_y: 20.0 + i * 10.0,
			amplitude: 8.0 + i * 2.0,
			frequency: 0.02 + i * 0.003,
			speed: 0.0003 + i * 0.00005,
			opacity: (0.5 - i * 0.04) * opacity_scale,
			stroke_width: (0.12 + i * 0.015) * opacity_scale,
		}
	}
}

/// Sample the curve height at normalized x for a given phase.
///
/// Two sine terms: the primary wave plus a half-frequency secondary at
/// 1.3x phase speed, so the shape never settles into a pure sinusoid.
fn sample_y(config: &WavePathConfig, x: f64, phase: f64) -> f64 {
	config.base_y
		+ (x * config.frequency * PI + phase).sin() * config.amplitude
		+ (x * config.frequency * PI * 0.5 + phase * 1.3).sin() * (config.amplitude * 0.5)
}

/// Generate the SVG path string for one curve at `elapsed_ms`.
///
/// Walks `segments` evenly spaced sample points across x in [0, 100] and
/// joins them with cubic commands whose control points sit 40% into each
/// span, held at the respective endpoint's height.
pub fn wave_path_d(config: &WavePathConfig, segments: usize, elapsed_ms: f64) -> String {
	let phase = elapsed_ms * config.speed;
	let step = 100.0 / segments as f64;
	let mut d = String::new();

	for i in 0..=segments {
		let x = i as f64 * step;
		let y = sample_y(config, x, phase);
		if i == 0 {
			let _ = write!(d, "M {x} {y}");
		} else {
			let prev_x = (i - 1) as f64 * step;
			let prev_y = sample_y(config, prev_x, phase);
			let cp1 = prev_x + step * 0.4;
			let cp2 = x - step * 0.4;
			let _ = write!(d, " C {cp1} {prev_y}, {cp2} {y}, {x} {y}");
		}
	}

	d
}

/// Wall-clock frame limiter for the wave redraw loop.
///
/// `tick` decides whether a frame should render and, if so, returns the
/// elapsed time since the loop started. Skipped ticks leave the clock
/// untouched so the phase stays wall-clock-accurate regardless of how
/// many frames actually render.
#[derive(Clone, Debug)]
pub struct FrameClock {
	start: Option<f64>,
	last_frame: f64,
	frame_interval: f64,
}

impl FrameClock {
	/// A clock capping renders at `max_fps`.
	pub fn new(max_fps: f64) -> Self {
		Self {
			start: None,
			last_frame: 0.0,
			frame_interval: 1000.0 / max_fps,
		}
	}

	/// Advance to `now` (ms). Returns `Some(elapsed_ms)` when a frame
	/// should render, `None` when the tick falls under the fps cap.
	pub fn tick(&mut self, now: f64) -> Option<f64> {
		let start = match self.start {
			Some(start) => start,
			None => {
				self.start = Some(now);
				self.last_frame = now;
				return None;
			}
		};

		if now - self.last_frame < self.frame_interval {
			return None;
		}

		self.last_frame = now;
		Some(now - start)
	}

	/// Forget the loop start, so the next tick begins a fresh animation
	/// at elapsed zero rather than resuming a stale clock.
	pub fn reset(&mut self) {
		self.start = None;
		self.last_frame = 0.0;
	}
}

#[cfg(test)]
mod tests {
	use super::{FrameClock, WavePathConfig, sample_y, wave_path_d};

	#[test]
	fn path_has_move_and_exactly_segments_curves() {
		let config = WavePathConfig::for_index(2, 1.0);
		for segments in [6, 8] {
			for t in [0.0, 250.0, 10_000.0] {
				let d = wave_path_d(&config, segments, t);
				assert!(d.starts_with("M "), "path {d:?}");
				assert_eq!(d.matches('C').count(), segments);
			}
		}
	}

	#[test]
	fn sampled_heights_stay_within_envelope() {
		for index in 0..8 {
			let config = WavePathConfig::for_index(index, 1.0);
			let lo = config.base_y - 1.5 * config.amplitude;
			let hi = config.base_y + 1.5 * config.amplitude;
			for step in 0..=200 {
				let x = step as f64 * 0.5;
				for t in [0.0, 777.0, 123_456.0] {
					let y = sample_y(&config, x, t * config.speed);
					assert!(y >= lo && y <= hi, "index {index} x {x} t {t} y {y}");
				}
			}
		}
	}

	#[test]
	fn deeper_curves_sit_lower_and_fade() {
		let near = WavePathConfig::for_index(0, 1.0);
		let far = WavePathConfig::for_index(7, 1.0);
		assert!(far.base_y > near.base_y);
		assert!(far.amplitude > near.amplitude);
		assert!(far.opacity < near.opacity);
	}

	#[test]
	fn clock_caps_renders_per_second() {
		let mut clock = FrameClock::new(24.0);
		// Simulate a 60 Hz display for one second.
		let mut rendered = 0;
		for frame in 0..=60 {
			let now = frame as f64 * (1000.0 / 60.0);
			if clock.tick(now).is_some() {
				rendered += 1;
			}
		}
		assert!(rendered <= 25, "rendered {rendered} frames");
		assert!(rendered >= 15, "rendered only {rendered} frames");
	}

	#[test]
	fn elapsed_time_is_wall_clock_not_frame_count() {
		let mut clock = FrameClock::new(24.0);
		clock.tick(1_000.0);
		// A long stall between ticks still reports true elapsed time.
		assert_eq!(clock.tick(1_500.0), Some(500.0));
	}

	#[test]
	fn reset_restarts_elapsed_at_zero() {
		let mut clock = FrameClock::new(36.0);
		clock.tick(0.0);
		assert_eq!(clock.tick(4_000.0), Some(4_000.0));

		clock.reset();
		assert_eq!(clock.tick(9_000.0), None);
		let elapsed = clock.tick(9_050.0).expect("past the frame interval");
		assert!(elapsed < 100.0, "stale clock leaked through: {elapsed}");
	}
}
