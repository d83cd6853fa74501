//! Capability-tier selection for the animated background.
//!
//! Two environment signals drive everything: the user's reduced-motion
//! preference and whether the primary pointer is coarse (touch). The
//! selected [`CapabilityProfile`] bundles every numeric knob the layers
//! consume, so no component hardcodes a tier-specific value.

/// Which quality tier is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileVariant {
	/// Animated effects fully disabled; static gradient + grid + vignette only.
	Reduced,
	/// Attenuated visuals for touch-primary, presumed lower-powered devices.
	Coarse,
	/// Full visuals for hover-capable pointer devices.
	Default,
}

/// Visual/performance parameters for one quality tier.
///
/// Immutable once selected for a render; re-selected whenever either
/// environment signal changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapabilityProfile {
	pub variant: ProfileVariant,
	/// Number of floating particles.
	pub particles: usize,
	/// Number of animated wave curves.
	pub wave_path_count: usize,
	/// Horizontal sample segments per wave curve.
	pub wave_segments: usize,
	/// Frame-rate cap for the wave redraw loop.
	pub wave_max_fps: f64,
	/// Opacity/stroke attenuation applied to the wave layer.
	pub wave_opacity_scale: f64,
	/// Blur radius for the large drifting orbs, in px.
	pub orb_blur_px: u32,
	/// Blur radius for the aurora bands, in px.
	pub band_blur_px: u32,
	/// Opacity of the grid overlay.
	pub grid_opacity: f64,
	/// Size multiplier for the morphing blobs and orbs.
	pub blob_scale: f64,
	/// Size multiplier for the pulsing rings.
	pub ring_scale: f64,
	/// Whether the pointer-follow glow is rendered at all.
	pub show_mouse_follower: bool,
}

impl CapabilityProfile {
	/// Accessibility tier: the animation is disabled, not merely slowed.
	pub fn reduced() -> Self {
		Self {
			variant: ProfileVariant::Reduced,
			particles: 0,
			wave_path_count: 0,
			wave_segments: 0,
			wave_max_fps: 0.0,
			wave_opacity_scale: 1.0,
			orb_blur_px: 90,
			band_blur_px: 36,
			grid_opacity: 0.03,
			blob_scale: 1.0,
			ring_scale: 1.0,
			show_mouse_follower: false,
		}
	}

	/// Touch tier: moderate counts, 24 Hz wave cap, no hover glow.
	pub fn coarse() -> Self {
		Self {
			variant: ProfileVariant::Coarse,
			particles: 12,
			wave_path_count: 4,
			wave_segments: 6,
			wave_max_fps: 24.0,
			wave_opacity_scale: 0.75,
			orb_blur_px: 72,
			band_blur_px: 32,
			grid_opacity: 0.02,
			blob_scale: 0.82,
			ring_scale: 0.75,
			show_mouse_follower: false,
		}
	}

	/// Full tier for hover-capable devices.
	pub fn full() -> Self {
		Self {
			variant: ProfileVariant::Default,
			particles: 24,
			wave_path_count: 8,
			wave_segments: 8,
			wave_max_fps: 36.0,
			wave_opacity_scale: 1.0,
			orb_blur_px: 100,
			band_blur_px: 44,
			grid_opacity: 0.03,
			blob_scale: 1.0,
			ring_scale: 1.0,
			show_mouse_follower: true,
		}
	}
}

impl Default for CapabilityProfile {
	fn default() -> Self {
		Self::full()
	}
}

/// Select the profile for the current environment signals.
///
/// Reduced motion is an accessibility requirement and wins over the
/// pointer signal; a coarse pointer downgrades to the touch tier.
pub fn select_profile(reduced_motion: bool, coarse_pointer: bool) -> CapabilityProfile {
	if reduced_motion {
		CapabilityProfile::reduced()
	} else if coarse_pointer {
		CapabilityProfile::coarse()
	} else {
		CapabilityProfile::full()
	}
}

#[cfg(test)]
mod tests {
	use super::{CapabilityProfile, ProfileVariant, select_profile};

	#[test]
	fn exactly_one_variant_per_signal_combination() {
		let cases = [
			(false, false, ProfileVariant::Default),
			(false, true, ProfileVariant::Coarse),
			(true, false, ProfileVariant::Reduced),
			(true, true, ProfileVariant::Reduced),
		];
		for (reduced, coarse, expected) in cases {
			assert_eq!(select_profile(reduced, coarse).variant, expected);
		}
	}

	#[test]
	fn reduced_motion_disables_every_animated_effect() {
		let profile = CapabilityProfile::reduced();
		assert_eq!(profile.particles, 0);
		assert_eq!(profile.wave_path_count, 0);
		assert_eq!(profile.wave_max_fps, 0.0);
		assert!(!profile.show_mouse_follower);
	}

	#[test]
	fn coarse_profile_matches_expected_parameters() {
		let profile = select_profile(false, true);
		assert_eq!(profile.particles, 12);
		assert_eq!(profile.wave_path_count, 4);
		assert_eq!(profile.wave_segments, 6);
		assert_eq!(profile.wave_max_fps, 24.0);
		assert!(!profile.show_mouse_follower);
	}

	#[test]
	fn full_profile_enables_follower() {
		let profile = select_profile(false, false);
		assert_eq!(profile.particles, 24);
		assert_eq!(profile.wave_path_count, 8);
		assert!(profile.show_mouse_follower);
	}
}
