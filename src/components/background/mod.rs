//! Animated decorative background.
//!
//! Renders a layered visual stack behind every page:
//! - Aurora gradient bands, morphing blobs, and drifting orbs
//! - Flowing wave curves redrawn each animation frame
//! - Pulsing rings, a grid overlay, and a deterministic particle field
//! - An optional pointer-follow glow, noise texture, and vignette
//!
//! Every size, blur radius, opacity, and count comes from a
//! [`CapabilityProfile`] selected from the host's reduced-motion and
//! pointer-type signals, so the whole stack degrades gracefully on
//! accessibility preferences and low-powered touch devices.

mod component;
mod layers;
mod particles;
mod pointer;
pub mod profile;
mod prng;
pub mod waves;
mod wave_layer;

pub use component::AnimatedBackground;
pub use profile::{CapabilityProfile, ProfileVariant, select_profile};
