//! Deterministic particle field for visual atmosphere.

use super::prng::pseudo_random;

/// A single floating particle, derived entirely from its index.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub id: usize,
	/// Horizontal position as a percentage of the viewport.
	pub x: f64,
	/// Vertical position as a percentage of the viewport.
	pub y: f64,
	/// Diameter in px.
	pub size: f64,
	/// Float animation duration in seconds.
	pub duration: f64,
	/// Animation start delay in seconds.
	pub delay: f64,
}

/// Derive `count` particles from the seeded hash.
///
/// Each particle spends five consecutive seeds, so fields never alias
/// between neighbours. The derivation is pure: repeated calls with the
/// same count produce an identical field.
pub fn particle_field(count: usize) -> Vec<Particle> {
	(0..count)
		.map(|i| {
			let s = (i * 5) as u32;
			Particle {
				id: i,
				x: pseudo_random(s + 1) * 100.0,
				y: pseudo_random(s + 2) * 100.0,
				size: pseudo_random(s + 3) * 4.0 + 1.0,
				duration: pseudo_random(s + 4) * 10.0 + 15.0,
				delay: pseudo_random(s + 5) * 5.0,
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::particle_field;

	#[test]
	fn field_is_reproducible() {
		assert_eq!(particle_field(24), particle_field(24));
	}

	#[test]
	fn field_has_requested_count() {
		assert_eq!(particle_field(0).len(), 0);
		assert_eq!(particle_field(12).len(), 12);
		assert_eq!(particle_field(24).len(), 24);
	}

	#[test]
	fn derived_values_stay_in_range() {
		for p in particle_field(64) {
			assert!((0.0..100.0).contains(&p.x));
			assert!((0.0..100.0).contains(&p.y));
			assert!((1.0..5.0).contains(&p.size));
			assert!((15.0..25.0).contains(&p.duration));
			assert!((0.0..5.0).contains(&p.delay));
		}
	}

	#[test]
	fn shorter_field_is_a_prefix_of_a_longer_one() {
		let short = particle_field(12);
		let long = particle_field(24);
		assert_eq!(short[..], long[..12]);
	}
}
