//! Hero heading with the hologram glitch flicker.

use std::time::Duration;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use log::warn;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// How often the title rolls for a random glitch.
pub const GLITCH_INTERVAL: Duration = Duration::from_millis(3200);
/// How long a glitch stays on screen.
pub const GLITCH_DURATION: Duration = Duration::from_millis(120);
/// Chance that an interval tick actually glitches.
pub const GLITCH_CHANCE: f64 = 0.4;
/// Largest offset in either direction, in pixels.
pub const MAX_OFFSET: f64 = 3.0;

pub const GLITCH_LETTER_SPACING: &str = "0.08em";
pub const GLITCH_SHADOW: &str = "0 0 6px rgba(0,255,255,0.8), -2px 0 4px rgba(255,0,255,0.8)";
const SETTLE_TRANSITION: &str = "all 0.15s ease-out";

/// One displaced frame of the title.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glitch {
	pub dx: f64,
	pub dy: f64,
}

impl Glitch {
	pub fn sample<R: Rng>(rng: &mut R) -> Self {
		Self {
			dx: rng.gen_range(-MAX_OFFSET..MAX_OFFSET),
			dy: rng.gen_range(-MAX_OFFSET..MAX_OFFSET),
		}
	}

	pub fn transform(&self) -> String {
		format!("translate({:.2}px, {:.2}px) skewX(2deg)", self.dx, self.dy)
	}
}

/// Whether an interval tick glitches, given a roll from `[0, 1)`.
pub fn should_glitch(roll: f64) -> bool {
	roll > 1.0 - GLITCH_CHANCE
}

/// `<h1>` that jitters with a cyan/magenta shadow now and then and on hover.
#[component]
pub fn HeroTitle(#[prop(into)] text: String) -> impl IntoView {
	let glitch = RwSignal::new(None::<Glitch>);
	let rng = StoredValue::new(SmallRng::from_entropy());

	let trigger = move || {
		let Some(next) = rng.try_update_value(|rng| Glitch::sample(rng)) else {
			return;
		};
		glitch.set(Some(next));
		set_timeout(move || glitch.set(None), GLITCH_DURATION);
	};

	let ticker = set_interval_with_handle(
		move || {
			let roll = rng.try_update_value(|rng| rng.r#gen::<f64>()).unwrap_or(0.0);
			if should_glitch(roll) {
				trigger();
			}
		},
		GLITCH_INTERVAL,
	);
	match ticker {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(e) => warn!("portfolio: could not start title glitch: {:?}", e),
	}

	view! {
		<h1
			class="hero-title"
			on:mouseenter=move |_: MouseEvent| trigger()
			style:transform=move || glitch.get().map(|g| g.transform()).unwrap_or_default()
			style:letter-spacing=move || {
				glitch.get().map(|_| GLITCH_LETTER_SPACING).unwrap_or_default()
			}
			style:text-shadow=move || glitch.get().map(|_| GLITCH_SHADOW).unwrap_or_default()
			style:transition=move || if glitch.get().is_some() { "none" } else { SETTLE_TRANSITION }
		>
			{text}
		</h1>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_offsets_stay_in_range() {
		let mut rng = SmallRng::seed_from_u64(11);
		for _ in 0..1_000 {
			let g = Glitch::sample(&mut rng);
			assert!((-MAX_OFFSET..MAX_OFFSET).contains(&g.dx), "dx {}", g.dx);
			assert!((-MAX_OFFSET..MAX_OFFSET).contains(&g.dy), "dy {}", g.dy);
		}
	}

	#[test]
	fn test_transform_css() {
		let g = Glitch { dx: -1.5, dy: 2.25 };
		assert_eq!(g.transform(), "translate(-1.50px, 2.25px) skewX(2deg)");
	}

	#[test]
	fn test_glitch_chance() {
		assert!(!should_glitch(0.0));
		assert!(!should_glitch(0.59));
		assert!(should_glitch(0.61));
		assert!(should_glitch(0.99));

		let mut rng = SmallRng::seed_from_u64(3);
		let hits = (0..10_000).filter(|_| should_glitch(rng.r#gen())).count();
		assert!((3_500..4_500).contains(&hits), "{hits} of 10000");
	}
}
