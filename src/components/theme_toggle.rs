//! Dark/light theme state, persistence and the toggle button.
//!
//! [`ThemeHandle`] is the only place the current mode lives. It is created
//! once by the app, handed to the toggle (which writes it) and to the particle
//! background (which only reads it). [`ThemeStore`] mirrors the mode into the
//! `data-theme` attribute on `<html>` and into local storage.

use std::cell::Cell;
use std::rc::Rc;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use log::{debug, warn};
use web_sys::Storage;

pub use super::particle_field::ThemeMode;

/// Local storage key holding the chosen theme.
pub const STORAGE_KEY: &str = "portfolio-theme";

/// Shared, single-threaded handle to the current theme mode.
#[derive(Clone, Debug, Default)]
pub struct ThemeHandle(Rc<Cell<ThemeMode>>);

impl ThemeHandle {
	pub fn new(mode: ThemeMode) -> Self {
		Self(Rc::new(Cell::new(mode)))
	}

	pub fn get(&self) -> ThemeMode {
		self.0.get()
	}

	pub fn set(&self, mode: ThemeMode) {
		self.0.set(mode);
	}

	/// Flips the mode and returns the new one.
	pub fn toggle(&self) -> ThemeMode {
		let next = self.get().toggled();
		self.set(next);
		next
	}
}

/// Browser-side persistence of the theme. Every operation is a no-op when the
/// document or storage is unavailable.
pub struct ThemeStore;

impl ThemeStore {
	fn storage() -> Option<Storage> {
		web_sys::window()?.local_storage().ok()?
	}

	/// Saved mode, or dark when nothing (valid) is saved.
	pub fn load() -> ThemeMode {
		let saved = Self::storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
		ThemeMode::from_stored(saved.as_deref())
	}

	/// Sets `data-theme` on the root element and persists the mode.
	pub fn apply(mode: ThemeMode) {
		match web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.document_element())
		{
			Some(root) => {
				let _ = root.set_attribute("data-theme", mode.as_str());
			}
			None => warn!("portfolio: no document element, theme attribute not set"),
		}

		match Self::storage() {
			Some(storage) => {
				if storage.set_item(STORAGE_KEY, mode.as_str()).is_err() {
					warn!("portfolio: could not persist theme");
				}
			}
			None => debug!("portfolio: local storage unavailable, theme not persisted"),
		}
	}
}

/// Button that flips between dark and light mode.
#[component]
pub fn ThemeToggle(theme: ThemeHandle) -> impl IntoView {
	let (mode, set_mode) = signal(theme.get());

	let on_click = move |_: MouseEvent| {
		let next = theme.toggle();
		ThemeStore::apply(next);
		set_mode.set(next);
		debug!("portfolio: theme switched to {}", next);
	};

	view! {
		<button
			id="themeToggle"
			class="theme-toggle"
			aria-label="Toggle theme"
			on:click=on_click
		>
			{move || match mode.get() {
				ThemeMode::Dark => "☀️",
				ThemeMode::Light => "🌙",
			}}
		</button>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_handle_clones_share_mode() {
		let handle = ThemeHandle::new(ThemeMode::Dark);
		let reader = handle.clone();

		assert_eq!(handle.toggle(), ThemeMode::Light);
		assert_eq!(reader.get(), ThemeMode::Light);

		reader.set(ThemeMode::Dark);
		assert_eq!(handle.get(), ThemeMode::Dark);
	}

	#[test]
	fn test_default_handle_is_dark() {
		assert_eq!(ThemeHandle::default().get(), ThemeMode::Dark);
	}
}
