//! Animated particle and hologram background.
//!
//! Renders drifting particles onto a full-viewport canvas with:
//! - Wrap-around or bouncing edges, chosen by [`BoundaryPolicy`]
//! - Fading lines joining every pair of nearby particles
//! - A scrolling hologram grid and a rotating aura overlay
//! - Dark and light palettes, read from a [`ThemeHandle`] each frame
//!
//! # Example
//!
//! ```ignore
//! use portfolio_site::components::particle_field::{FieldConfig, ParticleBackground};
//!
//! let theme = ThemeHandle::new(ThemeMode::Dark);
//! view! { <ParticleBackground theme=theme config=FieldConfig::bouncing() /> }
//! ```
//!
//! [`ThemeHandle`]: crate::components::theme_toggle::ThemeHandle

mod aura;
mod component;
pub mod config;
mod frame_loop;
mod particles;
mod render;
mod surface;
pub mod theme;

pub use aura::HologramAura;
pub use component::ParticleBackground;
pub use config::{BoundaryPolicy, FieldConfig, ParticleCount, ParticleShape};
pub use frame_loop::StopHandle;
pub use particles::{Particle, ParticleField};
pub use render::{link_alpha, render};
pub use surface::{CanvasSurface, Fill, GradientStop, Segment, Surface};
pub use theme::{Color, Palette, ThemeMode};
