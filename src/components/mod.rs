//! Page components.

pub mod contact;
pub mod content;
pub mod hero;
pub mod nav;
pub mod particle_field;
pub mod theme_toggle;
