//! Pixel-space geometry
//!
//! These types describe where things are on screen, as opposed to the
//! cell coordinates in [`crate::grid`].

mod pixel;
mod size;
mod vec2;

pub use pixel::pixel_to_grid;
pub use size::Size;
pub use vec2::Vec2;
