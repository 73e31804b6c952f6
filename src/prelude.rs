// src/prelude.rs
//! The “everything” import for gfxkit.
//!
//! ```rust
//! use gfxkit::prelude::*;
//! ```

// core data types
pub use crate::colour::Colour;
pub use crate::error::{Error, Result};
pub use crate::vector::{Rounded, Vector, Vector2, Vector3, Vector4};

// drawing
pub use crate::draw::{
    circle_points, draw_circle, draw_dashed_line, draw_line, draw_polygon, draw_rect, draw_square,
    Backend, Primitive, Recorder,
};
pub use crate::font::{draw_string, BitmapFont, FontSource};
