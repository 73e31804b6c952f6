// src/colour.rs
//! RGBA colours and the named palette.

use serde::{Deserialize, Serialize};

/// A single RGBA colour, channels nominally in `[0, 1]`.
///
/// Channels are not clamped; whatever is stored reaches the backend as is.
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Colour {
    pub const BLACK: Colour = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Colour = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const GREY: Colour = Self::new(0.5, 0.5, 0.5, 1.0);

    pub const RED: Colour = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Colour = Self::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Colour = Self::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with the alpha channel replaced.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl From<[f32; 4]> for Colour {
    fn from([r, g, b, a]: [f32; 4]) -> Colour {
        Colour::new(r, g, b, a)
    }
}

impl From<Colour> for [f32; 4] {
    fn from(c: Colour) -> [f32; 4] {
        [c.r, c.g, c.b, c.a]
    }
}
