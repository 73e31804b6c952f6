//! # gfxkit Quickstart
//!
//! ```rust
//! use gfxkit::prelude::*;
//!
//! let v = Vector2::new(3.0, 4.0);
//! assert_eq!(v.len(), 5.0);
//!
//! let unit = Vector3::new(0.0, 0.0, 5.0).normalize().unwrap();
//! assert_eq!(unit, Vector3::new(0.0, 0.0, 1.0));
//!
//! // Zero-length vectors have no direction.
//! assert!(Vector3::default().normalize().is_err());
//!
//! let mut rec = Recorder::new();
//! draw_square(&mut rec, 2.0, Colour::RED);
//! assert_eq!(rec.vertices().len(), 4);
//! ```
//!
#![doc = include_str!("../README.md")]

pub mod colour;
pub mod draw;
pub mod error;
pub mod font;
pub mod prelude;
pub mod vector;

// --- Public API exports ---

pub use colour::Colour;
pub use error::{Error, Result};
pub use font::{draw_string, BitmapFont, FontSource};
pub use vector::{Rounded, Scalar, Vector, Vector2, Vector3, Vector4};
