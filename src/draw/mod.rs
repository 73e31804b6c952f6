//! Immediate-mode 2D drawing helpers over a [`Backend`].

pub mod backend;
pub mod shapes;

pub use backend::{Backend, Command, GlyphRect, Primitive, Quad, Recorder};
pub use shapes::{
    circle_points, draw_circle, draw_dashed_line, draw_line, draw_polygon, draw_rect, draw_square,
};
