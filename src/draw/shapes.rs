// src/draw/shapes.rs
//! Filled shapes and lines. Shapes without explicit endpoints are centred
//! on the origin; position them with the backend's transform.

use super::backend::{Backend, Primitive};
use crate::colour::Colour;
use crate::vector::Vector2;
use std::f64::consts::TAU;
use tracing::trace;

fn polygon<B: Backend + ?Sized>(backend: &mut B, colour: Colour, points: &[Vector2]) {
    backend.set_colour(colour);
    backend.begin(Primitive::Polygon);
    for p in points {
        backend.vertex(p.x(), p.y());
    }
    backend.end();
}

/// Square with side length `side`.
pub fn draw_square<B: Backend + ?Sized>(backend: &mut B, side: f64, colour: Colour) {
    draw_rect(backend, side, side, colour);
}

/// Rectangle `width` wide and `height` tall.
pub fn draw_rect<B: Backend + ?Sized>(backend: &mut B, width: f64, height: f64, colour: Colour) {
    let (hw, hh) = (width / 2.0, height / 2.0);
    polygon(
        backend,
        colour,
        &[
            Vector2::new(hw, hh),
            Vector2::new(-hw, hh),
            Vector2::new(-hw, -hh),
            Vector2::new(hw, -hh),
        ],
    );
}

/// Single segment from `from` to `to`, `width` pixels wide.
pub fn draw_line<B: Backend + ?Sized>(
    backend: &mut B,
    from: Vector2,
    to: Vector2,
    colour: Colour,
    width: f32,
) {
    backend.set_line_width(width);
    backend.set_colour(colour);
    backend.begin(Primitive::Lines);
    backend.vertex(from.x(), from.y());
    backend.vertex(to.x(), to.y());
    backend.end();
}

/// Dashed segment from `from` to `to`.
///
/// The segment is cut into `segments` equal pieces and every other piece is
/// drawn, starting with the one at `from`.
pub fn draw_dashed_line<B: Backend + ?Sized>(
    backend: &mut B,
    from: Vector2,
    to: Vector2,
    colour: Colour,
    width: f32,
    segments: usize,
) {
    if segments == 0 {
        trace!("dashed line with zero segments, nothing to draw");
        return;
    }
    let step = (to - from) * (1.0 / segments as f64);

    backend.set_line_width(width);
    backend.set_colour(colour);
    backend.begin(Primitive::Lines);
    for i in (0..segments).step_by(2) {
        let a = from + step * i as f64;
        let b = from + step * (i + 1) as f64;
        backend.vertex(a.x(), a.y());
        backend.vertex(b.x(), b.y());
    }
    backend.end();
}

/// `resolution` points evenly spaced on a circle, counter-clockwise from
/// `(radius, 0)`.
pub fn circle_points(radius: f64, resolution: usize) -> Vec<Vector2> {
    let step = TAU / resolution as f64;
    (0..resolution)
        .map(|i| {
            let theta = step * i as f64;
            Vector2::new(theta.cos() * radius, theta.sin() * radius)
        })
        .collect()
}

/// Filled polygon through `points`.
pub fn draw_polygon<B: Backend + ?Sized>(backend: &mut B, points: &[Vector2], colour: Colour) {
    polygon(backend, colour, points);
}

/// Filled circle approximated by a `resolution`-sided polygon.
pub fn draw_circle<B: Backend + ?Sized>(
    backend: &mut B,
    radius: f64,
    colour: Colour,
    resolution: usize,
) {
    if resolution == 0 {
        trace!("circle with zero resolution, nothing to draw");
        return;
    }
    polygon(backend, colour, &circle_points(radius, resolution));
}
