// src/draw/backend.rs
//! The immediate-mode rendering surface the helpers draw through.

use crate::colour::Colour;
use crate::vector::Vector2;
use image::RgbaImage;

/// Vertex topology between a `begin`/`end` pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Primitive {
    /// Every vertex is drawn as a single point.
    Points,
    /// Every two vertices form an independent segment.
    Lines,
    /// Vertices trace a single filled convex polygon.
    Polygon,
}

/// Source rectangle of a glyph inside a font atlas, in atlas pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlyphRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Axis-aligned destination rectangle in drawing coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quad {
    /// Top-left corner.
    pub origin: Vector2,
    pub size: Vector2,
}

/// A fixed-function, immediate-mode rendering context.
///
/// Implementations are bound to one rendering context; `&mut self` keeps a
/// context from being driven by two callers at once.
pub trait Backend {
    /// Colour applied to every vertex emitted after this call.
    fn set_colour(&mut self, colour: Colour);

    /// Width in pixels of lines drawn after this call.
    fn set_line_width(&mut self, width: f32);

    /// Open a primitive batch. Must be closed with [`Backend::end`].
    fn begin(&mut self, primitive: Primitive);

    /// Emit one vertex into the open batch.
    fn vertex(&mut self, x: f64, y: f64);

    /// Close the batch opened by [`Backend::begin`].
    fn end(&mut self);

    /// Draw `src` from `atlas` stretched over `dst`, tinted by the current colour.
    fn glyph(&mut self, atlas: &RgbaImage, src: GlyphRect, dst: Quad);
}

/// One call made against a [`Recorder`].
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    SetColour(Colour),
    SetLineWidth(f32),
    Begin(Primitive),
    Vertex(Vector2),
    End,
    Glyph { src: GlyphRect, dst: Quad },
}

/// Backend that records every call instead of rendering.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    commands: Vec<Command>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in call order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// All emitted vertices, in call order.
    pub fn vertices(&self) -> Vec<Vector2> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Vertex(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Backend for Recorder {
    fn set_colour(&mut self, colour: Colour) {
        self.commands.push(Command::SetColour(colour));
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(Command::SetLineWidth(width));
    }

    fn begin(&mut self, primitive: Primitive) {
        self.commands.push(Command::Begin(primitive));
    }

    fn vertex(&mut self, x: f64, y: f64) {
        self.commands.push(Command::Vertex(Vector2::new(x, y)));
    }

    fn end(&mut self) {
        self.commands.push(Command::End);
    }

    fn glyph(&mut self, _atlas: &RgbaImage, src: GlyphRect, dst: Quad) {
        self.commands.push(Command::Glyph { src, dst });
    }
}
