// src/font.rs
//! Scaled bitmap fonts: a glyph atlas image plus a JSON table of glyph
//! rectangles covering a contiguous character range.

use crate::colour::Colour;
use crate::draw::backend::{Backend, GlyphRect, Quad};
use crate::error::{Error, Result};
use crate::vector::Vector2;
use image::{ImageReader, RgbaImage};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, trace};

/// Pen direction when laying out a string.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub enum Direction {
    LeftToRight,
    RightToLeft,
    TopToBottom,
}

impl TryFrom<u8> for Direction {
    type Error = String;

    fn try_from(v: u8) -> std::result::Result<Self, Self::Error> {
        match v {
            0 => Ok(Direction::LeftToRight),
            1 => Ok(Direction::RightToLeft),
            2 => Ok(Direction::TopToBottom),
            other => Err(format!("unknown text direction {other}")),
        }
    }
}

/// Atlas placement and advance of one glyph, unscaled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Glyph {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub advance: u32,
}

impl Glyph {
    fn rect(&self) -> GlyphRect {
        GlyphRect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Contents of the glyph metrics file.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlyphMetrics {
    pub dir: Direction,
    /// First character code in the table.
    pub low: u32,
    /// Last character code in the table, inclusive.
    pub high: u32,
    pub glyphs: Vec<Glyph>,
}

impl GlyphMetrics {
    /// Check the table against itself and against the atlas it indexes.
    pub(crate) fn validate(&self, atlas_width: u32, atlas_height: u32) -> std::result::Result<(), String> {
        if self.high < self.low {
            return Err(format!("range end {} is below start {}", self.high, self.low));
        }
        let expected = (self.high - self.low) as usize + 1;
        if self.glyphs.len() != expected {
            return Err(format!(
                "{} glyphs for a range of {} characters",
                self.glyphs.len(),
                expected
            ));
        }
        for (i, g) in self.glyphs.iter().enumerate() {
            let right = g.x.checked_add(g.width);
            let bottom = g.y.checked_add(g.height);
            match (right, bottom) {
                (Some(r), Some(b)) if r <= atlas_width && b <= atlas_height => {}
                _ => {
                    return Err(format!(
                        "glyph {} ({}x{} at {},{}) lies outside the {}x{} atlas",
                        i, g.width, g.height, g.x, g.y, atlas_width, atlas_height
                    ))
                }
            }
        }
        Ok(())
    }
}

/// A loaded bitmap font, ready to draw.
#[derive(Clone, Debug)]
pub struct BitmapFont {
    atlas: RgbaImage,
    metrics: GlyphMetrics,
    scale: u32,
}

impl BitmapFont {
    /// Load the atlas at `image` and the glyph table at `metrics`, drawing
    /// every glyph `scale` times its atlas size.
    #[instrument(level = "debug", skip(image, metrics), fields(atlas = %image.as_ref().display()))]
    pub fn load(image: impl AsRef<Path>, metrics: impl AsRef<Path>, scale: u32) -> Result<Self> {
        if scale == 0 {
            return Err(Error::InvalidScale(scale));
        }
        let image = image.as_ref();
        let metrics = metrics.as_ref();

        let atlas = ImageReader::new(BufReader::new(open(image)?))
            .with_guessed_format()
            .map_err(|e| Error::malformed(image, e))?
            .decode()
            .map_err(|e| Error::malformed(image, e))?
            .to_rgba8();

        let table: GlyphMetrics = serde_json::from_reader(BufReader::new(open(metrics)?))
            .map_err(|e| Error::malformed(metrics, e))?;
        table
            .validate(atlas.width(), atlas.height())
            .map_err(|reason| Error::malformed(metrics, reason))?;

        debug!(
            width = atlas.width(),
            height = atlas.height(),
            glyphs = table.glyphs.len(),
            "bitmap font loaded"
        );
        Self::from_parts(atlas, table, scale)
    }

    /// Assemble a font from an already decoded atlas and glyph table.
    ///
    /// The table is assumed to be valid for the atlas. A `scale` of zero is
    /// rejected with [`Error::InvalidScale`], as in [`BitmapFont::load`].
    pub fn from_parts(atlas: RgbaImage, metrics: GlyphMetrics, scale: u32) -> Result<Self> {
        if scale == 0 {
            return Err(Error::InvalidScale(scale));
        }
        Ok(Self {
            atlas,
            metrics,
            scale,
        })
    }

    pub fn atlas(&self) -> &RgbaImage {
        &self.atlas
    }

    pub fn metrics(&self) -> &GlyphMetrics {
        &self.metrics
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Width and height of the largest glyph, scaled. Saturates at
    /// `u32::MAX`.
    pub fn glyph_bounds(&self) -> (u32, u32) {
        let (w, h) = self
            .metrics
            .glyphs
            .iter()
            .fold((0, 0), |(w, h), g| (w.max(g.width), h.max(g.height)));
        (w.saturating_mul(self.scale), h.saturating_mul(self.scale))
    }

    /// Glyph for `c`, if the font covers it.
    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        let code = c as u32;
        if code < self.metrics.low || code > self.metrics.high {
            return None;
        }
        self.metrics.glyphs.get((code - self.metrics.low) as usize)
    }

    /// Place every covered character of `text` with the pen starting at
    /// `(x, y)`. Characters outside the font are skipped.
    pub fn layout(&self, x: f64, y: f64, text: &str) -> Vec<(GlyphRect, Quad)> {
        let scale = self.scale as f64;
        let mut pen = Vector2::new(x, y);
        let mut out = Vec::with_capacity(text.len());

        for c in text.chars() {
            let Some(g) = self.glyph(c) else {
                trace!(?c, "no glyph, skipping");
                continue;
            };
            let size = Vector2::new(g.width as f64, g.height as f64) * scale;
            let advance = g.advance as f64 * scale;

            match self.metrics.dir {
                Direction::LeftToRight => {
                    out.push((g.rect(), Quad { origin: pen, size }));
                    pen = pen + Vector2::new(advance, 0.0);
                }
                Direction::RightToLeft => {
                    pen = pen - Vector2::new(advance, 0.0);
                    out.push((g.rect(), Quad { origin: pen, size }));
                }
                Direction::TopToBottom => {
                    out.push((g.rect(), Quad { origin: pen, size }));
                    pen = pen + Vector2::new(0.0, size.y());
                }
            }
        }
        out
    }
}

/// Draw `text` in `colour` with the pen starting at `(x, y)`.
pub fn draw_string<B: Backend + ?Sized>(
    backend: &mut B,
    x: f64,
    y: f64,
    text: &str,
    colour: Colour,
    font: &BitmapFont,
) {
    backend.set_colour(colour);
    for (src, dst) in font.layout(x, y, text) {
        backend.glyph(font.atlas(), src, dst);
    }
}

/// Where to find a bitmap font on disk and how large to draw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontSource {
    pub image: PathBuf,
    pub metrics: PathBuf,
    pub scale: u32,
}

impl Default for FontSource {
    fn default() -> Self {
        Self {
            image: PathBuf::from("fonts/bitmap_font.png"),
            metrics: PathBuf::from("fonts/bitmap-font.js"),
            scale: 1,
        }
    }
}

impl FontSource {
    pub fn new(image: impl Into<PathBuf>, metrics: impl Into<PathBuf>, scale: u32) -> Self {
        Self {
            image: image.into(),
            metrics: metrics.into(),
            scale,
        }
    }

    /// Validate parameters without touching the filesystem.
    pub fn validate(&self) -> Result<()> {
        if self.scale == 0 {
            return Err(Error::InvalidScale(self.scale));
        }
        Ok(())
    }

    pub fn load(&self) -> Result<BitmapFont> {
        self.validate()?;
        BitmapFont::load(&self.image, &self.metrics, self.scale)
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| Error::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })
}
