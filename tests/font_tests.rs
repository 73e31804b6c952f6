// tests/font_tests.rs

use gfxkit::draw::{Command, GlyphRect, Quad, Recorder};
use gfxkit::font::{Direction, GlyphMetrics};
use gfxkit::{draw_string, BitmapFont, Colour, Error, FontSource, Vector2};
use image::RgbaImage;
use serde_json::json;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Glyph table for 'A'..='C' laid out in a row across a 12x8 atlas.
fn metrics_json(dir: u8) -> serde_json::Value {
    json!({
        "Dir": dir,
        "Low": 65,
        "High": 67,
        "Glyphs": [
            { "X": 0, "Y": 0, "Width": 4, "Height": 8, "Advance": 5 },
            { "X": 4, "Y": 0, "Width": 3, "Height": 8, "Advance": 4 },
            { "X": 8, "Y": 0, "Width": 4, "Height": 6, "Advance": 5 }
        ]
    })
}

struct Fixture {
    _dir: TempDir,
    image: PathBuf,
    metrics: PathBuf,
}

fn fixture(metrics: &serde_json::Value) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let image = dir.path().join("bitmap_font.png");
    let metrics_path = dir.path().join("bitmap-font.js");
    RgbaImage::new(12, 8).save(&image).unwrap();
    std::fs::write(&metrics_path, serde_json::to_vec(metrics).unwrap()).unwrap();
    Fixture {
        _dir: dir,
        image,
        metrics: metrics_path,
    }
}

fn load(f: &Fixture, scale: u32) -> gfxkit::Result<BitmapFont> {
    BitmapFont::load(&f.image, &f.metrics, scale)
}

#[test]
fn loads_and_reports_bounds() {
    let f = fixture(&metrics_json(0));
    let font = load(&f, 2).unwrap();
    assert_eq!(font.atlas().dimensions(), (12, 8));
    assert_eq!(font.metrics().dir, Direction::LeftToRight);
    assert_eq!(font.glyph_bounds(), (8, 16));
    assert_eq!(font.glyph('B').map(|g| g.width), Some(3));
    assert!(font.glyph('a').is_none());
    assert!(font.glyph('@').is_none());
}

#[test]
fn layout_left_to_right_scaled() {
    let f = fixture(&metrics_json(0));
    let font = load(&f, 2).unwrap();
    let placed = font.layout(10.0, 20.0, "AB");
    assert_eq!(placed.len(), 2);
    assert_eq!(
        placed[0],
        (
            GlyphRect { x: 0, y: 0, width: 4, height: 8 },
            Quad { origin: Vector2::new(10.0, 20.0), size: Vector2::new(8.0, 16.0) }
        )
    );
    assert_eq!(placed[1].1.origin, Vector2::new(20.0, 20.0));
    assert_eq!(placed[1].0.x, 4);
}

#[test]
fn layout_skips_unknown_characters() {
    let f = fixture(&metrics_json(0));
    let font = load(&f, 1).unwrap();
    let placed = font.layout(0.0, 0.0, "A?C");
    assert_eq!(placed.len(), 2);
    assert_eq!(placed[1].1.origin, Vector2::new(5.0, 0.0));
}

#[test]
fn layout_other_directions() {
    let f = fixture(&metrics_json(1));
    let font = load(&f, 1).unwrap();
    let placed = font.layout(100.0, 0.0, "AB");
    assert_eq!(placed[0].1.origin, Vector2::new(95.0, 0.0));
    assert_eq!(placed[1].1.origin, Vector2::new(91.0, 0.0));

    let f = fixture(&metrics_json(2));
    let font = load(&f, 1).unwrap();
    let placed = font.layout(0.0, 0.0, "CA");
    assert_eq!(placed[0].1.origin, Vector2::new(0.0, 0.0));
    assert_eq!(placed[1].1.origin, Vector2::new(0.0, 6.0));
}

#[test]
fn draw_string_sets_colour_then_glyphs() {
    let f = fixture(&metrics_json(0));
    let font = load(&f, 1).unwrap();
    let mut rec = Recorder::new();
    draw_string(&mut rec, 0.0, 0.0, "CAB", Colour::GREEN, &font);

    let cmds = rec.commands();
    assert_eq!(cmds.len(), 4);
    assert_eq!(cmds[0], Command::SetColour(Colour::GREEN));
    assert!(cmds[1..].iter().all(|c| matches!(c, Command::Glyph { .. })));
}

#[test]
fn missing_files_are_not_found() {
    let f = fixture(&metrics_json(0));
    let missing = Path::new("/definitely/not/here.png");

    let err = BitmapFont::load(missing, &f.metrics, 1).unwrap_err();
    assert!(matches!(err, Error::ResourceNotFound { ref path, .. } if path == missing));

    let err = BitmapFont::load(&f.image, f.metrics.with_extension("missing"), 1).unwrap_err();
    assert!(matches!(err, Error::ResourceNotFound { .. }));
}

#[test]
fn garbage_image_is_malformed() {
    let f = fixture(&metrics_json(0));
    std::fs::write(&f.image, b"not an image").unwrap();
    let err = load(&f, 1).unwrap_err();
    assert!(matches!(err, Error::ResourceMalformed { ref path, .. } if *path == f.image));
}

#[test]
fn bad_metrics_are_malformed() {
    let f = fixture(&metrics_json(0));

    std::fs::write(&f.metrics, b"{ \"Dir\": 0, ").unwrap();
    assert!(matches!(load(&f, 1), Err(Error::ResourceMalformed { .. })));

    // unknown direction
    std::fs::write(&f.metrics, serde_json::to_vec(&metrics_json(7)).unwrap()).unwrap();
    assert!(matches!(load(&f, 1), Err(Error::ResourceMalformed { .. })));

    // range says four glyphs, table has three
    let mut m = metrics_json(0);
    m["High"] = json!(68);
    std::fs::write(&f.metrics, serde_json::to_vec(&m).unwrap()).unwrap();
    assert!(matches!(load(&f, 1), Err(Error::ResourceMalformed { .. })));

    // glyph hangs off the atlas
    let mut m = metrics_json(0);
    m["Glyphs"][2]["X"] = json!(10);
    std::fs::write(&f.metrics, serde_json::to_vec(&m).unwrap()).unwrap();
    let err = load(&f, 1).unwrap_err();
    assert!(err.to_string().contains("outside"), "{err}");
}

#[test]
fn zero_scale_is_rejected() {
    let f = fixture(&metrics_json(0));
    assert!(matches!(load(&f, 0), Err(Error::InvalidScale(0))));
    assert!(matches!(
        FontSource::new(&f.image, &f.metrics, 0).validate(),
        Err(Error::InvalidScale(0))
    ));
}

#[test]
fn font_source_loads() {
    let f = fixture(&metrics_json(0));
    let font = FontSource::new(&f.image, &f.metrics, 3).load().unwrap();
    assert_eq!(font.scale(), 3);

    let default = FontSource::default();
    assert_eq!(default.scale, 1);
    assert!(default.image.ends_with("bitmap_font.png"));
}

fn single_glyph_metrics() -> GlyphMetrics {
    serde_json::from_value(json!({
        "Dir": 0,
        "Low": 65,
        "High": 65,
        "Glyphs": [{ "X": 0, "Y": 0, "Width": 4, "Height": 8, "Advance": 5 }]
    }))
    .unwrap()
}

#[test]
fn from_parts_rejects_zero_scale() {
    let err = BitmapFont::from_parts(RgbaImage::new(4, 8), single_glyph_metrics(), 0).unwrap_err();
    assert!(matches!(err, Error::InvalidScale(0)));

    let font = BitmapFont::from_parts(RgbaImage::new(4, 8), single_glyph_metrics(), 2).unwrap();
    assert_eq!(font.glyph_bounds(), (8, 16));
}

#[test]
fn glyph_bounds_saturate_at_huge_scale() {
    let font =
        BitmapFont::from_parts(RgbaImage::new(4, 8), single_glyph_metrics(), u32::MAX / 2).unwrap();
    assert_eq!(font.glyph_bounds(), (u32::MAX, u32::MAX));
}
