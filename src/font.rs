//! Label fonts: a scalable TrueType font when one can be loaded from disk,
//! with a built-in bitmap fallback so the tool keeps working without any
//! font installed.
//!
//! The fallback renders 5x7 dot-matrix glyphs at a fixed small scale and does
//! not honor the requested font size (same degradation as the reference
//! pipeline's default font).

use std::path::Path;

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{Rgb, RgbImage};

/// Upward nudge applied to the centered label; digit glyphs sit visually low
/// inside the circle without it.
const OFFSET_Y: i32 = -10;

const BUILTIN_COLS: u32 = 5;
const BUILTIN_ROWS: u32 = 7;
/// Edge length in pixels of one dot of the bitmap fallback.
const BUILTIN_DOT: u32 = 4;

pub enum LabelFont {
    Scalable { font: FontVec, size: f32 },
    Builtin,
}

impl LabelFont {
    /// Try the preferred font at `path`; fall back to the built-in bitmap
    /// glyphs with a console notice when it cannot be read or decoded.
    pub fn load(path: &Path, size: f32) -> Self {
        let loaded = std::fs::read(path)
            .ok()
            .and_then(|data| FontVec::try_from_vec(data).ok());
        match loaded {
            Some(font) => LabelFont::Scalable { font, size },
            None => {
                println!(
                    "Font {} not found, using built-in bitmap font.",
                    path.display()
                );
                LabelFont::Builtin
            }
        }
    }

    /// Draw `text` centered on `(cx, cy)`, with the fixed vertical offset
    /// correction applied.
    pub fn draw_centered(&self, img: &mut RgbImage, text: &str, cx: i32, cy: i32, color: Rgb<u8>) {
        match self {
            LabelFont::Scalable { font, size } => {
                draw_scalable(img, font, *size, text, cx, cy + OFFSET_Y, color)
            }
            LabelFont::Builtin => draw_builtin(img, text, cx, cy + OFFSET_Y, color),
        }
    }
}

fn draw_scalable(
    img: &mut RgbImage,
    font: &FontVec,
    size: f32,
    text: &str,
    cx: i32,
    cy: i32,
    color: Rgb<u8>,
) {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);

    // Lay the run out on a baseline at y = ascent, then shift the whole run
    // so its measured pixel bounds land centered on (cx, cy).
    let mut caret = 0.0f32;
    let mut prev: Option<ab_glyph::GlyphId> = None;
    let mut outlined = Vec::new();
    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(p) = prev {
            caret += scaled.kern(p, id);
        }
        let glyph = id.with_scale_and_position(scale, ab_glyph::point(caret, scaled.ascent()));
        caret += scaled.h_advance(id);
        prev = Some(id);
        if let Some(og) = font.outline_glyph(glyph) {
            outlined.push(og);
        }
    }

    let bounds = outlined
        .iter()
        .map(|og| og.px_bounds())
        .reduce(|a, b| ab_glyph::Rect {
            min: ab_glyph::point(a.min.x.min(b.min.x), a.min.y.min(b.min.y)),
            max: ab_glyph::point(a.max.x.max(b.max.x), a.max.y.max(b.max.y)),
        });
    let Some(bounds) = bounds else { return };

    let dx = cx as f32 - bounds.width() / 2.0 - bounds.min.x;
    let dy = cy as f32 - bounds.height() / 2.0 - bounds.min.y;

    let (w, h) = (img.width(), img.height());
    for og in &outlined {
        let gb = og.px_bounds();
        og.draw(|x, y, cov| {
            let px = (gb.min.x + dx).round() as i32 + x as i32;
            let py = (gb.min.y + dy).round() as i32 + y as i32;
            if px >= 0 && py >= 0 && (px as u32) < w && (py as u32) < h {
                blend(img.get_pixel_mut(px as u32, py as u32), color, cov);
            }
        });
    }
}

fn blend(px: &mut Rgb<u8>, color: Rgb<u8>, coverage: f32) {
    let a = coverage.clamp(0.0, 1.0);
    for i in 0..3 {
        px.0[i] = (px.0[i] as f32 * (1.0 - a) + color.0[i] as f32 * a).round() as u8;
    }
}

fn draw_builtin(img: &mut RgbImage, text: &str, cx: i32, cy: i32, color: Rgb<u8>) {
    let count = text.chars().count() as u32;
    if count == 0 {
        return;
    }
    let advance = (BUILTIN_COLS + 1) * BUILTIN_DOT;
    let total_w = count * advance - BUILTIN_DOT;
    let total_h = BUILTIN_ROWS * BUILTIN_DOT;
    let x0 = cx - total_w as i32 / 2;
    let y0 = cy - total_h as i32 / 2;

    for (i, ch) in text.chars().enumerate() {
        let rows = builtin_rows(ch);
        let gx = x0 + (i as u32 * advance) as i32;
        for (row, bits) in rows.iter().copied().enumerate() {
            for col in 0..BUILTIN_COLS {
                if bits & (1u8 << (BUILTIN_COLS - 1 - col)) != 0 {
                    fill_dot(
                        img,
                        gx + (col * BUILTIN_DOT) as i32,
                        y0 + (row as u32 * BUILTIN_DOT) as i32,
                        color,
                    );
                }
            }
        }
    }
}

fn fill_dot(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    for dy in 0..BUILTIN_DOT as i32 {
        for dx in 0..BUILTIN_DOT as i32 {
            let px = x + dx;
            let py = y + dy;
            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

/// 5x7 dot-matrix rows, most significant bit = leftmost column. Unknown
/// characters render as a boxed outline.
fn builtin_rows(ch: char) -> [u8; 7] {
    match ch {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '?' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        _ => [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111],
    }
}
