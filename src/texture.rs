//! Texture synthesis: a colored background, a white filled circle, and a
//! centered numeral.

use image::{Rgb, RgbImage};

use crate::font::LabelFont;

pub const IMG_WIDTH: u32 = 512;
pub const IMG_HEIGHT: u32 = 256;
pub const CIRCLE_RADIUS: i32 = 100;
pub const CIRCLE_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
pub const TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Scale a normalized material color to 0-255. Truncates rather than rounds,
/// matching the original asset pipeline.
pub fn background_color(color: [f32; 3]) -> Rgb<u8> {
    Rgb([
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
    ])
}

/// Rasterize the placeholder texture for one ball.
pub fn synthesize(label: &str, color: [f32; 3], font: &LabelFont) -> RgbImage {
    let mut img = RgbImage::from_pixel(IMG_WIDTH, IMG_HEIGHT, background_color(color));
    let cx = (IMG_WIDTH / 2) as i32;
    let cy = (IMG_HEIGHT / 2) as i32;
    fill_circle(&mut img, cx, cy, CIRCLE_RADIUS, CIRCLE_COLOR);
    font.draw_centered(&mut img, label, cx, cy, TEXT_COLOR);
    img
}

fn fill_circle(img: &mut RgbImage, cx: i32, cy: i32, radius: i32, color: Rgb<u8>) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                let x = cx + dx;
                let y = cy + dy;
                if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
                    img.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}
