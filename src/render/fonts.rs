use embedded_graphics::mono_font::iso_8859_1::{
    FONT_10X20, FONT_4X6, FONT_5X7, FONT_5X8, FONT_6X10, FONT_6X12, FONT_6X13, FONT_6X9, FONT_7X14,
    FONT_9X15, FONT_9X18,
};
use embedded_graphics::mono_font::MonoFont;

/// Bitmap fonts covering Latin-1, smallest first
const FONTS: [&MonoFont<'static>; 11] = [
    &FONT_4X6, &FONT_5X7, &FONT_5X8, &FONT_6X9, &FONT_6X10, &FONT_6X12, &FONT_6X13, &FONT_7X14,
    &FONT_9X15, &FONT_9X18, &FONT_10X20,
];

/// Pixel height of a `points`-sized font at `dpi`
pub fn points_to_pixels(points: u32, dpi: u32) -> u32 {
    (points as f32 * dpi as f32 / 72.0).round() as u32
}

/// Largest available font whose glyphs fit in the pixel height of `points` at `dpi`
pub fn font_for_points(points: u32, dpi: u32) -> &'static MonoFont<'static> {
    let px = points_to_pixels(points, dpi);
    FONTS
        .iter()
        .rev()
        .find(|font| font.character_size.height <= px)
        .copied()
        .unwrap_or(FONTS[0])
}
