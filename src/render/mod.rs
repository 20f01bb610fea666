//! Rasterizes a [`ChartLayout`] into a PNG image.

pub mod canvas;
pub mod fonts;

use std::io::Cursor;
use std::path::Path;

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};
use image::{ImageFormat, Rgba, RgbaImage};
use tracing::debug;

use crate::config::FigureSettings;
use crate::error::Result;
use crate::layout::{BlockLayout, ChartLayout};
use canvas::{Canvas, PixelRect};
use fonts::font_for_points;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const GRID: Rgba<u8> = Rgba([176, 176, 176, 255]);

const TICK_POINTS: u32 = 10;
const AXIS_LABEL_POINTS: u32 = 10;
const TITLE_POINTS: u32 = 12;

/// Maps data coordinates onto the pixel rectangle of the plot area
#[derive(Debug, Clone, Copy)]
pub struct PlotFrame {
    pub area: PixelRect,
    x_range: (f64, f64),
    y_range: (f64, f64),
}

impl PlotFrame {
    /// Places the plot area inside the figure, leaving margins for ticks and titles
    pub fn new(layout: &ChartLayout, figure: &FigureSettings) -> Self {
        let (width, height) = figure.pixel_size();
        let inch = figure.dpi as f32;
        let margin = |inches: f32| (inches * inch).round() as i32;

        Self {
            area: PixelRect {
                x0: margin(0.9),
                y0: margin(0.7),
                x1: width as i32 - margin(0.3),
                y1: height as i32 - margin(0.8),
            },
            x_range: layout.x_range,
            y_range: layout.y_range,
        }
    }

    pub fn x_to_px(&self, x: f64) -> i32 {
        let (lo, hi) = self.x_range;
        self.area.x0 + ((x - lo) / (hi - lo) * self.area.width() as f64).round() as i32
    }

    /// Earlier times map to smaller rows, so the day reads top to bottom
    pub fn y_to_px(&self, y: f64) -> i32 {
        let (lo, hi) = self.y_range;
        self.area.y0 + ((y - lo) / (hi - lo) * self.area.height() as f64).round() as i32
    }

    /// Pixel rectangle of a block, normalised so reversed ranges still cover an area
    pub fn block_rect(&self, block: &BlockLayout) -> PixelRect {
        let (xa, xb) = (self.x_to_px(block.x), self.x_to_px(block.x + block.width));
        let (ya, yb) = (self.y_to_px(block.y), self.y_to_px(block.y + block.height));
        PixelRect {
            x0: xa.min(xb),
            y0: ya.min(yb),
            x1: xa.max(xb),
            y1: ya.max(yb),
        }
    }

    fn clip_area(&self) -> Rectangle {
        to_rectangle(self.area)
    }
}

fn to_rectangle(rect: PixelRect) -> Rectangle {
    Rectangle::new(
        Point::new(rect.x0, rect.y0),
        Size::new(rect.width() as u32, rect.height() as u32),
    )
}

fn text_style(alignment: Alignment) -> TextStyle {
    TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(Baseline::Middle)
        .build()
}

/// Draws `lines` as a block vertically centered on `center`
fn draw_centered_lines<D>(target: &mut D, lines: &[&str], center: Point, font: &MonoFont<'_>)
where
    D: DrawTarget<Color = Rgb888>,
{
    let line_height = font.character_size.height as i32;
    let first = center.y - (lines.len() as i32 - 1) * line_height / 2;
    let style = MonoTextStyle::new(font, Rgb888::BLACK);
    for (i, line) in lines.iter().enumerate() {
        let origin = Point::new(center.x, first + i as i32 * line_height);
        let _ = Text::with_text_style(line, origin, style, text_style(Alignment::Center)).draw(target);
    }
}

fn draw_block_fills(canvas: &mut Canvas, frame: &PlotFrame, layout: &ChartLayout) {
    for block in &layout.blocks {
        let rect = frame.block_rect(block).intersect(&frame.area);
        canvas.blend_rect(rect, block.fill);
    }
}

fn draw_block_borders(canvas: &mut Canvas, frame: &PlotFrame, layout: &ChartLayout) {
    let border = PrimitiveStyle::with_stroke(Rgb888::BLACK, 1);
    let mut plot = canvas.clipped(&frame.clip_area());
    for block in &layout.blocks {
        let rect = frame.block_rect(block);
        if !rect.is_empty() {
            let _ = to_rectangle(rect).into_styled(border).draw(&mut plot);
        }
    }
}

fn draw_grid(canvas: &mut Canvas, frame: &PlotFrame, layout: &ChartLayout) {
    let area = frame.area;
    for tick in &layout.x_ticks {
        let x = frame.x_to_px(tick.position);
        if x >= area.x0 && x < area.x1 {
            canvas.dashed_vline(x, area.y0, area.y1, 4, GRID);
        }
    }
    for tick in &layout.y_ticks {
        let y = frame.y_to_px(tick.position);
        if y >= area.y0 && y < area.y1 {
            canvas.dashed_hline(area.x0, area.x1, y, 4, GRID);
        }
    }
}

fn draw_block_labels(canvas: &mut Canvas, frame: &PlotFrame, layout: &ChartLayout, dpi: u32) {
    let mut plot = canvas.clipped(&frame.clip_area());
    for block in &layout.blocks {
        let (cx, cy) = block.center();
        let center = Point::new(frame.x_to_px(cx), frame.y_to_px(cy));
        let lines: Vec<&str> = block.label.split('\n').collect();
        draw_centered_lines(&mut plot, &lines, center, font_for_points(block.font_size, dpi));
    }
}

fn draw_axes(canvas: &mut Canvas, frame: &PlotFrame, layout: &ChartLayout, dpi: u32) {
    let area = frame.area;
    let black = PrimitiveStyle::with_stroke(Rgb888::BLACK, 1);
    canvas.paint(&to_rectangle(area).into_styled(black));

    let tick_font = font_for_points(TICK_POINTS, dpi);
    let tick_style = MonoTextStyle::new(tick_font, Rgb888::BLACK);
    let tick_len = (dpi as i32 / 25).max(2);
    let pad = tick_len + 2;

    for tick in &layout.x_ticks {
        let x = frame.x_to_px(tick.position);
        canvas.paint(
            &Line::new(Point::new(x, area.y1), Point::new(x, area.y1 + tick_len)).into_styled(black),
        );
        let origin = Point::new(x, area.y1 + pad + tick_font.character_size.height as i32 / 2);
        canvas.paint(&Text::with_text_style(&tick.label, origin, tick_style, text_style(Alignment::Center)));
    }

    for tick in &layout.y_ticks {
        let y = frame.y_to_px(tick.position);
        canvas.paint(
            &Line::new(Point::new(area.x0 - tick_len, y), Point::new(area.x0, y)).into_styled(black),
        );
        let origin = Point::new(area.x0 - pad, y);
        canvas.paint(&Text::with_text_style(&tick.label, origin, tick_style, text_style(Alignment::Right)));
    }
}

fn draw_titles(canvas: &mut Canvas, frame: &PlotFrame, layout: &ChartLayout, dpi: u32) {
    let area = frame.area;
    let title_font = font_for_points(TITLE_POINTS, dpi);
    let label_font = font_for_points(AXIS_LABEL_POINTS, dpi);
    let tick_height = font_for_points(TICK_POINTS, dpi).character_size.height as i32;
    let center_x = (area.x0 + area.x1) / 2;

    let title_y = area.y0 / 2;
    draw_centered_lines(canvas, &[layout.title.as_str()], Point::new(center_x, title_y), title_font);

    let x_label_y = area.y1 + tick_height * 2 + label_font.character_size.height as i32;
    draw_centered_lines(canvas, &[layout.x_label.as_str()], Point::new(center_x, x_label_y), label_font);

    // no rotated glyphs in a bitmap font: stack the y caption one letter per row
    let letters: Vec<String> = layout.y_label.chars().map(|c| c.to_string()).collect();
    let letters: Vec<&str> = letters.iter().map(String::as_str).collect();
    let y_label_x = (label_font.character_size.width as i32).max(area.x0 / 6);
    draw_centered_lines(
        canvas,
        &letters,
        Point::new(y_label_x, (area.y0 + area.y1) / 2),
        label_font,
    );
}

/// Renders the chart into an RGBA image of the configured figure size
pub fn render_chart(layout: &ChartLayout, figure: &FigureSettings) -> RgbaImage {
    let (width, height) = figure.pixel_size();
    let frame = PlotFrame::new(layout, figure);
    let mut canvas = Canvas::new(width, height, BACKGROUND);

    draw_block_fills(&mut canvas, &frame, layout);
    draw_grid(&mut canvas, &frame, layout);
    draw_block_borders(&mut canvas, &frame, layout);
    draw_block_labels(&mut canvas, &frame, layout, figure.dpi);
    draw_axes(&mut canvas, &frame, layout, figure.dpi);
    draw_titles(&mut canvas, &frame, layout, figure.dpi);

    debug!("Rendered {} blocks onto a {}x{} canvas", layout.blocks.len(), width, height);
    canvas.into_image()
}

/// Encodes an image as PNG bytes
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Writes an image to `path` as PNG, whatever the file extension
pub fn write_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<()> {
    image.save_with_format(path.as_ref(), ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;
    use crate::layout::build_chart;
    use crate::schedule::{ScheduleEntry, TimeOfDay, Weekday};

    fn entry(day: Weekday, start: &str, end: &str, activity: &str) -> ScheduleEntry {
        ScheduleEntry::new(
            day,
            TimeOfDay::parse(start).unwrap(),
            TimeOfDay::parse(end).unwrap(),
            activity,
        )
    }

    #[test]
    fn frame_maps_days_and_hours() {
        let config = ChartConfig::default();
        let layout = build_chart(&[], &config).unwrap();
        let frame = PlotFrame::new(&layout, &config.figure);
        assert_eq!(frame.x_to_px(0.0), frame.area.x0);
        assert_eq!(frame.x_to_px(7.0), frame.area.x1);
        assert_eq!(frame.y_to_px(9.0), frame.area.y0);
        assert_eq!(frame.y_to_px(layout.y_range.1), frame.area.y1);
        assert!(frame.y_to_px(10.0) < frame.y_to_px(11.0));
    }

    #[test]
    fn reversed_block_still_covers_pixels() {
        let config = ChartConfig::default();
        let layout = build_chart(&[entry(Weekday::Jeudi, "12:00", "11:00", "Oups")], &config).unwrap();
        let frame = PlotFrame::new(&layout, &config.figure);
        let rect = frame.block_rect(&layout.blocks[0]);
        assert!(!rect.is_empty());
        assert_eq!(rect.y0, frame.y_to_px(11.0));
    }

    #[test]
    fn block_interior_is_tinted_with_its_color() {
        let config = ChartConfig::default();
        let layout =
            build_chart(&[entry(Weekday::Mercredi, "13:00", "17:00", "Sport")], &config).unwrap();
        let image = render_chart(&layout, &config.figure);
        assert_eq!(image.dimensions(), (1200, 1600));

        let frame = PlotFrame::new(&layout, &config.figure);
        let rect = frame.block_rect(&layout.blocks[0]);
        // a quarter of the way in: clear of the border, grid and centered label
        let px = image.get_pixel((rect.x0 + rect.width() / 4 + 1) as u32, (rect.y0 + 3) as u32);
        // tab20 blue at half opacity over white
        assert!((px[0] as i32 - 0x8f).abs() <= 2, "red channel {}", px[0]);
        assert!((px[1] as i32 - 0xbb).abs() <= 2, "green channel {}", px[1]);
        assert!((px[2] as i32 - 0xd9).abs() <= 2, "blue channel {}", px[2]);

        let border = image.get_pixel(rect.x0 as u32, (rect.y0 + 5) as u32);
        assert_eq!(border.0[..3], [0, 0, 0]);

        let outside = image.get_pixel((rect.x1 + 20) as u32, (rect.y0 + 3) as u32);
        assert_eq!(outside.0, [255, 255, 255, 255]);
    }

    #[test]
    fn blocks_outside_the_visible_range_are_clipped() {
        let config = ChartConfig::default();
        let layout = build_chart(&[entry(Weekday::Lundi, "06:00", "08:00", "Réveil")], &config).unwrap();
        let image = render_chart(&layout, &config.figure);
        let frame = PlotFrame::new(&layout, &config.figure);
        // the title band above the plot stays white where the block would have been
        let x = (frame.x_to_px(0.5)) as u32;
        let y = (frame.area.y0 - 5) as u32;
        assert_eq!(image.get_pixel(x, y).0, [255, 255, 255, 255]);
    }

    #[test]
    fn png_bytes_carry_the_signature() {
        let config = ChartConfig::default();
        let layout = build_chart(&[], &config).unwrap();
        let bytes = encode_png(&render_chart(&layout, &config.figure)).unwrap();
        assert_eq!(&bytes[0..8], b"\x89PNG\r\n\x1a\n");
    }
}
