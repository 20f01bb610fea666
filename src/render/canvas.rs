//! Pixel canvas backed by an `image::RgbaImage`.
//!
//! Opaque primitives and text go through `embedded_graphics`; translucent
//! fills are alpha-blended directly on the buffer.

use std::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use image::{Pixel as _, Rgba, RgbaImage};

/// Axis-aligned pixel rectangle, `x0..x1` by `y0..y1` (end-exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl PixelRect {
    pub fn width(&self) -> i32 {
        (self.x1 - self.x0).max(0)
    }

    pub fn height(&self) -> i32 {
        (self.y1 - self.y0).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn intersect(&self, other: &PixelRect) -> PixelRect {
        PixelRect {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }
}

pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
        }
    }

    pub fn bounds(&self) -> PixelRect {
        PixelRect {
            x0: 0,
            y0: 0,
            x1: self.image.width() as i32,
            y1: self.image.height() as i32,
        }
    }

    /// Alpha-blends `color` over every pixel of `rect` inside the canvas
    pub fn blend_rect(&mut self, rect: PixelRect, color: Rgba<u8>) {
        let area = rect.intersect(&self.bounds());
        if area.is_empty() {
            return;
        }
        for y in area.y0..area.y1 {
            for x in area.x0..area.x1 {
                self.image.get_pixel_mut(x as u32, y as u32).blend(&color);
            }
        }
    }

    /// Dashed horizontal line from `x0` to `x1` (exclusive) at row `y`
    pub fn dashed_hline(&mut self, x0: i32, x1: i32, y: i32, dash: i32, color: Rgba<u8>) {
        for x in x0..x1 {
            if (x - x0) / dash.max(1) % 2 == 0 {
                self.put(x, y, color);
            }
        }
    }

    /// Dashed vertical line from `y0` to `y1` (exclusive) at column `x`
    pub fn dashed_vline(&mut self, x: i32, y0: i32, y1: i32, dash: i32, color: Rgba<u8>) {
        for y in y0..y1 {
            if (y - y0) / dash.max(1) % 2 == 0 {
                self.put(x, y, color);
            }
        }
    }

    /// Draws an `embedded_graphics` item; drawing into memory cannot fail
    pub fn paint<D>(&mut self, item: &D)
    where
        D: Drawable<Color = Rgb888>,
    {
        let _ = item.draw(self);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn put(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(px) = self.image.get_pixel_mut_checked(x as u32, y as u32) {
            px.blend(&color);
        }
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.put(point.x, point.y, Rgba([color.r(), color.g(), color.b(), 255]));
        }
        Ok(())
    }
}
