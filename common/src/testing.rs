//! Host-side draw target that records what was painted.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Framebuffer-backed `DrawTarget` with write accounting.
pub struct RecordingDisplay {
    size: Size,
    pixels: Vec<Rgb565>,
    writes: usize,
    cleared_with: Option<Rgb565>,
    min: Option<Point>,
    max: Option<Point>,
}

impl RecordingDisplay {
    pub fn new(
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: vec![Rgb565::BLACK; (width * height) as usize],
            writes: 0,
            cleared_with: None,
            min: None,
            max: None,
        }
    }

    /// Pixel writes since creation or the last [`Self::forget`], excluding clears.
    pub fn drawn(&self) -> usize { self.writes }

    /// Whether nothing at all (not even a clear) reached the target.
    pub fn untouched(&self) -> bool { self.writes == 0 && self.cleared_with.is_none() }

    /// Color of the most recent clear.
    pub fn cleared_with(&self) -> Option<Rgb565> { self.cleared_with }

    /// Number of framebuffer pixels currently showing `color`.
    pub fn count(
        &self,
        color: Rgb565,
    ) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Number of pixels inside `area` showing something other than `color`.
    pub fn count_other_in(
        &self,
        area: &Rectangle,
        color: Rgb565,
    ) -> usize {
        area.points()
            .filter(|p| p.x >= 0 && p.y >= 0 && p.x < self.size.width as i32 && p.y < self.size.height as i32)
            .filter(|p| self.pixels[p.y as usize * self.size.width as usize + p.x as usize] != color)
            .count()
    }

    /// Bounding box of all individually drawn pixels.
    pub fn drawn_bounds(&self) -> Option<Rectangle> {
        let (min, max) = (self.min?, self.max?);
        Some(Rectangle::with_corners(min, max))
    }

    /// Reset the write log, keeping the framebuffer.
    pub fn forget(&mut self) {
        self.writes = 0;
        self.cleared_with = None;
        self.min = None;
        self.max = None;
    }
}

impl OriginDimensions for RecordingDisplay {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for RecordingDisplay {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 || point.x >= self.size.width as i32 || point.y >= self.size.height as i32 {
                continue;
            }
            let index = point.y as usize * self.size.width as usize + point.x as usize;
            self.pixels[index] = color;
            self.writes += 1;
            self.min = Some(self.min.map_or(point, |m| m.component_min(point)));
            self.max = Some(self.max.map_or(point, |m| m.component_max(point)));
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.pixels.fill(color);
        self.cleared_with = Some(color);
        Ok(())
    }
}
