//! 1-bpp pixel canvases
//!
//! [`Canvas`] is a packed monochrome pixel buffer implementing
//! `embedded-graphics`' [`DrawTarget`], used both for the full display
//! frame and for the small off-screen region buffers. [`blit`] copies a
//! region canvas into the frame at a fixed offset, optionally with
//! foreground/background swapped.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// Bytes needed for a `w` x `h` 1-bpp buffer.
pub const fn bytes_for(w: usize, h: usize) -> usize {
    (w * h + 7) / 8
}

/// Fixed-size monochrome canvas, one bit per pixel, row-major, MSB first.
///
/// `N` must equal [`bytes_for`]`(W, H)`; the per-region type aliases in
/// [`crate::layout`] are the intended constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas<const W: usize, const H: usize, const N: usize> {
    data: [u8; N],
}

impl<const W: usize, const H: usize, const N: usize> Default for Canvas<W, H, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize, const N: usize> Canvas<W, H, N> {
    /// Create a canvas with all pixels off.
    pub const fn new() -> Self {
        assert!(N == bytes_for(W, H));
        Self { data: [0; N] }
    }

    /// Canvas width in pixels.
    pub const fn width(&self) -> usize {
        W
    }

    /// Canvas height in pixels.
    pub const fn height(&self) -> usize {
        H
    }

    /// Fill the whole canvas with one color.
    pub fn fill(&mut self, color: BinaryColor) {
        let byte = if color == BinaryColor::On { 0xFF } else { 0x00 };
        self.data.fill(byte);
    }

    /// Read one pixel. Out-of-bounds coordinates read as off.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= W || y >= H {
            return false;
        }
        let bit = y * W + x;
        self.data[bit / 8] & (0x80 >> (bit % 8)) != 0
    }

    /// Write one pixel. Out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= W || y >= H {
            return;
        }
        let bit = y * W + x;
        let mask = 0x80 >> (bit % 8);
        if on {
            self.data[bit / 8] |= mask;
        } else {
            self.data[bit / 8] &= !mask;
        }
    }
}

impl<const W: usize, const H: usize, const N: usize> OriginDimensions for Canvas<W, H, N> {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl<const W: usize, const H: usize, const N: usize> DrawTarget for Canvas<W, H, N> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x >= 0 && coord.y >= 0 {
                self.set_pixel(coord.x as usize, coord.y as usize, color == BinaryColor::On);
            }
        }
        Ok(())
    }
}

/// Copy a region canvas into a destination canvas at `origin`.
///
/// Every pixel of the source rectangle is written, so the destination
/// area is fully overwritten (set pixels become foreground, clear pixels
/// background). With `invert` the two are swapped. Writes outside the
/// destination bounds are clipped.
pub fn blit<
    const DW: usize,
    const DH: usize,
    const DN: usize,
    const W: usize,
    const H: usize,
    const N: usize,
>(
    dst: &mut Canvas<DW, DH, DN>,
    src: &Canvas<W, H, N>,
    origin: Point,
    invert: bool,
) {
    for y in 0..H {
        for x in 0..W {
            let on = src.pixel(x, y) != invert;
            let dx = origin.x + x as i32;
            let dy = origin.y + y as i32;
            if dx >= 0 && dy >= 0 {
                dst.set_pixel(dx as usize, dy as usize, on);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Frame, IconCanvas};

    #[test]
    fn test_pixel_roundtrip() {
        let mut canvas = IconCanvas::new();
        assert!(!canvas.pixel(3, 4));
        canvas.set_pixel(3, 4, true);
        assert!(canvas.pixel(3, 4));
        canvas.set_pixel(3, 4, false);
        assert!(!canvas.pixel(3, 4));
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut canvas = IconCanvas::new();
        canvas.set_pixel(canvas.width(), 0, true);
        canvas.set_pixel(0, canvas.height(), true);
        assert!(!canvas.pixel(canvas.width(), 0));
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                assert!(!canvas.pixel(x, y));
            }
        }
    }

    #[test]
    fn test_fill() {
        let mut canvas = IconCanvas::new();
        canvas.fill(BinaryColor::On);
        assert!(canvas.pixel(0, 0));
        assert!(canvas.pixel(canvas.width() - 1, canvas.height() - 1));
        canvas.fill(BinaryColor::Off);
        assert!(!canvas.pixel(0, 0));
    }

    #[test]
    fn test_blit_overwrites_rect_only() {
        let mut frame = Frame::new();
        frame.fill(BinaryColor::On);

        let mut src = IconCanvas::new();
        src.set_pixel(1, 2, true);
        let origin = Point::new(10, 20);
        blit(&mut frame, &src, origin, false);

        // Inside the rect: exact copy of the source
        assert!(frame.pixel(11, 22));
        assert!(!frame.pixel(10, 20));
        // Outside the rect: untouched
        assert!(frame.pixel(9, 20));
        assert!(frame.pixel(10, 19));
        assert!(frame.pixel(10 + src.width(), 20));
        assert!(frame.pixel(10, 20 + src.height()));
    }

    #[test]
    fn test_blit_invert_complements() {
        let mut normal = Frame::new();
        let mut inverted = Frame::new();

        let mut src = IconCanvas::new();
        src.set_pixel(0, 0, true);
        src.set_pixel(5, 7, true);

        blit(&mut normal, &src, Point::zero(), false);
        blit(&mut inverted, &src, Point::zero(), true);

        for y in 0..src.height() {
            for x in 0..src.width() {
                assert_ne!(normal.pixel(x, y), inverted.pixel(x, y));
            }
        }
    }

    #[test]
    fn test_blit_clips_at_edges() {
        let mut frame = Frame::new();
        let mut src = IconCanvas::new();
        src.fill(BinaryColor::On);
        // Partially off-screen in both directions
        blit(&mut frame, &src, Point::new(120, 60), false);
        blit(&mut frame, &src, Point::new(-5, -5), false);
        assert!(frame.pixel(127, 63));
        assert!(frame.pixel(0, 0));
    }
}
