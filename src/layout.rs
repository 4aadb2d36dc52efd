//! Fixed display geometry
//!
//! The panel layout is a compile-time contract: five rectangular regions
//! at fixed offsets inside a 128x64 raster. Region sizes never change
//! after construction; only their pixel contents do.

use embedded_graphics::prelude::Point;

use crate::canvas::{bytes_for, Canvas};

/// Display raster width in pixels.
pub const DISPLAY_WIDTH: usize = 128;
/// Display raster height in pixels.
pub const DISPLAY_HEIGHT: usize = 64;

/// Title region, top-left.
pub const TITLE_WIDTH: usize = 84;
pub const TITLE_HEIGHT: usize = 18;
pub const TITLE_ORIGIN: Point = Point::new(0, 0);

/// Countdown clock region, top-right.
pub const CLOCK_WIDTH: usize = 42;
pub const CLOCK_HEIGHT: usize = 18;
pub const CLOCK_ORIGIN: Point = Point::new(86, 0);

/// Temperature range (lo/hi/next) region, full-width middle band.
pub const RANGE_WIDTH: usize = 128;
pub const RANGE_HEIGHT: usize = 28;
pub const RANGE_ORIGIN: Point = Point::new(0, 18);

/// Current temperature region, bottom, right of the icon.
pub const CURRENT_WIDTH: usize = 96;
pub const CURRENT_HEIGHT: usize = 18;
pub const CURRENT_ORIGIN: Point = Point::new(32, 46);

/// Phase icon region, bottom-left corner.
pub const ICON_WIDTH: usize = 20;
pub const ICON_HEIGHT: usize = 18;
pub const ICON_ORIGIN: Point = Point::new(0, 46);

/// Text baseline sits this many pixels above a region's bottom edge.
pub const BASELINE_INSET: i32 = 4;

/// Top-left anchor of the splash string drawn by `begin`.
pub const SPLASH_ORIGIN: Point = Point::new(0, 12);

/// Full-frame buffer.
pub type Frame = Canvas<DISPLAY_WIDTH, DISPLAY_HEIGHT, { bytes_for(DISPLAY_WIDTH, DISPLAY_HEIGHT) }>;
/// Title region buffer.
pub type TitleCanvas = Canvas<TITLE_WIDTH, TITLE_HEIGHT, { bytes_for(TITLE_WIDTH, TITLE_HEIGHT) }>;
/// Clock region buffer.
pub type ClockCanvas = Canvas<CLOCK_WIDTH, CLOCK_HEIGHT, { bytes_for(CLOCK_WIDTH, CLOCK_HEIGHT) }>;
/// Temperature-range region buffer.
pub type RangeCanvas = Canvas<RANGE_WIDTH, RANGE_HEIGHT, { bytes_for(RANGE_WIDTH, RANGE_HEIGHT) }>;
/// Current-temperature region buffer.
pub type CurrentCanvas =
    Canvas<CURRENT_WIDTH, CURRENT_HEIGHT, { bytes_for(CURRENT_WIDTH, CURRENT_HEIGHT) }>;
/// Phase-icon region buffer.
pub type IconCanvas = Canvas<ICON_WIDTH, ICON_HEIGHT, { bytes_for(ICON_WIDTH, ICON_HEIGHT) }>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_fit_inside_frame() {
        let rects = [
            (TITLE_ORIGIN, TITLE_WIDTH, TITLE_HEIGHT),
            (CLOCK_ORIGIN, CLOCK_WIDTH, CLOCK_HEIGHT),
            (RANGE_ORIGIN, RANGE_WIDTH, RANGE_HEIGHT),
            (CURRENT_ORIGIN, CURRENT_WIDTH, CURRENT_HEIGHT),
            (ICON_ORIGIN, ICON_WIDTH, ICON_HEIGHT),
        ];
        for (origin, w, h) in rects {
            assert!(origin.x >= 0 && origin.y >= 0);
            assert!(origin.x as usize + w <= DISPLAY_WIDTH);
            assert!(origin.y as usize + h <= DISPLAY_HEIGHT);
        }
    }
}
