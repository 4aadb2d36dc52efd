//! Status panel
//!
//! [`StatusPanel`] owns the frame buffer, the five region canvases and
//! the display state, and exposes one mutator per on-screen field. Each
//! mutator re-renders only its own region canvas and blits it into the
//! frame; nothing reaches the hardware until [`StatusPanel::show`].

use core::convert::Infallible;
use core::fmt::Write as _;

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10, FONT_7X13_BOLD, FONT_9X15_BOLD};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Triangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::i2c::I2c;
use heapless::String;

use crate::canvas::{blit, Canvas};
use crate::format::{field_str, in_domain, num_field, VALUE_MAX};
use crate::layout::{
    ClockCanvas, CurrentCanvas, Frame, IconCanvas, RangeCanvas, TitleCanvas, BASELINE_INSET,
    CLOCK_ORIGIN, CURRENT_ORIGIN, ICON_ORIGIN, RANGE_HEIGHT, RANGE_ORIGIN, SPLASH_ORIGIN,
    TITLE_ORIGIN,
};
use crate::ssd1306::Ssd1306;

/// Errors surfaced by the panel
///
/// The only failure mode at this layer is the display link; everything
/// else degrades gracefully (out-of-domain values render as placeholders).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the display
    Communication,
}

/// Process phase shown by the icon region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Temperature rising toward the hold band
    Ramp,
    /// Holding within the band
    Hold,
    /// At peak
    Peak,
    /// Cooling down
    Cool,
}

impl Phase {
    /// Map a wire id to a phase. Unknown ids have no icon.
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Ramp),
            1 => Some(Self::Hold),
            2 => Some(Self::Peak),
            3 => Some(Self::Cool),
            _ => None,
        }
    }

    /// The wire id for this phase.
    pub const fn id(self) -> u8 {
        match self {
            Self::Ramp => 0,
            Self::Hold => 1,
            Self::Peak => 2,
            Self::Cool => 3,
        }
    }
}

/// Upward triangle used by the ramp/hold/peak icons.
const TRI_UP: Triangle = Triangle::new(Point::new(4, 7), Point::new(9, 0), Point::new(14, 7));
/// Downward triangle used by the hold/cool icons.
const TRI_DOWN: Triangle = Triangle::new(Point::new(4, 9), Point::new(14, 9), Point::new(9, 16));

/// Status panel for a 128x64 SSD1306 display
///
/// Single-owner, synchronous. Mutators render into RAM only and cannot
/// fail; [`StatusPanel::begin`] and [`StatusPanel::show`] talk to the bus.
pub struct StatusPanel<I2C> {
    driver: Ssd1306<I2C>,

    frame: Frame,
    time_remaining: i32,

    title_canvas: TitleCanvas,
    clock_canvas: ClockCanvas,
    range_canvas: RangeCanvas,
    current_canvas: CurrentCanvas,
    icon_canvas: IconCanvas,

    // Fonts are fixed per region and never change at runtime
    title_style: MonoTextStyle<'static, BinaryColor>,
    value_style: MonoTextStyle<'static, BinaryColor>,
    range_hi_style: MonoTextStyle<'static, BinaryColor>,
    range_next_style: MonoTextStyle<'static, BinaryColor>,
    splash_style: MonoTextStyle<'static, BinaryColor>,
}

impl<I2C> StatusPanel<I2C>
where
    I2C: I2c,
{
    /// Create a panel at the conventional I2C address (0x3C).
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, crate::ssd1306::DEFAULT_ADDRESS)
    }

    /// Create a panel at a specific I2C address.
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            driver: Ssd1306::with_address(i2c, address),
            frame: Frame::new(),
            time_remaining: -1,
            title_canvas: TitleCanvas::new(),
            clock_canvas: ClockCanvas::new(),
            range_canvas: RangeCanvas::new(),
            current_canvas: CurrentCanvas::new(),
            icon_canvas: IconCanvas::new(),
            title_style: MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
            value_style: MonoTextStyle::new(&FONT_7X13_BOLD, BinaryColor::On),
            range_hi_style: MonoTextStyle::new(&FONT_9X15_BOLD, BinaryColor::On),
            range_next_style: MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
            splash_style: MonoTextStyle::new(&FONT_10X20, BinaryColor::On),
        }
    }

    /// Bring up the display and show a splash string.
    ///
    /// On bus failure nothing is drawn and the error is returned; retry
    /// policy is the caller's. On success the splash is flushed
    /// immediately.
    pub fn begin(&mut self, splash: &str) -> Result<(), DisplayError> {
        self.driver
            .init()
            .map_err(|_| DisplayError::Communication)?;
        self.frame.fill(BinaryColor::Off);
        draw_text(
            &mut self.frame,
            splash,
            self.splash_style,
            SPLASH_ORIGIN,
            Baseline::Top,
        );
        self.show()
    }

    /// Clear the frame buffer.
    ///
    /// Region canvases and display state are untouched; each region
    /// reappears on its own next mutator call.
    pub fn clear_all(&mut self) {
        self.frame.fill(BinaryColor::Off);
    }

    /// Render the title region.
    pub fn set_title(&mut self, title: &str) {
        render_text_region(
            &mut self.frame,
            &mut self.title_canvas,
            self.title_style,
            TITLE_ORIGIN,
            0,
            title,
            false,
        );
    }

    /// Set the remaining time and render the clock region.
    pub fn reset_clock(&mut self, remains: i32) {
        self.time_remaining = remains;
        self.redraw_clock();
    }

    /// Decrement the remaining time by one unit and render the clock.
    ///
    /// There is no lower bound; negative values mean "overrun by N" and
    /// render with a leading sign.
    pub fn tick_clock(&mut self) {
        self.time_remaining -= 1;
        self.redraw_clock();
    }

    /// Current remaining-time value.
    pub fn clock(&self) -> i32 {
        self.time_remaining
    }

    /// Render the low/high/next temperature fields.
    ///
    /// Three right-aligned 3-character fields separated by one blank
    /// column; each independently degrades to `---` outside `[0, 999]`.
    pub fn update_t_ranges(&mut self, lo: i32, hi: i32, next: i32) {
        self.range_canvas.fill(BinaryColor::Off);
        let mut cursor = Point::new(0, RANGE_HEIGHT as i32 - BASELINE_INSET);

        cursor = draw_text(
            &mut self.range_canvas,
            field_str(&num_field(lo)),
            self.value_style,
            cursor,
            Baseline::Alphabetic,
        );
        cursor = draw_text(
            &mut self.range_canvas,
            " ",
            self.range_hi_style,
            cursor,
            Baseline::Alphabetic,
        );
        cursor = draw_text(
            &mut self.range_canvas,
            field_str(&num_field(hi)),
            self.range_hi_style,
            cursor,
            Baseline::Alphabetic,
        );
        cursor = draw_text(
            &mut self.range_canvas,
            " ",
            self.range_hi_style,
            cursor,
            Baseline::Alphabetic,
        );
        draw_text(
            &mut self.range_canvas,
            field_str(&num_field(next)),
            self.range_next_style,
            cursor,
            Baseline::Alphabetic,
        );

        blit(&mut self.frame, &self.range_canvas, RANGE_ORIGIN, false);
    }

    /// Render the current temperature region.
    ///
    /// The value is left-aligned; `in_range == false` inverts the region
    /// as a visual alarm cue. Out-of-domain values show the placeholder,
    /// never inverted.
    pub fn update_current_t(&mut self, value: i32, in_range: bool) {
        let mut text: String<3> = String::new();
        let invert;
        if in_domain(value) {
            let _ = write!(text, "{value}");
            invert = !in_range;
        } else {
            let _ = text.push_str(crate::format::PLACEHOLDER);
            invert = false;
        }
        render_text_region(
            &mut self.frame,
            &mut self.current_canvas,
            self.value_style,
            CURRENT_ORIGIN,
            0,
            &text,
            invert,
        );
    }

    /// Render the phase icon region.
    ///
    /// Unknown ids clear the region and draw nothing.
    pub fn update_icon(&mut self, id: u8) {
        self.icon_canvas.fill(BinaryColor::Off);
        let fill = PrimitiveStyle::with_fill(BinaryColor::On);
        let outline = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

        match Phase::from_id(id) {
            Some(Phase::Ramp) => {
                let _ = TRI_UP.into_styled(fill).draw(&mut self.icon_canvas);
            }
            Some(Phase::Hold) => {
                let _ = TRI_UP.into_styled(fill).draw(&mut self.icon_canvas);
                let _ = TRI_DOWN.into_styled(fill).draw(&mut self.icon_canvas);
            }
            Some(Phase::Peak) => {
                let _ = TRI_UP.into_styled(outline).draw(&mut self.icon_canvas);
            }
            Some(Phase::Cool) => {
                let _ = TRI_DOWN.into_styled(fill).draw(&mut self.icon_canvas);
            }
            None => {}
        }

        blit(&mut self.frame, &self.icon_canvas, ICON_ORIGIN, false);
    }

    /// Push the frame buffer to the display.
    pub fn show(&mut self) -> Result<(), DisplayError> {
        self.driver
            .flush(&self.frame)
            .map_err(|_| DisplayError::Communication)
    }

    fn redraw_clock(&mut self) {
        let negative = self.time_remaining < 0;
        let magnitude = self.time_remaining.unsigned_abs();
        let field = if magnitude <= VALUE_MAX as u32 {
            num_field(magnitude as i32)
        } else {
            *b"---"
        };

        let mut text: String<4> = String::new();
        let _ = text.push(if negative { '-' } else { ' ' });
        let _ = text.push_str(field_str(&field));

        render_text_region(
            &mut self.frame,
            &mut self.clock_canvas,
            self.value_style,
            CLOCK_ORIGIN,
            0,
            &text,
            false,
        );
    }
}

/// Draw `text` and return the cursor position after it.
fn draw_text<D>(
    target: &mut D,
    text: &str,
    style: MonoTextStyle<'static, BinaryColor>,
    position: Point,
    baseline: Baseline,
) -> Point
where
    D: DrawTarget<Color = BinaryColor, Error = Infallible>,
{
    match Text::with_baseline(text, position, style, baseline).draw(target) {
        Ok(next) => next,
        Err(e) => match e {},
    }
}

/// Shared text-region primitive: clear the canvas, print at the fixed
/// baseline, blit into the frame at the region's origin. `invert` swaps
/// foreground and background in the blit.
fn render_text_region<const W: usize, const H: usize, const N: usize>(
    frame: &mut Frame,
    canvas: &mut Canvas<W, H, N>,
    style: MonoTextStyle<'static, BinaryColor>,
    origin: Point,
    lmargin: i32,
    text: &str,
    invert: bool,
) {
    canvas.fill(BinaryColor::Off);
    draw_text(
        canvas,
        text,
        style,
        Point::new(lmargin, H as i32 - BASELINE_INSET),
        Baseline::Alphabetic,
    );
    blit(frame, canvas, origin, invert);
}
