//! Status panel renderer for 128x64 OLED oven controllers
//!
//! This crate owns the on-screen presentation of an oven/proofer status
//! display: a title, a countdown clock, the low/high/next temperature
//! range, the current temperature, and a phase icon. Each field renders
//! into its own fixed-size off-screen canvas, which is blitted into a
//! full-frame buffer at a fixed offset; an explicit [`StatusPanel::show`]
//! pushes the frame to an SSD1306-class display over I2C.
//!
//! The control loop that decides *what* to show lives elsewhere; this
//! crate is strictly presentational.
//!
//! # Layout
//!
//! ```text
//! +---------------------+--------+
//! | title        84x18  | clock  |
//! +---------------------+--------+
//! | lo   hi   next       128x28  |
//! +----+-------------------------+
//! |icon| current T         96x18 |
//! +----+-------------------------+
//! ```
//!
//! All geometry is fixed at compile time; see [`layout`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod canvas;
pub mod format;
pub mod layout;
pub mod panel;
pub mod ssd1306;

// Re-export key types
pub use canvas::Canvas;
pub use panel::{DisplayError, Phase, StatusPanel};
pub use ssd1306::DEFAULT_ADDRESS;
