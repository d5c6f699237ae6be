//! Pre-computed text styles shared by the slide, console and splash renderers.
//!
//! `MonoTextStyle` and `TextStyle` are `const`, so none of these are built at
//! runtime. Console lines need a per-line color and use [`CONSOLE_FONT`]
//! directly.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_10X20},
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::WHITE;

/// Left-aligned, alphabetic baseline. Slide titles and values are placed by
/// their baseline, matching the slide template.
pub const BASELINE_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Alphabetic)
    .build();

/// Left-aligned, top baseline. Console lines are placed by their top edge.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Slide title (`ProFont` 18pt, white).
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);

/// Slide value, the largest text on screen (`ProFont` 24pt, white).
pub const VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

/// Splash caption under the sun/cloud icon.
pub const SPLASH_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Console font. Exposed so callers can build `MonoTextStyle::new(CONSOLE_FONT, color)`.
pub const CONSOLE_FONT: &MonoFont = &FONT_10X20;
