//! Scrolling-free text console.
//!
//! Lines are printed top to bottom at a fixed advance. When the next line
//! would run past the bottom edge the cursor jumps back to the top margin
//! and new text overdraws the old.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::colors::BLACK;
use crate::config::{CONSOLE_LINE_HEIGHT, CONSOLE_TOP, CONSOLE_X};
use crate::styles::{CONSOLE_FONT, TOP_LEFT};

/// Line cursor over a draw target.
#[derive(Clone, Debug)]
pub struct Console {
    cursor_y: i32,
}

impl Console {
    pub const fn new() -> Self { Self { cursor_y: CONSOLE_TOP } }

    /// Top edge of the next line.
    #[inline]
    pub const fn cursor_y(&self) -> i32 { self.cursor_y }

    pub fn reset_cursor(&mut self) { self.cursor_y = CONSOLE_TOP; }

    /// Blank the screen and home the cursor.
    pub fn clear<D>(
        &mut self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        display.clear(BLACK).ok();
        self.reset_cursor();
    }

    /// Print one line in `color` and advance, wrapping at the bottom.
    pub fn print_line<D>(
        &mut self,
        display: &mut D,
        text: &str,
        color: Rgb565,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        if !text.is_empty() {
            let style = MonoTextStyle::new(CONSOLE_FONT, color);
            Text::with_text_style(text, Point::new(CONSOLE_X, self.cursor_y), style, TOP_LEFT)
                .draw(display)
                .ok();
        }

        self.cursor_y += CONSOLE_LINE_HEIGHT;
        let height = display.bounding_box().size.height as i32;
        if self.cursor_y > height - CONSOLE_LINE_HEIGHT {
            self.cursor_y = CONSOLE_TOP;
        }
    }
}

impl Default for Console {
    fn default() -> Self { Self::new() }
}
