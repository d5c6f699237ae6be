//! Simulated panel backlight.

use today_common::power::Backlight;
use tracing::debug;

/// Remembers the last brightness; the main loop blanks the window at zero.
#[derive(Debug, Default)]
pub struct SimBacklight {
    percent: u8,
}

impl SimBacklight {
    pub fn new() -> Self { Self::default() }

    pub const fn is_lit(&self) -> bool { self.percent > 0 }
}

impl Backlight for SimBacklight {
    fn set_brightness(
        &mut self,
        percent: u8,
    ) {
        debug!(percent, "Backlight");
        self.percent = percent.min(100);
    }
}
