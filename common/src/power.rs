//! Display on/off control.
//!
//! "Off" means backlight at zero and no drawing. The slideshow keeps its
//! slide index and data while off, so switching back on resumes where it
//! left off instead of restarting.

use log::info;

use crate::config::{BACKLIGHT_OFF_PERCENT, BACKLIGHT_ON_PERCENT};

/// Panel backlight driver.
pub trait Backlight {
    fn set_brightness(
        &mut self,
        percent: u8,
    );
}

/// Binary power state gating all rendering.
pub struct DisplayPowerController<B: Backlight> {
    backlight: B,
    powered_on: bool,
}

impl<B: Backlight> DisplayPowerController<B> {
    /// Take ownership of the backlight and switch it on.
    pub fn new(mut backlight: B) -> Self {
        backlight.set_brightness(BACKLIGHT_ON_PERCENT);
        Self {
            backlight,
            powered_on: true,
        }
    }

    #[inline]
    pub const fn is_on(&self) -> bool { self.powered_on }

    /// Drive the backlight to `on`.
    pub fn set(
        &mut self,
        on: bool,
    ) {
        self.backlight.set_brightness(if on { BACKLIGHT_ON_PERCENT } else { BACKLIGHT_OFF_PERCENT });
        self.powered_on = on;
    }

    /// Flip the power state and return the new one.
    pub fn toggle(&mut self) -> bool {
        let on = !self.powered_on;
        self.set(on);
        info!("Display {}", if on { "ON" } else { "OFF" });
        on
    }

    pub fn backlight(&self) -> &B { &self.backlight }
}
