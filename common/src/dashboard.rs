//! Per-loop driver: touch -> power -> slideshow.
//!
//! The board loop owns one [`Dashboard`] and calls [`Dashboard::step`] every
//! iteration, plus the `show_*`/`update_*` methods whenever a fetch
//! finishes. Nothing here blocks.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::String;
use log::{info, warn};

use crate::colors::{CYAN, RED, WHITE, YELLOW};
use crate::config::FORECAST_DAYS_SHOWN;
use crate::console::Console;
use crate::data::{ForecastData, PoolTemperatureData, RealtimeWeatherData};
use crate::error::FetchError;
use crate::icons::draw_splash;
use crate::power::{Backlight, DisplayPowerController};
use crate::slideshow::{SlideshowConfig, SlideshowEngine};
use crate::touch::{TouchDebouncer, TouchSurface};

/// Capacity of one console line.
const LINE_LEN: usize = 64;

/// What one [`Dashboard::step`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// New power state if a press toggled it.
    pub toggled: Option<bool>,
    /// Whether the slideshow drew this step.
    pub rendered: bool,
}

pub struct Dashboard<B: Backlight> {
    touch: TouchDebouncer,
    power: DisplayPowerController<B>,
    slideshow: SlideshowEngine,
    console: Console,
}

impl<B: Backlight> Dashboard<B> {
    /// Switch the backlight on and wait for data.
    pub fn new(
        backlight: B,
        config: SlideshowConfig,
    ) -> Self {
        Self {
            touch: TouchDebouncer::new(),
            power: DisplayPowerController::new(backlight),
            slideshow: SlideshowEngine::new(config),
            console: Console::new(),
        }
    }

    #[inline]
    pub const fn is_on(&self) -> bool { self.power.is_on() }

    pub const fn power(&self) -> &DisplayPowerController<B> { &self.power }

    pub const fn slideshow(&self) -> &SlideshowEngine { &self.slideshow }

    pub const fn console(&self) -> &Console { &self.console }

    /// One loop iteration: poll touch, apply a toggle, tick the slideshow.
    pub fn step<S, D>(
        &mut self,
        now_ms: u64,
        surface: &mut S,
        display: &mut D,
    ) -> StepOutcome
    where
        S: TouchSurface,
        D: DrawTarget<Color = Rgb565>,
    {
        let mut outcome = StepOutcome::default();

        if self.touch.poll_surface(surface, now_ms).is_some() {
            let on = self.power.toggle();
            if on {
                self.console.reset_cursor();
                self.slideshow.resume(now_ms);
            }
            outcome.toggled = Some(on);
        }

        outcome.rendered = self.slideshow.tick(now_ms, self.power.is_on(), display);
        outcome
    }

    /// Paint the start-up splash if the display is on.
    pub fn show_splash<D>(
        &mut self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        if self.power.is_on() {
            draw_splash(display);
        }
    }

    /// Start the slideshow over a freshly fetched weather record.
    ///
    /// The snapshot is kept even while the display is off.
    pub fn show_weather(
        &mut self,
        weather: &RealtimeWeatherData,
        now_ms: u64,
    ) -> bool {
        self.slideshow.start(weather, now_ms)
    }

    /// Show the error slide for a failed weather fetch.
    pub fn show_failure(
        &mut self,
        error: FetchError,
        now_ms: u64,
    ) {
        warn!("Weather unavailable: {error}");
        self.slideshow.fail(error.diagnostic(), now_ms);
    }

    pub fn update_pool(
        &mut self,
        pool: &PoolTemperatureData,
    ) {
        if pool.is_valid {
            info!("Pool temp: {:.2}C, {}", pool.temperature, pool.time_ago.as_str());
        } else {
            warn!("Pool data invalid");
        }
        self.slideshow.set_pool(pool);
    }

    /// Print the first days of `forecast` to the console, once.
    pub fn show_forecast<D>(
        &mut self,
        forecast: &ForecastData,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        if !self.power.is_on() {
            return;
        }

        self.console.print_line(display, "=== 7-DAY FORECAST ===", CYAN);

        if !forecast.is_valid || forecast.day_count == 0 {
            self.console.print_line(display, "No forecast data available", RED);
            return;
        }

        let shown = forecast.days().iter().take(FORECAST_DAYS_SHOWN).enumerate();
        for (i, day) in shown.filter(|(_, day)| day.is_valid) {
            let mut line: String<LINE_LEN> = String::new();

            write!(line, "Day {}", i + 1).ok();
            self.console.print_line(display, &line, YELLOW);

            line.clear();
            write!(line, "Temp: {:.2}C", day.temperature_avg).ok();
            self.console.print_line(display, &line, WHITE);

            line.clear();
            write!(line, "UV: {:.2} Cloud: {:.2}%", day.uv_index_avg, day.cloud_cover_avg).ok();
            self.console.print_line(display, &line, WHITE);

            line.clear();
            write!(line, "Wind: {:.2} km/h {:.2} deg", day.wind_speed_avg, day.wind_direction_avg).ok();
            self.console.print_line(display, &line, WHITE);

            self.console.print_line(display, "", WHITE);
        }
    }

    /// Print an error block to the console.
    pub fn show_console_error<D>(
        &mut self,
        message: &str,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        if !self.power.is_on() {
            return;
        }
        self.console.print_line(display, "=== ERROR ===", RED);
        self.console.print_line(display, message, RED);
        self.console.print_line(display, "", RED);
    }

    /// Blank the screen and home the console cursor.
    pub fn clear_screen<D>(
        &mut self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        self.console.clear(display);
    }
}
