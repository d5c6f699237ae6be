//! Timed slideshow of the current weather and pool parameters.
//!
//! # State machine
//!
//! ```text
//! Stopped --start(valid)--> Running --tick(elapsed >= duration)--> Running (next slide)
//!    |                         |
//!    +--start(invalid)/fail----+--> Failed (error slide, never advances)
//! ```
//!
//! `start` and `fail` are accepted from any state. The slide index wraps
//! from the last slide back to the first. Rendering is lazy: state changes
//! mark the view dirty and the next powered `tick` draws it.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;
use log::{debug, info, warn};

use crate::config::{MARGIN_X, MARGIN_Y, SLIDE_DURATION_MS, TITLE_BASELINE_OFFSET};
use crate::data::{PoolTemperatureData, RealtimeWeatherData};
use crate::icons::{IconKind, draw_icon};
use crate::styles::{BASELINE_LEFT, TITLE_STYLE, VALUE_STYLE};
use crate::thresholds::{ColorRule, background_color};

/// Capacity of the error slide message.
pub const ERROR_MESSAGE_LEN: usize = 48;

/// Capacity of a rendered `value + unit` string.
pub const VALUE_TEXT_LEN: usize = 24;

/// Title of the error slide.
pub const ERROR_TITLE: &str = "Error";

/// Message shown when the slideshow is started with invalid weather.
pub const LOAD_FAILED: &str = "Load failed";

/// Value text of the pool slide when there is no valid reading.
pub const NO_DATA: &str = "No data";

// =============================================================================
// Slide Table
// =============================================================================

/// Where a slide's number comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueSource {
    Temperature,
    UvIndex,
    Humidity,
    WindSpeed,
    CloudCover,
    PoolTemperature,
}

impl ValueSource {
    /// The value, or `None` when its record has no valid reading.
    pub fn read(
        self,
        weather: &RealtimeWeatherData,
        pool: &PoolTemperatureData,
    ) -> Option<f32> {
        match self {
            Self::Temperature => Some(weather.temperature),
            Self::UvIndex => Some(weather.uv_index),
            Self::Humidity => Some(weather.humidity),
            Self::WindSpeed => Some(weather.wind_speed),
            Self::CloudCover => Some(weather.cloud_cover),
            Self::PoolTemperature => pool.is_valid.then_some(pool.temperature),
        }
    }
}

/// One full-screen parameter view.
#[derive(Clone, Copy, Debug)]
pub struct Slide {
    pub title: &'static str,
    pub source: ValueSource,
    pub unit: &'static str,
    pub decimals: usize,
    pub color_rule: ColorRule,
    /// `None` renders a text-only slide.
    pub icon: Option<IconKind>,
}

impl Slide {
    /// Formatted `value + unit`, or [`NO_DATA`] without a reading.
    pub fn value_text(
        &self,
        weather: &RealtimeWeatherData,
        pool: &PoolTemperatureData,
    ) -> String<VALUE_TEXT_LEN> {
        match self.source.read(weather, pool) {
            Some(value) => {
                let mut text = self.rounded(value);
                text.push_str(self.unit).ok();
                text
            }
            None => {
                let mut text = String::new();
                text.push_str(NO_DATA).ok();
                text
            }
        }
    }

    /// Background color for the value as displayed; a missing reading is colored as 0.0.
    pub fn background(
        &self,
        weather: &RealtimeWeatherData,
        pool: &PoolTemperatureData,
    ) -> Rgb565 {
        let shown = self
            .source
            .read(weather, pool)
            .map_or(0.0, |value| self.rounded(value).parse().unwrap_or(value));
        background_color(self.color_rule, shown)
    }

    /// `value` at the slide's precision, without the unit.
    fn rounded(
        &self,
        value: f32,
    ) -> String<VALUE_TEXT_LEN> {
        let mut text = String::new();
        write!(text, "{value:.prec$}", prec = self.decimals).ok();
        text
    }
}

/// Slides in display order.
pub const SLIDES: [Slide; 6] = [
    Slide {
        title: "Temperature",
        source: ValueSource::Temperature,
        unit: "C",
        decimals: 1,
        color_rule: ColorRule::Temperature,
        icon: Some(IconKind::Temperature),
    },
    Slide {
        title: "UV Index",
        source: ValueSource::UvIndex,
        unit: "",
        decimals: 2,
        color_rule: ColorRule::Uv,
        icon: Some(IconKind::Uv),
    },
    Slide {
        title: "Humidity",
        source: ValueSource::Humidity,
        unit: "%",
        decimals: 1,
        color_rule: ColorRule::Humidity,
        icon: Some(IconKind::Humidity),
    },
    Slide {
        title: "Wind Speed",
        source: ValueSource::WindSpeed,
        unit: "km/h",
        decimals: 1,
        color_rule: ColorRule::Wind,
        icon: Some(IconKind::Wind),
    },
    Slide {
        title: "Cloud Cover",
        source: ValueSource::CloudCover,
        unit: "%",
        decimals: 2,
        color_rule: ColorRule::Cloud,
        icon: Some(IconKind::Cloud),
    },
    Slide {
        title: "Pool Temp",
        source: ValueSource::PoolTemperature,
        unit: "C",
        decimals: 1,
        color_rule: ColorRule::Pool,
        icon: Some(IconKind::Pool),
    },
];

/// Number of slides in one cycle.
pub const TOTAL_SLIDES: usize = SLIDES.len();

const _: () = assert!(TOTAL_SLIDES > 0);

// =============================================================================
// Configuration
// =============================================================================

/// Which slide is on screen right after `start`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StartMode {
    /// No slide until one full duration has passed; then the first slide.
    #[default]
    Deferred,
    /// The first slide is drawn on the next tick.
    Immediate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideshowConfig {
    pub slide_duration_ms: u64,
    pub start: StartMode,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            slide_duration_ms: SLIDE_DURATION_MS,
            start: StartMode::Deferred,
        }
    }
}

// =============================================================================
// Engine
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideshowState {
    /// Nothing started yet.
    Stopped,
    /// Cycling through [`SLIDES`].
    Running,
    /// Showing the error slide until the next `start`.
    Failed,
}

/// Slide cycling state plus the data snapshot it renders.
#[derive(Clone, Debug)]
pub struct SlideshowEngine {
    config: SlideshowConfig,
    state: SlideshowState,
    current: Option<usize>,
    last_transition_ms: u64,
    weather: RealtimeWeatherData,
    pool: PoolTemperatureData,
    error_message: String<ERROR_MESSAGE_LEN>,
    dirty: bool,
}

impl SlideshowEngine {
    pub fn new(config: SlideshowConfig) -> Self {
        Self {
            config,
            state: SlideshowState::Stopped,
            current: None,
            last_transition_ms: 0,
            weather: RealtimeWeatherData::invalid(),
            pool: PoolTemperatureData::invalid(),
            error_message: String::new(),
            dirty: false,
        }
    }

    #[inline]
    pub const fn state(&self) -> SlideshowState { self.state }

    /// Index into [`SLIDES`] of the slide on screen, if any.
    #[inline]
    pub const fn current_slide(&self) -> Option<usize> { self.current }

    pub const fn config(&self) -> &SlideshowConfig { &self.config }

    pub const fn weather(&self) -> &RealtimeWeatherData { &self.weather }

    pub const fn pool(&self) -> &PoolTemperatureData { &self.pool }

    pub fn error_message(&self) -> &str { &self.error_message }

    /// Begin cycling over `weather`. Invalid data shows the error slide instead.
    ///
    /// Returns whether the slideshow is running.
    pub fn start(
        &mut self,
        weather: &RealtimeWeatherData,
        now_ms: u64,
    ) -> bool {
        self.weather = weather.clone();
        self.last_transition_ms = now_ms;

        if !weather.is_valid {
            warn!("Starting slideshow with invalid weather data");
            self.fail(LOAD_FAILED, now_ms);
            return false;
        }

        self.state = SlideshowState::Running;
        self.current = match self.config.start {
            StartMode::Deferred => None,
            StartMode::Immediate => Some(0),
        };
        self.dirty = self.current.is_some();
        info!("Slideshow started");
        true
    }

    /// Replace the view with a persistent error slide showing `message`.
    pub fn fail(
        &mut self,
        message: &str,
        now_ms: u64,
    ) {
        self.state = SlideshowState::Failed;
        self.last_transition_ms = now_ms;
        self.error_message.clear();
        for c in message.chars() {
            if self.error_message.push(c).is_err() {
                break;
            }
        }
        self.dirty = true;
    }

    /// Swap in a new pool reading; shown the next time the pool slide comes up.
    pub fn set_pool(
        &mut self,
        pool: &PoolTemperatureData,
    ) {
        self.pool = pool.clone();
    }

    /// Move to the next slide if a full duration has elapsed.
    ///
    /// Only a running slideshow advances.
    pub fn advance(
        &mut self,
        now_ms: u64,
    ) -> bool {
        if self.state != SlideshowState::Running {
            return false;
        }
        if now_ms.saturating_sub(self.last_transition_ms) < self.config.slide_duration_ms {
            return false;
        }

        let next = self.current.map_or(0, |i| (i + 1) % TOTAL_SLIDES);
        self.current = Some(next);
        self.last_transition_ms = now_ms;
        self.dirty = true;
        info!("Switching to slide {} of {}", next + 1, TOTAL_SLIDES);
        true
    }

    /// Restart the transition timer and redraw on the next tick.
    ///
    /// Used when the display comes back on: the same slide is shown again
    /// for a full duration.
    pub fn resume(
        &mut self,
        now_ms: u64,
    ) {
        self.last_transition_ms = now_ms;
        self.dirty = match self.state {
            SlideshowState::Stopped => false,
            SlideshowState::Running => self.current.is_some(),
            SlideshowState::Failed => true,
        };
    }

    /// One loop step. Returns whether anything was drawn.
    ///
    /// Unpowered ticks change nothing, so the slide index and timer survive
    /// while the display is off.
    pub fn tick<D>(
        &mut self,
        now_ms: u64,
        powered: bool,
        display: &mut D,
    ) -> bool
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if !powered {
            return false;
        }
        self.advance(now_ms);
        if !self.dirty {
            return false;
        }
        self.render(display);
        true
    }

    /// Draw the current view unconditionally.
    pub fn render<D>(
        &mut self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        self.dirty = false;
        match (self.state, self.current) {
            (SlideshowState::Failed, _) => {
                let background = background_color(ColorRule::Default, 0.0);
                draw_slide(display, background, ERROR_TITLE, None, &self.error_message);
            }
            (SlideshowState::Running, Some(index)) => {
                let slide = &SLIDES[index];
                let value = slide.value_text(&self.weather, &self.pool);
                debug!("Rendering slide '{}': {}", slide.title, value.as_str());
                let background = slide.background(&self.weather, &self.pool);
                draw_slide(display, background, slide.title, slide.icon, &value);
            }
            _ => {}
        }
    }
}

/// Slide template: background, title top-left, icon centered, value bottom-left.
fn draw_slide<D>(
    display: &mut D,
    background: Rgb565,
    title: &str,
    icon: Option<IconKind>,
    value: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(background).ok();

    let size = display.bounding_box().size;
    let (width, height) = (size.width as i32, size.height as i32);

    Text::with_text_style(
        title,
        Point::new(MARGIN_X, MARGIN_Y + TITLE_BASELINE_OFFSET),
        TITLE_STYLE,
        BASELINE_LEFT,
    )
    .draw(display)
    .ok();

    if let Some(kind) = icon {
        draw_icon(display, kind, Point::new(width / 2, height / 2));
    }

    Text::with_text_style(value, Point::new(MARGIN_X, height - MARGIN_Y), VALUE_STYLE, BASELINE_LEFT)
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{DARK_SLATE_BLUE, DEEP_SKY_BLUE, FOREST_GREEN, RED_ORANGE, TEAL};
    use crate::testing::RecordingDisplay;

    const DURATION: u64 = SLIDE_DURATION_MS;

    fn weather() -> RealtimeWeatherData {
        RealtimeWeatherData {
            temperature: 23.4,
            uv_index: 6.5,
            humidity: 61.0,
            wind_speed: 12.34,
            wind_direction: 180.0,
            cloud_cover: 42.5,
            is_valid: true,
        }
    }

    fn pool(temperature: f32) -> PoolTemperatureData {
        PoolTemperatureData {
            temperature,
            timestamp: 1_731_227_559_883,
            is_valid: true,
            ..PoolTemperatureData::default()
        }
    }

    fn running(start: StartMode) -> SlideshowEngine {
        let mut engine = SlideshowEngine::new(SlideshowConfig {
            slide_duration_ms: DURATION,
            start,
        });
        assert!(engine.start(&weather(), 1_000));
        engine
    }

    #[test]
    fn test_new_engine_is_stopped_and_silent() {
        let mut engine = SlideshowEngine::new(SlideshowConfig::default());
        let mut display = RecordingDisplay::new(800, 480);
        assert_eq!(engine.state(), SlideshowState::Stopped);
        assert!(!engine.tick(1_000_000, true, &mut display));
        assert!(display.untouched());
    }

    #[test]
    fn test_deferred_start_shows_first_slide_after_one_duration() {
        let mut engine = running(StartMode::Deferred);
        let mut display = RecordingDisplay::new(800, 480);

        assert_eq!(engine.current_slide(), None);
        assert!(!engine.tick(1_000 + DURATION - 1, true, &mut display));
        assert!(display.untouched());

        assert!(engine.tick(1_000 + DURATION, true, &mut display));
        assert_eq!(engine.current_slide(), Some(0));
        assert_eq!(display.cleared_with(), Some(FOREST_GREEN));
    }

    #[test]
    fn test_immediate_start_draws_first_slide_on_next_tick() {
        let mut engine = running(StartMode::Immediate);
        let mut display = RecordingDisplay::new(800, 480);
        assert_eq!(engine.current_slide(), Some(0));
        assert!(engine.tick(1_001, true, &mut display));
        assert!(!engine.tick(1_002, true, &mut display));
        assert_eq!(engine.current_slide(), Some(0));
    }

    #[test]
    fn test_tick_before_duration_keeps_index() {
        let mut engine = running(StartMode::Immediate);
        let mut display = RecordingDisplay::new(800, 480);
        for t in (1_000..1_000 + DURATION).step_by(250) {
            engine.tick(t, true, &mut display);
            assert_eq!(engine.current_slide(), Some(0));
        }
    }

    #[test]
    fn test_advances_one_step_and_wraps() {
        let mut engine = running(StartMode::Immediate);
        let mut display = RecordingDisplay::new(800, 480);
        let mut now = 1_000;
        for expected in [1, 2, 3, 4, 5, 0, 1] {
            // A late tick still moves exactly one slide
            now += DURATION * 3;
            assert!(engine.tick(now, true, &mut display));
            assert_eq!(engine.current_slide(), Some(expected));
        }
    }

    #[test]
    fn test_invalid_weather_shows_error_and_never_advances() {
        let mut engine = SlideshowEngine::new(SlideshowConfig::default());
        let mut display = RecordingDisplay::new(800, 480);

        assert!(!engine.start(&RealtimeWeatherData::invalid(), 0));
        assert_eq!(engine.state(), SlideshowState::Failed);
        assert_eq!(engine.error_message(), LOAD_FAILED);

        assert!(engine.tick(1, true, &mut display));
        assert_eq!(display.cleared_with(), Some(DEEP_SKY_BLUE));

        display.forget();
        for step in 1..10 {
            assert!(!engine.tick(step * DURATION, true, &mut display));
        }
        assert_eq!(engine.current_slide(), None);
        assert!(display.untouched());
    }

    #[test]
    fn test_slide_without_icon_is_text_only() {
        let center = embedded_graphics::primitives::Rectangle::with_center(Point::new(400, 240), Size::new(80, 80));

        let mut display = RecordingDisplay::new(800, 480);
        draw_slide(&mut display, DEEP_SKY_BLUE, ERROR_TITLE, None, LOAD_FAILED);
        assert!(display.drawn() > 0);
        assert_eq!(display.count_other_in(&center, DEEP_SKY_BLUE), 0);

        let mut display = RecordingDisplay::new(800, 480);
        draw_slide(&mut display, DEEP_SKY_BLUE, "Temperature", Some(IconKind::Temperature), "23.4C");
        assert!(display.count_other_in(&center, DEEP_SKY_BLUE) > 0);
    }

    #[test]
    fn test_error_slide_has_no_icon() {
        let mut engine = SlideshowEngine::new(SlideshowConfig::default());
        let mut display = RecordingDisplay::new(800, 480);
        engine.fail("Network error", 0);
        engine.render(&mut display);

        let center = embedded_graphics::primitives::Rectangle::with_center(Point::new(400, 240), Size::new(80, 80));
        assert_eq!(display.cleared_with(), Some(DEEP_SKY_BLUE));
        assert_eq!(display.count_other_in(&center, DEEP_SKY_BLUE), 0);
    }

    #[test]
    fn test_restart_after_failure_recovers() {
        let mut engine = SlideshowEngine::new(SlideshowConfig::default());
        engine.fail("Network error", 0);
        assert!(engine.start(&weather(), 10));
        assert_eq!(engine.state(), SlideshowState::Running);
    }

    #[test]
    fn test_error_message_is_truncated() {
        let mut engine = SlideshowEngine::new(SlideshowConfig::default());
        let long = "x".repeat(ERROR_MESSAGE_LEN + 10);
        engine.fail(&long, 0);
        assert_eq!(engine.error_message().len(), ERROR_MESSAGE_LEN);
    }

    #[test]
    fn test_unpowered_tick_preserves_state() {
        let mut engine = running(StartMode::Immediate);
        let mut display = RecordingDisplay::new(800, 480);
        assert!(!engine.tick(1_000 + DURATION * 5, false, &mut display));
        assert_eq!(engine.current_slide(), Some(0));
        assert!(display.untouched());
    }

    #[test]
    fn test_resume_redraws_same_slide_and_restarts_timer() {
        let mut engine = running(StartMode::Immediate);
        let mut display = RecordingDisplay::new(800, 480);
        engine.tick(1_000 + DURATION, true, &mut display);
        assert_eq!(engine.current_slide(), Some(1));

        engine.resume(100_000);
        display.forget();
        assert!(engine.tick(100_001, true, &mut display));
        assert_eq!(engine.current_slide(), Some(1));
        assert!(!engine.tick(100_000 + DURATION - 1, true, &mut display));
        assert!(engine.tick(100_000 + DURATION, true, &mut display));
        assert_eq!(engine.current_slide(), Some(2));
    }

    #[test]
    fn test_value_text_formats() {
        let weather = weather();
        let pool = pool(19.31);
        let texts: std::vec::Vec<_> = SLIDES
            .iter()
            .map(|slide| slide.value_text(&weather, &pool))
            .collect();
        assert_eq!(texts[0].as_str(), "23.4C");
        assert_eq!(texts[1].as_str(), "6.50");
        assert_eq!(texts[2].as_str(), "61.0%");
        assert_eq!(texts[3].as_str(), "12.3km/h");
        assert_eq!(texts[4].as_str(), "42.50%");
        assert_eq!(texts[5].as_str(), "19.3C");
    }

    #[test]
    fn test_invalid_pool_shows_no_data() {
        let slide = &SLIDES[5];
        let pool = PoolTemperatureData::invalid();
        assert_eq!(slide.value_text(&weather(), &pool).as_str(), NO_DATA);
        assert_eq!(slide.background(&weather(), &pool), DARK_SLATE_BLUE);
    }

    #[test]
    fn test_slide_backgrounds_follow_values() {
        let mut hot = weather();
        hot.temperature = 30.0;
        assert_eq!(SLIDES[0].background(&hot, &pool(0.0)), RED_ORANGE);
        assert_eq!(SLIDES[5].background(&hot, &pool(22.0)), TEAL);
    }

    #[test]
    fn test_background_matches_rounded_value() {
        let mut weather = weather();
        weather.temperature = 29.96;
        weather.uv_index = 7.996;

        assert_eq!(SLIDES[0].value_text(&weather, &pool(0.0)).as_str(), "30.0C");
        assert_eq!(SLIDES[0].background(&weather, &pool(0.0)), RED_ORANGE);
        assert_eq!(SLIDES[1].value_text(&weather, &pool(0.0)).as_str(), "8.00");
        assert_eq!(SLIDES[1].background(&weather, &pool(0.0)), crate::colors::RED);

        weather.temperature = 29.94;
        assert_eq!(SLIDES[0].value_text(&weather, &pool(0.0)).as_str(), "29.9C");
        assert_eq!(SLIDES[0].background(&weather, &pool(0.0)), FOREST_GREEN);
    }

    #[test]
    fn test_set_pool_is_used_by_pool_slide() {
        let mut engine = running(StartMode::Immediate);
        let mut display = RecordingDisplay::new(800, 480);
        engine.set_pool(&pool(26.0));
        let mut now = 1_000;
        while engine.current_slide() != Some(5) {
            now += DURATION;
            engine.tick(now, true, &mut display);
        }
        assert_eq!(display.cleared_with(), Some(crate::colors::TURQUOISE));
        assert_eq!(engine.pool().temperature, 26.0);
    }

    #[test]
    fn test_every_slide_has_an_icon() {
        assert!(SLIDES.iter().all(|slide| slide.icon.is_some()));
    }
}
