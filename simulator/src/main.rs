//! "Today" dashboard simulator for desktop.
//!
//! Plays the role of the board: an 800x480 window stands in for the panel,
//! the mouse for the touch controller, and a blank window for the backlight
//! being off.
//!
//! Keys: `F` shows the daily forecast once, `Q` quits.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod backlight;
mod config;
mod fixtures;
mod http;
mod ntp;
mod pool;
mod sources;
mod timing;
mod touch;
mod weather;

use std::thread;
use std::time::Instant;

use anyhow::Result;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use today_common::colors::BLACK;
use today_common::{Dashboard, MonotonicClock, TimeSource};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::backlight::SimBacklight;
use crate::config::AppConfig;
use crate::http::ReqwestTransport;
use crate::ntp::UdpNtpTransport;
use crate::sources::DataSources;
use crate::timing::{Cadence, FRAME_TIME, SimClock};
use crate::touch::MouseTouch;

/// Arduino GIGA display shield in landscape.
const SCREEN_WIDTH: u32 = 800;
const SCREEN_HEIGHT: u32 = 480;

fn main() -> Result<()> {
    // `init` also routes `log` records from the core crate into tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    info!(
        offline = config.offline,
        fetch_interval_secs = config.fetch_interval.as_secs(),
        slide_duration_ms = config.slideshow.slide_duration_ms,
        "Starting Today simulator"
    );

    let mut sources = match (&config.api_key, config.offline) {
        (Some(api_key), false) => DataSources::online(
            ReqwestTransport::new()?,
            UdpNtpTransport::new(config.ntp_server.clone()),
            api_key.clone(),
            config.location.clone(),
        ),
        _ => DataSources::Offline,
    };
    sources.describe();

    let size = Size::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(size);
    let mut blank: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(size);
    blank.clear(BLACK).ok();

    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new("Today", &output_settings);

    let clock = SimClock::new();
    let mut time = TimeSource::new();
    let mut touch = MouseTouch::new();
    let mut fetch = Cadence::new(config.fetch_interval);
    let mut dashboard = Dashboard::new(SimBacklight::new(), config.slideshow);

    dashboard.show_splash(&mut display);
    window.update(&display);

    'running: loop {
        let frame_start = Instant::now();

        // Handle events
        for event in window.events() {
            touch.handle(&event);
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown {
                    keycode, repeat: false, ..
                } => match keycode {
                    Keycode::Q => break 'running,
                    Keycode::F if dashboard.is_on() => {
                        dashboard.clear_screen(&mut display);
                        match sources.forecast() {
                            Ok(forecast) => dashboard.show_forecast(&forecast, &mut display),
                            Err(err) => dashboard.show_console_error(err.diagnostic(), &mut display),
                        }
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        // Touch, power, slideshow
        dashboard.step(clock.now_ms(), &mut touch, &mut display);

        // Blocking fetch on its own, much slower cadence
        if fetch.due(clock.now_ms()) {
            sources.refresh(&mut dashboard, &mut time, &clock);
        }

        if dashboard.power().backlight().is_lit() {
            window.update(&display);
        } else {
            window.update(&blank);
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }

    info!("Shutting down");
    Ok(())
}
