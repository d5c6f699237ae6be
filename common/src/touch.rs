//! Touch press detection with debouncing.
//!
//! The touch controller reports contacts while a finger is down. The
//! debouncer turns that level signal into one edge per physical press:
//!
//! - idle -> pressed: only if the debounce window has passed since the last
//!   accepted press, and reported as an edge
//! - pressed -> pressed: ignored, so a held finger never re-triggers
//! - any -> idle: on the first poll without contacts, never gated

use log::debug;

use crate::config::{MAX_TOUCH_POINTS, TOUCH_DEBOUNCE_MS};

/// A contact position in display coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

/// A polled touch controller.
pub trait TouchSurface {
    /// Fill `points` with the current contacts and return how many there are.
    fn read_touch_points(
        &mut self,
        points: &mut [TouchPoint; MAX_TOUCH_POINTS],
    ) -> usize;
}

/// Edge detector over a polled contact signal.
#[derive(Clone, Debug)]
pub struct TouchDebouncer {
    window_ms: u64,
    last_edge_ms: Option<u64>,
    press_in_progress: bool,
}

impl TouchDebouncer {
    /// Debouncer with the default window ([`TOUCH_DEBOUNCE_MS`]).
    pub const fn new() -> Self { Self::with_window(TOUCH_DEBOUNCE_MS) }

    pub const fn with_window(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_edge_ms: None,
            press_in_progress: false,
        }
    }

    /// Whether a press is currently held.
    #[inline]
    pub const fn is_pressed(&self) -> bool { self.press_in_progress }

    /// Feed one sample. Returns `true` only on an accepted rising edge.
    pub fn poll(
        &mut self,
        contacts_detected: bool,
        now_ms: u64,
    ) -> bool {
        if !contacts_detected {
            self.press_in_progress = false;
            return false;
        }

        if self.press_in_progress {
            return false;
        }

        if let Some(last) = self.last_edge_ms
            && now_ms.saturating_sub(last) < self.window_ms
        {
            return false;
        }

        self.press_in_progress = true;
        self.last_edge_ms = Some(now_ms);
        true
    }

    /// Read `surface` and feed the result. On an edge, returns the first contact.
    pub fn poll_surface<S: TouchSurface>(
        &mut self,
        surface: &mut S,
        now_ms: u64,
    ) -> Option<TouchPoint> {
        let mut points = [TouchPoint::default(); MAX_TOUCH_POINTS];
        let contacts = surface.read_touch_points(&mut points).min(MAX_TOUCH_POINTS);

        if !self.poll(contacts > 0, now_ms) {
            return None;
        }

        let first = points[0];
        debug!("Touch press detected at: ({}, {})", first.x, first.y);
        Some(first)
    }
}

impl Default for TouchDebouncer {
    fn default() -> Self { Self::new() }
}
