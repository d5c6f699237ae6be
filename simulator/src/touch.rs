//! Mouse-driven touch surface.

use embedded_graphics::prelude::Point;
use embedded_graphics_simulator::SimulatorEvent;
use today_common::config::MAX_TOUCH_POINTS;
use today_common::touch::{TouchPoint, TouchSurface};

/// Reports one contact while a mouse button is held over the window.
#[derive(Debug, Default)]
pub struct MouseTouch {
    contact: Option<TouchPoint>,
}

impl MouseTouch {
    pub fn new() -> Self { Self::default() }

    /// Track button and motion events. Other events are ignored.
    pub fn handle(
        &mut self,
        event: &SimulatorEvent,
    ) {
        match event {
            SimulatorEvent::MouseButtonDown { point, .. } => self.contact = Some(to_touch(*point)),
            SimulatorEvent::MouseMove { point } if self.contact.is_some() => {
                self.contact = Some(to_touch(*point));
            }
            SimulatorEvent::MouseButtonUp { .. } => self.contact = None,
            _ => {}
        }
    }
}

fn to_touch(point: Point) -> TouchPoint {
    TouchPoint {
        x: point.x.clamp(0, i32::from(u16::MAX)) as u16,
        y: point.y.clamp(0, i32::from(u16::MAX)) as u16,
    }
}

impl TouchSurface for MouseTouch {
    fn read_touch_points(
        &mut self,
        points: &mut [TouchPoint; MAX_TOUCH_POINTS],
    ) -> usize {
        match self.contact {
            Some(contact) => {
                points[0] = contact;
                1
            }
            None => 0,
        }
    }
}
