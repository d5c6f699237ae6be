//! Hand-drawn parameter icons built from filled and outlined primitives.
//!
//! Every icon is drawn around a center point so the slide renderer can place
//! it in the middle of whatever panel it runs on. Radii follow the
//! "center plus radius" convention: a circle of radius `r` is `2r + 1` pixels
//! across.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::Text;

use crate::colors::{BLUE, CYAN, DEEP_SKY_BLUE, GRAY, LIGHT_BLUE, LIGHT_GRAY, ORANGE, RED, WHITE, YELLOW};
use crate::styles::{SPLASH_STYLE, TOP_LEFT};

/// Which icon a slide shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    /// Thermometer.
    Temperature,
    /// Sun with long rays.
    Uv,
    /// Water droplet.
    Humidity,
    /// Three hooked gust lines.
    Wind,
    /// Puffy cloud.
    Cloud,
    /// Swimmer over waves.
    Pool,
}

/// Draw `kind` centered on `center`.
pub fn draw_icon<D>(
    display: &mut D,
    kind: IconKind,
    center: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    match kind {
        IconKind::Temperature => draw_thermometer(display, center),
        IconKind::Uv => draw_uv_sun(display, center),
        IconKind::Humidity => draw_droplet(display, center),
        IconKind::Wind => draw_wind(display, center),
        IconKind::Cloud => draw_cloud(display, center),
        IconKind::Pool => draw_swimmer(display, center),
    }
}

// =============================================================================
// Primitive Helpers
// =============================================================================

fn circle(
    x: i32,
    y: i32,
    radius: u32,
) -> Circle {
    Circle::with_center(Point::new(x, y), 2 * radius + 1)
}

fn fill_circle<D>(
    display: &mut D,
    x: i32,
    y: i32,
    radius: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    circle(x, y, radius)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

fn stroke_circle<D>(
    display: &mut D,
    x: i32,
    y: i32,
    radius: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    circle(x, y, radius)
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();
}

fn line<D>(
    display: &mut D,
    from: (i32, i32),
    to: (i32, i32),
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(from.0, from.1), Point::new(to.0, to.1))
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();
}

fn rect(
    x: i32,
    y: i32,
    w: u32,
    h: u32,
) -> Rectangle {
    Rectangle::new(Point::new(x, y), Size::new(w, h))
}

// =============================================================================
// Parameter Icons
// =============================================================================

fn draw_thermometer<D>(
    display: &mut D,
    center: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (x, y) = (center.x, center.y);

    fill_circle(display, x, y + 60, 24, RED);

    let stem = rect(x - 9, y - 60, 18, 120);
    stem.into_styled(PrimitiveStyle::with_fill(WHITE)).draw(display).ok();
    stem.into_styled(PrimitiveStyle::with_stroke(GRAY, 1)).draw(display).ok();

    for i in 0..4 {
        let mark_y = y - 45 + i * 24;
        line(display, (x + 9, mark_y), (x + 24, mark_y), GRAY);
    }
}

fn draw_droplet<D>(
    display: &mut D,
    center: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (x, y) = (center.x, center.y);

    fill_circle(display, x, y + 15, 36, BLUE);
    Triangle::new(Point::new(x, y - 30), Point::new(x - 24, y + 15), Point::new(x + 24, y + 15))
        .into_styled(PrimitiveStyle::with_fill(BLUE))
        .draw(display)
        .ok();

    // Shine
    fill_circle(display, x - 12, y, 9, LIGHT_BLUE);
}

fn draw_wind<D>(
    display: &mut D,
    center: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (x, y) = (center.x, center.y);

    for i in 0..3 {
        let line_y = y - 30 + i * 24;
        line(display, (x - 45, line_y), (x + 30, line_y), WHITE);
        line(display, (x + 30, line_y), (x + 45, line_y - 6), WHITE);
        line(display, (x + 45, line_y - 6), (x + 36, line_y - 15), WHITE);
    }
}

/// Cloud lobes as `(dx, dy, radius)` around the icon center.
const CLOUD_LOBES: [(i32, i32, u32); 4] = [(-36, 0, 45), (0, -24, 54), (36, 0, 45), (60, 15, 36)];

fn draw_cloud<D>(
    display: &mut D,
    center: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for (dx, dy, r) in CLOUD_LOBES {
        fill_circle(display, center.x + dx, center.y + dy, r, WHITE);
    }
    for (dx, dy, r) in CLOUD_LOBES {
        stroke_circle(display, center.x + dx, center.y + dy, r, LIGHT_GRAY);
    }
}

fn draw_uv_sun<D>(
    display: &mut D,
    center: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    const RAY_DISTANCE: f32 = 54.0;
    const RAY_LENGTH: f32 = 60.0;

    let (x, y) = (center.x, center.y);
    fill_circle(display, x, y, 45, YELLOW);

    // Eight rays, each three pixels thick
    for i in 0..8 {
        let angle = i as f32 * core::f32::consts::FRAC_PI_4;
        let (sin, cos) = (micromath::F32(angle).sin().0, micromath::F32(angle).cos().0);
        let start = (x + (cos * RAY_DISTANCE) as i32, y + (sin * RAY_DISTANCE) as i32);
        let end = (
            x + (cos * (RAY_DISTANCE + RAY_LENGTH)) as i32,
            y + (sin * (RAY_DISTANCE + RAY_LENGTH)) as i32,
        );

        line(display, start, end, ORANGE);
        line(display, (start.0, start.1 + 1), (end.0, end.1 + 1), ORANGE);
        line(display, (start.0 + 1, start.1), (end.0 + 1, end.1), ORANGE);
    }
}

fn draw_swimmer<D>(
    display: &mut D,
    center: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (x, y) = (center.x, center.y);

    // Three rows of waves, two pixels thick
    let wave_y = y + 40;
    for row in 0..3 {
        let base_y = wave_y + row * 12;
        let mut dx = -90;
        while dx <= 90 {
            let y1 = base_y + (6.0 * micromath::F32(dx as f32 * 0.1).sin().0) as i32;
            let y2 = base_y + (6.0 * micromath::F32((dx + 15) as f32 * 0.1).sin().0) as i32;
            line(display, (x + dx, y1), (x + dx + 15, y2), CYAN);
            line(display, (x + dx, y1 + 1), (x + dx + 15, y2 + 1), CYAN);
            dx += 15;
        }
    }

    // Head
    fill_circle(display, x + 30, y - 30, 18, WHITE);
    stroke_circle(display, x + 30, y - 30, 18, GRAY);

    // Body
    let body = rect(x - 15, y - 12, 45, 24);
    body.into_styled(PrimitiveStyle::with_fill(WHITE)).draw(display).ok();
    body.into_styled(PrimitiveStyle::with_stroke(GRAY, 1)).draw(display).ok();

    // Reaching arm and hand
    for end_dy in [-24, -21, -18] {
        line(display, (x - 15, y - 6), (x - 60, y + end_dy), WHITE);
    }
    fill_circle(display, x - 60, y - 21, 6, WHITE);

    // Kicking legs
    for end in [(60, -6), (60, -3), (60, 0), (54, 30), (57, 30), (60, 30)] {
        line(display, (x + 30, y + 12), (x + end.0, y + end.1), WHITE);
    }
}

// =============================================================================
// Splash
// =============================================================================

/// Start-up view: sky background, sun peeking over a cloud, and "TODAY".
pub fn draw_splash<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(DEEP_SKY_BLUE).ok();

    let size = display.bounding_box().size;
    let center_x = size.width as i32 / 2 - 20;
    let center_y = size.height as i32 / 2 - 20;

    // Sun
    let (sun_x, sun_y) = (center_x - 20, center_y - 15);
    let sun_radius = 25;
    fill_circle(display, sun_x, sun_y, sun_radius as u32, YELLOW);

    let ray_length = 15;
    let ray_distance = sun_radius + 5;
    line(display, (sun_x, sun_y - ray_distance), (sun_x, sun_y - ray_distance - ray_length), YELLOW);
    line(display, (sun_x, sun_y + ray_distance), (sun_x, sun_y + ray_distance + ray_length), YELLOW);
    line(display, (sun_x - ray_distance, sun_y), (sun_x - ray_distance - ray_length, sun_y), YELLOW);
    line(display, (sun_x + ray_distance, sun_y), (sun_x + ray_distance + ray_length, sun_y), YELLOW);
    for (sx, sy) in [(1, -1), (-1, -1), (1, 1), (-1, 1)] {
        line(
            display,
            (sun_x + sx * 18, sun_y + sy * 18),
            (sun_x + sx * 30, sun_y + sy * 30),
            YELLOW,
        );
    }

    // Cloud: outlines first, then white lobes on top
    let (cloud_x, cloud_y) = (center_x + 15, center_y + 10);
    for (dx, dy, r) in [(-16, -1, 19), (-1, -9, 23), (16, -1, 19), (26, 6, 16)] {
        stroke_circle(display, cloud_x + dx, cloud_y + dy, r, DEEP_SKY_BLUE);
    }
    for (dx, dy, r) in [(-15, 0, 18), (0, -8, 22), (15, 0, 18), (25, 5, 15)] {
        fill_circle(display, cloud_x + dx, cloud_y + dy, r, WHITE);
    }

    Text::with_text_style("TODAY", Point::new(center_x - 45, center_y + 70), SPLASH_STYLE, TOP_LEFT)
        .draw(display)
        .ok();
}
