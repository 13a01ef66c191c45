use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::util::coordinate_mapper::finite_complex_to_point;

const AXIS_COLOUR: Colour = Colour::DARK_GREY;
const UNIT_CIRCLE_COLOUR: Colour = Colour::WHITE;
const ORBIT_COLOUR: Colour = Colour::ORANGE;
const MARKER_Z_COLOUR: Colour = Colour::BLUE;
const MARKER_C_COLOUR: Colour = Colour::GREEN;

const TICK_HALF_LENGTH: i32 = 10;
const TICKS_PER_SIDE: i32 = 8;
const MAX_CIRCLE_STEPS: f64 = 65_536.0;

/// Copies `field` and paints the axes, the |z| = 1 circle, the orbit and
/// both markers on top. The field itself is left untouched.
#[must_use]
pub fn draw_overlay(field: &PixelBuffer, view: &ViewState, orbit: &[Complex]) -> PixelBuffer {
    let mut frame = field.clone();
    let dot_radius = i32::try_from(view.marker_size() / 2).unwrap_or(i32::MAX);

    draw_axes(&mut frame, view);
    draw_circle(
        &mut frame,
        view.grid_center(),
        i32::try_from(view.zoom()).unwrap_or(i32::MAX),
        UNIT_CIRCLE_COLOUR,
    );

    for point in orbit.iter().filter_map(|z| finite_complex_to_point(*z, view)) {
        fill_disc(&mut frame, point, dot_radius, ORBIT_COLOUR);
    }

    fill_disc(&mut frame, view.marker_z(), dot_radius, MARKER_Z_COLOUR);
    fill_disc(&mut frame, view.marker_c(), dot_radius, MARKER_C_COLOUR);

    frame
}

fn plot(frame: &mut PixelBuffer, point: Point, colour: Colour) {
    frame.paint_clipped(point, colour);
}

fn draw_axes(frame: &mut PixelBuffer, view: &ViewState) {
    let rect = frame.pixel_rect();
    let center = view.grid_center();
    let unit = i32::try_from(view.zoom()).unwrap_or(i32::MAX);

    for x in rect.top_left().x..=rect.bottom_right().x {
        plot(frame, Point { x, y: center.y }, AXIS_COLOUR);
    }
    for y in rect.top_left().y..=rect.bottom_right().y {
        plot(frame, Point { x: center.x, y }, AXIS_COLOUR);
    }

    for i in -TICKS_PER_SIDE..=TICKS_PER_SIDE {
        let offset = i.saturating_mul(unit);

        for t in -TICK_HALF_LENGTH..=TICK_HALF_LENGTH {
            plot(
                frame,
                Point {
                    x: center.x.saturating_add(offset),
                    y: center.y.saturating_add(t),
                },
                AXIS_COLOUR,
            );
            plot(
                frame,
                Point {
                    x: center.x.saturating_add(t),
                    y: center.y.saturating_add(offset),
                },
                AXIS_COLOUR,
            );
        }
    }
}

fn draw_circle(frame: &mut PixelBuffer, center: Point, radius: i32, colour: Colour) {
    let r = f64::from(radius);
    let steps = (std::f64::consts::TAU * r).ceil().clamp(8.0, MAX_CIRCLE_STEPS) as u32;

    for step in 0..steps {
        let angle = std::f64::consts::TAU * f64::from(step) / f64::from(steps);
        let point = Point {
            x: center.x.saturating_add((r * angle.cos()).round() as i32),
            y: center.y.saturating_add((r * angle.sin()).round() as i32),
        };

        plot(frame, point, colour);
    }
}

fn fill_disc(frame: &mut PixelBuffer, center: Point, radius: i32, colour: Colour) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if i64::from(dx).pow(2) + i64::from(dy).pow(2) <= i64::from(radius).pow(2) {
                let point = Point {
                    x: center.x.saturating_add(dx),
                    y: center.y.saturating_add(dy),
                };

                plot(frame, point, colour);
            }
        }
    }
}
