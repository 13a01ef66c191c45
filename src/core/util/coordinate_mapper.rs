use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::view_state::{Axis, ViewState};

// Products this close to an integer are float noise from the division in
// to_plane, not a genuine fraction of a pixel.
const SNAP_TOLERANCE: f64 = 1e-6;

/// `(pixel - grid_center) / zoom` on one axis. The imaginary axis grows
/// downwards, same as pixel rows.
#[must_use]
pub fn to_plane(pixel: i32, axis: Axis, view: &ViewState) -> f64 {
    (f64::from(pixel) - f64::from(view.grid_center_on(axis))) / f64::from(view.zoom())
}

/// Inverse of [`to_plane`]: `trunc(coord * zoom) + grid_center`.
///
/// Truncates toward zero, so `to_pixel(to_plane(p)) == p` holds exactly.
#[must_use]
pub fn to_pixel(coord: f64, axis: Axis, view: &ViewState) -> i32 {
    let scaled = coord * f64::from(view.zoom());
    let nearest = scaled.round();
    let offset = if (scaled - nearest).abs() <= SNAP_TOLERANCE {
        nearest
    } else {
        scaled.trunc()
    };

    // `as` saturates and sends NaN to 0, see finite_complex_to_point
    (offset as i32).saturating_add(view.grid_center_on(axis))
}

#[must_use]
pub fn point_to_complex(point: Point, view: &ViewState) -> Complex {
    Complex {
        real: to_plane(point.x, Axis::Real, view),
        imag: to_plane(point.y, Axis::Imaginary, view),
    }
}

#[must_use]
pub fn complex_to_point(value: Complex, view: &ViewState) -> Point {
    Point {
        x: to_pixel(value.real, Axis::Real, view),
        y: to_pixel(value.imag, Axis::Imaginary, view),
    }
}

/// Like [`complex_to_point`], but `None` for infinite or NaN values, which
/// have no pixel.
#[must_use]
pub fn finite_complex_to_point(value: Complex, view: &ViewState) -> Option<Point> {
    value.is_finite().then(|| complex_to_point(value, view))
}
