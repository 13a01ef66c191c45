use crate::core::data::complex::Complex;
use crate::core::data::explorer_config::{ExplorerConfig, ExplorerConfigError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    Real,
    Imaginary,
}

/// Which marker, if any, is following the pointer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    MarkerZ,
    MarkerC,
}

/// Everything the explorer needs to map pixels to the plane and back.
///
/// Markers are stored in pixel space, so a zoom moves them in the plane
/// while a pan moves them with the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    field_rect: PixelRect,
    zoom: u32,
    grid_center: Point,
    max_iterations: u32,
    marker_z: Point,
    marker_c: Point,
    marker_size: u32,
    focused_point: Complex,
    selection: Selection,
}

impl ViewState {
    /// Plane origin at the centre of the field, Z on the origin and C at -1.
    pub fn new(config: &ExplorerConfig) -> Result<Self, ExplorerConfigError> {
        let field_rect = config.validate()?;
        let grid_center = field_rect.center();
        let one_unit = i32::try_from(config.zoom).unwrap_or(i32::MAX);

        Ok(Self {
            field_rect,
            zoom: config.zoom,
            grid_center,
            max_iterations: config.max_iterations,
            marker_z: grid_center,
            marker_c: Point {
                x: grid_center.x.saturating_sub(one_unit),
                y: grid_center.y,
            },
            marker_size: config.marker_size,
            focused_point: Complex::ZERO,
            selection: Selection::None,
        })
    }

    #[must_use]
    pub fn field_rect(&self) -> PixelRect {
        self.field_rect
    }

    #[must_use]
    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    #[must_use]
    pub fn grid_center(&self) -> Point {
        self.grid_center
    }

    #[must_use]
    pub fn grid_center_on(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Real => self.grid_center.x,
            Axis::Imaginary => self.grid_center.y,
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn marker_z(&self) -> Point {
        self.marker_z
    }

    #[must_use]
    pub fn marker_c(&self) -> Point {
        self.marker_c
    }

    #[must_use]
    pub fn marker_size(&self) -> u32 {
        self.marker_size
    }

    #[must_use]
    pub fn focused_point(&self) -> Complex {
        self.focused_point
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Pointer falls inside the marker's square, edges included.
    #[must_use]
    pub fn marker_hit(&self, marker: Point, pointer: Point) -> bool {
        let half = i64::from(self.marker_size / 2);

        (i64::from(pointer.x) - i64::from(marker.x)).abs() <= half
            && (i64::from(pointer.y) - i64::from(marker.y)).abs() <= half
    }

    pub fn set_marker_z(&mut self, position: Point) {
        self.marker_z = position;
    }

    pub fn set_marker_c(&mut self, position: Point) {
        self.marker_c = position;
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn set_focused_point(&mut self, focused_point: Complex) {
        self.focused_point = focused_point;
    }

    /// Returns false when the budget was already 1 and nothing changed.
    pub fn decrease_iterations(&mut self) -> bool {
        if self.max_iterations <= 1 {
            self.max_iterations = 1;
            return false;
        }

        self.max_iterations -= 1;
        true
    }

    pub fn increase_iterations(&mut self) -> bool {
        let before = self.max_iterations;
        self.max_iterations = self.max_iterations.saturating_add(1);

        self.max_iterations != before
    }

    pub fn zoom_in(&mut self, step: u32) {
        self.zoom = self.zoom.saturating_add(step);
    }

    pub fn zoom_out(&mut self, step: u32) {
        self.zoom = self.zoom.saturating_sub(step).max(1);
    }

    /// Pans by `delta`: the grid and both markers move together.
    pub fn shift(&mut self, delta: Point) {
        let moved = |p: Point| Point {
            x: p.x.saturating_add(delta.x),
            y: p.y.saturating_add(delta.y),
        };

        self.grid_center = moved(self.grid_center);
        self.marker_z = moved(self.marker_z);
        self.marker_c = moved(self.marker_c);
    }
}
