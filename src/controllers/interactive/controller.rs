use crate::controllers::interactive::errors::controller::ControllerError;
use crate::controllers::interactive::events::input::InputEvent;
use crate::controllers::interactive::events::redraw::Redraw;
use crate::core::actions::draw_overlay::draw_overlay;
use crate::core::actions::render_field::render_field;
use crate::core::data::complex::Complex;
use crate::core::data::explorer_config::ExplorerConfig;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::view_state::{Selection, ViewState};
use crate::core::fractals::mandelbrot::orbit::{Orbit, generate_orbit};
use crate::core::util::coordinate_mapper::{
    complex_to_point, finite_complex_to_point, point_to_complex,
};
use log::{debug, info};
use std::time::{Duration, Instant};

/// Owns the view and everything derived from it, and keeps the two in step
/// as input arrives. Every handler runs to completion before returning.
pub struct InteractionController {
    view: ViewState,
    zoom_in_step: u32,
    zoom_out_step: u32,
    field: PixelBuffer,
    orbit: Orbit,
    last_render_duration: Duration,
}

impl InteractionController {
    pub fn new(config: ExplorerConfig) -> Result<Self, ControllerError> {
        let view = ViewState::new(&config)?;

        info!(
            "starting explorer on a {}x{} field at zoom {} with {} iteration(s)",
            config.width, config.height, config.zoom, config.max_iterations
        );

        let mut controller = Self {
            field: PixelBuffer::new(view.field_rect()),
            orbit: Orbit::new(),
            view,
            zoom_in_step: config.zoom_in_step,
            zoom_out_step: config.zoom_out_step,
            last_render_duration: Duration::ZERO,
        };

        controller.recompute_orbit();
        controller.recompute_field()?;

        Ok(controller)
    }

    pub fn handle(&mut self, event: InputEvent) -> Result<Redraw, ControllerError> {
        match event {
            InputEvent::PointerPress(position) => self.pointer_press(position),
            InputEvent::PointerDrag(position) => self.pointer_drag(position),
            InputEvent::PointerRelease => Ok(self.pointer_release()),
            InputEvent::IncreaseIterations => self.increase_iterations(),
            InputEvent::DecreaseIterations => self.decrease_iterations(),
            InputEvent::ZoomIn => self.zoom_in(),
            InputEvent::ZoomOut => self.zoom_out(),
        }
    }

    /// Picks up a marker under the pointer, Z before C. A press anywhere else
    /// re-centres the view on the pressed point.
    pub fn pointer_press(&mut self, position: Point) -> Result<Redraw, ControllerError> {
        if self.view.selection() != Selection::None {
            return Ok(Redraw::Nothing);
        }

        if self.view.marker_hit(self.view.marker_z(), position) {
            self.view.set_selection(Selection::MarkerZ);
            return Ok(Redraw::Overlay);
        }

        if self.view.marker_hit(self.view.marker_c(), position) {
            self.view.set_selection(Selection::MarkerC);
            return Ok(Redraw::Overlay);
        }

        self.view.set_focused_point(point_to_complex(position, &self.view));
        self.center_on(position);
        debug!(
            "re-centred on {:?}, grid centre now {:?}",
            self.view.focused_point(),
            self.view.grid_center()
        );

        self.recompute_all()
    }

    /// Z feeds every pixel of the field, C only feeds the orbit.
    pub fn pointer_drag(&mut self, position: Point) -> Result<Redraw, ControllerError> {
        match self.view.selection() {
            Selection::None => Ok(Redraw::Nothing),
            Selection::MarkerZ => {
                self.view.set_marker_z(position);
                self.recompute_all()
            }
            Selection::MarkerC => {
                self.view.set_marker_c(position);
                self.recompute_orbit();
                Ok(Redraw::Overlay)
            }
        }
    }

    pub fn pointer_release(&mut self) -> Redraw {
        self.view.set_selection(Selection::None);

        Redraw::Nothing
    }

    pub fn increase_iterations(&mut self) -> Result<Redraw, ControllerError> {
        if !self.view.increase_iterations() {
            return Ok(Redraw::Nothing);
        }

        self.recompute_all()
    }

    pub fn decrease_iterations(&mut self) -> Result<Redraw, ControllerError> {
        if !self.view.decrease_iterations() {
            debug!("iteration budget already at 1");
            return Ok(Redraw::Nothing);
        }

        self.recompute_all()
    }

    pub fn zoom_in(&mut self) -> Result<Redraw, ControllerError> {
        self.view.zoom_in(self.zoom_in_step);
        self.refocus()
    }

    pub fn zoom_out(&mut self) -> Result<Redraw, ControllerError> {
        self.view.zoom_out(self.zoom_out_step);
        self.refocus()
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn field(&self) -> &PixelBuffer {
        &self.field
    }

    #[must_use]
    pub fn orbit(&self) -> &[Complex] {
        &self.orbit
    }

    /// Pixel positions of the orbit. Iterates that overflowed to infinity
    /// or NaN are left out.
    #[must_use]
    pub fn orbit_pixels(&self) -> Vec<Point> {
        self.orbit
            .iter()
            .filter_map(|value| finite_complex_to_point(*value, &self.view))
            .collect()
    }

    #[must_use]
    pub fn marker_z(&self) -> Point {
        self.view.marker_z()
    }

    #[must_use]
    pub fn marker_c(&self) -> Point {
        self.view.marker_c()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.view.max_iterations()
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Duration {
        self.last_render_duration
    }

    #[must_use]
    pub fn marker_z_label(&self) -> String {
        marker_label("Z", point_to_complex(self.view.marker_z(), &self.view))
    }

    #[must_use]
    pub fn marker_c_label(&self) -> String {
        marker_label("C", point_to_complex(self.view.marker_c(), &self.view))
    }

    /// The field with axes, orbit and markers painted over it.
    #[must_use]
    pub fn overlay_frame(&self) -> PixelBuffer {
        draw_overlay(&self.field, &self.view, &self.orbit)
    }

    /// Shifts grid and markers so that `position` lands on the field centre.
    fn center_on(&mut self, position: Point) {
        let center = self.view.field_rect().center();

        self.view.shift(Point {
            x: center.x.saturating_sub(position.x),
            y: center.y.saturating_sub(position.y),
        });
    }

    fn refocus(&mut self) -> Result<Redraw, ControllerError> {
        let target = complex_to_point(self.view.focused_point(), &self.view);
        self.center_on(target);
        debug!("zoom now {}", self.view.zoom());

        self.recompute_all()
    }

    fn recompute_all(&mut self) -> Result<Redraw, ControllerError> {
        self.recompute_orbit();
        self.recompute_field()?;

        Ok(Redraw::Everything)
    }

    fn recompute_orbit(&mut self) {
        let start = point_to_complex(self.view.marker_z(), &self.view);
        let c = point_to_complex(self.view.marker_c(), &self.view);

        self.orbit = generate_orbit(start, c, self.view.max_iterations());
    }

    fn recompute_field(&mut self) -> Result<(), ControllerError> {
        let start = Instant::now();
        self.field = render_field(&self.view)?;
        self.last_render_duration = start.elapsed();

        let rect = self.view.field_rect();
        debug!(
            "rendered {}x{} field with {} iteration(s) in {:?}",
            rect.width(),
            rect.height(),
            self.view.max_iterations(),
            self.last_render_duration
        );

        Ok(())
    }
}

/// `"Z: X= 0.0 / Y= 0.0"`. Y is shown with the usual upward orientation.
fn marker_label(name: &str, value: Complex) -> String {
    format!(
        "{}: X= {} / Y= {}",
        name,
        format_coordinate(value.real),
        format_coordinate(-value.imag)
    )
}

fn format_coordinate(value: f64) -> String {
    // adding zero turns -0.0 into 0.0
    format!("{:?}", value + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::view_state::Axis;
    use crate::core::util::coordinate_mapper::to_plane;

    // plane spans -5..5 by -2.5..2.5, Z on (100, 50), C on (80, 50)
    fn small_config() -> ExplorerConfig {
        ExplorerConfig {
            width: 200,
            height: 100,
            zoom: 20,
            ..ExplorerConfig::default()
        }
    }

    fn controller() -> InteractionController {
        InteractionController::new(small_config()).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ExplorerConfig {
            zoom: 0,
            ..small_config()
        };

        assert!(matches!(
            InteractionController::new(config),
            Err(ControllerError::Config(_))
        ));
    }

    #[test]
    fn test_initial_labels() {
        let controller = controller();

        assert_eq!(controller.marker_z_label(), "Z: X= 0.0 / Y= 0.0");
        assert_eq!(controller.marker_c_label(), "C: X= -1.0 / Y= 0.0");
    }

    #[test]
    fn test_initial_orbit_is_just_the_start() {
        let controller = controller();

        assert_eq!(controller.max_iterations(), 1);
        assert_eq!(controller.orbit(), &[Complex::ZERO]);
        assert_eq!(controller.orbit_pixels(), vec![controller.marker_z()]);
    }

    #[test]
    fn test_press_on_marker_z_selects_it() {
        let mut controller = controller();

        let redraw = controller.pointer_press(Point { x: 104, y: 46 }).unwrap();

        assert_eq!(redraw, Redraw::Overlay);
        assert_eq!(controller.view().selection(), Selection::MarkerZ);
    }

    #[test]
    fn test_press_on_marker_c_selects_it() {
        let mut controller = controller();

        let redraw = controller.pointer_press(Point { x: 80, y: 55 }).unwrap();

        assert_eq!(redraw, Redraw::Overlay);
        assert_eq!(controller.view().selection(), Selection::MarkerC);
    }

    #[test]
    fn test_marker_z_wins_when_markers_overlap() {
        let config = ExplorerConfig {
            zoom: 4,
            ..small_config()
        };
        let mut controller = InteractionController::new(config).unwrap();

        // Z on (100, 50), C on (96, 50)
        controller.pointer_press(Point { x: 98, y: 50 }).unwrap();

        assert_eq!(controller.view().selection(), Selection::MarkerZ);
    }

    #[test]
    fn test_press_elsewhere_recentres() {
        let mut controller = controller();

        let redraw = controller.pointer_press(Point { x: 150, y: 50 }).unwrap();

        assert_eq!(redraw, Redraw::Everything);
        assert_eq!(controller.view().selection(), Selection::None);
        assert_eq!(controller.view().focused_point(), Complex::new(2.5, 0.0));
        assert_eq!(controller.view().grid_center(), Point { x: 50, y: 50 });
        assert_eq!(controller.marker_z(), Point { x: 50, y: 50 });
        assert_eq!(controller.marker_c(), Point { x: 30, y: 50 });
        assert_eq!(to_plane(100, Axis::Real, controller.view()), 2.5);
    }

    #[test]
    fn test_recentre_keeps_markers_in_the_plane() {
        let mut controller = controller();

        controller.pointer_press(Point { x: 20, y: 90 }).unwrap();

        assert_eq!(controller.marker_z_label(), "Z: X= 0.0 / Y= 0.0");
        assert_eq!(controller.marker_c_label(), "C: X= -1.0 / Y= 0.0");
    }

    #[test]
    fn test_drag_z_recomputes_field_and_orbit() {
        let mut controller = controller();
        let field_before = controller.field().clone();

        controller.pointer_press(Point { x: 100, y: 50 }).unwrap();
        let redraw = controller.pointer_drag(Point { x: 140, y: 50 }).unwrap();

        assert_eq!(redraw, Redraw::Everything);
        assert_eq!(controller.marker_z(), Point { x: 140, y: 50 });
        assert_eq!(controller.orbit(), &[Complex::new(2.0, 0.0)]);
        assert_ne!(controller.field(), &field_before);
        // z0 = 2 pushes the origin out on the first step
        assert_ne!(controller.field().pixel(Point { x: 100, y: 50 }), Some(Colour::BLACK));
    }

    #[test]
    fn test_drag_c_recomputes_only_orbit() {
        let mut controller = controller();
        controller.increase_iterations().unwrap();
        let field_before = controller.field().clone();

        controller.pointer_press(Point { x: 80, y: 50 }).unwrap();
        let redraw = controller.pointer_drag(Point { x: 90, y: 48 }).unwrap();

        assert_eq!(redraw, Redraw::Overlay);
        assert_eq!(controller.field(), &field_before);
        assert_eq!(controller.marker_c_label(), "C: X= -0.5 / Y= 0.1");
        assert_eq!(
            controller.orbit(),
            &[Complex::ZERO, Complex::new(-0.5, -0.1)]
        );
    }

    #[test]
    fn test_escaping_orbit_pixels_skip_overflowed_iterates() {
        let mut controller = controller();
        for _ in 1..20 {
            controller.increase_iterations().unwrap();
        }

        // C = 1 runs 0, 1, 2, 5, 26, ... to infinity and then NaN
        controller.pointer_press(Point { x: 80, y: 50 }).unwrap();
        controller.pointer_drag(Point { x: 120, y: 50 }).unwrap();
        controller.pointer_release();

        let orbit = controller.orbit();
        let pixels = controller.orbit_pixels();
        let finite = orbit.iter().filter(|z| z.is_finite()).count();

        assert_eq!(orbit.len(), 20);
        assert!(finite < orbit.len());
        assert_eq!(pixels.len(), finite);
        assert_eq!(
            pixels.iter().filter(|p| **p == controller.view().grid_center()).count(),
            1
        );
        assert_eq!(pixels[0], controller.marker_z());
    }

    #[test]
    fn test_drag_without_selection_is_ignored() {
        let mut controller = controller();

        assert_eq!(
            controller.pointer_drag(Point { x: 10, y: 10 }).unwrap(),
            Redraw::Nothing
        );
        assert_eq!(controller.marker_z(), Point { x: 100, y: 50 });
    }

    #[test]
    fn test_release_returns_to_idle() {
        let mut controller = controller();

        controller.pointer_press(Point { x: 100, y: 50 }).unwrap();
        assert_eq!(controller.pointer_release(), Redraw::Nothing);
        assert_eq!(controller.view().selection(), Selection::None);
        assert_eq!(
            controller.pointer_drag(Point { x: 10, y: 10 }).unwrap(),
            Redraw::Nothing
        );
    }

    #[test]
    fn test_budget_floor_requests_no_redraw() {
        let mut controller = controller();

        for _ in 0..3 {
            assert_eq!(controller.decrease_iterations().unwrap(), Redraw::Nothing);
        }

        assert_eq!(controller.max_iterations(), 1);
    }

    #[test]
    fn test_budget_changes_recompute_everything() {
        let mut controller = controller();

        assert_eq!(controller.increase_iterations().unwrap(), Redraw::Everything);
        assert_eq!(controller.increase_iterations().unwrap(), Redraw::Everything);
        assert_eq!(controller.orbit().len(), 3);

        assert_eq!(controller.decrease_iterations().unwrap(), Redraw::Everything);
        assert_eq!(controller.max_iterations(), 2);
        assert_eq!(controller.orbit().len(), 2);
    }

    #[test]
    fn test_zoom_in_halves_plane_distances() {
        let config = ExplorerConfig {
            zoom: 100,
            ..small_config()
        };
        let mut controller = InteractionController::new(config).unwrap();
        let before = to_plane(0, Axis::Real, controller.view());

        assert_eq!(controller.zoom_in().unwrap(), Redraw::Everything);

        assert_eq!(controller.view().zoom(), 200);
        assert_eq!(to_plane(0, Axis::Real, controller.view()), before / 2.0);
    }

    #[test]
    fn test_zoom_keeps_focused_point_centred() {
        let mut controller = controller();
        controller.pointer_press(Point { x: 150, y: 50 }).unwrap();

        controller.zoom_in().unwrap();
        assert_eq!(to_plane(100, Axis::Real, controller.view()), 2.5);

        controller.zoom_out().unwrap();
        assert_eq!(controller.view().zoom(), 70);
        assert_eq!(to_plane(100, Axis::Real, controller.view()), 2.5);
    }

    #[test]
    fn test_zoom_out_stops_at_one() {
        let mut controller = controller();

        controller.zoom_out().unwrap();

        assert_eq!(controller.view().zoom(), 1);
    }

    #[test]
    fn test_handle_dispatches_events() {
        let mut controller = controller();

        assert_eq!(
            controller.handle(InputEvent::PointerPress(Point { x: 80, y: 50 })).unwrap(),
            Redraw::Overlay
        );
        assert_eq!(
            controller.handle(InputEvent::PointerDrag(Point { x: 60, y: 50 })).unwrap(),
            Redraw::Overlay
        );
        assert_eq!(
            controller.handle(InputEvent::PointerRelease).unwrap(),
            Redraw::Nothing
        );
        assert_eq!(
            controller.handle(InputEvent::IncreaseIterations).unwrap(),
            Redraw::Everything
        );
        assert_eq!(controller.marker_c_label(), "C: X= -2.0 / Y= 0.0");
    }

    #[test]
    fn test_overlay_frame_paints_markers_over_field() {
        let controller = controller();

        let frame = controller.overlay_frame();

        assert_eq!(frame.pixel_rect(), controller.field().pixel_rect());
        assert_eq!(frame.pixel(controller.marker_z()), Some(Colour::BLUE));
        assert_eq!(frame.pixel(controller.marker_c()), Some(Colour::GREEN));
    }

    #[test]
    fn test_format_coordinate_has_no_negative_zero() {
        assert_eq!(format_coordinate(-0.0), "0.0");
        assert_eq!(format_coordinate(-1.0), "-1.0");
        assert_eq!(format_coordinate(0.25), "0.25");
    }
}
