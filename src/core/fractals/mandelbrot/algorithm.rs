use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::util::coordinate_mapper::point_to_complex;
use std::convert::Infallible;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Number of steps the orbit of `c` seeded at `z0` survives before `|z| > 2`.
///
/// The first step is applied before counting, so the count starts at
/// `z0² + c`. Returns `max_iterations` when the orbit never escapes.
#[must_use]
pub fn escape_time(z0: Complex, c: Complex, max_iterations: u32) -> u32 {
    let mut z = z0.step(c);

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z.step(c);
    }

    max_iterations
}

/// Escape time of every pixel treated as the constant C, with the orbit
/// seeded from marker Z rather than the origin.
#[derive(Debug)]
pub struct MandelbrotAlgorithm<'a> {
    view: &'a ViewState,
    seed: Complex,
}

impl<'a> MandelbrotAlgorithm<'a> {
    #[must_use]
    pub fn new(view: &'a ViewState) -> Self {
        Self {
            view,
            seed: point_to_complex(view.marker_z(), view),
        }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm<'_> {
    type Success = u32;
    type Failure = Infallible;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = point_to_complex(pixel, self.view);

        Ok(escape_time(self.seed, c, self.view.max_iterations()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::explorer_config::ExplorerConfig;

    #[test]
    fn test_minus_one_does_not_escape_in_one_step() {
        let result = escape_time(Complex::ZERO, Complex::new(-1.0, 0.0), 1);

        assert_eq!(result, 1);
    }

    #[test]
    fn test_two_escapes_on_second_check() {
        // 0² + 2 = 2 sits on the radius, 2² + 2 = 6 is outside
        let result = escape_time(Complex::ZERO, Complex::new(2.0, 0.0), 50);

        assert_eq!(result, 1);
        assert!(result < 50);
    }

    #[test]
    fn test_far_point_escapes_immediately() {
        assert_eq!(escape_time(Complex::ZERO, Complex::new(3.0, 0.0), 10), 0);
    }

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(escape_time(Complex::ZERO, Complex::ZERO, 500), 500);
    }

    #[test]
    fn test_seed_changes_escape_time() {
        let c = Complex::new(0.25, 0.0);

        assert_eq!(escape_time(Complex::ZERO, c, 100), 100);
        assert!(escape_time(Complex::new(1.5, 0.0), c, 100) < 100);
    }

    #[test]
    fn test_zero_budget_returns_zero() {
        assert_eq!(escape_time(Complex::ZERO, Complex::new(5.0, 5.0), 0), 0);
    }

    #[test]
    fn test_algorithm_uses_marker_z_as_seed() {
        let mut view = ViewState::new(&ExplorerConfig {
            max_iterations: 20,
            ..ExplorerConfig::default()
        })
        .unwrap();
        view.set_marker_z(Point { x: 850, y: 450 });

        let algorithm = MandelbrotAlgorithm::new(&view);
        let pixel = Point { x: 700, y: 450 };

        assert_eq!(algorithm.seed, Complex::new(0.5, 0.0));
        assert_eq!(
            algorithm.compute(pixel),
            Ok(escape_time(Complex::new(0.5, 0.0), Complex::new(-1.0, 0.0), 20))
        );
    }
}
