use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;

/// Runs `algorithm` over every pixel of `pixel_rect`, row by row, on the
/// calling thread.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    pixel_rect
        .points()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    struct StubSuccessAlgorithm {}

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = i32;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok(pixel.x * 10 + pixel.y)
        }
    }

    struct StubFailureAlgorithm {}

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = i32;
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }
    }

    #[test]
    fn test_visits_every_pixel_in_row_major_order() {
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 2, y: 1 }).unwrap();

        let results = generate_fractal(pixel_rect, &StubSuccessAlgorithm {}).unwrap();

        assert_eq!(results, vec![0, 10, 20, 1, 11, 21]);
    }

    #[test]
    fn test_result_length_matches_rect_size() {
        let pixel_rect = PixelRect::from_size(17, 9).unwrap();

        let results = generate_fractal(pixel_rect, &StubSuccessAlgorithm {}).unwrap();

        assert_eq!(results.len() as u64, pixel_rect.size());
    }

    #[test]
    fn test_propagates_algorithm_failure() {
        let pixel_rect = PixelRect::from_size(3, 4).unwrap();

        let result = generate_fractal(pixel_rect, &StubFailureAlgorithm {});

        assert_eq!(result, Err(StubError {}));
    }
}
