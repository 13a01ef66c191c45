use crate::core::data::complex::Complex;

pub type Orbit = Vec<Complex>;

/// The first `length` iterates of `z -> z² + c`, starting with `start`
/// itself.
#[must_use]
pub fn generate_orbit(start: Complex, c: Complex, length: u32) -> Orbit {
    std::iter::successors(Some(start), |z| Some(z.step(c)))
        .take(length as usize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_element_is_start() {
        let start = Complex::new(0.3, -0.2);

        let orbit = generate_orbit(start, Complex::new(-1.0, 0.0), 5);

        assert_eq!(orbit[0], start);
    }

    #[test]
    fn test_length_matches_budget() {
        assert_eq!(generate_orbit(Complex::ZERO, Complex::ZERO, 1).len(), 1);
        assert_eq!(generate_orbit(Complex::ZERO, Complex::ZERO, 37).len(), 37);
        assert!(generate_orbit(Complex::ZERO, Complex::ZERO, 0).is_empty());
    }

    #[test]
    fn test_minus_one_cycles_between_minus_one_and_zero() {
        let orbit = generate_orbit(Complex::ZERO, Complex::new(-1.0, 0.0), 5);

        assert_eq!(
            orbit,
            vec![
                Complex::new(0.0, 0.0),
                Complex::new(-1.0, 0.0),
                Complex::new(0.0, 0.0),
                Complex::new(-1.0, 0.0),
                Complex::new(0.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_each_element_is_step_of_previous() {
        let c = Complex::new(0.1, 0.6);
        let orbit = generate_orbit(Complex::new(0.2, 0.2), c, 20);

        for pair in orbit.windows(2) {
            assert_eq!(pair[1], pair[0].square() + c);
        }
    }
}
