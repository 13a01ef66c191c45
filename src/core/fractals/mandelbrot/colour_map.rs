use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::errors::MandelbrotColourMapError;
use std::error::Error;

/// Rainbow banding by escape speed: hue `iterations / max_iterations` at
/// full saturation and brightness, black for orbits that never escaped.
#[derive(Debug)]
pub struct MandelbrotHsbRainbow {
    max_iterations: u32,
}

impl MandelbrotHsbRainbow {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap<u32> for MandelbrotHsbRainbow {
    fn map(&self, iterations: u32) -> Result<Colour, Box<dyn Error>> {
        if iterations > self.max_iterations {
            return Err(Box::new(MandelbrotColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            }));
        }

        if iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        let hue = iterations as f32 / self.max_iterations as f32;

        Ok(Colour::from_hsb(hue, 1.0, 1.0))
    }

    fn display_name(&self) -> &str {
        "HSB rainbow"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_returns_black_at_max_iterations() {
        let mapper = MandelbrotHsbRainbow::new(100);

        assert_eq!(mapper.map(100).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_map_zero_iterations_is_red() {
        let mapper = MandelbrotHsbRainbow::new(100);

        assert_eq!(mapper.map(0).unwrap(), Colour { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_map_half_is_cyan() {
        let mapper = MandelbrotHsbRainbow::new(100);

        assert_eq!(mapper.map(50).unwrap(), Colour { r: 0, g: 255, b: 255 });
    }

    #[test]
    fn test_budget_of_one_is_red_or_black() {
        let mapper = MandelbrotHsbRainbow::new(1);

        assert_eq!(mapper.map(0).unwrap(), Colour { r: 255, g: 0, b: 0 });
        assert_eq!(mapper.map(1).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_map_returns_error_when_iterations_exceed_max() {
        let mapper = MandelbrotHsbRainbow::new(100);
        let err = mapper.map(101).unwrap_err();

        assert_eq!(
            err.downcast_ref::<MandelbrotColourMapError>(),
            Some(&MandelbrotColourMapError::IterationsExceedMax {
                iterations: 101,
                max_iterations: 100
            })
        );
    }
}
