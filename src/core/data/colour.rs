#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255 };
    pub const DARK_GREY: Self = Self { r: 64, g: 64, b: 64 };
    pub const BLUE: Self = Self { r: 0, g: 0, b: 255 };
    pub const GREEN: Self = Self { r: 0, g: 255, b: 0 };
    pub const ORANGE: Self = Self { r: 255, g: 200, b: 0 };

    /// Converts hue/saturation/brightness in `[0, 1]` to RGB.
    ///
    /// Hue wraps, so `1.0` is the same red as `0.0`. Channels are rounded
    /// with `x * 255 + 0.5`.
    #[must_use]
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        let channel = |value: f32| (value * 255.0 + 0.5) as u8;

        if saturation == 0.0 {
            let grey = channel(brightness);
            return Self { r: grey, g: grey, b: grey };
        }

        let h = (hue - hue.floor()) * 6.0;
        let f = h - h.floor();
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));

        let (r, g, b) = match h as u8 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            _ => (brightness, p, q),
        };

        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }
}
