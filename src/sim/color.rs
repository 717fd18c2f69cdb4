//! Collision feedback colours

use std::fmt;

use rand::Rng;

/// Saturation of every random colour (percent)
pub const BRIGHT_SATURATION: u8 = 90;
/// Lightness of every random colour (percent)
pub const BRIGHT_LIGHTNESS: u8 = 60;

/// An HSL colour, formatted as a CSS `hsl()` string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    /// Hue in degrees, 0..360
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    /// Pure white (#fff)
    pub const WHITE: Hsl = Hsl {
        hue: 0,
        saturation: 0,
        lightness: 100,
    };

    /// Random hue at fixed high saturation and lightness
    pub fn random_bright<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            hue: rng.random_range(0..360),
            saturation: BRIGHT_SATURATION,
            lightness: BRIGHT_LIGHTNESS,
        }
    }

    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// Ball and wall colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub ball: Hsl,
    pub wall: Hsl,
    /// Bumped on every recolour
    pub generation: u32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ball: Hsl::WHITE,
            wall: Hsl::WHITE,
            generation: 0,
        }
    }
}

impl Palette {
    /// Give ball and wall new random colours (one recolour event)
    pub fn recolor<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.ball = Hsl::random_bright(rng);
        self.wall = Hsl::random_bright(rng);
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_css_format() {
        let c = Hsl {
            hue: 217,
            saturation: 90,
            lightness: 60,
        };
        assert_eq!(c.css(), "hsl(217, 90%, 60%)");
        assert_eq!(Hsl::WHITE.css(), "hsl(0, 0%, 100%)");
    }

    #[test]
    fn test_random_bright_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let c = Hsl::random_bright(&mut rng);
            assert!(c.hue < 360);
            assert_eq!(c.saturation, BRIGHT_SATURATION);
            assert_eq!(c.lightness, BRIGHT_LIGHTNESS);
        }
    }

    #[test]
    fn test_recolor_bumps_generation() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut palette = Palette::default();
        palette.recolor(&mut rng);
        palette.recolor(&mut rng);
        assert_eq!(palette.generation, 2);
        assert_eq!(palette.ball.saturation, BRIGHT_SATURATION);
        assert_eq!(palette.wall.lightness, BRIGHT_LIGHTNESS);
    }
}
