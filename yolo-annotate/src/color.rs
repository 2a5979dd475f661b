//! Random overlay colors for class rendering.

use crate::common::*;
use std::ops::RangeInclusive;

/// Accepted range of `r + g + b`, which keeps colors away from near-black and near-white.
pub const CHANNEL_SUM_RANGE: RangeInclusive<u16> = 300..=600;

/// An 8-bit RGB color. Displays as `#rrggbb` in lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn channel_sum(&self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Draws colors of medium brightness by rejection sampling.
///
/// The generator owns its random source. Share it across threads behind a
/// lock or keep one generator per thread.
#[derive(Debug, Clone)]
pub struct ColorGenerator<R = StdRng> {
    rng: R,
}

impl ColorGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl Default for ColorGenerator<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R> ColorGenerator<R>
where
    R: Rng,
{
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate_rgb(&mut self) -> Rgb {
        loop {
            let rgb = Rgb {
                r: self.rng.gen(),
                g: self.rng.gen(),
                b: self.rng.gen(),
            };

            if CHANNEL_SUM_RANGE.contains(&rgb.channel_sum()) {
                break rgb;
            }
        }
    }

    /// Generate a color as a `#rrggbb` string.
    pub fn generate(&mut self) -> String {
        self.generate_rgb().to_string()
    }
}
