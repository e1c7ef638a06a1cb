use crate::error::{Error, Result};
use crate::math::{Colour, Position3};

/// Point light with inverse-square falloff
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Position3,
    pub colour: Colour,
    brightness: f32,
}

impl Light {
    pub fn new(position: Position3, colour: Colour, brightness: f32) -> Result<Self> {
        if !brightness.is_finite() || brightness <= 0.0 {
            return Err(Error::InvalidBrightness(brightness));
        }

        Ok(Self {
            position,
            colour,
            brightness,
        })
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Light reaching `point` if nothing is in the way. Not clamped, so it grows without bound close to the light.
    pub fn illumination(&self, point: &Position3) -> Colour {
        let distance_squared = (point - self.position).norm_squared();
        self.colour * self.brightness / distance_squared
    }
}
