use nalgebra::Vector3;

use crate::math::Position3;

/// Direction doesn't have to be unit length, angular math normalizes it first
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Position3,
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Position3, direction: Vector3<f32>) -> Self {
        Self { origin, direction }
    }

    pub fn unit_direction(&self) -> Vector3<f32> {
        self.direction.normalize()
    }

    /// Point `distance` units along the (normalized) direction
    pub fn at(&self, distance: f32) -> Position3 {
        self.origin + self.unit_direction() * distance
    }
}
