use nalgebra::{Point3, Vector3};

/// A location in world space. Two positions can't be added, only subtracted into a [`Vector3`].
pub type Position3 = Point3<f32>;

/// Linear RGB, unclamped. Clamping only happens when a frame is encoded.
pub type Colour = Vector3<f32>;

/// Tolerance below which the two roots of a ray/sphere intersection are treated as one (tangency)
pub const MERGE_EPSILON: f32 = 1e-4;

/// Vector component of `v` along `u`
pub fn projection(v: &Vector3<f32>, u: &Vector3<f32>) -> Vector3<f32> {
    u * (v.dot(u) / u.norm_squared())
}

/// Element-wise product, used to filter light through a surface colour
pub fn hadamard(a: &Vector3<f32>, b: &Vector3<f32>) -> Vector3<f32> {
    a.component_mul(b)
}

/// `v` rescaled to the given length. `v` must not be zero.
pub fn unit(v: &Vector3<f32>, length: f32) -> Vector3<f32> {
    v * (length / v.norm())
}

/// Mirrors `incident` about the plane with unit normal `normal`: `2(-L·N)N + L`
pub fn reflect(incident: &Vector3<f32>, normal: &Vector3<f32>) -> Vector3<f32> {
    normal * (2.0 * -incident.dot(normal)) + incident
}

/// Channel clamp applied when converting to a displayable value
pub fn clamp_unit(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}
