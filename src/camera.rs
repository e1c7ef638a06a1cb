use std::f32::consts::PI;

use log::warn;
use nalgebra::{Rotation3, Vector3};

use crate::error::{Error, Result};
use crate::lantern::ray::Ray;
use crate::math::Position3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Position3,
    /// View direction, `+Z` by default
    pub orientation: Vector3<f32>,
    /// Horizontal field of view in radians
    pub fov: f32,
    /// Distance from the camera to the image plane
    pub plane_distance: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Position3::origin(),
            orientation: Vector3::z(),
            fov: PI / 2.0,
            plane_distance: 1.0,
        }
    }
}

impl Camera {
    pub fn new(position: Position3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_orientation(mut self, orientation: Vector3<f32>) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    pub fn with_plane_distance(mut self, plane_distance: f32) -> Self {
        self.plane_distance = plane_distance;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.fov > 0.0 && self.fov < PI) {
            return Err(Error::InvalidFov(self.fov));
        }
        if !(self.plane_distance > 0.0) || !self.plane_distance.is_finite() {
            return Err(Error::InvalidPlaneDistance(self.plane_distance));
        }
        Ok(())
    }

    /// Precomputes everything needed to turn pixel coordinates into camera rays for one frame.
    ///
    /// `width` and `height` must both be at least 2.
    pub fn projection(&self, width: usize, height: usize) -> Projection {
        let x_fov_tan = (self.fov / 2.0).tan();
        let y_fov_tan = x_fov_tan * height as f32 / width as f32;

        Projection {
            origin: self.position,
            half_width: width as f32 / 2.0,
            half_height: height as f32 / 2.0,
            x_step: 2.0 * self.plane_distance * x_fov_tan / (width as f32 - 1.0),
            y_step: 2.0 * self.plane_distance * y_fov_tan / (height as f32 - 1.0),
            plane_distance: self.plane_distance,
            rotation: self.view_rotation(),
        }
    }

    /// Rotation taking `+Z` onto the view direction, `None` when looking straight down `+Z`
    fn view_rotation(&self) -> Option<Rotation3<f32>> {
        let Some(forward) = self.orientation.try_normalize(f32::EPSILON) else {
            warn!("camera orientation {:?} is degenerate, looking down +Z", self.orientation);
            return None;
        };
        if (self.orientation.norm() - 1.0).abs() > 1e-3 {
            warn!("camera orientation {:?} isn't normalized", self.orientation);
        }

        if (forward - Vector3::z()).norm() < 1e-6 {
            return None;
        }
        // `rotation_between` has no unique answer for opposite vectors
        Rotation3::rotation_between(&Vector3::z(), &forward)
            .or_else(|| Some(Rotation3::from_axis_angle(&Vector3::y_axis(), PI)))
    }
}

/// Maps pixel coordinates onto the image plane of a [`Camera`]
#[derive(Copy, Clone, Debug)]
pub struct Projection {
    origin: Position3,
    half_width: f32,
    half_height: f32,
    x_step: f32,
    y_step: f32,
    plane_distance: f32,
    rotation: Option<Rotation3<f32>>,
}

impl Projection {
    /// Camera ray through column `x`, row `y`. Row 0 is the top of the image.
    pub fn ray(&self, x: usize, y: usize) -> Ray {
        let plane_x = (x as f32 - self.half_width) * self.x_step;
        let plane_y = -(y as f32 - self.half_height) * self.y_step;

        let mut direction = Vector3::new(plane_x, plane_y, self.plane_distance).normalize();
        if let Some(rotation) = &self.rotation {
            direction = rotation * direction;
        }

        Ray::new(self.origin, direction)
    }
}
