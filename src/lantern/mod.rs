use std::time::Instant;

use log::{info, warn};
use rayon::prelude::*;

use crate::camera::Projection;
use crate::error::{Error, Result};
use crate::lantern::frame::Frame;
use crate::lantern::scene::Scene;
use crate::math::Colour;

pub mod frame;
pub mod light;
pub mod ray;
pub mod scene;
pub mod sphere;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settings {
    /// Clamp the diffuse and specular cosines at zero. Off gives the old signed lighting.
    pub clamp_lighting: bool,
    /// How far hit points are pushed along the normal before casting shadow rays
    pub normal_displacement: f32,
    /// Spread rows over the rayon thread pool
    pub parallel: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            clamp_lighting: true,
            normal_displacement: 1e-3,
            parallel: true,
        }
    }
}

impl Settings {
    pub(crate) fn weight(&self, cosine: f32) -> f32 {
        if self.clamp_lighting {
            cosine.max(0.0)
        } else {
            cosine
        }
    }
}

pub struct Lantern {
    pub settings: Settings,
}

impl Default for Lantern {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Lantern {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn render(&self, width: usize, height: usize, scene: &Scene) -> Result<Frame> {
        let mut frame = Frame::new(width, height);
        self.render_into(scene, &mut frame)?;
        Ok(frame)
    }

    /// Overwrites every pixel of `frame`. The scene is only read, so rows can be traced in any order.
    pub fn render_into(&self, scene: &Scene, frame: &mut Frame) -> Result<()> {
        let (width, height) = (frame.width(), frame.height());
        if width < 2 || height < 2 {
            return Err(Error::InvalidDimensions { width, height });
        }
        scene.validate()?;
        if scene.lights().is_empty() {
            warn!("scene has no lights, only ambient light will show");
        }

        let start = Instant::now();
        let projection = scene.camera.projection(width, height);

        let trace_row = |(y, row): (usize, &mut [Colour])| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = self.per_pixel(scene, &projection, x, y);
            }
        };
        if self.settings.parallel {
            frame.pixels_mut().par_chunks_mut(width).enumerate().for_each(trace_row);
        } else {
            frame.pixels_mut().chunks_mut(width).enumerate().for_each(trace_row);
        }

        info!(
            "rendered {}x{} frame ({} spheres, {} lights) in {:.2?}",
            width,
            height,
            scene.spheres().len(),
            scene.lights().len(),
            start.elapsed()
        );
        Ok(())
    }

    /// Ray generation for a single pixel, the CPU counterpart of a raygen shader
    pub fn per_pixel(&self, scene: &Scene, projection: &Projection, x: usize, y: usize) -> Colour {
        let ray = projection.ray(x, y);
        scene.shade_with(&ray, &self.settings)
    }
}

/// Renders `scene` into a fresh `width` x `height` frame with the default [`Settings`]
pub fn render(width: usize, height: usize, scene: &Scene) -> Result<Frame> {
    Lantern::default().render(width, height, scene)
}
