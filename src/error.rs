use std::io;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    /// Spheres must have a finite, strictly positive radius
    #[error("sphere radius must be finite and > 0, got {0}")]
    InvalidRadius(f32),
    #[error("light brightness must be finite and > 0, got {0}")]
    InvalidBrightness(f32),
    /// The field of view is in radians and must lie in `(0, π)`
    #[error("camera fov must lie in (0, pi) radians, got {0}")]
    InvalidFov(f32),
    #[error("camera image plane distance must be > 0, got {0}")]
    InvalidPlaneDistance(f32),
    /// Both dimensions must be at least 2, otherwise the per-pixel step divides by zero
    #[error("frame dimensions must both be >= 2, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("buffer holds {actual} pixels but the frame needs {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },
    #[error("frames of height {left} and {right} can't be stitched side by side")]
    HeightMismatch { left: usize, right: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
