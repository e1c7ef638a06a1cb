use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbImage;
use log::debug;

use crate::error::{Error, Result};
use crate::math::{clamp_unit, Colour};

/// Row-major buffer of unclamped colours, pixel `(x, y)` lives at `x + y * width`
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<Colour>,
}

impl Frame {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Colour::zeros(); width * height],
        }
    }

    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Colour>) -> Result<Self> {
        if pixels.len() != width * height {
            return Err(Error::BufferSizeMismatch {
                expected: width * height,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Colour] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<Colour> {
        self.pixels
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) is outside a {}x{} frame",
            self.width,
            self.height
        );
        x + y * self.width
    }

    /// # Panics
    /// If `(x, y)` is outside the frame
    pub fn get(&self, x: usize, y: usize) -> Colour {
        self.pixels[self.index(x, y)]
    }

    /// # Panics
    /// If `(x, y)` is outside the frame
    pub fn set(&mut self, x: usize, y: usize, colour: Colour) {
        let index = self.index(x, y);
        self.pixels[index] = colour;
    }

    /// Places `left` and `right` next to each other. Both must be the same height.
    pub fn stitch_side_by_side(left: &Frame, right: &Frame) -> Result<Frame> {
        if left.height != right.height {
            return Err(Error::HeightMismatch {
                left: left.height,
                right: right.height,
            });
        }

        let width = left.width + right.width;
        let mut pixels = Vec::with_capacity(width * left.height);
        for (left_row, right_row) in left
            .pixels
            .chunks_exact(left.width.max(1))
            .zip(right.pixels.chunks_exact(right.width.max(1)))
        {
            pixels.extend_from_slice(left_row);
            pixels.extend_from_slice(right_row);
        }

        Frame::from_pixels(width, left.height, pixels)
    }

    /// Each channel clamped to `[0, 1]`, scaled by 255 and truncated
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|colour| colour.iter().map(|&channel| (255.0 * clamp_unit(channel)) as u8))
            .collect()
    }

    /// Binary PPM: `P6\n<width> <height>\n255\n` followed by one byte per channel
    pub fn write_ppm<W: Write>(&self, mut writer: W) -> Result<()> {
        write!(writer, "P6\n{} {}\n255\n", self.width, self.height)?;
        writer.write_all(&self.to_rgb8())?;
        writer.flush()?;
        Ok(())
    }

    /// `.ppm` goes through [`Frame::write_ppm`], anything else is left to the `image` crate to encode
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!("writing {}x{} frame to {}", self.width, self.height, path.display());

        if path.extension().map_or(false, |extension| extension.eq_ignore_ascii_case(OsStr::new("ppm"))) {
            let file = File::create(path)?;
            return self.write_ppm(BufWriter::new(file));
        }

        let image = RgbImage::from_raw(self.width as u32, self.height as u32, self.to_rgb8()).ok_or(
            Error::BufferSizeMismatch {
                expected: self.width * self.height,
                actual: self.pixels.len(),
            },
        )?;
        image.save(path)?;
        Ok(())
    }
}
