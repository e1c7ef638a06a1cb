use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use nalgebra::Vector3;

use crate::demo::{demo_scene, sine_pattern};
use crate::error::{Error, Result};
use crate::lantern::frame::Frame;
use crate::lantern::scene::Scene;
use crate::lantern::{Lantern, Settings};

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum Pattern {
    /// Ray traced demo scene
    Scene,
    /// Sine interference pattern, no tracing
    Sine,
}

/// Whitted-style sphere ray tracer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = 2000)]
    pub width: usize,

    #[arg(long, default_value_t = 1000)]
    pub height: usize,

    /// `.ppm` is written as binary P6, other extensions are encoded by `image`
    #[arg(short, long, default_value = "out.ppm")]
    pub output: PathBuf,

    /// Distance between the eyes; anything but 0 renders a side-by-side stereo pair
    #[arg(short, long, default_value_t = 1.0)]
    pub interocular: f32,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 90.0)]
    pub fov: f32,

    /// Let light facing away from a surface subtract from it
    #[arg(long, action)]
    pub no_clamp: bool,

    /// Trace rows on the calling thread only
    #[arg(long, action)]
    pub sequential: bool,

    #[arg(long, value_enum, default_value_t = Pattern::Scene)]
    pub pattern: Pattern,

    #[arg(short, long, action)]
    pub verbose: bool,
}

impl Args {
    pub fn settings(&self) -> Settings {
        Settings {
            clamp_lighting: !self.no_clamp,
            parallel: !self.sequential,
            ..Default::default()
        }
    }
}

pub struct Application {
    args: Args,
    lantern: Lantern,
}

impl Application {
    pub fn new(args: Args) -> Self {
        let lantern = Lantern::new(args.settings());
        Self { args, lantern }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let frame = match self.args.pattern {
            Pattern::Sine => sine_pattern(self.args.width, self.args.height),
            Pattern::Scene => {
                let mut scene = demo_scene().context("building demo scene")?;
                scene.camera.fov = self.args.fov.to_radians();
                render_stereo(&self.lantern, self.args.width, self.args.height, &mut scene, self.args.interocular)
                    .context("rendering demo scene")?
            }
        };

        frame
            .save(&self.args.output)
            .with_context(|| format!("writing {}", self.args.output.display()))?;
        info!("wrote {}", self.args.output.display());
        Ok(())
    }
}

/// Renders a side-by-side stereo pair, or a single view when `interocular` is zero.
///
/// The left eye gets `width / 2` columns and the right eye the rest. The camera is put back where it
/// started before returning, even if an eye fails to render.
pub fn render_stereo(
    lantern: &Lantern,
    width: usize,
    height: usize,
    scene: &mut Scene,
    interocular: f32,
) -> Result<Frame> {
    if interocular == 0.0 {
        return lantern.render(width, height, scene);
    }

    let left_width = width / 2;
    let right_width = width - left_width;
    if left_width < 2 || height < 2 {
        return Err(Error::InvalidDimensions { width, height });
    }

    let eye_offset = Vector3::new(interocular / 2.0, 0.0, 0.0);
    let original = scene.camera.position;
    debug!("stereo pair around {:?}, eye offset {:?}", original, eye_offset);

    scene.camera.position = original + eye_offset;
    let left = lantern.render(left_width, height, scene);

    scene.camera.position = original - eye_offset;
    let right = lantern.render(right_width, height, scene);

    scene.camera.position = original;

    Frame::stitch_side_by_side(&left?, &right?)
}
