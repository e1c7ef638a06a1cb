use clap::Parser;
use env_logger::Env;

use crate::app::{Application, Args};

pub mod app;
pub mod camera;
pub mod demo;
pub mod error;
pub mod lantern;
pub mod math;

pub use crate::camera::{Camera, Projection};
pub use crate::error::{Error, Result};
pub use crate::lantern::frame::Frame;
pub use crate::lantern::light::Light;
pub use crate::lantern::ray::Ray;
pub use crate::lantern::scene::{HitPayload, Scene};
pub use crate::lantern::sphere::{Hit, Material, Sphere};
pub use crate::lantern::{render, Lantern, Settings};
pub use crate::math::{Colour, Position3};

/// Command line entry point: parse arguments, set up logging, render, write the image
pub fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG still wins over --verbose
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    Application::new(args).run()
}
