use std::f32::consts::PI;

use crate::camera::Camera;
use crate::error::Result;
use crate::lantern::frame::Frame;
use crate::lantern::light::Light;
use crate::lantern::scene::Scene;
use crate::lantern::sphere::{Material, Sphere};
use crate::math::{Colour, Position3};

/// Coloured spheres around a 3x3 grid of small white ones, lit by four coloured lights
pub fn demo_scene() -> Result<Scene> {
    let camera = Camera::new(Position3::origin()).with_fov(PI / 2.0);
    let dusk = Colour::new(0.05, 0.03, 0.04);
    let mut scene = Scene::new(camera, dusk, dusk);

    let white = Colour::repeat(1.0);
    let red = Colour::x();
    let green = Colour::y();
    let blue = Colour::z();
    let shininess = 10.0;

    let diffuse_white = Material::new(white, white * 0.0, shininess);
    let specular_white = Material::new(white, white, shininess);

    let spheres = [
        (Position3::new(-5.0, 5.0, 15.0), 3.0, Material::new(Colour::new(0.8, 0.4, 0.8), white * 0.1, shininess)),
        (Position3::new(-2.0, 3.0, 20.0), 4.0, Material::new(Colour::new(0.2, 0.6, 0.3), white * 0.8, shininess)),
        (Position3::new(10.0, -5.0, 16.0), 3.0, Material::new(Colour::new(0.4, 0.4, 0.3), white * 0.6, shininess)),
        (Position3::new(10.0, 5.0, 30.0), 3.0, specular_white),
        (Position3::new(12.0, 10.0, 30.0), 3.0, diffuse_white),
    ];
    for (centre, radius, material) in spheres {
        scene.add_sphere(Sphere::new(centre, radius, material)?);
    }

    for j in 0..3 {
        for i in 0..3 {
            let centre = Position3::new((i - 1) as f32 * 5.0, (j - 1) as f32 * 5.0, 10.0);
            scene.add_sphere(Sphere::new(centre, 1.0, diffuse_white)?);
        }
    }

    scene.add_light(Light::new(Position3::new(2.5, 0.0, 10.0), red + blue + green / 4.0, 2.0)?);
    scene.add_light(Light::new(Position3::new(0.0, 50.0, 15.0), red, 1500.0)?);
    scene.add_light(Light::new(Position3::new(0.0, -50.0, 5.0), green, 1500.0)?);
    scene.add_light(Light::new(Position3::new(50.0, 0.0, 15.0), blue, 1500.0)?);

    Ok(scene)
}

/// Sine at pixel `(x, y)` of a wave travelling at `angle` radians. `frequency` is in radians per pixel.
fn rotated_sine(x: usize, y: usize, angle: f32, frequency: f32, offset: f32) -> f32 {
    ((angle.cos() * x as f32 + angle.sin() * y as f32) * frequency + offset).sin()
}

/// Interference of two sine waves, for checking the output path without tracing anything
pub fn sine_pattern(width: usize, height: usize) -> Frame {
    let frequency = 1.0 / 30.0;
    let mut frame = Frame::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let diagonal = rotated_sine(x, y, PI / 4.0, frequency / 2.0, 0.0);
            let horizontal = rotated_sine(x, y, PI, frequency, 0.0);

            let warm = horizontal - diagonal / 2.0;
            frame.set(x, y, Colour::new(warm, warm, diagonal + horizontal));
        }
    }
    frame
}
