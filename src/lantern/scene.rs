use log::debug;
use nalgebra::Vector3;

use crate::camera::Camera;
use crate::error::Result;
use crate::lantern::light::Light;
use crate::lantern::ray::Ray;
use crate::lantern::sphere::{Hit, Sphere};
use crate::lantern::Settings;
use crate::math::{hadamard, reflect, Colour, Position3};

pub struct Scene {
    pub camera: Camera,
    pub background_colour: Colour,
    pub ambient_colour: Colour,
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
}

/// Nearest hit of a ray along with the sphere it landed on
#[derive(Copy, Clone, Debug)]
pub struct HitPayload<'a> {
    pub hit: Hit,
    pub sphere: &'a Sphere,
}

impl Scene {
    pub fn new(camera: Camera, background_colour: Colour, ambient_colour: Colour) -> Self {
        Self {
            camera,
            background_colour,
            ambient_colour,
            spheres: vec![],
            lights: vec![],
        }
    }

    pub fn add_sphere(&mut self, sphere: Sphere) -> usize {
        self.spheres.push(sphere);
        self.spheres.len() - 1
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Later spheres shift down by one
    pub fn remove_sphere(&mut self, index: usize) -> Option<Sphere> {
        (index < self.spheres.len()).then(|| self.spheres.remove(index))
    }

    pub fn clear(&mut self) {
        debug!("clearing {} spheres and {} lights", self.spheres.len(), self.lights.len());
        self.spheres.clear();
        self.lights.clear();
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn validate(&self) -> Result<()> {
        self.camera.validate()
    }

    /// Linear scan over every sphere, keeping the hit closest to the ray origin
    pub fn find_nearest_hit(&self, ray: &Ray) -> Option<HitPayload<'_>> {
        let mut closest: Option<HitPayload<'_>> = None;
        for sphere in &self.spheres {
            let Some(hit) = sphere.intersect(ray) else {
                continue;
            };

            match closest {
                Some(previous) if previous.hit.distance <= hit.distance => {}
                _ => closest = Some(HitPayload { hit, sphere }),
            }
        }
        closest
    }

    /// Colour seen along `ray` with the default [`Settings`]
    pub fn shade(&self, ray: &Ray) -> Colour {
        self.shade_with(ray, &Settings::default())
    }

    /// Ambient, diffuse and specular lighting at the nearest hit, or the background if nothing is hit
    pub fn shade_with(&self, ray: &Ray, settings: &Settings) -> Colour {
        let Some(HitPayload { hit, sphere }) = self.find_nearest_hit(ray) else {
            return self.background_colour;
        };
        let material = &sphere.material;

        // Lift off the surface so shadow rays don't hit it at distance ~0
        let point = hit.position + hit.normal * settings.normal_displacement;
        let view = ray.unit_direction();

        let mut diffuse = self.ambient_colour;
        let mut specular = Colour::zeros();

        for light in &self.lights {
            let Some(shadow) = self.shadow_ray(&point, light) else {
                continue;
            };
            let illumination = light.illumination(&point);

            let cos_theta = settings.weight(shadow.direction.dot(&hit.normal));
            diffuse += illumination * cos_theta;

            let reflection = reflect(&shadow.direction, &hit.normal);
            let alignment = settings.weight(reflection.dot(&view));
            specular += illumination * highlight(alignment, material.shininess);
        }

        hadamard(&diffuse, &material.diffuse_colour) + hadamard(&specular, &material.specular_colour)
    }

    /// Unit ray from `point` towards `light`, or `None` if a sphere sits between them
    fn shadow_ray(&self, point: &Position3, light: &Light) -> Option<Ray> {
        let to_light: Vector3<f32> = light.position - point;
        let light_distance = to_light.norm();
        let shadow = Ray::new(*point, to_light / light_distance);

        match self.find_nearest_hit(&shadow) {
            Some(blocker) if blocker.hit.distance < light_distance => None,
            _ => Some(shadow),
        }
    }
}

/// Phong highlight, keeping the sign of a negative (unclamped) alignment
fn highlight(alignment: f32, shininess: f32) -> f32 {
    alignment.signum() * alignment.abs().powf(shininess)
}
