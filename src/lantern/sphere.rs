use nalgebra::Vector3;

use crate::error::{Error, Result};
use crate::lantern::ray::Ray;
use crate::math::{projection, unit, Colour, Position3, MERGE_EPSILON};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub diffuse_colour: Colour,
    pub specular_colour: Colour,
    /// Phong exponent
    pub shininess: f32,
}

impl Material {
    pub fn new(diffuse_colour: Colour, specular_colour: Colour, shininess: f32) -> Self {
        Self {
            diffuse_colour,
            specular_colour,
            shininess: shininess.max(0.0),
        }
    }

    /// No highlight, only the diffuse colour
    pub fn matte(diffuse_colour: Colour) -> Self {
        Self::new(diffuse_colour, Colour::zeros(), 0.0)
    }
}

impl Default for Material {
    fn default() -> Self {
        // Magenta so a forgotten material stands out
        Self::matte(Colour::new(1.0, 0.0, 1.0))
    }
}

/// Where a ray meets a sphere's surface
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    /// Distance from the ray origin, always > 0
    pub distance: f32,
    pub position: Position3,
    /// Unit length, pointing away from the centre
    pub normal: Vector3<f32>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    centre: Position3,
    radius: f32,
    pub material: Material,
}

impl Sphere {
    pub fn new(centre: Position3, radius: f32, material: Material) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidRadius(radius));
        }

        Ok(Self {
            centre,
            radius,
            material,
        })
    }

    pub fn centre(&self) -> Position3 {
        self.centre
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn contains(&self, point: &Position3) -> bool {
        (self.centre - point).norm() < self.radius
    }

    /// Distance from `point` to the nearest point on the surface, from either side
    pub fn nearest_distance(&self, point: &Position3) -> f32 {
        ((self.centre - point).norm() - self.radius).abs()
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let to_sphere = self.centre - ray.origin;
        let direction = ray.unit_direction();
        let inside = self.contains(&ray.origin);

        // Entirely behind an outside origin. An inside origin still has an exit point ahead.
        let along = to_sphere.dot(&direction);
        if along < 0.0 && to_sphere.norm() > self.radius {
            return None;
        }

        // Foot of the perpendicular from the centre onto the ray line
        let foot = projection(&to_sphere, &direction);
        let perpendicular = (foot - to_sphere).norm();
        if perpendicular > self.radius {
            return None;
        }

        // `along` is the signed length of `foot`, so the roots are measured from the origin
        let semi_chord = (self.radius * self.radius - perpendicular * perpendicular).sqrt();
        let distance = if semi_chord < MERGE_EPSILON || inside {
            along + semi_chord
        } else {
            along - semi_chord
        };
        if distance <= 0.0 {
            return None;
        }

        let position = ray.origin + direction * distance;
        let normal = unit(&(position - self.centre), 1.0);

        Some(Hit {
            distance,
            position,
            normal,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::{thread_rng, Rng};

    use super::*;

    fn unit_sphere_at(z: f32) -> Sphere {
        Sphere::new(Position3::new(0.0, 0.0, z), 1.0, Material::default()).unwrap()
    }

    fn random_direction(rng: &mut impl Rng) -> Vector3<f32> {
        loop {
            let v = Vector3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            if v.norm() > 0.1 {
                return v;
            }
        }
    }

    #[test]
    fn rejects_bad_radius() {
        let centre = Position3::origin();

        assert!(matches!(
            Sphere::new(centre, 0.0, Material::default()),
            Err(Error::InvalidRadius(_))
        ));
        assert!(Sphere::new(centre, -2.0, Material::default()).is_err());
        assert!(Sphere::new(centre, f32::NAN, Material::default()).is_err());
    }

    #[test]
    fn ray_through_centre_hits_near_side() {
        let sphere = unit_sphere_at(10.0);
        let ray = Ray::new(Position3::origin(), Vector3::new(0.0, 0.0, 3.0));

        let hit = sphere.intersect(&ray).unwrap();

        assert_relative_eq!(hit.distance, 9.0, epsilon = 1e-5);
        assert_relative_eq!(hit.position, Position3::new(0.0, 0.0, 9.0), epsilon = 1e-5);
        assert_relative_eq!(hit.normal, Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-5);
    }

    #[test]
    fn roots_are_symmetric_about_centre() {
        let sphere = Sphere::new(Position3::new(1.0, 2.0, 8.0), 2.0, Material::default()).unwrap();
        let origin = Position3::new(1.0, 2.0, -4.0);
        let ray = Ray::new(origin, Vector3::z());

        let near = sphere.intersect(&ray).unwrap();
        // Re-cast from just inside the near surface to get the exit point
        let exit = sphere.intersect(&Ray::new(ray.at(near.distance + 1e-3), Vector3::z())).unwrap();
        let far = near.distance + 1e-3 + exit.distance;

        let centre_distance = (sphere.centre() - origin).norm();
        assert_relative_eq!(near.distance, centre_distance - sphere.radius(), epsilon = 1e-4);
        assert_relative_eq!(centre_distance - near.distance, far - centre_distance, epsilon = 1e-3);
    }

    #[test]
    fn misses_when_offset_beyond_radius() {
        let sphere = unit_sphere_at(10.0);
        let ray = Ray::new(Position3::new(1.5, 0.0, 0.0), Vector3::z());

        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn tangent_ray_reports_single_point() {
        let sphere = unit_sphere_at(10.0);
        let ray = Ray::new(Position3::new(1.0, 0.0, 0.0), Vector3::z());

        let hit = sphere.intersect(&ray).unwrap();

        assert_relative_eq!(hit.position, Position3::new(1.0, 0.0, 10.0), epsilon = 1e-3);
        assert_relative_eq!(hit.normal, Vector3::x(), epsilon = 1e-2);
    }

    #[test]
    fn inside_origin_hits_exit_point() {
        let sphere = unit_sphere_at(10.0);
        let ray = Ray::new(Position3::new(0.0, 0.0, 10.5), Vector3::z());

        let hit = sphere.intersect(&ray).unwrap();

        assert_relative_eq!(hit.distance, 0.5, epsilon = 1e-5);
        assert_relative_eq!(hit.position, Position3::new(0.0, 0.0, 11.0), epsilon = 1e-5);
        // Still outward facing, even when leaving the sphere
        assert_relative_eq!(hit.normal, Vector3::z(), epsilon = 1e-5);
    }

    #[test]
    fn inside_origin_facing_away_from_centre_still_exits_forward() {
        let sphere = unit_sphere_at(10.0);
        let ray = Ray::new(Position3::new(0.0, 0.0, 9.5), Vector3::new(0.0, 0.0, -1.0));

        let hit = sphere.intersect(&ray).unwrap();

        assert_relative_eq!(hit.distance, 0.5, epsilon = 1e-5);
        assert_relative_eq!(hit.position, Position3::new(0.0, 0.0, 9.0), epsilon = 1e-5);
    }

    #[test]
    fn random_inside_rays_always_exit_ahead() {
        let mut rng = thread_rng();
        let sphere = Sphere::new(Position3::new(-3.0, 1.0, 4.0), 2.0, Material::default()).unwrap();

        for _ in 0..1000 {
            let origin = sphere.centre() + random_direction(&mut rng).normalize() * rng.gen_range(0.0..1.9);
            let ray = Ray::new(origin, random_direction(&mut rng));

            let hit = sphere.intersect(&ray).expect("inside rays always hit");

            assert!(hit.distance > 0.0);
            assert_relative_eq!((hit.position - sphere.centre()).norm(), 2.0, epsilon = 1e-3);
            assert!((hit.position - origin).dot(&ray.direction) > 0.0);
        }
    }

    #[test]
    fn random_rays_pointing_away_never_hit() {
        let mut rng = thread_rng();
        let sphere = Sphere::new(Position3::new(2.0, -1.0, 5.0), 1.5, Material::default()).unwrap();

        for _ in 0..1000 {
            let outward = random_direction(&mut rng).normalize();
            let origin = sphere.centre() + outward * rng.gen_range(1.6..20.0);
            let mut direction = random_direction(&mut rng);
            let to_centre = sphere.centre() - origin;
            if direction.dot(&to_centre) >= 0.0 {
                direction = -direction;
            }

            assert_eq!(sphere.intersect(&Ray::new(origin, direction)), None);
        }
    }

    #[test]
    fn nearest_distance_from_either_side() {
        let sphere = unit_sphere_at(0.0);

        assert_relative_eq!(sphere.nearest_distance(&Position3::new(0.0, 3.0, 0.0)), 2.0);
        assert_relative_eq!(sphere.nearest_distance(&Position3::new(0.0, 0.25, 0.0)), 0.75);
    }
}
