use crate::{geometry::Geometry, vec3::Vec3, Intersection, MaterialId, Ray};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Vec3<f64>,
    radius: f64,
    radius_squared: f64,
    material: MaterialId,
}

impl Sphere {
    pub fn new(center: Vec3<f64>, radius: f64, material: MaterialId) -> Self {
        Self {
            center,
            radius,
            radius_squared: radius * radius,
            material,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3<f64> {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn material(&self) -> MaterialId {
        self.material
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
        self.radius_squared = radius * radius;
    }
}

impl Geometry for Sphere {
    /// Nearest non-negative root of `|o + t*d - c|^2 = r^2`.
    ///
    /// From inside the sphere this is the exit point. Roots behind the origin are rejected even
    /// when `tmin` is negative.
    fn intersect(&self, ray: &Ray<f64>, tmin: f64, tmax: f64) -> Option<Intersection> {
        let oc = ray.origin() - self.center;

        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(&oc) - self.radius_squared;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt = discriminant.sqrt();
        let denominator = 2.0 * a;

        let t1 = (-b - sqrt) / denominator;
        let t2 = (-b + sqrt) / denominator;

        let t = if t1 >= 0.0 { t1 } else { t2 };

        if t < 0.0 || !super::in_range(t, tmin, tmax) {
            return None;
        }

        let position = ray.point_at(t);
        let normal = (position - self.center).unit();

        Some(Intersection::new(t, position, normal, self.material))
    }
}
