use crate::{geometry::Geometry, vec3::Vec3, Intersection, MaterialId, Ray};

///
///
/// A plane can be defined as a point representing how far the plane is from the
/// world origin and a normal (defining the orientation of the plane).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    point: Vec3<f64>,
    normal: Vec3<f64>,
    material: MaterialId,
}

impl Plane {
    /// The normal is normalized here; its orientation is what every hit reports.
    pub fn new(point: Vec3<f64>, normal: Vec3<f64>, material: MaterialId) -> Self {
        Self {
            point,
            normal: normal.unit(),
            material,
        }
    }

    #[inline]
    pub fn point(&self) -> Vec3<f64> {
        self.point
    }

    #[inline]
    pub fn normal(&self) -> Vec3<f64> {
        self.normal
    }

    #[inline]
    pub fn material(&self) -> MaterialId {
        self.material
    }
}

impl Geometry for Plane {
    fn intersect(&self, ray: &Ray<f64>, tmin: f64, tmax: f64) -> Option<Intersection> {
        let denominator = ray.direction().dot(&self.normal);

        // Parallel, including rays lying in the plane.
        if denominator == 0.0 {
            return None;
        }

        let p0r0 = self.point - ray.origin();
        let t = p0r0.dot(&self.normal) / denominator;

        if !super::in_range(t, tmin, tmax) {
            return None;
        }

        Some(Intersection::new(t, ray.point_at(t), self.normal, self.material))
    }
}
