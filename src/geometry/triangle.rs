use log::trace;

use crate::{geometry::Geometry, matrix::Matrix3x3, vec3::Vec3, Intersection, MaterialId, Ray};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    vertices: [Vec3<f64>; 3],

    ///
    /// Per-vertex normals for smooth shading. Either all three are present or none are.
    normals: Option<[Vec3<f64>; 3]>,

    /// Unit `(p2 - p0) x (p2 - p1)`; the operand order fixes which side faces out.
    face_normal: Vec3<f64>,

    material: MaterialId,
}

impl Triangle {
    /// Flat-shaded triangle.
    pub fn new(p0: Vec3<f64>, p1: Vec3<f64>, p2: Vec3<f64>, material: MaterialId) -> Self {
        Self {
            vertices: [p0, p1, p2],
            normals: None,
            face_normal: (p2 - p0).cross(&(p2 - p1)).unit(),
            material,
        }
    }

    /// Smooth-shaded triangle, interpolating `n0`, `n1`, `n2` across the face.
    pub fn with_normals(
        p0: Vec3<f64>,
        p1: Vec3<f64>,
        p2: Vec3<f64>,
        material: MaterialId,
        n0: Vec3<f64>,
        n1: Vec3<f64>,
        n2: Vec3<f64>,
    ) -> Self {
        Self {
            normals: Some([n0, n1, n2]),
            ..Triangle::new(p0, p1, p2, material)
        }
    }

    /// Keeps the vertex normals only if all three are given, otherwise the triangle is flat.
    pub fn from_optional_normals(
        p0: Vec3<f64>,
        p1: Vec3<f64>,
        p2: Vec3<f64>,
        material: MaterialId,
        n0: Option<Vec3<f64>>,
        n1: Option<Vec3<f64>>,
        n2: Option<Vec3<f64>>,
    ) -> Self {
        match (n0, n1, n2) {
            (Some(n0), Some(n1), Some(n2)) => Triangle::with_normals(p0, p1, p2, material, n0, n1, n2),
            (None, None, None) => Triangle::new(p0, p1, p2, material),
            _ => {
                trace!("partial vertex normals, falling back to the face normal");
                Triangle::new(p0, p1, p2, material)
            }
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3<f64>; 3] {
        &self.vertices
    }

    #[inline]
    pub fn normals(&self) -> Option<&[Vec3<f64>; 3]> {
        self.normals.as_ref()
    }

    #[inline]
    pub fn face_normal(&self) -> Vec3<f64> {
        self.face_normal
    }

    #[inline]
    pub fn material(&self) -> MaterialId {
        self.material
    }

    #[inline]
    pub fn is_smooth(&self) -> bool {
        self.normals.is_some()
    }

    /// Solves `t*d + alpha*(p2 - p0) + beta*(p2 - p1) = p2 - o` by Cramer's rule.
    ///
    /// Returns `(t, alpha, beta)`, where `alpha` and `beta` weigh `p0` and `p1`, or `None` when
    /// the system is singular.
    fn solve(&self, ray: &Ray<f64>) -> Option<(f64, f64, f64)> {
        let [p0, p1, p2] = self.vertices;

        let e0 = p2 - p0;
        let e1 = p2 - p1;
        let rhs = p2 - ray.origin();

        let m = Matrix3x3::from_columns(*ray.direction(), e0, e1);
        let determinant = m.determinant();

        // Ray parallel to the triangle's plane, or a degenerate triangle.
        if determinant == 0.0 {
            return None;
        }

        let t = m.with_column(0, rhs).determinant() / determinant;
        let alpha = m.with_column(1, rhs).determinant() / determinant;
        let beta = m.with_column(2, rhs).determinant() / determinant;

        Some((t, alpha, beta))
    }
}

impl Geometry for Triangle {
    fn intersect(&self, ray: &Ray<f64>, tmin: f64, tmax: f64) -> Option<Intersection> {
        let (t, alpha, beta) = self.solve(ray)?;

        if t < 0.0 || alpha < 0.0 || beta < 0.0 {
            return None;
        }
        if alpha + beta > 1.0 {
            return None;
        }
        if !super::in_range(t, tmin, tmax) {
            return None;
        }

        let normal = match self.normals {
            // Not re-normalized.
            Some([n0, n1, n2]) => n0.scale(alpha) + n1.scale(beta) + n2.scale(1.0 - alpha - beta),
            None => self.face_normal,
        };

        Some(Intersection::new(t, ray.point_at(t), normal, self.material))
    }
}
