use crate::vec3::Vec3;

/// Half-line `origin + t * direction`.
///
/// The direction is kept as given. Hit parameters are measured in multiples of its length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray<T> {
    origin: Vec3<T>,
    direction: Vec3<T>,
}

impl Ray<f64> {
    /// A zero `direction` is accepted and simply never hits anything.
    pub fn new(origin: Vec3<f64>, direction: Vec3<f64>) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn origin(&self) -> Vec3<f64> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> &Vec3<f64> {
        &self.direction
    }

    #[inline]
    pub fn point_at(&self, t: f64) -> Vec3<f64> {
        self.origin + self.direction.scale(t)
    }
}
