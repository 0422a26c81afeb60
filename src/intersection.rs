use crate::vec3::Vec3;

/// Opaque material handle carried through to the hit record.
///
/// Only ever compared by identity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct MaterialId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    /// Ray parameter of the hit, in units of the ray direction's length.
    pub t: f64,
    pub position: Vec3<f64>,
    /// Not guaranteed to be unit length for interpolated triangle normals.
    pub normal: Vec3<f64>,
    pub material: MaterialId,
}

impl Intersection {
    pub fn new(t: f64, position: Vec3<f64>, normal: Vec3<f64>, material: MaterialId) -> Self {
        Self {
            t,
            position,
            normal,
            material,
        }
    }
}
