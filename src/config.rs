//! Plain-data scene descriptions.
//!
//! Deserialized by the caller from whatever format it reads (JSON in the tests). Shapes are
//! always built through their constructors so cached values are derived, never trusted.

use crate::geometry::{Plane, Shape, Sphere, Triangle};
use crate::vec3::Vec3;
use crate::MaterialId;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeConfig {
    Plane {
        point: Vec3<f64>,
        normal: Vec3<f64>,
        #[serde(default)]
        material: MaterialId,
    },
    Sphere {
        center: Vec3<f64>,
        radius: f64,
        #[serde(default)]
        material: MaterialId,
    },
    Triangle {
        vertices: [Vec3<f64>; 3],
        #[serde(default)]
        normals: Option<[Vec3<f64>; 3]>,
        #[serde(default)]
        material: MaterialId,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub shapes: Vec<ShapeConfig>,
}

impl From<ShapeConfig> for Shape {
    fn from(config: ShapeConfig) -> Self {
        match config {
            ShapeConfig::Plane { point, normal, material } => Plane::new(point, normal, material).into(),
            ShapeConfig::Sphere { center, radius, material } => Sphere::new(center, radius, material).into(),
            ShapeConfig::Triangle {
                vertices: [p0, p1, p2],
                normals,
                material,
            } => match normals {
                Some([n0, n1, n2]) => Triangle::with_normals(p0, p1, p2, material, n0, n1, n2).into(),
                None => Triangle::new(p0, p1, p2, material).into(),
            },
        }
    }
}
