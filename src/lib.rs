//! Ray-primitive intersection for a small ray tracer.
//!
//! Planes, spheres and triangles share one capability, [`Geometry::intersect`]: given a ray and
//! an inclusive window `[tmin, tmax]` on its parameter, return the hit (parameter, position,
//! normal, material) or nothing. Queries are pure and shapes are immutable once built, so any
//! number of threads may query the same [`Scene`].

#[macro_use]
extern crate serde_derive;

pub use crate::error::{MeshError, Result};
pub use crate::geometry::{Face, Geometry, Mesh, Plane, Shape, Sphere, Triangle};
pub use crate::intersection::{Intersection, MaterialId};
pub use crate::matrix::{determinant3x3, Matrix3x3};
pub use crate::ray::Ray;
pub use crate::scene::Scene;
pub use crate::vec3::Vec3;

pub mod config;
pub mod error;
pub mod geometry;
mod intersection;
mod matrix;
mod ray;
pub mod scene;
mod vec3;
