//! Ray-primitive intersection.
//!
//! Every primitive answers the same question: the hit of a ray within an inclusive parametric
//! window `[tmin, tmax]`, or nothing. Misses are never errors, including those caused by
//! degenerate input (zero-length normals, collinear vertices, zero directions).

use crate::{Intersection, Ray};

mod mesh;
mod plane;
mod sphere;
mod triangle;

pub use self::mesh::{Face, Mesh};
pub use self::plane::Plane;
pub use self::sphere::Sphere;
pub use self::triangle::Triangle;

pub trait Geometry {
    fn intersect(&self, ray: &Ray<f64>, tmin: f64, tmax: f64) -> Option<Intersection>;
}

/// The closed set of primitives a scene is made of.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Plane(Plane),
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Geometry for Shape {
    #[inline]
    fn intersect(&self, ray: &Ray<f64>, tmin: f64, tmax: f64) -> Option<Intersection> {
        match self {
            Shape::Plane(plane) => plane.intersect(ray, tmin, tmax),
            Shape::Sphere(sphere) => sphere.intersect(ray, tmin, tmax),
            Shape::Triangle(triangle) => triangle.intersect(ray, tmin, tmax),
        }
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}

/// Inclusive on both ends; NaN is never in range.
#[inline]
fn in_range(t: f64, tmin: f64, tmax: f64) -> bool {
    (tmin..=tmax).contains(&t)
}
