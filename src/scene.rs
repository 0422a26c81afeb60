//! Ordered shape collection and nearest-hit queries over it.

use std::sync::mpsc::Receiver;

use log::{debug, warn};
use rayon::prelude::*;

use crate::config::SceneConfig;
use crate::error::{MeshError, Result};
use crate::geometry::{Geometry, Mesh, Shape};
use crate::{Intersection, MaterialId, Ray};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    pub fn from_config(config: SceneConfig) -> Self {
        let shapes: Vec<Shape> = config.shapes.into_iter().map(Shape::from).collect();
        debug!("built scene with {} shapes from config", shapes.len());

        Self { shapes }
    }

    pub fn push<S: Into<Shape>>(&mut self, shape: S) {
        self.shapes.push(shape.into());
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Appends one triangle per mesh face and returns how many were added.
    ///
    /// With `smooth`, vertex normals are recomputed from the mesh first. Nothing is appended if
    /// the mesh is malformed.
    pub fn add_mesh(&mut self, mut mesh: Mesh, material: MaterialId, smooth: bool) -> Result<usize> {
        if smooth {
            mesh.compute_vertex_normals()?;
        }

        let triangles = mesh.triangles(material, smooth)?;
        let count = triangles.len();
        self.shapes.extend(triangles.into_iter().map(Shape::from));

        debug!(
            "appended {} {} triangles from a mesh with {} vertices",
            count,
            if smooth { "smooth" } else { "flat" },
            mesh.vertices.len()
        );

        Ok(count)
    }

    /// Waits for a loader to deliver one mesh, then adds it like [`Scene::add_mesh`].
    ///
    /// Loader failures leave the scene as it was.
    pub fn receive_mesh(
        &mut self,
        rx: &Receiver<Result<Mesh>>,
        material: MaterialId,
        smooth: bool,
    ) -> Result<usize> {
        let mesh = match rx.recv() {
            Ok(Ok(mesh)) => mesh,
            Ok(Err(err)) => {
                warn!("mesh loader failed: {}", err);
                return Err(err);
            }
            Err(_) => {
                warn!("mesh loader hung up without a mesh");
                return Err(MeshError::Disconnected);
            }
        };

        self.add_mesh(mesh, material, smooth)
    }

    /// Nearest hit over all shapes within `[tmin, tmax]`.
    ///
    /// On equal `t` the shape added first wins.
    pub fn closest_intersection(&self, ray: &Ray<f64>, tmin: f64, tmax: f64) -> Option<Intersection> {
        let mut t = f64::INFINITY;
        let mut closest = None;

        for shape in &self.shapes {
            if let Some(intersection) = shape.intersect(ray, tmin, tmax) {
                if closest.is_none() || intersection.t < t {
                    t = intersection.t;
                    closest = Some(intersection);
                }
            }
        }

        closest
    }

    /// [`Scene::closest_intersection`] for many rays at once, evaluated in parallel.
    ///
    /// Results line up with `rays`.
    pub fn closest_intersections(&self, rays: &[Ray<f64>], tmin: f64, tmax: f64) -> Vec<Option<Intersection>> {
        rays.par_iter()
            .map(|ray| self.closest_intersection(ray, tmin, tmax))
            .collect()
    }
}
