//! Model that contains one or more triangles.

use crate::error::{MeshError, Result};
use crate::geometry::Triangle;
use crate::vec3::Vec3;
use crate::MaterialId;

/// One triangular face, indexing into [`Mesh::vertices`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Face {
    pub a: usize,
    pub b: usize,
    pub c: usize,

    ///
    /// Normals at `a`, `b` and `c`. Filled in by [`Mesh::compute_vertex_normals`] when the loader
    /// didn't provide them.
    pub vertex_normals: Option<[Vec3<f64>; 3]>,
}

impl Face {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self {
            a,
            b,
            c,
            vertex_normals: None,
        }
    }

    #[inline]
    fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }
}

/// Indexed triangle mesh as handed over by a loader.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec3<f64>>,
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vec3<f64>>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    /// Checks that every face indexes an existing vertex.
    pub fn validate(&self) -> Result<()> {
        let len = self.vertices.len();

        for (face, f) in self.faces.iter().enumerate() {
            if let Some(&index) = f.indices().iter().find(|&&index| index >= len) {
                return Err(MeshError::VertexIndexOutOfRange { face, index, len });
            }
        }

        Ok(())
    }

    /// Area-weighted smooth normals.
    ///
    /// Each face adds `(c - b) x (a - b)` to its three vertices, so larger faces pull harder.
    /// The sums are normalized (a zero sum stays zero) and written into every face, replacing
    /// whatever normals the face carried.
    pub fn compute_vertex_normals(&mut self) -> Result<()> {
        self.validate()?;

        let mut normals = vec![Vec3::ZERO; self.vertices.len()];

        for face in &self.faces {
            let (va, vb, vc) = (self.vertices[face.a], self.vertices[face.b], self.vertices[face.c]);
            let weighted = (vc - vb).cross(&(va - vb));

            normals[face.a] += weighted;
            normals[face.b] += weighted;
            normals[face.c] += weighted;
        }

        for normal in &mut normals {
            let len = normal.len();
            if len > 0.0 {
                *normal = normal.scale(1.0 / len);
            }
        }

        for face in &mut self.faces {
            face.vertex_normals = Some([normals[face.a], normals[face.b], normals[face.c]]);
        }

        Ok(())
    }

    /// One triangle per face, in face order.
    ///
    /// With `smooth` set, faces carrying vertex normals become smooth triangles; everything else
    /// is flat.
    pub fn triangles(&self, material: MaterialId, smooth: bool) -> Result<Vec<Triangle>> {
        self.validate()?;

        let triangles = self
            .faces
            .iter()
            .map(|face| {
                let (p0, p1, p2) = (self.vertices[face.a], self.vertices[face.b], self.vertices[face.c]);

                match face.vertex_normals {
                    Some([n0, n1, n2]) if smooth => Triangle::with_normals(p0, p1, p2, material, n0, n1, n2),
                    _ => Triangle::new(p0, p1, p2, material),
                }
            })
            .collect();

        Ok(triangles)
    }
}
