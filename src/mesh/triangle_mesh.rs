use crate::math::{Point, Real, Vector};
use crate::mesh::{Mesh, MeshError};
use alloc::vec::Vec;

/// A triangle soup used as the convex source of hull generation.
///
/// Vertices are not shared between triangles: each triangle owns three consecutive entries of
/// [`TriangleMesh::vertices`].
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TriangleMesh {
    vertices: Vec<Point<Real>>,
}

impl TriangleMesh {
    /// Creates an empty triangle mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the triangle soup of `mesh`, scaled component-wise by `scaling`.
    ///
    /// The winding of every triangle is flipped: the input triangle `(v0, v1, v2)` is inserted
    /// as `(v2, v1, v0)`. Hull generation relies on this orientation for its outward normals.
    pub fn from_mesh(mesh: &Mesh, scaling: &Vector<Real>) -> Result<Self, MeshError> {
        let triangles = mesh.triangles()?;
        let vertices = mesh.vertices();
        let mut result = Self {
            vertices: Vec::with_capacity(triangles.len() * 3),
        };

        for tri in &triangles {
            let scaled = |i: u32| -> Point<Real> {
                vertices[i as usize]
                    .coords
                    .component_mul(scaling)
                    .into()
            };

            result.add_triangle(scaled(tri[2]), scaled(tri[1]), scaled(tri[0]));
        }

        Ok(result)
    }

    /// Appends a triangle.
    pub fn add_triangle(&mut self, a: Point<Real>, b: Point<Real>, c: Point<Real>) {
        self.vertices.extend_from_slice(&[a, b, c]);
    }

    /// The number of triangles.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.vertices.len() / 3
    }

    /// The `i`-th triangle, if it exists.
    pub fn triangle(&self, i: usize) -> Option<[Point<Real>; 3]> {
        let start = i.checked_mul(3)?;
        let tri = self.vertices.get(start..start.checked_add(3)?)?;
        Some([tri[0], tri[1], tri[2]])
    }

    /// All the vertices, three per triangle.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// Returns `true` if this mesh has no triangle.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
