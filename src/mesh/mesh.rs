use crate::math::{Point, Real};
use alloc::vec::Vec;

/// The way the vertices of a [`Mesh`] are meant to be assembled into primitives.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveMode {
    /// Every three indices (or vertices, if no index is given) form a triangle.
    #[default]
    Triangles,
    /// Each new vertex forms a triangle with the two previous ones.
    TriangleStrip,
    /// Each new vertex forms a triangle with the first one and the previous one.
    TriangleFan,
    /// Every two indices form a segment.
    Lines,
    /// Each new vertex forms a segment with the previous one.
    LineStrip,
    /// Like [`PrimitiveMode::LineStrip`], with a last segment closing the loop.
    LineLoop,
    /// Isolated points.
    Points,
}

/// Indicates that a mesh cannot be interpreted as a list of triangles.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshError {
    /// The number of indices is not a multiple of three.
    #[error("the mesh has {0} indices, which is not a multiple of three.")]
    IndexCountNotMultipleOfThree(usize),
    /// The mesh has no index and its number of vertices is not a multiple of three.
    #[error("the mesh has no index and {0} vertices, which is not a multiple of three.")]
    VertexCountNotMultipleOfThree(usize),
    /// An index refers to a vertex that does not exist.
    #[error("the index {index} is out of bounds (the mesh has {num_vertices} vertices).")]
    IndexOutOfBounds {
        /// The faulty index.
        index: u32,
        /// The number of vertices of the mesh.
        num_vertices: usize,
    },
    /// The mesh does not contain any triangle.
    #[error("the mesh does not contain any triangle.")]
    NoTriangles,
}

/// An indexed mesh, as provided by the caller.
///
/// Only meshes in [`PrimitiveMode::Triangles`] mode can be turned into collision shapes. When
/// the index buffer is empty, consecutive vertex triples are read as triangles.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Mesh {
    mode: PrimitiveMode,
    vertices: Vec<Point<Real>>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Creates an empty mesh with the given primitive mode.
    pub fn new(mode: PrimitiveMode) -> Self {
        Self {
            mode,
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Creates a mesh from its vertex and index buffers.
    pub fn with_vertices_and_indices(
        mode: PrimitiveMode,
        vertices: Vec<Point<Real>>,
        indices: Vec<u32>,
    ) -> Self {
        Self {
            mode,
            vertices,
            indices,
        }
    }

    /// The primitive mode of this mesh.
    #[inline]
    pub fn mode(&self) -> PrimitiveMode {
        self.mode
    }

    /// Sets the primitive mode of this mesh.
    pub fn set_mode(&mut self, mode: PrimitiveMode) {
        self.mode = mode;
    }

    /// The vertex buffer.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, vertex: Point<Real>) -> u32 {
        self.vertices.push(vertex);
        self.vertices.len() as u32 - 1
    }

    /// Appends an index.
    pub fn add_index(&mut self, index: u32) {
        self.indices.push(index);
    }

    /// Appends the three indices of a triangle.
    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// The index triples of this mesh, after checking they are all valid.
    ///
    /// This ignores the primitive mode: the buffers are read as a triangle list.
    pub fn triangles(&self) -> Result<Vec<[u32; 3]>, MeshError> {
        let num_vertices = self.vertices.len();

        let triangles: Vec<[u32; 3]> = if self.indices.is_empty() {
            if num_vertices % 3 != 0 {
                return Err(MeshError::VertexCountNotMultipleOfThree(num_vertices));
            }

            (0..num_vertices as u32 / 3)
                .map(|i| [i * 3, i * 3 + 1, i * 3 + 2])
                .collect()
        } else {
            if self.indices.len() % 3 != 0 {
                return Err(MeshError::IndexCountNotMultipleOfThree(self.indices.len()));
            }

            if let Some(&index) = self
                .indices
                .iter()
                .find(|idx| **idx as usize >= num_vertices)
            {
                return Err(MeshError::IndexOutOfBounds {
                    index,
                    num_vertices,
                });
            }

            self.indices
                .chunks_exact(3)
                .map(|tri| [tri[0], tri[1], tri[2]])
                .collect()
        };

        if triangles.is_empty() {
            return Err(MeshError::NoTriangles);
        }

        Ok(triangles)
    }

    /// The number of triangles described by the buffers, assuming they are valid.
    pub fn num_triangles(&self) -> usize {
        if self.indices.is_empty() {
            self.vertices.len() / 3
        } else {
            self.indices.len() / 3
        }
    }
}
