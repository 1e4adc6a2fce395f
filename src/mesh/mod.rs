//! Mesh inputs accepted by the compound builder.

pub use self::mesh::{Mesh, MeshError, PrimitiveMode};
pub use self::triangle_mesh::TriangleMesh;

mod mesh;
mod triangle_mesh;
