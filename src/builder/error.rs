use crate::dynamics::BodyHandle;
use crate::mesh::{MeshError, PrimitiveMode};
use crate::transformation::{DecompositionError, HullError};

/// Errors returned by the operations of a [`CustomShape`](super::CustomShape).
///
/// None of these errors leaves the builder in a modified state, except
/// [`CustomShapeError::BodyNotFound`] raised while [`add`](super::CustomShape::add) applies the
/// default physical properties: the body is registered at that point.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CustomShapeError {
    /// The operation is not allowed once the shape has been added to a world.
    #[error("{operation}: can not call after calling add()")]
    AlreadyAdded {
        /// The rejected operation.
        operation: &'static str,
    },
    /// The operation requires the body of the shape to be part of a world.
    #[error("{operation}: the shape has no body in a world")]
    NotAdded {
        /// The rejected operation.
        operation: &'static str,
    },
    /// `add` was called before the body placement and mass were given by `create`.
    #[error("add: can not call before calling create()")]
    NotCreated,
    /// The mesh is not a triangle list.
    #[error("mesh must be set to triangles mode, found {0:?}")]
    TopologyMismatch(PrimitiveMode),
    /// The mesh cannot be read as a list of triangles.
    #[error("invalid mesh: {0}")]
    InvalidMesh(#[from] MeshError),
    /// The convex hull of the mesh could not be built.
    #[error("hull construction failed: {0}")]
    HullConstruction(#[from] HullError),
    /// The convex decomposition of the mesh failed.
    #[error("convex decomposition failed: {0}")]
    Decomposition(DecompositionError),
    /// The world no longer contains the body created by this shape.
    #[error("the body {0:?} is not part of the world")]
    BodyNotFound(BodyHandle),
}

impl From<DecompositionError> for CustomShapeError {
    fn from(err: DecompositionError) -> Self {
        match err {
            DecompositionError::InvalidMesh(err) => Self::InvalidMesh(err),
            err => Self::Decomposition(err),
        }
    }
}
