use crate::math::{Isometry, Point, Real, Vector};
use crate::mesh::{Mesh, MeshError};
use alloc::vec::Vec;
use parry3d::shape::SharedShape;
use parry3d::transformation::vhacd::{VHACDParameters, VHACD};
use parry3d::utils;

/// Errors that can occur during the convex decomposition of a mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum DecompositionError {
    /// The mesh cannot be read as a list of triangles.
    #[error("invalid mesh: {0}")]
    InvalidMesh(#[from] MeshError),
    /// The decomposition did not produce any valid convex piece.
    #[error("the decomposition did not produce any convex piece.")]
    NoConvexPiece,
}

/// Parameters of the approximate convex decomposition.
///
/// Only the most commonly tuned parameters of the VHACD algorithm are exposed; the others keep
/// their default values.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DecompositionConfig {
    /// Maximum number of voxels generated along the largest dimension of the mesh.
    pub resolution: u32,
    /// Maximum concavity allowed for each convex piece, relative to the mesh size.
    pub concavity: Real,
    /// Maximum number of convex pieces generated.
    pub max_convex_hulls: u32,
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        let params = VHACDParameters::default();
        Self {
            resolution: params.resolution,
            concavity: params.concavity,
            max_convex_hulls: params.max_convex_hulls,
        }
    }
}

impl DecompositionConfig {
    /// The VHACD parameters matching this configuration.
    pub fn to_vhacd_parameters(&self) -> VHACDParameters {
        VHACDParameters {
            resolution: self.resolution,
            concavity: self.concavity,
            max_convex_hulls: self.max_convex_hulls,
            ..VHACDParameters::default()
        }
    }
}

/// Splits a triangle mesh into convex pieces and assembles them into a compound shape.
pub trait ConvexDecomposer {
    /// Decomposes `mesh`, scaled component-wise by `scale`, into convex pieces.
    ///
    /// Each piece is expressed relative to its own centroid, returned alongside it.
    fn decompose(
        &self,
        mesh: &Mesh,
        scale: &Vector<Real>,
    ) -> Result<Vec<(Point<Real>, SharedShape)>, DecompositionError>;

    /// Builds a single compound shape out of the pieces returned by [`Self::decompose`].
    fn assemble_compound(
        &self,
        components: Vec<(Point<Real>, SharedShape)>,
    ) -> Result<SharedShape, DecompositionError>;
}

/// A [`ConvexDecomposer`] based on parry's implementation of VHACD.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct VhacdDecomposer {
    /// The decomposition parameters.
    pub config: DecompositionConfig,
}

impl VhacdDecomposer {
    /// Creates a decomposer with the given parameters.
    pub fn new(config: DecompositionConfig) -> Self {
        Self { config }
    }
}

impl ConvexDecomposer for VhacdDecomposer {
    fn decompose(
        &self,
        mesh: &Mesh,
        scale: &Vector<Real>,
    ) -> Result<Vec<(Point<Real>, SharedShape)>, DecompositionError> {
        let triangles = mesh.triangles()?;
        let points: Vec<Point<Real>> = mesh
            .vertices()
            .iter()
            .map(|pt| pt.coords.component_mul(scale).into())
            .collect();

        let params = self.config.to_vhacd_parameters();
        let decomp = VHACD::decompose(&params, &points, &triangles, true);
        let mut components = Vec::new();

        for (vertices, indices) in decomp.compute_exact_convex_hulls(&points, &triangles) {
            if vertices.is_empty() {
                continue;
            }

            let centroid = utils::center(&vertices);
            let centered = vertices.iter().map(|pt| *pt - centroid.coords).collect();

            match SharedShape::convex_mesh(centered, &indices) {
                Some(piece) => components.push((centroid, piece)),
                None => log::debug!(
                    "convex decomposition: skipping a degenerate piece with {} vertices",
                    vertices.len()
                ),
            }
        }

        if components.is_empty() {
            return Err(DecompositionError::NoConvexPiece);
        }

        Ok(components)
    }

    fn assemble_compound(
        &self,
        components: Vec<(Point<Real>, SharedShape)>,
    ) -> Result<SharedShape, DecompositionError> {
        if components.is_empty() {
            return Err(DecompositionError::NoConvexPiece);
        }

        let shapes = components
            .into_iter()
            .map(|(centroid, piece)| (Isometry::new(centroid.coords, na::zero()), piece))
            .collect();

        Ok(SharedShape::compound(shapes))
    }
}
