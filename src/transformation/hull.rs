use crate::math::{Point, Real};
use crate::mesh::TriangleMesh;
use alloc::vec::Vec;
use parry3d::transformation::{try_convex_hull, ConvexHullError};
use std::collections::HashSet;

/// Errors that can occur while building the convex hull of a mesh.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum HullError {
    /// The convex source does not have any vertex.
    #[error("the convex source does not contain any vertex.")]
    EmptySource,
    /// The hull builder did not return any vertex.
    #[error("the hull does not contain any vertex.")]
    EmptyHull,
    /// The hull vertices do not enclose any volume.
    #[error("the {0} hull vertices do not form a valid convex polyhedron.")]
    DegenerateHull(usize),
    /// The hull computation itself failed.
    #[error("convex hull computation failed: {0}")]
    ConvexHull(#[from] ConvexHullError),
}

/// Computes the vertices of a convex approximation of a triangle mesh.
pub trait HullBuilder {
    /// Returns the vertices of the hull of `source`.
    ///
    /// `margin` is the collision margin of the convex source. Implementations that do not
    /// round their hulls may ignore it: the builder applies it to the final shape.
    fn build_hull(
        &self,
        source: &TriangleMesh,
        margin: Real,
    ) -> Result<Vec<Point<Real>>, HullError>;
}

/// A [`HullBuilder`] returning the vertices of the exact convex hull of the source.
///
/// Triangles of a [`TriangleMesh`] do not share vertices, so identical points are welded
/// before the hull computation.
#[derive(Copy, Clone, Debug, Default)]
pub struct ConvexHullBuilder;

impl HullBuilder for ConvexHullBuilder {
    fn build_hull(
        &self,
        source: &TriangleMesh,
        _margin: Real,
    ) -> Result<Vec<Point<Real>>, HullError> {
        if source.is_empty() {
            return Err(HullError::EmptySource);
        }

        let points = weld_identical_points(source.vertices());
        let (vertices, indices) = try_convex_hull(&points)?;

        log::trace!(
            "convex hull: {} input vertices, {} welded, {} hull vertices, {} hull triangles",
            source.vertices().len(),
            points.len(),
            vertices.len(),
            indices.len()
        );

        Ok(vertices)
    }
}

fn weld_identical_points(points: &[Point<Real>]) -> Vec<Point<Real>> {
    let mut seen = HashSet::with_capacity(points.len());
    points
        .iter()
        .filter(|pt| seen.insert([weld_key(pt.x), weld_key(pt.y), weld_key(pt.z)]))
        .copied()
        .collect()
}

// `-0.0` and `0.0` must weld together.
fn weld_key(x: Real) -> u32 {
    if x == 0.0 {
        0
    } else {
        x.to_bits()
    }
}
