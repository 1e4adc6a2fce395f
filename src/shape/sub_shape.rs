use crate::math::{Isometry, Real, Vector};
use parry3d::shape::SharedShape;

/// A sub-shape waiting to be attached to a compound, with its local centroid offset.
#[derive(Clone, Debug)]
pub struct SubShape {
    /// The collision shape.
    pub shape: SharedShape,
    /// The position of the shape's local origin relative to the origin of the compound,
    /// before the compound centroid is subtracted.
    pub offset: Vector<Real>,
}

impl SubShape {
    /// Creates a new sub-shape.
    pub fn new(shape: SharedShape, offset: Vector<Real>) -> Self {
        Self { shape, offset }
    }

    /// The local position of this sub-shape once the compound is centered on `centroid`.
    ///
    /// The rotation is always the identity.
    #[inline]
    pub fn local_position(&self, centroid: &Vector<Real>) -> Isometry<Real> {
        Isometry::new(self.offset - centroid, na::zero())
    }
}
