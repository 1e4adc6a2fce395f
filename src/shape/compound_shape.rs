//!
//! Compound shape owned by the builder.
//!

use crate::math::{Isometry, Real};
use crate::num::Zero;
use alloc::vec::Vec;
use parry3d::mass_properties::MassProperties;
use parry3d::shape::SharedShape;

/// A compound shape that may contain other compound shapes.
///
/// Decomposed meshes are attached as a single child which is itself a compound, so the child
/// count reflects the number of sub-shapes given by the user rather than the number of convex
/// pieces. Since parry does not accept nested composite shapes, the collider used for collision
/// detection is obtained by flattening the hierarchy with [`CompoundShape::to_collider`].
#[derive(Clone, Debug, Default)]
pub struct CompoundShape {
    children: Vec<(Isometry<Real>, SharedShape)>,
}

impl CompoundShape {
    /// Creates a compound shape without any child.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a compound shape from a set of positioned children.
    pub fn from_children(children: Vec<(Isometry<Real>, SharedShape)>) -> Self {
        Self { children }
    }

    /// Attaches `shape` at the local position `pos`.
    pub fn add_child_shape(&mut self, pos: Isometry<Real>, shape: SharedShape) {
        self.children.push((pos, shape));
    }

    /// The number of children directly attached to this compound.
    #[inline]
    pub fn num_child_shapes(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if no child is attached.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The children directly attached to this compound, with their local positions.
    #[inline]
    pub fn children(&self) -> &[(Isometry<Real>, SharedShape)] {
        &self.children
    }

    /// The leaf shapes of this compound, with their positions relative to this compound.
    ///
    /// Children that are compound shapes are replaced by their own children.
    pub fn flattened_children(&self) -> Vec<(Isometry<Real>, SharedShape)> {
        let mut result = Vec::with_capacity(self.children.len());

        for (pos, shape) in &self.children {
            if let Some(compound) = shape.as_compound() {
                result.extend(
                    compound
                        .shapes()
                        .iter()
                        .map(|(sub_pos, sub_shape)| (pos * sub_pos, sub_shape.clone())),
                );
            } else {
                result.push((*pos, shape.clone()));
            }
        }

        result
    }

    /// A parry compound shape suitable for collision detection.
    ///
    /// Returns `None` if this compound does not contain any shape.
    pub fn to_collider(&self) -> Option<SharedShape> {
        let children = self.flattened_children();

        if children.is_empty() {
            None
        } else {
            Some(SharedShape::compound(children))
        }
    }

    /// Computes the mass properties of this compound for the given uniform density.
    pub fn mass_properties(&self, density: Real) -> MassProperties {
        if self.children.is_empty() {
            return MassProperties::zero();
        }

        self.flattened_children()
            .iter()
            .map(|(pos, shape)| shape.mass_properties(density).transform_by(pos))
            .sum()
    }
}
