use crate::math::Real;
use crate::transformation::DecompositionConfig;

/// Friction coefficient given to every body created by a [`CustomShape`](super::CustomShape).
pub const DEFAULT_FRICTION: Real = 0.4;
/// Restitution coefficient given to every body created by a [`CustomShape`](super::CustomShape).
pub const DEFAULT_RESTITUTION: Real = 0.75;
/// Linear and angular damping given to every body created by a
/// [`CustomShape`](super::CustomShape).
pub const DEFAULT_DAMPING: Real = 0.25;
/// The collision margin of convex hulls built from meshes.
pub const DEFAULT_COLLISION_MARGIN: Real = 0.04;

/// Configuration of the geometric operations performed by a [`CustomShape`](super::CustomShape).
///
/// The physical properties of the resulting body are not configurable: see [`DEFAULT_FRICTION`],
/// [`DEFAULT_RESTITUTION`] and [`DEFAULT_DAMPING`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CustomShapeConfig {
    /// Margin handed to the hull builder and used as the border radius of the hull shapes.
    pub collision_margin: Real,
    /// Parameters of the convex decomposition of meshes.
    pub decomposition: DecompositionConfig,
}

impl Default for CustomShapeConfig {
    fn default() -> Self {
        Self {
            collision_margin: DEFAULT_COLLISION_MARGIN,
            decomposition: DecompositionConfig::default(),
        }
    }
}
