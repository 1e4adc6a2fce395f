//! Hull generation and convex decomposition of meshes.

pub use self::decomposition::{
    ConvexDecomposer, DecompositionConfig, DecompositionError, VhacdDecomposer,
};
pub use self::hull::{ConvexHullBuilder, HullBuilder, HullError};

mod decomposition;
mod hull;
