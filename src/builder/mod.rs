//! The compound shape builder.

pub use self::config::{
    CustomShapeConfig, DEFAULT_COLLISION_MARGIN, DEFAULT_DAMPING, DEFAULT_FRICTION,
    DEFAULT_RESTITUTION,
};
pub use self::custom_shape::{BuilderState, CustomShape};
pub use self::error::CustomShapeError;

mod config;
mod custom_shape;
mod error;
