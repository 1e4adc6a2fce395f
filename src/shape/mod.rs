//! Shapes assembled by the compound builder.

pub use self::compound_shape::CompoundShape;
pub use self::sub_shape::SubShape;

mod compound_shape;
mod sub_shape;
