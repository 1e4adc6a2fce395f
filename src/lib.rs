/*!
compound3d
==========

**compound3d** assembles convex hulls, decomposed triangle meshes and explicit
sub-shapes into a single compound rigid body, using [`parry3d`] for every
geometric operation.

The entry point is [`builder::CustomShape`]:

```
use compound3d::builder::CustomShape;
use compound3d::dynamics::World;
use compound3d::math::{Point, Vector};
use compound3d::mesh::{Mesh, PrimitiveMode};
use compound3d::parry3d::shape::SharedShape;

let mut world = World::new();
let mut shape = CustomShape::new();
shape.create(Point::new(0.0, 5.0, 0.0), 1.0).unwrap();
shape
    .add_shape(SharedShape::ball(0.5), Vector::new(-1.0, 0.0, 0.0))
    .unwrap();
shape
    .add_shape(SharedShape::ball(0.5), Vector::new(1.0, 0.0, 0.0))
    .unwrap();
shape.add(&mut world).unwrap();

assert_eq!(shape.num_child_shapes(), 2);
assert_eq!(world.len(), 1);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![deny(unused_qualifications)]

extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;
pub extern crate parry3d;

pub mod builder;
pub mod dynamics;
pub mod mesh;
pub mod shape;
pub mod transformation;

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use parry3d::math::{Isometry, Point, Real, Rotation, Vector};
}
