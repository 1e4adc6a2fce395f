use crate::common::cube_mesh;
use compound3d::builder::{BuilderState, CustomShape, CustomShapeError};
use compound3d::dynamics::World;
use compound3d::math::{Point, Vector};
use compound3d::parry3d::shape::SharedShape;
use compound3d::shape::CompoundShape;

fn added_shape(world: &mut World) -> CustomShape {
    let mut shape = CustomShape::new();
    shape.create(Point::origin(), 1.0).unwrap();
    shape
        .add_shape(SharedShape::ball(0.5), Vector::zeros())
        .unwrap();
    shape
        .add_mesh(&cube_mesh(Vector::zeros(), 1.0), &Vector::repeat(1.0), true, true)
        .unwrap();
    let _ = shape.add(world).unwrap();
    shape
}

#[test]
fn shape_set_is_immutable_after_add() {
    let mut world = World::new();
    let mut shape = added_shape(&mut world);
    assert_eq!(shape.num_child_shapes(), 2);

    assert_eq!(
        shape.add_shape(SharedShape::ball(1.0), Vector::zeros()),
        Err(CustomShapeError::AlreadyAdded {
            operation: "add_shape"
        })
    );
    assert_eq!(
        shape.add_mesh(&cube_mesh(Vector::zeros(), 1.0), &Vector::repeat(1.0), true, true),
        Err(CustomShapeError::AlreadyAdded {
            operation: "add_mesh"
        })
    );
    assert_eq!(
        shape.init(CompoundShape::new(), Vector::zeros()),
        Err(CustomShapeError::AlreadyAdded { operation: "init" })
    );
    assert_eq!(
        shape.create(Point::origin(), 1.0),
        Err(CustomShapeError::AlreadyAdded {
            operation: "create"
        })
    );

    assert_eq!(shape.num_child_shapes(), 2);
    assert_eq!(shape.num_pending_shapes(), 0);
    assert_eq!(shape.state(), BuilderState::Finalized);
}

#[test]
fn second_add_does_not_register_another_body() {
    let mut world = World::new();
    let mut shape = added_shape(&mut world);
    let handle = shape.body_handle();

    assert_eq!(
        shape.add(&mut world),
        Err(CustomShapeError::AlreadyAdded { operation: "add" })
    );
    assert_eq!(world.len(), 1);
    assert_eq!(shape.body_handle(), handle);
}

#[test]
fn child_count_is_zero_before_add() {
    let mut shape = CustomShape::new();
    shape.create(Point::origin(), 1.0).unwrap();
    shape
        .add_shape(SharedShape::ball(0.5), Vector::zeros())
        .unwrap();

    assert_eq!(shape.num_child_shapes(), 0);
    assert!(!shape.is_added());
    assert!(shape.body_handle().is_none());
}

#[test]
fn shapes_share_a_world() {
    let mut world = World::new();
    let a = added_shape(&mut world);
    let b = added_shape(&mut world);

    assert_eq!(world.len(), 2);
    assert_ne!(a.body_handle(), b.body_handle());
}
