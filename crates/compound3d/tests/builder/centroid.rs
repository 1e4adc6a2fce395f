use approx::assert_relative_eq;
use compound3d::builder::CustomShape;
use compound3d::dynamics::World;
use compound3d::math::{Point, Real, Vector};
use compound3d::parry3d::shape::SharedShape;
use compound3d::shape::CompoundShape;
use oorandom::Rand32;

fn random_vector(rng: &mut Rand32) -> Vector<Real> {
    Vector::new(
        rng.rand_float() * 20.0 - 10.0,
        rng.rand_float() * 20.0 - 10.0,
        rng.rand_float() * 20.0 - 10.0,
    )
}

#[test]
fn centroid_is_the_unweighted_mean_of_the_offsets() {
    let mut rng = Rand32::new(42);

    for num_shapes in 1..20 {
        let mut world = World::new();
        let mut shape = CustomShape::new();
        shape.create(Point::origin(), 1.0).unwrap();

        let mut offsets = Vec::new();
        for i in 0..num_shapes {
            let offset = random_vector(&mut rng);
            // Sizes vary so that a volume-weighted mean would differ.
            let radius = 0.1 + i as Real;
            shape
                .add_shape(SharedShape::ball(radius), offset)
                .unwrap();
            offsets.push(offset);
        }

        let _ = shape.add(&mut world).unwrap();

        let mean = offsets.iter().sum::<Vector<Real>>() / num_shapes as Real;
        assert_relative_eq!(shape.centroid(), mean, epsilon = 1.0e-4);

        let children = shape.compound().unwrap().children();
        assert_eq!(children.len(), num_shapes);
        for ((pos, _), offset) in children.iter().zip(offsets.iter()) {
            assert_relative_eq!(pos.translation.vector, offset - mean, epsilon = 1.0e-4);
            assert_eq!(pos.rotation, compound3d::math::Rotation::identity());
        }
    }
}

#[test]
fn no_sub_shape_keeps_the_origin() {
    let mut world = World::new();
    let mut shape = CustomShape::new();
    shape.create(Point::new(3.0, 3.0, 3.0), 1.0).unwrap();
    let _ = shape.add(&mut world).unwrap();

    assert_eq!(shape.centroid(), Vector::zeros());
    assert_eq!(shape.num_child_shapes(), 0);
}

#[test]
fn no_sub_shape_keeps_the_initial_centroid() {
    let mut world = World::new();
    let mut shape = CustomShape::new();
    shape
        .init(CompoundShape::new(), Vector::new(1.0, -2.0, 0.5))
        .unwrap();
    shape.create(Point::origin(), 1.0).unwrap();
    assert_eq!(shape.centroid(), Vector::new(1.0, -2.0, 0.5));

    let _ = shape.add(&mut world).unwrap();
    assert_eq!(shape.centroid(), Vector::new(1.0, -2.0, 0.5));
}

#[test]
fn create_resets_the_centroid_of_an_uninitialized_shape() {
    let mut world = World::new();
    let mut shape = CustomShape::new();
    shape.create(Point::origin(), 1.0).unwrap();
    shape
        .add_shape(SharedShape::ball(0.5), Vector::new(0.0, 2.0, 0.0))
        .unwrap();

    // Creating again keeps the pending sub-shapes.
    shape.create(Point::new(0.0, 1.0, 0.0), 2.0).unwrap();
    assert_eq!(shape.num_pending_shapes(), 1);
    assert_eq!(shape.centroid(), Vector::zeros());

    let _ = shape.add(&mut world).unwrap();
    assert_eq!(shape.centroid(), Vector::new(0.0, 2.0, 0.0));
    assert_eq!(shape.mass(), 2.0);
}
