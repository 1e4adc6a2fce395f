use crate::common::cube_mesh;
use compound3d::builder::{CustomShape, CustomShapeConfig, CustomShapeError};
use compound3d::dynamics::World;
use compound3d::math::{Point, Real, Vector};
use compound3d::mesh::{Mesh, MeshError};
use compound3d::parry3d::shape::SharedShape;
use compound3d::transformation::{
    ConvexDecomposer, DecompositionConfig, DecompositionError, VhacdDecomposer,
};

/// Splits any mesh into three balls.
struct ThreeBalls;

impl ConvexDecomposer for ThreeBalls {
    fn decompose(
        &self,
        _: &Mesh,
        _: &Vector<Real>,
    ) -> Result<Vec<(Point<Real>, SharedShape)>, DecompositionError> {
        Ok((0..3)
            .map(|i| (Point::new(i as Real, 5.0, 0.0), SharedShape::ball(0.5)))
            .collect())
    }

    fn assemble_compound(
        &self,
        components: Vec<(Point<Real>, SharedShape)>,
    ) -> Result<SharedShape, DecompositionError> {
        VhacdDecomposer::default().assemble_compound(components)
    }
}

struct NoPiece;

impl ConvexDecomposer for NoPiece {
    fn decompose(
        &self,
        _: &Mesh,
        _: &Vector<Real>,
    ) -> Result<Vec<(Point<Real>, SharedShape)>, DecompositionError> {
        Ok(vec![])
    }

    fn assemble_compound(
        &self,
        components: Vec<(Point<Real>, SharedShape)>,
    ) -> Result<SharedShape, DecompositionError> {
        VhacdDecomposer::default().assemble_compound(components)
    }
}

#[test]
fn decomposition_contributes_a_single_child() {
    let mut world = World::new();
    let mut shape = CustomShape::new().with_decomposer(ThreeBalls);
    shape.create(Point::origin(), 1.0).unwrap();
    shape
        .add_mesh(&cube_mesh(Vector::zeros(), 1.0), &Vector::repeat(1.0), false, true)
        .unwrap();
    shape
        .add_shape(SharedShape::ball(0.5), Vector::new(4.0, 0.0, 0.0))
        .unwrap();
    let _ = shape.add(&mut world).unwrap();

    assert_eq!(shape.num_child_shapes(), 2);
    // The decomposition entry has a zero offset: piece centroids are not averaged.
    assert_eq!(shape.centroid(), Vector::new(2.0, 0.0, 0.0));

    let compound = shape.compound().unwrap();
    let nested = compound.children()[0].1.as_compound().unwrap();
    assert_eq!(nested.shapes().len(), 3);
    assert_eq!(compound.flattened_children().len(), 4);
}

#[test]
fn vhacd_decomposition_of_a_cube() {
    let config = CustomShapeConfig {
        decomposition: DecompositionConfig {
            resolution: 16,
            ..DecompositionConfig::default()
        },
        ..CustomShapeConfig::default()
    };

    let mut world = World::new();
    let mut shape = CustomShape::with_config(config);
    shape.create(Point::origin(), 1.0).unwrap();
    shape
        .add_mesh(&cube_mesh(Vector::zeros(), 1.0), &Vector::repeat(1.0), false, false)
        .unwrap();
    let _ = shape.add(&mut world).unwrap();

    assert_eq!(shape.num_child_shapes(), 1);
    assert!(shape.compound().unwrap().children()[0].1.as_compound().is_some());
    assert!(!shape.compound().unwrap().flattened_children().is_empty());
}

#[test]
fn decomposition_without_pieces_fails() {
    let mut shape = CustomShape::new().with_decomposer(NoPiece);
    shape.create(Point::origin(), 1.0).unwrap();

    let err = shape
        .add_mesh(&cube_mesh(Vector::zeros(), 1.0), &Vector::repeat(1.0), false, true)
        .unwrap_err();
    assert_eq!(
        err,
        CustomShapeError::Decomposition(DecompositionError::NoConvexPiece)
    );
    assert_eq!(shape.num_pending_shapes(), 0);
}

#[test]
fn invalid_mesh_is_reported_by_both_modes() {
    let mut mesh = cube_mesh(Vector::zeros(), 1.0);
    mesh.add_triangle(0, 1, 42);

    let mut shape = CustomShape::new();
    shape.create(Point::origin(), 1.0).unwrap();

    for use_convex_hull in [true, false] {
        let err = shape
            .add_mesh(&mesh, &Vector::repeat(1.0), use_convex_hull, true)
            .unwrap_err();
        assert_eq!(
            err,
            CustomShapeError::InvalidMesh(MeshError::IndexOutOfBounds {
                index: 42,
                num_vertices: 8
            })
        );
    }
    assert_eq!(shape.num_pending_shapes(), 0);
}
