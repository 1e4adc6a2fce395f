use crate::builder::{
    CustomShapeConfig, CustomShapeError, DEFAULT_DAMPING, DEFAULT_FRICTION, DEFAULT_RESTITUTION,
};
use crate::dynamics::{
    BodyFactory, BodyHandle, BodyUserData, DefaultBodyFactory, PhysicsWorld, RigidBody,
};
use crate::math::{Isometry, Point, Real, Rotation, Vector};
use crate::mesh::{Mesh, PrimitiveMode, TriangleMesh};
use crate::shape::{CompoundShape, SubShape};
use crate::transformation::{
    ConvexDecomposer, ConvexHullBuilder, HullBuilder, HullError, VhacdDecomposer,
};
use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use parry3d::shape::SharedShape;
use parry3d::utils;

/// The lifecycle stage of a [`CustomShape`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BuilderState {
    /// `create` was not called yet.
    Empty,
    /// The start transform and mass are known; sub-shapes can still be added.
    Building,
    /// The compound was attached to a body by `add`. The shape set is now immutable.
    Finalized,
}

/// Assembles sub-shapes into a single compound rigid body.
///
/// Sub-shapes are accumulated with [`CustomShape::add_shape`] and [`CustomShape::add_mesh`],
/// then [`CustomShape::add`] centers them on their mean offset, attaches them to the compound
/// and registers the resulting body into a world. This can only happen once.
pub struct CustomShape {
    state: BuilderState,
    initialized: bool,
    compound: Option<CompoundShape>,
    finalized_compound: Option<Arc<CompoundShape>>,
    body: Option<BodyHandle>,
    sub_shapes: Vec<SubShape>,
    centroid: Vector<Real>,
    start_transform: Isometry<Real>,
    mass: Real,
    config: CustomShapeConfig,
    hull_builder: Box<dyn HullBuilder + Send + Sync>,
    decomposer: Box<dyn ConvexDecomposer + Send + Sync>,
    body_factory: Box<dyn BodyFactory + Send + Sync>,
}

impl Default for CustomShape {
    fn default() -> Self {
        Self::with_config(CustomShapeConfig::default())
    }
}

impl fmt::Debug for CustomShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomShape")
            .field("state", &self.state)
            .field("initialized", &self.initialized)
            .field("body", &self.body)
            .field("num_pending_shapes", &self.sub_shapes.len())
            .field("num_child_shapes", &self.num_child_shapes())
            .field("centroid", &self.centroid)
            .field("start_transform", &self.start_transform)
            .field("mass", &self.mass)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CustomShape {
    /// Creates an empty builder with the default configuration and collaborators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with the given configuration.
    ///
    /// The default decomposer is set up with `config.decomposition`.
    pub fn with_config(config: CustomShapeConfig) -> Self {
        Self {
            state: BuilderState::Empty,
            initialized: false,
            compound: None,
            finalized_compound: None,
            body: None,
            sub_shapes: Vec::new(),
            centroid: Vector::zeros(),
            start_transform: Isometry::identity(),
            mass: 0.0,
            config,
            hull_builder: Box::new(ConvexHullBuilder),
            decomposer: Box::new(VhacdDecomposer::new(config.decomposition)),
            body_factory: Box::new(DefaultBodyFactory),
        }
    }

    /// Replaces the routine computing the hull of meshes added in convex hull mode.
    pub fn with_hull_builder(
        mut self,
        hull_builder: impl HullBuilder + Send + Sync + 'static,
    ) -> Self {
        self.hull_builder = Box::new(hull_builder);
        self
    }

    /// Replaces the service decomposing meshes added in decomposition mode.
    pub fn with_decomposer(
        mut self,
        decomposer: impl ConvexDecomposer + Send + Sync + 'static,
    ) -> Self {
        self.decomposer = Box::new(decomposer);
        self
    }

    /// Replaces the factory building the rigid body in [`CustomShape::add`].
    pub fn with_body_factory(
        mut self,
        body_factory: impl BodyFactory + Send + Sync + 'static,
    ) -> Self {
        self.body_factory = Box::new(body_factory);
        self
    }

    /// Uses a pre-built compound shape with a known centroid.
    ///
    /// Subsequent calls to `create` keep this compound instead of allocating a new one, and
    /// sub-shapes added later are appended to its existing children.
    pub fn init(
        &mut self,
        compound: CompoundShape,
        centroid: Vector<Real>,
    ) -> Result<(), CustomShapeError> {
        self.ensure_not_added("init")?;

        self.compound = Some(compound);
        self.centroid = centroid;
        self.initialized = true;
        Ok(())
    }

    /// Records the start position and mass of the body, with an identity rotation.
    ///
    /// A mass smaller than or equal to zero makes the body static.
    pub fn create(&mut self, location: Point<Real>, mass: Real) -> Result<(), CustomShapeError> {
        let start_transform = Isometry::translation(location.x, location.y, location.z);
        self.create_with_transform(start_transform, mass)
    }

    /// Records the start position, orientation and mass of the body.
    pub fn create_with_rotation(
        &mut self,
        location: Point<Real>,
        rotation: Rotation<Real>,
        mass: Real,
    ) -> Result<(), CustomShapeError> {
        self.create_with_transform(Isometry::from_parts(location.coords.into(), rotation), mass)
    }

    /// Records the start transform and mass of the body.
    ///
    /// Unless [`CustomShape::init`] was called, this allocates a new empty compound and resets
    /// the centroid. Pending sub-shapes are kept.
    pub fn create_with_transform(
        &mut self,
        start_transform: Isometry<Real>,
        mass: Real,
    ) -> Result<(), CustomShapeError> {
        self.ensure_not_added("create")?;

        if !self.initialized {
            self.compound = Some(CompoundShape::new());
            self.centroid = Vector::zeros();
        }

        self.start_transform = start_transform;
        self.mass = mass;
        self.state = BuilderState::Building;
        Ok(())
    }

    /// Appends a sub-shape whose local origin sits at `local_offset`.
    pub fn add_shape(
        &mut self,
        shape: SharedShape,
        local_offset: Vector<Real>,
    ) -> Result<(), CustomShapeError> {
        self.ensure_not_added("add_shape")?;
        self.sub_shapes.push(SubShape::new(shape, local_offset));
        Ok(())
    }

    /// Appends a sub-shape built from a triangle mesh.
    ///
    /// With `use_convex_hull`, the sub-shape is the convex hull of the mesh scaled by
    /// `local_scaling`. Its offset is the mean of the hull vertices if `center_on_centroid` is
    /// set, in which case the hull is shifted so this mean lies at its origin, and zero
    /// otherwise.
    ///
    /// Without `use_convex_hull`, the mesh is decomposed into convex pieces which are appended
    /// together as a single compound sub-shape with a zero offset.
    pub fn add_mesh(
        &mut self,
        mesh: &Mesh,
        local_scaling: &Vector<Real>,
        use_convex_hull: bool,
        center_on_centroid: bool,
    ) -> Result<(), CustomShapeError> {
        if mesh.mode() != PrimitiveMode::Triangles {
            return Err(report(CustomShapeError::TopologyMismatch(mesh.mode())));
        }

        self.ensure_not_added("add_mesh")?;

        let sub_shape = if use_convex_hull {
            self.convex_hull_sub_shape(mesh, local_scaling, center_on_centroid)
        } else {
            self.decomposed_sub_shape(mesh, local_scaling)
        }
        .map_err(report)?;

        self.sub_shapes.push(sub_shape);
        Ok(())
    }

    fn convex_hull_sub_shape(
        &self,
        mesh: &Mesh,
        local_scaling: &Vector<Real>,
        center_on_centroid: bool,
    ) -> Result<SubShape, CustomShapeError> {
        let margin = self.config.collision_margin;
        let hull = {
            let source = TriangleMesh::from_mesh(mesh, local_scaling)?;
            self.hull_builder.build_hull(&source, margin)?
        };

        if hull.is_empty() {
            return Err(HullError::EmptyHull.into());
        }

        let centroid = if center_on_centroid {
            utils::center(&hull).coords
        } else {
            Vector::zeros()
        };

        let points: Vec<Point<Real>> = hull.iter().map(|pt| *pt - centroid).collect();
        let shape = if margin > 0.0 {
            SharedShape::round_convex_hull(&points, margin)
        } else {
            SharedShape::convex_hull(&points)
        }
        .ok_or(HullError::DegenerateHull(points.len()))?;

        Ok(SubShape::new(shape, centroid))
    }

    fn decomposed_sub_shape(
        &self,
        mesh: &Mesh,
        local_scaling: &Vector<Real>,
    ) -> Result<SubShape, CustomShapeError> {
        let components = self.decomposer.decompose(mesh, local_scaling)?;
        let num_pieces = components.len();
        let shape = self.decomposer.assemble_compound(components)?;

        log::debug!("CustomShape: mesh decomposed into {} convex pieces", num_pieces);

        Ok(SubShape::new(shape, Vector::zeros()))
    }

    /// Builds the body and registers it into `world`.
    ///
    /// The centroid becomes the mean of the sub-shape offsets (it is left unchanged if no
    /// sub-shape is pending) and every sub-shape is attached at its offset relative to that
    /// centroid. The body then receives the default friction, restitution and damping.
    pub fn add<W: PhysicsWorld + ?Sized>(
        &mut self,
        world: &mut W,
    ) -> Result<BodyHandle, CustomShapeError> {
        match self.state {
            BuilderState::Finalized => {
                return Err(report(CustomShapeError::AlreadyAdded { operation: "add" }))
            }
            BuilderState::Empty => return Err(report(CustomShapeError::NotCreated)),
            BuilderState::Building => {}
        }

        if !self.sub_shapes.is_empty() {
            let sum: Vector<Real> = self.sub_shapes.iter().map(|sub| sub.offset).sum();
            self.centroid = sum / self.sub_shapes.len() as Real;
        }

        let mut compound = self.compound.take().unwrap_or_default();
        for sub_shape in self.sub_shapes.drain(..) {
            let pos = sub_shape.local_position(&self.centroid);
            compound.add_child_shape(pos, sub_shape.shape);
        }

        let compound = Arc::new(compound);
        let mut body = self
            .body_factory
            .make_body(compound.clone(), self.start_transform, self.mass);
        body.set_user_data(BodyUserData::default());

        let handle = world.add_rigid_body(body);
        self.body = Some(handle);
        self.finalized_compound = Some(compound);
        self.state = BuilderState::Finalized;

        self.set_properties(world, DEFAULT_FRICTION, DEFAULT_RESTITUTION)?;
        self.set_damping(world, DEFAULT_DAMPING)?;

        log::debug!(
            "CustomShape: added body {:?} with {} child shapes, centroid {:?}",
            handle,
            self.num_child_shapes(),
            self.centroid
        );

        Ok(handle)
    }

    /// The centroid of the compound, relative to the body origin.
    #[inline]
    pub fn centroid(&self) -> Vector<Real> {
        self.centroid
    }

    /// The number of children of the compound, zero before [`CustomShape::add`].
    pub fn num_child_shapes(&self) -> usize {
        self.finalized_compound
            .as_ref()
            .map(|compound| compound.num_child_shapes())
            .unwrap_or(0)
    }

    /// Does nothing: rendering is left to the application.
    pub fn draw(&self) {}

    /// The handle of the body, while it is part of a world.
    #[inline]
    pub fn body_handle(&self) -> Option<BodyHandle> {
        self.body
    }

    /// Was [`CustomShape::add`] called successfully?
    #[inline]
    pub fn is_added(&self) -> bool {
        self.state == BuilderState::Finalized
    }

    /// Was a pre-built compound given with [`CustomShape::init`]?
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The lifecycle stage of this builder.
    #[inline]
    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// The mass given to `create`.
    #[inline]
    pub fn mass(&self) -> Real {
        self.mass
    }

    /// The start transform given to `create`.
    #[inline]
    pub fn start_transform(&self) -> &Isometry<Real> {
        &self.start_transform
    }

    /// The number of sub-shapes waiting for [`CustomShape::add`].
    #[inline]
    pub fn num_pending_shapes(&self) -> usize {
        self.sub_shapes.len()
    }

    /// The compound shape: the one attached to the body once added, the one being built
    /// otherwise.
    pub fn compound(&self) -> Option<&CompoundShape> {
        self.finalized_compound
            .as_deref()
            .or(self.compound.as_ref())
    }

    /// The configuration of this builder.
    #[inline]
    pub fn config(&self) -> &CustomShapeConfig {
        &self.config
    }

    /// Sets the friction and restitution of the body.
    pub fn set_properties<W: PhysicsWorld + ?Sized>(
        &self,
        world: &mut W,
        friction: Real,
        restitution: Real,
    ) -> Result<(), CustomShapeError> {
        let body = self.body_mut(world, "set_properties")?;
        body.set_friction(friction);
        body.set_restitution(restitution);
        Ok(())
    }

    /// Sets both the linear and angular damping of the body.
    pub fn set_damping<W: PhysicsWorld + ?Sized>(
        &self,
        world: &mut W,
        damping: Real,
    ) -> Result<(), CustomShapeError> {
        self.body_mut(world, "set_damping")?.set_damping(damping, damping);
        Ok(())
    }

    /// Takes the body out of `world` and returns it.
    ///
    /// The builder stays finalized: the shape can not be added again.
    pub fn remove<W: PhysicsWorld + ?Sized>(
        &mut self,
        world: &mut W,
    ) -> Result<RigidBody, CustomShapeError> {
        let handle = self
            .body
            .ok_or(CustomShapeError::NotAdded {
                operation: "remove",
            })
            .map_err(report)?;
        let body = world
            .remove_rigid_body(handle)
            .ok_or(CustomShapeError::BodyNotFound(handle))
            .map_err(report)?;

        self.body = None;
        Ok(body)
    }

    fn body_mut<'a, W: PhysicsWorld + ?Sized>(
        &self,
        world: &'a mut W,
        operation: &'static str,
    ) -> Result<&'a mut RigidBody, CustomShapeError> {
        let handle = self
            .body
            .ok_or(CustomShapeError::NotAdded { operation })
            .map_err(report)?;
        world
            .rigid_body_mut(handle)
            .ok_or(CustomShapeError::BodyNotFound(handle))
            .map_err(report)
    }

    fn ensure_not_added(&self, operation: &'static str) -> Result<(), CustomShapeError> {
        if self.is_added() {
            Err(report(CustomShapeError::AlreadyAdded { operation }))
        } else {
            Ok(())
        }
    }
}

fn report(err: CustomShapeError) -> CustomShapeError {
    log::error!("CustomShape: {}", err);
    err
}
