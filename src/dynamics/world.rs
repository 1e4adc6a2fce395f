use crate::dynamics::RigidBody;
use slab::Slab;

/// The identifier of a rigid body registered in a [`PhysicsWorld`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub u32);

impl BodyHandle {
    /// An handle that never refers to a body.
    pub fn invalid() -> Self {
        Self(u32::MAX)
    }
}

impl Default for BodyHandle {
    // default to invalid value
    fn default() -> Self {
        Self::invalid()
    }
}

/// A simulation world into which rigid bodies are registered.
pub trait PhysicsWorld {
    /// Adds a body to the simulation and returns its handle.
    fn add_rigid_body(&mut self, body: RigidBody) -> BodyHandle;
    /// The body identified by `handle`, if it is still part of this world.
    fn rigid_body(&self, handle: BodyHandle) -> Option<&RigidBody>;
    /// A mutable reference to the body identified by `handle`.
    fn rigid_body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody>;
    /// Takes the body identified by `handle` out of the simulation.
    fn remove_rigid_body(&mut self, handle: BodyHandle) -> Option<RigidBody>;
}

/// A set of rigid bodies.
///
/// Handles of removed bodies are recycled by subsequent insertions.
#[derive(Clone, Debug, Default)]
pub struct World {
    bodies: Slab<RigidBody>,
}

impl World {
    /// Creates an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of bodies in this world.
    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Returns `true` if this world does not contain any body.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Does this world contain the body identified by `handle`?
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.bodies.contains(handle.0 as usize)
    }
}

impl PhysicsWorld for World {
    fn add_rigid_body(&mut self, body: RigidBody) -> BodyHandle {
        BodyHandle(self.bodies.insert(body) as u32)
    }

    fn rigid_body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle.0 as usize)
    }

    fn rigid_body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle.0 as usize)
    }

    fn remove_rigid_body(&mut self, handle: BodyHandle) -> Option<RigidBody> {
        self.bodies.try_remove(handle.0 as usize)
    }
}
