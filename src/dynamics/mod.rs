//! Rigid bodies and the world they are registered into.

pub use self::rigid_body::{BodyFactory, BodyUserData, DefaultBodyFactory, RigidBody};
pub use self::world::{BodyHandle, PhysicsWorld, World};

mod rigid_body;
mod world;
