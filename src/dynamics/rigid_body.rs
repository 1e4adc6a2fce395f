use crate::math::{Isometry, Point, Real, Vector};
use crate::num::Zero;
use crate::shape::CompoundShape;
use alloc::sync::Arc;
use parry3d::mass_properties::MassProperties;
use parry3d::shape::SharedShape;

/// Data attached by the application to a rigid body.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BodyUserData {
    /// An arbitrary value, typically an entity identifier.
    pub user_data: u128,
}

/// A rigid body whose collision shape is a [`CompoundShape`].
#[derive(Clone, Debug)]
pub struct RigidBody {
    position: Isometry<Real>,
    shape: Arc<CompoundShape>,
    collider: Option<SharedShape>,
    mass_properties: MassProperties,
    friction: Real,
    restitution: Real,
    linear_damping: Real,
    angular_damping: Real,
    user_data: Option<BodyUserData>,
}

impl RigidBody {
    /// The friction coefficient of a body that was never configured.
    pub const DEFAULT_FRICTION: Real = 0.5;

    /// Creates a rigid body at `position`.
    ///
    /// A body with a zero inverse mass is static.
    pub fn new(
        shape: Arc<CompoundShape>,
        position: Isometry<Real>,
        mass_properties: MassProperties,
    ) -> Self {
        let collider = shape.to_collider();

        Self {
            position,
            shape,
            collider,
            mass_properties,
            friction: Self::DEFAULT_FRICTION,
            restitution: 0.0,
            linear_damping: 0.0,
            angular_damping: 0.0,
            user_data: None,
        }
    }

    /// The world-space position of this body.
    #[inline]
    pub fn position(&self) -> &Isometry<Real> {
        &self.position
    }

    /// The compound shape of this body.
    #[inline]
    pub fn shape(&self) -> &Arc<CompoundShape> {
        &self.shape
    }

    /// The flattened collider of this body, `None` if its compound is empty.
    #[inline]
    pub fn collider(&self) -> Option<&SharedShape> {
        self.collider.as_ref()
    }

    /// The mass properties of this body, expressed in its local frame.
    #[inline]
    pub fn mass_properties(&self) -> &MassProperties {
        &self.mass_properties
    }

    /// The mass of this body, zero for static bodies.
    pub fn mass(&self) -> Real {
        if self.mass_properties.inv_mass == 0.0 {
            0.0
        } else {
            1.0 / self.mass_properties.inv_mass
        }
    }

    /// Is this body static (infinite mass)?
    #[inline]
    pub fn is_static(&self) -> bool {
        self.mass_properties.inv_mass == 0.0
    }

    /// The friction coefficient.
    #[inline]
    pub fn friction(&self) -> Real {
        self.friction
    }

    /// Sets the friction coefficient.
    pub fn set_friction(&mut self, friction: Real) {
        self.friction = friction;
    }

    /// The restitution coefficient.
    #[inline]
    pub fn restitution(&self) -> Real {
        self.restitution
    }

    /// Sets the restitution coefficient.
    pub fn set_restitution(&mut self, restitution: Real) {
        self.restitution = restitution;
    }

    /// The linear damping coefficient.
    #[inline]
    pub fn linear_damping(&self) -> Real {
        self.linear_damping
    }

    /// The angular damping coefficient.
    #[inline]
    pub fn angular_damping(&self) -> Real {
        self.angular_damping
    }

    /// Sets both damping coefficients.
    pub fn set_damping(&mut self, linear_damping: Real, angular_damping: Real) {
        self.linear_damping = linear_damping;
        self.angular_damping = angular_damping;
    }

    /// The data attached to this body.
    #[inline]
    pub fn user_data(&self) -> Option<&BodyUserData> {
        self.user_data.as_ref()
    }

    /// Attaches data to this body, replacing the previous one.
    pub fn set_user_data(&mut self, user_data: BodyUserData) {
        self.user_data = Some(user_data);
    }
}

/// Builds rigid bodies out of compound shapes.
pub trait BodyFactory {
    /// Creates a body with the given shape, initial position and mass.
    ///
    /// A mass smaller than or equal to zero yields a static body.
    fn make_body(&self, shape: Arc<CompoundShape>, start: Isometry<Real>, mass: Real)
        -> RigidBody;
}

/// A [`BodyFactory`] deriving the angular inertia from the geometry of the compound.
///
/// The body is given a uniform density such that its total mass equals the requested one.
/// Compounds without volume (flat hulls, triangles, segments) get the inertia of a solid box
/// filling their local AABB instead.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultBodyFactory;

impl BodyFactory for DefaultBodyFactory {
    fn make_body(
        &self,
        shape: Arc<CompoundShape>,
        start: Isometry<Real>,
        mass: Real,
    ) -> RigidBody {
        let mass_properties = if mass <= 0.0 {
            MassProperties::zero()
        } else if shape.is_empty() {
            MassProperties::new(Point::origin(), mass, Vector::zeros())
        } else {
            let mut props = shape.mass_properties(1.0);

            if props.inv_mass == 0.0 {
                bounding_box_mass_properties(&shape, mass)
            } else {
                props.set_mass(mass, true);
                props
            }
        };

        RigidBody::new(shape, start, mass_properties)
    }
}

fn bounding_box_mass_properties(shape: &CompoundShape, mass: Real) -> MassProperties {
    let Some(collider) = shape.to_collider() else {
        return MassProperties::new(Point::origin(), mass, Vector::zeros());
    };

    let aabb = collider.compute_local_aabb();
    let sq = aabb.extents().map(|e| e * e);
    let principal_inertia = Vector::new(sq.y + sq.z, sq.x + sq.z, sq.x + sq.y) * (mass / 12.0);

    MassProperties::new(aabb.center(), mass, principal_inertia)
}
