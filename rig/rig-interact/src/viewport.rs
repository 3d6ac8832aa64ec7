//! The host-environment seam: viewpoint, unprojection and hit-testing.
//!
//! Real hosts implement [`Viewport`] against their camera and picking
//! machinery. [`ScriptedViewport`] is a deterministic implementation for
//! headless runs and tests.

use nalgebra::Point3;

use crate::pointer::{PointerPos, Ray, Viewpoint};
use crate::scene::EntityId;

/// Result of a pointer hit-test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// The entity under the pointer.
    pub entity: EntityId,
    /// World-space contact point.
    pub point: Point3<f64>,
}

impl Hit {
    /// Create a hit.
    #[must_use]
    pub const fn new(entity: EntityId, point: Point3<f64>) -> Self {
        Self { entity, point }
    }
}

/// Services the host environment provides to an interaction session.
///
/// Every method may fail: a viewport with no bound camera returns `None`
/// from [`Viewport::viewpoint`], and a pointer outside the projection
/// frustum yields no ray. The session degrades to a no-op in both cases.
pub trait Viewport {
    /// Current viewpoint pose, if a camera is bound.
    fn viewpoint(&self) -> Option<Viewpoint>;

    /// Unproject a pointer position into a world ray.
    fn pointer_ray(&self, pointer: PointerPos) -> Option<Ray>;

    /// Resolve the entity under the pointer, if any.
    fn hit_test(&self, pointer: PointerPos) -> Option<Hit>;
}

/// A scripted [`Viewport`] for tests, demos and headless drivers.
///
/// The caller stages what the next hit-test and unprojection should return;
/// the session consumes them through the trait like any other host.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use rig_interact::{PointerPos, ScriptedViewport, Viewpoint, Viewport};
///
/// let mut viewport =
///     ScriptedViewport::new(Viewpoint::from_position(Point3::new(0.0, -200.0, 100.0)));
/// viewport.aim_at(Point3::new(0.0, 0.0, 100.0));
///
/// let ray = viewport.pointer_ray(PointerPos::new(0.0, 0.0)).unwrap();
/// assert!((ray.direction.y - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedViewport {
    viewpoint: Option<Viewpoint>,
    hit: Option<Hit>,
    ray: Option<Ray>,
}

impl ScriptedViewport {
    /// Create a scripted viewport with a bound viewpoint.
    #[must_use]
    pub fn new(viewpoint: Viewpoint) -> Self {
        Self {
            viewpoint: Some(viewpoint),
            hit: None,
            ray: None,
        }
    }

    /// Create a scripted viewport with no camera bound.
    #[must_use]
    pub fn unbound() -> Self {
        Self::default()
    }

    /// Bind or unbind the viewpoint.
    pub fn set_viewpoint(&mut self, viewpoint: Option<Viewpoint>) {
        self.viewpoint = viewpoint;
    }

    /// Stage what the next hit-tests resolve to.
    pub fn set_hit(&mut self, hit: Option<Hit>) {
        self.hit = hit;
    }

    /// Stage what the next unprojections return.
    pub fn set_ray(&mut self, ray: Option<Ray>) {
        self.ray = ray;
    }

    /// Stage an unprojection ray from the viewpoint toward a world target.
    ///
    /// No-op when no viewpoint is bound or the target coincides with it.
    pub fn aim_at(&mut self, target: Point3<f64>) {
        if let Some(viewpoint) = self.viewpoint {
            self.ray = Ray::from_dir(viewpoint.position, target - viewpoint.position);
        }
    }
}

impl Viewport for ScriptedViewport {
    fn viewpoint(&self) -> Option<Viewpoint> {
        self.viewpoint
    }

    fn pointer_ray(&self, _pointer: PointerPos) -> Option<Ray> {
        self.ray
    }

    fn hit_test(&self, _pointer: PointerPos) -> Option<Hit> {
        self.hit
    }
}
