//! Pointer picking: rays, hits, and the host ray-cast seam.
//!
//! The rig never owns scene geometry. Hosts implement [`RayCaster`] over
//! their physics or BVH; [`BoundingSphere`] slices cover simple scenes and
//! tests.

use glam::{Vec2, Vec3};

use crate::camera::Camera;

/// Half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray; `direction` is normalised.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Nearest intersection reported by a [`RayCaster`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// World-space hit point.
    pub point: Vec3,
    /// Surface normal at the hit point.
    pub normal: Vec3,
    /// Distance from the ray origin.
    pub distance: f32,
    /// Host-assigned identifier of the object that was hit.
    pub object: u64,
}

/// Scene intersection service provided by the host.
pub trait RayCaster {
    /// Nearest hit along `ray` no farther than `max_distance`, if any.
    fn cast(&self, ray: &Ray, max_distance: f32) -> Option<RaycastHit>;
}

impl<F> RayCaster for F
where
    F: Fn(&Ray, f32) -> Option<RaycastHit>,
{
    fn cast(&self, ray: &Ray, max_distance: f32) -> Option<RaycastHit> {
        self(ray, max_distance)
    }
}

/// Sphere collider tagged with a host object id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// Sphere center.
    pub center: Vec3,
    /// Sphere radius.
    pub radius: f32,
    /// Id reported in hits.
    pub object: u64,
}

impl BoundingSphere {
    /// Create a sphere.
    #[must_use]
    pub fn new(center: Vec3, radius: f32, object: u64) -> Self {
        Self {
            center,
            radius,
            object,
        }
    }

    /// Entry distance of `ray` into the sphere. A ray starting inside hits
    /// the far wall.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.center;
        let b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let root = discriminant.sqrt();
        let near = -b - root;
        let far = -b + root;
        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }
}

impl RayCaster for [BoundingSphere] {
    fn cast(&self, ray: &Ray, max_distance: f32) -> Option<RaycastHit> {
        self.iter()
            .filter_map(|sphere| {
                sphere
                    .intersect(ray)
                    .filter(|t| *t <= max_distance)
                    .map(|t| (t, sphere))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(distance, sphere)| {
                let point = ray.at(distance);
                RaycastHit {
                    point,
                    normal: (point - sphere.center).normalize_or_zero(),
                    distance,
                    object: sphere.object,
                }
            })
    }
}

/// What the pick callback receives each frame the pointer is over
/// something.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickEvent {
    /// The hit under the pointer.
    pub hit: RaycastHit,
    /// Whether the select action was pressed this frame (a click rather
    /// than a hover).
    pub selected: bool,
}

/// Cast the pointer ray from `camera` into the scene.
#[must_use]
pub fn pick<C: RayCaster + ?Sized>(
    camera: &Camera,
    pointer: Vec2,
    viewport: Vec2,
    caster: &C,
    max_distance: f32,
) -> Option<RaycastHit> {
    let ray = camera.screen_point_to_ray(pointer, viewport);
    if ray.direction == Vec3::ZERO {
        return None;
    }
    caster.cast(&ray, max_distance)
}
