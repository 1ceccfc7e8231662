//! Pointer-ray picking primitives.
//!
//! The pointer ray for a frame is built by
//! [`Camera::screen_ray`](crate::camera::Camera::screen_ray) and resolved to
//! the nearest selectable part by a
//! [`PickingBackend`](crate::scene::PickingBackend).

use std::cmp::Ordering;

use glam::Vec3;

use crate::scene::{ObjectId, SurfaceId};

/// A half-line in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray; `direction` is normalized, falling back to -Z when it
    /// has no length.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.try_normalize().unwrap_or(Vec3::NEG_Z),
        }
    }

    /// Ray from `origin` through `point`.
    #[must_use]
    pub fn through(origin: Vec3, point: Vec3) -> Self {
        Self::new(origin, point - origin)
    }

    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Slab test against an axis-aligned box. Returns the entry distance, or
    /// `0.0` when the origin is already inside the box.
    #[must_use]
    pub fn intersect_aabb(&self, min: Vec3, max: Vec3) -> Option<f32> {
        let inv = self.direction.recip();
        let t0 = (min - self.origin) * inv;
        let t1 = (max - self.origin) * inv;
        let near = t0.min(t1).max_element();
        let far = t0.max(t1).min_element();

        // NaN from 0 * inf (origin on a slab plane, parallel ray) has no
        // ordering and is rejected here.
        let entry = near.max(0.0);
        match far.partial_cmp(&entry) {
            Some(Ordering::Greater | Ordering::Equal) => Some(entry),
            _ => None,
        }
    }
}

/// Nearest intersection of the pointer ray with a selectable part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// The part whose visuals were hit.
    pub object: ObjectId,
    /// The specific surface that was hit.
    pub surface: SurfaceId,
    /// Distance along the ray.
    pub distance: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_hits_box_in_front() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let t = ray.intersect_aabb(Vec3::splat(-1.0), Vec3::splat(1.0));
        assert_eq!(t, Some(9.0));
    }

    #[test]
    fn ray_misses_box_behind() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);
        assert!(ray
            .intersect_aabb(Vec3::splat(-1.0), Vec3::splat(1.0))
            .is_none());
    }

    #[test]
    fn ray_misses_box_to_the_side() {
        let ray = Ray::new(Vec3::new(5.0, 0.0, 10.0), Vec3::NEG_Z);
        assert!(ray
            .intersect_aabb(Vec3::splat(-1.0), Vec3::splat(1.0))
            .is_none());
    }

    #[test]
    fn origin_inside_box_reports_zero() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = ray.intersect_aabb(Vec3::splat(-1.0), Vec3::splat(1.0));
        assert_eq!(t, Some(0.0));
    }

    #[test]
    fn zero_direction_falls_back_to_forward() {
        let ray = Ray::new(Vec3::ONE, Vec3::ZERO);
        assert_eq!(ray.direction, Vec3::NEG_Z);
        assert_eq!(ray.at(2.0), Vec3::new(1.0, 1.0, -1.0));
    }
}
