use glam::{Mat4, Vec2, Vec3};

use crate::picking::Ray;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// View matrix looking from `eye` at `target`.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        // perspective_rh uses a [0,1] depth range
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * self.build_view()
    }

    /// Unit vector from eye toward target.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).try_normalize().unwrap_or(Vec3::NEG_Z)
    }

    /// Camera-space right vector in world space.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward()
            .cross(self.up)
            .try_normalize()
            .unwrap_or(Vec3::X)
    }

    /// Camera-space up vector in world space (orthogonal to forward).
    #[must_use]
    pub fn up_vector(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// World-space ray through the pixel at `cursor` for a viewport of
    /// `viewport` physical pixels (origin top-left).
    #[must_use]
    pub fn screen_ray(&self, cursor: Vec2, viewport: Vec2) -> Ray {
        if viewport.min_element() <= 0.0 {
            return Ray::new(self.eye, self.forward());
        }
        let ndc_x = 2.0 * cursor.x / viewport.x - 1.0;
        let ndc_y = 1.0 - 2.0 * cursor.y / viewport.y;

        let inv = self.build_matrix().inverse();
        let near = inv.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        Ray::through(near, far)
    }
}
