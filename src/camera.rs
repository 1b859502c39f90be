//! Pinhole camera for primary ray generation.

use glam::Vec3A;

use crate::ray::Ray;

/// Pinhole camera looking down the negative Z axis.
///
/// The viewport sits `focal_length` in front of the camera. Its width follows
/// the aspect ratio of the output image, so the camera must be rebuilt (or
/// [`resize`](Camera::resize)d) whenever the resolution changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3A,
    /// Distance from the camera to the viewport plane
    pub focal_length: f32,
    /// Viewport width in world units
    pub viewport_width: f32,
    /// Viewport height in world units
    pub viewport_height: f32,
    /// Vector across the viewport horizontal edge
    pub viewport_x: Vec3A,
    /// Vector down the viewport vertical edge (negative world Y)
    pub viewport_y: Vec3A,
    /// Offset vector from pixel to pixel horizontally (right direction)
    pub pixel_delta_x: Vec3A,
    /// Offset vector from pixel to pixel vertically (down direction)
    pub pixel_delta_y: Vec3A,
    /// World position of the center of the top-left pixel
    pub pixel00_center: Vec3A,
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
}

impl Camera {
    /// Creates a camera for an `image_width` x `image_height` output.
    ///
    /// Zero dimensions are treated as one pixel.
    pub fn new(
        position: Vec3A,
        focal_length: f32,
        viewport_height: f32,
        image_width: u32,
        image_height: u32,
    ) -> Self {
        let mut camera = Self {
            position,
            focal_length,
            viewport_width: 0.0,
            viewport_height,
            viewport_x: Vec3A::ZERO,
            viewport_y: Vec3A::ZERO,
            pixel_delta_x: Vec3A::ZERO,
            pixel_delta_y: Vec3A::ZERO,
            pixel00_center: Vec3A::ZERO,
            image_width,
            image_height,
        };
        camera.initialize();
        camera
    }

    /// Recompute the viewport for a new output resolution.
    pub fn resize(&mut self, image_width: u32, image_height: u32) {
        self.image_width = image_width;
        self.image_height = image_height;
        self.initialize();
    }

    fn initialize(&mut self) {
        self.image_width = self.image_width.max(1);
        self.image_height = self.image_height.max(1);

        let aspect_ratio = self.image_width as f32 / self.image_height as f32;
        self.viewport_width = self.viewport_height * aspect_ratio;

        // Image rows grow downward while world Y grows upward
        self.viewport_x = Vec3A::new(self.viewport_width, 0.0, 0.0);
        self.viewport_y = Vec3A::new(0.0, -self.viewport_height, 0.0);

        self.pixel_delta_x = self.viewport_x / self.image_width as f32;
        self.pixel_delta_y = self.viewport_y / self.image_height as f32;

        self.pixel00_center = self.top_left() + (self.pixel_delta_x + self.pixel_delta_y) / 2.0;
    }

    /// World position of the viewport's upper left corner.
    pub fn top_left(&self) -> Vec3A {
        self.position
            - Vec3A::new(0.0, 0.0, self.focal_length)
            - self.viewport_x / 2.0
            - self.viewport_y / 2.0
    }

    /// Ray from the camera through pixel (x, y), shifted by a sub-pixel jitter.
    pub fn ray_toward_pixel(&self, x: u32, y: u32, jitter_x: f32, jitter_y: f32) -> Ray {
        let pixel_sample = self.pixel00_center
            + (x as f32 + jitter_x) * self.pixel_delta_x
            + (y as f32 + jitter_y) * self.pixel_delta_y;

        Ray::new(self.position, pixel_sample - self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn viewport_follows_aspect_ratio() {
        let camera = Camera::new(Vec3A::ZERO, 1.0, 2.0, 400, 200);
        assert_eq!(camera.viewport_width, 4.0);
        assert_eq!(camera.viewport_x, Vec3A::new(4.0, 0.0, 0.0));
        assert_eq!(camera.viewport_y, Vec3A::new(0.0, -2.0, 0.0));
        assert_eq!(camera.pixel_delta_x, Vec3A::new(0.01, 0.0, 0.0));
        assert_eq!(camera.pixel_delta_y, Vec3A::new(0.0, -0.01, 0.0));
    }

    #[test]
    fn first_pixel_center_is_half_a_pixel_in() {
        let camera = Camera::new(Vec3A::ZERO, 1.0, 2.0, 4, 2);
        assert_eq!(camera.top_left(), Vec3A::new(-2.0, 1.0, -1.0));
        assert_abs_diff_eq!(camera.pixel00_center, Vec3A::new(-1.5, 0.5, -1.0), epsilon = 1e-6);
    }

    #[test]
    fn camera_position_offsets_viewport() {
        let camera = Camera::new(Vec3A::new(1.0, 2.0, 3.0), 2.0, 1.0, 1, 1);
        assert_abs_diff_eq!(camera.pixel00_center, Vec3A::new(1.0, 2.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn center_ray_points_forward() {
        let camera = Camera::new(Vec3A::ZERO, 1.0, 1.0, 3, 3);
        let r = camera.ray_toward_pixel(1, 1, 0.0, 0.0);
        assert_eq!(r.origin, Vec3A::ZERO);
        assert_abs_diff_eq!(r.direction, Vec3A::new(0.0, 0.0, -1.0), epsilon = 1e-6);
    }

    #[test]
    fn jitter_moves_within_pixel() {
        let camera = Camera::new(Vec3A::ZERO, 1.0, 1.0, 10, 10);
        let centered = camera.ray_toward_pixel(2, 3, 0.0, 0.0);
        let jittered = camera.ray_toward_pixel(2, 3, 0.5, -0.5);
        assert_abs_diff_eq!(
            jittered.direction - centered.direction,
            0.5 * camera.pixel_delta_x - 0.5 * camera.pixel_delta_y,
            epsilon = 1e-6
        );
    }

    #[test]
    fn resize_recomputes_geometry() {
        let mut camera = Camera::new(Vec3A::ZERO, 1.0, 1.0, 100, 100);
        camera.resize(200, 100);
        assert_eq!(camera, Camera::new(Vec3A::ZERO, 1.0, 1.0, 200, 100));
        assert_eq!(camera.viewport_width, 2.0);
    }

    #[test]
    fn zero_resolution_is_clamped() {
        let camera = Camera::new(Vec3A::ZERO, 1.0, 1.0, 0, 0);
        assert_eq!((camera.image_width, camera.image_height), (1, 1));
        assert!(camera.pixel00_center.is_finite());
    }
}
