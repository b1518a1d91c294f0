use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Mat4, Vec3};

/// Polar clamp limit: a hair short of ±π/2 so the eye never crosses the
/// vertical axis (which would flip the look direction discontinuously).
const POLAR_CAP: f32 = FRAC_PI_2 - 0.001;

/// Orbit camera parameterized by spherical coordinates around a fixed
/// look-at point.
///
/// The camera sits on a sphere of fixed `radius` around `center`, positioned
/// by two angles: `azimuth` (horizontal, around the vertical axis) and
/// `polar` (elevation above/below the horizontal plane). The two rotate
/// operations are the only mutations; `center`, `up` and `radius` are fixed
/// at construction.
///
/// Invariants, upheld after every mutation:
///
/// - `azimuth ∈ [0, 2π)`
/// - `polar ∈ [-(π/2 − 0.001), π/2 − 0.001]`
///
/// Degenerate construction inputs (zero radius, `up` parallel to the view
/// direction) are not validated; [`view_matrix`](Self::view_matrix) is only
/// meaningful when the caller avoids them.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcballCamera {
    center: Vec3,
    up: Vec3,
    radius: f32,
    min_radius: f32,
    azimuth: f32,
    polar: f32,
}

impl ArcballCamera {
    /// Create a camera from its raw parameters. All fields are stored
    /// verbatim; the initial angles are not normalized or clamped.
    pub fn new(
        center: Vec3,
        up: Vec3,
        radius: f32,
        min_radius: f32,
        azimuth: f32,
        polar: f32,
    ) -> Self {
        Self {
            center,
            up,
            radius,
            min_radius,
            azimuth,
            polar,
        }
    }

    /// Rotate horizontally around the vertical axis by `radians`.
    ///
    /// The result is wrapped into `[0, 2π)` with a floored modulo, so a
    /// negative total lands in the positive range (e.g. `-0.1` becomes
    /// `2π − 0.1`).
    pub fn rotate_azimuth(&mut self, radians: f32) {
        self.azimuth = (self.azimuth + radians).rem_euclid(TAU);
    }

    /// Rotate vertically by `radians`, clamped to ±(π/2 − 0.001).
    ///
    /// Clamping (rather than wrapping) keeps the eye from passing through
    /// the pole, which would invert the look direction mid-drag.
    pub fn rotate_polar(&mut self, radians: f32) {
        self.polar = (self.polar + radians).clamp(-POLAR_CAP, POLAR_CAP);
    }

    /// Eye position on the orbit sphere for the current angles.
    pub fn eye(&self) -> Vec3 {
        let (sin_azimuth, cos_azimuth) = self.azimuth.sin_cos();
        let (sin_polar, cos_polar) = self.polar.sin_cos();

        Vec3::new(
            self.center.x + self.radius * cos_polar * cos_azimuth,
            self.center.y + self.radius * sin_polar,
            self.center.z + self.radius * cos_polar * sin_azimuth,
        )
    }

    /// Right-handed look-at matrix from the current eye toward `center`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.center, self.up)
    }

    /// Unit vector pointing from the eye toward the orbit center.
    pub fn normalized_view_vector(&self) -> Vec3 {
        (self.center - self.eye()).normalize()
    }

    /// The point being orbited (the look-at target).
    pub fn view_point(&self) -> Vec3 {
        self.center
    }

    /// The camera's up direction.
    pub fn up_vector(&self) -> Vec3 {
        self.up
    }

    /// Current azimuth angle in radians, in `[0, 2π)` after any mutation.
    pub fn azimuth_angle(&self) -> f32 {
        self.azimuth
    }

    /// Current polar angle in radians.
    pub fn polar_angle(&self) -> f32 {
        self.polar
    }

    /// Distance from the orbit center to the eye.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Minimum orbit radius supplied at construction.
    ///
    /// No operation on this type reads it: the radius is constant, and zoom
    /// happens through model scaling in the application layer. Kept so the
    /// construction signature matches what callers configure.
    pub fn min_radius(&self) -> f32 {
        self.min_radius
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    use glam::Vec3;

    use super::ArcballCamera;

    const EPS: f32 = 1e-5;

    fn test_camera() -> ArcballCamera {
        ArcballCamera::new(Vec3::ZERO, Vec3::Y, 2.0, 0.1, 0.0, 0.0)
    }

    #[test]
    fn azimuth_stays_in_range_under_arbitrary_deltas() {
        let mut camera = test_camera();
        let deltas = [
            0.3, -1.7, 12.9, -25.0, 0.0, 6.5, -0.0001, 100.0, -99.3, 3.14,
        ];
        for delta in deltas {
            camera.rotate_azimuth(delta);
            let azimuth = camera.azimuth_angle();
            assert!(
                (0.0..TAU).contains(&azimuth),
                "azimuth {azimuth} out of [0, 2π) after delta {delta}"
            );
        }
    }

    #[test]
    fn polar_stays_clamped_under_arbitrary_deltas() {
        let mut camera = test_camera();
        let cap = FRAC_PI_2 - 0.001;
        let deltas = [0.5, -2.0, 10.0, -10.0, 0.25, 7.3, -0.1];
        for delta in deltas {
            camera.rotate_polar(delta);
            let polar = camera.polar_angle();
            assert!(
                (-cap..=cap).contains(&polar),
                "polar {polar} outside clamp band after delta {delta}"
            );
        }
    }

    #[test]
    fn zero_deltas_are_identities() {
        let mut camera = test_camera();
        camera.rotate_azimuth(0.0);
        camera.rotate_polar(0.0);
        assert_eq!(camera.azimuth_angle(), 0.0);
        assert_eq!(camera.polar_angle(), 0.0);
    }

    #[test]
    fn eye_always_lies_on_the_orbit_sphere() {
        let center = Vec3::new(1.0, -2.0, 3.0);
        let mut camera =
            ArcballCamera::new(center, Vec3::Y, 5.0, 0.1, 0.0, 0.0);
        for i in 0..50 {
            camera.rotate_azimuth(0.37 * i as f32 - 4.0);
            camera.rotate_polar(0.21 * i as f32 - 2.5);
            let distance = camera.eye().distance(center);
            assert!(
                (distance - 5.0).abs() < 1e-4,
                "eye left the sphere: distance {distance}"
            );
        }
    }

    #[test]
    fn zero_angles_put_the_eye_on_positive_x() {
        let camera =
            ArcballCamera::new(Vec3::ZERO, Vec3::Y, 3.0, 0.1, 0.0, 0.0);
        let eye = camera.eye();
        assert!((eye - Vec3::new(3.0, 0.0, 0.0)).length() < EPS);
    }

    #[test]
    fn quarter_turn_moves_the_eye_to_positive_z() {
        let mut camera = test_camera();
        camera.rotate_azimuth(FRAC_PI_2);
        assert!((camera.azimuth_angle() - FRAC_PI_2).abs() < EPS);
        let eye = camera.eye();
        assert!(
            (eye - Vec3::new(0.0, 0.0, 2.0)).length() < EPS,
            "eye was {eye}"
        );
    }

    #[test]
    fn huge_polar_overshoot_clamps_instead_of_wrapping() {
        let mut camera = test_camera();
        camera.rotate_polar(10.0);
        assert!((camera.polar_angle() - (FRAC_PI_2 - 0.001)).abs() < EPS);
    }

    #[test]
    fn negative_azimuth_wraps_to_the_top_of_the_range() {
        let mut camera = test_camera();
        camera.rotate_azimuth(-0.1);
        assert!((camera.azimuth_angle() - (TAU - 0.1)).abs() < EPS);
    }

    #[test]
    fn initial_angles_are_stored_verbatim() {
        // Construction performs no normalization; only mutations do.
        let camera =
            ArcballCamera::new(Vec3::ZERO, Vec3::Y, 2.0, 0.1, -PI, PI);
        assert_eq!(camera.azimuth_angle(), -PI);
        assert_eq!(camera.polar_angle(), PI);
    }

    #[test]
    fn view_vector_is_unit_length_and_points_at_center() {
        let center = Vec3::new(0.5, 0.5, 0.5);
        let mut camera =
            ArcballCamera::new(center, Vec3::Y, 4.0, 0.1, 0.8, 0.3);
        camera.rotate_azimuth(1.1);
        let view = camera.normalized_view_vector();
        assert!((view.length() - 1.0).abs() < EPS);
        let expected = (center - camera.eye()).normalize();
        assert!((view - expected).length() < EPS);
    }

    #[test]
    fn view_matrix_maps_the_center_onto_the_view_axis() {
        let camera =
            ArcballCamera::new(Vec3::ZERO, Vec3::Y, 2.0, 0.1, 0.6, 0.4);
        let center_in_view =
            camera.view_matrix().transform_point3(camera.view_point());
        // Looking straight at the center: it sits on the -Z axis at
        // exactly radius distance.
        assert!(center_in_view.x.abs() < EPS);
        assert!(center_in_view.y.abs() < EPS);
        assert!((center_in_view.z + camera.radius()).abs() < 1e-4);
    }

    #[test]
    fn accessors_report_construction_parameters() {
        let camera = ArcballCamera::new(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::Y,
            7.0,
            0.5,
            0.1,
            0.2,
        );
        assert_eq!(camera.view_point(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(camera.up_vector(), Vec3::Y);
        assert_eq!(camera.radius(), 7.0);
        assert_eq!(camera.min_radius(), 0.5);
    }
}
