use glam::{Mat4, Vec3};

/// Transform state for one drawable object: translation, rotation, and a
/// scroll-driven uniform scale, kept as separate matrices so callers can
/// compose them in any order.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Height normalization value uploaded to shaders.
    pub max_value: f32,
    scale_strength: f32,
    min_scale_strength: f32,
    scroll_speed: f32,
    translation: Mat4,
    rotation: Mat4,
    scaling: Mat4,
}

impl Model {
    /// Create a model with identity translation/rotation and the given
    /// initial uniform scale. The initial scale is stored as-is; the
    /// minimum only applies to later scroll adjustments.
    pub fn new(
        max_value: f32,
        scale_strength: f32,
        min_scale_strength: f32,
        scroll_speed: f32,
    ) -> Self {
        Self {
            max_value,
            scale_strength,
            min_scale_strength,
            scroll_speed,
            translation: Mat4::IDENTITY,
            rotation: Mat4::IDENTITY,
            scaling: Mat4::from_scale(Vec3::splat(scale_strength)),
        }
    }

    /// Post-multiply the translation matrix by a translation of `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        self.translation *= Mat4::from_translation(offset);
    }

    /// Post-multiply the rotation matrix by a rotation of `radians` around
    /// `axis`.
    pub fn rotate(&mut self, radians: f32, axis: Vec3) {
        self.rotation *= Mat4::from_axis_angle(axis, radians);
    }

    /// Adjust the uniform scale from a scroll-wheel offset.
    ///
    /// The change is `offset · scroll_speed`, and the resulting scale never
    /// falls below the minimum supplied at construction.
    pub fn scale_scroll(&mut self, offset: f32) {
        self.scale_strength = (self.scale_strength
            + offset * self.scroll_speed)
            .max(self.min_scale_strength);
        self.scaling = Mat4::from_scale(Vec3::splat(self.scale_strength));
    }

    /// Full model matrix: `translation · rotation · scaling`.
    pub fn matrix(&self) -> Mat4 {
        self.translation * self.rotation * self.scaling
    }

    /// Current uniform scale factor.
    pub fn scale_strength(&self) -> f32 {
        self.scale_strength
    }

    /// The translation component on its own.
    pub fn translation_matrix(&self) -> Mat4 {
        self.translation
    }

    /// The rotation component on its own.
    pub fn rotation_matrix(&self) -> Mat4 {
        self.rotation
    }

    /// The scaling component on its own.
    pub fn scaling_matrix(&self) -> Mat4 {
        self.scaling
    }
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec3};

    use super::Model;

    const EPS: f32 = 1e-5;

    fn mat_close(a: Mat4, b: Mat4) -> bool {
        a.to_cols_array()
            .iter()
            .zip(b.to_cols_array().iter())
            .all(|(x, y)| (x - y).abs() < EPS)
    }

    #[test]
    fn new_model_composes_to_its_initial_scale() {
        let model = Model::new(8.0, 1.5, 1.0, 0.01);
        let expected = Mat4::from_scale(Vec3::splat(1.5));
        assert!(mat_close(model.matrix(), expected));
    }

    #[test]
    fn translate_moves_a_transformed_point() {
        let mut model = Model::new(1.0, 1.0, 1.0, 0.01);
        model.translate(Vec3::new(1.0, 2.0, 3.0));
        let moved = model.matrix().transform_point3(Vec3::ZERO);
        assert!((moved - Vec3::new(1.0, 2.0, 3.0)).length() < EPS);
    }

    #[test]
    fn translations_accumulate() {
        let mut model = Model::new(1.0, 1.0, 1.0, 0.01);
        model.translate(Vec3::X);
        model.translate(Vec3::new(0.0, 2.0, 0.0));
        let moved = model.matrix().transform_point3(Vec3::ZERO);
        assert!((moved - Vec3::new(1.0, 2.0, 0.0)).length() < EPS);
    }

    #[test]
    fn rotation_turns_the_x_axis_toward_negative_z() {
        let mut model = Model::new(1.0, 1.0, 1.0, 0.01);
        model.rotate(std::f32::consts::FRAC_PI_2, Vec3::Y);
        let rotated = model.matrix().transform_vector3(Vec3::X);
        assert!((rotated - Vec3::new(0.0, 0.0, -1.0)).length() < EPS);
    }

    #[test]
    fn scroll_up_grows_the_scale() {
        let mut model = Model::new(1.0, 1.5, 1.0, 0.01);
        model.scale_scroll(10.0);
        assert!((model.scale_strength() - 1.6).abs() < EPS);
    }

    #[test]
    fn scroll_down_clamps_at_the_minimum() {
        let mut model = Model::new(1.0, 1.1, 1.0, 0.01);
        model.scale_scroll(-1000.0);
        assert_eq!(model.scale_strength(), 1.0);
        // Further scrolling down stays pinned.
        model.scale_scroll(-1.0);
        assert_eq!(model.scale_strength(), 1.0);
    }

    #[test]
    fn scroll_updates_the_scaling_matrix() {
        let mut model = Model::new(1.0, 1.0, 1.0, 0.5);
        model.scale_scroll(2.0);
        let expected = Mat4::from_scale(Vec3::splat(2.0));
        assert!(mat_close(model.scaling_matrix(), expected));
    }

    #[test]
    fn matrix_applies_scale_then_rotation_then_translation() {
        let mut model = Model::new(1.0, 2.0, 1.0, 0.01);
        model.translate(Vec3::new(0.0, 0.0, 5.0));
        model.rotate(std::f32::consts::FRAC_PI_2, Vec3::Y);
        // x=1 is scaled to 2, rotated onto -z, then translated by +5z.
        let point = model.matrix().transform_point3(Vec3::X);
        assert!((point - Vec3::new(0.0, 0.0, 3.0)).length() < EPS);
    }

    #[test]
    fn component_accessors_stay_independent() {
        let mut model = Model::new(1.0, 1.0, 1.0, 0.01);
        model.translate(Vec3::X);
        assert!(mat_close(model.rotation_matrix(), Mat4::IDENTITY));
        assert!(mat_close(model.scaling_matrix(), Mat4::IDENTITY));
        assert!(mat_close(
            model.translation_matrix(),
            Mat4::from_translation(Vec3::X)
        ));
    }
}
