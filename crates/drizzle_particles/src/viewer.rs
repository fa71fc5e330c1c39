//! Camera position helpers.

use glam::{Mat4, Vec3};

/// World-space eye position of a view matrix.
///
/// The view matrix maps world to eye space, so the eye sits at the
/// translation of its inverse.
#[must_use]
pub fn viewer_position_from_view(view: &Mat4) -> Vec3 {
    view.inverse().w_axis.truncate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_look_at_round_trip() {
        let eye = Vec3::new(0.0, 2.0, 5.0);
        let view = Mat4::look_at_rh(eye, Vec3::new(0.0, 1.0, -7.0), Vec3::Y);

        let recovered = viewer_position_from_view(&view);
        assert!(recovered.abs_diff_eq(eye, 1e-4));
    }

    #[test]
    fn test_identity_view_is_origin() {
        assert_eq!(viewer_position_from_view(&Mat4::IDENTITY), Vec3::ZERO);
    }
}
