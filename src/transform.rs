use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Rotation and zoom applied to the slide currently on screen.
///
/// Rotation accumulates in quarter turns and is never reduced modulo 360.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub rotation_degrees: i32,
    pub zoom: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self { rotation_degrees: 0, zoom: 1.0 }
    }
}

impl Transform {
    pub fn rotated(self, direction: RotateDirection) -> Self {
        let delta = match direction {
            RotateDirection::Right => ROTATION_STEP,
            RotateDirection::Left => -ROTATION_STEP,
        };
        // Past the i32 range the rotation stays put so it remains a multiple of 90
        let rotation_degrees = self.rotation_degrees.checked_add(delta).unwrap_or(self.rotation_degrees);
        Self { rotation_degrees, ..self }
    }

    pub fn zoomed(self, direction: ZoomDirection) -> Self {
        let zoom = match direction {
            ZoomDirection::In => self.zoom * ZOOM_STEP,
            ZoomDirection::Out => self.zoom / ZOOM_STEP,
        };
        Self { zoom: zoom.clamp(ZOOM_MIN, ZOOM_MAX), ..self }
    }

    pub fn reset() -> Self {
        Self::default()
    }

    /// True when the slide is turned sideways, i.e. an odd number of quarter turns.
    pub fn is_sideways(&self) -> bool {
        (self.rotation_degrees / ROTATION_STEP) % 2 != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rotation_accumulates_without_normalizing() {
        let mut t = Transform::default();
        for _ in 0..5 {
            t = t.rotated(RotateDirection::Right);
        }
        for _ in 0..2 {
            t = t.rotated(RotateDirection::Left);
        }
        assert_eq!(t.rotation_degrees, 270);

        for _ in 0..3 {
            t = t.rotated(RotateDirection::Right);
        }
        assert_eq!(t.rotation_degrees, 540);
    }

    #[test]
    fn rotation_goes_negative() {
        let t = Transform::default()
            .rotated(RotateDirection::Left)
            .rotated(RotateDirection::Left);
        assert_eq!(t.rotation_degrees, -180);
        assert!(!t.is_sideways());
        assert!(t.rotated(RotateDirection::Left).is_sideways());
    }

    #[test]
    fn rotation_at_integer_limit_stays_quarter_turn() {
        let edge = (i32::MAX / ROTATION_STEP) * ROTATION_STEP;
        let t = Transform { rotation_degrees: edge, zoom: 1.0 }.rotated(RotateDirection::Right);
        assert_eq!(t.rotation_degrees, edge);
        assert_eq!(t.rotation_degrees % ROTATION_STEP, 0);

        let low = (i32::MIN / ROTATION_STEP) * ROTATION_STEP;
        let t = Transform { rotation_degrees: low, zoom: 1.0 }.rotated(RotateDirection::Left);
        assert_eq!(t.rotation_degrees, low);
    }

    #[test]
    fn zoom_in_clamps_at_max() {
        let mut t = Transform::default();
        for _ in 0..20 {
            t = t.zoomed(ZoomDirection::In);
        }
        assert_eq!(t.zoom, 3.0);
    }

    #[test]
    fn zoom_out_clamps_at_min() {
        let mut t = Transform { rotation_degrees: 0, zoom: 3.0 };
        for _ in 0..20 {
            t = t.zoomed(ZoomDirection::Out);
        }
        assert_eq!(t.zoom, 0.5);
    }

    #[test]
    fn single_zoom_step_scales_by_factor() {
        let t = Transform::default().zoomed(ZoomDirection::In);
        assert!((t.zoom - 1.2).abs() < 1e-6);
        let t = t.zoomed(ZoomDirection::Out);
        assert!((t.zoom - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zoom_leaves_rotation_alone() {
        let t = Transform::default()
            .rotated(RotateDirection::Right)
            .zoomed(ZoomDirection::In);
        assert_eq!(t.rotation_degrees, 90);
    }

    #[test]
    fn reset_restores_identity() {
        assert_eq!(Transform::reset(), Transform { rotation_degrees: 0, zoom: 1.0 });
    }

    proptest! {
        #[test]
        fn zoom_always_within_bounds(steps in prop::collection::vec(any::<bool>(), 0..100)) {
            let mut t = Transform::default();
            for zoom_in in steps {
                let direction = if zoom_in { ZoomDirection::In } else { ZoomDirection::Out };
                t = t.zoomed(direction);
                prop_assert!(t.zoom >= ZOOM_MIN && t.zoom <= ZOOM_MAX);
            }
        }
    }
}
