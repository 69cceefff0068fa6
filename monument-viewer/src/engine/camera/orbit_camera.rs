use bevy::input::mouse::MouseScrollUnit;
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};

use crate::constants::{
    INITIAL_DISTANCE, INITIAL_PITCH, INITIAL_YAW, INITIAL_ZOOM, ORBIT_DISTANCE_MAX_PER_ZOOM,
    ORBIT_DISTANCE_MIN_PER_ZOOM, PITCH_LIMIT, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP,
};

/// Viewport camera state: zoom factor plus orbit orientation and distance
/// around the monument's centre point.
///
/// The zoom factor is clamped to `[ZOOM_MIN, ZOOM_MAX]` and derives the
/// permissible orbit-distance range; the distance is re-clamped whenever the
/// zoom changes.
#[derive(Resource)]
pub struct OrbitCamera {
    pub zoom: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub focus: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            zoom: INITIAL_ZOOM,
            yaw: INITIAL_YAW,
            pitch: INITIAL_PITCH,
            distance: INITIAL_DISTANCE,
            focus: Vec3::ZERO,
        }
    }
}

impl OrbitCamera {
    /// Minimum orbit distance for the current zoom factor.
    pub fn min_distance(&self) -> f32 {
        ORBIT_DISTANCE_MIN_PER_ZOOM * self.zoom
    }

    /// Maximum orbit distance for the current zoom factor.
    pub fn max_distance(&self) -> f32 {
        ORBIT_DISTANCE_MAX_PER_ZOOM * self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Clamp and apply a zoom factor, keeping the orbit distance inside the
    /// new bounds.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
        self.distance = self.distance.clamp(self.min_distance(), self.max_distance());
    }

    /// Restore the initial framing: zoom exactly 1, default orientation and
    /// distance.
    pub fn reset(&mut self) {
        let initial = Self::default();
        self.zoom = initial.zoom;
        self.yaw = initial.yaw;
        self.pitch = initial.pitch;
        self.distance = initial.distance;
        self.focus = initial.focus;
    }

    /// Target camera position for the current orbit state.
    pub fn eye_position(&self) -> Vec3 {
        self.focus + self.orientation() * (Vec3::Z * self.distance)
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    fn dolly(&mut self, amount: f32) {
        let dolly_speed = (self.distance * 0.2).clamp(0.1, 5.0);
        self.distance = (self.distance - amount * dolly_speed)
            .clamp(self.min_distance(), self.max_distance());
    }
}

/// Drive the viewport camera from mouse input and ease the transform toward
/// the orbit target each frame.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Left-drag rotates around the monument
    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        let yaw_sens = 0.0035;
        let pitch_sens = 0.0030;
        orbit.yaw += -mouse_delta.x * yaw_sens;
        orbit.pitch += -mouse_delta.y * pitch_sens;
        orbit.pitch = orbit.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    // Scroll wheel dollies within the zoom-derived distance bounds
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        orbit.dolly(scroll_accum);
    }

    let target_rot = orbit.orientation();
    let target_pos = orbit.eye_position();

    let lerp_speed = (12.0 * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target_pos, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target_rot, lerp_speed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_steps_and_clamp() {
        let mut camera = OrbitCamera::default();
        assert_eq!(camera.zoom, 1.0);

        camera.zoom_in();
        camera.zoom_in();
        assert_eq!(camera.zoom, 2.0);

        camera.zoom_out();
        assert_eq!(camera.zoom, 1.5);
    }

    #[test]
    fn zoom_is_idempotent_at_bounds() {
        let mut camera = OrbitCamera::default();
        for _ in 0..20 {
            camera.zoom_in();
        }
        assert_eq!(camera.zoom, ZOOM_MAX);
        camera.zoom_in();
        assert_eq!(camera.zoom, ZOOM_MAX);

        for _ in 0..20 {
            camera.zoom_out();
        }
        assert_eq!(camera.zoom, ZOOM_MIN);
        camera.zoom_out();
        assert_eq!(camera.zoom, ZOOM_MIN);
    }

    #[test]
    fn zoom_stays_bounded_for_any_sequence() {
        let mut camera = OrbitCamera::default();
        let steps: [i32; 7] = [3, -7, 12, -1, 5, -20, 9];
        for step in steps {
            for _ in 0..step.abs() {
                if step > 0 {
                    camera.zoom_in();
                } else {
                    camera.zoom_out();
                }
            }
            assert!(camera.zoom >= ZOOM_MIN && camera.zoom <= ZOOM_MAX);
        }
    }

    #[test]
    fn set_zoom_clamps_slider_input() {
        let mut camera = OrbitCamera::default();
        camera.set_zoom(99.0);
        assert_eq!(camera.zoom, ZOOM_MAX);
        camera.set_zoom(-3.0);
        assert_eq!(camera.zoom, ZOOM_MIN);
        camera.set_zoom(2.25);
        assert_eq!(camera.zoom, 2.25);
    }

    #[test]
    fn distance_bounds_follow_zoom() {
        let mut camera = OrbitCamera::default();
        for _ in 0..8 {
            camera.zoom_in();
            assert_eq!(camera.min_distance(), 2.0 * camera.zoom);
            assert_eq!(camera.max_distance(), 10.0 * camera.zoom);
            assert!(camera.distance >= camera.min_distance());
            assert!(camera.distance <= camera.max_distance());
        }
    }

    #[test]
    fn reset_restores_initial_framing() {
        let mut camera = OrbitCamera::default();
        camera.zoom_in();
        camera.zoom_in();
        camera.yaw = 2.4;
        camera.pitch = -1.0;
        camera.distance = camera.max_distance();

        camera.reset();
        assert_eq!(camera.zoom, 1.0);
        assert_eq!(camera.yaw, INITIAL_YAW);
        assert_eq!(camera.pitch, INITIAL_PITCH);
        assert_eq!(camera.distance, INITIAL_DISTANCE);
    }

    #[test]
    fn dolly_respects_distance_bounds() {
        let mut camera = OrbitCamera::default();
        for _ in 0..100 {
            camera.dolly(10.0);
        }
        assert_eq!(camera.distance, camera.min_distance());
        for _ in 0..100 {
            camera.dolly(-10.0);
        }
        assert_eq!(camera.distance, camera.max_distance());
    }
}
