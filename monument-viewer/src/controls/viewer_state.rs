use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowMode};

/// Presentation flags for one viewer instance. The two flags are
/// independent; neither excludes the other.
#[derive(Resource, Default)]
pub struct ViewerState {
    /// Mirrors the window's actual mode, updated by `sync_fullscreen_flag`.
    pub fullscreen: bool,
    pub info_visible: bool,
}

impl ViewerState {
    /// Flip the info panel flag and return the new value.
    pub fn toggle_info(&mut self) -> bool {
        self.info_visible = !self.info_visible;
        self.info_visible
    }
}

/// Mirror the tracked fullscreen flag from the window's actual mode.
///
/// Requests go through the window; reading the result back here keeps the
/// flag truthful when the host denies the request or the mode changes
/// externally.
pub fn sync_fullscreen_flag(
    mut state: ResMut<ViewerState>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let actual = !matches!(window.mode, WindowMode::Windowed);
    if state.fullscreen != actual {
        state.fullscreen = actual;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_info_pair_restores_original_value() {
        let mut state = ViewerState::default();
        assert!(!state.info_visible);

        assert!(state.toggle_info());
        assert!(!state.toggle_info());
        assert!(!state.info_visible);

        state.info_visible = true;
        state.toggle_info();
        state.toggle_info();
        assert!(state.info_visible);
    }

    #[test]
    fn flags_are_independent() {
        let mut state = ViewerState::default();
        state.fullscreen = true;
        state.toggle_info();
        assert!(state.fullscreen);
        assert!(state.info_visible);
    }
}
