//! Viewer interaction layer.
//!
//! All mutations of viewer state flow through one event type:
//!
//! ```text
//! UI buttons / keyboard / RPC
//!   └─> ViewerCommandEvent
//!       └─> handle_viewer_commands()
//!           ├─> OrbitCamera (zoom clamp, reset)
//!           ├─> ViewerState (info panel flag)
//!           ├─> Window mode (fullscreen request)
//!           └─> SelectMonumentEvent (asset loader)
//! ```
//!
//! The fullscreen flag is never set by the command handler; it is mirrored
//! from the window's actual mode each frame, so a denied fullscreen request
//! simply leaves the flag unchanged.

/// Command enum, event plumbing, and native keyboard shortcuts.
pub mod command;

/// Presentation flags (fullscreen, info panel) and the fullscreen sync system.
pub mod viewer_state;
