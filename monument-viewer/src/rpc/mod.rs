//! JSON-RPC 2.0 communication layer for the embedding page.
//!
//! On the web the viewer runs in an iframe; the surrounding site drives it
//! and receives progress through `window.postMessage`. Standard JSON-RPC
//! 2.0 envelopes are used in both directions:
//!
//! ```text
//! Site (parent window)  <──postMessage──>  Viewer (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │ <───────────────── Response (with ID) ─┤
//!        │ <────────── Notification (no ID) ──────┤
//! ```
//!
//! ## Requests
//!
//! - `viewer.select_monument {id}` — load a catalog entry
//! - `viewer.zoom_in` / `viewer.zoom_out` / `viewer.set_zoom {zoom}`
//! - `viewer.reset_view`
//! - `viewer.toggle_info` / `viewer.toggle_fullscreen`
//! - `catalog.list` — monument records for the site's navigation
//! - `viewer.get_fps`
//!
//! ## Notifications out
//!
//! - `viewer.load_progress {id, percent, stages}`
//! - `viewer.monument_loaded {id}` / `viewer.load_failed {id, reason}`
//! - `fps_update {fps}`
//!
//! Unknown methods answer `-32601`, bad parameters `-32602`. On native
//! builds the bridge is a no-op sink and keyboard shortcuts drive the
//! viewer instead.

/// JSON-RPC envelope types, request routing, and the postMessage plumbing.
pub mod web_rpc;
