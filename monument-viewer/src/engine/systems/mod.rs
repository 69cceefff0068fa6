/// FPS readout and periodic frame-rate notifications to the page.
pub mod fps_tracking;
