/// Static stage: lighting, ground disc, and reference grid.
pub mod stage;
