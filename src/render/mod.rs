//! 2D canvas rendering
//!
//! Drawing is a pure function of simulation state: the scene functions take
//! `&Surface` and a state reference and never mutate game data. Draw order
//! only matters for occlusion.

pub mod scene;
pub mod surface;

pub use surface::Surface;
