//! # rapport-render
//!
//! Renders analysis results as strings. Nothing here writes to the console;
//! the caller decides where output goes.

pub mod canvas;
pub mod friendships;
pub mod graph;
pub mod matrix;
pub mod population;

pub use friendships::render_friendships;
