//! egui rendering of the vertical seek bar

pub mod geometry;
pub mod paint;
pub mod seek_bar;

pub use geometry::SeekBarGeometry;
pub use seek_bar::SeekBar;
