pub mod listener;
pub mod progress;

pub use listener::ProgressListener;
pub use progress::{EmissionMode, ProgressController};
