//! Vertical volume seek bar for egui.
//!
//! A [`ProgressController`] turns vertical drags into a percentage in
//! `[0, 100]` and notifies a [`ProgressListener`], either on every change or
//! sampled at a fixed interval so a slow consumer sees at most one value per
//! tick. [`SeekBar`] is the egui widget that feeds it pointer events and
//! paints the track, thumb and progress arc.

pub mod app;
pub mod config;
pub mod constants;
pub mod controller;
pub mod sampling;
pub mod state;
pub mod utils;
pub mod widget;

pub use config::SeekBarConfig;
pub use controller::{EmissionMode, ProgressController, ProgressListener};
pub use sampling::{Sampler, SamplerState, Ticker};
pub use utils::{Result, SeekBarError};
pub use widget::SeekBar;
