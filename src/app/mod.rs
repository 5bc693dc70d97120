pub mod demo_app;

pub use demo_app::SeekBarApp;
