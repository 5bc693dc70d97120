/// Observer of seek bar progress.
///
/// `on_progress` is the delivery point that honours the controller's emission
/// mode (every change in direct mode, one value per tick in sampled mode).
/// `on_progress_number` sees every raw drag change regardless of mode, for
/// cheap consumers such as a numeric readout.
pub trait ProgressListener {
    fn on_progress(&mut self, progress: f32);

    fn on_progress_number(&mut self, _progress: f32) {}
}

impl<F> ProgressListener for F
where
    F: FnMut(f32),
{
    fn on_progress(&mut self, progress: f32) {
        self(progress)
    }
}
