use super::listener::ProgressListener;
use crate::constants::{PROGRESS_MAX, PROGRESS_MIN};
use crate::sampling::{Sampler, SamplerState, Ticker, Waker};
use crate::state::DragSession;
use crate::utils::error_handling::panic_message;
use crate::utils::Result;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Duration;

/// How progress changes reach the listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmissionMode {
    /// Every change is delivered synchronously
    Direct,
    /// Changes are buffered and the latest one is delivered once per tick
    Sampled,
}

/// Owns the seek bar's progress and turns vertical drags into progress changes.
///
/// Lives on the UI thread. In sampled mode the only cross-thread piece is the
/// [`Ticker`], which just reports that an interval elapsed; the buffered value
/// and the listener are touched from [`ProgressController::pump`] on the
/// owning thread.
pub struct ProgressController {
    progress: f32,
    session: Option<DragSession>,
    enabled: bool,
    redraw: bool,
    mode: EmissionMode,
    sampler: Sampler,
    ticker: Option<Ticker>,
    listener: Option<Box<dyn ProgressListener>>,
}

impl Default for ProgressController {
    fn default() -> Self {
        Self {
            progress: PROGRESS_MIN,
            session: None,
            enabled: true,
            redraw: false,
            mode: EmissionMode::Direct,
            sampler: Sampler::new(),
            ticker: None,
            listener: None,
        }
    }
}

impl ProgressController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller starting at `progress` (clamped)
    pub fn with_progress(progress: f32) -> Self {
        let mut controller = Self::default();
        controller.progress = clamp_progress(progress).unwrap_or(PROGRESS_MIN);
        controller
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn mode(&self) -> EmissionMode {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// A disabled controller still swallows drags but never moves
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.session = None;
        }
    }

    pub fn set_listener(&mut self, listener: impl ProgressListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// External override of the current value. Redraws but does not notify,
    /// so a host reacting to outside state cannot loop back into itself.
    pub fn set_progress(&mut self, progress: f32) {
        match clamp_progress(progress) {
            Some(value) => {
                self.progress = value;
                self.redraw = true;
            }
            None => log::warn!("[ProgressController] Ignoring non-finite progress {}", progress),
        }
    }

    /// Returns true once after any change that needs a repaint
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    // === Drag input ===

    pub fn on_drag_start(&mut self, y: f32) {
        if !self.enabled || !y.is_finite() {
            return;
        }
        self.session = Some(DragSession::start(y));
    }

    /// Apply a pointer move. Returns the progress after the move.
    ///
    /// A move to the current reference coordinate is not a change and
    /// notifies nobody.
    pub fn on_drag_move(&mut self, y: f32, view_height: f32) -> f32 {
        if !self.enabled {
            return self.progress;
        }
        if !y.is_finite() || !view_height.is_finite() || view_height <= 0.0 {
            log::debug!(
                "[ProgressController] Ignoring move y={} height={}",
                y,
                view_height
            );
            return self.progress;
        }
        let Some(session) = self.session.as_mut() else {
            return self.progress;
        };
        // Hosts repaint while a pointer is held still; that is not a change
        if session.reference_y() == y {
            return self.progress;
        }

        let delta = session.advance(y, view_height);
        self.progress = (self.progress + delta).clamp(PROGRESS_MIN, PROGRESS_MAX);
        self.redraw = true;
        self.emit(self.progress);
        self.progress
    }

    pub fn on_drag_end(&mut self) {
        self.session = None;
    }

    pub fn on_drag_cancel(&mut self) {
        self.session = None;
    }

    // === Emission ===

    /// Arm sampled mode with an internal timer firing every `interval`.
    ///
    /// Replaces any previous timer. On failure the controller stays in its
    /// current mode.
    pub fn enable_sampling(&mut self, interval: Duration) -> Result<()> {
        let ticker = Ticker::start(interval)?;
        if let Some(mut old) = self.ticker.replace(ticker) {
            old.stop();
        }
        self.mode = EmissionMode::Sampled;
        log::info!("[ProgressController] Sampling enabled every {:?}", interval);
        Ok(())
    }

    /// Arm sampled mode without an internal timer; the host calls
    /// [`ProgressController::on_sample_tick`] from its own clock.
    pub fn enable_external_sampling(&mut self) {
        if let Some(mut old) = self.ticker.take() {
            old.stop();
        }
        self.mode = EmissionMode::Sampled;
    }

    /// Back to direct mode. A value still waiting for a tick is dropped.
    pub fn disable_sampling(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.stop();
        }
        self.sampler.clear();
        if self.mode == EmissionMode::Sampled {
            log::info!("[ProgressController] Sampling disabled");
        }
        self.mode = EmissionMode::Direct;
    }

    /// Callback run on the timer thread after each tick
    pub fn set_waker(&self, waker: Waker) {
        if let Some(ticker) = &self.ticker {
            ticker.set_waker(waker);
        }
    }

    pub fn sample_interval(&self) -> Option<Duration> {
        self.ticker.as_ref().map(Ticker::interval)
    }

    pub fn sampler_state(&self) -> SamplerState {
        self.sampler.state()
    }

    /// Sampled values overwritten before a tick could deliver them
    pub fn dropped_samples(&self) -> u64 {
        self.sampler.dropped()
    }

    /// Apply ticks that fired since the last call. Call once per frame.
    pub fn pump(&mut self) {
        let ticks = match &self.ticker {
            Some(ticker) => ticker.drain(),
            None => return,
        };
        for _ in 0..ticks {
            self.on_sample_tick();
        }
    }

    /// The sampling timer fired: deliver the buffered value, if any
    pub fn on_sample_tick(&mut self) {
        if self.mode != EmissionMode::Sampled {
            return;
        }
        if let Some(value) = self.sampler.on_tick() {
            self.dispatch(value);
        }
    }

    fn emit(&mut self, value: f32) {
        self.dispatch_raw(value);
        match self.mode {
            EmissionMode::Direct => self.dispatch(value),
            EmissionMode::Sampled => self.sampler.record(value),
        }
    }

    fn dispatch(&mut self, value: f32) {
        let Some(listener) = self.listener.as_mut() else {
            return;
        };
        if let Err(payload) = catch_unwind(AssertUnwindSafe(|| listener.on_progress(value))) {
            log::error!(
                "[ProgressController] Listener panicked on {}: {}",
                value,
                panic_message(payload.as_ref())
            );
        }
    }

    fn dispatch_raw(&mut self, value: f32) {
        let Some(listener) = self.listener.as_mut() else {
            return;
        };
        if let Err(payload) =
            catch_unwind(AssertUnwindSafe(|| listener.on_progress_number(value)))
        {
            log::error!(
                "[ProgressController] Listener panicked on raw {}: {}",
                value,
                panic_message(payload.as_ref())
            );
        }
    }
}

impl Drop for ProgressController {
    fn drop(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.stop();
        }
    }
}

fn clamp_progress(value: f32) -> Option<f32> {
    if value.is_nan() {
        None
    } else {
        Some(value.clamp(PROGRESS_MIN, PROGRESS_MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn assert_values(seen: &[f32], expected: &[f32]) {
        assert_eq!(seen.len(), expected.len(), "seen {:?}, expected {:?}", seen, expected);
        for (got, want) in seen.iter().zip(expected) {
            assert!((got - want).abs() < 1e-3, "seen {:?}, expected {:?}", seen, expected);
        }
    }

    fn recording(controller: &mut ProgressController) -> Rc<RefCell<Vec<f32>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        controller.set_listener(move |value: f32| sink.borrow_mut().push(value));
        seen
    }

    #[test]
    fn full_height_up_adds_hundred() {
        let mut controller = ProgressController::new();
        controller.on_drag_start(400.0);
        assert_eq!(controller.on_drag_move(0.0, 400.0), 100.0);
    }

    #[test]
    fn full_height_down_subtracts_hundred() {
        let mut controller = ProgressController::with_progress(100.0);
        controller.on_drag_start(0.0);
        assert_eq!(controller.on_drag_move(250.0, 250.0), 0.0);
    }

    #[test]
    fn single_step_overshoot_clamps_to_max() {
        let mut controller = ProgressController::with_progress(50.0);
        controller.on_drag_start(300.0);
        // 120% of the height upward
        assert_eq!(controller.on_drag_move(60.0, 200.0), 100.0);
    }

    #[test]
    fn overshoot_below_zero_clamps_to_min() {
        let mut controller = ProgressController::with_progress(20.0);
        controller.on_drag_start(0.0);
        assert_eq!(controller.on_drag_move(1000.0, 100.0), 0.0);
    }

    #[test]
    fn progress_stays_in_range_for_mixed_moves() {
        let mut controller = ProgressController::with_progress(50.0);
        controller.on_drag_start(500.0);
        let mut y = 500.0;
        for step in [-730.0, 90.0, 1200.0, -15.0, -2000.0, 333.0, 7.5, -64.0] {
            y += step;
            let progress = controller.on_drag_move(y, 480.0);
            assert!((PROGRESS_MIN..=PROGRESS_MAX).contains(&progress));
        }
    }

    #[test]
    fn drag_start_does_not_change_progress() {
        let mut controller = ProgressController::with_progress(33.0);
        let seen = recording(&mut controller);
        controller.on_drag_start(120.0);
        assert_eq!(controller.progress(), 33.0);
        assert!(seen.borrow().is_empty());
        assert!(!controller.take_redraw());
    }

    #[test]
    fn move_without_session_is_ignored() {
        let mut controller = ProgressController::with_progress(10.0);
        assert_eq!(controller.on_drag_move(0.0, 100.0), 10.0);
        controller.on_drag_start(100.0);
        controller.on_drag_end();
        assert_eq!(controller.on_drag_move(0.0, 100.0), 10.0);
    }

    #[test]
    fn repeated_position_is_not_a_change() {
        let mut controller = ProgressController::new();
        let seen = recording(&mut controller);
        controller.enable_external_sampling();
        controller.on_drag_start(100.0);
        controller.on_drag_move(80.0, 100.0);
        controller.on_sample_tick();
        assert!(controller.take_redraw());

        for _ in 0..3 {
            controller.on_drag_move(80.0, 100.0);
            controller.on_sample_tick();
        }
        assert_values(&seen.borrow(), &[20.0]);
        assert!(!controller.take_redraw());
        assert_eq!(controller.sampler_state(), SamplerState::Idle);
    }

    #[test]
    fn dropped_samples_count_overwritten_values() {
        let mut controller = ProgressController::new();
        controller.enable_external_sampling();
        controller.on_drag_start(100.0);
        controller.on_drag_move(90.0, 100.0);
        controller.on_drag_move(80.0, 100.0);
        controller.on_drag_move(70.0, 100.0);
        assert_eq!(controller.dropped_samples(), 2);
    }

    #[test]
    fn zero_height_is_ignored() {
        let mut controller = ProgressController::with_progress(10.0);
        controller.on_drag_start(100.0);
        assert_eq!(controller.on_drag_move(0.0, 0.0), 10.0);
        assert_eq!(controller.on_drag_move(f32::NAN, 100.0), 10.0);
        // Session survives ignored moves
        assert_eq!(controller.on_drag_move(90.0, 100.0), 20.0);
    }

    #[test]
    fn disabled_controller_swallows_drags() {
        let mut controller = ProgressController::with_progress(40.0);
        let seen = recording(&mut controller);
        controller.set_enabled(false);
        controller.on_drag_start(100.0);
        assert_eq!(controller.on_drag_move(0.0, 100.0), 40.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn direct_mode_notifies_every_move() {
        let mut controller = ProgressController::new();
        let seen = recording(&mut controller);
        controller.on_drag_start(100.0);
        controller.on_drag_move(90.0, 100.0);
        controller.on_drag_move(80.0, 100.0);
        controller.on_drag_move(85.0, 100.0);
        assert_values(&seen.borrow(), &[10.0, 20.0, 15.0]);
        assert!(controller.take_redraw());
        assert!(!controller.take_redraw());
    }

    #[test]
    fn set_progress_redraws_without_notifying() {
        let mut controller = ProgressController::new();
        let seen = recording(&mut controller);
        controller.set_progress(75.0);
        assert_eq!(controller.progress(), 75.0);
        assert!(controller.take_redraw());

        controller.enable_external_sampling();
        controller.set_progress(20.0);
        controller.on_sample_tick();
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn set_progress_clamps_and_rejects_nan() {
        let mut controller = ProgressController::with_progress(5.0);
        controller.set_progress(250.0);
        assert_eq!(controller.progress(), 100.0);
        controller.set_progress(-3.0);
        assert_eq!(controller.progress(), 0.0);
        controller.set_progress(f32::NAN);
        assert_eq!(controller.progress(), 0.0);
        controller.set_progress(f32::INFINITY);
        assert_eq!(controller.progress(), 100.0);
    }

    #[test]
    fn sampled_mode_delivers_latest_once_per_tick() {
        let mut controller = ProgressController::new();
        let seen = recording(&mut controller);
        controller.enable_external_sampling();

        controller.on_drag_start(1000.0);
        controller.on_drag_move(900.0, 1000.0);
        controller.on_drag_move(800.0, 1000.0);
        controller.on_drag_move(700.0, 1000.0);
        assert!(seen.borrow().is_empty());
        assert_eq!(controller.sampler_state(), SamplerState::Pending(30.0));

        controller.on_sample_tick();
        assert_values(&seen.borrow(), &[30.0]);

        // Quiet interval
        controller.on_sample_tick();
        assert_values(&seen.borrow(), &[30.0]);
    }

    #[test]
    fn sampled_scenario_matches_timeline() {
        // Changes at t=0 (10), t=100 (40), t=600 (70); ticks at 500 and 1000
        let mut controller = ProgressController::new();
        let seen = recording(&mut controller);
        controller.enable_external_sampling();
        controller.on_drag_start(1000.0);

        controller.on_drag_move(900.0, 1000.0); // t=0 -> 10
        controller.on_drag_move(600.0, 1000.0); // t=100 -> 40
        controller.on_sample_tick(); // t=500
        controller.on_drag_move(300.0, 1000.0); // t=600 -> 70
        controller.on_sample_tick(); // t=1000

        assert_values(&seen.borrow(), &[40.0, 70.0]);
    }

    #[test]
    fn raw_listener_sees_every_change_in_sampled_mode() {
        struct Both {
            raw: Rc<RefCell<Vec<f32>>>,
            sampled: Rc<RefCell<Vec<f32>>>,
        }
        impl ProgressListener for Both {
            fn on_progress(&mut self, progress: f32) {
                self.sampled.borrow_mut().push(progress);
            }
            fn on_progress_number(&mut self, progress: f32) {
                self.raw.borrow_mut().push(progress);
            }
        }

        let raw = Rc::new(RefCell::new(Vec::new()));
        let sampled = Rc::new(RefCell::new(Vec::new()));
        let mut controller = ProgressController::new();
        controller.set_listener(Both {
            raw: Rc::clone(&raw),
            sampled: Rc::clone(&sampled),
        });
        controller.enable_external_sampling();

        controller.on_drag_start(100.0);
        controller.on_drag_move(95.0, 100.0);
        controller.on_drag_move(90.0, 100.0);
        controller.on_sample_tick();

        assert_values(&raw.borrow(), &[5.0, 10.0]);
        assert_values(&sampled.borrow(), &[10.0]);
    }

    #[test]
    fn panicking_listener_does_not_stop_sampling() {
        let mut controller = ProgressController::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        controller.set_listener(move |value: f32| {
            if value < 20.0 {
                panic!("consumer failed");
            }
            sink.borrow_mut().push(value);
        });
        controller.enable_external_sampling();
        controller.on_drag_start(100.0);

        controller.on_drag_move(90.0, 100.0);
        controller.on_sample_tick();
        controller.on_drag_move(70.0, 100.0);
        controller.on_sample_tick();

        assert_values(&seen.borrow(), &[30.0]);
    }

    #[test]
    fn disable_sampling_returns_to_direct_and_drops_pending() {
        let mut controller = ProgressController::new();
        let seen = recording(&mut controller);
        controller.enable_external_sampling();
        controller.on_drag_start(100.0);
        controller.on_drag_move(50.0, 100.0);

        controller.disable_sampling();
        controller.disable_sampling();
        assert_eq!(controller.mode(), EmissionMode::Direct);
        controller.on_sample_tick();
        assert!(seen.borrow().is_empty());

        controller.on_drag_move(40.0, 100.0);
        assert_values(&seen.borrow(), &[60.0]);
    }

    #[test]
    fn enable_sampling_rejects_zero_interval() {
        let mut controller = ProgressController::new();
        assert!(controller.enable_sampling(Duration::ZERO).is_err());
        assert_eq!(controller.mode(), EmissionMode::Direct);
    }

    #[test]
    fn timer_driven_sampling_delivers_through_pump() {
        let mut controller = ProgressController::new();
        let seen = recording(&mut controller);
        controller
            .enable_sampling(Duration::from_millis(20))
            .unwrap();
        assert_eq!(controller.sample_interval(), Some(Duration::from_millis(20)));

        controller.on_drag_start(200.0);
        controller.on_drag_move(180.0, 200.0);
        controller.on_drag_move(150.0, 200.0);

        let deadline = std::time::Instant::now() + Duration::from_secs(2);
        while seen.borrow().is_empty() && std::time::Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
            controller.pump();
        }
        assert_values(&seen.borrow(), &[25.0]);
    }
}
