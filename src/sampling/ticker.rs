use crate::utils::error_handling::{create_runtime, panic_message, safe_lock};
use crate::utils::{Result, SeekBarError};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::MissedTickBehavior;

/// Callback used to wake the UI loop after a tick was queued
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// Periodic sampling clock.
///
/// Runs a tokio interval on a dedicated background thread and forwards each
/// tick to the owning (UI) thread over a channel. The ticker never touches
/// sampled values: the owner drains ticks with [`Ticker::drain`] and applies
/// them on its own thread, so buffered progress stays single-owner.
pub struct Ticker {
    interval: Duration,
    tick_rx: Receiver<()>,
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
    waker: Arc<Mutex<Option<Waker>>>,
    thread: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start ticking every `interval`. The first tick fires one full interval
    /// after this call.
    pub fn start(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(SeekBarError::InvalidValue {
                field: "sample_interval",
                reason: "interval must be greater than zero".to_string(),
            });
        }

        let rt = create_runtime()?;
        let (tick_tx, tick_rx) = channel::<()>();
        let shutdown = Arc::new(AtomicBool::new(false));
        let notify = Arc::new(Notify::new());
        let waker: Arc<Mutex<Option<Waker>>> = Arc::new(Mutex::new(None));

        let shutdown_clone = Arc::clone(&shutdown);
        let notify_clone = Arc::clone(&notify);
        let waker_clone = Arc::clone(&waker);

        let thread = std::thread::Builder::new()
            .name("vseekbar-ticker".to_string())
            .spawn(move || {
                rt.block_on(async move {
                    let start = tokio::time::Instant::now() + interval;
                    let mut ticks = tokio::time::interval_at(start, interval);
                    // A stalled thread delivers one tick, not a burst
                    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

                    loop {
                        tokio::select! {
                            _ = ticks.tick() => {
                                if shutdown_clone.load(Ordering::Acquire) {
                                    break;
                                }
                                if tick_tx.send(()).is_err() {
                                    log::debug!("[Ticker] Receiver dropped, stopping");
                                    break;
                                }
                                log::trace!("[Ticker] Tick");
                                wake(&waker_clone);
                            }
                            _ = notify_clone.notified() => {
                                break;
                            }
                        }
                    }
                });
                log::debug!("[Ticker] Sampling thread exited");
            })
            .map_err(SeekBarError::Thread)?;

        log::debug!("[Ticker] Started with interval {:?}", interval);

        Ok(Self {
            interval,
            tick_rx,
            shutdown,
            notify,
            waker,
            thread: Some(thread),
        })
    }

    /// Install the callback run after every tick (e.g. a repaint request)
    pub fn set_waker(&self, waker: Waker) {
        *safe_lock(&*self.waker, "Ticker") = Some(waker);
    }

    /// Number of ticks that fired since the last drain
    pub fn drain(&self) -> usize {
        self.tick_rx.try_iter().count()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Stop the timer thread and wait for it to exit. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if self.shutdown.swap(true, Ordering::AcqRel) {
            return;
        }
        // notify_one stores a permit if the loop is not parked on notified() yet
        self.notify.notify_one();
        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                log::error!("[Ticker] Sampling thread panicked");
            }
        }
        log::debug!("[Ticker] Stopped");
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn wake(waker: &Mutex<Option<Waker>>) {
    // Clone out so the callback runs without holding the lock
    let callback = safe_lock(waker, "Ticker").clone();
    if let Some(callback) = callback {
        if let Err(payload) = catch_unwind(AssertUnwindSafe(|| (*callback)())) {
            log::error!("[Ticker] Waker panicked: {}", panic_message(payload.as_ref()));
        }
    }
}
