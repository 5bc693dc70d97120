use crate::config::SeekBarConfig;
use crate::controller::{EmissionMode, ProgressController, ProgressListener};
use crate::widget::SeekBar;
use eframe::egui;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

/// Listener installed by the host window: logs what it receives and keeps the
/// last delivered value for the status line.
struct LoggingListener {
    last_delivered: Rc<Cell<Option<f32>>>,
    delivered: Rc<Cell<u64>>,
}

impl ProgressListener for LoggingListener {
    fn on_progress(&mut self, progress: f32) {
        log::info!("[Progress] {:.1}", progress);
        self.last_delivered.set(Some(progress));
        self.delivered.set(self.delivered.get() + 1);
    }

    fn on_progress_number(&mut self, progress: f32) {
        log::debug!("[Progress] raw {:.2}", progress);
    }
}

pub struct SeekBarApp {
    controller: ProgressController,
    config: SeekBarConfig,
    last_delivered: Rc<Cell<Option<f32>>>,
    delivered: Rc<Cell<u64>>,
    is_shutting_down: bool,
}

impl SeekBarApp {
    /// Build the app without a window (no repaint waker)
    pub fn from_config(config: SeekBarConfig) -> Self {
        let last_delivered = Rc::new(Cell::new(None));
        let delivered = Rc::new(Cell::new(0));

        let mut controller = ProgressController::with_progress(config.initial_progress);
        controller.set_listener(LoggingListener {
            last_delivered: Rc::clone(&last_delivered),
            delivered: Rc::clone(&delivered),
        });

        if config.sampling_enabled {
            // Without a timer the controller simply stays in direct mode
            if let Err(e) = controller.enable_sampling(config.sample_interval()) {
                log::error!("[SeekBarApp] Sampling unavailable, delivering directly: {}", e);
            }
        }

        Self {
            controller,
            config,
            last_delivered,
            delivered,
            is_shutting_down: false,
        }
    }

    pub fn new(cc: &eframe::CreationContext<'_>, config: SeekBarConfig) -> Self {
        let app = Self::from_config(config);
        let ctx = cc.egui_ctx.clone();
        app.controller.set_waker(Arc::new(move || ctx.request_repaint()));
        app
    }

    pub fn controller(&self) -> &ProgressController {
        &self.controller
    }

    pub fn last_delivered(&self) -> Option<f32> {
        self.last_delivered.get()
    }

    /// Ctrl+Up / Ctrl+Down nudge the value from outside the drag path
    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let (up, down) = ctx.input(|i| {
            (
                i.modifiers.ctrl && i.key_pressed(egui::Key::ArrowUp),
                i.modifiers.ctrl && i.key_pressed(egui::Key::ArrowDown),
            )
        });
        if up {
            self.nudge(self.config.keyboard_step);
        }
        if down {
            self.nudge(-self.config.keyboard_step);
        }
    }

    /// External override: moves the bar but sends no notification
    pub fn nudge(&mut self, step: f32) {
        let target = self.controller.progress() + step;
        self.controller.set_progress(target);
    }

    fn shutdown(&mut self) {
        log::info!("[SeekBarApp] Shutting down, stopping sampling timer");
        self.controller.disable_sampling();
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let mode = match self.controller.mode() {
            EmissionMode::Direct => "direct".to_string(),
            EmissionMode::Sampled => format!(
                "sampled every {} ms",
                self.controller
                    .sample_interval()
                    .map_or(self.config.sample_interval_ms, |d| d.as_millis() as u64)
            ),
        };
        ui.label(egui::RichText::new(format!("{:.0}%", self.controller.progress())).size(28.0).strong());
        ui.label(format!("Mode: {}", mode));
        let delivered = match self.last_delivered.get() {
            Some(value) => format!(
                "Last delivered: {:.1} ({} total, {} skipped)",
                value,
                self.delivered.get(),
                self.controller.dropped_samples()
            ),
            None => "Last delivered: none".to_string(),
        };
        ui.label(delivered);
    }
}

impl eframe::App for SeekBarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) && !self.is_shutting_down {
            self.is_shutting_down = true;
            self.shutdown();
        }

        // Deliver sampled values on the UI thread
        self.controller.pump();

        self.handle_keyboard_shortcuts(ctx);

        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            ui.vertical_centered(|ui| self.render_status(ui));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let height = ui.available_height();
                ui.add(
                    SeekBar::new(&mut self.controller)
                        .height(height)
                        .thumb_size(self.config.thumb_size)
                        .arc_radius(self.config.arc_radius),
                );
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_config_starts_in_direct_mode() {
        let app = SeekBarApp::from_config(SeekBarConfig {
            sampling_enabled: false,
            initial_progress: 30.0,
            ..SeekBarConfig::default()
        });
        assert_eq!(app.controller().mode(), EmissionMode::Direct);
        assert_eq!(app.controller().progress(), 30.0);
    }

    #[test]
    fn sampled_config_arms_timer() {
        let app = SeekBarApp::from_config(SeekBarConfig::default());
        assert_eq!(app.controller().mode(), EmissionMode::Sampled);
        assert_eq!(
            app.controller().sample_interval(),
            Some(std::time::Duration::from_millis(500))
        );
    }

    #[test]
    fn nudge_moves_without_delivery() {
        let mut app = SeekBarApp::from_config(SeekBarConfig {
            sampling_enabled: false,
            initial_progress: 98.0,
            ..SeekBarConfig::default()
        });
        app.nudge(5.0);
        assert_eq!(app.controller().progress(), 100.0);
        app.nudge(-40.0);
        assert_eq!(app.controller().progress(), 60.0);
        assert_eq!(app.last_delivered(), None);
    }
}
