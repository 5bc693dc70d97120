use super::geometry::SeekBarGeometry;
use super::paint::paint_seek_bar;
use crate::constants::*;
use crate::controller::ProgressController;
use egui::{vec2, Response, Sense, Ui, Vec2, Widget, WidgetInfo};

/// Vertical volume seek bar bound to a [`ProgressController`].
///
/// Drag up to raise, down to lower. The widget only forwards pointer events
/// and paints; progress, clamping and notifications belong to the controller.
///
/// ```ignore
/// ui.add(SeekBar::new(&mut self.controller).height(ui.available_height()));
/// ```
pub struct SeekBar<'a> {
    controller: &'a mut ProgressController,
    size: Option<Vec2>,
    thumb_size: f32,
    arc_radius: f32,
}

impl<'a> SeekBar<'a> {
    pub fn new(controller: &'a mut ProgressController) -> Self {
        Self {
            controller,
            size: None,
            thumb_size: THUMB_SIZE,
            arc_radius: ARC_RADIUS,
        }
    }

    pub fn height(mut self, height: f32) -> Self {
        let width = self.size.map_or(SEEK_BAR_WIDTH, |s| s.x);
        self.size = Some(vec2(width, height));
        self
    }

    pub fn size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }

    pub fn thumb_size(mut self, thumb_size: f32) -> Self {
        self.thumb_size = thumb_size;
        self
    }

    pub fn arc_radius(mut self, arc_radius: f32) -> Self {
        self.arc_radius = arc_radius;
        self
    }
}

impl Widget for SeekBar<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let size = self
            .size
            .unwrap_or_else(|| vec2(SEEK_BAR_WIDTH, ui.available_height()));
        let (rect, mut response) = ui.allocate_exact_size(size, Sense::drag());
        let controller = self.controller;

        if response.drag_started() {
            // Anchor at the press point so the drag threshold distance counts
            let origin = ui
                .input(|i| i.pointer.press_origin())
                .or_else(|| response.interact_pointer_pos());
            if let Some(origin) = origin {
                controller.on_drag_start(origin.y);
            }
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                controller.on_drag_move(pos.y, rect.height());
            }
        }
        if response.drag_stopped() {
            controller.on_drag_end();
        }

        if controller.take_redraw() {
            response.mark_changed();
        }

        let enabled = controller.is_enabled() && ui.is_enabled();
        let progress = controller.progress();
        response.widget_info(|| {
            WidgetInfo::slider(enabled, f64::from(progress), "Volume")
        });

        if ui.is_rect_visible(rect) {
            let geometry = SeekBarGeometry::compute(rect, progress, self.thumb_size, self.arc_radius);
            paint_seek_bar(ui.painter(), &geometry, enabled);
        }

        response
    }
}
