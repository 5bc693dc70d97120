use crate::constants::*;
use egui::{pos2, Pos2, Rect};

/// Resolved layout of the seek bar for one frame.
///
/// Pure function of the allocated rect and the current progress so it can be
/// checked without a painter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekBarGeometry {
    pub background_line: Rect,
    pub foreground_line: Rect,
    pub thumb_center: Pos2,
    pub thumb_radius: f32,
    pub arc_radius: f32,
    /// Clockwise sweep of the progress arc, starting at 12 o'clock
    pub arc_sweep_degrees: f32,
    pub thumb_rotation_degrees: f32,
}

impl SeekBarGeometry {
    pub fn compute(rect: Rect, progress: f32, thumb_size: f32, arc_radius: f32) -> Self {
        let progress = progress.clamp(PROGRESS_MIN, PROGRESS_MAX);
        let fraction = progress / PROGRESS_MAX;
        let center_x = rect.center().x;

        // Small rects shrink the top padding instead of inverting the track
        let top_padding = TRACK_TOP_PADDING.min(rect.height() * 0.25);
        let track_top = rect.top() + top_padding;
        let track_bottom = (rect.bottom() - thumb_size / 2.0).max(track_top);
        let track_length = track_bottom - track_top;
        let fill_top = track_bottom - fraction * track_length;

        let background_line = Rect::from_min_max(
            pos2(center_x - BACKGROUND_LINE_WIDTH / 2.0, track_top),
            pos2(center_x + BACKGROUND_LINE_WIDTH / 2.0, track_bottom),
        );
        let foreground_line = Rect::from_min_max(
            pos2(center_x - FOREGROUND_LINE_WIDTH / 2.0, fill_top),
            pos2(center_x + FOREGROUND_LINE_WIDTH / 2.0, track_bottom),
        );

        Self {
            background_line,
            foreground_line,
            thumb_center: pos2(center_x, fill_top),
            thumb_radius: thumb_size / 2.0,
            arc_radius,
            arc_sweep_degrees: fraction * 360.0,
            thumb_rotation_degrees: progress * THUMB_ROTATION_DEGREES_PER_PERCENT,
        }
    }

    pub fn track_length(&self) -> f32 {
        self.background_line.height()
    }

    pub fn arc_points(&self) -> Vec<Pos2> {
        arc_points(
            self.thumb_center,
            self.arc_radius,
            ARC_START_DEGREES,
            self.arc_sweep_degrees,
            ARC_SEGMENTS,
        )
    }
}

/// Polyline approximating a clockwise arc (screen y grows downward).
///
/// `segments` is the resolution of a full circle; partial arcs get a
/// proportional share. Returns no points for a non-positive sweep.
pub fn arc_points(
    center: Pos2,
    radius: f32,
    start_degrees: f32,
    sweep_degrees: f32,
    segments: usize,
) -> Vec<Pos2> {
    if sweep_degrees <= 0.0 || radius <= 0.0 {
        return Vec::new();
    }
    let sweep = sweep_degrees.min(360.0);
    let steps = ((segments as f32 * sweep / 360.0).ceil() as usize).max(1);

    (0..=steps)
        .map(|i| {
            let angle = (start_degrees + sweep * i as f32 / steps as f32).to_radians();
            pos2(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Rotate `point` around `pivot` by `degrees` clockwise on screen
pub fn rotate_about(point: Pos2, pivot: Pos2, degrees: f32) -> Pos2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let dx = point.x - pivot.x;
    let dy = point.y - pivot.y;
    pos2(pivot.x + dx * cos - dy * sin, pivot.y + dx * sin + dy * cos)
}
