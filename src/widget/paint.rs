use super::geometry::{rotate_about, SeekBarGeometry};
use crate::constants::*;
use egui::{pos2, vec2, Color32, Painter, Shape, Stroke};

fn rgb((r, g, b): (u8, u8, u8)) -> Color32 {
    Color32::from_rgb(r, g, b)
}

/// Paint the whole seek bar: track, progress fill, thumb, speaker and arc
pub fn paint_seek_bar(painter: &Painter, geometry: &SeekBarGeometry, enabled: bool) {
    paint_lines(painter, geometry, enabled);
    paint_thumb(painter, geometry);
    paint_speaker(painter, geometry);
    paint_progress_arc(painter, geometry);
}

fn paint_lines(painter: &Painter, geometry: &SeekBarGeometry, enabled: bool) {
    painter.rect_filled(geometry.background_line, 2.0, rgb(BACKGROUND_LINE_RGB));

    let fill = if enabled {
        rgb(FOREGROUND_LINE_RGB)
    } else {
        rgb(FOREGROUND_LINE_RGB).gamma_multiply(0.4)
    };
    if geometry.foreground_line.height() > 0.0 {
        painter.rect_filled(geometry.foreground_line, 4.0, fill);
    }
}

/// Thumb wheel with notches that turn with progress
fn paint_thumb(painter: &Painter, geometry: &SeekBarGeometry) {
    let center = geometry.thumb_center;
    let radius = geometry.thumb_radius;
    painter.circle_filled(center, radius, rgb(THUMB_RGB));
    painter.circle_stroke(center, radius, Stroke::new(1.5, rgb(BACKGROUND_LINE_RGB)));

    let notch_outer = radius - 4.0;
    let notch_inner = radius - 12.0;
    for i in 0..THUMB_NOTCH_COUNT {
        let angle = geometry.thumb_rotation_degrees + i as f32 * 360.0 / THUMB_NOTCH_COUNT as f32;
        let outer = rotate_about(pos2(center.x, center.y - notch_outer), center, angle);
        let inner = rotate_about(pos2(center.x, center.y - notch_inner), center, angle);
        painter.line_segment([inner, outer], Stroke::new(2.0, rgb(FOREGROUND_LINE_RGB)));
    }
}

/// Speaker glyph centred on the thumb; it follows the thumb but does not rotate
fn paint_speaker(painter: &Painter, geometry: &SeekBarGeometry) {
    let c = geometry.thumb_center;
    let unit = SPEAKER_GLYPH_SIZE / 8.0;
    let color = Color32::WHITE;

    let body = vec![
        pos2(c.x - 3.0 * unit, c.y - unit),
        pos2(c.x - 1.5 * unit, c.y - unit),
        pos2(c.x + 0.5 * unit, c.y - 2.5 * unit),
        pos2(c.x + 0.5 * unit, c.y + 2.5 * unit),
        pos2(c.x - 1.5 * unit, c.y + unit),
        pos2(c.x - 3.0 * unit, c.y + unit),
    ];
    painter.add(Shape::convex_polygon(body, color, Stroke::NONE));

    let wave = pos2(c.x + 0.5 * unit, c.y);
    for (radius, sweep) in [(1.5 * unit, 80.0), (2.6 * unit, 90.0)] {
        let points = super::geometry::arc_points(wave, radius, -sweep / 2.0, sweep, 24);
        painter.add(Shape::line(points, Stroke::new(1.5, color)));
    }
}

fn paint_progress_arc(painter: &Painter, geometry: &SeekBarGeometry) {
    let points = geometry.arc_points();
    if points.len() < 2 {
        return;
    }

    let (r, g, b, a) = ARC_SHADOW_RGBA;
    let shadow: Vec<_> = points.iter().map(|p| *p + vec2(2.0, 2.0)).collect();
    painter.add(Shape::line(
        shadow,
        Stroke::new(ARC_STROKE_WIDTH + 2.0, Color32::from_rgba_unmultiplied(r, g, b, a)),
    ));
    painter.add(Shape::line(points, Stroke::new(ARC_STROKE_WIDTH, rgb(ARC_RGB))));
}
