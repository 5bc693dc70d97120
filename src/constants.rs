//! Widget constants and default configuration values

// === Sampling ===
pub const DEFAULT_SAMPLE_INTERVAL_MILLIS: u64 = 500;

// === Progress ===
pub const PROGRESS_MIN: f32 = 0.0;
pub const PROGRESS_MAX: f32 = 100.0;
pub const KEYBOARD_PROGRESS_STEP: f32 = 5.0;

// === Seek bar layout ===
pub const SEEK_BAR_WIDTH: f32 = 140.0;
pub const THUMB_SIZE: f32 = 110.0;
pub const ARC_RADIUS: f32 = 36.0; // Slightly larger than the speaker glyph
pub const SPEAKER_GLYPH_SIZE: f32 = 52.0;
pub const TRACK_TOP_PADDING: f32 = 100.0;
pub const BACKGROUND_LINE_WIDTH: f32 = 4.0;
pub const FOREGROUND_LINE_WIDTH: f32 = 8.0;
pub const ARC_STROKE_WIDTH: f32 = 2.0;
pub const ARC_SEGMENTS: usize = 64;
pub const THUMB_NOTCH_COUNT: usize = 12;
pub const THUMB_ROTATION_DEGREES_PER_PERCENT: f32 = 10.0;
pub const ARC_START_DEGREES: f32 = -90.0; // 12 o'clock

// === Colors ===
pub const BACKGROUND_LINE_RGB: (u8, u8, u8) = (61, 82, 89);
pub const FOREGROUND_LINE_RGB: (u8, u8, u8) = (90, 189, 220);
pub const THUMB_RGB: (u8, u8, u8) = (40, 52, 58);
pub const ARC_RGB: (u8, u8, u8) = (255, 255, 255);
pub const ARC_SHADOW_RGBA: (u8, u8, u8, u8) = (255, 0, 0, 90);

// === Host window ===
pub const APP_WIDTH: f32 = 320.0;
pub const APP_HEIGHT: f32 = 720.0;

// === Config ===
pub const CONFIG_DIR_NAME: &str = "vseekbar";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const ENV_CONFIG_PATH: &str = "VSEEKBAR_CONFIG";
pub const ENV_SAMPLE_INTERVAL_MS: &str = "VSEEKBAR_SAMPLE_INTERVAL_MS";
pub const ENV_SAMPLING: &str = "VSEEKBAR_SAMPLING";
