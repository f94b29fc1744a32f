use std::time::Duration;

pub const DEFAULT_WIDTH: i32 = 1280;          // Initial window width
pub const DEFAULT_HEIGHT: i32 = 800;          // Initial window height
pub const FPS: u32 = 60;                      // Frames per second

pub const MEDIA_COUNT: u32 = 64;              // Photos in the presentation
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(4000);

pub const ZOOM_STEP: f32 = 1.2;               // Factor applied per zoom in/out
pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 3.0;
pub const ROTATION_STEP: i32 = 90;            // Degrees per rotate click

pub const TRANSFORM_DURATION: f32 = 0.3;      // Rotate/zoom animation (seconds)
pub const PROGRESS_DURATION: f32 = 0.5;       // Progress bar fill animation (seconds)
