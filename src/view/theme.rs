use raylib::prelude::*;

pub const BACKGROUND: Color = Color::new(253, 242, 246, 255);
pub const WARM_PINK: Color = Color::new(251, 207, 221, 255);
pub const SECONDARY: Color = Color::new(254, 236, 210, 255);
pub const PRIMARY: Color = Color::new(219, 39, 119, 255);
pub const CELEBRATION: Color = Color::new(236, 72, 153, 255);
pub const GOLDEN: Color = Color::new(234, 179, 8, 255);
pub const FOREGROUND: Color = Color::new(59, 29, 42, 255);
pub const MUTED: Color = Color::new(138, 107, 118, 255);
pub const MEDIA_BACKGROUND: Color = Color::new(244, 228, 234, 255);

pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
}
