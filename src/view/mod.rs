pub mod animation;
pub mod decorations;
pub mod format;
pub mod icons;
pub mod layout;
pub mod theme;

use raylib::prelude::*;

use crate::constants::*;
use crate::media::MediaItem;
use crate::state::PresentationState;
use crate::view::animation::Animated;
use crate::view::decorations::{Decorations, Ornament};
use crate::view::layout::{center, fit_within, Control, Layout, Size};
use crate::view::theme::*;

/// What a single frame needs to draw.
pub struct Frame<'a> {
    pub layout: &'a Layout,
    pub state: &'a PresentationState,
    pub item: &'a MediaItem,
    pub texture: Option<&'a Texture2D>,
    pub hovered: Option<Control>,
}

/// Renders the presentation. Holds only drawing state (animations and
/// ornaments); everything it shows comes from [`PresentationState`].
pub struct View {
    name: String,
    rotation: Animated,
    zoom: Animated,
    progress: Animated,
    welcome_decorations: Decorations,
    decorations: Decorations,
}

impl View {
    pub fn new(name: impl Into<String>, state: &PresentationState) -> Self {
        Self {
            name: name.into(),
            rotation: Animated::new(state.transform.rotation_degrees as f32, TRANSFORM_DURATION),
            zoom: Animated::new(state.transform.zoom, TRANSFORM_DURATION),
            progress: Animated::new(
                format::progress_fraction(state.current_index, state.item_count()),
                PROGRESS_DURATION,
            ),
            welcome_decorations: Decorations::welcome(),
            decorations: Decorations::slideshow(),
        }
    }

    pub fn update(&mut self, dt: f32, state: &PresentationState) {
        self.rotation.set(state.transform.rotation_degrees as f32);
        self.zoom.set(state.transform.zoom);
        self.progress
            .set(format::progress_fraction(state.current_index, state.item_count()));

        self.rotation.update(dt);
        self.zoom.update(dt);
        self.progress.update(dt);
        self.welcome_decorations.update(dt);
        self.decorations.update(dt);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, frame: &Frame) {
        if frame.state.is_welcome_shown {
            self.draw_welcome(d, frame);
            return;
        }

        draw_backdrop(d, &frame.layout.screen, 0.4);
        self.draw_header(d, frame);
        self.draw_card(d, frame);
        draw_navigation(d, frame);
        draw_toolbar(d, frame);
        self.draw_footer(d, frame);
        draw_ornaments(d, &self.decorations, &frame.layout.screen);

        if frame.state.is_fullscreen_shown() {
            draw_overlay(d, frame);
        }
        if let Some(control) = frame.hovered {
            draw_tooltip(d, frame.layout, control);
        }
    }

    fn draw_welcome(&self, d: &mut RaylibDrawHandle, frame: &Frame) {
        let layout = frame.layout;
        draw_backdrop(d, &layout.screen, 1.0);

        let card = layout.welcome_card;
        d.draw_rectangle_rounded(card, 0.08, 12, Color::WHITE);
        d.draw_rectangle_lines_ex(card, 2.0, with_alpha(PRIMARY, 0.25));

        let cx = card.x + card.width * 0.5;
        text_centered(d, "¡Feliz Cumpleaños!", cx, card.y + 48.0, 56, CELEBRATION);
        text_centered(d, &self.name, cx, card.y + 120.0, 44, GOLDEN);
        text_centered(
            d,
            "Una celebración de momentos preciosos y recuerdos invaluables.",
            cx,
            card.y + 200.0,
            20,
            with_alpha(FOREGROUND, 0.8),
        );
        text_centered(
            d,
            "Disfruta de esta presentación especial creada con mucho amor.",
            cx,
            card.y + 228.0,
            20,
            with_alpha(FOREGROUND, 0.8),
        );

        let hovered = frame.hovered == Some(Control::Start);
        let start = layout.start_button;
        let fill = if hovered { CELEBRATION } else { PRIMARY };
        d.draw_rectangle_rounded(start, 0.3, 12, fill);
        let label = "Comenzar Presentación";
        let label_width = measure_text(label, 22) as f32;
        let content = label_width + 28.0;
        let left = start.x + (start.width - content) * 0.5;
        let mid_y = start.y + start.height * 0.5;
        icons::play(d, Vector2::new(left + 10.0, mid_y), 18.0, Color::WHITE);
        d.draw_text(label, (left + 28.0) as i32, (mid_y - 11.0) as i32, 22, Color::WHITE);

        text_centered(
            d,
            "Usa las flechas izquierda/derecha o la barra espaciadora para navegar",
            cx,
            start.y + start.height + 24.0,
            16,
            MUTED,
        );

        draw_ornaments(d, &self.welcome_decorations, &card);
    }

    fn draw_header(&self, d: &mut RaylibDrawHandle, frame: &Frame) {
        let layout = frame.layout;
        let header = layout.header;
        d.draw_rectangle_rec(header, with_alpha(Color::WHITE, 0.8));
        d.draw_rectangle_rec(
            Rectangle::new(header.x, header.y + header.height - 1.0, header.width, 1.0),
            with_alpha(PRIMARY, 0.2),
        );

        let bob = (self.decorations.time() * 2.0).sin() * 3.0;
        icons::heart(d, Vector2::new(44.0, header.height * 0.5 + bob), 32.0, CELEBRATION);
        d.draw_text(&format::header_title(&self.name), 76, 16, 28, CELEBRATION);
        d.draw_text(&format::counter(frame.state, frame.item), 76, 50, 16, MUTED);

        let playing = frame.state.is_playing;
        outline_button(d, &layout.play_button, frame.hovered == Some(Control::PlayPause));
        let icon_center = Vector2::new(layout.play_button.x + 22.0, layout.play_button.y + 18.0);
        if playing {
            icons::pause(d, icon_center, 16.0, FOREGROUND);
        } else {
            icons::play(d, icon_center, 16.0, FOREGROUND);
        }
        d.draw_text(
            format::playback_label(playing),
            (layout.play_button.x + 38.0) as i32,
            (layout.play_button.y + 9.0) as i32,
            18,
            FOREGROUND,
        );

        outline_button(d, &layout.home_button, frame.hovered == Some(Control::Home));
        let c = center(&layout.home_button);
        text_centered(d, "Inicio", c.x, c.y - 9.0, 18, FOREGROUND);
    }

    fn draw_card(&self, d: &mut RaylibDrawHandle, frame: &Frame) {
        let card = frame.layout.card;
        d.draw_rectangle_rec(card, MEDIA_BACKGROUND);

        match frame.texture {
            Some(texture) if !frame.state.has_failed(frame.item.id) => {
                self.draw_slide(d, &card, texture);
            }
            _ => draw_placeholder(d, &card, frame.item, frame.state.has_failed(frame.item.id)),
        }

        // Caption overlay fading up from the bottom edge
        let caption = frame.layout.caption;
        d.draw_rectangle_gradient_v(
            caption.x as i32,
            caption.y as i32,
            caption.width as i32,
            caption.height as i32,
            with_alpha(Color::BLACK, 0.0),
            with_alpha(Color::BLACK, 0.6),
        );
        d.draw_text(
            frame.item.caption(),
            (caption.x + 24.0) as i32,
            (caption.y + 22.0) as i32,
            22,
            Color::WHITE,
        );
        d.draw_text(
            &frame.item.subtitle(),
            (caption.x + 24.0) as i32,
            (caption.y + 50.0) as i32,
            16,
            with_alpha(Color::WHITE, 0.8),
        );

        d.draw_rectangle_lines_ex(card, 2.0, with_alpha(PRIMARY, 0.3));
    }

    fn draw_slide(&self, d: &mut RaylibDrawHandle, card: &Rectangle, texture: &Texture2D) {
        let size = Size::new(texture.width() as f32, texture.height() as f32);
        let fitted = fit_within(size, card);
        let zoom = self.zoom.value();
        let (w, h) = (fitted.width * zoom, fitted.height * zoom);
        let c = center(card);

        let mut clipped = d.begin_scissor_mode(
            card.x as i32,
            card.y as i32,
            card.width as i32,
            card.height as i32,
        );
        clipped.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, size.width, size.height),
            Rectangle::new(c.x, c.y, w, h),
            Vector2::new(w * 0.5, h * 0.5),
            self.rotation.value(),
            Color::WHITE,
        );
    }

    fn draw_footer(&self, d: &mut RaylibDrawHandle, frame: &Frame) {
        let footer = frame.layout.footer;
        d.draw_rectangle_rec(footer, with_alpha(Color::WHITE, 0.8));
        d.draw_rectangle_rec(
            Rectangle::new(footer.x, footer.y, footer.width, 1.0),
            with_alpha(PRIMARY, 0.2),
        );

        let track = frame.layout.progress_track;
        d.draw_text(
            "Progreso de la presentación",
            track.x as i32,
            (footer.y + 18.0) as i32,
            16,
            FOREGROUND,
        );
        let percent = format!(
            "{}%",
            format::progress_percent(frame.state.current_index, frame.state.item_count())
        );
        let percent_width = measure_text(&percent, 16) as f32;
        d.draw_text(
            &percent,
            (track.x + track.width - percent_width) as i32,
            (footer.y + 18.0) as i32,
            16,
            MUTED,
        );

        d.draw_rectangle_rounded(track, 1.0, 8, SECONDARY);
        let fill = Rectangle::new(
            track.x,
            track.y,
            track.width * self.progress.value().clamp(0.0, 1.0),
            track.height,
        );
        d.draw_rectangle_gradient_h(
            fill.x as i32,
            fill.y as i32,
            fill.width as i32,
            fill.height as i32,
            PRIMARY,
            CELEBRATION,
        );
    }
}

fn text_centered(d: &mut impl RaylibDraw, text: &str, cx: f32, y: f32, size: i32, color: Color) {
    let width = measure_text(text, size) as f32;
    d.draw_text(text, (cx - width * 0.5) as i32, y as i32, size, color);
}

fn draw_backdrop(d: &mut RaylibDrawHandle, screen: &Rectangle, strength: f32) {
    let bottom = blend(SECONDARY, WARM_PINK, 1.0 - strength * 0.5);
    d.draw_rectangle_gradient_v(
        screen.x as i32,
        screen.y as i32,
        screen.width as i32,
        screen.height as i32,
        BACKGROUND,
        bottom,
    );
}

fn blend(a: Color, b: Color, t: f32) -> Color {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b), 255)
}

fn outline_button(d: &mut RaylibDrawHandle, rec: &Rectangle, hovered: bool) {
    let fill = if hovered { with_alpha(PRIMARY, 0.1) } else { Color::WHITE };
    d.draw_rectangle_rounded(*rec, 0.25, 8, fill);
    d.draw_rectangle_lines_ex(*rec, 1.0, with_alpha(PRIMARY, 0.3));
}

fn draw_placeholder(d: &mut RaylibDrawHandle, card: &Rectangle, item: &MediaItem, failed: bool) {
    let c = center(card);
    if !failed {
        // Still loading
        icons::heart(d, c, 40.0, with_alpha(PRIMARY, 0.3));
        return;
    }

    let badge = Vector2::new(c.x, c.y - 90.0);
    d.draw_circle_v(badge, 48.0, with_alpha(PRIMARY, 0.2));
    icons::heart(d, badge, 48.0, PRIMARY);
    text_centered(d, item.caption(), c.x, c.y - 20.0, 26, FOREGROUND);
    text_centered(d, &format::placeholder_source(item), c.x, c.y + 20.0, 18, MUTED);
    text_centered(
        d,
        "(Coloca la imagen en la carpeta public del proyecto)",
        c.x,
        c.y + 48.0,
        16,
        MUTED,
    );
}

fn draw_navigation(d: &mut RaylibDrawHandle, frame: &Frame) {
    let layout = frame.layout;
    for (rec, control, direction) in [
        (layout.prev_button, Control::Previous, -1.0),
        (layout.next_button, Control::Next, 1.0),
    ] {
        let hovered = frame.hovered == Some(control);
        let fill = if hovered { blend(Color::WHITE, PRIMARY, 0.1) } else { with_alpha(Color::WHITE, 0.9) };
        d.draw_rectangle_rounded(rec, 0.3, 8, fill);
        d.draw_rectangle_lines_ex(rec, 1.0, with_alpha(PRIMARY, 0.3));
        icons::chevron(d, center(&rec), 22.0, direction, FOREGROUND);
    }
}

fn draw_toolbar(d: &mut RaylibDrawHandle, frame: &Frame) {
    let layout = frame.layout;
    d.draw_rectangle_rounded(layout.toolbar, 0.2, 8, with_alpha(Color::BLACK, 0.4));

    let tools = [
        (layout.rotate_left, Control::RotateLeft),
        (layout.rotate_right, Control::RotateRight),
        (layout.zoom_out, Control::ZoomOut),
        (layout.zoom_in, Control::ZoomIn),
        (layout.reset, Control::Reset),
    ];
    for (rec, control) in tools {
        if frame.hovered == Some(control) {
            d.draw_rectangle_rounded(rec, 0.2, 8, with_alpha(Color::WHITE, 0.2));
        }
        let c = center(&rec);
        match control {
            Control::RotateLeft => icons::rotate(d, c, 18.0, false, Color::WHITE),
            Control::RotateRight => icons::rotate(d, c, 18.0, true, Color::WHITE),
            Control::ZoomOut => icons::magnifier(d, c, 18.0, false, Color::WHITE),
            Control::ZoomIn => icons::magnifier(d, c, 18.0, true, Color::WHITE),
            _ => text_centered(d, "Reset", c.x, c.y - 6.0, 12, Color::WHITE),
        }
    }

    // Divider between rotation and zoom
    let x = layout.rotate_right.x + layout.rotate_right.width + 5.0;
    d.draw_rectangle_rec(
        Rectangle::new(x, layout.rotate_right.y + 6.0, 1.0, layout.rotate_right.height - 12.0),
        with_alpha(Color::WHITE, 0.3),
    );
}

fn draw_overlay(d: &mut RaylibDrawHandle, frame: &Frame) {
    let layout = frame.layout;
    d.draw_rectangle_rec(layout.screen, with_alpha(Color::BLACK, 0.95));

    if let Some(texture) = frame.texture {
        let size = Size::new(texture.width() as f32, texture.height() as f32);
        let dest = layout.overlay_image(size);
        d.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, size.width, size.height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    let close = layout.close_button;
    let alpha = if frame.hovered == Some(Control::CloseOverlay) { 0.8 } else { 0.6 };
    d.draw_circle_v(center(&close), close.width * 0.5, with_alpha(Color::BLACK, alpha));
    icons::close(d, center(&close), 28.0, Color::WHITE);
}

fn draw_tooltip(d: &mut RaylibDrawHandle, layout: &Layout, control: Control) {
    let Some(text) = control.tooltip() else {
        return;
    };
    let anchor = match control {
        Control::RotateLeft => layout.rotate_left,
        Control::RotateRight => layout.rotate_right,
        Control::ZoomOut => layout.zoom_out,
        Control::ZoomIn => layout.zoom_in,
        Control::Reset => layout.reset,
        _ => layout.close_button,
    };
    let width = measure_text(text, 14) as f32 + 16.0;
    let x = (anchor.x + anchor.width * 0.5 - width * 0.5)
        .min(layout.screen.width - width - 4.0)
        .max(4.0);
    let bubble = Rectangle::new(x, anchor.y + anchor.height + 6.0, width, 24.0);
    d.draw_rectangle_rounded(bubble, 0.3, 8, with_alpha(FOREGROUND, 0.9));
    d.draw_text(text, (bubble.x + 8.0) as i32, (bubble.y + 5.0) as i32, 14, Color::WHITE);
}

fn draw_ornaments(d: &mut RaylibDrawHandle, decorations: &Decorations, bounds: &Rectangle) {
    let time = decorations.time();
    for ornament in &decorations.items {
        let position = ornament.position(bounds, time);
        let color = with_alpha(ornament.color, ornament.color.a as f32 / 255.0 * ornament.opacity(time));
        match ornament.ornament {
            Ornament::Heart => icons::heart(d, position, ornament.size, color),
            Ornament::Sparkle => icons::sparkle(d, position, ornament.size, color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        assert_eq!(blend(Color::BLACK, Color::WHITE, 0.0), Color::BLACK);
        assert_eq!(blend(Color::BLACK, Color::WHITE, 1.0), Color::WHITE);
        assert_eq!(blend(Color::BLACK, Color::WHITE, 0.5).r, 128);
    }
}
