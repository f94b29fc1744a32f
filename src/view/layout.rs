use raylib::prelude::*;

use crate::state::{Event, PresentationState};
use crate::transform::{RotateDirection, Transform, ZoomDirection};

pub const HEADER_HEIGHT: f32 = 80.0;
pub const FOOTER_HEIGHT: f32 = 80.0;
const PADDING: f32 = 24.0;
const CARD_MAX_WIDTH: f32 = 1024.0;
const CARD_ASPECT: f32 = 16.0 / 10.0;
const NAV_BUTTON: f32 = 48.0;
const TOOL_BUTTON: f32 = 36.0;
const TOOL_GAP: f32 = 4.0;
const TOOL_DIVIDER: f32 = 12.0;
const RESET_WIDTH: f32 = 60.0;
const CLOSE_BUTTON: f32 = 48.0;
const WELCOME_WIDTH: f32 = 672.0;
const WELCOME_HEIGHT: f32 = 460.0;

/// Everything on screen that reacts to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Start,
    PlayPause,
    Home,
    Previous,
    Next,
    RotateLeft,
    RotateRight,
    ZoomOut,
    ZoomIn,
    Reset,
    Image,
    CloseOverlay,
    OverlayImage,
    Backdrop,
}

impl Control {
    pub fn event(self) -> Option<Event> {
        match self {
            Control::Start => Some(Event::Start),
            Control::PlayPause => Some(Event::TogglePlayback),
            Control::Home => Some(Event::ShowWelcome),
            Control::Previous => Some(Event::Retreat),
            Control::Next => Some(Event::Advance),
            Control::RotateLeft => Some(Event::Rotate(RotateDirection::Left)),
            Control::RotateRight => Some(Event::Rotate(RotateDirection::Right)),
            Control::ZoomOut => Some(Event::Zoom(ZoomDirection::Out)),
            Control::ZoomIn => Some(Event::Zoom(ZoomDirection::In)),
            Control::Reset => Some(Event::ResetTransform),
            Control::Image => Some(Event::OpenFullscreen),
            Control::CloseOverlay | Control::Backdrop => Some(Event::CloseFullscreen),
            // Swallowed so it never reaches the backdrop
            Control::OverlayImage => None,
        }
    }

    pub fn tooltip(self) -> Option<&'static str> {
        match self {
            Control::RotateLeft => Some("Rotar izquierda"),
            Control::RotateRight => Some("Rotar derecha"),
            Control::ZoomOut => Some("Alejar"),
            Control::ZoomIn => Some("Acercar"),
            Control::Reset => Some("Resetear"),
            Control::CloseOverlay => Some("Cerrar pantalla completa"),
            _ => None,
        }
    }
}

/// Width and height of a texture, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

pub fn contains(rec: &Rectangle, point: Vector2) -> bool {
    point.x >= rec.x
        && point.x < rec.x + rec.width
        && point.y >= rec.y
        && point.y < rec.y + rec.height
}

pub fn center(rec: &Rectangle) -> Vector2 {
    Vector2::new(rec.x + rec.width * 0.5, rec.y + rec.height * 0.5)
}

/// Scales `size` down to fit inside `bounds`, never up.
pub fn fit_within(size: Size, bounds: &Rectangle) -> Size {
    if size.width <= 0.0 || size.height <= 0.0 {
        return Size::new(0.0, 0.0);
    }
    let scale = (bounds.width / size.width)
        .min(bounds.height / size.height)
        .min(1.0);
    Size::new(size.width * scale, size.height * scale)
}

/// Screen regions for the current window size.
#[derive(Debug, Clone)]
pub struct Layout {
    pub screen: Rectangle,
    pub header: Rectangle,
    pub play_button: Rectangle,
    pub home_button: Rectangle,
    pub card: Rectangle,
    pub caption: Rectangle,
    pub prev_button: Rectangle,
    pub next_button: Rectangle,
    pub toolbar: Rectangle,
    pub rotate_left: Rectangle,
    pub rotate_right: Rectangle,
    pub zoom_out: Rectangle,
    pub zoom_in: Rectangle,
    pub reset: Rectangle,
    pub footer: Rectangle,
    pub progress_track: Rectangle,
    pub close_button: Rectangle,
    pub welcome_card: Rectangle,
    pub start_button: Rectangle,
}

impl Layout {
    pub fn compute(width: f32, height: f32) -> Self {
        let screen = Rectangle::new(0.0, 0.0, width, height);

        let header = Rectangle::new(0.0, 0.0, width, HEADER_HEIGHT);
        let home_button = Rectangle::new(width - PADDING - 100.0, 22.0, 100.0, 36.0);
        let play_button = Rectangle::new(home_button.x - 12.0 - 150.0, 22.0, 150.0, 36.0);

        let footer = Rectangle::new(0.0, height - FOOTER_HEIGHT, width, FOOTER_HEIGHT);
        let progress_track = Rectangle::new(
            PADDING,
            footer.y + 48.0,
            (width - PADDING * 2.0).max(0.0),
            8.0,
        );

        // 16:10 card, as large as the space between header and footer allows
        let area_width = (width - PADDING * 2.0).max(0.0);
        let area_height = (height - HEADER_HEIGHT - FOOTER_HEIGHT - PADDING * 2.0).max(0.0);
        let mut card_width = area_width.min(CARD_MAX_WIDTH);
        let mut card_height = card_width / CARD_ASPECT;
        if card_height > area_height {
            card_height = area_height;
            card_width = card_height * CARD_ASPECT;
        }
        let card = Rectangle::new(
            (width - card_width) * 0.5,
            HEADER_HEIGHT + PADDING + (area_height - card_height) * 0.5,
            card_width,
            card_height,
        );
        let caption_height = 80.0_f32.min(card.height);
        let caption = Rectangle::new(card.x, card.y + card.height - caption_height, card.width, caption_height);

        let nav_y = card.y + (card.height - NAV_BUTTON) * 0.5;
        let prev_button = Rectangle::new(card.x + 16.0, nav_y, NAV_BUTTON, NAV_BUTTON);
        let next_button = Rectangle::new(card.x + card.width - 16.0 - NAV_BUTTON, nav_y, NAV_BUTTON, NAV_BUTTON);

        let toolbar_width =
            4.0 * TOOL_BUTTON + 3.0 * TOOL_GAP + TOOL_DIVIDER + RESET_WIDTH + 16.0;
        let toolbar = Rectangle::new(
            card.x + card.width - 16.0 - toolbar_width,
            card.y + 16.0,
            toolbar_width,
            TOOL_BUTTON + 16.0,
        );
        let tool_y = toolbar.y + 8.0;
        let mut x = toolbar.x + 8.0;
        let mut next_tool = |w: f32, gap: f32| {
            let rec = Rectangle::new(x, tool_y, w, TOOL_BUTTON);
            x += w + gap;
            rec
        };
        let rotate_left = next_tool(TOOL_BUTTON, TOOL_GAP);
        let rotate_right = next_tool(TOOL_BUTTON, TOOL_DIVIDER);
        let zoom_out = next_tool(TOOL_BUTTON, TOOL_GAP);
        let zoom_in = next_tool(TOOL_BUTTON, TOOL_GAP);
        let reset = next_tool(RESET_WIDTH, 0.0);

        let close_button = Rectangle::new(width - 32.0 - CLOSE_BUTTON, 32.0, CLOSE_BUTTON, CLOSE_BUTTON);

        let welcome_width = WELCOME_WIDTH.min(width - PADDING * 2.0).max(0.0);
        let welcome_card = Rectangle::new(
            (width - welcome_width) * 0.5,
            ((height - WELCOME_HEIGHT) * 0.5).max(0.0),
            welcome_width,
            WELCOME_HEIGHT,
        );
        let start_button = Rectangle::new(
            welcome_card.x + (welcome_card.width - 300.0) * 0.5,
            welcome_card.y + 310.0,
            300.0,
            56.0,
        );

        Self {
            screen,
            header,
            play_button,
            home_button,
            card,
            caption,
            prev_button,
            next_button,
            toolbar,
            rotate_left,
            rotate_right,
            zoom_out,
            zoom_in,
            reset,
            footer,
            progress_track,
            close_button,
            welcome_card,
            start_button,
        }
    }

    /// Footprint of the slide image inside the card after zoom and rotation.
    pub fn card_image(&self, texture: Size, transform: &Transform) -> Rectangle {
        let fitted = fit_within(texture, &self.card);
        let (mut w, mut h) = (fitted.width * transform.zoom, fitted.height * transform.zoom);
        if transform.is_sideways() {
            std::mem::swap(&mut w, &mut h);
        }
        let c = center(&self.card);
        Rectangle::new(c.x - w * 0.5, c.y - h * 0.5, w, h)
    }

    pub fn overlay_image(&self, texture: Size) -> Rectangle {
        let fitted = fit_within(texture, &self.screen);
        let c = center(&self.screen);
        Rectangle::new(
            c.x - fitted.width * 0.5,
            c.y - fitted.height * 0.5,
            fitted.width,
            fitted.height,
        )
    }

    /// Finds the control under `point`. `texture` is the size of the slide
    /// image when one is actually on screen.
    pub fn hit_test(
        &self,
        state: &PresentationState,
        texture: Option<Size>,
        point: Vector2,
    ) -> Option<Control> {
        if state.is_welcome_shown {
            return contains(&self.start_button, point).then_some(Control::Start);
        }

        if state.is_fullscreen_shown() {
            if contains(&self.close_button, point) {
                return Some(Control::CloseOverlay);
            }
            if let Some(size) = texture {
                if contains(&self.overlay_image(size), point) {
                    return Some(Control::OverlayImage);
                }
            }
            return Some(Control::Backdrop);
        }

        let buttons = [
            (&self.play_button, Control::PlayPause),
            (&self.home_button, Control::Home),
            (&self.rotate_left, Control::RotateLeft),
            (&self.rotate_right, Control::RotateRight),
            (&self.zoom_out, Control::ZoomOut),
            (&self.zoom_in, Control::ZoomIn),
            (&self.reset, Control::Reset),
            (&self.prev_button, Control::Previous),
            (&self.next_button, Control::Next),
        ];
        if let Some((_, control)) = buttons.iter().find(|(rec, _)| contains(rec, point)) {
            return Some(*control);
        }

        // The card clips the image, so only the visible part is clickable
        let size = texture?;
        let image = self.card_image(size, &state.transform);
        (contains(&self.card, point) && contains(&image, point)).then_some(Control::Image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::compute(1280.0, 800.0)
    }

    fn slideshow() -> PresentationState {
        PresentationState::new(64).apply(Event::Start)
    }

    #[test]
    fn card_keeps_sixteen_by_ten() {
        let layout = layout();
        assert!((layout.card.width / layout.card.height - 1.6).abs() < 1e-3);
        assert!(layout.card.y >= HEADER_HEIGHT);
        assert!(layout.card.y + layout.card.height <= layout.footer.y);
    }

    #[test]
    fn welcome_only_accepts_start() {
        let layout = layout();
        let state = PresentationState::new(64);
        assert_eq!(
            layout.hit_test(&state, None, center(&layout.start_button)),
            Some(Control::Start)
        );
        assert_eq!(layout.hit_test(&state, None, center(&layout.play_button)), None);
        assert_eq!(layout.hit_test(&state, None, center(&layout.card)), None);
    }

    #[test]
    fn header_and_toolbar_buttons() {
        let layout = layout();
        let state = slideshow();
        let expect = [
            (layout.play_button, Control::PlayPause),
            (layout.home_button, Control::Home),
            (layout.rotate_left, Control::RotateLeft),
            (layout.rotate_right, Control::RotateRight),
            (layout.zoom_out, Control::ZoomOut),
            (layout.zoom_in, Control::ZoomIn),
            (layout.reset, Control::Reset),
            (layout.prev_button, Control::Previous),
            (layout.next_button, Control::Next),
        ];
        for (rec, control) in expect {
            assert_eq!(layout.hit_test(&state, None, center(&rec)), Some(control));
        }
    }

    #[test]
    fn image_click_opens_fullscreen() {
        let layout = layout();
        let state = slideshow();
        let texture = Size::new(800.0, 600.0);
        let hit = layout.hit_test(&state, Some(texture), center(&layout.card));
        assert_eq!(hit, Some(Control::Image));
        assert_eq!(hit.and_then(Control::event), Some(Event::OpenFullscreen));
    }

    #[test]
    fn placeholder_is_not_clickable() {
        let layout = layout();
        assert_eq!(layout.hit_test(&slideshow(), None, center(&layout.card)), None);
    }

    #[test]
    fn click_beside_small_image_misses() {
        let layout = layout();
        let texture = Size::new(100.0, 100.0);
        let c = center(&layout.card);
        let point = Vector2::new(c.x + 120.0, c.y);
        assert_eq!(layout.hit_test(&slideshow(), Some(texture), point), None);

        let zoomed = slideshow()
            .apply(Event::Zoom(ZoomDirection::In))
            .apply(Event::Zoom(ZoomDirection::In))
            .apply(Event::Zoom(ZoomDirection::In));
        assert_eq!(layout.hit_test(&zoomed, Some(texture), Vector2::new(c.x + 60.0, c.y)), Some(Control::Image));
    }

    #[test]
    fn sideways_rotation_swaps_footprint() {
        let layout = layout();
        let texture = Size::new(400.0, 100.0);
        let upright = layout.card_image(texture, &Transform::default());
        let turned = layout.card_image(
            texture,
            &Transform::default().rotated(RotateDirection::Right),
        );
        assert_eq!(upright.width, turned.height);
        assert_eq!(upright.height, turned.width);
    }

    #[test]
    fn fullscreen_routing() {
        let layout = layout();
        let state = slideshow().apply(Event::OpenFullscreen);
        let texture = Some(Size::new(800.0, 600.0));

        assert_eq!(
            layout.hit_test(&state, texture, center(&layout.close_button)),
            Some(Control::CloseOverlay)
        );
        let on_image = layout.hit_test(&state, texture, center(&layout.screen));
        assert_eq!(on_image, Some(Control::OverlayImage));
        assert_eq!(on_image.and_then(Control::event), None);

        let corner = Vector2::new(2.0, 790.0);
        let on_backdrop = layout.hit_test(&state, texture, corner);
        assert_eq!(on_backdrop, Some(Control::Backdrop));
        assert_eq!(on_backdrop.and_then(Control::event), Some(Event::CloseFullscreen));

        // Header buttons sit under the overlay
        assert_eq!(
            layout.hit_test(&state, texture, center(&layout.play_button)),
            Some(Control::Backdrop)
        );
    }

    #[test]
    fn fit_never_upscales() {
        let bounds = Rectangle::new(0.0, 0.0, 1000.0, 500.0);
        assert_eq!(fit_within(Size::new(200.0, 100.0), &bounds), Size::new(200.0, 100.0));
        assert_eq!(fit_within(Size::new(2000.0, 500.0), &bounds), Size::new(1000.0, 250.0));
        assert_eq!(fit_within(Size::new(0.0, 10.0), &bounds), Size::new(0.0, 0.0));
    }

    #[test]
    fn toolbar_tooltips() {
        assert_eq!(Control::RotateLeft.tooltip(), Some("Rotar izquierda"));
        assert_eq!(Control::Reset.tooltip(), Some("Resetear"));
        assert_eq!(Control::Next.tooltip(), None);
    }
}
