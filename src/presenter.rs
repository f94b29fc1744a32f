use std::time::Duration;

use raylib::prelude::*;
use tracing::{trace, warn};

use crate::autoplay::AutoplayTimer;
use crate::constants::AUTOPLAY_INTERVAL;
use crate::input::{self, Key, KeyboardListener};
use crate::media::{Catalog, MediaItem};
use crate::state::{Event, PresentationState};
use crate::texture_loader::MediaLoader;
use crate::view::layout::{Control, Layout, Size};
use crate::view::{Frame, View};

/// Presentation state plus the autoplay schedule that follows it.
///
/// Every transition goes through [`Session::dispatch`], which re-derives
/// whether autoplay should be running, so the schedule can never outlive
/// the condition that started it.
pub struct Session {
    state: PresentationState,
    autoplay: AutoplayTimer,
}

impl Session {
    pub fn new(item_count: usize, autoplay: bool) -> Self {
        let mut state = PresentationState::new(item_count);
        state.is_playing = autoplay;
        Self { state, autoplay: AutoplayTimer::new(AUTOPLAY_INTERVAL) }
    }

    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    #[cfg(test)]
    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn dispatch(&mut self, event: Event) {
        trace!(?event, index = self.state.current_index, "dispatch");
        self.state = self.state.clone().apply(event);
        self.autoplay.sync(self.state.wants_autoplay());
    }

    pub fn handle_key(&mut self, key: Key) {
        if let Some(event) = input::route(&self.state, key) {
            self.dispatch(event);
        }
    }

    pub fn handle_click(&mut self, control: Control) {
        if let Some(event) = control.event() {
            self.dispatch(event);
        }
    }

    /// Feeds frame time to the autoplay schedule and applies the advances it yields.
    pub fn tick(&mut self, dt: Duration) {
        for _ in 0..self.autoplay.tick(dt) {
            self.dispatch(Event::Advance);
        }
    }

    pub fn shutdown(&mut self) {
        self.autoplay.cancel();
    }
}

struct LoadedSlide {
    id: u32,
    texture: Texture2D,
}

/// What to do with the resident texture for the slide on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideAction {
    Keep,
    /// Drop the resident texture and show the placeholder. Failed slides are not retried.
    Clear,
    Load,
}

pub fn slide_action(state: &PresentationState, item: &MediaItem, resident: Option<u32>) -> SlideAction {
    if state.is_welcome_shown || resident == Some(item.id) {
        SlideAction::Keep
    } else if state.has_failed(item.id) {
        SlideAction::Clear
    } else {
        SlideAction::Load
    }
}

/// Texture size usable for hit-testing, only when it belongs to the slide on screen.
fn resident_size(resident: Option<(u32, Size)>, item: &MediaItem) -> Option<Size> {
    resident.filter(|(id, _)| *id == item.id).map(|(_, size)| size)
}

/// Owns the window-bound resources: keyboard subscription, current texture
/// and the view.
pub struct Presenter {
    catalog: Catalog,
    session: Session,
    keyboard: Option<KeyboardListener>,
    loader: MediaLoader,
    slide: Option<LoadedSlide>,
    view: View,
    layout: Layout,
    hovered: Option<Control>,
}

impl Presenter {
    pub fn new(rl: &mut RaylibHandle, loader: MediaLoader, name: &str, autoplay: bool) -> Self {
        let catalog = Catalog::new();
        let session = Session::new(catalog.len(), autoplay);
        let view = View::new(name, session.state());
        let layout = Layout::compute(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        Self {
            catalog,
            session,
            keyboard: Some(KeyboardListener::attach(rl)),
            loader,
            slide: None,
            view,
            layout,
            hovered: None,
        }
    }

    pub fn update(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let dt = rl.get_frame_time();

        if let Some(keyboard) = &self.keyboard {
            for key in keyboard.drain(rl) {
                self.session.handle_key(key);
            }
        }

        // Clicks are tested against the slide the keys just moved to.
        self.sync_slide(rl, thread);

        self.layout = Layout::compute(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        let mouse = rl.get_mouse_position();
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(control) = self.hit(mouse) {
                self.session.handle_click(control);
            }
        }

        self.session.tick(Duration::from_secs_f32(dt.max(0.0)));
        self.sync_slide(rl, thread);

        self.hovered = self.hit(mouse);
        let cursor = match self.hovered {
            Some(Control::OverlayImage) | None => MouseCursor::MOUSE_CURSOR_DEFAULT,
            Some(_) => MouseCursor::MOUSE_CURSOR_POINTING_HAND,
        };
        rl.set_mouse_cursor(cursor);

        self.view.update(dt, self.session.state());
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let state = self.session.state();
        let Some(item) = self.catalog.get(state.current_index) else {
            return;
        };
        let frame = Frame {
            layout: &self.layout,
            state,
            item,
            texture: self.slide.as_ref().map(|s| &s.texture),
            hovered: self.hovered,
        };
        self.view.draw(d, &frame);
    }

    /// Stops autoplay and releases the keyboard subscription. Safe to call twice.
    pub fn shutdown(&mut self) {
        self.session.shutdown();
        if let Some(mut keyboard) = self.keyboard.take() {
            keyboard.detach();
        }
    }

    fn hit(&self, point: Vector2) -> Option<Control> {
        let state = self.session.state();
        let resident = self.slide.as_ref().map(|s| {
            (s.id, Size::new(s.texture.width() as f32, s.texture.height() as f32))
        });
        let texture = self.catalog.get(state.current_index).and_then(|item| resident_size(resident, item));
        self.layout.hit_test(state, texture, point)
    }

    /// Keeps the resident texture in step with the current slide.
    fn sync_slide(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let state = self.session.state();
        let Some(item) = self.catalog.get(state.current_index) else {
            return;
        };
        match slide_action(state, item, self.slide.as_ref().map(|s| s.id)) {
            SlideAction::Keep => return,
            SlideAction::Clear => {
                self.slide = None;
                return;
            }
            SlideAction::Load => self.slide = None,
        }

        match self.loader.load(rl, thread, item) {
            Ok(texture) => self.slide = Some(LoadedSlide { id: item.id, texture }),
            Err(e) => {
                warn!(id = item.id, "image unavailable, showing placeholder: {}", e);
                let id = item.id;
                self.session.dispatch(Event::ImageFailed(id));
            }
        }
    }
}

impl Drop for Presenter {
    fn drop(&mut self) {
        self.shutdown();
    }
}
