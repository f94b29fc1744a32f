use std::collections::BTreeSet;

use crate::transform::{RotateDirection, Transform, ZoomDirection};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Overlay {
    Closed,
    Fullscreen,
}

/// Everything that can change the presentation.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Event {
    Advance,
    Retreat,
    Rotate(RotateDirection),
    Zoom(ZoomDirection),
    ResetTransform,
    TogglePlayback,
    /// Leave the welcome screen and show the slides.
    Start,
    /// Go back to the welcome screen ("Inicio").
    ShowWelcome,
    OpenFullscreen,
    CloseFullscreen,
    ImageFailed(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresentationState {
    item_count: usize,
    pub current_index: usize,
    pub is_playing: bool,
    pub is_welcome_shown: bool,
    pub failed_ids: BTreeSet<u32>,
    pub transform: Transform,
    pub overlay: Overlay,
}

impl PresentationState {
    pub fn new(item_count: usize) -> Self {
        assert!(item_count > 0, "a presentation needs at least one slide");
        Self {
            item_count,
            current_index: 0,
            is_playing: false,
            is_welcome_shown: true,
            failed_ids: BTreeSet::new(),
            transform: Transform::default(),
            overlay: Overlay::Closed,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_fullscreen_shown(&self) -> bool {
        self.overlay == Overlay::Fullscreen
    }

    pub fn has_failed(&self, id: u32) -> bool {
        self.failed_ids.contains(&id)
    }

    /// Autoplay runs only while playing and past the welcome screen.
    pub fn wants_autoplay(&self) -> bool {
        self.is_playing && !self.is_welcome_shown
    }

    /// Applies one event and returns the next state.
    pub fn apply(mut self, event: Event) -> Self {
        match event {
            Event::Advance => {
                self.current_index = (self.current_index + 1) % self.item_count;
                self.transform = Transform::reset();
            }
            Event::Retreat => {
                self.current_index = (self.current_index + self.item_count - 1) % self.item_count;
                self.transform = Transform::reset();
            }
            Event::Rotate(direction) => self.transform = self.transform.rotated(direction),
            Event::Zoom(direction) => self.transform = self.transform.zoomed(direction),
            Event::ResetTransform => self.transform = Transform::reset(),
            Event::TogglePlayback => self.is_playing = !self.is_playing,
            Event::Start => self.is_welcome_shown = false,
            Event::ShowWelcome => {
                self.is_welcome_shown = true;
                self.overlay = Overlay::Closed;
            }
            Event::OpenFullscreen => {
                if !self.is_welcome_shown {
                    self.overlay = Overlay::Fullscreen;
                }
            }
            Event::CloseFullscreen => self.overlay = Overlay::Closed,
            Event::ImageFailed(id) => {
                self.failed_ids.insert(id);
            }
        }
        self
    }
}
