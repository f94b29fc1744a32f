use rand::Rng;
use raylib::prelude::*;

use crate::view::theme::{with_alpha, CELEBRATION, GOLDEN, PRIMARY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ornament {
    Heart,
    Sparkle,
}

/// A floating ornament, anchored relative to the window.
#[derive(Debug, Clone)]
pub struct Decoration {
    pub ornament: Ornament,
    pub anchor: Vector2,
    pub size: f32,
    pub color: Color,
    phase: f32,
    speed: f32,
}

impl Decoration {
    fn new(ornament: Ornament, anchor: Vector2, size: f32, color: Color) -> Self {
        let mut rng = rand::rng();
        Self {
            ornament,
            anchor,
            size,
            color,
            phase: rng.random_range(0.0..std::f32::consts::TAU),
            speed: rng.random_range(1.2..2.2),
        }
    }

    /// Vertical bob, in pixels, at `time` seconds.
    pub fn bob(&self, time: f32) -> f32 {
        (time * self.speed + self.phase).sin() * self.size * 0.4
    }

    /// Opacity pulse for sparkles; hearts stay solid.
    pub fn opacity(&self, time: f32) -> f32 {
        match self.ornament {
            Ornament::Heart => 1.0,
            Ornament::Sparkle => 0.55 + 0.45 * (time * self.speed * 1.5 + self.phase).cos(),
        }
    }

    pub fn position(&self, screen: &Rectangle, time: f32) -> Vector2 {
        Vector2::new(
            screen.x + screen.width * self.anchor.x,
            screen.y + screen.height * self.anchor.y + self.bob(time),
        )
    }
}

/// Background ornaments plus the clock that animates them.
pub struct Decorations {
    pub items: Vec<Decoration>,
    time: f32,
}

impl Decorations {
    pub fn slideshow() -> Self {
        Self::with_items(vec![
            Decoration::new(Ornament::Sparkle, Vector2::new(0.04, 0.14), 24.0, with_alpha(CELEBRATION, 0.3)),
            Decoration::new(Ornament::Heart, Vector2::new(0.95, 0.2), 20.0, with_alpha(GOLDEN, 0.4)),
            Decoration::new(Ornament::Sparkle, Vector2::new(0.08, 0.85), 16.0, with_alpha(PRIMARY, 0.3)),
        ])
    }

    pub fn welcome() -> Self {
        Self::with_items(vec![
            Decoration::new(Ornament::Heart, Vector2::new(0.0, 0.0), 32.0, CELEBRATION),
            Decoration::new(Ornament::Sparkle, Vector2::new(1.0, 0.02), 24.0, GOLDEN),
            Decoration::new(Ornament::Sparkle, Vector2::new(0.0, 1.0), 20.0, PRIMARY),
        ])
    }

    fn with_items(items: Vec<Decoration>) -> Self {
        Self { items, time: 0.0 }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn update(&mut self, dt: f32) {
        self.time += dt;
    }
}
