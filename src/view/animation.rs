use raylib::prelude::*;

/// A drawn value that eases towards its target instead of jumping.
pub struct Animated {
    value: f32,
    target: f32,
    duration: f32,
    timer: f32,
    tween: Option<ease::Tween>,
}

impl Animated {
    pub fn new(value: f32, duration: f32) -> Self {
        Self { value, target: value, duration, timer: 0.0, tween: None }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Retargets the animation, starting from whatever is on screen now.
    pub fn set(&mut self, target: f32) {
        if target == self.target {
            return;
        }
        self.target = target;
        self.timer = 0.0;
        self.tween = Some(ease::Tween::new(ease::cubic_out, self.value, target, self.duration));
    }

    pub fn update(&mut self, dt: f32) {
        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        self.value = tween.apply(dt);
        self.timer += dt;
        if self.timer >= self.duration {
            self.value = self.target;
            self.tween = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_on_target() {
        let mut a = Animated::new(0.0, 0.3);
        a.set(90.0);
        a.update(1.0 / 60.0);
        assert!(a.value() > 0.0 && a.value() < 90.0);
        for _ in 0..20 {
            a.update(1.0 / 60.0);
        }
        assert_eq!(a.value(), 90.0);
        a.update(1.0 / 60.0);
        assert_eq!(a.value(), 90.0);
    }

    #[test]
    fn moves_towards_target_midway() {
        let mut a = Animated::new(1.0, 0.3);
        a.set(3.0);
        a.update(0.1);
        assert!(a.value() > 1.0 && a.value() < 3.0);
    }

    #[test]
    fn same_target_is_ignored() {
        let mut a = Animated::new(1.0, 0.3);
        a.set(1.0);
        a.update(0.1);
        assert_eq!(a.value(), 1.0);
    }
}
