use std::time::Duration;

use tracing::debug;

/// Repeating "advance" schedule owned by the presenter.
///
/// Time is fed in by the frame loop, so a cancelled schedule can never fire:
/// the elapsed time it accumulated is dropped together with it.
#[derive(Debug)]
pub struct AutoplayTimer {
    interval: Duration,
    schedule: Option<Schedule>,
}

#[derive(Debug, Default)]
struct Schedule {
    elapsed: Duration,
}

impl AutoplayTimer {
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "autoplay interval must be positive");
        Self { interval, schedule: None }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.schedule.is_some()
    }

    /// Starts the schedule unless one is already active.
    pub fn start(&mut self) {
        if self.schedule.is_none() {
            debug!(interval_ms = self.interval.as_millis() as u64, "autoplay started");
            self.schedule = Some(Schedule::default());
        }
    }

    /// Stops the schedule. Cancelling an idle timer does nothing.
    pub fn cancel(&mut self) {
        if self.schedule.take().is_some() {
            debug!("autoplay stopped");
        }
    }

    /// Starts or stops the schedule so that it runs exactly when `should_run`.
    pub fn sync(&mut self, should_run: bool) {
        if should_run {
            self.start();
        } else {
            self.cancel();
        }
    }

    /// Feeds elapsed time and returns how many advances became due.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        let Some(schedule) = self.schedule.as_mut() else {
            return 0;
        };

        schedule.elapsed += dt;
        let mut due = 0;
        while schedule.elapsed >= self.interval {
            schedule.elapsed -= self.interval;
            due += 1;
        }
        due
    }
}
