/// Linear count-up from zero to a target, one step per timer tick.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    step: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = f64::from(duration_ms) / f64::from(tick_ms.max(1));
        Self {
            target,
            step: target as f64 / ticks,
            current: 0.0,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances one tick and returns the value to display, clamped to the
    /// target on overshoot. Returns `None` once the target has been shown.
    pub fn tick(&mut self) -> Option<i64> {
        if self.finished {
            return None;
        }

        self.current += self.step;
        if self.current >= self.target as f64 {
            self.current = self.target as f64;
            self.finished = true;
        }
        Some(self.current.floor() as i64)
    }
}
