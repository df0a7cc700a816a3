use crate::config::TimerConfig;

/// Result of advancing the countdown by one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Seconds left after this tick.
    Running(u32),
    /// Time ran out; the countdown is already back at full duration.
    Expired,
}

/// Per-question countdown. Pure state, driven by whoever owns the clock.
#[derive(Debug, Clone)]
pub struct Countdown {
    duration: u32,
    remaining: u32,
}

impl Countdown {
    pub fn new(config: TimerConfig) -> Self {
        let duration = config.duration_seconds.max(1);
        Self {
            duration,
            remaining: duration,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn reset(&mut self) {
        self.remaining = self.duration;
    }

    pub fn tick(&mut self) -> Tick {
        if self.remaining <= 1 {
            self.reset();
            Tick::Expired
        } else {
            self.remaining -= 1;
            Tick::Running(self.remaining)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_then_expires_and_resets() {
        let mut countdown = Countdown::new(TimerConfig::new(3));

        assert_eq!(countdown.tick(), Tick::Running(2));
        assert_eq!(countdown.tick(), Tick::Running(1));
        assert_eq!(countdown.tick(), Tick::Expired);
        assert_eq!(countdown.remaining(), 3);
    }

    #[test]
    fn test_default_is_thirty_seconds() {
        let mut countdown = Countdown::new(TimerConfig::default());
        assert_eq!(countdown.remaining(), 30);

        let expired = (0..30).filter(|_| countdown.tick() == Tick::Expired).count();
        assert_eq!(expired, 1);
    }
}
