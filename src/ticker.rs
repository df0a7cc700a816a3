//! Cancellable one-second ticker driving the countdown.
//!
//! The task only exists while the current question is open. Each spawn gets
//! a new generation number so ticks already queued by a cancelled task can
//! be recognised and dropped.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::event::AppEvent;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub struct Ticker {
    tx: mpsc::UnboundedSender<AppEvent>,
    period: Duration,
    generation: u64,
    /// Question index the running task belongs to.
    bound_to: Option<usize>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn new(tx: mpsc::UnboundedSender<AppEvent>, period: Duration) -> Self {
        Self {
            tx,
            period,
            generation: 0,
            bound_to: None,
            handle: None,
        }
    }

    /// Make the task match `target`: run for that question index, or not at
    /// all for `None`. Moving to another question restarts the task so the
    /// first tick lands a full period after the question opened.
    pub fn sync(&mut self, target: Option<usize>) {
        if target == self.bound_to && self.handle.is_some() == target.is_some() {
            return;
        }

        self.cancel();
        if let Some(index) = target {
            self.spawn(index);
        }
    }

    /// Whether a tick from generation `generation` is still current.
    pub fn accepts(&self, generation: u64) -> bool {
        self.handle.is_some() && generation == self.generation
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!(generation = self.generation, "ticker cancelled");
        }
        self.bound_to = None;
    }

    fn spawn(&mut self, index: usize) {
        self.generation += 1;
        let generation = self.generation;
        let period = self.period;
        let tx = self.tx.clone();

        self.handle = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(AppEvent::Tick(generation)).is_err() {
                    break;
                }
            }
        }));
        self.bound_to = Some(index);
        tracing::debug!(generation, index, "ticker started");
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks(rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> Vec<u64> {
        let mut seen = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if let AppEvent::Tick(generation) = event {
                seen.push(generation);
            }
        }
        seen
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = Ticker::new(tx, TICK_PERIOD);

        ticker.sync(Some(0));
        tokio::time::sleep(Duration::from_millis(3500)).await;

        assert_eq!(ticks(&mut rx), vec![1, 1, 1]);
        assert!(ticker.accepts(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = Ticker::new(tx, TICK_PERIOD);

        ticker.sync(Some(0));
        tokio::time::sleep(Duration::from_millis(1500)).await;
        ticker.sync(None);
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(ticks(&mut rx), vec![1]);
        assert!(!ticker.is_running());
        assert!(!ticker.accepts(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_question_restarts_with_new_generation() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = Ticker::new(tx, TICK_PERIOD);

        ticker.sync(Some(0));
        ticker.sync(Some(0));
        tokio::time::sleep(Duration::from_millis(1500)).await;
        ticker.sync(Some(1));
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(ticks(&mut rx), vec![1, 2]);
        assert!(!ticker.accepts(1));
        assert!(ticker.accepts(2));
    }
}
