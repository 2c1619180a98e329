//! Animated stat counters that climb from zero to their targets.

use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tracing::debug;

use super::ticker::{TickControl, Ticker};
use crate::content::{StatDefinition, StatUnit, STATS};

/// Ticks needed to cover a target, roughly.
const STEPS_PER_TARGET: u32 = 150;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    label: &'static str,
    unit: StatUnit,
    target: u32,
    value: u32,
}

impl Counter {
    pub fn new(definition: StatDefinition) -> Self {
        Self {
            label: definition.label,
            unit: definition.unit,
            target: definition.target,
            value: 0,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn step(&self) -> u32 {
        (self.target / STEPS_PER_TARGET).max(1)
    }

    pub fn is_complete(&self) -> bool {
        self.value >= self.target
    }

    /// Ticks still needed to reach the target.
    pub fn ticks_remaining(&self) -> u32 {
        self.target.saturating_sub(self.value).div_ceil(self.step())
    }

    /// Advance one step, never past the target.
    pub fn tick(&mut self) -> u32 {
        if self.value < self.target {
            self.value = self.value.saturating_add(self.step()).min(self.target);
        }
        self.value
    }

    pub fn display(&self) -> String {
        match self.unit {
            StatUnit::Count => format_count(self.value),
            StatUnit::Percent => format!("{}%", self.value),
        }
    }
}

/// `1000` and above render in thousands (`50K+`), smaller values as `500+`.
pub fn format_count(value: u32) -> String {
    if value >= 1000 {
        format!("{}K+", (f64::from(value) / 1000.0).round())
    } else {
        format!("{value}+")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatDisplay {
    pub label: &'static str,
    pub value: u32,
    pub target: u32,
    pub text: String,
}

impl From<&Counter> for StatDisplay {
    fn from(counter: &Counter) -> Self {
        Self {
            label: counter.label,
            value: counter.value,
            target: counter.target,
            text: counter.display(),
        }
    }
}

/// The row of counters on the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsBoard {
    counters: Vec<Counter>,
}

impl Default for StatsBoard {
    fn default() -> Self {
        Self::from_definitions(&STATS)
    }
}

impl StatsBoard {
    pub fn from_definitions(definitions: &[StatDefinition]) -> Self {
        Self {
            counters: definitions.iter().copied().map(Counter::new).collect(),
        }
    }

    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    pub fn is_complete(&self) -> bool {
        self.counters.iter().all(Counter::is_complete)
    }

    /// Ticks until the slowest counter finishes.
    pub fn ticks_remaining(&self) -> u32 {
        self.counters
            .iter()
            .map(Counter::ticks_remaining)
            .max()
            .unwrap_or(0)
    }

    /// Tick every counter; returns whether all have reached their targets.
    pub fn tick(&mut self) -> bool {
        for counter in &mut self.counters {
            counter.tick();
        }
        self.is_complete()
    }

    /// Jump every counter straight to its target.
    pub fn finish(&mut self) {
        for counter in &mut self.counters {
            counter.value = counter.target;
        }
    }

    pub fn snapshot(&self) -> Vec<StatDisplay> {
        self.counters.iter().map(StatDisplay::from).collect()
    }
}

/// A [`StatsBoard`] ticking on its own timer until every counter is done.
#[derive(Debug)]
pub struct CounterAnimation {
    board: Arc<Mutex<StatsBoard>>,
    ticker: Ticker,
}

impl CounterAnimation {
    pub fn start(board: StatsBoard, tick: Duration) -> Self {
        let board = Arc::new(Mutex::new(board));
        let shared = board.clone();
        let ticker = Ticker::spawn(tick, move || {
            let mut board = shared.lock().unwrap_or_else(PoisonError::into_inner);
            if board.tick() {
                debug!("stat counters reached their targets");
                TickControl::Stop
            } else {
                TickControl::Continue
            }
        });

        Self { board, ticker }
    }

    pub fn snapshot(&self) -> Vec<StatDisplay> {
        self.board
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .snapshot()
    }

    pub fn is_complete(&self) -> bool {
        self.board
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_complete()
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_active()
    }

    /// Freeze the counters where they are.
    pub fn stop(&self) {
        self.ticker.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time;

    fn counter(target: u32) -> Counter {
        Counter::new(StatDefinition {
            label: "test",
            target,
            unit: StatUnit::Count,
        })
    }

    #[test]
    fn large_targets_climb_monotonically_and_clamp() {
        let mut counter = counter(50_000);
        assert_eq!(counter.step(), 333);

        let mut previous = 0;
        let mut ticks = 0;
        while !counter.is_complete() {
            let value = counter.tick();
            assert!(value > previous);
            assert!(value <= 50_000);
            previous = value;
            ticks += 1;
        }

        assert_eq!(counter.value(), 50_000);
        assert_eq!(ticks, 151);
        assert_eq!(counter.tick(), 50_000);
    }

    #[test]
    fn ticks_remaining_matches_ticking_to_completion() {
        let mut board = StatsBoard::default();
        assert_eq!(board.ticks_remaining(), 167);

        let mut ticks = 0;
        while !board.tick() {
            ticks += 1;
        }
        assert_eq!(ticks + 1, 167);
        assert_eq!(board.ticks_remaining(), 0);

        let counters: Vec<u32> = StatsBoard::default()
            .counters()
            .iter()
            .map(Counter::ticks_remaining)
            .collect();
        assert_eq!(counters, vec![167, 151, 95]);
    }

    #[test]
    fn small_targets_step_by_one() {
        let mut counter = counter(95);
        assert_eq!(counter.step(), 1);
        counter.tick();
        assert_eq!(counter.value(), 1);
    }

    #[test]
    fn formats_counts_and_percentages() {
        assert_eq!(format_count(500), "500+");
        assert_eq!(format_count(999), "999+");
        assert_eq!(format_count(1000), "1K+");
        assert_eq!(format_count(1499), "1K+");
        assert_eq!(format_count(1500), "2K+");
        assert_eq!(format_count(50_000), "50K+");

        let mut board = StatsBoard::default();
        board.finish();
        let texts: Vec<String> = board.snapshot().into_iter().map(|stat| stat.text).collect();
        assert_eq!(texts, vec!["500+", "50K+", "95%"]);
    }

    #[tokio::test(start_paused = true)]
    async fn animation_stops_once_every_counter_is_done() {
        let animation = CounterAnimation::start(StatsBoard::default(), Duration::from_millis(50));
        assert!(animation.snapshot().iter().all(|stat| stat.value == 0));

        time::sleep(Duration::from_millis(51)).await;
        tokio::task::yield_now().await;
        let values: Vec<u32> = animation.snapshot().iter().map(|stat| stat.value).collect();
        assert_eq!(values, vec![3, 333, 1]);

        // The 500 counter steps by 3 and is the last to finish.
        let remaining = StatsBoard::default().ticks_remaining() - 1;
        time::sleep(Duration::from_millis(u64::from(remaining) * 50 - 2)).await;
        tokio::task::yield_now().await;
        assert!(!animation.is_complete());

        time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert!(animation.is_complete());
        assert!(!animation.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_animation_freezes_values() {
        let animation = CounterAnimation::start(StatsBoard::default(), Duration::from_millis(50));
        time::sleep(Duration::from_millis(120)).await;
        tokio::task::yield_now().await;

        animation.stop();
        let frozen = animation.snapshot();
        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(animation.snapshot(), frozen);
        assert!(!animation.is_complete());
    }
}
