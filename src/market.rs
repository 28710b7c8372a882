use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinHandle;

use crate::models::Priority;
use crate::session::SessionBackend;
use crate::shared::SharedCore;

/// Symbols the simulation draws from
const SYMBOLS: [&str; 5] = ["AAPL", "GOOGL", "MSFT", "TSLA", "AMZN"];

/// Chance that a tick produces a draw at all
const EMIT_PROBABILITY: f64 = 0.3;

/// Moves at or below this magnitude are not worth a notification
const NOTABLE_PCT: f64 = 2.0;

/// Moves beyond this magnitude escalate to high priority
const SURGE_PCT: f64 = 4.0;

/// Ticker period in the demo wiring
pub const TICK_PERIOD: Duration = Duration::from_secs(15);

/// A notable simulated market move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketEvent {
    pub symbol: &'static str,
    pub change_pct: f64,
}

impl MarketEvent {
    pub fn title(&self) -> String {
        let direction = if self.change_pct > 0.0 { "Surge" } else { "Drop" };
        format!("{} {}", self.symbol, direction)
    }

    pub fn message(&self) -> String {
        let direction = if self.change_pct > 0.0 { "up" } else { "down" };
        format!(
            "{} is {} {:.2}% in today's trading",
            self.symbol,
            direction,
            self.change_pct.abs()
        )
    }

    pub fn priority(&self) -> Priority {
        if self.change_pct.abs() > SURGE_PCT {
            Priority::High
        } else {
            Priority::Medium
        }
    }
}

/// Pseudo-random producer of market events.
///
/// Each `sample` call either yields a notable move or nothing: most ticks
/// draw nothing, and draws whose magnitude stays within the noise band are
/// dropped. Seedable for deterministic tests.
pub struct MarketSimulator {
    rng: StdRng,
}

impl MarketSimulator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw at most one notable move, with a change in (-6%, +6%)
    pub fn sample(&mut self) -> Option<MarketEvent> {
        if !self.rng.gen_bool(EMIT_PROBABILITY) {
            return None;
        }

        let symbol = SYMBOLS[self.rng.gen_range(0..SYMBOLS.len())];
        let change_pct = (self.rng.gen::<f64>() - 0.5) * 12.0;

        if change_pct.abs() <= NOTABLE_PCT {
            return None;
        }

        Some(MarketEvent { symbol, change_pct })
    }
}

impl Default for MarketSimulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Recurring market-simulation task.
///
/// Drives `AppCore::market_tick` at a fixed period on the shared core.
/// The schedule is torn down by `stop` or by dropping the handle, so an
/// unmounted view never leaks a background timer that keeps mutating state.
pub struct MarketTicker {
    handle: JoinHandle<()>,
}

impl MarketTicker {
    /// Spawn the ticker on the current tokio runtime
    pub fn spawn<S>(core: SharedCore<S>, period: Duration) -> Self
    where
        S: SessionBackend + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // Consume the immediate first tick; the first event fires one
            // full period after spawn
            interval.tick().await;
            loop {
                interval.tick().await;
                core.write().await.market_tick();
            }
        });

        Self { handle }
    }

    /// Cancel the recurring schedule
    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for MarketTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
