//! Fixed-rate score accrual
//!
//! The ticker is an explicit scheduled-task record driven by the single
//! simulation tick, not a real timer. The tick loop advances it only while
//! the game is in `Playing`, so pausing is atomic with flow transitions.

use serde::{Deserialize, Serialize};

/// Periodic task that fires once per `period_ms` of advanced time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTicker {
    period_ms: f64,
    carry_ms: f64,
}

impl ScoreTicker {
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms,
            carry_ms: 0.0,
        }
    }

    /// Advance by `delta_ms` and return how many firings elapsed.
    ///
    /// Catch-up semantics: a single long frame spanning several periods
    /// reports every firing it covers.
    pub fn advance(&mut self, delta_ms: f64) -> u64 {
        self.carry_ms += delta_ms;
        let mut fired = 0;
        while self.carry_ms >= self.period_ms {
            self.carry_ms -= self.period_ms;
            fired += 1;
        }
        fired
    }

    /// Drop any partial interval (run start and return-to-home)
    pub fn reset(&mut self) {
        self.carry_ms = 0.0;
    }
}
