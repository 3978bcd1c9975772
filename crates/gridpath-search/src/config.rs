use std::thread;
use std::time::Duration;

/// Pacing of progress reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Report progress each time this many cells have been finalized.
    /// Zero disables intermediate reports; the final one is always sent.
    pub progress_every: usize,
    /// Pause after each intermediate report so a renderer can catch up.
    /// Zero yields the thread instead of sleeping.
    pub yield_delay: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            progress_every: 5,
            yield_delay: Duration::from_millis(10),
        }
    }
}

impl SearchConfig {
    /// Default reporting cadence without any pause.
    pub fn immediate() -> Self {
        Self {
            yield_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Set the reporting cadence (builder).
    pub fn with_progress_every(mut self, every: usize) -> Self {
        self.progress_every = every;
        self
    }

    /// Set the pause after each report (builder).
    pub fn with_yield_delay(mut self, delay: Duration) -> Self {
        self.yield_delay = delay;
        self
    }

    /// Whether a report is due after `explored` cells have been finalized.
    #[inline]
    pub(crate) fn is_checkpoint(&self, explored: usize) -> bool {
        self.progress_every > 0 && explored % self.progress_every == 0
    }

    /// Hand control back to the host between bursts of work.
    pub(crate) fn pause(&self) {
        if self.yield_delay.is_zero() {
            thread::yield_now();
        } else {
            thread::sleep(self.yield_delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkpoints() {
        let c = SearchConfig::default();
        assert!(!c.is_checkpoint(4));
        assert!(c.is_checkpoint(5));
        assert!(c.is_checkpoint(10));
        let off = SearchConfig::immediate().with_progress_every(0);
        assert!(!off.is_checkpoint(5));
        assert!(!off.is_checkpoint(0));
    }

    #[test]
    fn builders() {
        let c = SearchConfig::immediate()
            .with_progress_every(3)
            .with_yield_delay(Duration::from_millis(1));
        assert_eq!(c.progress_every, 3);
        assert_eq!(c.yield_delay, Duration::from_millis(1));
        assert_eq!(SearchConfig::immediate().yield_delay, Duration::ZERO);
    }
}
