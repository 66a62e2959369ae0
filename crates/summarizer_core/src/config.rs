use std::time::Duration;

pub const DEFAULT_STEP_UNIT: Duration = Duration::from_millis(100);
pub const DEFAULT_MAILBOX_CAPACITY: usize = 64;
pub const DEFAULT_UPDATE_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizerConfig {
    /// Step `k` waits `k * step_unit` before emitting.
    pub step_unit: Duration,
    /// Bounded queue of front-end events awaiting the controller.
    pub mailbox_capacity: usize,
    /// Published states buffered per update subscriber before it lags.
    pub update_capacity: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            step_unit: DEFAULT_STEP_UNIT,
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            update_capacity: DEFAULT_UPDATE_CAPACITY,
        }
    }
}

impl SummarizerConfig {
    pub fn with_step_unit(mut self, step_unit: Duration) -> Self {
        self.step_unit = step_unit;
        self
    }

    // tokio channels reject a zero capacity
    pub(crate) fn mailbox_capacity(&self) -> usize {
        self.mailbox_capacity.max(1)
    }

    pub(crate) fn update_capacity(&self) -> usize {
        self.update_capacity.max(1)
    }
}
