use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, info};

/// `T(i) = i * (i + 1) / 2`.
pub fn triangular(i: u64) -> u64 {
    i * (i + 1) / 2
}

/// `[T(1), ..., T(step)]`, built from scratch on every call.
pub fn prefix_array(step: u32) -> Vec<u64> {
    (1..=u64::from(step)).map(triangular).collect()
}

/// Wait before emitting `step`; grows linearly with the step index.
pub fn step_delay(unit: Duration, step: u32) -> Duration {
    unit * step
}

/// Shared generation counter. Beginning a new run or cancelling bumps the live
/// generation, which every older [`RunToken`] observes as cancellation.
#[derive(Debug, Clone, Default)]
pub struct RunGate {
    live: Arc<AtomicU64>,
}

impl RunGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RunToken {
        let generation = self.live.fetch_add(1, Ordering::SeqCst) + 1;
        RunToken {
            live: Arc::clone(&self.live),
            generation,
        }
    }

    pub fn cancel(&self) {
        self.live.fetch_add(1, Ordering::SeqCst);
    }

    pub fn live_generation(&self) -> u64 {
        self.live.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub struct RunToken {
    live: Arc<AtomicU64>,
    generation: u64,
}

impl RunToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_cancelled(&self) -> bool {
        self.live.load(Ordering::SeqCst) != self.generation
    }
}

/// One staged array, tagged with the run that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepEmission {
    pub generation: u64,
    pub target: u32,
    pub step: u32,
    pub series: Vec<u64>,
}

#[derive(Debug, Clone, Copy)]
pub struct Stepper {
    unit: Duration,
}

impl Stepper {
    pub fn new(unit: Duration) -> Self {
        Self { unit }
    }

    pub fn unit(&self) -> Duration {
        self.unit
    }

    pub fn spawn(
        &self,
        target: u32,
        token: RunToken,
        sink: mpsc::Sender<StepEmission>,
    ) -> JoinHandle<()> {
        let stepper = *self;
        tokio::spawn(async move { stepper.run(target, token, sink).await })
    }

    /// Emits `A_1..=A_target` in order. Cancellation is checked once per step,
    /// after the wait; a wait that has started is always slept out.
    pub async fn run(self, target: u32, token: RunToken, sink: mpsc::Sender<StepEmission>) {
        info!(target, generation = token.generation(), "stepper run started");

        for step in 1..=target {
            tokio::time::sleep(step_delay(self.unit, step)).await;

            if token.is_cancelled() {
                info!(
                    target,
                    step,
                    generation = token.generation(),
                    "stepper run cancelled"
                );
                return;
            }

            let emission = StepEmission {
                generation: token.generation(),
                target,
                step,
                series: prefix_array(step),
            };
            debug!(target, step, "stepper emitted array");
            if sink.send(emission).await.is_err() {
                debug!(target, step, "stepper sink closed");
                return;
            }
        }

        info!(target, generation = token.generation(), "stepper run finished");
    }
}
