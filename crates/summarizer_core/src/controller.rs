//! Controller actor: owns the reducer on one task, spawns stepper runs, and
//! republishes the merged UI state after every change.

use shared::{domain::UiState, protocol::Event};
use tokio::{
    sync::{broadcast, mpsc, watch},
    task::JoinHandle,
};
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, info};

use crate::{
    config::SummarizerConfig,
    error::SummarizerError,
    reducer::{Effect, SummarizerState},
    stepper::{StepEmission, Stepper},
};

pub struct SummarizerHandle {
    events: mpsc::Sender<Event>,
    ui: watch::Receiver<UiState>,
    updates: broadcast::Sender<UiState>,
    task: JoinHandle<()>,
}

/// Starts the controller on the current tokio runtime.
pub fn spawn_summarizer(config: SummarizerConfig) -> SummarizerHandle {
    let state = SummarizerState::new();
    let (ui_tx, ui_rx) = watch::channel(state.ui_state());
    let (updates, _) = broadcast::channel(config.update_capacity());
    let (events_tx, events_rx) = mpsc::channel(config.mailbox_capacity());
    let (steps_tx, steps_rx) = mpsc::channel(config.mailbox_capacity());

    let actor = SummarizerActor {
        state,
        stepper: Stepper::new(config.step_unit),
        steps_tx,
        ui_tx,
        updates: updates.clone(),
    };
    let task = tokio::spawn(actor.run(events_rx, steps_rx));

    SummarizerHandle {
        events: events_tx,
        ui: ui_rx,
        updates,
        task,
    }
}

impl SummarizerHandle {
    /// Queues an event without waiting for it to be processed.
    pub fn submit(&self, event: Event) -> Result<(), SummarizerError> {
        let name = event.name();
        match self.events.try_send(event) {
            Ok(()) => {
                debug!(event = name, "queued summarizer event");
                Ok(())
            }
            Err(mpsc::error::TrySendError::Full(event)) => Err(SummarizerError::QueueFull(event)),
            Err(mpsc::error::TrySendError::Closed(_)) => Err(SummarizerError::Disconnected),
        }
    }

    pub fn current(&self) -> UiState {
        self.ui.borrow().clone()
    }

    /// Latest-value view; intermediate states may be skipped by slow readers.
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.ui.clone()
    }

    pub fn watch_stream(&self) -> WatchStream<UiState> {
        WatchStream::new(self.ui.clone())
    }

    /// Every published state, in publication order.
    pub fn subscribe_updates(&self) -> broadcast::Receiver<UiState> {
        self.updates.subscribe()
    }

    pub async fn wait_until(
        &self,
        mut condition: impl FnMut(&UiState) -> bool,
    ) -> Result<UiState, SummarizerError> {
        let mut ui = self.ui.clone();
        let state = ui
            .wait_for(|state| condition(state))
            .await
            .map_err(|_| SummarizerError::Disconnected)?;
        Ok(state.clone())
    }

    /// Closes the event queue and waits for the controller to cancel its live
    /// run and exit.
    pub async fn shutdown(self) -> Result<(), SummarizerError> {
        let Self { events, task, .. } = self;
        drop(events);
        task.await?;
        Ok(())
    }
}

struct SummarizerActor {
    state: SummarizerState,
    stepper: Stepper,
    steps_tx: mpsc::Sender<StepEmission>,
    ui_tx: watch::Sender<UiState>,
    updates: broadcast::Sender<UiState>,
}

impl SummarizerActor {
    async fn run(
        mut self,
        mut events: mpsc::Receiver<Event>,
        mut steps: mpsc::Receiver<StepEmission>,
    ) {
        info!(
            step_unit_ms = self.stepper.unit().as_millis() as u64,
            "summarizer controller started"
        );

        loop {
            tokio::select! {
                biased;
                event = events.recv() => match event {
                    Some(event) => self.handle_event(event),
                    None => break,
                },
                Some(emission) = steps.recv() => self.handle_step(emission),
            }
        }

        self.state.teardown();
        info!("summarizer controller stopped");
    }

    fn handle_event(&mut self, event: Event) {
        match self.state.apply_event(event) {
            Effect::Ignored => {}
            Effect::Publish => self.publish(),
            Effect::StartRun { target, token } => {
                info!(target, generation = token.generation(), "starting computation");
                self.publish();
                // the task is detached; the token is what stops it
                let _ = self.stepper.spawn(target, token, self.steps_tx.clone());
            }
        }
    }

    fn handle_step(&mut self, emission: StepEmission) {
        if self.state.apply_step(emission) {
            self.publish();
        }
    }

    fn publish(&self) {
        let ui = self.state.ui_state();
        let _ = self.updates.send(ui.clone());
        self.ui_tx.send_replace(ui);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
