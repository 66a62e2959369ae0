//! Single-writer state transitions for the summarizer controller.
//!
//! The reducer never touches a runtime: it decides what to publish and which
//! run to start, and leaves spawning to the controller actor.

use shared::{
    domain::{InputState, OutputState, UiState},
    protocol::Event,
};
use tracing::{debug, warn};

use crate::{
    stepper::{RunGate, RunToken, StepEmission},
    validator::validate,
};

#[derive(Debug)]
pub enum Effect {
    /// Nothing observable changed.
    Ignored,
    /// State changed; republish the merged view.
    Publish,
    /// State changed and a new run must be started with the given token.
    StartRun { target: u32, token: RunToken },
}

impl Effect {
    pub fn publishes(&self) -> bool {
        !matches!(self, Effect::Ignored)
    }
}

#[derive(Debug, Default)]
pub struct SummarizerState {
    input: InputState,
    output: OutputState,
    gate: RunGate,
}

impl SummarizerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn output(&self) -> &OutputState {
        &self.output
    }

    pub fn gate(&self) -> &RunGate {
        &self.gate
    }

    pub fn ui_state(&self) -> UiState {
        UiState::merge(&self.input, &self.output)
    }

    pub fn apply_event(&mut self, event: Event) -> Effect {
        match event {
            Event::InputChanged { text } => {
                let validation = validate(&text);
                debug!(text = %text, error = %validation.error, "input changed");
                self.input = InputState {
                    text,
                    error_message: validation.error,
                };
                Effect::Publish
            }
            Event::TriggerComputation => self.trigger(),
        }
    }

    fn trigger(&mut self) -> Effect {
        if !self.input.is_valid() {
            debug!(error = %self.input.error_message, "trigger ignored: input invalid");
            return Effect::Ignored;
        }
        let Some(target) = validate(&self.input.text).value else {
            debug!(text = %self.input.text, "trigger ignored: input unparseable");
            return Effect::Ignored;
        };
        if target == self.output.target {
            debug!(target, "trigger ignored: target unchanged");
            return Effect::Ignored;
        }

        self.output = OutputState::started(target);
        let token = self.gate.begin();
        Effect::StartRun { target, token }
    }

    /// Accepts an emission only from the live run. Returns whether the output
    /// changed.
    pub fn apply_step(&mut self, emission: StepEmission) -> bool {
        if emission.generation != self.gate.live_generation()
            || emission.target != self.output.target
        {
            warn!(
                target = emission.target,
                step = emission.step,
                generation = emission.generation,
                live_generation = self.gate.live_generation(),
                "dropping stale step emission"
            );
            return false;
        }

        self.output.series = emission.series;
        true
    }

    /// Cancels any in-flight run; later emissions from it are dropped.
    pub fn teardown(&mut self) {
        self.gate.cancel();
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
