//! Input validation and cancellable, time-staged triangular-number computation
//! behind a single-writer controller.

pub mod config;
pub mod controller;
pub mod error;
pub mod reducer;
pub mod stepper;
pub mod validator;

pub use config::SummarizerConfig;
pub use controller::{spawn_summarizer, SummarizerHandle};
pub use error::SummarizerError;
pub use reducer::{Effect, SummarizerState};
pub use stepper::{
    prefix_array, step_delay, triangular, RunGate, RunToken, StepEmission, Stepper,
};
pub use validator::{parse_input, validate, Validation, MAX_INPUT_LEN};

pub use shared::{
    domain::{InputState, OutputState, UiState},
    error::ValidationError,
    protocol::Event,
};
