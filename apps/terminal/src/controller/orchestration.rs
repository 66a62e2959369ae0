//! Dispatch helpers from typed lines to the summarizer event queue.

use shared::{domain::UiState, protocol::Event};
use summarizer_core::{SummarizerError, SummarizerHandle};

pub fn dispatch_event(handle: &SummarizerHandle, event: Event, status: &mut String) -> bool {
    let event_name = event.name();
    match handle.submit(event) {
        Ok(()) => {
            tracing::debug!(event = event_name, "queued terminal->summarizer event");
            true
        }
        Err(SummarizerError::QueueFull(_)) => {
            *status = "Summarizer event queue is full; please retry".to_string();
            false
        }
        Err(err) => {
            *status = format!("Summarizer unavailable: {err}");
            false
        }
    }
}

/// Forwards `line` as the new input and, once the controller has taken it,
/// triggers a run when the input is valid. Returns the state the trigger
/// decision was made on.
pub async fn submit_line(
    handle: &SummarizerHandle,
    line: &str,
    status: &mut String,
) -> Result<UiState, SummarizerError> {
    if !dispatch_event(handle, Event::input(line), status) {
        return Ok(handle.current());
    }

    let ui = handle.wait_until(|ui| ui.input_text == line).await?;
    if ui.can_trigger() {
        dispatch_event(handle, Event::TriggerComputation, status);
    } else {
        *status = ui.input_label().to_string();
    }
    Ok(ui)
}
