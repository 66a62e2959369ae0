use std::io::Write;

use shared::domain::UiState;
use tokio::{sync::broadcast, task::JoinHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Text,
    Json,
}

pub fn render(ui: &UiState, mode: RenderMode) -> String {
    match mode {
        RenderMode::Text => format!(
            "[{}] {}\n{}\n",
            ui.input_label(),
            ui.input_text,
            ui.render_output()
        ),
        RenderMode::Json => match serde_json::to_string(ui) {
            Ok(line) => line,
            Err(err) => {
                tracing::error!("failed to encode ui state: {err}");
                String::new()
            }
        },
    }
}

/// Prints every published state until the summarizer goes away.
pub fn spawn_renderer(
    mut updates: broadcast::Receiver<UiState>,
    mode: RenderMode,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match updates.recv().await {
                Ok(ui) => {
                    let mut stdout = std::io::stdout();
                    if let Err(err) = writeln!(stdout, "{}", render(&ui, mode)) {
                        tracing::warn!("failed to write ui state: {err}");
                        return;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "renderer fell behind; skipping to latest state");
                }
                Err(broadcast::error::RecvError::Closed) => return,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UiState {
        UiState {
            input_text: "3".into(),
            input_error: String::new(),
            target: 3,
            series: vec![1, 3, 6],
        }
    }

    #[test]
    fn text_mode_shows_label_input_and_series() {
        assert_eq!(
            render(&sample(), RenderMode::Text),
            "[Enter a number] 3\n3:\n1\n3\n6\n"
        );
    }

    #[test]
    fn text_mode_shows_error_in_place_of_prompt() {
        let ui = UiState {
            input_text: "333".into(),
            input_error: "Input is too long".into(),
            ..UiState::default()
        };
        assert_eq!(render(&ui, RenderMode::Text), "[Input is too long] 333\n0:\n\n");
    }

    #[test]
    fn json_mode_is_one_line() {
        let line = render(&sample(), RenderMode::Json);
        assert!(!line.contains('\n'));
        let decoded: UiState = serde_json::from_str(&line).expect("decode");
        assert_eq!(decoded, sample());
    }
}
