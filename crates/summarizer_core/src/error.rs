use shared::protocol::Event;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("summarizer event queue is full; retry {}", .0.name())]
    QueueFull(Event),
    #[error("summarizer controller is no longer running")]
    Disconnected,
    #[error("summarizer controller task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
