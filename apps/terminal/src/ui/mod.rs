//! Terminal rendering of published summarizer state.

pub mod render;

pub use render::{spawn_renderer, RenderMode};
