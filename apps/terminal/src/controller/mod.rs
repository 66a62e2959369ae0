//! Controller layer: forwards terminal input to the summarizer as events.

pub mod orchestration;
