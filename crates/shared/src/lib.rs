//! Plain state and event types shared by the summarizer core and its front-ends.

pub mod domain;
pub mod error;
pub mod protocol;
