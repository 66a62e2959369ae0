use serde::{Deserialize, Serialize};

/// User intents forwarded by a front-end to the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Event {
    InputChanged { text: String },
    TriggerComputation,
}

impl Event {
    pub fn input(text: impl Into<String>) -> Self {
        Self::InputChanged { text: text.into() }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Event::InputChanged { .. } => "input_changed",
            Event::TriggerComputation => "trigger_computation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_use_tagged_wire_shape() {
        let json = serde_json::to_string(&Event::input("12")).expect("serialize");
        assert_eq!(json, r#"{"type":"input_changed","payload":{"text":"12"}}"#);

        let trigger: Event =
            serde_json::from_str(r#"{"type":"trigger_computation"}"#).expect("deserialize");
        assert_eq!(trigger, Event::TriggerComputation);
    }
}
