use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_TEXT: &str = "0";
pub const INPUT_PROMPT: &str = "Enter a number";

/// Raw text as typed plus the validation message for it. An empty
/// `error_message` means the text is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub text: String,
    pub error_message: String,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            text: DEFAULT_INPUT_TEXT.to_string(),
            error_message: String::new(),
        }
    }
}

impl InputState {
    pub fn is_valid(&self) -> bool {
        self.error_message.is_empty()
    }
}

/// The target a computation was started for and the latest array emitted for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputState {
    pub target: u32,
    pub series: Vec<u64>,
}

impl OutputState {
    pub fn started(target: u32) -> Self {
        Self {
            target,
            series: Vec::new(),
        }
    }

    /// A run for `target` has delivered every array it will produce.
    pub fn is_complete(&self) -> bool {
        self.series.len() == self.target as usize
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub input_text: String,
    pub input_error: String,
    pub target: u32,
    pub series: Vec<u64>,
}

impl UiState {
    pub fn merge(input: &InputState, output: &OutputState) -> Self {
        Self {
            input_text: input.text.clone(),
            input_error: input.error_message.clone(),
            target: output.target,
            series: output.series.clone(),
        }
    }

    pub fn can_trigger(&self) -> bool {
        self.input_error.is_empty()
    }

    pub fn input_label(&self) -> &str {
        if self.input_error.is_empty() {
            INPUT_PROMPT
        } else {
            &self.input_error
        }
    }

    /// Target on the first line, then one triangular number per line.
    pub fn render_output(&self) -> String {
        let mut out = format!("{}:\n", self.target);
        let lines: Vec<String> = self.series.iter().map(u64::to_string).collect();
        out.push_str(&lines.join("\n"));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_copies_both_cells() {
        let input = InputState {
            text: "7x".into(),
            error_message: "Input is not numeric".into(),
        };
        let output = OutputState {
            target: 3,
            series: vec![1, 3],
        };

        let ui = UiState::merge(&input, &output);
        assert_eq!(ui.input_text, "7x");
        assert_eq!(ui.input_error, "Input is not numeric");
        assert_eq!(ui.target, 3);
        assert_eq!(ui.series, vec![1, 3]);
        assert!(!ui.can_trigger());
        assert_eq!(ui.input_label(), "Input is not numeric");
    }

    #[test]
    fn startup_state_is_valid_zero() {
        let ui = UiState::merge(&InputState::default(), &OutputState::default());
        assert_eq!(ui.input_text, "0");
        assert!(ui.can_trigger());
        assert_eq!(ui.input_label(), INPUT_PROMPT);
        assert_eq!(ui.target, 0);
        assert!(ui.series.is_empty());
    }

    #[test]
    fn render_output_lists_one_value_per_line() {
        let ui = UiState {
            target: 3,
            series: vec![1, 3, 6],
            ..UiState::default()
        };
        assert_eq!(ui.render_output(), "3:\n1\n3\n6");
        assert_eq!(UiState::default().render_output(), "0:\n");
    }

    #[test]
    fn completion_tracks_series_length() {
        assert!(OutputState::default().is_complete());
        assert!(!OutputState::started(2).is_complete());
        let done = OutputState {
            target: 2,
            series: vec![1, 3],
        };
        assert!(done.is_complete());
    }
}
