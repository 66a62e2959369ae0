use shared::error::ValidationError;

/// Longest accepted input, in characters.
pub const MAX_INPUT_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub value: Option<u32>,
    /// Empty when the text is valid.
    pub error: String,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.error.is_empty()
    }
}

/// Rules apply in order: length first, then digits. Empty text has no digits
/// to parse and is reported as not numeric.
pub fn parse_input(text: &str) -> Result<u32, ValidationError> {
    if text.chars().count() > MAX_INPUT_LEN {
        return Err(ValidationError::TooLong);
    }
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NotNumeric);
    }
    text.parse::<u32>().map_err(|_| ValidationError::NotNumeric)
}

pub fn validate(text: &str) -> Validation {
    match parse_input(text) {
        Ok(value) => Validation {
            value: Some(value),
            error: String::new(),
        },
        Err(err) => Validation {
            value: None,
            error: err.message(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_one_and_two_digit_numbers() {
        assert_eq!(validate("0").value, Some(0));
        assert_eq!(validate("7").value, Some(7));
        assert_eq!(validate("07").value, Some(7));
        assert_eq!(validate("99").value, Some(99));
        assert!(validate("42").is_valid());
    }

    #[test]
    fn length_is_checked_before_digits() {
        assert_eq!(validate("100").error, "Input is too long");
        assert_eq!(validate("abc").error, "Input is too long");
        assert_eq!(validate("1a").error, "Input is not numeric");
        assert_eq!(validate("-1").error, "Input is not numeric");
        assert_eq!(validate(" 1").error, "Input is not numeric");
    }

    #[test]
    fn empty_text_is_not_numeric() {
        let result = validate("");
        assert_eq!(result.value, None);
        assert_eq!(result.error, "Input is not numeric");
        assert_eq!(parse_input(""), Err(ValidationError::NotNumeric));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // two characters, four bytes
        assert_eq!(validate("éé").error, "Input is not numeric");
        assert_eq!(validate("٣").error, "Input is not numeric");
        assert_eq!(validate("ééé").error, "Input is too long");
    }

    proptest! {
        #[test]
        fn long_text_is_too_long(text in ".{3,12}") {
            prop_assert_eq!(validate(&text).error, "Input is too long");
            prop_assert_eq!(validate(&text).value, None);
        }

        #[test]
        fn short_text_with_non_digit_is_not_numeric(
            digit in "[0-9]?",
            other in "[^0-9]",
            other_first in any::<bool>(),
        ) {
            let text = if other_first {
                format!("{other}{digit}")
            } else {
                format!("{digit}{other}")
            };
            prop_assert_eq!(validate(&text).error, "Input is not numeric");
            prop_assert_eq!(validate(&text).value, None);
        }

        #[test]
        fn digit_text_parses_to_its_value(text in "[0-9]{1,2}") {
            let result = validate(&text);
            prop_assert_eq!(result.error, "");
            prop_assert_eq!(result.value, Some(text.parse::<u32>().unwrap()));
        }
    }
}
