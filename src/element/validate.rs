//! Submission-time value validation.
//!
//! Validation is purely string-based: every entered value travels as a
//! string, and the predicate inspects the string encoding, never a parsed
//! typed value. An element with no `required` concept always validates.

use super::types::*;

/// Per-kind submission predicate over the entered string value.
pub trait ValidateValue {
    /// Returns whether `value` satisfies this element's constraints.
    fn validate(&self, value: &str) -> bool;
}

fn required_nonempty(required: bool, value: &str) -> bool {
    !required || !value.is_empty()
}

impl ValidateValue for TextFieldAttributes {
    fn validate(&self, value: &str) -> bool {
        required_nonempty(self.required, value)
    }
}

impl ValidateValue for NumberFieldAttributes {
    fn validate(&self, value: &str) -> bool {
        required_nonempty(self.required, value)
    }
}

impl ValidateValue for TextAreaFieldAttributes {
    fn validate(&self, value: &str) -> bool {
        required_nonempty(self.required, value)
    }
}

impl ValidateValue for DateFieldAttributes {
    fn validate(&self, value: &str) -> bool {
        required_nonempty(self.required, value)
    }
}

impl ValidateValue for SelectFieldAttributes {
    fn validate(&self, value: &str) -> bool {
        required_nonempty(self.required, value)
    }
}

impl ValidateValue for CheckboxFieldAttributes {
    /// A required checkbox accepts only the canonical `"true"` string.
    fn validate(&self, value: &str) -> bool {
        !self.required || value == "true"
    }
}

// Static elements never collect a value and always validate
impl ValidateValue for TitleFieldAttributes {
    fn validate(&self, _value: &str) -> bool { true }
}
impl ValidateValue for SubTitleFieldAttributes {
    fn validate(&self, _value: &str) -> bool { true }
}
impl ValidateValue for ParagraphFieldAttributes {
    fn validate(&self, _value: &str) -> bool { true }
}
impl ValidateValue for SeparatorFieldAttributes {
    fn validate(&self, _value: &str) -> bool { true }
}
impl ValidateValue for SpacerFieldAttributes {
    fn validate(&self, _value: &str) -> bool { true }
}
