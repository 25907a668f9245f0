//! Property editor support.
//!
//! Each element kind exposes a static list of [`PropertyField`]
//! descriptors the builder's properties panel renders, plus a `check`
//! that gates `applyChanges`: a commit with an out-of-range value is
//! refused at the panel and never reaches the designer session.

use serde::Serialize;

use super::types::*;

/// Widget kind for one editable attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertyKind {
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    TextArea,
    /// Boolean toggle.
    Switch,
    /// Bounded numeric slider.
    Slider { min: u32, max: u32, step: u32 },
    /// Free-entry string list (one entry per option).
    Options,
}

/// Descriptor for one editable attribute of an element kind.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyField {
    /// Attribute key inside `extraAttributes` (wire spelling).
    pub name: &'static str,
    /// Display label.
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: PropertyKind,
    /// Help text shown under the widget.
    pub help: &'static str,
}

/// Per-kind property panel contract.
pub trait PropertyEditor {
    /// Descriptors for the attributes this kind lets the author edit.
    fn property_fields() -> Vec<PropertyField>;

    /// Constraint check run when the panel commits.
    ///
    /// Returns the human-readable reason on refusal.
    fn check(&self) -> Result<(), String>;
}

fn check_len(field: &str, value: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.chars().count();
    if len < min {
        return Err(format!("{field} must be at least {min} characters"));
    }
    if len > max {
        return Err(format!("{field} must be at most {max} characters"));
    }
    Ok(())
}

fn check_range(field: &str, value: u32, min: u32, max: u32) -> Result<(), String> {
    if value < min || value > max {
        return Err(format!("{field} must be between {min} and {max}"));
    }
    Ok(())
}

fn label_field() -> PropertyField {
    PropertyField {
        name: "label",
        label: "Label",
        kind: PropertyKind::Text,
        help: "The label of the field. It will be displayed above the field.",
    }
}

fn helper_text_field() -> PropertyField {
    PropertyField {
        name: "helperText",
        label: "Helper text",
        kind: PropertyKind::Text,
        help: "The helper text of the field. It will be displayed below the field.",
    }
}

fn required_field() -> PropertyField {
    PropertyField {
        name: "required",
        label: "Required",
        kind: PropertyKind::Switch,
        help: "Whether the field must be filled before submitting.",
    }
}

fn place_holder_field() -> PropertyField {
    PropertyField {
        name: "placeHolder",
        label: "Placeholder",
        kind: PropertyKind::Text,
        help: "The placeholder of the field.",
    }
}

impl PropertyEditor for TextFieldAttributes {
    fn property_fields() -> Vec<PropertyField> {
        vec![label_field(), helper_text_field(), place_holder_field(), required_field()]
    }

    fn check(&self) -> Result<(), String> {
        check_len("label", &self.label, 2, 50)?;
        check_len("helper text", &self.helper_text, 0, 200)?;
        check_len("placeholder", &self.place_holder, 0, 50)
    }
}

impl PropertyEditor for NumberFieldAttributes {
    fn property_fields() -> Vec<PropertyField> {
        vec![label_field(), helper_text_field(), place_holder_field(), required_field()]
    }

    fn check(&self) -> Result<(), String> {
        check_len("label", &self.label, 2, 50)?;
        check_len("helper text", &self.helper_text, 0, 200)?;
        check_len("placeholder", &self.place_holder, 0, 50)
    }
}

impl PropertyEditor for TextAreaFieldAttributes {
    fn property_fields() -> Vec<PropertyField> {
        vec![
            label_field(),
            helper_text_field(),
            place_holder_field(),
            PropertyField {
                name: "rows",
                label: "Rows",
                kind: PropertyKind::Slider { min: 1, max: 10, step: 1 },
                help: "Visible rows of the textarea.",
            },
            required_field(),
        ]
    }

    fn check(&self) -> Result<(), String> {
        check_len("label", &self.label, 2, 50)?;
        check_len("helper text", &self.helper_text, 0, 200)?;
        check_len("placeholder", &self.place_holder, 0, 50)?;
        check_range("rows", self.rows, 1, 10)
    }
}

impl PropertyEditor for DateFieldAttributes {
    fn property_fields() -> Vec<PropertyField> {
        vec![label_field(), helper_text_field(), required_field()]
    }

    fn check(&self) -> Result<(), String> {
        check_len("label", &self.label, 2, 50)?;
        check_len("helper text", &self.helper_text, 0, 200)
    }
}

impl PropertyEditor for SelectFieldAttributes {
    fn property_fields() -> Vec<PropertyField> {
        vec![
            label_field(),
            helper_text_field(),
            place_holder_field(),
            PropertyField {
                name: "options",
                label: "Options",
                kind: PropertyKind::Options,
                help: "The options the respondent can pick from.",
            },
            required_field(),
        ]
    }

    fn check(&self) -> Result<(), String> {
        check_len("label", &self.label, 2, 50)?;
        check_len("helper text", &self.helper_text, 0, 200)?;
        check_len("placeholder", &self.place_holder, 0, 50)?;
        for option in &self.options {
            if option.is_empty() {
                return Err("options must not be empty".to_string());
            }
        }
        Ok(())
    }
}

impl PropertyEditor for CheckboxFieldAttributes {
    fn property_fields() -> Vec<PropertyField> {
        vec![label_field(), helper_text_field(), required_field()]
    }

    fn check(&self) -> Result<(), String> {
        check_len("label", &self.label, 2, 50)?;
        check_len("helper text", &self.helper_text, 0, 200)
    }
}

impl PropertyEditor for TitleFieldAttributes {
    fn property_fields() -> Vec<PropertyField> {
        vec![PropertyField {
            name: "title",
            label: "Title",
            kind: PropertyKind::Text,
            help: "The heading text.",
        }]
    }

    fn check(&self) -> Result<(), String> {
        check_len("title", &self.title, 2, 50)
    }
}

impl PropertyEditor for SubTitleFieldAttributes {
    fn property_fields() -> Vec<PropertyField> {
        vec![PropertyField {
            name: "title",
            label: "SubTitle",
            kind: PropertyKind::Text,
            help: "The subheading text.",
        }]
    }

    fn check(&self) -> Result<(), String> {
        check_len("title", &self.title, 2, 50)
    }
}

impl PropertyEditor for ParagraphFieldAttributes {
    fn property_fields() -> Vec<PropertyField> {
        vec![PropertyField {
            name: "text",
            label: "Text",
            kind: PropertyKind::TextArea,
            help: "The paragraph text.",
        }]
    }

    fn check(&self) -> Result<(), String> {
        check_len("text", &self.text, 2, 500)
    }
}

impl PropertyEditor for SeparatorFieldAttributes {
    fn property_fields() -> Vec<PropertyField> {
        Vec::new()
    }

    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

impl PropertyEditor for SpacerFieldAttributes {
    fn property_fields() -> Vec<PropertyField> {
        vec![PropertyField {
            name: "height",
            label: "Height (px)",
            kind: PropertyKind::Slider { min: 5, max: 200, step: 1 },
            help: "The height of the field.",
        }]
    }

    fn check(&self) -> Result<(), String> {
        check_range("height", self.height, 5, 200)
    }
}
