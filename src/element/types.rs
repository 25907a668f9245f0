//! Attribute struct types for the form element model.
//!
//! All types derive `Serialize + Deserialize` so the same types work for
//! both Rust API construction and JSON deserialization of persisted
//! layouts.
//!
//! Each attribute struct implements [`ElementMeta`] to declare its
//! palette label, icon key, and palette default. This metadata is used
//! by the builder sidebar and the API.

use serde::{Deserialize, Serialize};

/// Metadata that every element attribute struct must provide.
///
/// The label, icon, and palette default live next to each struct
/// definition, so adding a new element kind is self-contained: implement
/// this trait and the compiler will guide you to the remaining exhaustive
/// matches in `Element`.
pub trait ElementMeta: Sized {
    /// Palette display label (e.g. "Text Field", "Checkbox Field").
    fn label() -> &'static str;

    /// Static icon key for the frontend palette button.
    fn icon() -> &'static str;

    /// Attribute values a freshly constructed instance starts with.
    ///
    /// Distinct from `Default`: palette defaults carry example content
    /// so a dropped element is immediately recognizable on the canvas,
    /// not blank.
    fn palette_default() -> Self;
}

/// Extra attribute keys this crate does not model.
///
/// Persisted layouts may carry keys written by newer or older builds;
/// they are kept verbatim so a load-then-save cycle never discards them.
pub type ExtraKeys = serde_json::Map<String, serde_json::Value>;

fn default_spacer_height() -> u32 {
    20
}

fn default_textarea_rows() -> u32 {
    3
}

// ============================================================================
// INPUT ELEMENTS
// ============================================================================

/// Single-line text input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TextFieldAttributes {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub helper_text: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub place_holder: String,
    #[serde(flatten)]
    pub rest: ExtraKeys,
}

impl ElementMeta for TextFieldAttributes {
    fn label() -> &'static str { "Text Field" }
    fn icon() -> &'static str { "text" }
    fn palette_default() -> Self {
        Self {
            label: "Text Field".into(),
            helper_text: "Helper text".into(),
            required: false,
            place_holder: "Value here...".into(),
            ..Default::default()
        }
    }
}

/// Numeric input. Values still travel as strings; validation is
/// length-based, not parse-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NumberFieldAttributes {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub helper_text: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub place_holder: String,
    #[serde(flatten)]
    pub rest: ExtraKeys,
}

impl ElementMeta for NumberFieldAttributes {
    fn label() -> &'static str { "Number Field" }
    fn icon() -> &'static str { "number" }
    fn palette_default() -> Self {
        Self {
            label: "Number Field".into(),
            helper_text: "Helper text".into(),
            required: false,
            place_holder: "0".into(),
            ..Default::default()
        }
    }
}

/// Multi-line text input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAreaFieldAttributes {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub helper_text: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub place_holder: String,
    /// Visible rows of the textarea (1–10).
    #[serde(default = "default_textarea_rows")]
    pub rows: u32,
    #[serde(flatten)]
    pub rest: ExtraKeys,
}

impl Default for TextAreaFieldAttributes {
    fn default() -> Self {
        Self {
            label: String::new(),
            helper_text: String::new(),
            required: false,
            place_holder: String::new(),
            rows: 3,
            rest: ExtraKeys::new(),
        }
    }
}

impl ElementMeta for TextAreaFieldAttributes {
    fn label() -> &'static str { "TextArea Field" }
    fn icon() -> &'static str { "textarea" }
    fn palette_default() -> Self {
        Self {
            label: "Text area".into(),
            helper_text: "Helper text".into(),
            required: false,
            place_holder: "Value here...".into(),
            rows: 3,
            ..Default::default()
        }
    }
}

/// Date picker. The entered value is the date's string encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DateFieldAttributes {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub helper_text: String,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub rest: ExtraKeys,
}

impl ElementMeta for DateFieldAttributes {
    fn label() -> &'static str { "Date Field" }
    fn icon() -> &'static str { "calendar" }
    fn palette_default() -> Self {
        Self {
            label: "Date Field".into(),
            helper_text: "Pick a date".into(),
            required: false,
            ..Default::default()
        }
    }
}

/// Dropdown with author-defined options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SelectFieldAttributes {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub helper_text: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub place_holder: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(flatten)]
    pub rest: ExtraKeys,
}

impl ElementMeta for SelectFieldAttributes {
    fn label() -> &'static str { "Select Field" }
    fn icon() -> &'static str { "dropdown" }
    fn palette_default() -> Self {
        Self {
            label: "Select Field".into(),
            helper_text: "Helper text".into(),
            required: false,
            place_holder: "Value here...".into(),
            options: Vec::new(),
            ..Default::default()
        }
    }
}

/// Checkbox. The canonical "checked" value on the wire is the string
/// `"true"`; anything else counts as unchecked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxFieldAttributes {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub helper_text: String,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub rest: ExtraKeys,
}

impl ElementMeta for CheckboxFieldAttributes {
    fn label() -> &'static str { "Checkbox Field" }
    fn icon() -> &'static str { "checkbox" }
    fn palette_default() -> Self {
        Self {
            label: "Checkbox Field".into(),
            helper_text: "Helper text".into(),
            required: false,
            ..Default::default()
        }
    }
}

// ============================================================================
// STATIC ELEMENTS
// ============================================================================

/// Large heading. Never collects a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TitleFieldAttributes {
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub rest: ExtraKeys,
}

impl ElementMeta for TitleFieldAttributes {
    fn label() -> &'static str { "Title Field" }
    fn icon() -> &'static str { "heading-1" }
    fn palette_default() -> Self {
        Self { title: "Title field".into(), ..Default::default() }
    }
}

/// Secondary heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubTitleFieldAttributes {
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub rest: ExtraKeys,
}

impl ElementMeta for SubTitleFieldAttributes {
    fn label() -> &'static str { "SubTitle Field" }
    fn icon() -> &'static str { "heading-2" }
    fn palette_default() -> Self {
        Self { title: "SubTitle field".into(), ..Default::default() }
    }
}

/// Static paragraph of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphFieldAttributes {
    #[serde(default)]
    pub text: String,
    #[serde(flatten)]
    pub rest: ExtraKeys,
}

impl ElementMeta for ParagraphFieldAttributes {
    fn label() -> &'static str { "Paragraph Field" }
    fn icon() -> &'static str { "paragraph" }
    fn palette_default() -> Self {
        Self { text: "Text here".into(), ..Default::default() }
    }
}

/// Horizontal rule. Carries no attributes of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SeparatorFieldAttributes {
    #[serde(flatten)]
    pub rest: ExtraKeys,
}

impl ElementMeta for SeparatorFieldAttributes {
    fn label() -> &'static str { "Separator Field" }
    fn icon() -> &'static str { "separator" }
    fn palette_default() -> Self {
        Self::default()
    }
}

/// Vertical whitespace of a configurable height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacerFieldAttributes {
    /// Height in pixels (5–200).
    #[serde(default = "default_spacer_height")]
    pub height: u32,
    #[serde(flatten)]
    pub rest: ExtraKeys,
}

impl Default for SpacerFieldAttributes {
    fn default() -> Self {
        Self { height: 20, rest: ExtraKeys::new() }
    }
}

impl ElementMeta for SpacerFieldAttributes {
    fn label() -> &'static str { "Spacer Field" }
    fn icon() -> &'static str { "spacer" }
    fn palette_default() -> Self {
        Self::default()
    }
}
