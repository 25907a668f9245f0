//! # Form Element Model
//!
//! A single type hierarchy that is both the Rust API and the persisted
//! layout format. `ElementInstance` is constructible in Rust and
//! round-trips through the JSON shape the builder saves:
//!
//! ```ignore
//! use encuesta::element::*;
//!
//! // Registry construction (what a palette drop does)
//! let instance = construct("TextField", generate_id()).unwrap();
//!
//! // JSON deserialization of a persisted layout
//! let layout = parse_layout(
//!     r#"[{"id":"a","type":"TextField","extraAttributes":{"label":"Name"}}]"#,
//! ).unwrap();
//! ```
//!
//! The element set is closed: every tag that can appear in a persisted
//! document has exactly one enum variant, and an unknown tag fails the
//! load loudly instead of being dropped.

pub mod properties;
pub mod render;
pub mod types;
pub mod validate;

pub use properties::{PropertyEditor, PropertyField, PropertyKind};
pub use render::{RenderHtml, escape_html};
pub use types::*;
pub use validate::ValidateValue;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::FormError;

/// Define the Element enum and all dispatch methods from a single list.
///
/// Adding a new element kind: add one line here, then define the
/// attribute struct in `types.rs` with `impl ElementMeta` (plus the
/// `ValidateValue`, `RenderHtml`, and `PropertyEditor` impls in their
/// modules). The compiler enforces the rest.
macro_rules! define_elements {
    ($($variant:ident($attrs:ty)),+ $(,)?) => {
        /// The unified element enum.
        ///
        /// Each variant is one field kind carrying its own strongly-typed
        /// attribute struct. The serde attributes produce the wire shape
        /// `{"type": "TextField", "extraAttributes": {...}}`.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "type", content = "extraAttributes")]
        pub enum Element {
            $($variant($attrs),)+
        }

        impl Element {
            /// The type tag, as it appears on the wire.
            pub fn tag(&self) -> &'static str {
                match self { $(Element::$variant(_) => stringify!($variant),)+ }
            }

            /// Palette display label (from [`ElementMeta::label`]).
            pub fn label(&self) -> &'static str {
                match self { $(Element::$variant(_) => <$attrs>::label(),)+ }
            }

            /// Palette icon key (from [`ElementMeta::icon`]).
            pub fn icon(&self) -> &'static str {
                match self { $(Element::$variant(_) => <$attrs>::icon(),)+ }
            }

            /// Submission predicate over the entered string value.
            pub fn validate(&self, value: &str) -> bool {
                match self { $(Element::$variant(a) => a.validate(value),)+ }
            }

            /// Disabled canvas representation for the builder.
            pub fn preview_html(&self) -> String {
                match self { $(Element::$variant(a) => a.preview_html(),)+ }
            }

            /// Respondent-facing control, named by instance id.
            pub fn input_html(&self, id: &str, invalid: bool, default_value: Option<&str>) -> String {
                match self { $(Element::$variant(a) => a.input_html(id, invalid, default_value),)+ }
            }

            /// Property panel descriptors for this instance's kind.
            pub fn property_fields(&self) -> Vec<PropertyField> {
                match self { $(Element::$variant(_) => <$attrs>::property_fields(),)+ }
            }

            /// Design-time constraint check gating a property commit.
            pub fn check(&self) -> Result<(), FormError> {
                let result = match self { $(Element::$variant(a) => a.check(),)+ };
                result.map_err(FormError::Invalid)
            }

            /// Palette default for a tag. `None` for unknown tags.
            pub fn palette_default_for(kind: &str) -> Option<Element> {
                match kind {
                    $(stringify!($variant) => Some(Element::$variant(<$attrs>::palette_default())),)+
                    _ => None,
                }
            }

            /// Palette defaults for every element kind.
            ///
            /// Single source of truth: [`element_types`] and
            /// [`construct`] both derive from this list.
            pub fn all_palette_defaults() -> Vec<Self> {
                vec![$(Element::$variant(<$attrs>::palette_default()),)+]
            }
        }

        /// Property panel descriptors for a tag. `None` for unknown tags.
        pub fn property_fields_for(kind: &str) -> Option<Vec<PropertyField>> {
            match kind {
                $(stringify!($variant) => Some(<$attrs>::property_fields()),)+
                _ => None,
            }
        }
    };
}

define_elements! {
    TextField(TextFieldAttributes),
    TitleField(TitleFieldAttributes),
    SubTitleField(SubTitleFieldAttributes),
    ParagraphField(ParagraphFieldAttributes),
    SeparatorField(SeparatorFieldAttributes),
    SpacerField(SpacerFieldAttributes),
    NumberField(NumberFieldAttributes),
    TextAreaField(TextAreaFieldAttributes),
    DateField(DateFieldAttributes),
    SelectField(SelectFieldAttributes),
    CheckboxField(CheckboxFieldAttributes),
}

/// One placed element within a design document.
///
/// The id is generated at construction time and stays stable for the
/// instance's lifetime; reordering, removal, selection, and submission
/// values all key on it.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementInstance {
    pub id: String,
    pub element: Element,
}

impl ElementInstance {
    /// Replace this instance's attributes from a property-panel commit.
    ///
    /// The kind is fixed: `attributes` must match this instance's own
    /// tag, and the kind's constraint check runs before anything is
    /// produced. On refusal the existing instance is untouched.
    pub fn apply_attributes(&self, attributes: Value) -> Result<ElementInstance, FormError> {
        let mut obj = serde_json::Map::new();
        obj.insert("type".into(), Value::String(self.element.tag().to_string()));
        obj.insert("extraAttributes".into(), attributes);
        let element: Element = serde_json::from_value(Value::Object(obj))
            .map_err(|e| FormError::Invalid(e.to_string()))?;
        element.check()?;
        Ok(ElementInstance { id: self.id.clone(), element })
    }
}

// The wire shape is `{"id": ..., "type": ..., "extraAttributes": {...}}`:
// the instance id sits next to the tag, not inside the attribute bag.
// Serde's adjacent tagging handles type/extraAttributes; the id is
// spliced in and out by hand.
impl Serialize for ElementInstance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut value = serde_json::to_value(&self.element).map_err(serde::ser::Error::custom)?;
        let obj = value
            .as_object_mut()
            .ok_or_else(|| serde::ser::Error::custom("element did not serialize to an object"))?;
        obj.insert("id".into(), Value::String(self.id.clone()));
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ElementInstance {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let mut obj = serde_json::Map::deserialize(deserializer)?;
        let id = match obj.remove("id") {
            Some(Value::String(s)) => s,
            Some(_) => return Err(serde::de::Error::custom("element 'id' must be a string")),
            None => return Err(serde::de::Error::custom("element missing 'id'")),
        };
        // Attribute-less kinds may omit the key entirely
        obj.entry("extraAttributes")
            .or_insert_with(|| Value::Object(serde_json::Map::new()));
        let element = serde_json::from_value(Value::Object(obj)).map_err(serde::de::Error::custom)?;
        Ok(ElementInstance { id, element })
    }
}

/// Element type metadata for the palette sidebar.
#[derive(Debug, Clone, Serialize)]
pub struct ElementTypeMeta {
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Palette metadata for every element kind.
///
/// Derived from [`Element::all_palette_defaults`], an exhaustive match
/// on the enum, so the compiler catches new variants.
pub fn element_types() -> Vec<ElementTypeMeta> {
    Element::all_palette_defaults()
        .iter()
        .map(|e| ElementTypeMeta {
            type_name: e.tag(),
            label: e.label(),
            icon: e.icon(),
        })
        .collect()
}

/// Registry constructor: a fresh instance of `kind` with its palette
/// defaults. Returns `None` for unknown tags.
pub fn construct(kind: &str, id: impl Into<String>) -> Option<ElementInstance> {
    Element::palette_default_for(kind).map(|element| ElementInstance { id: id.into(), element })
}

/// Generate a fresh instance id.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Parse a persisted layout (serialized ordered element array).
///
/// Errors carry the failing index so a corrupt document names the
/// element that broke the load rather than failing silently.
pub fn parse_layout(json: &str) -> Result<Vec<ElementInstance>, FormError> {
    let values: Vec<Value> =
        serde_json::from_str(json).map_err(|e| FormError::Layout(e.to_string()))?;
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            serde_json::from_value::<ElementInstance>(v)
                .map_err(|e| FormError::Layout(format!("content[{i}]: {e}")))
        })
        .collect()
}

/// Serialize an ordered element sequence to the persisted layout format.
pub fn serialize_layout(elements: &[ElementInstance]) -> Result<String, FormError> {
    serde_json::to_string(elements).map_err(|e| FormError::Layout(e.to_string()))
}
