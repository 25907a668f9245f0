//! # Submission Runtime
//!
//! The respondent-facing half of the system: given a published layout,
//! collect entered values keyed by element id, validate every element in
//! document order, and produce the flat submission payload. Validation
//! failures stay local: the failing ids drive field-level error styling
//! on a full re-render, and the store is never contacted with an
//! invalid submission.

use std::collections::{BTreeSet, HashMap};

use crate::element::{ElementInstance, escape_html, parse_layout};
use crate::error::FormError;

/// One respondent's in-progress pass over a published form.
#[derive(Debug, Clone)]
pub struct SubmissionForm {
    content: Vec<ElementInstance>,
    values: HashMap<String, String>,
    errors: BTreeSet<String>,
}

impl SubmissionForm {
    /// Wrap an already-parsed layout.
    pub fn new(content: Vec<ElementInstance>) -> Self {
        Self {
            content,
            values: HashMap::new(),
            errors: BTreeSet::new(),
        }
    }

    /// Parse a persisted layout and wrap it. Fails loudly on malformed
    /// content or unknown element types.
    pub fn from_layout(json: &str) -> Result<Self, FormError> {
        Ok(Self::new(parse_layout(json)?))
    }

    /// The form's elements in display order.
    pub fn content(&self) -> &[ElementInstance] {
        &self.content
    }

    /// Record the entered value for one element. This is the only way a
    /// value enters the submission mapping.
    pub fn enter_value(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
    }

    /// The entered value for an element, if any.
    pub fn value(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Ids that failed the last [`validate_all`](Self::validate_all) pass.
    pub fn errors(&self) -> &BTreeSet<String> {
        &self.errors
    }

    /// Run every element's predicate in document order, recording the
    /// set of failing ids. Returns whether the form is submittable.
    ///
    /// A missing entry validates as the empty string, so an untouched
    /// required field fails exactly like a cleared one.
    pub fn validate_all(&mut self) -> bool {
        self.errors.clear();
        for instance in &self.content {
            let value = self.values.get(&instance.id).map_or("", String::as_str);
            if !instance.element.validate(value) {
                self.errors.insert(instance.id.clone());
            }
        }
        self.errors.is_empty()
    }

    /// Serialize the value mapping as the flat `{id: value}` submission
    /// payload. Refuses while the form is invalid.
    pub fn payload(&mut self) -> Result<String, FormError> {
        if !self.validate_all() {
            return Err(FormError::Invalid(format!(
                "{} field(s) failed validation",
                self.errors.len()
            )));
        }
        serde_json::to_string(&self.values).map_err(|e| FormError::Layout(e.to_string()))
    }

    /// Render the full form body: every element's input control, with
    /// error styling from the last validation pass and entered values
    /// re-filled.
    pub fn render_html(&self, action_url: &str) -> String {
        let mut out = format!(
            "<form method=\"post\" action=\"{}\">",
            escape_html(action_url)
        );
        for instance in &self.content {
            let invalid = self.errors.contains(&instance.id);
            let default_value = self.value(&instance.id);
            out.push_str(&instance.element.input_html(&instance.id, invalid, default_value));
        }
        out.push_str("<button type=\"submit\">Submit</button></form>");
        out
    }
}

/// Validate a value mapping against a layout without building a
/// `SubmissionForm`. Returns the set of failing element ids; the
/// submission is acceptable iff it is empty.
pub fn validate_values(
    content: &[ElementInstance],
    values: &HashMap<String, String>,
) -> BTreeSet<String> {
    let mut failed = BTreeSet::new();
    for instance in content {
        let value = values.get(&instance.id).map_or("", String::as_str);
        if !instance.element.validate(value) {
            failed.insert(instance.id.clone());
        }
    }
    failed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::construct;

    fn required_text(id: &str) -> ElementInstance {
        construct("TextField", id)
            .unwrap()
            .apply_attributes(serde_json::json!({
                "label": "Name",
                "helperText": "",
                "required": true,
                "placeHolder": ""
            }))
            .unwrap()
    }

    #[test]
    fn test_empty_required_field_blocks_submit() {
        let mut form = SubmissionForm::new(vec![required_text("t1")]);
        assert!(!form.validate_all());
        assert!(form.errors().contains("t1"));
        assert!(form.payload().is_err());
    }

    #[test]
    fn test_untouched_and_cleared_fail_alike() {
        let mut form = SubmissionForm::new(vec![required_text("t1")]);
        assert!(!form.validate_all());
        form.enter_value("t1", "");
        assert!(!form.validate_all());
    }

    #[test]
    fn test_valid_form_produces_flat_payload() {
        let mut form = SubmissionForm::new(vec![
            required_text("t1"),
            construct("SeparatorField", "sep").unwrap(),
        ]);
        form.enter_value("t1", "hello");
        assert!(form.validate_all());

        let payload = form.payload().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(parsed, serde_json::json!({"t1": "hello"}));
    }

    #[test]
    fn test_errors_clear_after_fix() {
        let mut form = SubmissionForm::new(vec![required_text("t1")]);
        assert!(!form.validate_all());
        form.enter_value("t1", "x");
        assert!(form.validate_all());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_static_elements_never_block() {
        let mut form = SubmissionForm::new(vec![
            construct("TitleField", "h").unwrap(),
            construct("SpacerField", "s").unwrap(),
        ]);
        assert!(form.validate_all());
    }

    #[test]
    fn test_render_marks_invalid_and_keeps_values() {
        let mut form = SubmissionForm::new(vec![required_text("t1"), required_text("t2")]);
        form.enter_value("t2", "kept");
        form.validate_all();

        let html = form.render_html("/submit/tok");
        assert!(html.contains("field invalid"));
        assert!(html.contains("value=\"kept\""));
    }

    #[test]
    fn test_from_layout_rejects_unknown_types() {
        let err =
            SubmissionForm::from_layout(r#"[{"id":"1","type":"Nope","extraAttributes":{}}]"#)
                .unwrap_err();
        assert!(matches!(err, FormError::Layout(_)));
    }

    #[test]
    fn test_validate_values_standalone() {
        let content = vec![required_text("a"), required_text("b")];
        let mut values = HashMap::new();
        values.insert("a".to_string(), "x".to_string());
        let failed = validate_values(&content, &values);
        assert_eq!(failed.into_iter().collect::<Vec<_>>(), vec!["b"]);
    }
}
