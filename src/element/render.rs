//! HTML rendering for form elements.
//!
//! Two render paths per element kind:
//!
//! - `preview_html`: the disabled, read-only card shown on the design
//!   canvas. Never emits an interactive control.
//! - `input_html`: the respondent-facing control on the public
//!   submission page. Inputs are named by instance id; the id is the
//!   only channel by which an entered value reaches the submission
//!   mapping.
//!
//! Styling is class-based and left to the embedding page.

use super::types::*;

/// Escape text for interpolation into HTML content and attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Per-kind HTML rendering.
pub trait RenderHtml {
    /// Disabled canvas representation for the builder.
    fn preview_html(&self) -> String;

    /// Interactive control for the submission page.
    ///
    /// `invalid` adds field-level error styling after a failed submit;
    /// `default_value` re-fills the entered value across re-renders.
    fn input_html(&self, id: &str, invalid: bool, default_value: Option<&str>) -> String;
}

fn label_html(label: &str, required: bool) -> String {
    format!(
        "<label>{}{}</label>",
        escape_html(label),
        if required { " *" } else { "" }
    )
}

fn helper_html(helper_text: &str) -> String {
    if helper_text.is_empty() {
        String::new()
    } else {
        format!("<p class=\"helper\">{}</p>", escape_html(helper_text))
    }
}

fn field_class(invalid: bool) -> &'static str {
    if invalid { "field invalid" } else { "field" }
}

impl RenderHtml for TextFieldAttributes {
    fn preview_html(&self) -> String {
        format!(
            "<div class=\"field\">{}<input type=\"text\" placeholder=\"{}\" readonly disabled>{}</div>",
            label_html(&self.label, self.required),
            escape_html(&self.place_holder),
            helper_html(&self.helper_text),
        )
    }

    fn input_html(&self, id: &str, invalid: bool, default_value: Option<&str>) -> String {
        format!(
            "<div class=\"{}\">{}<input type=\"text\" name=\"{}\" placeholder=\"{}\" value=\"{}\">{}</div>",
            field_class(invalid),
            label_html(&self.label, self.required),
            escape_html(id),
            escape_html(&self.place_holder),
            escape_html(default_value.unwrap_or("")),
            helper_html(&self.helper_text),
        )
    }
}

impl RenderHtml for NumberFieldAttributes {
    fn preview_html(&self) -> String {
        format!(
            "<div class=\"field\">{}<input type=\"number\" placeholder=\"{}\" readonly disabled>{}</div>",
            label_html(&self.label, self.required),
            escape_html(&self.place_holder),
            helper_html(&self.helper_text),
        )
    }

    fn input_html(&self, id: &str, invalid: bool, default_value: Option<&str>) -> String {
        format!(
            "<div class=\"{}\">{}<input type=\"number\" name=\"{}\" placeholder=\"{}\" value=\"{}\">{}</div>",
            field_class(invalid),
            label_html(&self.label, self.required),
            escape_html(id),
            escape_html(&self.place_holder),
            escape_html(default_value.unwrap_or("")),
            helper_html(&self.helper_text),
        )
    }
}

impl RenderHtml for TextAreaFieldAttributes {
    fn preview_html(&self) -> String {
        format!(
            "<div class=\"field\">{}<textarea rows=\"{}\" placeholder=\"{}\" readonly disabled></textarea>{}</div>",
            label_html(&self.label, self.required),
            self.rows,
            escape_html(&self.place_holder),
            helper_html(&self.helper_text),
        )
    }

    fn input_html(&self, id: &str, invalid: bool, default_value: Option<&str>) -> String {
        format!(
            "<div class=\"{}\">{}<textarea name=\"{}\" rows=\"{}\" placeholder=\"{}\">{}</textarea>{}</div>",
            field_class(invalid),
            label_html(&self.label, self.required),
            escape_html(id),
            self.rows,
            escape_html(&self.place_holder),
            escape_html(default_value.unwrap_or("")),
            helper_html(&self.helper_text),
        )
    }
}

impl RenderHtml for DateFieldAttributes {
    fn preview_html(&self) -> String {
        format!(
            "<div class=\"field\">{}<input type=\"date\" readonly disabled>{}</div>",
            label_html(&self.label, self.required),
            helper_html(&self.helper_text),
        )
    }

    fn input_html(&self, id: &str, invalid: bool, default_value: Option<&str>) -> String {
        format!(
            "<div class=\"{}\">{}<input type=\"date\" name=\"{}\" value=\"{}\">{}</div>",
            field_class(invalid),
            label_html(&self.label, self.required),
            escape_html(id),
            escape_html(default_value.unwrap_or("")),
            helper_html(&self.helper_text),
        )
    }
}

impl RenderHtml for SelectFieldAttributes {
    fn preview_html(&self) -> String {
        format!(
            "<div class=\"field\">{}<select disabled><option>{}</option></select>{}</div>",
            label_html(&self.label, self.required),
            escape_html(&self.place_holder),
            helper_html(&self.helper_text),
        )
    }

    fn input_html(&self, id: &str, invalid: bool, default_value: Option<&str>) -> String {
        let mut options = format!(
            "<option value=\"\" disabled{}>{}</option>",
            if default_value.is_none() { " selected" } else { "" },
            escape_html(&self.place_holder),
        );
        for option in &self.options {
            let selected = default_value == Some(option.as_str());
            options.push_str(&format!(
                "<option value=\"{}\"{}>{}</option>",
                escape_html(option),
                if selected { " selected" } else { "" },
                escape_html(option),
            ));
        }
        format!(
            "<div class=\"{}\">{}<select name=\"{}\">{}</select>{}</div>",
            field_class(invalid),
            label_html(&self.label, self.required),
            escape_html(id),
            options,
            helper_html(&self.helper_text),
        )
    }
}

impl RenderHtml for CheckboxFieldAttributes {
    fn preview_html(&self) -> String {
        format!(
            "<div class=\"field checkbox\"><input type=\"checkbox\" disabled>{}{}</div>",
            label_html(&self.label, self.required),
            helper_html(&self.helper_text),
        )
    }

    fn input_html(&self, id: &str, invalid: bool, default_value: Option<&str>) -> String {
        format!(
            "<div class=\"{} checkbox\"><input type=\"checkbox\" name=\"{}\" value=\"true\"{}>{}{}</div>",
            field_class(invalid),
            escape_html(id),
            if default_value == Some("true") { " checked" } else { "" },
            label_html(&self.label, self.required),
            helper_html(&self.helper_text),
        )
    }
}

impl RenderHtml for TitleFieldAttributes {
    fn preview_html(&self) -> String {
        format!("<h1 class=\"title\">{}</h1>", escape_html(&self.title))
    }

    fn input_html(&self, _id: &str, _invalid: bool, _default_value: Option<&str>) -> String {
        self.preview_html()
    }
}

impl RenderHtml for SubTitleFieldAttributes {
    fn preview_html(&self) -> String {
        format!("<h2 class=\"subtitle\">{}</h2>", escape_html(&self.title))
    }

    fn input_html(&self, _id: &str, _invalid: bool, _default_value: Option<&str>) -> String {
        self.preview_html()
    }
}

impl RenderHtml for ParagraphFieldAttributes {
    fn preview_html(&self) -> String {
        format!("<p class=\"paragraph\">{}</p>", escape_html(&self.text))
    }

    fn input_html(&self, _id: &str, _invalid: bool, _default_value: Option<&str>) -> String {
        self.preview_html()
    }
}

impl RenderHtml for SeparatorFieldAttributes {
    fn preview_html(&self) -> String {
        "<hr>".to_string()
    }

    fn input_html(&self, _id: &str, _invalid: bool, _default_value: Option<&str>) -> String {
        self.preview_html()
    }
}

impl RenderHtml for SpacerFieldAttributes {
    fn preview_html(&self) -> String {
        format!(
            "<div class=\"spacer-preview\">Spacer field: {}px</div>",
            self.height
        )
    }

    fn input_html(&self, _id: &str, _invalid: bool, _default_value: Option<&str>) -> String {
        format!("<div style=\"height:{}px\"></div>", self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b a="1">&'"#),
            "&lt;b a=&quot;1&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn test_preview_is_disabled() {
        let html = TextFieldAttributes::palette_default().preview_html();
        assert!(html.contains("disabled"));
        assert!(!html.contains("name="));
    }

    #[test]
    fn test_input_named_by_id() {
        let html = TextFieldAttributes::palette_default().input_html("el-1", false, None);
        assert!(html.contains("name=\"el-1\""));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_invalid_class() {
        let html = TextFieldAttributes::palette_default().input_html("el-1", true, None);
        assert!(html.contains("class=\"field invalid\""));
    }

    #[test]
    fn test_default_value_refilled() {
        let html =
            TextFieldAttributes::palette_default().input_html("el-1", false, Some("hello"));
        assert!(html.contains("value=\"hello\""));
    }

    #[test]
    fn test_required_marker() {
        let attrs = TextFieldAttributes {
            required: true,
            ..TextFieldAttributes::palette_default()
        };
        assert!(attrs.preview_html().contains("Text Field *"));
    }

    #[test]
    fn test_select_options_and_selection() {
        let attrs = SelectFieldAttributes {
            options: vec!["One".into(), "Two".into()],
            ..SelectFieldAttributes::palette_default()
        };
        let html = attrs.input_html("el-2", false, Some("Two"));
        assert!(html.contains("<option value=\"One\">One</option>"));
        assert!(html.contains("<option value=\"Two\" selected>Two</option>"));
    }

    #[test]
    fn test_checkbox_checked_state() {
        let attrs = CheckboxFieldAttributes::palette_default();
        assert!(attrs.input_html("c", false, Some("true")).contains("checked"));
        assert!(!attrs.input_html("c", false, Some("false")).contains("checked"));
    }

    #[test]
    fn test_user_content_escaped() {
        let attrs = TitleFieldAttributes {
            title: "<script>".into(),
            ..Default::default()
        };
        assert!(attrs.preview_html().contains("&lt;script&gt;"));
    }
}
