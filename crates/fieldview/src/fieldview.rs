//! The fieldview contract exposed to the host framework.

use mdfield_core::{DEFAULT_HEIGHT, FieldviewAttrs, FieldviewError};
use serde::Serialize;
use serde_json::{Value as JsonValue, json};

use crate::render::render_fieldview;

/// Input widget the host shows when configuring an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfigFieldType {
    /// Whole number input.
    Integer,
    /// Checkbox.
    Bool,
    /// Single-line text input.
    String,
}

/// Declaration of one configurable attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigField {
    /// Attribute key, as read by [`FieldviewAttrs::from_json`].
    pub name: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Input widget type.
    #[serde(rename = "type")]
    pub field_type: ConfigFieldType,
    /// Default value applied when the attribute is absent.
    pub default: JsonValue,
    /// Optional helper text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sublabel: Option<&'static str>,
}

/// A host-renderable field editor.
pub trait Fieldview {
    /// Display name shown in the host's fieldview picker.
    fn name(&self) -> &'static str;
    /// One-line description.
    fn description(&self) -> &'static str;
    /// Host field type this view edits.
    fn field_type(&self) -> &'static str;
    /// Whether this is an edit (rather than show) view.
    fn is_edit(&self) -> bool;
    /// Configurable attributes.
    fn config_fields(&self) -> Vec<ConfigField>;
    /// Renders the field markup for `(fieldName, currentValue, attributes, cssClass)`.
    fn run(
        &self,
        name: &str,
        value: Option<&str>,
        attrs: &JsonValue,
        class: &str,
    ) -> Result<String, FieldviewError>;
}

/// WYSIWYG Markdown editor for string fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownEditorFieldview;

impl Fieldview for MarkdownEditorFieldview {
    fn name(&self) -> &'static str {
        "ToastUI Markdown Editor"
    }

    fn description(&self) -> &'static str {
        "WYSIWYG Markdown editor (TOAST UI) for String fields"
    }

    fn field_type(&self) -> &'static str {
        "String"
    }

    fn is_edit(&self) -> bool {
        true
    }

    fn config_fields(&self) -> Vec<ConfigField> {
        config_fields()
    }

    fn run(
        &self,
        name: &str,
        value: Option<&str>,
        attrs: &JsonValue,
        class: &str,
    ) -> Result<String, FieldviewError> {
        render_fieldview(name, value, &FieldviewAttrs::from_json(attrs), class)
    }
}

/// Attribute declarations for the Markdown editor, defaults included.
pub fn config_fields() -> Vec<ConfigField> {
    let defaults = FieldviewAttrs::default();
    vec![
        ConfigField {
            name: "height",
            label: "Height (px)",
            field_type: ConfigFieldType::Integer,
            default: json!(DEFAULT_HEIGHT),
            sublabel: None,
        },
        ConfigField {
            name: "autogrow",
            label: "Auto-grow",
            field_type: ConfigFieldType::Bool,
            default: json!(defaults.autogrow),
            sublabel: Some("Grow with the content instead of using a fixed height"),
        },
        ConfigField {
            name: "autofocus",
            label: "Autofocus",
            field_type: ConfigFieldType::Bool,
            default: json!(defaults.autofocus),
            sublabel: None,
        },
        ConfigField {
            name: "hideImageButton",
            label: "Hide image button",
            field_type: ConfigFieldType::Bool,
            default: json!(defaults.hide_image_button),
            sublabel: None,
        },
        ConfigField {
            name: "placeholder",
            label: "Placeholder",
            field_type: ConfigFieldType::String,
            default: json!(defaults.placeholder),
            sublabel: None,
        },
        ConfigField {
            name: "hardwrap",
            label: "Preserve line breaks",
            field_type: ConfigFieldType::Bool,
            default: json!(defaults.hardwrap),
            sublabel: Some("Save visual line breaks as Markdown hard breaks (two trailing spaces)"),
        },
    ]
}
