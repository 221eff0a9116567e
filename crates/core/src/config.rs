//! Field attributes configured in the host and the options handed to the
//! browser when an editor is mounted.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::FieldviewError;

/// Editor height used when the host does not configure one.
pub const DEFAULT_HEIGHT: u32 = 320;

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

fn default_true() -> bool {
    true
}

/// Display attributes configured for a field using the Markdown editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldviewAttrs {
    /// Editor height in pixels. Accepts `480` or `"480px"` when deserializing.
    #[serde(deserialize_with = "deserialize_height")]
    pub height: u32,
    /// Let the editor grow with its content instead of using `height`.
    pub autogrow: bool,
    /// Focus the editor once it is mounted.
    pub autofocus: bool,
    /// Remove the image button from the toolbar.
    #[serde(alias = "hide_image_button")]
    pub hide_image_button: bool,
    /// Placeholder shown while the editor is empty.
    pub placeholder: String,
    /// Convert soft line breaks into Markdown hard breaks on sync.
    pub hardwrap: bool,
}

impl Default for FieldviewAttrs {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            autogrow: false,
            autofocus: false,
            hide_image_button: false,
            placeholder: String::new(),
            hardwrap: true,
        }
    }
}

impl FieldviewAttrs {
    /// Strictly deserializes a host attribute bag. `null` yields the defaults.
    pub fn try_from_json(value: &JsonValue) -> Result<Self, FieldviewError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value.clone()).map_err(FieldviewError::InvalidAttributes)
    }

    /// Reads a host attribute bag, keeping the default for every attribute
    /// that is missing, falsy, or of an unusable type.
    pub fn from_json(value: &JsonValue) -> Self {
        let mut attrs = Self::default();
        let Some(map) = value.as_object() else {
            if !value.is_null() {
                log::warn!("ignoring non-object fieldview attributes: {value}");
            }
            return attrs;
        };

        if let Some(raw) = lookup(map, &["height"]) {
            match lenient_height(raw) {
                Ok(Some(px)) => attrs.height = px,
                Ok(None) => {}
                Err(err) => log::warn!("{err}; using {DEFAULT_HEIGHT}px"),
            }
        }
        if let Some(flag) = lenient_bool(map, &["autogrow"]) {
            attrs.autogrow = flag;
        }
        if let Some(flag) = lenient_bool(map, &["autofocus"]) {
            attrs.autofocus = flag;
        }
        if let Some(flag) = lenient_bool(map, &["hideImageButton", "hide_image_button"]) {
            attrs.hide_image_button = flag;
        }
        if let Some(flag) = lenient_bool(map, &["hardwrap"]) {
            attrs.hardwrap = flag;
        }
        match lookup(map, &["placeholder"]) {
            None | Some(JsonValue::Null) => {}
            Some(JsonValue::String(text)) => attrs.placeholder = text.clone(),
            Some(JsonValue::Number(n)) => attrs.placeholder = n.to_string(),
            Some(other) => log::warn!("ignoring non-text placeholder: {other}"),
        }

        attrs
    }
}

/// Parses `"480"`, `"480px"` or `" 480 px "` into a pixel count.
pub fn parse_height(text: &str) -> Result<u32, FieldviewError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    digits
        .parse::<u32>()
        .map_err(|_| FieldviewError::InvalidHeight(text.to_string()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HeightRepr {
    Pixels(u32),
    Text(String),
}

fn deserialize_height<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match HeightRepr::deserialize(deserializer)? {
        HeightRepr::Pixels(px) => Ok(px),
        HeightRepr::Text(text) => parse_height(&text).map_err(serde::de::Error::custom),
    }
}

fn lookup<'a>(map: &'a Map<String, JsonValue>, keys: &[&str]) -> Option<&'a JsonValue> {
    keys.iter().find_map(|key| map.get(*key))
}

/// Zero, empty and `null` heights mean "not configured".
fn lenient_height(raw: &JsonValue) -> Result<Option<u32>, FieldviewError> {
    let px = match raw {
        JsonValue::Null => return Ok(None),
        JsonValue::Number(n) => n
            .as_u64()
            .and_then(|px| u32::try_from(px).ok())
            .ok_or_else(|| FieldviewError::InvalidHeight(n.to_string()))?,
        JsonValue::String(text) if text.trim().is_empty() => return Ok(None),
        JsonValue::String(text) => parse_height(text)?,
        other => return Err(FieldviewError::InvalidHeight(other.to_string())),
    };
    Ok((px > 0).then_some(px))
}

fn lenient_bool(map: &Map<String, JsonValue>, keys: &[&str]) -> Option<bool> {
    match lookup(map, keys)? {
        JsonValue::Bool(flag) => Some(*flag),
        JsonValue::Null => None,
        other => {
            log::warn!("ignoring non-boolean value for {}: {other}", keys[0]);
            None
        }
    }
}

/// Everything the browser glue needs to mount one editor instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountOptions {
    /// Id of the hidden textarea that carries the submitted Markdown.
    pub textarea_id: String,
    /// Id of the element the editor mounts into.
    pub editor_id: String,
    /// Editor height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
    /// Let the editor size itself to its content.
    #[serde(default)]
    pub autogrow: bool,
    /// Focus the editor after mounting.
    #[serde(default)]
    pub autofocus: bool,
    /// Remove the image toolbar button.
    #[serde(default)]
    pub hide_image_button: bool,
    /// Placeholder text.
    #[serde(default)]
    pub placeholder: String,
    /// Convert soft breaks on sync.
    #[serde(default = "default_true")]
    pub hardwrap: bool,
}

impl MountOptions {
    /// Combines element ids with the field's attributes.
    pub fn new(
        textarea_id: impl Into<String>,
        editor_id: impl Into<String>,
        attrs: &FieldviewAttrs,
    ) -> Self {
        Self {
            textarea_id: textarea_id.into(),
            editor_id: editor_id.into(),
            height: attrs.height,
            autogrow: attrs.autogrow,
            autofocus: attrs.autofocus,
            hide_image_button: attrs.hide_image_button,
            placeholder: attrs.placeholder.clone(),
            hardwrap: attrs.hardwrap,
        }
    }

    /// CSS height handed to the editor widget.
    pub fn css_height(&self) -> String {
        if self.autogrow {
            "auto".to_string()
        } else {
            format!("{}px", self.height)
        }
    }
}
