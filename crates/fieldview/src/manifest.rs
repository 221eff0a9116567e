//! Plugin registration metadata consumed by the host framework.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::codegen::loader_script;
use crate::fieldview::{ConfigField, Fieldview, MarkdownEditorFieldview};
use crate::markup::script;

/// Plugin API version understood by the host.
pub const PLUGIN_API_VERSION: u32 = 1;
/// Name the host registers the plugin under; also the public asset prefix.
pub const PLUGIN_NAME: &str = "tui";
/// Version used in public asset paths.
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Key of the Markdown editor in the host's fieldview table.
pub const FIELDVIEW_KEY: &str = "toastui_markdown_edit";

const PLUGIN_DESCRIPTION: &str = "WYSIWYG Markdown editor for String fields using TOAST UI Editor. \
Saves Markdown and preserves visual line breaks.";

/// One entry in the page `<head>` the host injects for this plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderAsset {
    /// External script URL.
    Script(String),
    /// Stylesheet URL.
    Css(String),
    /// Raw markup placed in the head.
    HeaderTag(String),
}

/// Directory the host serves this plugin's public files from.
pub fn public_path() -> String {
    format!("/plugins/public/{PLUGIN_NAME}@{PLUGIN_VERSION}")
}

/// Editor assets, the wasm glue, and the tag that starts loading it.
pub static HEADERS: Lazy<Vec<HeaderAsset>> = Lazy::new(|| {
    let base = public_path();
    vec![
        HeaderAsset::Script(format!("{base}/toastui-editor-all.min.js")),
        HeaderAsset::Css(format!("{base}/toastui-editor.min.css")),
        HeaderAsset::Script(format!("{base}/mdfield_wasm.js")),
        HeaderAsset::HeaderTag(script(&loader_script(&format!(
            "{base}/mdfield_wasm_bg.wasm"
        )))),
    ]
});

/// Metadata for one fieldview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldviewEntry {
    /// Display name.
    pub name: &'static str,
    /// Description.
    pub description: &'static str,
    /// Host field type.
    #[serde(rename = "type")]
    pub field_type: &'static str,
    /// Whether the view edits the value.
    #[serde(rename = "isEdit")]
    pub is_edit: bool,
    /// Configurable attributes.
    #[serde(rename = "configFields")]
    pub config_fields: Vec<ConfigField>,
}

impl FieldviewEntry {
    /// Collects the metadata of a fieldview.
    pub fn describe(view: &dyn Fieldview) -> Self {
        Self {
            name: view.name(),
            description: view.description(),
            field_type: view.field_type(),
            is_edit: view.is_edit(),
            config_fields: view.config_fields(),
        }
    }
}

/// Everything the host needs to register the plugin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginManifest {
    /// Plugin API version.
    pub sc_plugin_api_version: u32,
    /// Plugin name.
    pub plugin_name: &'static str,
    /// Plugin description.
    pub description: &'static str,
    /// Head assets.
    pub headers: Vec<HeaderAsset>,
    /// Fieldviews keyed by their registration name.
    pub fieldviews: BTreeMap<&'static str, FieldviewEntry>,
}

/// Builds the manifest for this plugin.
pub fn plugin_manifest() -> PluginManifest {
    let mut fieldviews = BTreeMap::new();
    fieldviews.insert(
        FIELDVIEW_KEY,
        FieldviewEntry::describe(&MarkdownEditorFieldview),
    );
    PluginManifest {
        sc_plugin_api_version: PLUGIN_API_VERSION,
        plugin_name: PLUGIN_NAME,
        description: PLUGIN_DESCRIPTION,
        headers: HEADERS.clone(),
        fieldviews,
    }
}
