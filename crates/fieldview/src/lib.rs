#![deny(missing_docs)]
//! mdfield host glue: field markup, mount-script codegen and plugin metadata.

/// Inline script generation.
pub mod codegen;
/// Fieldview contract and attribute declarations.
pub mod fieldview;
/// Plugin registration metadata.
pub mod manifest;
/// HTML builders.
pub mod markup;
/// Field markup rendering.
pub mod render;

pub use fieldview::{
    ConfigField, ConfigFieldType, Fieldview, MarkdownEditorFieldview, config_fields,
};
pub use manifest::{
    FIELDVIEW_KEY, FieldviewEntry, HEADERS, HeaderAsset, PLUGIN_API_VERSION, PLUGIN_NAME,
    PLUGIN_VERSION, PluginManifest, plugin_manifest,
};
pub use render::{FieldIds, render_fieldview, render_fieldview_with_ids};
