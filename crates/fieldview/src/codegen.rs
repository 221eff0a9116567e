//! Inline script generation for the field markup and plugin headers.
//!
//! The browser side lives in the `mdfield-wasm` crate, built with
//! `wasm-bindgen --target no-modules --no-modules-global mdfield`. The loader
//! header starts fetching the module and stores its init promise in
//! `window.mdfieldReady`; every field script waits on that promise before
//! calling `mdfield.mountEditor`.

use mdfield_core::{FieldviewError, MountOptions};
use serde::Serialize;

/// Global under which the wasm glue is exposed.
pub const GLUE_GLOBAL: &str = "mdfield";

/// Window property holding the glue's init promise.
pub const READY_GLOBAL: &str = "mdfieldReady";

/// Serializes a value as JSON that is safe to inline in a `<script>` element.
///
/// `<` only ever appears inside JSON strings, where `\u003c` is equivalent,
/// so no `</script>` or `<!--` sequence can survive.
///
/// # Examples
///
/// ```
/// use mdfield_fieldview::codegen::script_json;
///
/// assert_eq!(script_json(&"</script>").unwrap(), "\"\\u003c/script>\"");
/// ```
pub fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, FieldviewError> {
    let json = serde_json::to_string(value).map_err(FieldviewError::Serialization)?;
    Ok(json.replace('<', "\\u003c"))
}

/// Converts a Rust string to a JavaScript string literal safe for inline scripts.
///
/// # Examples
///
/// ```
/// use mdfield_fieldview::codegen::js_string_literal;
///
/// assert_eq!(js_string_literal("hello"), "\"hello\"");
/// assert_eq!(js_string_literal("say \"hi\""), "\"say \\\"hi\\\"\"");
/// ```
pub fn js_string_literal(value: &str) -> String {
    script_json(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Script that mounts one editor once the glue has loaded.
///
/// Does nothing if the loader header is missing from the page.
pub fn mount_script(options: &MountOptions) -> Result<String, FieldviewError> {
    let config = script_json(options)?;
    Ok(format!(
        "window.{READY_GLOBAL}&&window.{READY_GLOBAL}.then(function(){{{GLUE_GLOBAL}.mountEditor({config});}});"
    ))
}

/// Header script that starts loading the wasm glue from `wasm_url`.
pub fn loader_script(wasm_url: &str) -> String {
    format!(
        "window.{READY_GLOBAL}=window.{READY_GLOBAL}||{GLUE_GLOBAL}({{module_or_path:{}}});",
        js_string_literal(wasm_url)
    )
}
