//! Field markup: hidden textarea, editor mount point and mount script.

use std::sync::atomic::{AtomicU64, Ordering};

use mdfield_core::{FieldviewAttrs, FieldviewError, MountOptions};

use crate::codegen::mount_script;
use crate::markup::{div, script, textarea};

static NEXT_NONCE: AtomicU64 = AtomicU64::new(1);

/// Element ids for one rendered field instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIds {
    /// Hidden textarea carrying the submitted Markdown.
    pub textarea: String,
    /// Element the editor mounts into.
    pub editor: String,
}

impl FieldIds {
    /// Builds `in_{field}_{nonce}` / `ed_{field}_{nonce}`.
    pub fn new(field_name: &str, nonce: &str) -> Self {
        let field = id_fragment(field_name);
        Self {
            textarea: format!("in_{field}_{nonce}"),
            editor: format!("ed_{field}_{nonce}"),
        }
    }

    /// Ids with a fresh process-wide nonce, so the same field can be rendered
    /// several times on one page.
    pub fn next(field_name: &str) -> Self {
        let nonce = NEXT_NONCE.fetch_add(1, Ordering::Relaxed);
        Self::new(field_name, &base36(nonce))
    }
}

/// Renders the field with fresh element ids.
pub fn render_fieldview(
    name: &str,
    value: Option<&str>,
    attrs: &FieldviewAttrs,
    class: &str,
) -> Result<String, FieldviewError> {
    render_fieldview_with_ids(name, value, attrs, class, &FieldIds::next(name))
}

/// Renders the field with caller-chosen element ids.
pub fn render_fieldview_with_ids(
    name: &str,
    value: Option<&str>,
    attrs: &FieldviewAttrs,
    class: &str,
    ids: &FieldIds,
) -> Result<String, FieldviewError> {
    let options = MountOptions::new(ids.textarea.as_str(), ids.editor.as_str(), attrs);
    let mount = mount_script(&options)?;

    let hidden = textarea(
        &[
            ("name", name),
            ("id", ids.textarea.as_str()),
            ("style", "display:none"),
        ],
        value.unwrap_or_default(),
    );
    let editor = div(&[("id", ids.editor.as_str())], "");

    Ok(div(
        &[("class", class)],
        &[hidden, editor, script(&mount)].concat(),
    ))
}

/// Reduces a field name to characters that are safe inside an element id.
fn id_fragment(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}
