#![deny(missing_docs)]
//! Node.js bindings that let a Node host render mdfield fields and run the
//! hard-break pass server-side.

use std::time::Instant;

use mdfield_core::{FieldviewAttrs, FieldviewError, HardBreakTransformer};
use mdfield_fieldview::{Fieldview, MarkdownEditorFieldview};
use napi_derive::napi;
use rayon::prelude::*;
use serde_json::Value as JsonValue;

/// NAPI-exposed data structures.
pub mod types;
pub use types::*;

/// Batches smaller than this are processed on the calling thread.
const PARALLEL_THRESHOLD: usize = 32;

fn to_napi_error(err: FieldviewError) -> napi::Error {
    napi::Error::from_reason(err.to_string())
}

/// Converts soft line breaks into Markdown hard breaks.
///
/// `hardwrap` defaults to `true`; when `false` the input is returned unchanged.
#[napi(js_name = "hardBreakFix")]
pub fn hard_break_fix(markdown: String, hardwrap: Option<bool>) -> String {
    mdfield_core::hard_break_fix(&markdown, hardwrap.unwrap_or(true)).into_owned()
}

/// Same as `hardBreakFix`, with line/break counts and warnings.
#[napi(js_name = "hardBreakFixReport")]
pub fn hard_break_fix_report(markdown: String, hardwrap: Option<bool>) -> HardBreakReport {
    HardBreakTransformer::new(hardwrap.unwrap_or(true))
        .transform_with_diagnostics(&markdown)
        .into()
}

/// Rewrites many stored documents at once, e.g. when enabling `hardwrap` on
/// an existing field.
///
/// Results keep the input order.
#[napi(js_name = "hardBreakFixBatch")]
pub fn hard_break_fix_batch(
    inputs: Vec<BatchInput>,
    options: Option<BatchOptions>,
) -> BatchProcessingResult {
    let start = Instant::now();
    let opts = options.unwrap_or_default();
    let transformer = HardBreakTransformer::new(opts.hardwrap.unwrap_or(true));

    let pool = opts.max_threads.and_then(|max_threads| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads as usize)
            .build()
            .ok()
    });

    let process_input = |input: BatchInput| -> BatchResult {
        let report = transformer.transform_with_diagnostics(&input.markdown);
        BatchResult {
            id: input.id,
            output: report.output,
            breaks_inserted: report.breaks_inserted as u32,
        }
    };

    let total = inputs.len() as u32;
    let results: Vec<BatchResult> = if inputs.len() < PARALLEL_THRESHOLD {
        inputs.into_iter().map(process_input).collect()
    } else if let Some(pool) = pool {
        pool.install(|| inputs.into_par_iter().map(process_input).collect())
    } else {
        inputs.into_par_iter().map(process_input).collect()
    };

    let changed = results.iter().filter(|r| r.breaks_inserted > 0).count() as u32;

    BatchProcessingResult {
        results,
        stats: BatchStats {
            total,
            changed,
            processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        },
    }
}

/// Renders the Markdown editor for a field.
///
/// `attrs` is the host's attribute bag; unusable values fall back to their
/// defaults.
#[napi(js_name = "renderFieldview")]
pub fn render_fieldview(
    name: String,
    value: Option<String>,
    attrs: Option<JsonValue>,
    cls: Option<String>,
) -> napi::Result<String> {
    MarkdownEditorFieldview
        .run(
            &name,
            value.as_deref(),
            &attrs.unwrap_or(JsonValue::Null),
            cls.as_deref().unwrap_or_default(),
        )
        .map_err(to_napi_error)
}

/// Validates an attribute bag strictly and returns it with defaults filled in.
#[napi(js_name = "normalizeAttrs")]
pub fn normalize_attrs(attrs: JsonValue) -> napi::Result<JsonValue> {
    let attrs = FieldviewAttrs::try_from_json(&attrs).map_err(to_napi_error)?;
    serde_json::to_value(attrs)
        .map_err(|e| to_napi_error(FieldviewError::Serialization(e)))
}

/// Plugin registration metadata: headers, fieldviews and their config fields.
#[napi(js_name = "pluginManifest")]
pub fn plugin_manifest() -> napi::Result<JsonValue> {
    serde_json::to_value(mdfield_fieldview::plugin_manifest())
        .map_err(|e| to_napi_error(FieldviewError::Serialization(e)))
}

/// Attribute declarations for the Markdown editor.
#[napi(js_name = "configFields")]
pub fn config_fields() -> napi::Result<JsonValue> {
    serde_json::to_value(mdfield_fieldview::config_fields())
        .map_err(|e| to_napi_error(FieldviewError::Serialization(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hard_break_fix_defaults_to_enabled() {
        assert_eq!(hard_break_fix("a\nb".into(), None), "a  \nb");
        assert_eq!(hard_break_fix("a\nb".into(), Some(false)), "a\nb");
    }

    #[test]
    fn report_surfaces_unclosed_fence() {
        let report = hard_break_fix_report("x\ny\n```\ncode".into(), None);
        assert_eq!(report.output, "x  \ny  \n```\ncode");
        assert_eq!(report.lines, 4);
        assert_eq!(report.breaks_inserted, 2);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].kind, "unclosed-code-fence");
        assert_eq!(report.warnings[0].line, 3);
        assert_eq!(report.warnings[0].column, 1);
    }

    #[test]
    fn batch_keeps_order_in_parallel() {
        let inputs: Vec<BatchInput> = (0..100)
            .map(|i| BatchInput {
                id: i.to_string(),
                markdown: if i % 2 == 0 { "a\nb".into() } else { "a\n\nb".into() },
            })
            .collect();
        let result = hard_break_fix_batch(
            inputs,
            Some(BatchOptions {
                max_threads: Some(2),
                hardwrap: None,
            }),
        );
        assert_eq!(result.stats.total, 100);
        assert_eq!(result.stats.changed, 50);
        for (i, r) in result.results.iter().enumerate() {
            assert_eq!(r.id, i.to_string());
            let expected = if i % 2 == 0 { "a  \nb" } else { "a\n\nb" };
            assert_eq!(r.output, expected);
        }
    }

    #[test]
    fn batch_disabled_changes_nothing() {
        let result = hard_break_fix_batch(
            vec![BatchInput {
                id: "1".into(),
                markdown: "a\nb".into(),
            }],
            Some(BatchOptions {
                max_threads: None,
                hardwrap: Some(false),
            }),
        );
        assert_eq!(result.stats.changed, 0);
        assert_eq!(result.results[0].output, "a\nb");
    }

    #[test]
    fn render_fieldview_uses_lenient_attrs() {
        let html = render_fieldview(
            "body".into(),
            Some("hi".into()),
            Some(json!({ "hardwrap": false, "height": [] })),
            Some("form-control".into()),
        )
        .unwrap();
        assert!(html.starts_with("<div class=\"form-control\"><textarea name=\"body\""));
        assert!(html.contains("\"hardwrap\":false"));
        assert!(html.contains("\"height\":320"));
    }

    #[test]
    fn normalize_attrs_rejects_bad_types() {
        assert!(normalize_attrs(json!({ "autofocus": "yes" })).is_err());
        assert_eq!(
            normalize_attrs(json!({ "height": "200px" })).unwrap()["height"],
            json!(200)
        );
    }

    #[test]
    fn manifest_serializes() {
        let manifest = plugin_manifest().unwrap();
        assert_eq!(manifest["plugin_name"], "tui");
        assert_eq!(
            manifest["fieldviews"]["toastui_markdown_edit"]["isEdit"],
            json!(true)
        );
        assert_eq!(config_fields().unwrap().as_array().unwrap().len(), 6);
    }
}
