use js_sys::{Function, Reflect};
use mdfield_core::{FieldviewAttrs, MountOptions};
use mdfield_wasm::{hard_break_fix_js, mount_editor};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlFormElement, HtmlTextAreaElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Minimal stand-in for `toastui.Editor` that records what the glue does.
const STUB_EDITOR: &str = r#"
globalThis.toastui = {
  Editor: class {
    constructor(options) {
      this.markdown = options.initialValue;
      this.handlers = {};
      this.restored = [];
      globalThis.mdfieldTestEditor = this;
    }
    getMarkdown() { return this.markdown; }
    setMarkdown(markdown) { this.markdown = markdown; this.restored.push(markdown); }
    on(event, handler) { this.handlers[event] = handler; }
    removeToolbarItem() {}
    focus() {}
  },
};
"#;

fn get(target: &JsValue, key: &str) -> JsValue {
    Reflect::get(target, &JsValue::from_str(key)).expect("property lookup")
}

fn editor_markdown(editor: &JsValue) -> Option<String> {
    get(editor, "markdown").as_string()
}

async fn next_tick() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 10)
            .expect("schedule timer");
    });
    JsFuture::from(promise).await.expect("timer");
}

#[wasm_bindgen_test]
fn hard_break_fix_defaults_to_enabled() {
    assert_eq!(hard_break_fix_js("hello\nworld", None), "hello  \nworld");
    assert_eq!(hard_break_fix_js("hello\nworld", Some(true)), "hello  \nworld");
}

#[wasm_bindgen_test]
fn hard_break_fix_disabled_is_identity() {
    assert_eq!(hard_break_fix_js("hello\nworld", Some(false)), "hello\nworld");
}

#[wasm_bindgen_test]
fn hard_break_fix_skips_structure() {
    assert_eq!(
        hard_break_fix_js("# Title\nBody\nmore\n- item\n```\na\nb\n```", None),
        "# Title\nBody  \nmore\n- item\n```\na\nb\n```"
    );
}

#[wasm_bindgen_test]
fn mount_without_elements_is_a_no_op() {
    let options = serde_wasm_bindgen::to_value(&MountOptions::new(
        "in_missing_1",
        "ed_missing_1",
        &FieldviewAttrs::default(),
    ))
    .expect("serialize options");
    assert!(mount_editor(options).is_ok());
}

#[wasm_bindgen_test]
fn mount_rejects_malformed_options() {
    assert!(mount_editor(JsValue::from_str("not options")).is_err());
}

#[wasm_bindgen_test]
async fn editor_syncs_textarea_and_restores_on_reset() {
    Function::new_no_args(STUB_EDITOR)
        .call0(&JsValue::UNDEFINED)
        .expect("install editor stub");

    let document = web_sys::window()
        .expect("window")
        .document()
        .expect("document");
    let form: HtmlFormElement = document
        .create_element("form")
        .expect("form")
        .dyn_into()
        .expect("form element");
    let textarea: HtmlTextAreaElement = document
        .create_element("textarea")
        .expect("textarea")
        .dyn_into()
        .expect("textarea element");
    textarea.set_id("in_sync_1");
    textarea.set_default_value("first\nsecond");
    let mount_point = document.create_element("div").expect("div");
    mount_point.set_id("ed_sync_1");
    form.append_child(&textarea).expect("append textarea");
    form.append_child(&mount_point).expect("append div");
    document
        .body()
        .expect("body")
        .append_child(&form)
        .expect("append form");

    let options = serde_wasm_bindgen::to_value(&MountOptions::new(
        "in_sync_1",
        "ed_sync_1",
        &FieldviewAttrs::default(),
    ))
    .expect("serialize options");
    mount_editor(options).expect("mount");

    let editor = get(&js_sys::global(), "mdfieldTestEditor");
    assert_eq!(editor_markdown(&editor).as_deref(), Some("first\nsecond"));

    // Editor change: textarea receives the converted Markdown.
    Reflect::set(&editor, &"markdown".into(), &"one\ntwo".into()).expect("set markdown");
    get(&get(&editor, "handlers"), "change")
        .dyn_into::<Function>()
        .expect("change handler")
        .call0(&JsValue::UNDEFINED)
        .expect("run change handler");
    assert_eq!(textarea.value(), "one  \ntwo");

    // Form submit.
    Reflect::set(&editor, &"markdown".into(), &"three\nfour".into()).expect("set markdown");
    form.dispatch_event(&Event::new("submit").expect("event"))
        .expect("dispatch submit");
    assert_eq!(textarea.value(), "three  \nfour");

    // Form reset: the textarea is restored at once, the editor on the next tick.
    form.reset();
    assert_eq!(textarea.value(), "first\nsecond");
    assert_eq!(editor_markdown(&editor).as_deref(), Some("three\nfour"));

    next_tick().await;
    assert_eq!(editor_markdown(&editor).as_deref(), Some("first\nsecond"));
    assert_eq!(
        js_sys::Array::from(&get(&editor, "restored")).length(),
        1
    );
}
