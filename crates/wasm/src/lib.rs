//! Browser glue for the mdfield Markdown editor.
//!
//! Built with `wasm-bindgen --target no-modules --no-modules-global mdfield`
//! so the host's field scripts can call `mdfield.mountEditor(options)`.

use std::rc::Rc;

use mdfield_core::{MountOptions, hard_break_fix};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlTextAreaElement};

// ============================================================================
// Editor widget
// ============================================================================

#[wasm_bindgen(js_namespace = toastui)]
extern "C" {
    /// TOAST UI editor instance.
    #[wasm_bindgen(js_name = Editor)]
    type ToastEditor;

    #[wasm_bindgen(constructor, js_class = "Editor", catch)]
    fn new(options: &JsValue) -> Result<ToastEditor, JsValue>;

    #[wasm_bindgen(method, js_name = getMarkdown)]
    fn get_markdown(this: &ToastEditor) -> String;

    #[wasm_bindgen(method, js_name = setMarkdown)]
    fn set_markdown(this: &ToastEditor, markdown: &str);

    #[wasm_bindgen(method)]
    fn on(this: &ToastEditor, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method, js_name = removeToolbarItem)]
    fn remove_toolbar_item(this: &ToastEditor, name: &str);

    #[wasm_bindgen(method)]
    fn focus(this: &ToastEditor);
}

/// Constructor options for the editor, minus `el` which is set separately.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EditorOptions<'a> {
    height: String,
    initial_edit_type: &'static str,
    usage_statistics: bool,
    hide_mode_switch: bool,
    placeholder: &'a str,
    initial_value: String,
}

fn js_error(err: JsValue) -> JsError {
    JsError::new(&err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

fn create_editor(
    options: &MountOptions,
    mount_point: &Element,
    initial_value: String,
) -> Result<ToastEditor, JsError> {
    let editor_options = EditorOptions {
        height: options.css_height(),
        initial_edit_type: "wysiwyg",
        usage_statistics: false,
        hide_mode_switch: true,
        placeholder: &options.placeholder,
        initial_value,
    };
    let js_options = serde_wasm_bindgen::to_value(&editor_options)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))?;
    js_sys::Reflect::set(&js_options, &JsValue::from_str("el"), mount_point).map_err(js_error)?;

    let editor = ToastEditor::new(&js_options).map_err(js_error)?;
    if options.hide_image_button {
        editor.remove_toolbar_item("image");
    }
    if options.autofocus {
        editor.focus();
    }
    Ok(editor)
}

// ============================================================================
// Public API
// ============================================================================

/// Converts soft line breaks into Markdown hard breaks.
///
/// `hardwrap` defaults to `true`; when `false` the input is returned unchanged.
#[wasm_bindgen(js_name = hardBreakFix)]
pub fn hard_break_fix_js(markdown: &str, hardwrap: Option<bool>) -> String {
    hard_break_fix(markdown, hardwrap.unwrap_or(true)).into_owned()
}

/// Mounts an editor over the field described by `options` and keeps the
/// hidden textarea in sync with it.
///
/// The textarea receives the editor's Markdown, passed through the hard-break
/// pass, on every editor change and on form submit. On form reset the
/// textarea's restored value is pushed back into the editor on the next tick,
/// after the browser has reset the form controls.
///
/// Returns `Ok(())` without doing anything when there is no document, the
/// elements are missing, or the editor library has not been loaded.
#[wasm_bindgen(js_name = mountEditor)]
pub fn mount_editor(options: JsValue) -> Result<(), JsError> {
    let options: MountOptions = serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsError::new(&format!("Invalid mount options: {}", e)))?;

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::debug!("no document available; skipping editor mount");
        return Ok(());
    };

    let textarea = document
        .get_element_by_id(&options.textarea_id)
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok());
    let mount_point = document.get_element_by_id(&options.editor_id);
    let (Some(textarea), Some(mount_point)) = (textarea, mount_point) else {
        log::debug!(
            "field elements #{} / #{} not found; skipping editor mount",
            options.textarea_id,
            options.editor_id
        );
        return Ok(());
    };

    let has_editor = js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("toastui"))
        .unwrap_or(false);
    if !has_editor {
        log::debug!("toastui is not loaded; skipping editor mount");
        return Ok(());
    }

    let editor = Rc::new(create_editor(&options, &mount_point, textarea.value())?);

    let sync: Rc<dyn Fn()> = {
        let editor = Rc::clone(&editor);
        let textarea = textarea.clone();
        let hardwrap = options.hardwrap;
        Rc::new(move || {
            let markdown = editor.get_markdown();
            textarea.set_value(&hard_break_fix(&markdown, hardwrap));
        })
    };

    let on_change = {
        let sync = Rc::clone(&sync);
        Closure::<dyn FnMut()>::new(move || (*sync)())
    };
    editor.on("change", on_change.as_ref().unchecked_ref());
    on_change.forget();

    let Some(form) = mount_point.closest("form").ok().flatten() else {
        return Ok(());
    };

    let on_submit = {
        let sync = Rc::clone(&sync);
        Closure::<dyn FnMut()>::new(move || (*sync)())
    };
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(js_error)?;
    on_submit.forget();

    let on_reset = {
        let editor = Rc::clone(&editor);
        let textarea = textarea.clone();
        Closure::<dyn FnMut()>::new(move || {
            let editor = Rc::clone(&editor);
            let textarea = textarea.clone();
            let restore = Closure::once_into_js(move || editor.set_markdown(&textarea.value()));
            let Some(window) = web_sys::window() else {
                log::debug!("no window available; editor not restored after reset");
                return;
            };
            if let Err(err) =
                window.set_timeout_with_callback_and_timeout_and_arguments_0(restore.unchecked_ref(), 0)
            {
                log::debug!("failed to schedule editor restore after reset: {err:?}");
            }
        })
    };
    form.add_event_listener_with_callback("reset", on_reset.as_ref().unchecked_ref())
        .map_err(js_error)?;
    on_reset.forget();

    Ok(())
}
