//! Getting the chosen `File` out of input and drag-and-drop events.
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

/// First file of an `<input type="file">` change event.
pub fn file_from_input(ev: &Event) -> Option<File> {
    let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
    let file = input.files()?.get(0);
    // Let the same file be picked again after an error.
    input.set_value("");
    file
}

/// First file dropped on a drop zone.
pub fn file_from_drop(ev: &DragEvent) -> Option<File> {
    ev.prevent_default();
    ev.data_transfer()?.files()?.get(0)
}
