//! Browser downloads of generated or fetched files.
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Save `bytes` as `filename` through a temporary link.
pub fn download_bytes(bytes: &[u8], mime: &str, filename: &str) -> Result<(), String> {
    let blob = create_blob(bytes, mime)?;
    download_blob(&blob, filename)
}

fn create_blob(bytes: &[u8], mime: &str) -> Result<Blob, String> {
    let data = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&data.buffer());

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_buffer_source_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Start a browser download of `blob`
pub fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
