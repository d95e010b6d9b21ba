use contracts::shared::serde_utils::value_to_string;
use contracts::shared::sheet::SheetRows;
use serde_json::Value;
use wasm_bindgen::prelude::*;

/// JS binding for parsing workbooks through SheetJS
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = parseExcelFile, catch)]
    pub fn parse_excel_file(data: &[u8]) -> Result<JsValue, JsValue>;
}

/// Rows of the first worksheet of `file`, header included.
pub async fn read_excel_from_file(file: web_sys::File) -> Result<SheetRows, String> {
    use wasm_bindgen_futures::JsFuture;

    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;

    let uint8_array = js_sys::Uint8Array::new(&array_buffer);
    let mut bytes = vec![0; uint8_array.length() as usize];
    uint8_array.copy_to(&mut bytes);

    let result = parse_excel_file(&bytes).map_err(|e| format!("Failed to parse workbook: {:?}", e))?;

    let rows = parse_js_rows(result)?;
    log::debug!("parsed '{}': {} rows", file.name(), rows.len());
    Ok(rows)
}

/// Cells arrive as strings, numbers, booleans or nulls; all become strings.
fn parse_js_rows(js_value: JsValue) -> Result<SheetRows, String> {
    let rows: Vec<Vec<Value>> = serde_wasm_bindgen::from_value(js_value)
        .map_err(|e| format!("Unexpected sheet layout: {}", e))?;

    Ok(rows
        .iter()
        .map(|row| row.iter().map(value_to_string).collect())
        .collect())
}
