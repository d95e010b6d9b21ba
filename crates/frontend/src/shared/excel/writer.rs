use contracts::shared::sheet::SheetExport;
use wasm_bindgen::prelude::*;

use crate::shared::export::{download_bytes, XLSX_MIME};

#[wasm_bindgen]
extern "C" {
    /// Builds a one-sheet `.xlsx` and returns its bytes.
    #[wasm_bindgen(js_name = writeExcelFile, catch)]
    fn write_excel_file(rows: JsValue, sheet_name: &str, widths: JsValue) -> Result<JsValue, JsValue>;
}

/// Write `sheet` as `.xlsx` and download it under its file name.
pub fn write_workbook(sheet: &SheetExport) -> Result<(), String> {
    let rows = serde_wasm_bindgen::to_value(&sheet.rows).map_err(|e| e.to_string())?;
    let widths = serde_wasm_bindgen::to_value(&sheet.column_widths).map_err(|e| e.to_string())?;

    let result = write_excel_file(rows, &sheet.sheet_name, widths)
        .map_err(|e| format!("Failed to write workbook: {:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&result).to_vec();

    download_bytes(&bytes, XLSX_MIME, &sheet.file_name)?;
    log::info!(
        "downloaded '{}' ({} rows)",
        sheet.file_name,
        sheet.rows.len()
    );
    Ok(())
}
