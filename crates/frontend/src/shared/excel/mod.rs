//! Bridge to the browser-side workbook library (SheetJS, loaded by `index.html`).

pub mod parser;
pub mod writer;

pub use parser::read_excel_from_file;
pub use writer::write_workbook;
