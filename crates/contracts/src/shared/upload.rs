use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Which upload screen a file is meant for. Each flow accepts its own set of extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadFlow {
    /// HS-code classification upload.
    Classification,
    /// Mapping-rule template import.
    Mapping,
    /// Generic spreadsheet upload, which also takes CSV.
    Generic,
}

impl UploadFlow {
    pub fn accepted_extensions(&self) -> &'static [&'static str] {
        match self {
            UploadFlow::Classification | UploadFlow::Mapping => &[".xlsx", ".xls"],
            UploadFlow::Generic => &[".xlsx", ".xls", ".csv"],
        }
    }

    /// Value for the `accept` attribute of the file input.
    pub fn accept_attr(&self) -> String {
        self.accepted_extensions().join(",")
    }

    pub fn rejection_message(&self) -> &'static str {
        match self {
            UploadFlow::Classification | UploadFlow::Mapping => "Excel 파일만 업로드 가능합니다.",
            UploadFlow::Generic => "엑셀 또는 CSV 파일만 업로드 가능합니다.",
        }
    }

    pub fn accepts(&self, file_name: &str) -> bool {
        let lower = file_name.trim().to_lowercase();
        self.accepted_extensions()
            .iter()
            .any(|ext| lower.len() > ext.len() && lower.ends_with(ext))
    }
}

/// Check a file name before anything is read or sent.
pub fn validate_file_name(flow: UploadFlow, file_name: &str) -> Result<(), ApiError> {
    if flow.accepts(file_name) {
        Ok(())
    } else {
        Err(ApiError::validation(flow.rejection_message()))
    }
}

/// A file picked by the user, by name and size only. The bytes stay in the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Size in megabytes with two decimals, e.g. "0.01 MB".
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size as f64 / 1024.0 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_accepts_excel_only() {
        assert!(UploadFlow::Classification.accepts("products.xlsx"));
        assert!(UploadFlow::Classification.accepts("legacy.XLS"));
        assert!(!UploadFlow::Classification.accepts("products.csv"));
        assert!(!UploadFlow::Classification.accepts("report.pdf"));
        assert!(!UploadFlow::Classification.accepts(".xlsx"));
    }

    #[test]
    fn test_generic_also_accepts_csv() {
        assert!(UploadFlow::Generic.accepts("rows.csv"));
        assert!(UploadFlow::Generic.accepts("rows.xlsx"));
        assert!(!UploadFlow::Generic.accepts("rows.txt"));
    }

    #[test]
    fn test_validate_file_name_message() {
        let err = validate_file_name(UploadFlow::Classification, "image.png").unwrap_err();
        assert_eq!(err, ApiError::validation("Excel 파일만 업로드 가능합니다."));
        assert!(validate_file_name(UploadFlow::Mapping, "rules.xlsx").is_ok());
    }

    #[test]
    fn test_size_label() {
        assert_eq!(SelectedFile::new("a.xlsx", 1_572_864).size_label(), "1.50 MB");
        assert_eq!(UploadFlow::Generic.accept_attr(), ".xlsx,.xls,.csv");
    }
}
