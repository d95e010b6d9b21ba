use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::shared::serde_utils::lenient_string;
use crate::shared::sort::Sortable;

/// HS code the backend returns when it cannot classify a row.
pub const UNKNOWN_HS_CODE: &str = "unknown";

/// One classified product row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassificationRow {
    /// Spreadsheet row the backend read this product from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_number: Option<u32>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub style_no: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub product_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub weaving_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub gender: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub composition: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub hs_code: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub note: String,
    /// Set when the HS code was overridden by hand. Local only.
    #[serde(skip)]
    pub is_modified: bool,
}

impl ClassificationRow {
    pub fn is_unknown(&self) -> bool {
        self.hs_code == UNKNOWN_HS_CODE
    }

    pub fn value(&self, column: ClassificationColumn) -> &str {
        match column {
            ClassificationColumn::StyleNo => &self.style_no,
            ClassificationColumn::ProductName => &self.product_name,
            ClassificationColumn::WeavingType => &self.weaving_type,
            ClassificationColumn::Category => &self.category,
            ClassificationColumn::Gender => &self.gender,
            ClassificationColumn::Composition => &self.composition,
            ClassificationColumn::HsCode => &self.hs_code,
            ClassificationColumn::Note => &self.note,
        }
    }
}

impl Sortable for ClassificationRow {
    type Column = ClassificationColumn;

    fn compare_by_column(&self, other: &Self, column: ClassificationColumn) -> Ordering {
        self.value(column).cmp(other.value(column))
    }
}

/// Sortable columns of the result grid, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationColumn {
    StyleNo,
    ProductName,
    WeavingType,
    Category,
    Gender,
    Composition,
    HsCode,
    Note,
}

impl ClassificationColumn {
    pub fn all() -> [ClassificationColumn; 8] {
        [
            ClassificationColumn::StyleNo,
            ClassificationColumn::ProductName,
            ClassificationColumn::WeavingType,
            ClassificationColumn::Category,
            ClassificationColumn::Gender,
            ClassificationColumn::Composition,
            ClassificationColumn::HsCode,
            ClassificationColumn::Note,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClassificationColumn::StyleNo => "Style No",
            ClassificationColumn::ProductName => "이름",
            ClassificationColumn::WeavingType => "소재타입",
            ClassificationColumn::Category => "카테고리",
            ClassificationColumn::Gender => "성별",
            ClassificationColumn::Composition => "상세 성분",
            ClassificationColumn::HsCode => "HS Code",
            ClassificationColumn::Note => "Note",
        }
    }
}

/// `data` of a successful classification upload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub success_count: u32,
    #[serde(default)]
    pub failed_count: u32,
    #[serde(default)]
    pub results: Vec<ClassificationRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_tolerates_numbers_and_nulls() {
        let json = r#"{"row_number":3,"style_no":1001,"product_name":null,"hs_code":"6109.10","note":"ok"}"#;
        let row: ClassificationRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.style_no, "1001");
        assert_eq!(row.product_name, "");
        assert_eq!(row.gender, "");
        assert_eq!(row.row_number, Some(3));
        assert!(!row.is_modified);
    }

    #[test]
    fn test_modified_flag_is_never_serialized() {
        let row = ClassificationRow {
            hs_code: UNKNOWN_HS_CODE.into(),
            is_modified: true,
            ..ClassificationRow::default()
        };
        let json = serde_json::to_value(&row).unwrap();
        assert!(json.get("is_modified").is_none());
        assert!(json.get("isModified").is_none());
        assert!(row.is_unknown());
    }

    #[test]
    fn test_upload_result_defaults() {
        let result: UploadResult = serde_json::from_str(r#"{"filename":"a.xlsx"}"#).unwrap();
        assert_eq!(result.total_count, 0);
        assert!(result.results.is_empty());
    }
}
