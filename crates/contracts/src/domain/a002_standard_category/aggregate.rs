use serde::{Deserialize, Serialize};

pub const UPDATE_FAILED_MESSAGE: &str = "카테고리 수정에 실패했습니다.";

/// Standard apparel category used by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardCategory {
    pub id: i64,
    /// e.g. `CAT001`
    pub category_code: String,
    pub category_name_en: String,
    #[serde(default)]
    pub category_name_ko: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Comma-separated words the classifier matches on.
    #[serde(default)]
    pub keywords: Option<String>,
}

impl StandardCategory {
    pub fn to_update(&self) -> StandardCategoryUpdate {
        StandardCategoryUpdate {
            category_name_ko: self.category_name_ko.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            keywords: self.keywords.clone().unwrap_or_default(),
        }
    }
}

/// Editable part of a category. Code and English name are fixed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StandardCategoryUpdate {
    pub category_name_ko: String,
    pub description: String,
    pub keywords: String,
}

/// Keywords one per line, for the edit dialog.
pub fn keywords_to_lines(keywords: &str) -> String {
    if keywords.trim().is_empty() {
        return String::new();
    }
    keywords
        .split(',')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lines typed in the dialog back to the stored comma-separated form.
pub fn lines_to_keywords(lines: &str) -> String {
    lines
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_round_trip() {
        assert_eq!(keywords_to_lines("t-shirt, tee,top"), "t-shirt\ntee\ntop");
        assert_eq!(lines_to_keywords("t-shirt\n tee \ntop"), "t-shirt, tee, top");
        assert_eq!(keywords_to_lines(""), "");
    }

    #[test]
    fn test_to_update_defaults_missing_fields() {
        let json = r#"{"id":1,"category_code":"CAT001","category_name_en":"T-Shirts"}"#;
        let category: StandardCategory = serde_json::from_str(json).unwrap();
        assert_eq!(category.to_update(), StandardCategoryUpdate::default());
    }
}
