use serde::{Deserialize, Serialize};

use crate::shared::error::ApiError;

/// Select value meaning "no filter".
pub const ALL: &str = "all";

pub const REQUIRED_FIELDS_MESSAGE: &str = "모든 정보를 선택, 입력해야 저장할 수 있습니다.";
pub const DUPLICATE_EN_MESSAGE: &str = "이미 등록된 성분 영문명과 중복됩니다.";
pub const DUPLICATE_KO_MESSAGE: &str = "이미 등록된 성분 한글명과 중복됩니다.";

/// Fabric component dictionary entry (e.g. cotton under natural / plant fibres).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FabricComponent {
    pub id: i64,
    pub major_category_code: String,
    pub major_category_name: String,
    pub minor_category_code: String,
    pub minor_category_name: String,
    pub component_name_en: String,
    #[serde(default)]
    pub component_name_ko: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl FabricComponent {
    pub fn to_form(&self) -> FabricComponentForm {
        FabricComponentForm {
            major_category_code: self.major_category_code.clone(),
            major_category_name: self.major_category_name.clone(),
            minor_category_code: self.minor_category_code.clone(),
            minor_category_name: self.minor_category_name.clone(),
            component_name_en: self.component_name_en.clone(),
            component_name_ko: self.component_name_ko.clone().unwrap_or_default(),
        }
    }
}

/// Code and display name of a major or minor category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub code: String,
    pub name: String,
}

/// Body of create and update calls.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FabricComponentForm {
    pub major_category_code: String,
    pub major_category_name: String,
    pub minor_category_code: String,
    pub minor_category_name: String,
    pub component_name_en: String,
    pub component_name_ko: String,
}

impl FabricComponentForm {
    pub fn select_major(&mut self, major: &CategoryInfo) {
        self.major_category_code = major.code.clone();
        self.major_category_name = major.name.clone();
        self.minor_category_code.clear();
        self.minor_category_name.clear();
    }

    pub fn select_minor(&mut self, minor: &CategoryInfo) {
        self.minor_category_code = minor.code.clone();
        self.minor_category_name = minor.name.clone();
    }

    /// Required fields, then duplicate names among `existing` minus the row being edited.
    /// Names compare trimmed and case-insensitively; the Korean name only when given.
    pub fn validate(
        &self,
        existing: &[FabricComponent],
        editing: Option<i64>,
    ) -> Result<(), ApiError> {
        if self.major_category_code.is_empty()
            || self.minor_category_code.is_empty()
            || self.component_name_en.trim().is_empty()
        {
            return Err(ApiError::validation(REQUIRED_FIELDS_MESSAGE));
        }

        let en = self.component_name_en.trim().to_lowercase();
        let ko = self.component_name_ko.trim().to_lowercase();
        let others = existing.iter().filter(|c| Some(c.id) != editing);

        let mut duplicate_ko = false;
        for other in others {
            if other.component_name_en.to_lowercase() == en {
                return Err(ApiError::validation(DUPLICATE_EN_MESSAGE));
            }
            if !ko.is_empty()
                && other
                    .component_name_ko
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase() == ko)
            {
                duplicate_ko = true;
            }
        }

        if duplicate_ko {
            return Err(ApiError::validation(DUPLICATE_KO_MESSAGE));
        }
        Ok(())
    }
}

/// Search panel of the component list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FabricSearchFilters {
    pub major_category_code: String,
    pub minor_category_code: String,
    pub component_name_en: String,
    pub component_name_ko: String,
}

impl Default for FabricSearchFilters {
    fn default() -> Self {
        Self {
            major_category_code: ALL.to_string(),
            minor_category_code: ALL.to_string(),
            component_name_en: String::new(),
            component_name_ko: String::new(),
        }
    }
}

impl FabricSearchFilters {
    /// Changing the major category resets the minor one.
    pub fn set_major(&mut self, code: impl Into<String>) {
        self.major_category_code = code.into();
        self.minor_category_code = ALL.to_string();
    }

    /// Whether any criterion is set; a mutation re-runs the search only then.
    pub fn is_active(&self) -> bool {
        self.to_query() != FabricQuery::default()
    }

    pub fn to_query(&self) -> FabricQuery {
        FabricQuery {
            major_category_code: selected(&self.major_category_code),
            minor_category_code: selected(&self.minor_category_code),
            component_name_en: non_blank(&self.component_name_en),
            component_name_ko: non_blank(&self.component_name_ko),
        }
    }
}

/// Query string of the list call. Unset criteria are omitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FabricQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_category_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor_category_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_name_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_name_ko: Option<String>,
}

/// Query of the minor-category list for the chosen major category.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MinorCategoryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_category_code: Option<String>,
}

impl MinorCategoryQuery {
    pub fn for_major(code: &str) -> Self {
        Self {
            major_category_code: selected(code),
        }
    }
}

fn selected(code: &str) -> Option<String> {
    if code.is_empty() || code == ALL {
        None
    } else {
        Some(code.to_string())
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(id: i64, en: &str, ko: Option<&str>) -> FabricComponent {
        FabricComponent {
            id,
            major_category_code: "N".into(),
            major_category_name: "천연섬유".into(),
            minor_category_code: "N1".into(),
            minor_category_name: "식물성".into(),
            component_name_en: en.into(),
            component_name_ko: ko.map(str::to_string),
            created_at: "2024-01-01".into(),
            updated_at: None,
        }
    }

    fn form(en: &str, ko: &str) -> FabricComponentForm {
        FabricComponentForm {
            major_category_code: "N".into(),
            major_category_name: "천연섬유".into(),
            minor_category_code: "N1".into(),
            minor_category_name: "식물성".into(),
            component_name_en: en.into(),
            component_name_ko: ko.into(),
        }
    }

    #[test]
    fn test_required_fields() {
        let mut f = form("Cotton", "");
        f.minor_category_code.clear();
        assert_eq!(
            f.validate(&[], None),
            Err(ApiError::validation(REQUIRED_FIELDS_MESSAGE))
        );
        assert_eq!(
            form("   ", "").validate(&[], None),
            Err(ApiError::validation(REQUIRED_FIELDS_MESSAGE))
        );
    }

    #[test]
    fn test_duplicate_names() {
        let existing = vec![component(1, "Cotton", Some("면")), component(2, "Linen", None)];
        assert_eq!(
            form(" cotton ", "").validate(&existing, None),
            Err(ApiError::validation(DUPLICATE_EN_MESSAGE))
        );
        assert_eq!(
            form("Organic", "면").validate(&existing, None),
            Err(ApiError::validation(DUPLICATE_KO_MESSAGE))
        );
        // English duplicate wins when both collide
        assert_eq!(
            form("Linen", "면").validate(&existing, None),
            Err(ApiError::validation(DUPLICATE_EN_MESSAGE))
        );
        // editing row 1 may keep its own names
        assert!(form("Cotton", "면").validate(&existing, Some(1)).is_ok());
    }

    #[test]
    fn test_query_skips_all_and_blank() {
        let mut filters = FabricSearchFilters::default();
        assert!(!filters.is_active());
        assert_eq!(filters.to_query(), FabricQuery::default());

        filters.major_category_code = "N".into();
        filters.minor_category_code = "N1".into();
        filters.component_name_en = "  cot ".into();
        let query = filters.to_query();
        assert_eq!(query.major_category_code.as_deref(), Some("N"));
        assert_eq!(query.component_name_en.as_deref(), Some("cot"));
        assert!(query.component_name_ko.is_none());
        assert!(filters.is_active());

        filters.set_major("S");
        assert_eq!(filters.minor_category_code, ALL);
    }

    #[test]
    fn test_query_serializes_only_set_fields() {
        let query = FabricQuery {
            major_category_code: Some("N".into()),
            ..FabricQuery::default()
        };
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({ "major_category_code": "N" })
        );
        assert_eq!(MinorCategoryQuery::for_major(ALL), MinorCategoryQuery::default());
    }

    #[test]
    fn test_select_major_clears_minor() {
        let mut f = form("Cotton", "");
        f.select_major(&CategoryInfo {
            code: "S".into(),
            name: "합성섬유".into(),
        });
        assert_eq!(f.major_category_name, "합성섬유");
        assert!(f.minor_category_code.is_empty());
    }
}
