use serde::{Deserialize, Serialize};

use crate::enums::{FabricType, Gender};
use crate::shared::serde_utils::lenient_string;

/// One row of the bulk mapping grid. Sent as-is and returned with `hsCode` filled in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MappingRule {
    #[serde(rename = "styleNo", default, deserialize_with = "lenient_string")]
    pub style_no: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "fabricType", default)]
    pub fabric_type: FabricType,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(rename = "materialDetail", default, deserialize_with = "lenient_string")]
    pub material_detail: String,
    #[serde(rename = "hsCode", default, deserialize_with = "lenient_string")]
    pub hs_code: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub note: String,
}

impl MappingRule {
    /// No descriptive attribute set. HS code and note do not count.
    pub fn is_blank(&self) -> bool {
        self.style_no.is_empty()
            && self.name.is_empty()
            && self.fabric_type == FabricType::Unspecified
            && self.category.is_empty()
            && self.gender == Gender::Unspecified
            && self.material_detail.is_empty()
    }

    pub fn get(&self, field: MappingField) -> &str {
        match field {
            MappingField::StyleNo => &self.style_no,
            MappingField::Name => &self.name,
            MappingField::FabricType => self.fabric_type.code(),
            MappingField::Category => &self.category,
            MappingField::Gender => self.gender.code(),
            MappingField::MaterialDetail => &self.material_detail,
            MappingField::HsCode => &self.hs_code,
            MappingField::Note => &self.note,
        }
    }

    /// Set one cell from text. Only fabric type and gender can fail.
    pub fn set(&mut self, field: MappingField, value: &str) -> Result<(), String> {
        match field {
            MappingField::StyleNo => self.style_no = value.to_string(),
            MappingField::Name => self.name = value.to_string(),
            MappingField::FabricType => self.fabric_type = value.parse()?,
            MappingField::Category => self.category = value.to_string(),
            MappingField::Gender => self.gender = value.parse()?,
            MappingField::MaterialDetail => self.material_detail = value.to_string(),
            MappingField::HsCode => self.hs_code = value.to_string(),
            MappingField::Note => self.note = value.to_string(),
        }
        Ok(())
    }

    pub fn to_cells(&self) -> Vec<String> {
        MappingField::all()
            .iter()
            .map(|f| self.get(*f).to_string())
            .collect()
    }
}

/// Columns of the mapping template, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MappingField {
    StyleNo,
    Name,
    FabricType,
    Category,
    Gender,
    MaterialDetail,
    HsCode,
    Note,
}

impl MappingField {
    pub fn all() -> [MappingField; 8] {
        [
            MappingField::StyleNo,
            MappingField::Name,
            MappingField::FabricType,
            MappingField::Category,
            MappingField::Gender,
            MappingField::MaterialDetail,
            MappingField::HsCode,
            MappingField::Note,
        ]
    }

    /// Machine key of the first header row.
    pub fn key(&self) -> &'static str {
        match self {
            MappingField::StyleNo => "StyleNo",
            MappingField::Name => "Name",
            MappingField::FabricType => "FabricType",
            MappingField::Category => "Category",
            MappingField::Gender => "Gender",
            MappingField::MaterialDetail => "MaterialDetail",
            MappingField::HsCode => "HSCode",
            MappingField::Note => "Note",
        }
    }

    /// Human label of the second header row.
    pub fn label(&self) -> &'static str {
        match self {
            MappingField::StyleNo => "제품번호",
            MappingField::Name => "제품명",
            MappingField::FabricType => "knit / woven",
            MappingField::Category => "의류카테고리",
            MappingField::Gender => "men / women",
            MappingField::MaterialDetail => "소재 함유 상세",
            MappingField::HsCode | MappingField::Note => "",
        }
    }

    /// Fields edited through a select rather than free text.
    pub fn choices(&self) -> Option<Vec<&'static str>> {
        match self {
            MappingField::FabricType => Some(FabricType::all().iter().map(|f| f.code()).collect()),
            MappingField::Gender => Some(Gender::all().iter().map(|g| g.code()).collect()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let rule = MappingRule {
            style_no: "S1".into(),
            fabric_type: FabricType::Knit,
            gender: Gender::Women,
            material_detail: "cotton 100%".into(),
            ..MappingRule::default()
        };
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["styleNo"], "S1");
        assert_eq!(json["fabricType"], "knit");
        assert_eq!(json["gender"], "women");
        assert_eq!(json["materialDetail"], "cotton 100%");
        assert_eq!(json["hsCode"], "");
    }

    #[test]
    fn test_backend_rule_with_numbers() {
        let json = r#"{"styleNo":1001,"name":"tee","fabricType":"knit","gender":null,"hsCode":"6109.10"}"#;
        let rule: MappingRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.style_no, "1001");
        assert_eq!(rule.gender, Gender::Unspecified);
        assert_eq!(rule.hs_code, "6109.10");
    }

    #[test]
    fn test_is_blank_ignores_code_and_note() {
        let mut rule = MappingRule {
            hs_code: "6109".into(),
            note: "n".into(),
            ..MappingRule::default()
        };
        assert!(rule.is_blank());
        rule.set(MappingField::Gender, "men").unwrap();
        assert!(!rule.is_blank());
    }

    #[test]
    fn test_set_rejects_bad_enum_values() {
        let mut rule = MappingRule::default();
        assert!(rule.set(MappingField::FabricType, "denim").is_err());
        assert_eq!(rule.fabric_type, FabricType::Unspecified);
        rule.set(MappingField::FabricType, " Woven").unwrap();
        assert_eq!(rule.get(MappingField::FabricType), "woven");
    }
}
