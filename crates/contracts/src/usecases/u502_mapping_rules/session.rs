use super::request::{MappingField, MappingRule};
use crate::shared::api_response::ApiResponse;
use crate::shared::error::ApiError;
use crate::shared::sheet::{cell, header_row_matches, SheetExport, SheetRows};
use crate::shared::upload::{validate_file_name, UploadFlow};

pub const TEMPLATE_MISMATCH_MESSAGE: &str = "템플릿 형식이 일치하지 않습니다.";
pub const FILE_READ_FAILED_MESSAGE: &str = "파일 처리 중 오류가 발생했습니다.";
pub const NOTHING_TO_MAP_MESSAGE: &str = "매핑할 데이터가 없습니다.";
pub const NO_VALID_ROWS_MESSAGE: &str = "유효한 데이터가 없습니다.";
pub const MAPPING_FAILED_MESSAGE: &str = "HS코드 매핑에 실패했습니다.";
pub const MAPPING_ERROR_MESSAGE: &str = "HS코드 매핑 중 오류가 발생했습니다.";
pub const WRITE_FAILED_MESSAGE: &str = "엑셀 파일 생성에 실패했습니다.";

pub const SHEET_NAME: &str = "Mapping Rules";
pub const TEMPLATE_FILE_NAME: &str = "mapping_rules_template.xlsx";
pub const EXPORT_FILE_NAME: &str = "mapping_rules_export.xlsx";

/// Rows shown while nothing is loaded.
pub const PLACEHOLDER_ROWS: usize = 5;

/// The two fixed header rows of the template: machine keys, then labels.
pub fn header_rows() -> SheetRows {
    let fields = MappingField::all();
    vec![
        fields.iter().map(|f| f.key().to_string()).collect(),
        fields.iter().map(|f| f.label().to_string()).collect(),
    ]
}

/// Bulk mapping grid: import, edit, map remotely, export.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MappingRuleSession {
    pub rules: Vec<MappingRule>,
    pub error: Option<String>,
    pub is_mapping: bool,
}

impl MappingRuleSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn template_sheet() -> SheetExport {
        SheetExport {
            file_name: TEMPLATE_FILE_NAME.to_string(),
            sheet_name: SHEET_NAME.to_string(),
            rows: header_rows(),
            column_widths: Vec::new(),
        }
    }

    pub fn check_file(&mut self, file_name: &str) -> Result<(), ApiError> {
        validate_file_name(UploadFlow::Mapping, file_name).map_err(|e| {
            self.error = Some(e.to_string());
            e
        })
    }

    /// The workbook could not be read at all.
    pub fn file_read_failed(&mut self) {
        self.error = Some(FILE_READ_FAILED_MESSAGE.to_string());
    }

    /// Replace the rules with the data rows of an uploaded template.
    /// Anything wrong with the sheet leaves the current rules alone.
    pub fn import_sheet(&mut self, rows: &[Vec<String>]) -> Result<usize, ApiError> {
        match parse_template(rows) {
            Ok(rules) => {
                let count = rules.len();
                self.rules = rules;
                self.error = None;
                Ok(count)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Rows to render: the rules, or empty placeholders when there are none.
    pub fn display_rows(&self) -> Vec<MappingRule> {
        if self.rules.is_empty() {
            vec![MappingRule::default(); PLACEHOLDER_ROWS]
        } else {
            self.rules.clone()
        }
    }

    /// Edit one cell. Editing a placeholder turns the placeholders into real rows.
    pub fn update_cell(
        &mut self,
        row: usize,
        field: MappingField,
        value: &str,
    ) -> Result<(), ApiError> {
        if self.rules.is_empty() {
            self.rules = self.display_rows();
        }
        let rule = self
            .rules
            .get_mut(row)
            .ok_or_else(|| ApiError::validation(format!("{}번째 행이 없습니다.", row + 1)))?;
        rule.set(field, value).map_err(ApiError::Validation)
    }

    /// Rules to send, without blank rows. Sets `is_mapping` when there is something to send.
    pub fn prepare_submission(&mut self) -> Result<Vec<MappingRule>, ApiError> {
        if self.rules.is_empty() {
            self.error = Some(NOTHING_TO_MAP_MESSAGE.to_string());
            return Err(ApiError::validation(NOTHING_TO_MAP_MESSAGE));
        }
        let valid: Vec<MappingRule> = self
            .rules
            .iter()
            .filter(|r| !r.is_blank())
            .cloned()
            .collect();
        if valid.is_empty() {
            self.error = Some(NO_VALID_ROWS_MESSAGE.to_string());
            return Err(ApiError::validation(NO_VALID_ROWS_MESSAGE));
        }
        self.is_mapping = true;
        Ok(valid)
    }

    pub fn apply_mapping_response(
        &mut self,
        response: Result<ApiResponse<Vec<MappingRule>>, ApiError>,
    ) {
        self.is_mapping = false;
        match response {
            Ok(ApiResponse {
                success: true,
                data: Some(rules),
                ..
            }) => {
                self.rules = rules;
                self.error = None;
            }
            Ok(response) => {
                let message = response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| MAPPING_FAILED_MESSAGE.to_string());
                self.error = Some(message);
            }
            Err(e) => self.error = Some(e.user_message(MAPPING_ERROR_MESSAGE)),
        }
    }

    /// Header rows followed by every rule.
    pub fn export_sheet(&self) -> SheetExport {
        let mut rows = header_rows();
        rows.extend(self.rules.iter().map(MappingRule::to_cells));
        SheetExport {
            file_name: EXPORT_FILE_NAME.to_string(),
            sheet_name: SHEET_NAME.to_string(),
            rows,
            column_widths: Vec::new(),
        }
    }

    /// Export needs at least one loaded rule.
    pub fn can_export(&self) -> bool {
        !self.rules.is_empty()
    }

    /// Outcome of writing the template or the export workbook.
    pub fn finish_write(&mut self, result: Result<(), String>) {
        if result.is_err() {
            self.error = Some(WRITE_FAILED_MESSAGE.to_string());
        }
    }

    pub fn can_map(&self) -> bool {
        !self.rules.is_empty() && !self.is_mapping
    }
}

fn parse_template(rows: &[Vec<String>]) -> Result<Vec<MappingRule>, ApiError> {
    let expected = header_rows();
    let headers_ok = rows.len() >= 2
        && expected.iter().zip(rows).all(|(want, got)| {
            let want: Vec<&str> = want.iter().map(String::as_str).collect();
            header_row_matches(got, &want)
        });
    if !headers_ok {
        return Err(ApiError::validation(TEMPLATE_MISMATCH_MESSAGE));
    }

    let mut rules = Vec::new();
    for (idx, row) in rows.iter().enumerate().skip(2) {
        if row.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        let mut rule = MappingRule::default();
        for (col, field) in MappingField::all().into_iter().enumerate() {
            rule.set(field, &cell(row, col))
                .map_err(|msg| ApiError::validation(format!("{}행: {}", idx + 1, msg)))?;
        }
        rules.push(rule);
    }
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{FabricType, Gender};
    use crate::shared::sheet::owned_row;

    fn template_with(data: &[&[&str]]) -> SheetRows {
        let mut rows = header_rows();
        rows.extend(data.iter().map(|r| owned_row(r)));
        rows
    }

    fn loaded_session() -> MappingRuleSession {
        let mut session = MappingRuleSession::new();
        session
            .import_sheet(&template_with(&[
                &["S1", "Tee", "knit", "T-shirt", "men", "cotton 100%", "", ""],
                &["S2", "Blouse", "WOVEN", "Blouse", "women", "silk 100%"],
            ]))
            .unwrap();
        session
    }

    #[test]
    fn test_template_is_headers_only() {
        let sheet = MappingRuleSession::template_sheet();
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0][6], "HSCode");
        assert_eq!(sheet.rows[1][2], "knit / woven");
        assert_eq!(sheet.file_name, TEMPLATE_FILE_NAME);
        assert_eq!(sheet.sheet_name, SHEET_NAME);
    }

    #[test]
    fn test_import_parses_data_rows() {
        let session = loaded_session();
        assert_eq!(session.rules.len(), 2);
        assert_eq!(session.rules[1].fabric_type, FabricType::Woven);
        assert_eq!(session.rules[1].gender, Gender::Women);
        assert_eq!(session.rules[1].note, "");
        assert!(session.error.is_none());
    }

    #[test]
    fn test_mismatched_header_is_rejected_without_mutation() {
        let mut session = loaded_session();
        let before = session.rules.clone();

        let mut rows = template_with(&[&["S9", "x", "knit", "", "", "", "", ""]]);
        rows[0][0] = "Style".into();
        assert_eq!(
            session.import_sheet(&rows),
            Err(ApiError::validation(TEMPLATE_MISMATCH_MESSAGE))
        );
        assert_eq!(session.rules, before);
        assert_eq!(session.error.as_deref(), Some(TEMPLATE_MISMATCH_MESSAGE));

        let mut rows = template_with(&[]);
        rows[1][1] = "제품명 ".into();
        assert!(session.import_sheet(&rows).is_err());
        assert!(session.import_sheet(&[owned_row(&["StyleNo"])]).is_err());
        assert_eq!(session.rules, before);
    }

    #[test]
    fn test_header_with_trailing_blank_labels_missing_still_matches() {
        let mut rows = header_rows();
        rows[1].truncate(6);
        rows.push(owned_row(&["S1", "", "", "", "", "wool"]));
        let mut session = MappingRuleSession::new();
        assert_eq!(session.import_sheet(&rows), Ok(1));
    }

    #[test]
    fn test_invalid_enum_cell_names_the_row() {
        let mut session = loaded_session();
        let before = session.rules.clone();
        let result =
            session.import_sheet(&template_with(&[&["S1", "", "denim", "", "", "", "", ""]]));
        match result {
            Err(ApiError::Validation(msg)) => assert!(msg.starts_with("3행:")),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(session.rules, before);
    }

    #[test]
    fn test_placeholders_materialize_on_edit() {
        let mut session = MappingRuleSession::new();
        assert_eq!(session.display_rows().len(), PLACEHOLDER_ROWS);
        assert!(!session.can_map());

        session.update_cell(2, MappingField::Name, "Hoodie").unwrap();
        assert_eq!(session.rules.len(), PLACEHOLDER_ROWS);
        assert_eq!(session.rules[2].name, "Hoodie");
        assert!(session.update_cell(9, MappingField::Name, "x").is_err());
    }

    #[test]
    fn test_prepare_submission_drops_blank_rows() {
        let mut session = MappingRuleSession::new();
        assert_eq!(
            session.prepare_submission(),
            Err(ApiError::validation(NOTHING_TO_MAP_MESSAGE))
        );

        session.update_cell(0, MappingField::Note, "only a note").unwrap();
        assert_eq!(
            session.prepare_submission(),
            Err(ApiError::validation(NO_VALID_ROWS_MESSAGE))
        );
        assert!(!session.is_mapping);

        session.update_cell(3, MappingField::StyleNo, "S4").unwrap();
        let sent = session.prepare_submission().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].style_no, "S4");
        assert!(session.is_mapping);
    }

    #[test]
    fn test_mapping_response() {
        let mut session = loaded_session();
        session.prepare_submission().unwrap();
        let mut mapped = session.rules.clone();
        mapped[0].hs_code = "6109.10".into();
        session.apply_mapping_response(Ok(ApiResponse::ok(mapped)));
        assert!(!session.is_mapping);
        assert_eq!(session.rules[0].hs_code, "6109.10");

        let before = session.rules.clone();
        session.apply_mapping_response(Ok(ApiResponse::failed("규칙이 올바르지 않습니다")));
        assert_eq!(session.error.as_deref(), Some("규칙이 올바르지 않습니다"));
        assert_eq!(session.rules, before);

        session.apply_mapping_response(Ok(ApiResponse::failed("  ")));
        assert_eq!(session.error.as_deref(), Some(MAPPING_FAILED_MESSAGE));
        assert_eq!(session.rules, before);

        session.apply_mapping_response(Err(ApiError::backend(422, "잘못된 요청")));
        assert_eq!(session.error.as_deref(), Some("잘못된 요청"));
        session.apply_mapping_response(Err(ApiError::Network("x".into())));
        assert_eq!(session.error.as_deref(), Some(MAPPING_ERROR_MESSAGE));
    }

    #[test]
    fn test_export_needs_rules() {
        let mut session = MappingRuleSession::new();
        assert!(!session.can_export());
        session.update_cell(0, MappingField::StyleNo, "S9").unwrap();
        assert!(session.can_export());
    }

    #[test]
    fn test_failed_write_is_shown() {
        let mut session = loaded_session();
        session.finish_write(Ok(()));
        assert_eq!(session.error, None);
        session.finish_write(Err("SheetJS is not loaded".into()));
        assert_eq!(session.error.as_deref(), Some(WRITE_FAILED_MESSAGE));
    }

    #[test]
    fn test_export_keeps_every_rule() {
        let session = loaded_session();
        let sheet = session.export_sheet();
        assert_eq!(sheet.rows.len(), 4);
        assert_eq!(sheet.rows[..2], header_rows()[..]);
        assert_eq!(sheet.rows[2][0], "S1");
        assert_eq!(sheet.rows[3][2], "woven");
        assert_eq!(sheet.file_name, EXPORT_FILE_NAME);

        // an exported sheet imports back as the same rules
        let mut again = MappingRuleSession::new();
        again.import_sheet(&sheet.rows).unwrap();
        assert_eq!(again.rules, session.rules);
    }

    #[test]
    fn test_check_file() {
        let mut session = MappingRuleSession::new();
        assert!(session.check_file("rules.csv").is_err());
        assert!(session.error.is_some());
        assert!(session.check_file("rules.xlsx").is_ok());
    }
}
