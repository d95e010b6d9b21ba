//! Upload → classify → review/edit → export, as one state value.
//!
//! Every operation either applies fully or leaves the session as it was,
//! apart from the alert it raises.

use chrono::{DateTime, Utc};

use super::response::{ClassificationColumn, ClassificationRow, UploadResult, UNKNOWN_HS_CODE};
use crate::shared::alert::Alert;
use crate::shared::api_response::ApiResponse;
use crate::shared::error::ApiError;
use crate::shared::sheet::{file_timestamp, SheetExport, SheetRows};
use crate::shared::sort::{sort_list, SortState};
use crate::shared::upload::{validate_file_name, SelectedFile, UploadFlow};

pub const NO_FILE_MESSAGE: &str = "파일을 선택해주세요.";
pub const IN_PROGRESS_MESSAGE: &str = "처리 중...";
pub const CLASSIFY_FAILED_MESSAGE: &str = "HS코드 분류 중 오류가 발생했습니다.";
pub const NO_DATA_MESSAGE: &str = "다운로드할 데이터가 없습니다.";
pub const EXPORT_DONE_MESSAGE: &str = "엑셀 파일 다운로드가 완료되었습니다.";
pub const EXPORT_FAILED_MESSAGE: &str = "엑셀 다운로드 중 오류가 발생했습니다.";
pub const TEMPLATE_DONE_MESSAGE: &str = "양식 다운로드가 완료되었습니다.";
pub const TEMPLATE_FAILED_MESSAGE: &str = "양식 다운로드 중 오류가 발생했습니다.";

/// File name of the blank upload template.
pub const TEMPLATE_FILE_NAME: &str = "hs_code_template.xlsx";

pub const EXPORT_SHEET_NAME: &str = "HS코드 분류 결과";
pub const MODIFIED_MARKER: &str = "수정됨";
pub const EXPORT_HEADERS: [&str; 9] = [
    "수정여부",
    "Style No",
    "이름",
    "소재타입",
    "카테고리",
    "성별",
    "상세 성분",
    "HS Code",
    "Note",
];
pub const EXPORT_COLUMN_WIDTHS: [u16; 9] = [10, 15, 20, 12, 15, 8, 30, 12, 20];

/// Manual override of one HS code cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HsCodeEdit {
    #[default]
    Idle,
    Editing {
        /// Index into the rows as currently displayed.
        row: usize,
        original: String,
        value: String,
    },
}

impl HsCodeEdit {
    pub fn is_open(&self) -> bool {
        matches!(self, HsCodeEdit::Editing { .. })
    }

    /// Confirm is only offered when the value differs from the captured original.
    pub fn can_confirm(&self) -> bool {
        match self {
            HsCodeEdit::Editing {
                original, value, ..
            } => value != original,
            HsCodeEdit::Idle => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationSession {
    pub selected_file: Option<SelectedFile>,
    pub alert: Option<Alert>,
    pub upload_result: Option<UploadResult>,
    pub show_upload_area: bool,
    pub show_results: bool,
    /// Rows as displayed: sorted and possibly hand-edited.
    pub rows: Vec<ClassificationRow>,
    pub sort: SortState<ClassificationColumn>,
    pub edit: HsCodeEdit,
    pub uploading: bool,
    pub downloading_template: bool,
}

impl Default for ClassificationSession {
    fn default() -> Self {
        Self {
            selected_file: None,
            alert: None,
            upload_result: None,
            show_upload_area: true,
            show_results: false,
            rows: Vec::new(),
            sort: SortState::default(),
            edit: HsCodeEdit::Idle,
            uploading: false,
            downloading_template: false,
        }
    }
}

impl ClassificationSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Upload intake
    // ------------------------------------------------------------------

    /// Pick a file by click or drop. A rejected file only raises the alert.
    pub fn select_file(&mut self, name: &str, size: u64) -> Result<(), ApiError> {
        if let Err(e) = validate_file_name(UploadFlow::Classification, name) {
            self.alert = Some(Alert::error(e.to_string()));
            return Err(e);
        }
        self.selected_file = Some(SelectedFile::new(name, size));
        self.alert = None;
        self.upload_result = None;
        Ok(())
    }

    /// Gate the classify button. Returns the file to send.
    pub fn begin_upload(&mut self) -> Result<SelectedFile, ApiError> {
        if self.uploading {
            return Err(ApiError::validation(IN_PROGRESS_MESSAGE));
        }
        let Some(file) = self.selected_file.clone() else {
            self.alert = Some(Alert::error(NO_FILE_MESSAGE));
            return Err(ApiError::validation(NO_FILE_MESSAGE));
        };
        self.uploading = true;
        self.alert = None;
        self.upload_result = None;
        Ok(file)
    }

    pub fn apply_upload_response(&mut self, response: Result<ApiResponse<UploadResult>, ApiError>) {
        self.uploading = false;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                self.alert = Some(Alert::error(e.user_message(CLASSIFY_FAILED_MESSAGE)));
                return;
            }
        };

        match (response.success, response.data) {
            (true, Some(result)) => self.load_result(result),
            _ => {
                let message = response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| CLASSIFY_FAILED_MESSAGE.to_string());
                self.alert =
                    Some(Alert::error(message).with_details(response.validation_errors));
            }
        }
    }

    fn load_result(&mut self, mut result: UploadResult) {
        self.rows = std::mem::take(&mut result.results)
            .into_iter()
            .map(|row| ClassificationRow {
                is_modified: false,
                ..row
            })
            .collect();
        self.upload_result = Some(result);
        self.sort = SortState::default();
        self.edit = HsCodeEdit::Idle;
        self.show_upload_area = false;
        self.show_results = true;
    }

    /// Summary above the grid: file name, total, success, failed.
    pub fn summary(&self) -> Option<(String, u32, u32, u32)> {
        self.upload_result.as_ref().map(|r| {
            (
                r.filename.clone(),
                r.total_count,
                r.success_count,
                r.failed_count,
            )
        })
    }

    pub fn unknown_count(&self) -> usize {
        self.rows.iter().filter(|r| r.hs_code == UNKNOWN_HS_CODE).count()
    }

    // ------------------------------------------------------------------
    // Result grid
    // ------------------------------------------------------------------

    /// Click on a column header.
    pub fn sort_by(&mut self, column: ClassificationColumn) {
        let direction = self.sort.toggle(column);
        // indices held by an open edit would point at other rows
        self.edit = HsCodeEdit::Idle;
        sort_list(&mut self.rows, column, direction);
    }

    pub fn begin_edit(&mut self, row: usize) {
        if let Some(current) = self.rows.get(row) {
            self.edit = HsCodeEdit::Editing {
                row,
                original: current.hs_code.clone(),
                value: current.hs_code.clone(),
            };
        }
    }

    pub fn set_edit_value(&mut self, new_value: impl Into<String>) {
        if let HsCodeEdit::Editing { value, .. } = &mut self.edit {
            *value = new_value.into();
        }
    }

    pub fn can_confirm(&self) -> bool {
        self.edit.can_confirm()
    }

    /// Write the edited value and recompute the modified flag.
    /// Returns the row's new flag, or `None` when nothing was being edited.
    pub fn confirm_edit(&mut self) -> Option<bool> {
        let HsCodeEdit::Editing {
            row,
            original,
            value,
        } = std::mem::take(&mut self.edit)
        else {
            return None;
        };
        let target = self.rows.get_mut(row)?;
        target.is_modified = value != original;
        target.hs_code = value;
        Some(target.is_modified)
    }

    pub fn cancel_edit(&mut self) {
        self.edit = HsCodeEdit::Idle;
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// Current rows as a workbook. An empty grid raises the alert instead.
    pub fn export_sheet(&mut self, now: DateTime<Utc>) -> Result<SheetExport, ApiError> {
        if self.rows.is_empty() {
            self.alert = Some(Alert::error(NO_DATA_MESSAGE));
            return Err(ApiError::validation(NO_DATA_MESSAGE));
        }
        self.alert = None;

        let mut rows: SheetRows = Vec::with_capacity(self.rows.len() + 1);
        rows.push(EXPORT_HEADERS.iter().map(|h| h.to_string()).collect());
        rows.extend(self.rows.iter().map(export_row));

        Ok(SheetExport {
            file_name: export_file_name(self.upload_result.as_ref(), now),
            sheet_name: EXPORT_SHEET_NAME.to_string(),
            rows,
            column_widths: EXPORT_COLUMN_WIDTHS.to_vec(),
        })
    }

    pub fn finish_export(&mut self, result: Result<(), String>) {
        self.alert = Some(match result {
            Ok(()) => Alert::success(EXPORT_DONE_MESSAGE),
            Err(_) => Alert::error(EXPORT_FAILED_MESSAGE),
        });
    }

    // ------------------------------------------------------------------
    // Template download
    // ------------------------------------------------------------------

    pub fn begin_template_download(&mut self) -> bool {
        if self.downloading_template {
            return false;
        }
        self.downloading_template = true;
        self.alert = None;
        true
    }

    pub fn finish_template_download(&mut self, result: Result<(), ApiError>) {
        self.downloading_template = false;
        self.alert = Some(match result {
            Ok(()) => Alert::success(TEMPLATE_DONE_MESSAGE),
            Err(e) => Alert::error(e.user_message(TEMPLATE_FAILED_MESSAGE)),
        });
    }

    /// "Start over with another file".
    pub fn start_over(&mut self) {
        *self = Self::default();
    }
}

fn export_row(row: &ClassificationRow) -> Vec<String> {
    vec![
        if row.is_modified {
            MODIFIED_MARKER.to_string()
        } else {
            String::new()
        },
        row.style_no.clone(),
        row.product_name.clone(),
        row.weaving_type.clone(),
        row.category.clone(),
        row.gender.clone(),
        row.composition.clone(),
        row.hs_code.clone(),
        row.note.clone(),
    ]
}

/// `HS코드_분류결과_{source}_{timestamp}.xlsx`
pub fn export_file_name(result: Option<&UploadResult>, now: DateTime<Utc>) -> String {
    let source = result
        .map(|r| r.filename.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("unknown");
    format!("HS코드_분류결과_{}_{}.xlsx", source, file_timestamp(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn row(style_no: &str, hs_code: &str) -> ClassificationRow {
        ClassificationRow {
            style_no: style_no.into(),
            hs_code: hs_code.into(),
            ..ClassificationRow::default()
        }
    }

    fn loaded(rows: Vec<ClassificationRow>) -> ClassificationSession {
        let mut session = ClassificationSession::new();
        session.select_file("products.xlsx", 2048).unwrap();
        session.begin_upload().unwrap();
        session.apply_upload_response(Ok(ApiResponse::ok(UploadResult {
            filename: "products.xlsx".into(),
            total_count: rows.len() as u32,
            success_count: rows.len() as u32,
            failed_count: 0,
            results: rows,
        })));
        session
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap()
    }

    #[test]
    fn test_rejected_file_leaves_state_unchanged() {
        let mut session = ClassificationSession::new();
        session.select_file("first.xlsx", 10).unwrap();
        let before = session.selected_file.clone();

        assert!(session.select_file("notes.txt", 5).is_err());
        assert_eq!(session.selected_file, before);
        assert!(session.alert.as_ref().unwrap().is_error());
        assert!(session.rows.is_empty());
    }

    #[test]
    fn test_selecting_valid_file_clears_alert() {
        let mut session = ClassificationSession::new();
        let _ = session.select_file("bad.csv", 1);
        session.select_file("good.xls", 1).unwrap();
        assert!(session.alert.is_none());
        assert_eq!(session.selected_file.as_ref().unwrap().name, "good.xls");
    }

    #[test]
    fn test_begin_upload_without_file() {
        let mut session = ClassificationSession::new();
        assert_eq!(
            session.begin_upload(),
            Err(ApiError::validation(NO_FILE_MESSAGE))
        );
        assert!(!session.uploading);
        assert_eq!(session.alert, Some(Alert::error(NO_FILE_MESSAGE)));
    }

    #[test]
    fn test_successful_upload_shows_results() {
        let session = loaded(vec![row("A1", "unknown"), row("A2", "6109.10")]);
        assert!(session.show_results);
        assert!(!session.show_upload_area);
        assert!(!session.uploading);
        assert_eq!(session.rows.len(), 2);
        assert!(session.rows.iter().all(|r| !r.is_modified));
        assert_eq!(session.unknown_count(), 1);
        assert_eq!(
            session.summary(),
            Some(("products.xlsx".to_string(), 2, 2, 0))
        );
    }

    #[test]
    fn test_backend_failure_keeps_upload_area() {
        let mut session = ClassificationSession::new();
        session.select_file("products.xlsx", 1).unwrap();
        session.begin_upload().unwrap();

        let mut failed: ApiResponse<UploadResult> = ApiResponse::failed("템플릿 양식 검증 실패");
        failed.validation_errors = vec!["2행: 필수 컬럼 누락".into()];
        session.apply_upload_response(Ok(failed));

        assert!(!session.show_results);
        assert!(session.show_upload_area);
        assert!(!session.uploading);
        let alert = session.alert.unwrap();
        assert!(alert.is_error());
        assert_eq!(alert.message, "템플릿 양식 검증 실패");
        assert_eq!(alert.details, vec!["2행: 필수 컬럼 누락"]);
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let mut session = ClassificationSession::new();
        session.select_file("products.xlsx", 1).unwrap();
        session.begin_upload().unwrap();
        session.apply_upload_response(Ok(ApiResponse {
            success: false,
            data: None,
            message: None,
            validation_errors: Vec::new(),
        }));
        assert_eq!(session.alert, Some(Alert::error(CLASSIFY_FAILED_MESSAGE)));
        assert!(!session.show_results);
    }

    #[test]
    fn test_transport_error_surfaces_detail() {
        let mut session = ClassificationSession::new();
        session.select_file("products.xlsx", 1).unwrap();
        session.begin_upload().unwrap();
        session.apply_upload_response(Err(ApiError::backend(400, "빈 파일입니다.")));
        assert_eq!(session.alert.as_ref().unwrap().message, "빈 파일입니다.");

        session.begin_upload().unwrap();
        session.apply_upload_response(Err(ApiError::Network("offline".into())));
        assert_eq!(session.alert.unwrap().message, CLASSIFY_FAILED_MESSAGE);
        assert!(session.show_upload_area);
    }

    #[test]
    fn test_fresh_batch_resets_modified_and_sort() {
        let mut session = loaded(vec![row("B", "1"), row("A", "2")]);
        session.sort_by(ClassificationColumn::StyleNo);
        session.begin_edit(0);
        session.set_edit_value("9");
        session.confirm_edit();
        assert!(session.rows[0].is_modified);

        let mut incoming = row("C", "3");
        incoming.is_modified = true;
        session.begin_upload().unwrap();
        session.apply_upload_response(Ok(ApiResponse::ok(UploadResult {
            filename: "second.xlsx".into(),
            total_count: 1,
            success_count: 1,
            failed_count: 0,
            results: vec![incoming],
        })));
        assert_eq!(session.rows.len(), 1);
        assert!(!session.rows[0].is_modified);
        assert_eq!(session.sort.column, None);
    }

    #[test]
    fn test_confirm_with_same_value_is_not_modified() {
        let mut session = loaded(vec![row("A1", "6109.10")]);
        session.begin_edit(0);
        assert!(!session.can_confirm());
        assert_eq!(session.confirm_edit(), Some(false));
        assert!(!session.rows[0].is_modified);
        assert_eq!(session.edit, HsCodeEdit::Idle);
    }

    #[test]
    fn test_confirm_with_new_value_is_modified() {
        let mut session = loaded(vec![row("A1", "unknown")]);
        session.begin_edit(0);
        session.set_edit_value("6110.20");
        assert!(session.can_confirm());
        assert_eq!(session.confirm_edit(), Some(true));
        assert_eq!(session.rows[0].hs_code, "6110.20");
        assert!(session.rows[0].is_modified);
    }

    #[test]
    fn test_cancel_discards_value() {
        let mut session = loaded(vec![row("A1", "unknown")]);
        session.begin_edit(0);
        session.set_edit_value("6110.20");
        session.cancel_edit();
        assert_eq!(session.rows[0].hs_code, "unknown");
        assert!(!session.rows[0].is_modified);
        assert_eq!(session.confirm_edit(), None);
    }

    #[test]
    fn test_begin_edit_out_of_range_is_ignored() {
        let mut session = loaded(vec![row("A1", "1")]);
        session.begin_edit(5);
        assert!(!session.edit.is_open());
    }

    #[test]
    fn test_sort_is_stable_and_keeps_flags() {
        let mut session = loaded(vec![
            row("r0", "6109"),
            row("r1", "unknown"),
            row("r2", "6109"),
            row("r3", "6204"),
            row("r4", "unknown"),
        ]);
        // mark r2 as hand-edited without changing its code ordering
        session.rows[2].is_modified = true;

        session.sort_by(ClassificationColumn::HsCode);
        let asc: Vec<_> = session.rows.iter().map(|r| r.style_no.as_str()).collect();
        assert_eq!(asc, vec!["r0", "r2", "r3", "r1", "r4"]);

        session.sort_by(ClassificationColumn::HsCode);
        let desc: Vec<_> = session.rows.iter().map(|r| r.style_no.as_str()).collect();
        assert_eq!(desc, vec!["r1", "r4", "r3", "r0", "r2"]);

        let flagged: Vec<_> = session
            .rows
            .iter()
            .filter(|r| r.is_modified)
            .map(|r| r.style_no.as_str())
            .collect();
        assert_eq!(flagged, vec!["r2"]);
    }

    #[test]
    fn test_new_column_resets_to_ascending() {
        let mut session = loaded(vec![row("b", "1"), row("a", "2")]);
        session.sort_by(ClassificationColumn::HsCode);
        session.sort_by(ClassificationColumn::HsCode);
        session.sort_by(ClassificationColumn::StyleNo);
        assert_eq!(session.rows[0].style_no, "a");
        assert_eq!(session.sort.indicator(ClassificationColumn::StyleNo), " ▲");
    }

    #[test]
    fn test_edit_after_sort_targets_displayed_row() {
        let mut session = loaded(vec![row("b", "1"), row("a", "2")]);
        session.sort_by(ClassificationColumn::StyleNo);
        session.begin_edit(0);
        session.set_edit_value("7");
        session.confirm_edit();
        assert_eq!(session.rows[0].style_no, "a");
        assert_eq!(session.rows[0].hs_code, "7");
    }

    #[test]
    fn test_export_example() {
        let mut session = loaded(vec![row("A1", "unknown"), row("A2", "6109.10")]);
        let sheet = session.export_sheet(now()).unwrap();

        assert_eq!(
            sheet.header().unwrap(),
            EXPORT_HEADERS.map(String::from).as_slice()
        );
        assert_eq!(sheet.data_row_count(1), 2);
        assert_eq!(sheet.rows[1][1], "A1");
        assert_eq!(sheet.rows[1][7], "unknown");
        assert_eq!(sheet.rows[2][1], "A2");
        assert_eq!(sheet.rows[2][7], "6109.10");
        assert_eq!(sheet.rows[1][0], "");
        assert_eq!(sheet.sheet_name, EXPORT_SHEET_NAME);
        assert_eq!(sheet.column_widths, EXPORT_COLUMN_WIDTHS.to_vec());
        assert_eq!(
            sheet.file_name,
            "HS코드_분류결과_products.xlsx_2024-03-15T14-02-26.xlsx"
        );
    }

    #[test]
    fn test_export_marks_modified_rows() {
        let mut session = loaded(vec![row("A1", "unknown")]);
        session.begin_edit(0);
        session.set_edit_value("6109.10");
        session.confirm_edit();
        let sheet = session.export_sheet(now()).unwrap();
        assert_eq!(sheet.rows[1][0], MODIFIED_MARKER);
        assert_eq!(sheet.rows[1][7], "6109.10");
    }

    #[test]
    fn test_export_empty_is_an_error() {
        let mut session = ClassificationSession::new();
        assert!(session.export_sheet(now()).is_err());
        assert_eq!(session.alert, Some(Alert::error(NO_DATA_MESSAGE)));
    }

    #[test]
    fn test_export_file_name_without_result() {
        assert_eq!(
            export_file_name(None, now()),
            "HS코드_분류결과_unknown_2024-03-15T14-02-26.xlsx"
        );
    }

    #[test]
    fn test_template_download_flags() {
        let mut session = ClassificationSession::new();
        assert!(session.begin_template_download());
        assert!(!session.begin_template_download());
        session.finish_template_download(Err(ApiError::Network("x".into())));
        assert!(!session.downloading_template);
        assert_eq!(session.alert, Some(Alert::error(TEMPLATE_FAILED_MESSAGE)));
    }

    #[test]
    fn test_template_download_shows_backend_detail() {
        let mut session = ClassificationSession::new();
        session.begin_template_download();
        let body = r#"{"detail":"템플릿 파일을 찾을 수 없습니다."}"#;
        session.finish_template_download(Err(ApiError::from_error_body(404, body, "")));
        let alert = session.alert.unwrap();
        assert!(alert.is_error());
        assert_eq!(alert.message, "템플릿 파일을 찾을 수 없습니다.");
    }

    #[test]
    fn test_start_over() {
        let mut session = loaded(vec![row("A1", "1")]);
        session.start_over();
        assert_eq!(session, ClassificationSession::default());
    }
}
