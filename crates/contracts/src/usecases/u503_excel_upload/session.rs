use crate::shared::error::ApiError;
use crate::shared::sheet::{cell, SheetRows};
use crate::shared::upload::{validate_file_name, SelectedFile, UploadFlow};

pub const NOT_ENOUGH_DATA_MESSAGE: &str = "데이터가 충분하지 않습니다.";
pub const READ_FAILED_MESSAGE: &str = "파일 읽기에 실패했습니다.";
pub const UPLOAD_FAILED_MESSAGE: &str = "파일 업로드 중 오류가 발생했습니다.";
pub const UPLOAD_DONE_MESSAGE: &str = "파일이 성공적으로 업로드되었습니다!";

/// Preview-and-upload of an arbitrary sheet. The first row is the header.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenericUploadSession {
    pub file: Option<SelectedFile>,
    pub headers: Vec<String>,
    pub rows: SheetRows,
    pub error: Option<String>,
    pub success: bool,
    pub loading: bool,
}

impl GenericUploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A rejected file only sets the error; the previous file and grid stay.
    pub fn select_file(&mut self, name: &str, size: u64) -> Result<(), ApiError> {
        if let Err(e) = validate_file_name(UploadFlow::Generic, name) {
            self.error = Some(e.to_string());
            return Err(e);
        }
        self.file = Some(SelectedFile::new(name, size));
        self.error = None;
        self.success = false;
        Ok(())
    }

    /// Fill the grid from the parsed first sheet.
    pub fn load_sheet(&mut self, sheet: SheetRows) -> Result<(), ApiError> {
        let mut iter = sheet.into_iter();
        let headers = iter.next().unwrap_or_default();
        let rows: SheetRows = iter
            .map(|row| (0..headers.len()).map(|idx| cell(&row, idx)).collect())
            .collect();

        if headers.is_empty() || rows.is_empty() {
            self.clear_grid(NOT_ENOUGH_DATA_MESSAGE);
            return Err(ApiError::validation(NOT_ENOUGH_DATA_MESSAGE));
        }

        self.headers = headers;
        self.rows = rows;
        self.error = None;
        Ok(())
    }

    pub fn read_failed(&mut self) {
        self.clear_grid(READ_FAILED_MESSAGE);
    }

    fn clear_grid(&mut self, message: &str) {
        self.headers.clear();
        self.rows.clear();
        self.error = Some(message.to_string());
    }

    pub fn update_cell(&mut self, row: usize, col: usize, value: &str) {
        if let Some(target) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *target = value.to_string();
        }
    }

    pub fn can_upload(&self) -> bool {
        self.file.is_some() && !self.rows.is_empty() && !self.loading
    }

    /// The file to send, or `None` when the button should do nothing.
    pub fn begin_upload(&mut self) -> Option<SelectedFile> {
        if !self.can_upload() {
            return None;
        }
        self.loading = true;
        self.error = None;
        self.success = false;
        self.file.clone()
    }

    pub fn finish_upload(&mut self, result: Result<(), ApiError>) {
        self.loading = false;
        match result {
            Ok(()) => self.success = true,
            Err(e) => self.error = Some(e.user_message(UPLOAD_FAILED_MESSAGE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sheet::owned_row;

    fn sheet() -> SheetRows {
        vec![
            owned_row(&["style", "name"]),
            owned_row(&["S1", "Tee", "ignored"]),
            owned_row(&["S2"]),
        ]
    }

    #[test]
    fn test_accepts_csv_and_loads_grid() {
        let mut session = GenericUploadSession::new();
        session.select_file("rows.csv", 100).unwrap();
        session.load_sheet(sheet()).unwrap();
        assert_eq!(session.headers, vec!["style", "name"]);
        assert_eq!(session.rows[0], vec!["S1", "Tee"]);
        assert_eq!(session.rows[1], vec!["S2", ""]);
        assert!(session.can_upload());
    }

    #[test]
    fn test_rejected_extension_keeps_state() {
        let mut session = GenericUploadSession::new();
        session.select_file("rows.xlsx", 100).unwrap();
        session.load_sheet(sheet()).unwrap();
        let before = (session.file.clone(), session.rows.clone());

        assert!(session.select_file("photo.png", 1).is_err());
        assert_eq!((session.file.clone(), session.rows.clone()), before);
        assert!(session.error.is_some());
    }

    #[test]
    fn test_header_only_sheet_is_not_enough() {
        let mut session = GenericUploadSession::new();
        session.select_file("rows.xlsx", 1).unwrap();
        assert!(session.load_sheet(vec![owned_row(&["a", "b"])]).is_err());
        assert_eq!(session.error.as_deref(), Some(NOT_ENOUGH_DATA_MESSAGE));
        assert!(!session.can_upload());
    }

    #[test]
    fn test_upload_cycle() {
        let mut session = GenericUploadSession::new();
        assert!(session.begin_upload().is_none());

        session.select_file("rows.xls", 1).unwrap();
        session.load_sheet(sheet()).unwrap();
        session.update_cell(1, 1, "Cap");
        assert_eq!(session.rows[1][1], "Cap");

        let file = session.begin_upload().unwrap();
        assert_eq!(file.name, "rows.xls");
        assert!(session.begin_upload().is_none());

        session.finish_upload(Err(ApiError::Network("offline".into())));
        assert_eq!(session.error.as_deref(), Some(UPLOAD_FAILED_MESSAGE));
        assert!(!session.success);

        session.begin_upload().unwrap();
        session.finish_upload(Ok(()));
        assert!(session.success);
        assert!(!session.loading);
    }

    #[test]
    fn test_upload_failure_shows_backend_detail() {
        let mut session = GenericUploadSession::new();
        session.select_file("rows.xlsx", 1).unwrap();
        session.load_sheet(sheet()).unwrap();
        session.begin_upload().unwrap();

        let body = r#"{"detail":"지원하지 않는 시트 형식입니다."}"#;
        session.finish_upload(Err(ApiError::from_error_body(400, body, "")));
        assert_eq!(session.error.as_deref(), Some("지원하지 않는 시트 형식입니다."));

        // success:false without a message
        session.begin_upload().unwrap();
        session.finish_upload(Err(ApiError::backend(200, "")));
        assert_eq!(session.error.as_deref(), Some(UPLOAD_FAILED_MESSAGE));
    }

    #[test]
    fn test_read_failed_clears_grid() {
        let mut session = GenericUploadSession::new();
        session.load_sheet(sheet()).unwrap();
        session.read_failed();
        assert!(session.rows.is_empty());
        assert_eq!(session.error.as_deref(), Some(READ_FAILED_MESSAGE));
    }
}
