pub mod session;

pub use session::GenericUploadSession;

use crate::usecases::common::UseCaseMetadata;

pub const UPLOAD_PATH: &str = "/api/v1/excel/upload";

pub struct ExcelUpload;

impl UseCaseMetadata for ExcelUpload {
    fn usecase_index() -> &'static str {
        "u503"
    }

    fn usecase_name() -> &'static str {
        "excel_upload"
    }

    fn display_name() -> &'static str {
        "엑셀 파일 업로드"
    }

    fn description() -> &'static str {
        "엑셀 또는 CSV 파일을 확인한 뒤 업로드합니다"
    }
}
