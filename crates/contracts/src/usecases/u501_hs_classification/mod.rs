pub mod response;
pub mod session;

pub use response::{ClassificationColumn, ClassificationRow, UploadResult, UNKNOWN_HS_CODE};
pub use session::{ClassificationSession, HsCodeEdit};

use crate::usecases::common::UseCaseMetadata;

/// Multipart upload of a product sheet; the backend returns one row per product.
pub const UPLOAD_PATH: &str = "/api/v1/excel/hs-classification/upload";
pub const TEMPLATE_PATH: &str = "/api/v1/excel/hs-classification/template";

pub struct HsClassification;

impl UseCaseMetadata for HsClassification {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "hs_classification"
    }

    fn display_name() -> &'static str {
        "HS코드 분류"
    }

    fn description() -> &'static str {
        "엑셀 파일을 업로드하여 의류 제품의 HS코드를 분류합니다"
    }
}
