/// Identification of a UseCase for menus and logs
pub trait UseCaseMetadata {
    /// Index, e.g. "u501"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "hs_classification"
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u501_hs_classification"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}

#[cfg(test)]
mod tests {
    use super::UseCaseMetadata;
    use crate::usecases::u501_hs_classification::HsClassification;
    use crate::usecases::u503_excel_upload::ExcelUpload;

    #[test]
    fn test_full_name() {
        assert_eq!(HsClassification::full_name(), "u501_hs_classification");
        assert_eq!(ExcelUpload::full_name(), "u503_excel_upload");
    }
}
