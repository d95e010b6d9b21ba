pub mod common;
pub mod u501_hs_classification;
pub mod u502_mapping_rules;
pub mod u503_excel_upload;
