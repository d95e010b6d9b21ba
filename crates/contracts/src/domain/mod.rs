pub mod a001_account;
pub mod a002_standard_category;
pub mod a003_fabric_component;
