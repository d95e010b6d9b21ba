pub mod api_client;
pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod excel;
pub mod export;
pub mod file_input;
pub mod icons;
pub mod list_utils;
