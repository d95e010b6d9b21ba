pub mod alert;
pub mod api_response;
pub mod error;
pub mod serde_utils;
pub mod sheet;
pub mod sort;
pub mod upload;

pub use alert::{Alert, AlertKind};
pub use api_response::ApiResponse;
pub use error::ApiError;
