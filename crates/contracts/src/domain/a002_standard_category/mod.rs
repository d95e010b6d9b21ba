pub mod aggregate;

pub use aggregate::{StandardCategory, StandardCategoryUpdate};
