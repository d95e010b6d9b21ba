pub mod apparel;
pub mod role;

pub use apparel::{FabricType, Gender};
pub use role::Role;
