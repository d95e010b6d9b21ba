mod view;
mod view_model;

pub use view::FabricComponentDetails;
pub use view_model::{FabricComponentDetailsViewModel, MINORS_FAILED_MESSAGE};
