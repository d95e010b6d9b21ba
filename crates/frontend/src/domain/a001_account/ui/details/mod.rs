mod view;
mod view_model;

pub use view::AccountDetails;
pub use view_model::AccountDetailsViewModel;
