pub mod aggregate;

pub use aggregate::{
    CategoryInfo, FabricComponent, FabricComponentForm, FabricQuery, FabricSearchFilters,
    MinorCategoryQuery,
};
