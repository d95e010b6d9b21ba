use contracts::domain::a003_fabric_component::{
    CategoryInfo, FabricComponent, FabricQuery, FabricSearchFilters,
};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct FabricComponentListState {
    pub items: Vec<FabricComponent>,
    /// Search panel as typed.
    pub filters: FabricSearchFilters,
    /// Filters of the last search button press.
    pub searched: Option<FabricSearchFilters>,
    pub majors: Vec<CategoryInfo>,
    /// Minor categories under the selected major filter.
    pub minors: Vec<CategoryInfo>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl FabricComponentListState {
    /// Query for a reload: the last search while it still narrows anything, else everything.
    pub fn reload_query(&self) -> FabricQuery {
        self.searched
            .as_ref()
            .filter(|f| f.is_active())
            .map(FabricSearchFilters::to_query)
            .unwrap_or_default()
    }
}

pub fn create_state() -> RwSignal<FabricComponentListState> {
    RwSignal::new(FabricComponentListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_query_reruns_active_search_only() {
        let mut state = FabricComponentListState::default();
        assert_eq!(state.reload_query(), FabricQuery::default());

        let mut filters = FabricSearchFilters::default();
        filters.component_name_en = "cot".into();
        state.searched = Some(filters);
        assert_eq!(state.reload_query().component_name_en.as_deref(), Some("cot"));

        state.searched = Some(FabricSearchFilters::default());
        assert_eq!(state.reload_query(), FabricQuery::default());
    }
}
