use crate::domain::a003_fabric_component::api;
use contracts::domain::a003_fabric_component::{CategoryInfo, FabricComponent, FabricComponentForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

const SAVE_FAILED_MESSAGE: &str = "성분 저장에 실패했습니다.";
pub const MINORS_FAILED_MESSAGE: &str = "중분류 목록을 불러오지 못했습니다.";

#[derive(Clone, Copy)]
pub struct FabricComponentDetailsViewModel {
    pub form: RwSignal<FabricComponentForm>,
    /// Minor categories under the major chosen in the form.
    pub minors: RwSignal<Vec<CategoryInfo>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl FabricComponentDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(FabricComponentForm::default()),
            minors: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn reset(&self, component: Option<&FabricComponent>) {
        let form = component.map(FabricComponent::to_form).unwrap_or_default();
        let major = form.major_category_code.clone();
        self.form.set(form);
        self.minors.set(Vec::new());
        self.error.set(None);
        self.saving.set(false);
        if !major.is_empty() {
            self.load_minors(major);
        }
    }

    fn load_minors(&self, major: String) {
        let (minors, error) = (self.minors, self.error);
        spawn_local(async move {
            match api::fetch_minor_categories(&major).await {
                Ok(list) => minors.set(list),
                Err(e) => {
                    log::error!("a003: minor categories of '{}' failed: {}", major, e);
                    error.set(Some(e.user_message(MINORS_FAILED_MESSAGE)));
                }
            }
        });
    }

    pub fn select_major(&self, majors: &[CategoryInfo], code: &str) {
        let Some(major) = majors.iter().find(|m| m.code == code) else {
            return;
        };
        self.form.update(|f| f.select_major(major));
        self.minors.set(Vec::new());
        self.load_minors(major.code.clone());
    }

    pub fn select_minor(&self, code: &str) {
        let minor = self
            .minors
            .with_untracked(|list| list.iter().find(|m| m.code == code).cloned());
        if let Some(minor) = minor {
            self.form.update(|f| f.select_minor(&minor));
        }
    }

    pub fn save_command(
        &self,
        existing: Vec<FabricComponent>,
        editing: Option<i64>,
        on_saved: impl Fn() + 'static,
    ) {
        if self.saving.get_untracked() {
            return;
        }
        let form = self.form.get_untracked();
        if let Err(e) = form.validate(&existing, editing) {
            self.error.set(Some(e.to_string()));
            return;
        }

        self.saving.set(true);
        self.error.set(None);
        let (error, saving) = (self.error, self.saving);
        spawn_local(async move {
            let result = match editing {
                Some(id) => api::update_component(id, &form).await,
                None => api::create_component(&form).await,
            };
            saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("a003: saved component {}", saved.id);
                    on_saved();
                }
                Err(e) => {
                    log::error!("a003: save failed: {}", e);
                    error.set(Some(e.user_message(SAVE_FAILED_MESSAGE)));
                }
            }
        });
    }
}

impl Default for FabricComponentDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
