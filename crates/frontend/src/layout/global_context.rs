use contracts::system::access::PageKey;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Query parameter holding the active page key.
const PAGE_PARAM: &str = "page";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<PageKey>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(PageKey::Home),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the page from `?page=` and keep the URL in sync afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get(PAGE_PARAM).and_then(|key| PageKey::from_key(key)) {
            self.navigate(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                PAGE_PARAM.to_string(),
                page.key().to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: PageKey) {
        if self.active.get_untracked() != page {
            log::debug!("navigate: '{}'", page.key());
            self.active.set(page);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}
