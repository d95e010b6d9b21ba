use crate::domain::a002_standard_category::api;
use contracts::domain::a002_standard_category::aggregate::{
    keywords_to_lines, lines_to_keywords, UPDATE_FAILED_MESSAGE,
};
use contracts::domain::a002_standard_category::StandardCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Edit dialog for the Korean name, description and keywords of a category.
#[component]
pub fn StandardCategoryDetails(
    open: RwSignal<bool>,
    #[prop(into)] category: Signal<Option<StandardCategory>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let name_ko = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    // one keyword per line while editing
    let keywords = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        let update = category
            .get_untracked()
            .map(|c| c.to_update())
            .unwrap_or_default();
        name_ko.set(update.category_name_ko);
        description.set(update.description);
        keywords.set(keywords_to_lines(&update.keywords));
        error.set(None);
    });

    let save = move |_| {
        let Some(current) = category.get_untracked() else {
            return;
        };
        if saving.get_untracked() {
            return;
        }
        let mut update = current.to_update();
        update.category_name_ko = name_ko.get_untracked();
        update.description = description.get_untracked();
        update.keywords = lines_to_keywords(&keywords.get_untracked());

        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::update_category(current.id, &update).await;
            saving.set(false);
            match result {
                Ok(_) => {
                    open.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("a002: update failed: {}", e);
                    error.set(Some(e.user_message(UPDATE_FAILED_MESSAGE)));
                }
            }
        });
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || category.with(|c| {
                            c.as_ref()
                                .map(|c| format!("{} · {}", c.category_code, c.category_name_en))
                                .unwrap_or_default()
                        })}
                    </DialogTitle>
                    <DialogContent>
                        {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
                        <div class="details-form">
                            <div class="form__group">
                                <label class="form__label" for="category-name-ko">"한글명"</label>
                                <input
                                    id="category-name-ko"
                                    class="form__input"
                                    type="text"
                                    prop:value=move || name_ko.get()
                                    on:input=move |ev| name_ko.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="category-description">"설명"</label>
                                <textarea
                                    id="category-description"
                                    class="form__textarea"
                                    rows="3"
                                    prop:value=move || description.get()
                                    on:input=move |ev| description.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="category-keywords">"키워드 (한 줄에 하나씩)"</label>
                                <textarea
                                    id="category-keywords"
                                    class="form__textarea"
                                    rows="6"
                                    prop:value=move || keywords.get()
                                    on:input=move |ev| keywords.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=save
                            disabled=Signal::derive(move || saving.get())
                        >
                            {move || if saving.get() { "저장 중..." } else { "저장" }}
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "취소"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
