use super::view_model::FabricComponentDetailsViewModel;
use contracts::domain::a003_fabric_component::{CategoryInfo, FabricComponent};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn FabricComponentDetails(
    open: RwSignal<bool>,
    #[prop(into)] editing: Signal<Option<FabricComponent>>,
    #[prop(into)] majors: Signal<Vec<CategoryInfo>>,
    /// Loaded components, for the duplicate name checks.
    #[prop(into)]
    existing: Signal<Vec<FabricComponent>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let vm = FabricComponentDetailsViewModel::new();

    Effect::new(move |_| {
        if open.get() {
            vm.reset(editing.get_untracked().as_ref());
        }
    });

    let is_edit = move || editing.with(|e| e.is_some());

    let save = move |_| {
        let editing_id = editing.with_untracked(|e| e.as_ref().map(|c| c.id));
        vm.save_command(existing.get_untracked(), editing_id, move || {
            open.set(false);
            on_saved.run(());
        });
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || if is_edit() { "성분 수정" } else { "새 성분" }}
                    </DialogTitle>
                    <DialogContent>
                        {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                        <div class="details-form">
                            <div class="form__group">
                                <label class="form__label" for="component-major">"대분류"</label>
                                <select
                                    id="component-major"
                                    class="form__select"
                                    prop:value=move || vm.form.with(|f| f.major_category_code.clone())
                                    on:change=move |ev| {
                                        let code = event_target_value(&ev);
                                        majors.with_untracked(|list| vm.select_major(list, &code));
                                    }
                                >
                                    <option value="">"선택"</option>
                                    {move || majors.get().into_iter().map(|m| view! {
                                        <option value=m.code.clone()>{m.name}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="component-minor">"중분류"</label>
                                <select
                                    id="component-minor"
                                    class="form__select"
                                    prop:value=move || vm.form.with(|f| f.minor_category_code.clone())
                                    on:change=move |ev| vm.select_minor(&event_target_value(&ev))
                                >
                                    <option value="">"선택"</option>
                                    {move || vm.minors.get().into_iter().map(|m| view! {
                                        <option value=m.code.clone()>{m.name}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="component-en">"성분 영문명"</label>
                                <input
                                    id="component-en"
                                    class="form__input"
                                    type="text"
                                    prop:value=move || vm.form.with(|f| f.component_name_en.clone())
                                    on:input=move |ev| vm.form.update(|f| f.component_name_en = event_target_value(&ev))
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="component-ko">"성분 한글명"</label>
                                <input
                                    id="component-ko"
                                    class="form__input"
                                    type="text"
                                    placeholder="선택 입력"
                                    prop:value=move || vm.form.with(|f| f.component_name_ko.clone())
                                    on:input=move |ev| vm.form.update(|f| f.component_name_ko = event_target_value(&ev))
                                />
                            </div>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=save
                            disabled=Signal::derive(move || vm.saving.get())
                        >
                            {move || if vm.saving.get() { "저장 중..." } else if is_edit() { "저장" } else { "생성" }}
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
