use super::view_model::AccountDetailsViewModel;
use contracts::domain::a001_account::Account;
use contracts::enums::Role;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AccountDetails(
    open: RwSignal<bool>,
    /// Account being edited; `None` creates a new one.
    #[prop(into)]
    editing: Signal<Option<Account>>,
    /// Accounts already loaded, for the duplicate code check.
    #[prop(into)]
    existing: Signal<Vec<Account>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let vm = AccountDetailsViewModel::new();

    Effect::new(move |_| {
        if open.get() {
            vm.reset(editing.get_untracked().as_ref());
        }
    });

    let is_edit = move || editing.with(|e| e.is_some());

    let save = move |_| {
        let editing_id = editing.with_untracked(|e| e.as_ref().map(|a| a.id));
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
                        {move || if is_edit() { "계정 수정" } else { "새 계정" }}
                    </DialogTitle>
                    <DialogContent>
                        {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                        <div class="details-form">
                            <div class="form__group">
                                <label class="form__label" for="account-name">"고객명"</label>
                                <input
                                    id="account-name"
                                    class="form__input"
                                    type="text"
                                    prop:value=move || vm.form.with(|f| f.name.clone())
                                    on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="account-code">"접속코드"</label>
                                <input
                                    id="account-code"
                                    class="form__input"
                                    type="text"
                                    prop:value=move || vm.form.with(|f| f.code.clone())
                                    on:input=move |ev| vm.form.update(|f| f.code = event_target_value(&ev))
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="account-role">"권한"</label>
                                <select
                                    id="account-role"
                                    class="form__select"
                                    prop:value=move || vm.form.with(|f| f.role.code())
                                    on:change=move |ev| {
                                        if let Some(role) = Role::from_code(&event_target_value(&ev)) {
                                            vm.form.update(|f| f.role = role);
                                        }
                                    }
                                >
                                    {Role::all().into_iter().map(|role| view! {
                                        <option value=role.code()>{role.display_name()}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <label class="form__checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || vm.form.with(|f| f.is_active)
                                    on:change=move |ev| vm.form.update(|f| f.is_active = event_target_checked(&ev))
                                />
                                " 활성"
                            </label>
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
