mod state;

use self::state::create_state;
use crate::domain::a001_account::api;
use crate::domain::a001_account::ui::details::AccountDetails;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm, short_timestamp};
use contracts::domain::a001_account::{Account, StatusFilter};
use contracts::enums::Role;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const LOAD_FAILED_MESSAGE: &str = "계정 목록을 불러오지 못했습니다.";
const DELETE_FAILED_MESSAGE: &str = "계정 삭제에 실패했습니다.";
const TOGGLE_FAILED_MESSAGE: &str = "상태 변경에 실패했습니다.";
/// How long the "복사됨" mark stays on a copied code.
const COPIED_MARK_MS: u32 = 2000;

#[component]
#[allow(non_snake_case)]
pub fn AccountList() -> impl IntoView {
    let state = create_state();
    let dialog_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<Account>);

    let load = move || {
        spawn_local(async move {
            match api::fetch_accounts().await {
                Ok(accounts) => {
                    log::debug!("a001: loaded {} accounts", accounts.len());
                    state.update(|s| {
                        s.accounts = accounts;
                        s.is_loaded = true;
                        s.error = None;
                    });
                }
                Err(e) => {
                    log::error!("a001: load failed: {}", e);
                    state.update(|s| s.error = Some(e.user_message(LOAD_FAILED_MESSAGE)));
                }
            }
        });
    };

    let open_create = move || {
        editing.set(None);
        dialog_open.set(true);
    };

    let open_edit = move |account: Account| {
        editing.set(Some(account));
        dialog_open.set(true);
    };

    let delete = move |account: Account| {
        if !confirm(&format!("'{}' 계정을 삭제하시겠습니까?", account.name)) {
            return;
        }
        spawn_local(async move {
            match api::delete_account(account.id).await {
                Ok(()) => load(),
                Err(e) => {
                    log::error!("a001: delete failed: {}", e);
                    state.update(|s| s.error = Some(e.user_message(DELETE_FAILED_MESSAGE)));
                }
            }
        });
    };

    let toggle_active = move |account: Account| {
        spawn_local(async move {
            match api::update_account(account.id, &account.toggled()).await {
                Ok(_) => load(),
                Err(e) => {
                    log::error!("a001: toggle failed: {}", e);
                    state.update(|s| s.error = Some(e.user_message(TOGGLE_FAILED_MESSAGE)));
                }
            }
        });
    };

    let copy_code = move |account: Account| {
        copy_to_clipboard_with_callback(&account.code, move || {
            state.update(|s| s.copied = Some(account.id));
            spawn_local(async move {
                TimeoutFuture::new(COPIED_MARK_MS).await;
                state.update(|s| {
                    if s.copied == Some(account.id) {
                        s.copied = None;
                    }
                });
            });
        });
    };

    let search = move || state.update(|s| s.applied = s.draft.clone());
    let reset = move || {
        state.update(|s| {
            s.draft = Default::default();
            s.applied = Default::default();
        })
    };

    load();

    view! {
        <div class="page">
            <PageHeader
                title="계정 관리"
                subtitle="접속코드와 권한을 관리합니다".to_string()
                count=Signal::derive(move || state.with(|s| s.rows().len()))
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                    {icon("plus")}
                    " 새 계정"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    {icon("refresh")}
                    " 새로고침"
                </Button>
            </PageHeader>

            {move || state.with(|s| s.error.clone()).map(|e| view! { <div class="error">{e}</div> })}

            <div class="filter-panel">
                <select
                    class="form__select"
                    prop:value=move || state.with(|s| s.draft.status.code())
                    on:change=move |ev| {
                        let status = StatusFilter::from_code(&event_target_value(&ev));
                        state.update(|s| s.draft.status = status);
                    }
                >
                    <option value="all">"전체 상태"</option>
                    <option value="active">"활성"</option>
                    <option value="inactive">"비활성"</option>
                </select>
                <select
                    class="form__select"
                    prop:value=move || state.with(|s| s.draft.role.map_or("all", |r| r.code()))
                    on:change=move |ev| {
                        let role = Role::from_code(&event_target_value(&ev));
                        state.update(|s| s.draft.role = role);
                    }
                >
                    <option value="all">"전체 권한"</option>
                    {Role::all().into_iter().map(|role| view! {
                        <option value=role.code()>{role.display_name()}</option>
                    }).collect_view()}
                </select>
                <input
                    class="form__input"
                    type="text"
                    placeholder="접속코드"
                    prop:value=move || state.with(|s| s.draft.code.clone())
                    on:input=move |ev| state.update(|s| s.draft.code = event_target_value(&ev))
                />
                <input
                    class="form__input"
                    type="text"
                    placeholder="고객명"
                    prop:value=move || state.with(|s| s.draft.name.clone())
                    on:input=move |ev| state.update(|s| s.draft.name = event_target_value(&ev))
                />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| search()>
                    {icon("search")}
                    " 검색"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| reset()>
                    "초기화"
                </Button>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"고객명"</th>
                            <th class="table__header-cell">"접속코드"</th>
                            <th class="table__header-cell">"권한"</th>
                            <th class="table__header-cell">"상태"</th>
                            <th class="table__header-cell">"생성일"</th>
                            <th class="table__header-cell">"관리"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = state.with(|s| s.rows());
                            if rows.is_empty() && state.with(|s| s.is_loaded) {
                                return view! {
                                    <tr><td class="table__cell table__cell--empty" colspan="6">"계정이 없습니다."</td></tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|account| {
                                let id = account.id;
                                let (for_copy, for_toggle, for_edit, for_delete) =
                                    (account.clone(), account.clone(), account.clone(), account.clone());
                                view! {
                                    <tr class="table__row" class:table__row--inactive={!account.is_active}>
                                        <td class="table__cell">{account.name.clone()}</td>
                                        <td class="table__cell">
                                            <code>{account.code.clone()}</code>
                                            <button
                                                class="button button--icon"
                                                title="코드 복사"
                                                on:click=move |_| copy_code(for_copy.clone())
                                            >
                                                {icon("copy")}
                                            </button>
                                            <Show when=move || state.with(|s| s.copied == Some(id))>
                                                <span class="badge badge--success">"복사됨"</span>
                                            </Show>
                                        </td>
                                        <td class="table__cell">
                                            <span class="badge" class:badge--primary={account.role == Role::Admin}>
                                                {account.role.display_name()}
                                            </span>
                                        </td>
                                        <td class="table__cell">
                                            <button
                                                class="button button--secondary"
                                                on:click=move |_| toggle_active(for_toggle.clone())
                                            >
                                                {if account.is_active { "활성" } else { "비활성" }}
                                            </button>
                                        </td>
                                        <td class="table__cell">{short_timestamp(&account.created_at)}</td>
                                        <td class="table__cell">
                                            <button class="button button--icon" title="수정" on:click=move |_| open_edit(for_edit.clone())>
                                                {icon("edit")}
                                            </button>
                                            <button class="button button--icon" title="삭제" on:click=move |_| delete(for_delete.clone())>
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <AccountDetails
                open=dialog_open
                editing=editing
                existing=Signal::derive(move || state.with(|s| s.accounts.clone()))
                on_saved=Callback::new(move |_| load())
            />
        </div>
    }
}
