mod state;

use self::state::create_state;
use crate::domain::a003_fabric_component::api;
use crate::domain::a003_fabric_component::ui::details::{
    FabricComponentDetails, MINORS_FAILED_MESSAGE,
};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm, short_timestamp};
use contracts::domain::a003_fabric_component::aggregate::ALL;
use contracts::domain::a003_fabric_component::{FabricComponent, FabricQuery};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const LOAD_FAILED_MESSAGE: &str = "성분 목록을 불러오지 못했습니다.";
const DELETE_FAILED_MESSAGE: &str = "성분 삭제에 실패했습니다.";

#[component]
#[allow(non_snake_case)]
pub fn FabricComponentList() -> impl IntoView {
    let state = create_state();
    let dialog_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<FabricComponent>);

    let fetch = move |query: FabricQuery| {
        state.update(|s| s.is_loading = true);
        spawn_local(async move {
            let result = api::fetch_components(&query).await;
            state.update(|s| {
                s.is_loading = false;
                match result {
                    Ok(items) => {
                        log::debug!("a003: loaded {} components", items.len());
                        s.items = items;
                        s.error = None;
                    }
                    Err(e) => {
                        log::error!("a003: load failed: {}", e);
                        s.error = Some(e.user_message(LOAD_FAILED_MESSAGE));
                    }
                }
            });
        });
    };

    let reload = move || fetch(state.with_untracked(|s| s.reload_query()));

    let search = move || {
        let query = state.try_update(|s| {
            s.searched = Some(s.filters.clone());
            s.filters.to_query()
        });
        if let Some(query) = query {
            fetch(query);
        }
    };

    let change_major = move |code: String| {
        state.update(|s| {
            s.filters.set_major(code.clone());
            s.minors.clear();
        });
        if code == ALL {
            return;
        }
        spawn_local(async move {
            match api::fetch_minor_categories(&code).await {
                Ok(minors) => state.update(|s| {
                    // the filter may have moved on while loading
                    if s.filters.major_category_code == code {
                        s.minors = minors;
                    }
                }),
                Err(e) => {
                    log::error!("a003: minor categories of '{}' failed: {}", code, e);
                    state.update(|s| s.error = Some(e.user_message(MINORS_FAILED_MESSAGE)));
                }
            }
        });
    };

    let open_create = move || {
        editing.set(None);
        dialog_open.set(true);
    };

    let open_edit = move |id: i64| {
        spawn_local(async move {
            match api::fetch_component(id).await {
                Ok(component) => {
                    editing.set(Some(component));
                    dialog_open.set(true);
                }
                Err(e) => {
                    log::error!("a003: component {} failed: {}", id, e);
                    state.update(|s| s.error = Some(e.user_message(LOAD_FAILED_MESSAGE)));
                }
            }
        });
    };

    let delete = move |component: FabricComponent| {
        if !confirm(&format!("'{}' 성분을 삭제하시겠습니까?", component.component_name_en)) {
            return;
        }
        spawn_local(async move {
            match api::delete_component(component.id).await {
                Ok(()) => reload(),
                Err(e) => {
                    log::error!("a003: delete failed: {}", e);
                    state.update(|s| s.error = Some(e.user_message(DELETE_FAILED_MESSAGE)));
                }
            }
        });
    };

    spawn_local(async move {
        match api::fetch_major_categories().await {
            Ok(majors) => state.update(|s| s.majors = majors),
            Err(e) => log::error!("a003: major categories failed: {}", e),
        }
    });
    reload();

    view! {
        <div class="page">
            <PageHeader
                title="원단 성분 관리"
                subtitle="대분류·중분류별 원단 성분을 관리합니다".to_string()
                count=Signal::derive(move || state.with(|s| s.items.len()))
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                    {icon("plus")}
                    " 새 성분"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| reload()
                    disabled=Signal::derive(move || state.with(|s| s.is_loading))
                >
                    {icon("refresh")}
                    " 새로고침"
                </Button>
            </PageHeader>

            {move || state.with(|s| s.error.clone()).map(|e| view! { <div class="error">{e}</div> })}

            <div class="filter-panel">
                <select
                    class="form__select"
                    prop:value=move || state.with(|s| s.filters.major_category_code.clone())
                    on:change=move |ev| change_major(event_target_value(&ev))
                >
                    <option value=ALL>"전체 대분류"</option>
                    {move || state.with(|s| s.majors.clone()).into_iter().map(|m| view! {
                        <option value=m.code.clone()>{m.name}</option>
                    }).collect_view()}
                </select>
                <select
                    class="form__select"
                    prop:value=move || state.with(|s| s.filters.minor_category_code.clone())
                    on:change=move |ev| {
                        let code = event_target_value(&ev);
                        state.update(|s| s.filters.minor_category_code = code);
                    }
                >
                    <option value=ALL>"전체 중분류"</option>
                    {move || state.with(|s| s.minors.clone()).into_iter().map(|m| view! {
                        <option value=m.code.clone()>{m.name}</option>
                    }).collect_view()}
                </select>
                <input
                    class="form__input"
                    type="text"
                    placeholder="영문명"
                    prop:value=move || state.with(|s| s.filters.component_name_en.clone())
                    on:input=move |ev| state.update(|s| s.filters.component_name_en = event_target_value(&ev))
                />
                <input
                    class="form__input"
                    type="text"
                    placeholder="한글명"
                    prop:value=move || state.with(|s| s.filters.component_name_ko.clone())
                    on:input=move |ev| state.update(|s| s.filters.component_name_ko = event_target_value(&ev))
                />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| search()>
                    {icon("search")}
                    " 검색"
                </Button>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"대분류"</th>
                            <th class="table__header-cell">"중분류"</th>
                            <th class="table__header-cell">"영문명"</th>
                            <th class="table__header-cell">"한글명"</th>
                            <th class="table__header-cell">"수정일"</th>
                            <th class="table__header-cell">"관리"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.with(|s| s.items.clone()).into_iter().map(|component| {
                            let id = component.id;
                            let for_delete = component.clone();
                            let changed = component
                                .updated_at
                                .clone()
                                .unwrap_or_else(|| component.created_at.clone());
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{component.major_category_name}</td>
                                    <td class="table__cell">{component.minor_category_name}</td>
                                    <td class="table__cell">{component.component_name_en}</td>
                                    <td class="table__cell">{component.component_name_ko.unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell">{short_timestamp(&changed)}</td>
                                    <td class="table__cell">
                                        <button class="button button--icon" title="수정" on:click=move |_| open_edit(id)>
                                            {icon("edit")}
                                        </button>
                                        <button class="button button--icon" title="삭제" on:click=move |_| delete(for_delete.clone())>
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <FabricComponentDetails
                open=dialog_open
                editing=editing
                majors=Signal::derive(move || state.with(|s| s.majors.clone()))
                existing=Signal::derive(move || state.with(|s| s.items.clone()))
                on_saved=Callback::new(move |_| reload())
            />
        </div>
    }
}
