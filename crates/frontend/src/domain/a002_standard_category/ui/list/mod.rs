use crate::domain::a002_standard_category::api;
use crate::domain::a002_standard_category::ui::details::StandardCategoryDetails;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use contracts::domain::a002_standard_category::StandardCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const LOAD_FAILED_MESSAGE: &str = "카테고리 목록을 불러오지 못했습니다.";

#[component]
#[allow(non_snake_case)]
pub fn StandardCategoryList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<StandardCategory>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);
    let dialog_open = RwSignal::new(false);
    let selected = RwSignal::new(None::<StandardCategory>);

    let fetch = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match api::fetch_categories().await {
                Ok(v) => {
                    log::debug!("a002: loaded {} categories", v.len());
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("a002: load failed: {}", e);
                    set_error.set(Some(e.user_message(LOAD_FAILED_MESSAGE)));
                }
            }
            set_is_loading.set(false);
        });
    };

    let open_edit = move |category: StandardCategory| {
        selected.set(Some(category));
        dialog_open.set(true);
    };

    fetch();

    view! {
        <div class="page">
            <PageHeader
                title="표준 카테고리"
                subtitle="분류에 쓰이는 의류 카테고리와 키워드를 관리합니다".to_string()
                count=Signal::derive(move || items.with(|v| v.len()))
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| fetch()
                    disabled=Signal::derive(move || is_loading.get())
                >
                    {icon("refresh")}
                    " 새로고침"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"코드"</th>
                            <th class="table__header-cell">"영문명"</th>
                            <th class="table__header-cell">"한글명"</th>
                            <th class="table__header-cell">"설명"</th>
                            <th class="table__header-cell">"키워드"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|category| {
                            let for_click = category.clone();
                            view! {
                                <tr
                                    class="table__row table__row--clickable"
                                    on:click=move |_| open_edit(for_click.clone())
                                >
                                    <td class="table__cell">{category.category_code}</td>
                                    <td class="table__cell">{category.category_name_en}</td>
                                    <td class="table__cell">{category.category_name_ko.unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell">{category.description.unwrap_or_default()}</td>
                                    <td class="table__cell">{category.keywords.unwrap_or_default()}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <StandardCategoryDetails
                open=dialog_open
                category=selected
                on_saved=Callback::new(move |_| fetch())
            />
        </div>
    }
}
