//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::system::access::PageKey;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<PageKey>,
}

fn page_icon(page: PageKey) -> &'static str {
    match page {
        PageKey::Home => "home",
        PageKey::HsClassification => "assignment",
        PageKey::MappingRules => "table",
        PageKey::ExcelUpload => "upload",
        PageKey::StandardCategories | PageKey::FabricComponents => "table",
        PageKey::Accounts => "users",
        PageKey::Unauthorized => "",
    }
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "classification",
            label: "HS코드 작업",
            icon: "assignment",
            items: vec![
                PageKey::HsClassification,
                PageKey::MappingRules,
                PageKey::ExcelUpload,
            ],
        },
        MenuGroup {
            id: "management",
            label: "관리",
            icon: "users",
            items: vec![
                PageKey::StandardCategories,
                PageKey::FabricComponents,
                PageKey::Accounts,
            ],
        },
    ]
}

#[component]
fn MenuItem(page: PageKey, #[prop(optional)] nested: bool) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let padding = if nested { "10px" } else { "12px" };

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || ctx.active.get() == page
            style:padding-left=padding
            on:click=move |_| ctx.navigate(page)
        >
            <div class="app-sidebar__item-content">
                {icon(page_icon(page))}
                <span>{page.label()}</span>
            </div>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let (session, _) = use_auth();

    let visible = Memo::new(move |_| session.with(PageKey::menu_for));

    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            <MenuItem page=PageKey::Home />

            {move || {
                let allowed = visible.get();
                get_menu_groups().into_iter().filter_map(|group| {
                    let items: Vec<PageKey> = group
                        .items
                        .iter()
                        .copied()
                        .filter(|p| allowed.contains(p))
                        .collect();

                    // Groups without a single reachable page are hidden
                    if items.is_empty() {
                        return None;
                    }

                    let gid_click = group.id.to_string();
                    let gid_exp = group.id.to_string();
                    let gid_show = group.id.to_string();

                    Some(view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    let gid = gid_click.clone();
                                    expanded_groups.update(move |ids| {
                                        if let Some(pos) = ids.iter().position(|x| x == &gid) {
                                            ids.remove(pos);
                                        } else {
                                            ids.push(gid);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            <Show when=move || expanded_groups.get().contains(&gid_show)>
                                <div class="app-sidebar__children">
                                    {items
                                        .iter()
                                        .map(|page| view! { <MenuItem page=*page nested=true /> })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    })
                }).collect_view()
            }}
        </div>
    }
}
