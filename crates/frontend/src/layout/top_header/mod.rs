//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the application title, the role badge
//! and the logout button.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use contracts::enums::Role;
use contracts::system::access::PageKey;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (session, set_session) = use_auth();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let logout = move |_| {
        do_logout(set_session);
        ctx.navigate(PageKey::Home);
    };

    let is_sidebar_visible = move || ctx.left_open.get();
    let role = move || session.with(|s| s.role.filter(|_| s.is_authenticated));

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "메뉴 숨기기" } else { "메뉴 보기" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"HS코드 자동분류 시스템"</span>
            </div>

            <div class="top-header__actions">
                {move || role().map(|r| view! {
                    <span
                        class="top-header__role"
                        class:top-header__role--admin={r == Role::Admin}
                    >
                        {if r == Role::Admin { "관리자" } else { "일반 사용자" }}
                    </span>
                    <button class="top-header__icon-btn" on:click=logout title="로그아웃">
                        {icon("log-out")}
                    </button>
                })}
            </div>
        </div>
    }
}
