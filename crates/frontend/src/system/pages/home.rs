use leptos::prelude::*;

use super::login::LoginPage;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::system::access::PageKey;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "assignment",
        "HS코드 자동 분류",
        "의류 상품 정보를 기반으로 HS코드를 자동으로 분류합니다.",
    ),
    (
        "upload",
        "엑셀 파일 업로드",
        "대량의 상품 데이터를 엑셀 파일로 한 번에 처리할 수 있습니다.",
    ),
    (
        "download",
        "결과 다운로드",
        "분류된 HS코드를 포함한 결과를 엑셀 파일로 다운로드할 수 있습니다.",
    ),
];

/// Start page. Shows the login form until a session exists.
#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (session, _) = use_auth();

    let start = move |_| ctx.navigate(PageKey::HsClassification);

    view! {
        <div class="content home">
            <div class="home__intro">
                <h1>"HS코드 자동분류 시스템"</h1>
                <p>"의류 상품 정보를 기반으로 HS코드를 자동으로 분류하고 관리하세요"</p>
            </div>

            <div class="home__features">
                {FEATURES.iter().map(|(icon_name, title, description)| view! {
                    <div class="home__card">
                        <div class="home__card-icon">{icon(icon_name)}</div>
                        <h3>{*title}</h3>
                        <p>{*description}</p>
                    </div>
                }).collect_view()}
            </div>

            <Show
                when=move || session.with(|s| s.is_authenticated)
                fallback=|| view! { <LoginPage /> }
            >
                <div class="home__start">
                    <button class="button button--primary" on:click=start>
                        {icon("assignment")}
                        "HS코드 분류 시작하기"
                    </button>
                </div>
            </Show>
        </div>
    }
}
