use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use contracts::system::access::PageKey;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="content content--centered">
            <h2>"접근 권한이 없습니다"</h2>
            <p>"이 페이지에 접근할 수 있는 권한이 없습니다."</p>
            <button class="button button--primary" on:click=move |_| ctx.navigate(PageKey::Home)>
                "홈으로 이동"
            </button>
        </div>
    }
}
