use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::{do_login, use_auth};
use contracts::enums::Role;
use contracts::system::access::PageKey;

/// Access-code login form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (code, set_code) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (session, set_session) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let code_val = code.get();
        if code_val.trim().is_empty() || is_loading.get() {
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match do_login(code_val, set_session).await {
                Ok(()) => {
                    set_code.set(String::new());
                    // Clients land directly on their only tool.
                    if session.with_untracked(|s| s.role) == Some(Role::Client) {
                        ctx.navigate(PageKey::HsClassification);
                    }
                }
                Err(message) => set_error_message.set(Some(message)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>"접속코드 로그인"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="access-code">"접속코드"</label>
                        <input
                            type="password"
                            id="access-code"
                            placeholder="접속코드를 입력하세요"
                            value=move || code.get()
                            on:input=move |ev| set_code.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get() || code.get().trim().is_empty()
                    >
                        {move || if is_loading.get() { "확인 중..." } else { "로그인" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
