use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Navigation state shared by the sidebar, the header and every page.
    provide_context(AppGlobalContext::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
