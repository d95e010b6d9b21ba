use contracts::system::access::{authorize, Access, PageKey};
use leptos::prelude::*;

use super::context::use_auth;
use crate::layout::global_context::AppGlobalContext;

/// Renders `children` only when the session may open `page`.
///
/// Anonymous visitors are sent to the start page; signed-in users without
/// the role go where [`authorize`] points them.
#[component]
pub fn PageGuard(page: PageKey, children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_auth();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let access = Memo::new(move |_| session.with(|s| authorize(s, page)));

    Effect::new(move |_| match access.get() {
        Access::Granted => {}
        Access::Login => {
            log::warn!("'{}' requires login", page.key());
            ctx.navigate(PageKey::Home);
        }
        Access::Redirect(target) => {
            log::warn!("'{}' is not allowed, redirecting to '{}'", page.key(), target.key());
            ctx.navigate(target);
        }
    });

    view! {
        <Show when=move || access.get() == Access::Granted>
            {children()}
        </Show>
    }
}
