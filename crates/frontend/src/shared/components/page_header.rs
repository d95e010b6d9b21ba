use leptos::prelude::*;

/// Title bar of a page with the page's action buttons on the right.
///
/// List pages pass `count` to show how many rows are on screen.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    #[prop(optional, into)]
    count: MaybeProp<usize>,

    children: Children,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div>
                <h1 class="page-header__title">
                    {title}
                    {move || count.get().map(|n| view! {
                        <span class="badge page-header__count">{format!("{}건", n)}</span>
                    })}
                </h1>
                {move || subtitle.get().map(|s| view! { <p class="page-header__subtitle">{s}</p> })}
            </div>
            <div class="page-header__actions">{children()}</div>
        </header>
    }
}
