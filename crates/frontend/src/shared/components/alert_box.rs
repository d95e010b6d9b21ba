use contracts::shared::alert::Alert;
use leptos::prelude::*;

/// Success or error message above a workflow, with optional detail lines.
#[component]
pub fn AlertBox(#[prop(into)] alert: Signal<Option<Alert>>) -> impl IntoView {
    move || {
        alert.get().map(|a| {
            let details = a.details.clone();
            view! {
                <div class=a.kind.css_class() role="alert">
                    <span class="alert__message">{a.message.clone()}</span>
                    {(!details.is_empty()).then(|| view! {
                        <ul class="alert__details">
                            {details.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                        </ul>
                    })}
                </div>
            }
        })
    }
}
