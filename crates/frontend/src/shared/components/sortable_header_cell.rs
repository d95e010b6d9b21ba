//! Clickable header cell of a sortable column.
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label=col.label()
//!     column=col
//!     sort=Signal::derive(move || session.with(|s| s.sort.clone()))
//!     on_sort=Callback::new(move |col| session.update(|s| s.sort_by(col)))
//! />
//! ```

use crate::shared::list_utils::get_sort_class;
use contracts::shared::sort::SortState;
use leptos::prelude::*;

/// Header cell with the ▲/▼ indicator of `column`.
#[component]
pub fn SortableHeaderCell<C>(
    #[prop(into)]
    label: String,

    column: C,

    /// Sort state of the table
    #[prop(into)]
    sort: Signal<SortState<C>>,

    on_sort: Callback<C>,
) -> impl IntoView
where
    C: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <th
            class="table__header-cell table__header-cell--sortable"
            on:click=move |_| on_sort.run(column)
        >
            {label}
            <span class=move || sort.with(|s| get_sort_class(s, column))>
                {move || sort.with(|s| s.indicator(column))}
            </span>
        </th>
    }
}
