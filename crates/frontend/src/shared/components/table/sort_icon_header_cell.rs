//! Ячейка заголовка таблицы с иконкой сортировки
//!
//! Иконка только декоративная: сортировка в каталоге не реализована,
//! клик по ней ничего не меняет.
//!
//! ```rust,ignore
//! <SortIconHeaderCell label="Product" sort_icon="sort-down" />
//! ```

use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn SortIconHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Имя иконки: "sort", "sort-up" или "sort-down"
    #[prop(optional, default = "sort")]
    sort_icon: &'static str,
) -> impl IntoView {
    view! {
        <th>
            <span class="is-flex is-flex-wrap-nowrap">
                {label}
                <a href="#/" on:click=|ev| ev.prevent_default()>
                    <span class="icon" data-cy="SortIcon">
                        {icon(sort_icon)}
                    </span>
                </a>
            </span>
        </th>
    }
}
