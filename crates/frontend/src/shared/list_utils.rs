/// Общие элементы списков: строка поиска с кнопкой очистки
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Поле поиска с кнопкой очистки.
///
/// Значение передаётся наружу на каждый ввод, без debounce и без trim.
/// Кнопка очистки видна только при непустом значении.
#[component]
pub fn SearchInput(
    /// Текущее значение поиска
    #[prop(into)]
    value: Signal<String>,
    /// Callback на каждый ввод
    #[prop(into)]
    on_change: Callback<String>,
    /// Callback кнопки очистки
    #[prop(into)]
    on_clear: Callback<()>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().is_empty();

    view! {
        <p class="control has-icons-left has-icons-right">
            <input
                data-cy="SearchField"
                type="text"
                class="input"
                placeholder=placeholder
                style=move || format!(
                    "background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />

            <span class="icon is-left">{icon("search")}</span>

            {move || if is_filter_active() {
                view! {
                    <span class="icon is-right">
                        <button
                            data-cy="ClearButton"
                            type="button"
                            class="delete"
                            title="Clear"
                            on:click=move |_| on_clear.run(())
                        >
                            {icon("x")}
                        </button>
                    </span>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </p>
    }
}
