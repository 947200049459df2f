use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPanel component - filter navigation panel with a reset action
///
/// Children are rendered as panel blocks between the heading and the reset button.
#[component]
pub fn FilterPanel(
    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Callback when "Reset all filters" is clicked
    on_reset: Callback<()>,

    /// Panel blocks (user tabs, search, categories)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="block">
            <nav class="panel">
                <p class="panel-heading">
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </p>

                {children()}

                <div class="panel-block">
                    <a
                        data-cy="ResetAllButton"
                        href="#/"
                        class="button is-link is-outlined is-fullwidth"
                        on:click=move |ev| {
                            ev.prevent_default();
                            on_reset.run(());
                        }
                    >
                        "Reset all filters"
                    </a>
                </div>
            </nav>
        </div>
    }
}
