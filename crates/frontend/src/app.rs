use crate::projections::p900_product_catalog::ui::list::ProductCatalogList;
use contracts::shared::config::Config;
use leptos::prelude::*;

#[component]
pub fn App(config: Config) -> impl IntoView {
    let title = config.ui.title.clone();

    // Widget texts are read from context by the list and its panels.
    provide_context(config);

    view! {
        <div class="section">
            <div class="container">
                <h1 class="title">{title}</h1>
                <ProductCatalogList />
            </div>
        </div>
    }
}
