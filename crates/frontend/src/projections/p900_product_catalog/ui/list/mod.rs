pub mod state;

use self::state::{create_state, dispatch};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::table::SortIconHeaderCell;
use crate::shared::list_utils::SearchInput;
use contracts::domain::a001_user::{Sex, User};
use contracts::domain::a002_category::Category;
use contracts::projections::p900_product_catalog::{
    build_enriched_products, select_visible_products, EnrichedProduct, FilterAction, FilterState,
    UserFilter,
};
use contracts::shared::config::Config;
use contracts::shared::fixtures::FixtureSet;
use leptos::prelude::*;

/// Класс ячейки "User" по полу владельца
pub fn user_cell_class(sex: Sex) -> &'static str {
    match sex {
        Sex::Male => "has-text-link",
        Sex::Female => "has-text-danger",
        Sex::Unknown => "",
    }
}

const MISSING: &str = "—";

fn load_fixtures() -> FixtureSet {
    match FixtureSet::embedded() {
        Ok(fixtures) => {
            if let Err(e) = fixtures.check_references() {
                log::warn!("Fixture references are incomplete: {}", e);
            }
            fixtures
        }
        Err(e) => {
            log::error!("Failed to load fixtures: {}", e);
            FixtureSet::default()
        }
    }
}

#[component]
pub fn ProductCatalogList() -> impl IntoView {
    let ui = use_context::<Config>().unwrap_or_default().ui;
    let search_placeholder = ui.search_placeholder;
    let empty_message = ui.empty_message;
    let fixtures = load_fixtures();

    // Соединение выполняется один раз, фикстуры после загрузки не меняются
    let catalog = StoredValue::new(build_enriched_products(
        &fixtures.users,
        &fixtures.categories,
        &fixtures.products,
    ));
    let users = fixtures.users;
    let categories = fixtures.categories;

    let state = create_state();

    let visible = Memo::new(move |_| {
        state.with(|s| {
            catalog.with_value(|all| select_visible_products(all, s.user, &s.search_text))
        })
    });

    let search_value = Signal::derive(move || state.with(|s| s.search_text.clone()));
    let active_filters_count = Signal::derive(move || state.with(|s| s.active_filters_count()));

    view! {
        <FilterPanel
            active_filters_count=active_filters_count
            on_reset=Callback::new(move |_: ()| dispatch(state, FilterAction::ResetAll))
        >
            <UserTabs users=users state=state />

            <div class="panel-block">
                <SearchInput
                    value=search_value
                    placeholder=search_placeholder
                    on_change=Callback::new(move |text: String| {
                        dispatch(state, FilterAction::SetSearchText(text))
                    })
                    on_clear=Callback::new(move |_: ()| dispatch(state, FilterAction::ClearSearch))
                />
            </div>

            <CategoryButtons categories=categories />
        </FilterPanel>

        <div class="box table-container">
            {move || {
                let items = visible.get();
                if items.is_empty() {
                    view! {
                        <p data-cy="NoMatchingMessage">{empty_message.clone()}</p>
                    }.into_any()
                } else {
                    view! { <ProductTable items=items /> }.into_any()
                }
            }}
        </div>
    }
}

/// Вкладки "All" + по одной на каждого пользователя
#[component]
fn UserTabs(users: Vec<User>, state: RwSignal<FilterState>) -> impl IntoView {
    let is_active = move |filter: UserFilter| state.with(|s| s.is_user_selected(filter));

    view! {
        <p class="panel-tabs has-text-weight-bold">
            <a
                data-cy="FilterAllUsers"
                href="#/"
                class=("is-active", move || is_active(UserFilter::All))
                on:click=move |ev| {
                    ev.prevent_default();
                    dispatch(state, FilterAction::ShowAllUsers);
                }
            >
                "All"
            </a>
            {users.into_iter().map(|user| {
                let id = user.id;
                let filter = UserFilter::User(id);
                view! {
                    <a
                        data-cy="FilterUser"
                        href="#/"
                        class=("is-active", move || is_active(filter))
                        on:click=move |ev| {
                            ev.prevent_default();
                            dispatch(state, FilterAction::SelectUser(id));
                        }
                    >
                        {user.name}
                    </a>
                }
            }).collect_view()}
        </p>
    }
}

/// Кнопки категорий. Фильтрация по категориям не подключена, кнопки статичны.
#[component]
fn CategoryButtons(categories: Vec<Category>) -> impl IntoView {
    view! {
        <div class="panel-block is-flex-wrap-wrap">
            <a
                href="#/"
                data-cy="AllCategories"
                class="button is-success mr-6 is-outlined"
                on:click=|ev| ev.prevent_default()
            >
                "All"
            </a>
            {categories.into_iter().map(|category| view! {
                <a
                    data-cy="Category"
                    class="button mr-2 my-1"
                    href="#/"
                    on:click=|ev| ev.prevent_default()
                >
                    {category.title}
                </a>
            }).collect_view()}
        </div>
    }
}

#[component]
fn ProductTable(items: Vec<EnrichedProduct>) -> impl IntoView {
    view! {
        <table data-cy="ProductTable" class="table is-striped is-narrow is-fullwidth">
            <thead>
                <tr>
                    <SortIconHeaderCell label="ID" sort_icon="sort" />
                    <SortIconHeaderCell label="Product" sort_icon="sort-down" />
                    <SortIconHeaderCell label="Category" sort_icon="sort-up" />
                    <SortIconHeaderCell label="User" sort_icon="sort" />
                </tr>
            </thead>
            <tbody>
                {items.into_iter().map(|item| view! { <ProductRow item=item /> }).collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn ProductRow(item: EnrichedProduct) -> impl IntoView {
    let category_label = item
        .category
        .as_ref()
        .map(Category::label)
        .unwrap_or_else(|| MISSING.to_string());
    let (user_name, user_class) = match &item.user {
        Some(user) => (user.name.clone(), user_cell_class(user.sex)),
        None => (MISSING.to_string(), ""),
    };

    view! {
        <tr data-cy="Product">
            <td class="has-text-weight-bold" data-cy="ProductId">{item.id().value()}</td>
            <td data-cy="ProductName">{item.product.name.clone()}</td>
            <td data-cy="ProductCategory">{category_label}</td>
            <td data-cy="ProductUser" class=user_class>{user_name}</td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_cell_class() {
        assert_eq!(user_cell_class(Sex::Male), "has-text-link");
        assert_eq!(user_cell_class(Sex::Female), "has-text-danger");
        assert_eq!(user_cell_class(Sex::Unknown), "");
    }

    #[test]
    fn test_embedded_fixtures_feed_the_table() {
        let fixtures = load_fixtures();
        let catalog =
            build_enriched_products(&fixtures.users, &fixtures.categories, &fixtures.products);
        assert_eq!(catalog.len(), fixtures.products.len());
        assert!(catalog.iter().all(|row| row.unresolved().is_none()));
    }
}
