use super::dto::EnrichedProduct;
use crate::domain::a001_user::UserId;

/// Фильтр по владельцу. `All` — sentinel "без фильтра".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserFilter {
    #[default]
    All,
    User(UserId),
}

impl UserFilter {
    pub fn matches(&self, product: &EnrichedProduct) -> bool {
        match self {
            UserFilter::All => true,
            UserFilter::User(id) => product.user_id() == Some(*id),
        }
    }
}

/// Отбирает строки для отображения.
///
/// Сначала фильтр по пользователю, затем поиск по названию (подстрока без
/// учёта регистра). Пустая поисковая строка возвращает ВЕСЬ список, фильтр по
/// пользователю при этом не применяется: так ведёт себя виджет, поведение
/// закреплено тестом `test_empty_search_ignores_user_filter`.
pub fn select_visible_products(
    products: &[EnrichedProduct],
    user: UserFilter,
    search_text: &str,
) -> Vec<EnrichedProduct> {
    let by_user = products.iter().filter(|product| user.matches(product));

    if search_text.is_empty() {
        return products.to_vec();
    }

    let needle = search_text.to_lowercase();
    by_user
        .filter(|product| product.name().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_user::{Sex, User};
    use crate::domain::a002_category::Category;
    use crate::domain::a003_product::Product;
    use crate::projections::p900_product_catalog::build_enriched_products;

    fn catalog() -> Vec<EnrichedProduct> {
        let users = vec![
            User::new(1, "Roma", Sex::Male),
            User::new(2, "Anna", Sex::Female),
        ];
        let categories = vec![
            Category::new(1, "Grocery", "🍞", 2),
            Category::new(2, "Drinks", "🍺", 1),
            Category::new(3, "Fruits", "🍏", 2),
        ];
        let products = vec![
            Product::new(1, "Milk", 1),
            Product::new(2, "Bread", 1),
            Product::new(3, "Beer", 2),
            Product::new(4, "Apple", 3),
            Product::new(5, "Pineapple juice", 2),
        ];
        build_enriched_products(&users, &categories, &products)
    }

    fn names(products: &[EnrichedProduct]) -> Vec<&str> {
        products.iter().map(|p| p.name()).collect()
    }

    #[test]
    fn test_no_filters_returns_everything_in_order() {
        let all = catalog();
        let visible = select_visible_products(&all, UserFilter::All, "");
        assert_eq!(visible, all);
    }

    #[test]
    fn test_empty_search_ignores_user_filter() {
        // Известная особенность: пустой поиск сбрасывает выбор пользователя
        let all = catalog();
        let visible = select_visible_products(&all, UserFilter::User(UserId::new(1)), "");
        assert_eq!(visible, all);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let all = catalog();
        let visible = select_visible_products(&all, UserFilter::All, "APP");
        assert_eq!(names(&visible), vec!["Apple", "Pineapple juice"]);
    }

    #[test]
    fn test_search_matches_substring_anywhere() {
        let all = catalog();
        let visible = select_visible_products(&all, UserFilter::All, "e");
        assert_eq!(
            names(&visible),
            vec!["Bread", "Beer", "Apple", "Pineapple juice"]
        );
    }

    #[test]
    fn test_user_and_search_combined() {
        let all = catalog();

        let roma = select_visible_products(&all, UserFilter::User(UserId::new(1)), "app");
        assert_eq!(names(&roma), vec!["Pineapple juice"]);

        let anna = select_visible_products(&all, UserFilter::User(UserId::new(2)), "app");
        assert_eq!(names(&anna), vec!["Apple"]);
    }

    #[test]
    fn test_search_is_not_trimmed() {
        let all = catalog();
        assert!(select_visible_products(&all, UserFilter::All, " milk").is_empty());
        assert_eq!(
            names(&select_visible_products(&all, UserFilter::All, "e j")),
            vec!["Pineapple juice"]
        );
    }

    #[test]
    fn test_no_match_is_empty_result() {
        let all = catalog();
        let visible = select_visible_products(&all, UserFilter::User(UserId::new(2)), "beer");
        assert!(visible.is_empty());
    }

    #[test]
    fn test_clearing_search_restores_full_list() {
        let all = catalog();
        let user = UserFilter::User(UserId::new(2));

        let narrowed = select_visible_products(&all, user, "bread");
        assert_eq!(names(&narrowed), vec!["Bread"]);

        let restored = select_visible_products(&all, user, "");
        assert_eq!(restored.len(), all.len());
    }

    #[test]
    fn test_unknown_user_never_matches_specific_filter() {
        let users = vec![User::new(1, "Max", Sex::Male)];
        let categories = vec![Category::new(1, "Fruits", "🍏", 7)];
        let products = vec![Product::new(1, "Banana", 1)];
        let all = build_enriched_products(&users, &categories, &products);

        assert!(select_visible_products(&all, UserFilter::User(UserId::new(1)), "ban").is_empty());
        assert_eq!(select_visible_products(&all, UserFilter::All, "ban").len(), 1);
    }

    #[test]
    fn test_banana_scenario() {
        let users = vec![User::new(1, "Max", Sex::Male)];
        let categories = vec![Category::new(1, "Fruits", "🍏", 1)];
        let products = vec![Product::new(1, "Banana", 1), Product::new(2, "Apple", 1)];
        let all = build_enriched_products(&users, &categories, &products);

        let visible = select_visible_products(&all, UserFilter::User(UserId::new(1)), "ban");

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].product, products[0]);
    }
}
