use super::dto::EnrichedProduct;
use crate::domain::a001_user::User;
use crate::domain::a002_category::Category;
use crate::domain::a003_product::Product;

/// Соединяет товары с категориями и владельцами категорий.
///
/// Одна строка на каждый товар, порядок входа сохраняется. Если категория
/// или владелец не найдены, соответствующее поле остаётся `None`, промах
/// пишется в лог. Идентификаторы считаются уникальными, берётся первое совпадение.
pub fn build_enriched_products(
    users: &[User],
    categories: &[Category],
    products: &[Product],
) -> Vec<EnrichedProduct> {
    let enriched: Vec<EnrichedProduct> = products
        .iter()
        .map(|product| {
            let category = categories
                .iter()
                .find(|category| category.id == product.category_id)
                .cloned();
            let user = category
                .as_ref()
                .and_then(|category| users.iter().find(|user| user.id == category.owner_id))
                .cloned();

            let row = EnrichedProduct {
                product: product.clone(),
                category,
                user,
            };
            if let Some(missing) = row.unresolved() {
                log::warn!("p900 join: {}", missing);
            }
            row
        })
        .collect();

    log::debug!(
        "p900 join: {} products, {} categories, {} users",
        enriched.len(),
        categories.len(),
        users.len()
    );
    enriched
}
