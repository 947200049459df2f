//! Статические фикстуры каталога (пользователи, категории, товары).
//!
//! Данные вшиваются в бинарник через `include_str!` и читаются один раз при старте.
//! Для тестов и подстановки своих данных есть `FixtureSet::from_json`.

use crate::domain::a001_user::{User, UserId};
use crate::domain::a002_category::{Category, CategoryId};
use crate::domain::a003_product::{Product, ProductId};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::hash::Hash;
use thiserror::Error;

const USERS_JSON: &str = include_str!("../../fixtures/users.json");
const CATEGORIES_JSON: &str = include_str!("../../fixtures/categories.json");
const PRODUCTS_JSON: &str = include_str!("../../fixtures/products.json");

/// Ошибки загрузки и проверки фикстур
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to parse {collection}: {source}")]
    Parse {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate id {id} in {collection}")]
    DuplicateId { collection: &'static str, id: i64 },

    #[error("Product {product_id} references unknown category {category_id}")]
    UnresolvedCategory {
        product_id: ProductId,
        category_id: CategoryId,
    },

    #[error("Category {category_id} references unknown owner {owner_id}")]
    UnresolvedOwner {
        category_id: CategoryId,
        owner_id: UserId,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureSet {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl FixtureSet {
    /// Фикстуры, вшитые в crate
    pub fn embedded() -> Result<Self, FixtureError> {
        Self::from_json(USERS_JSON, CATEGORIES_JSON, PRODUCTS_JSON)
    }

    pub fn from_json(users: &str, categories: &str, products: &str) -> Result<Self, FixtureError> {
        let users: Vec<User> = parse_collection("users", users)?;
        let categories: Vec<Category> = parse_collection("categories", categories)?;
        let products: Vec<Product> = parse_collection("products", products)?;

        ensure_unique("users", users.iter().map(|u| u.id), |id: UserId| id.value())?;
        ensure_unique("categories", categories.iter().map(|c| c.id), |id: CategoryId| id.value())?;
        ensure_unique("products", products.iter().map(|p| p.id), |id: ProductId| id.value())?;

        log::debug!(
            "Fixtures loaded: {} users, {} categories, {} products",
            users.len(),
            categories.len(),
            products.len()
        );

        Ok(Self {
            users,
            categories,
            products,
        })
    }

    /// Проверяет ссылки product → category → owner.
    ///
    /// Загрузка эту проверку не выполняет: неразрешённые ссылки допустимы и
    /// доходят до каталога как `None`.
    pub fn check_references(&self) -> Result<(), FixtureError> {
        for product in &self.products {
            let category = self
                .categories
                .iter()
                .find(|c| c.id == product.category_id)
                .ok_or(FixtureError::UnresolvedCategory {
                    product_id: product.id,
                    category_id: product.category_id,
                })?;

            if !self.users.iter().any(|u| u.id == category.owner_id) {
                return Err(FixtureError::UnresolvedOwner {
                    category_id: category.id,
                    owner_id: category.owner_id,
                });
            }
        }
        Ok(())
    }
}

fn parse_collection<T: DeserializeOwned>(
    collection: &'static str,
    json: &str,
) -> Result<Vec<T>, FixtureError> {
    serde_json::from_str(json).map_err(|source| FixtureError::Parse { collection, source })
}

fn ensure_unique<I, F>(
    collection: &'static str,
    ids: impl Iterator<Item = I>,
    raw: F,
) -> Result<(), FixtureError>
where
    I: Eq + Hash + Copy,
    F: Fn(I) -> i64,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FixtureError::DuplicateId {
                collection,
                id: raw(id),
            });
        }
    }
    Ok(())
}
