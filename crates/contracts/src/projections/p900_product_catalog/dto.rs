use crate::domain::a001_user::{User, UserId};
use crate::domain::a002_category::{Category, CategoryId};
use crate::domain::a003_product::{Product, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Строка каталога: товар вместе с найденной категорией и её владельцем.
///
/// `category` и `user` равны `None`, если ссылка в фикстурах не разрешилась.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedProduct {
    #[serde(flatten)]
    pub product: Product,
    pub category: Option<Category>,
    pub user: Option<User>,
}

impl EnrichedProduct {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user.as_ref().map(|u| u.id)
    }

    /// Первая неразрешённая ссылка строки (категория проверяется раньше владельца)
    pub fn unresolved(&self) -> Option<UnresolvedReference> {
        match (&self.category, &self.user) {
            (None, _) => Some(UnresolvedReference::Category {
                product_id: self.product.id,
                category_id: self.product.category_id,
            }),
            (Some(category), None) => Some(UnresolvedReference::Owner {
                product_id: self.product.id,
                category_id: category.id,
                owner_id: category.owner_id,
            }),
            (Some(_), Some(_)) => None,
        }
    }
}

/// Ссылка фикстур, для которой не нашлось записи
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedReference {
    Category {
        product_id: ProductId,
        category_id: CategoryId,
    },
    Owner {
        product_id: ProductId,
        category_id: CategoryId,
        owner_id: UserId,
    },
}

impl fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnresolvedReference::Category {
                product_id,
                category_id,
            } => write!(
                f,
                "product {} references unknown category {}",
                product_id, category_id
            ),
            UnresolvedReference::Owner {
                product_id,
                category_id,
                owner_id,
            } => write!(
                f,
                "category {} of product {} references unknown owner {}",
                category_id, product_id, owner_id
            ),
        }
    }
}
