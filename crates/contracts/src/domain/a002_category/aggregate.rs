use crate::domain::a001_user::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Категория товаров, у каждой категории ровно один владелец
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,

    /// Эмодзи категории
    pub icon: String,

    #[serde(rename = "ownerId")]
    pub owner_id: UserId,
}

impl Category {
    pub fn new(id: i64, title: impl Into<String>, icon: impl Into<String>, owner_id: i64) -> Self {
        Self {
            id: CategoryId::new(id),
            title: title.into(),
            icon: icon.into(),
            owner_id: UserId::new(owner_id),
        }
    }

    /// Текст ячейки "Category": `"<icon> - <title>"`
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        let category = Category::new(1, "Grocery", "🍞", 2);
        assert_eq!(category.label(), "🍞 - Grocery");
    }

    #[test]
    fn test_owner_id_camel_case() {
        let category: Category =
            serde_json::from_str(r#"{"id": 3, "title": "Fruits", "icon": "🍏", "ownerId": 2}"#)
                .unwrap();
        assert_eq!(category.owner_id, UserId::new(2));
        assert_eq!(category.id.value(), 3);
    }
}
