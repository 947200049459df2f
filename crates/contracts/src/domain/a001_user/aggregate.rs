use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Sex
// ============================================================================

/// Пол пользователя, влияет только на цвет ячейки в таблице
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
    /// Любое другое значение из фикстур
    #[serde(other)]
    Unknown,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
            Sex::Unknown => "",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Владелец категорий товаров
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
            sex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_deserialize() {
        let users: Vec<User> = serde_json::from_str(
            r#"[
                {"id": 1, "name": "Roma", "sex": "m"},
                {"id": 2, "name": "Anna", "sex": "f"},
                {"id": 3, "name": "Kim", "sex": "x"}
            ]"#,
        )
        .unwrap();

        assert_eq!(users[0].sex, Sex::Male);
        assert_eq!(users[1].sex, Sex::Female);
        assert_eq!(users[2].sex, Sex::Unknown);
        assert_eq!(users[2].id, UserId::new(3));
    }

    #[test]
    fn test_user_id_is_plain_integer() {
        let json = serde_json::to_string(&User::new(7, "Max", Sex::Male)).unwrap();
        assert_eq!(json, r#"{"id":7,"name":"Max","sex":"m"}"#);
    }
}
