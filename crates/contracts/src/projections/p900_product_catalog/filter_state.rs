use super::filter::UserFilter;
use crate::domain::a001_user::UserId;

/// Состояние панели фильтров каталога
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub user: UserFilter,
    pub search_text: String,
}

/// Действия пользователя на панели фильтров
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Клик по имени пользователя
    SelectUser(UserId),
    /// Вкладка "All": сбрасывает и пользователя, и поиск
    ShowAllUsers,
    /// Ввод в поле поиска, текст сохраняется как есть
    SetSearchText(String),
    /// Кнопка очистки поиска
    ClearSearch,
    /// "Reset all filters"
    ResetAll,
}

impl FilterState {
    pub fn apply(self, action: FilterAction) -> Self {
        match action {
            FilterAction::SelectUser(id) => Self {
                user: UserFilter::User(id),
                ..self
            },
            FilterAction::ShowAllUsers | FilterAction::ResetAll => Self::default(),
            FilterAction::SetSearchText(search_text) => Self {
                search_text,
                ..self
            },
            FilterAction::ClearSearch => Self {
                search_text: String::new(),
                ..self
            },
        }
    }

    pub fn is_user_selected(&self, user: UserFilter) -> bool {
        self.user == user
    }

    /// Нужна ли кнопка очистки поиска
    pub fn has_search(&self) -> bool {
        !self.search_text.is_empty()
    }

    pub fn active_filters_count(&self) -> usize {
        let mut count = 0;
        if self.user != UserFilter::All {
            count += 1;
        }
        if self.has_search() {
            count += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(id: i64) -> FilterState {
        FilterState::default().apply(FilterAction::SelectUser(UserId::new(id)))
    }

    #[test]
    fn test_default_is_no_filters() {
        let state = FilterState::default();
        assert_eq!(state.user, UserFilter::All);
        assert_eq!(state.search_text, "");
        assert!(!state.has_search());
        assert_eq!(state.active_filters_count(), 0);
    }

    #[test]
    fn test_select_user_keeps_search() {
        let state = FilterState::default()
            .apply(FilterAction::SetSearchText("Mi".to_string()))
            .apply(FilterAction::SelectUser(UserId::new(2)));

        assert_eq!(state.user, UserFilter::User(UserId::new(2)));
        assert_eq!(state.search_text, "Mi");
        assert!(state.is_user_selected(UserFilter::User(UserId::new(2))));
        assert!(!state.is_user_selected(UserFilter::All));
        assert_eq!(state.active_filters_count(), 2);
    }

    #[test]
    fn test_search_text_is_stored_verbatim() {
        let state = selected(1).apply(FilterAction::SetSearchText("  Be ".to_string()));
        assert_eq!(state.search_text, "  Be ");
        assert_eq!(state.user, UserFilter::User(UserId::new(1)));
    }

    #[test]
    fn test_clear_search_keeps_user() {
        let state = selected(3)
            .apply(FilterAction::SetSearchText("x".to_string()))
            .apply(FilterAction::ClearSearch);

        assert!(!state.has_search());
        assert_eq!(state.user, UserFilter::User(UserId::new(3)));
    }

    #[test]
    fn test_show_all_users_also_clears_search() {
        let state = selected(3)
            .apply(FilterAction::SetSearchText("x".to_string()))
            .apply(FilterAction::ShowAllUsers);

        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_reset_all() {
        let state = selected(1)
            .apply(FilterAction::SetSearchText("milk".to_string()))
            .apply(FilterAction::ResetAll);

        assert_eq!(state, FilterState::default());
    }
}
