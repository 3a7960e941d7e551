use super::aggregate::{CategoryEditState, CategoryFormError, ParentCategoryOption};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// `data-*` атрибуты кнопки редактирования
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTriggerAttributes {
    pub id: Option<String>,
    pub name: Option<String>,
    pub parent: Option<String>,
}

/// Состояние модального окна редактора категории
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryEditorState {
    pub modal: ModalState,
    pub form: CategoryEditState,
    pub parent_options: Vec<ParentCategoryOption>,
    pub loading_parents: bool,
    pub error: Option<String>,
}

impl CategoryEditorState {
    pub fn is_open(&self) -> bool {
        self.modal == ModalState::Open
    }

    /// Заполнить форму из атрибутов кнопки и открыть окно
    pub fn open_for(&mut self, attrs: EditTriggerAttributes) {
        let mut form = CategoryEditState {
            id: attrs.id.unwrap_or_default(),
            name: attrs.name.unwrap_or_default(),
            parent_id: None,
        };
        form.set_parent_value(attrs.parent.as_deref().unwrap_or(""));

        self.error = if form.id.trim().is_empty() {
            Some(CategoryFormError::MissingId.to_string())
        } else {
            None
        };
        self.form = form;
        self.modal = ModalState::Open;
    }

    /// Закрыть окно и сбросить форму
    pub fn close(&mut self) {
        self.modal = ModalState::Closed;
        self.form = CategoryEditState::default();
        self.error = None;
        self.loading_parents = false;
    }

    pub fn begin_parent_load(&mut self) {
        self.loading_parents = true;
    }

    /// Подставить загруженный список родителей.
    ///
    /// Выбранный родитель, которого нет среди категорий верхнего уровня,
    /// сбрасывается в корень.
    pub fn apply_parent_options(&mut self, options: Vec<ParentCategoryOption>) {
        self.loading_parents = false;
        if let Some(parent) = &self.form.parent_id {
            if !options.iter().any(|o| &o.id == parent) {
                self.form.parent_id = None;
            }
        }
        self.parent_options = options;
    }

    pub fn fail_parent_load(&mut self, message: &str) {
        self.loading_parents = false;
        self.error = Some(format!("Ошибка загрузки категорий: {}", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(id: Option<&str>, name: &str, parent: &str) -> EditTriggerAttributes {
        EditTriggerAttributes {
            id: id.map(str::to_string),
            name: Some(name.to_string()),
            parent: Some(parent.to_string()),
        }
    }

    fn option(id: &str, name: &str) -> ParentCategoryOption {
        ParentCategoryOption {
            id: id.to_string(),
            display_name: name.to_string(),
        }
    }

    #[test]
    fn test_edit_trigger_populates_form_and_opens() {
        let mut state = CategoryEditorState::default();
        state.open_for(attrs(Some("7"), "Shoes", ""));

        assert!(state.is_open());
        assert_eq!(
            state.form,
            CategoryEditState {
                id: "7".to_string(),
                name: "Shoes".to_string(),
                parent_id: None,
            }
        );
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_missing_id_opens_with_visible_error() {
        let mut state = CategoryEditorState::default();
        state.open_for(attrs(None, "Shoes", ""));

        assert!(state.is_open());
        assert!(state.error.is_some());
        assert_eq!(state.form.to_update(), Err(CategoryFormError::MissingId));
    }

    #[test]
    fn test_close_resets_form() {
        let mut state = CategoryEditorState::default();
        state.open_for(attrs(Some("7"), "Shoes", "3"));
        state.close();

        assert_eq!(state.modal, ModalState::Closed);
        assert_eq!(state.form, CategoryEditState::default());
    }

    #[test]
    fn test_known_parent_survives_reload() {
        let mut state = CategoryEditorState::default();
        state.open_for(attrs(Some("7"), "Shoes", "3"));
        state.begin_parent_load();
        state.apply_parent_options(vec![option("1", "Одежда"), option("3", "Обувь")]);

        assert!(!state.loading_parents);
        assert_eq!(state.form.parent_id.as_deref(), Some("3"));
        assert_eq!(state.parent_options.len(), 2);
    }

    #[test]
    fn test_unknown_parent_falls_back_to_root() {
        let mut state = CategoryEditorState::default();
        state.open_for(attrs(Some("7"), "Shoes", "42"));
        state.apply_parent_options(vec![option("1", "Одежда")]);

        assert_eq!(state.form.parent_id, None);
    }

    #[test]
    fn test_load_failure_is_visible_and_keeps_options() {
        let mut state = CategoryEditorState::default();
        state.apply_parent_options(vec![option("1", "Одежда")]);
        state.open_for(attrs(Some("7"), "Shoes", ""));
        state.begin_parent_load();
        state.fail_parent_load("HTTP 500");

        assert!(!state.loading_parents);
        assert_eq!(
            state.error.as_deref(),
            Some("Ошибка загрузки категорий: HTTP 500")
        );
        assert_eq!(state.parent_options.len(), 1);
    }
}
