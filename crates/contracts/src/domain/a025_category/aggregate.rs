use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Состояние формы редактирования категории
///
/// Живёт только пока открыто модальное окно.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEditState {
    pub id: String,
    pub name: String,
    /// `None` означает основную (корневую) категорию
    pub parent_id: Option<String>,
}

impl CategoryEditState {
    /// Значение для `<select>`: пустая строка означает корень
    pub fn parent_value(&self) -> &str {
        self.parent_id.as_deref().unwrap_or("")
    }

    pub fn set_parent_value(&mut self, value: &str) {
        let value = value.trim();
        self.parent_id = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }

    /// Проверка обязательных полей и подготовка данных к отправке
    pub fn to_update(&self) -> Result<CategoryUpdate, CategoryFormError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(CategoryFormError::MissingId);
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CategoryFormError::EmptyName);
        }
        Ok(CategoryUpdate {
            id: id.to_string(),
            name: name.to_string(),
            parent: self.parent_value().to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CategoryFormError {
    #[error("Не удалось определить категорию для редактирования")]
    MissingId,
    #[error("Пожалуйста, введите название категории")]
    EmptyName,
}

/// Поля multipart-запроса на обновление категории
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub id: String,
    pub name: String,
    /// Пустая строка, если родителя нет
    pub parent: String,
}

impl CategoryUpdate {
    pub fn form_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("id", self.id.as_str()),
            ("name", self.name.as_str()),
            ("parent", self.parent.as_str()),
        ]
    }
}

/// Вариант для выбора родительской категории
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentCategoryOption {
    pub id: String,
    pub display_name: String,
}

/// Ответ эндпоинта обновления категории
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCategoryResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Rejected(String),
}

impl SaveOutcome {
    pub const SAVED_MESSAGE: &'static str = "Категория успешно обновлена!";
    pub const NETWORK_FAILURE_MESSAGE: &'static str = "Произошла ошибка при сохранении";

    /// Текст для пользователя при отказе сервера
    pub fn rejection_text(message: &str) -> String {
        format!("Ошибка: {}", message)
    }
}

impl From<UpdateCategoryResponse> for SaveOutcome {
    fn from(response: UpdateCategoryResponse) -> Self {
        if response.success {
            SaveOutcome::Saved
        } else {
            SaveOutcome::Rejected(
                response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| "неизвестная ошибка".to_string()),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(id: &str, name: &str, parent: Option<&str>) -> CategoryEditState {
        CategoryEditState {
            id: id.to_string(),
            name: name.to_string(),
            parent_id: parent.map(str::to_string),
        }
    }

    #[test]
    fn test_update_trims_name_and_maps_root_parent() {
        let update = state("7", "  Shoes ", None).to_update().unwrap();
        assert_eq!(update.id, "7");
        assert_eq!(update.name, "Shoes");
        assert_eq!(update.parent, "");
        assert_eq!(
            update.form_fields(),
            [("id", "7"), ("name", "Shoes"), ("parent", "")]
        );
    }

    #[test]
    fn test_whitespace_name_is_rejected() {
        assert_eq!(
            state("7", "   ", None).to_update(),
            Err(CategoryFormError::EmptyName)
        );
        assert_eq!(
            CategoryFormError::EmptyName.to_string(),
            "Пожалуйста, введите название категории"
        );
    }

    #[test]
    fn test_missing_id_is_rejected_before_name() {
        assert_eq!(
            state("", "", None).to_update(),
            Err(CategoryFormError::MissingId)
        );
    }

    #[test]
    fn test_parent_value_round_trip_through_select() {
        let mut form = state("7", "Shoes", Some("3"));
        assert_eq!(form.parent_value(), "3");
        form.set_parent_value("");
        assert_eq!(form.parent_id, None);
        form.set_parent_value("12");
        assert_eq!(form.parent_id.as_deref(), Some("12"));
    }

    #[test]
    fn test_save_outcome_from_response() {
        let ok: UpdateCategoryResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(SaveOutcome::from(ok), SaveOutcome::Saved);

        let failed: UpdateCategoryResponse =
            serde_json::from_str(r#"{"success": false, "message": "X"}"#).unwrap();
        let outcome = SaveOutcome::from(failed);
        assert_eq!(outcome, SaveOutcome::Rejected("X".to_string()));
        if let SaveOutcome::Rejected(msg) = outcome {
            assert_eq!(SaveOutcome::rejection_text(&msg), "Ошибка: X");
        }
    }

    #[test]
    fn test_rejection_without_message_has_fallback_text() {
        let failed: UpdateCategoryResponse =
            serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(
            SaveOutcome::from(failed),
            SaveOutcome::Rejected("неизвестная ошибка".to_string())
        );
    }
}
