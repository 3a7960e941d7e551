use serde::{Deserialize, Serialize};

/// Действие над заданием импорта, привязанное к кнопке в списке файлов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportAction {
    Start,
    Cancel,
}

impl ImportAction {
    pub const ALL: [ImportAction; 2] = [ImportAction::Start, ImportAction::Cancel];

    /// CSS-класс кнопки, которая запускает действие
    pub fn css_class(self) -> &'static str {
        match self {
            ImportAction::Start => "btn-import-csv",
            ImportAction::Cancel => "btn-cancel-import",
        }
    }

    pub fn selector(self) -> String {
        format!(".{}", self.css_class())
    }

    /// Первый сегмент пути эндпоинта (`process/<id>/`, `cancel/<id>/`)
    pub fn path_segment(self) -> &'static str {
        match self {
            ImportAction::Start => "process",
            ImportAction::Cancel => "cancel",
        }
    }

    pub fn confirm_prompt(self) -> &'static str {
        match self {
            ImportAction::Start => "Запустить импорт данных из этого файла?",
            ImportAction::Cancel => "Отменить импорт? Процесс будет остановлен.",
        }
    }

    pub fn network_failure_message(self) -> &'static str {
        match self {
            ImportAction::Start => "Произошла ошибка при запуске импорта",
            ImportAction::Cancel => "Произошла ошибка при отмене импорта",
        }
    }

    pub fn from_class_list<'a, I>(classes: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        classes
            .into_iter()
            .find_map(|class| Self::ALL.into_iter().find(|a| a.css_class() == class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_class_list() {
        assert_eq!(
            ImportAction::from_class_list("button btn-import-csv".split_whitespace()),
            Some(ImportAction::Start)
        );
        assert_eq!(
            ImportAction::from_class_list(["btn-cancel-import"]),
            Some(ImportAction::Cancel)
        );
        assert_eq!(ImportAction::from_class_list(["addlink"]), None);
    }

    #[test]
    fn test_selectors_are_distinct() {
        assert_eq!(ImportAction::Start.selector(), ".btn-import-csv");
        assert_ne!(
            ImportAction::Start.path_segment(),
            ImportAction::Cancel.path_segment()
        );
    }
}
