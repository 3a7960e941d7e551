//! Состояние кнопки управления импортом.
//!
//! Кнопка запуска: `Idle -> Starting -> (Finished | Idle)`.
//! Кнопка отмены: `Running -> Cancelling -> (Finished | Running)`.
//! `Finished` означает, что страница будет перезагружена.

use super::action::ImportAction;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Статус файла импорта на сервере (атрибут `data-status`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportFileStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Cancelled,
}

impl ImportFileStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "processing" => Some(Self::Processing),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Idle,
    Starting,
    Running,
    Cancelling,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("действие {action:?} недопустимо в состоянии {state:?}")]
pub struct TransitionError {
    pub state: ControlState,
    pub action: ImportAction,
}

/// Как кнопка выглядит в данном состоянии
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlAppearance {
    pub label: &'static str,
    pub background: &'static str,
    pub disabled: bool,
}

const BUSY_BACKGROUND: &str = "#999";

impl ControlState {
    /// Начальное состояние кнопки по её действию и статусу файла
    pub fn initial(action: ImportAction, status: Option<ImportFileStatus>) -> Self {
        match action {
            ImportAction::Cancel => ControlState::Running,
            ImportAction::Start if status == Some(ImportFileStatus::Processing) => {
                ControlState::Running
            }
            ImportAction::Start => ControlState::Idle,
        }
    }

    pub fn begin(self, action: ImportAction) -> Result<Self, TransitionError> {
        match (self, action) {
            (ControlState::Idle, ImportAction::Start) => Ok(ControlState::Starting),
            (ControlState::Running, ImportAction::Cancel) => Ok(ControlState::Cancelling),
            (state, action) => Err(TransitionError { state, action }),
        }
    }

    /// Применить результат запроса; неуспех возвращает кнопку в прежнее состояние
    pub fn settle(self, succeeded: bool) -> Self {
        match (self, succeeded) {
            (ControlState::Starting | ControlState::Cancelling, true) => ControlState::Finished,
            (ControlState::Starting, false) => ControlState::Idle,
            (ControlState::Cancelling, false) => ControlState::Running,
            (state, _) => state,
        }
    }

    /// Состояние, которому соответствует серверная разметка кнопки
    pub fn rendered_by_server(action: ImportAction) -> Self {
        match action {
            ImportAction::Start => ControlState::Idle,
            ImportAction::Cancel => ControlState::Running,
        }
    }

    /// Нужно ли перерисовать кнопку сразу после привязки
    pub fn differs_from_markup(self, action: ImportAction) -> bool {
        self != Self::rendered_by_server(action)
    }

    /// Внешний вид кнопки действия `action` в этом состоянии
    pub fn appearance(self, action: ImportAction) -> ControlAppearance {
        match (self, action) {
            (ControlState::Starting, _) | (ControlState::Finished, ImportAction::Start) => {
                ControlAppearance {
                    label: "⏳ Запускаю...",
                    background: BUSY_BACKGROUND,
                    disabled: true,
                }
            }
            (ControlState::Cancelling, _) | (ControlState::Finished, ImportAction::Cancel) => {
                ControlAppearance {
                    label: "⏳ Отменяю...",
                    background: BUSY_BACKGROUND,
                    disabled: true,
                }
            }
            (ControlState::Running, ImportAction::Start) => ControlAppearance {
                label: "⏳ Импорт выполняется",
                background: BUSY_BACKGROUND,
                disabled: true,
            },
            (_, ImportAction::Start) => ControlAppearance {
                label: "▶ Запустить импорт",
                background: "#417690",
                disabled: false,
            },
            (_, ImportAction::Cancel) => ControlAppearance {
                label: "⏹ Отменить",
                background: "#dc3545",
                disabled: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_failure_restores_actionable_control() {
        let state = ControlState::initial(ImportAction::Start, None);
        let pending = state.begin(ImportAction::Start).unwrap();
        assert!(pending.appearance(ImportAction::Start).disabled);

        let restored = pending.settle(false);
        assert_eq!(restored, ControlState::Idle);
        let look = restored.appearance(ImportAction::Start);
        assert_eq!(look.label, "▶ Запустить импорт");
        assert_eq!(look.background, "#417690");
        assert!(!look.disabled);
    }

    #[test]
    fn test_cancel_failure_returns_to_running() {
        let state = ControlState::initial(ImportAction::Cancel, None);
        assert_eq!(state, ControlState::Running);

        let pending = state.begin(ImportAction::Cancel).unwrap();
        assert_eq!(pending.appearance(ImportAction::Cancel).label, "⏳ Отменяю...");

        let restored = pending.settle(false);
        assert_eq!(restored, ControlState::Running);
        let look = restored.appearance(ImportAction::Cancel);
        assert_eq!(look.label, "⏹ Отменить");
        assert_eq!(look.background, "#dc3545");
    }

    #[test]
    fn test_success_is_terminal() {
        let done = ControlState::Idle
            .begin(ImportAction::Start)
            .unwrap()
            .settle(true);
        assert_eq!(done, ControlState::Finished);
        assert!(done.appearance(ImportAction::Start).disabled);
        assert!(done.begin(ImportAction::Start).is_err());
    }

    #[test]
    fn test_busy_control_rejects_second_click() {
        let pending = ControlState::Idle.begin(ImportAction::Start).unwrap();
        assert_eq!(
            pending.begin(ImportAction::Start),
            Err(TransitionError {
                state: ControlState::Starting,
                action: ImportAction::Start,
            })
        );
    }

    #[test]
    fn test_processing_file_blocks_start() {
        let status = ImportFileStatus::parse("Processing");
        let state = ControlState::initial(ImportAction::Start, status);
        assert_eq!(state, ControlState::Running);
        assert!(state.begin(ImportAction::Start).is_err());
        assert_eq!(ImportFileStatus::parse("unknown"), None);
    }

    #[test]
    fn test_processing_start_control_is_redrawn_disabled_on_bind() {
        let state = ControlState::initial(ImportAction::Start, Some(ImportFileStatus::Processing));
        assert!(state.differs_from_markup(ImportAction::Start));

        let look = state.appearance(ImportAction::Start);
        assert_eq!(look.label, "⏳ Импорт выполняется");
        assert_eq!(look.background, "#999");
        assert!(look.disabled);
    }

    #[test]
    fn test_plain_controls_keep_server_markup() {
        for status in [None, Some(ImportFileStatus::Pending), Some(ImportFileStatus::Failed)] {
            let state = ControlState::initial(ImportAction::Start, status);
            assert!(!state.differs_from_markup(ImportAction::Start));
        }
        let cancel = ControlState::initial(ImportAction::Cancel, None);
        assert!(!cancel.differs_from_markup(ImportAction::Cancel));
    }
}
