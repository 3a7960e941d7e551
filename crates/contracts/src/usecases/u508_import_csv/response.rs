use super::action::ImportAction;
use crate::shared::config::CsvImportConfig;
use serde::{Deserialize, Serialize};

/// Ответ эндпоинтов `process/<id>/` и `cancel/<id>/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportActionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub redirect_url: Option<String>,
}

impl ImportActionResponse {
    /// Текст уведомления об ошибке при `success: false`
    pub fn failure_text(&self) -> String {
        format!("Ошибка: {}", self.message)
    }
}

/// Что делать со страницей после успешного действия
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AfterSuccess {
    Navigate { url: String, delay_ms: u32 },
    Reload { delay_ms: u32 },
}

impl AfterSuccess {
    pub fn plan(
        action: ImportAction,
        response: &ImportActionResponse,
        config: &CsvImportConfig,
    ) -> Self {
        match action {
            ImportAction::Start => match response
                .redirect_url
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
            {
                Some(url) => AfterSuccess::Navigate {
                    url: url.to_string(),
                    delay_ms: config.redirect_delay_ms,
                },
                None => AfterSuccess::Reload {
                    delay_ms: config.reload_after_start_ms,
                },
            },
            ImportAction::Cancel => AfterSuccess::Reload {
                delay_ms: config.reload_after_cancel_ms,
            },
        }
    }

    pub fn delay_ms(&self) -> u32 {
        match self {
            AfterSuccess::Navigate { delay_ms, .. } | AfterSuccess::Reload { delay_ms } => {
                *delay_ms
            }
        }
    }
}
