use super::model;
use crate::shared::browser;
use contracts::domain::a025_category::{CategoryEditorState, EditTriggerAttributes, SaveOutcome};
use contracts::shared::CategoryEditorConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the category editor modal
#[derive(Clone, Copy)]
pub struct CategoryEditorViewModel {
    pub state: RwSignal<CategoryEditorState>,
    config: StoredValue<CategoryEditorConfig>,
}

impl CategoryEditorViewModel {
    pub fn new(config: CategoryEditorConfig) -> Self {
        Self {
            state: RwSignal::new(CategoryEditorState::default()),
            config: StoredValue::new(config),
        }
    }

    pub fn trigger_selector(&self) -> String {
        self.config.with_value(|c| c.edit_trigger_selector.clone())
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open())
    }

    /// Fill the form from an edit button, reload parents and show the modal
    pub fn open_for(&self, attrs: EditTriggerAttributes) {
        self.state.update(|s| s.open_for(attrs));
        self.load_parent_categories();
    }

    pub fn close(&self) {
        self.state.update(|s| s.close());
    }

    pub fn set_name(&self, name: String) {
        self.state.update(|s| s.form.name = name);
    }

    pub fn set_parent(&self, value: String) {
        self.state.update(|s| s.form.set_parent_value(&value));
    }

    pub fn load_parent_categories(&self) {
        let state = self.state;
        let config = self.config.get_value();
        state.update(|s| s.begin_parent_load());

        spawn_local(async move {
            match model::fetch_parent_options(&config).await {
                Ok(options) => {
                    log::debug!("Loaded {} parent categories", options.len());
                    state.update(|s| s.apply_parent_options(options));
                }
                Err(e) => {
                    log::error!("Ошибка загрузки категорий: {}", e);
                    state.update(|s| s.fail_parent_load(&e.message));
                }
            }
        });
    }

    /// Validate and submit; reloads the page on success
    pub fn save_command(&self) {
        let update = match self.state.with_untracked(|s| s.form.to_update()) {
            Ok(update) => update,
            Err(e) => {
                browser::alert(&e.to_string());
                return;
            }
        };

        log::debug!("Saving category: {:?}", update);
        let vm = *self;
        let config = self.config.get_value();
        spawn_local(async move {
            match model::save_category(&update, &config).await {
                Ok(SaveOutcome::Saved) => {
                    browser::alert(SaveOutcome::SAVED_MESSAGE);
                    vm.close();
                    browser::reload_page();
                }
                Ok(SaveOutcome::Rejected(message)) => {
                    browser::alert(&SaveOutcome::rejection_text(&message));
                }
                Err(e) => {
                    log::error!("Failed to save category {}: {}", update.id, e);
                    browser::alert(SaveOutcome::NETWORK_FAILURE_MESSAGE);
                }
            }
        });
    }
}
