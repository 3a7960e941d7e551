//! Category Editor UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (parent listing, save)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)
//! - triggers.rs: binding of server-rendered edit buttons

mod model;
mod triggers;
mod view;
mod view_model;

pub use view::CategoryEditor;
pub use view_model::CategoryEditorViewModel;

use contracts::shared::CategoryEditorConfig;
use leptos::prelude::*;
use std::cell::RefCell;

thread_local! {
    static EDITOR: RefCell<Option<CategoryEditorViewModel>> = const { RefCell::new(None) };
}

/// Mount the editor modal to `<body>` and bind the edit buttons present on the page
pub fn mount(config: CategoryEditorConfig) {
    leptos::mount::mount_to_body(move || {
        let vm = CategoryEditorViewModel::new(config);
        let bound = triggers::bind_edit_triggers(vm);
        log::info!("Category editor mounted, {} edit triggers bound", bound);
        EDITOR.with(|editor| *editor.borrow_mut() = Some(vm));

        view! { <CategoryEditor vm=vm /> }
    });
}

/// Bind edit buttons added since the last call
pub fn rebind_triggers() {
    let Some(vm) = EDITOR.with(|editor| *editor.borrow()) else {
        log::debug!("Category editor is not mounted, nothing to rebind");
        return;
    };
    let bound = triggers::bind_edit_triggers(vm);
    log::debug!("Category list re-rendered, {} new edit triggers bound", bound);
}
