//! u508: CSV import controls on the import files list.
//!
//! - api.rs: start/cancel requests
//! - controls.rs: per-button handlers and their dispatch table
//! - file_select.rs: client-side validation of the chosen file
//! - view.rs: upload link and file summary panel

mod api;
mod controls;
mod file_select;
mod view;

use crate::shared::browser;
use crate::shared::notifications::{NotificationHost, NotificationService};
use contracts::shared::CsvImportConfig;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u508_import_csv::{ImportAction, ImportCsv};
use controls::ControllerContext;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use view::UploadLink;

thread_local! {
    static CONTROLLER: RefCell<Option<ControllerContext>> = const { RefCell::new(None) };
}

/// Mount the notification host and wire everything the current page offers
pub fn mount(config: CsvImportConfig) {
    let config = Rc::new(config);
    leptos::mount::mount_to_body(move || {
        let ctx = ControllerContext {
            notifications: NotificationService::new(config.notification_ttl_ms),
            config: config.clone(),
        };

        inject_upload_link(&config);
        let bound = controls::bind_controls(&ctx);
        file_select::watch_file_input(&ctx);
        schedule_auto_refresh(&config);
        log::info!(
            "{} ({}) mounted, {} import controls bound: {}",
            ImportCsv::display_name(),
            ImportCsv::full_name(),
            bound,
            ImportCsv::description()
        );

        let notifications = ctx.notifications;
        CONTROLLER.with(|controller| *controller.borrow_mut() = Some(ctx));

        view! { <NotificationHost service=notifications /> }
    });
}

/// Bind start/cancel buttons added since the last call
pub fn rebind_controls() {
    let Some(ctx) = CONTROLLER.with(|controller| controller.borrow().clone()) else {
        log::debug!("Import controller is not mounted, nothing to rebind");
        return;
    };
    let bound = controls::bind_controls(&ctx);
    log::debug!("Import list re-rendered, {} new controls bound", bound);
}

fn inject_upload_link(config: &CsvImportConfig) {
    let Some(toolbar) = browser::query_html(&config.toolbar_selector) else {
        log::debug!("No {} on this page, upload link skipped", config.toolbar_selector);
        return;
    };
    let href = config.upload_href.clone();
    leptos::mount::mount_to(toolbar, move || view! { <UploadLink href=href /> }).forget();
}

/// Running imports have cancel buttons; reload once so their progress shows up.
fn schedule_auto_refresh(config: &CsvImportConfig) {
    if browser::query_all(&ImportAction::Cancel.selector()).is_empty() {
        return;
    }
    log::info!("Обнаружены активные импорты, включено автообновление");
    browser::after_delay(config.auto_refresh_ms, browser::reload_page);
}
