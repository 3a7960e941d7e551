use super::controls::ControllerContext;
use super::view::FileInfoPanel;
use crate::shared::browser;
use contracts::usecases::u508_import_csv::file_check::FILE_ACCEPTED_MESSAGE;
use contracts::usecases::u508_import_csv::{check_file, FileCandidate, FileInfo};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlInputElement};

/// Validate the CSV file input on change and show the file summary next to it
pub fn watch_file_input(ctx: &ControllerContext) {
    let input_id = ctx.config.file_input_id.clone();
    let Some(input) = browser::document()
        .and_then(|d| d.get_element_by_id(&input_id))
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        log::debug!("No #{} on this page, file validation disabled", input_id);
        return;
    };

    let file_info = RwSignal::new(None::<FileInfo>);
    if let Some(parent) = input
        .parent_element()
        .and_then(|p| p.dyn_into::<HtmlElement>().ok())
    {
        let panel = move || view! { <FileInfoPanel info=file_info /> };
        leptos::mount::mount_to(parent, panel).forget();
    }

    let ctx = ctx.clone();
    let source = input.clone();
    let on_change = Closure::wrap(Box::new(move |_: Event| {
        let Some(file) = source.files().and_then(|files| files.get(0)) else {
            return;
        };
        let candidate = FileCandidate {
            name: file.name(),
            size: file.size() as u64,
            mime: file.type_(),
        };

        match check_file(candidate, &ctx.config) {
            Ok(info) => {
                log::debug!("Selected {} ({})", info.name, info.size_label());
                file_info.set(Some(info));
                ctx.notifications.success(FILE_ACCEPTED_MESSAGE);
            }
            Err(rejection) => {
                log::warn!("File rejected: {}", rejection);
                source.set_value("");
                file_info.set(None);
                ctx.notifications.error(rejection.to_string());
            }
        }
    }) as Box<dyn FnMut(Event)>);

    let _ = input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
    on_change.forget();
}
