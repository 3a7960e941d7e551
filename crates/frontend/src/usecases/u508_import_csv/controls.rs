use super::api;
use crate::shared::browser::{self, attribute};
use crate::shared::notifications::NotificationService;
use contracts::shared::CsvImportConfig;
use contracts::usecases::u508_import_csv::{
    AfterSuccess, ControlState, ImportAction, ImportFileStatus,
};
use leptos::task::spawn_local;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

const BOUND_ATTR: &str = "data-import-control-bound";

/// Shared dependencies of every control handler
#[derive(Clone)]
pub struct ControllerContext {
    pub notifications: NotificationService,
    pub config: Rc<CsvImportConfig>,
}

/// A start or cancel button bound to one import file
#[derive(Clone)]
pub struct ImportControl {
    element: HtmlElement,
    file_id: String,
    action: ImportAction,
    state: Rc<Cell<ControlState>>,
}

impl ImportControl {
    fn from_element(element: HtmlElement, action: ImportAction) -> Option<Self> {
        let Some(file_id) = attribute(&element, "data-id") else {
            log::warn!("Import control .{} has no data-id, skipped", action.css_class());
            return None;
        };
        let status = attribute(&element, "data-status").and_then(|s| ImportFileStatus::parse(&s));
        Some(Self {
            element,
            file_id,
            action,
            state: Rc::new(Cell::new(ControlState::initial(action, status))),
        })
    }

    fn transition(&self, next: ControlState) {
        self.state.set(next);
        let look = next.appearance(self.action);
        self.element.set_text_content(Some(look.label));
        let _ = self.element.style().set_property("background", look.background);
        let _ = if look.disabled {
            self.element.set_attribute("disabled", "")
        } else {
            self.element.remove_attribute("disabled")
        };
    }
}

type ActionHandler = fn(ImportControl, ControllerContext);

const DISPATCH: [(ImportAction, ActionHandler); 2] = [
    (ImportAction::Start, start_import as ActionHandler),
    (ImportAction::Cancel, cancel_import as ActionHandler),
];

fn handler_for(action: ImportAction) -> Option<ActionHandler> {
    DISPATCH
        .iter()
        .find(|(kind, _)| *kind == action)
        .map(|(_, handler)| *handler)
}

fn start_import(control: ImportControl, ctx: ControllerContext) {
    log::debug!("Start requested for import file {}", control.file_id);
    submit(control, ctx);
}

// Cancellation is only requested; the server decides whether the job can stop.
fn cancel_import(control: ImportControl, ctx: ControllerContext) {
    log::debug!("Cancel requested for import file {}", control.file_id);
    submit(control, ctx);
}

fn submit(control: ImportControl, ctx: ControllerContext) {
    let action = control.action;
    let pending = match control.state.get().begin(action) {
        Ok(state) => state,
        Err(e) => {
            log::debug!("Ignoring click on file {}: {}", control.file_id, e);
            return;
        }
    };
    if !browser::confirm(action.confirm_prompt()) {
        return;
    }
    control.transition(pending);

    spawn_local(async move {
        match api::post_action(action, &control.file_id).await {
            Ok(response) if response.success => {
                ctx.notifications.success(response.message.clone());
                control.transition(pending.settle(true));
                follow_up(AfterSuccess::plan(action, &response, &ctx.config));
            }
            Ok(response) => {
                ctx.notifications.error(response.failure_text());
                control.transition(pending.settle(false));
            }
            Err(e) => {
                log::error!("{:?} import for file {} failed: {}", action, control.file_id, e);
                ctx.notifications.error(action.network_failure_message());
                control.transition(pending.settle(false));
            }
        }
    });
}

fn follow_up(plan: AfterSuccess) {
    match plan {
        AfterSuccess::Navigate { url, delay_ms } => {
            browser::after_delay(delay_ms, move || browser::navigate_to(&url));
        }
        AfterSuccess::Reload { delay_ms } => browser::after_delay(delay_ms, browser::reload_page),
    }
}

fn control_selector() -> String {
    ImportAction::ALL
        .iter()
        .map(|action| action.selector())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Register a typed handler on every new start/cancel button; returns how many were bound
pub fn bind_controls(ctx: &ControllerContext) -> usize {
    let mut bound = 0;
    for element in browser::query_all(&control_selector()) {
        if element.has_attribute(BOUND_ATTR) {
            continue;
        }
        let class_name = element.class_name();
        let Some(action) = ImportAction::from_class_list(class_name.split_whitespace()) else {
            continue;
        };
        let Some(handler) = handler_for(action) else {
            continue;
        };
        let Ok(element) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        let Some(control) = ImportControl::from_element(element.clone(), action) else {
            continue;
        };
        let initial = control.state.get();
        if initial.differs_from_markup(action) {
            control.transition(initial);
        }

        let ctx = ctx.clone();
        let on_click = Closure::wrap(Box::new(move |ev: MouseEvent| {
            ev.prevent_default();
            handler(control.clone(), ctx.clone());
        }) as Box<dyn FnMut(MouseEvent)>);

        if element
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .is_ok()
        {
            let _ = element.set_attribute(BOUND_ATTR, "true");
            bound += 1;
        }
        on_click.forget();
    }
    bound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_action_has_a_handler() {
        for action in ImportAction::ALL {
            assert!(handler_for(action).is_some(), "no handler for {:?}", action);
        }
    }

    #[test]
    fn test_control_selector_matches_both_buttons() {
        assert_eq!(control_selector(), ".btn-import-csv, .btn-cancel-import");
    }

    #[test]
    fn test_dispatch_keys_are_unique() {
        assert_ne!(DISPATCH[0].0, DISPATCH[1].0);
    }
}
