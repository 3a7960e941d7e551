use super::view_model::CategoryEditorViewModel;
use crate::shared::browser::{self, attribute};
use contracts::domain::a025_category::EditTriggerAttributes;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// Marks a button that already has a click handler
const BOUND_ATTR: &str = "data-category-editor-bound";

/// Attach the editor to every not-yet-bound edit button; returns how many were bound
pub fn bind_edit_triggers(vm: CategoryEditorViewModel) -> usize {
    let mut bound = 0;
    for trigger in browser::query_all(&vm.trigger_selector()) {
        if trigger.has_attribute(BOUND_ATTR) {
            continue;
        }

        let source = trigger.clone();
        let on_click = Closure::wrap(Box::new(move |ev: MouseEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            let attrs = read_attributes(&source);
            log::debug!("Edit category: {:?}", attrs);
            vm.open_for(attrs);
        }) as Box<dyn FnMut(MouseEvent)>);

        if trigger
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .is_ok()
        {
            let _ = trigger.set_attribute(BOUND_ATTR, "true");
            bound += 1;
        }
        // The listener lives as long as the button does.
        on_click.forget();
    }
    bound
}

fn read_attributes(trigger: &Element) -> EditTriggerAttributes {
    EditTriggerAttributes {
        id: attribute(trigger, "data-id"),
        name: trigger.get_attribute("data-name"),
        parent: attribute(trigger, "data-parent"),
    }
}
