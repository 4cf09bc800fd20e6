#[cfg(any(target_arch = "wasm32", test))]
mod error;
#[cfg(target_arch = "wasm32")]
mod wasm_constants;
#[cfg(any(target_arch = "wasm32", test))]
mod wasm_state;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use admin_forms_core::{
        AttachedBehaviors, ControlLookup, FormBehaviorConfig, FormControl, RowOpacity,
        attach_form_behaviors,
    };
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, Element, Event, EventInit, EventTarget, HtmlElement,
        HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    };

    use crate::error::ShellError;
    use crate::wasm_constants::*;
    use crate::wasm_state::{ShellDiagnostics, ShellPhase};

    mod dom;
    mod lifecycle;

    use dom::{DomControl, DomLookup};
    use lifecycle::*;

    thread_local! {
        static DIAGNOSTICS: RefCell<ShellDiagnostics> = RefCell::new(ShellDiagnostics::default());
        static BEHAVIORS: RefCell<Option<Rc<AttachedBehaviors<DomControl>>>> = const { RefCell::new(None) };
        static DOM_READY_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static SELECTOR_CHANGE_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static FIELD_INPUT_HANDLERS: RefCell<Vec<Closure<dyn FnMut(web_sys::Event)>>> = RefCell::new(Vec::new());
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        set_shell_phase(ShellPhase::Booting, "initializing admin form behaviors");
        if let Err(error) = boot() {
            record_shell_error(&error);
        }
    }

    #[wasm_bindgen]
    pub fn form_diagnostics_json() -> String {
        DIAGNOSTICS.with(|state| state.borrow().to_json())
    }

    /// Re-applies the mask to every bound field, e.g. after the admin
    /// framework fills a field without firing `input`.
    #[wasm_bindgen]
    pub fn remask_all() -> usize {
        let behaviors = BEHAVIORS.with(|slot| slot.borrow().clone());
        behaviors.map_or(0, |behaviors| behaviors.remask_all())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::form_diagnostics_json;

#[cfg(not(target_arch = "wasm32"))]
pub fn form_diagnostics_json() -> String {
    "{\"phase\":\"native\",\"detail\":\"admin form behaviors only attach on wasm\"}".to_string()
}
