use super::*;

pub(super) fn boot() -> Result<(), ShellError> {
    let window = web_sys::window().ok_or(ShellError::WindowUnavailable)?;
    let document = window.document().ok_or(ShellError::DocumentUnavailable)?;

    if document.ready_state() == "loading" {
        set_shell_phase(ShellPhase::WaitingForDom, "document still loading");
        return install_dom_ready_handler(&document);
    }
    attach(document)
}

fn install_dom_ready_handler(document: &Document) -> Result<(), ShellError> {
    DOM_READY_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return Ok(());
        }
        let ready_document = document.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            if let Err(error) = attach(ready_document.clone()) {
                record_shell_error(&error);
            }
        }));
        document
            .add_event_listener_with_callback(DOM_READY_EVENT, callback.as_ref().unchecked_ref())
            .map_err(|_| ShellError::Listener {
                event: DOM_READY_EVENT,
                target: "document".to_string(),
            })?;
        *slot.borrow_mut() = Some(callback);
        Ok(())
    })
}

pub(super) fn attach(document: Document) -> Result<(), ShellError> {
    if BEHAVIORS.with(|slot| slot.borrow().is_some()) {
        return Ok(());
    }

    let config = FormBehaviorConfig::default();
    let lookup = DomLookup::new(document, &config.gate.row_class);
    let behaviors = Rc::new(attach_form_behaviors(&config, &lookup)?);

    // Masked fields are already text inputs at this point; they need their
    // listeners and a stored handle whatever happens to the selector.
    install_field_input_handlers(&behaviors);
    BEHAVIORS.with(|slot| {
        *slot.borrow_mut() = Some(Rc::clone(&behaviors));
    });
    DIAGNOSTICS.with(|state| state.borrow_mut().record_attach(behaviors.report().clone()));

    if let Err(error) = install_selector_change_handler(&behaviors) {
        tracing::warn!(%error, "selector listener missing; gate keeps its initial state");
        DIAGNOSTICS.with(|state| state.borrow_mut().record_listener_failure());
    }

    DIAGNOSTICS.with(|state| state.borrow_mut().finish_attach());
    Ok(())
}

fn install_selector_change_handler(
    behaviors: &Rc<AttachedBehaviors<DomControl>>,
) -> Result<(), ShellError> {
    let Some(selector) = behaviors.gate().selector() else {
        return Ok(());
    };

    SELECTOR_CHANGE_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return Ok(());
        }
        let handler_behaviors = Rc::clone(behaviors);
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            let decision = handler_behaviors.on_selector_change();
            DIAGNOSTICS.with(|state| state.borrow_mut().record_selector_change(decision));
        }));
        selector
            .event_target()
            .add_event_listener_with_callback(
                SELECTOR_CHANGE_EVENT,
                callback.as_ref().unchecked_ref(),
            )
            .map_err(|_| ShellError::Listener {
                event: SELECTOR_CHANGE_EVENT,
                target: selector.id().to_string(),
            })?;
        *slot.borrow_mut() = Some(callback);
        Ok(())
    })
}

fn install_field_input_handlers(behaviors: &Rc<AttachedBehaviors<DomControl>>) {
    FIELD_INPUT_HANDLERS.with(|slot| {
        let mut handlers = slot.borrow_mut();
        if !handlers.is_empty() {
            return;
        }
        for field in behaviors.masked_fields() {
            let handler_behaviors = Rc::clone(behaviors);
            let id = field.id.clone();
            let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
                let rewritten = handler_behaviors.on_field_input(&id).unwrap_or(false);
                DIAGNOSTICS.with(|state| state.borrow_mut().record_field_input(rewritten));
            }));
            let registered = field
                .control
                .event_target()
                .add_event_listener_with_callback(
                    FIELD_INPUT_EVENT,
                    callback.as_ref().unchecked_ref(),
                );
            if registered.is_err() {
                tracing::warn!(id = %field.id, "failed to register input listener");
                DIAGNOSTICS.with(|state| state.borrow_mut().record_listener_failure());
                continue;
            }
            handlers.push(callback);
        }
    });
}

pub(super) fn set_shell_phase(phase: ShellPhase, detail: &str) {
    tracing::debug!(?phase, detail, "admin form shell phase");
    DIAGNOSTICS.with(|state| state.borrow_mut().set_phase(phase, detail));
}

pub(super) fn record_shell_error(error: &ShellError) {
    let message = error.to_string();
    tracing::warn!(error = %message, "admin form behaviors failed to attach");
    DIAGNOSTICS.with(|state| state.borrow_mut().set_error(&message));
}
