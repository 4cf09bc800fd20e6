use super::*;

#[derive(Debug, Clone)]
pub(super) enum DomElement {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
}

/// A form element on the admin page plus the selector of the row wrapping it.
#[derive(Debug, Clone)]
pub(super) struct DomControl {
    id: String,
    element: DomElement,
    row_selector: Rc<str>,
}

impl DomControl {
    pub(super) fn id(&self) -> &str {
        &self.id
    }

    pub(super) fn event_target(&self) -> &EventTarget {
        match &self.element {
            DomElement::Input(input) => AsRef::<EventTarget>::as_ref(input),
            DomElement::Select(select) => AsRef::<EventTarget>::as_ref(select),
            DomElement::TextArea(textarea) => AsRef::<EventTarget>::as_ref(textarea),
        }
    }

    fn as_element(&self) -> &Element {
        match &self.element {
            DomElement::Input(input) => AsRef::<Element>::as_ref(input),
            DomElement::Select(select) => AsRef::<Element>::as_ref(select),
            DomElement::TextArea(textarea) => AsRef::<Element>::as_ref(textarea),
        }
    }

    fn row(&self) -> Option<HtmlElement> {
        self.as_element()
            .closest(&self.row_selector)
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl FormControl for DomControl {
    fn value(&self) -> String {
        match &self.element {
            DomElement::Input(input) => input.value(),
            DomElement::Select(select) => select.value(),
            DomElement::TextArea(textarea) => textarea.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match &self.element {
            DomElement::Input(input) => input.set_value(value),
            DomElement::Select(select) => select.set_value(value),
            DomElement::TextArea(textarea) => textarea.set_value(value),
        }
    }

    fn clear_value(&self) {
        match &self.element {
            DomElement::Input(input) => input.set_value(""),
            // No option selected at all, not the blank placeholder option.
            DomElement::Select(select) => select.set_selected_index(-1),
            DomElement::TextArea(textarea) => textarea.set_value(""),
        }
    }

    fn set_disabled(&self, disabled: bool) {
        match &self.element {
            DomElement::Input(input) => input.set_disabled(disabled),
            DomElement::Select(select) => select.set_disabled(disabled),
            DomElement::TextArea(textarea) => textarea.set_disabled(disabled),
        }
    }

    fn set_read_only(&self, read_only: bool) {
        match &self.element {
            DomElement::Input(input) => input.set_read_only(read_only),
            DomElement::TextArea(textarea) => textarea.set_read_only(read_only),
            // Selects have no read-only state.
            DomElement::Select(_) => {}
        }
    }

    fn set_row_opacity(&self, opacity: RowOpacity) {
        let Some(row) = self.row() else {
            return;
        };
        let _ = row
            .style()
            .set_property(ROW_OPACITY_PROPERTY, opacity.css_value());
    }

    fn dispatch_change(&self) {
        let init = EventInit::new();
        init.set_bubbles(true);
        let Ok(event) = Event::new_with_event_init_dict(SELECTOR_CHANGE_EVENT, &init) else {
            tracing::warn!(id = %self.id, "failed to build change event");
            return;
        };
        let _ = self.event_target().dispatch_event(&event);
    }

    fn force_text_input(&self) {
        if let DomElement::Input(input) = &self.element {
            input.set_type(TEXT_INPUT_TYPE);
        }
    }
}

/// Resolves element ids against the live document.
#[derive(Debug)]
pub(super) struct DomLookup {
    document: Document,
    row_selector: Rc<str>,
}

impl DomLookup {
    pub(super) fn new(document: Document, row_class: &str) -> Self {
        Self {
            document,
            row_selector: Rc::from(format!(".{row_class}")),
        }
    }
}

impl ControlLookup for DomLookup {
    type Control = DomControl;

    fn find(&self, id: &str) -> Option<DomControl> {
        let element = self.document.get_element_by_id(id)?;
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => DomElement::Input(input),
            Err(element) => match element.dyn_into::<HtmlSelectElement>() {
                Ok(select) => DomElement::Select(select),
                Err(element) => match element.dyn_into::<HtmlTextAreaElement>() {
                    Ok(textarea) => DomElement::TextArea(textarea),
                    Err(element) => {
                        tracing::warn!(
                            id,
                            tag = %element.tag_name(),
                            "element is not a form control; skipping"
                        );
                        return None;
                    }
                },
            },
        };
        Some(DomControl {
            id: id.to_string(),
            element,
            row_selector: Rc::clone(&self.row_selector),
        })
    }
}
