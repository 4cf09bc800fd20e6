use crate::gate::RowOpacity;

/// A form element as the behaviors see it.
///
/// Methods take `&self` because browser element handles are shared references
/// with interior mutability; implementations must treat every call as
/// best-effort and never fail.
pub trait FormControl {
    /// Current value. A select with nothing chosen reports an empty string.
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
    /// Drops the current value or selection entirely.
    fn clear_value(&self);
    fn set_disabled(&self, disabled: bool);
    fn set_read_only(&self, read_only: bool);
    /// Sets the opacity of the row that wraps this control, if there is one.
    fn set_row_opacity(&self, opacity: RowOpacity);
    /// Announces a programmatic value change so dependent widgets resync.
    fn dispatch_change(&self);
    /// Switches a numeric input to a plain text input.
    fn force_text_input(&self);
}

/// Resolves element ids to controls. Missing ids yield `None`.
pub trait ControlLookup {
    type Control: FormControl;

    fn find(&self, id: &str) -> Option<Self::Control>;
}

impl<T: FormControl + ?Sized> FormControl for std::rc::Rc<T> {
    fn value(&self) -> String {
        (**self).value()
    }

    fn set_value(&self, value: &str) {
        (**self).set_value(value);
    }

    fn clear_value(&self) {
        (**self).clear_value();
    }

    fn set_disabled(&self, disabled: bool) {
        (**self).set_disabled(disabled);
    }

    fn set_read_only(&self, read_only: bool) {
        (**self).set_read_only(read_only);
    }

    fn set_row_opacity(&self, opacity: RowOpacity) {
        (**self).set_row_opacity(opacity);
    }

    fn dispatch_change(&self) {
        (**self).dispatch_change();
    }

    fn force_text_input(&self) {
        (**self).force_text_input();
    }
}
